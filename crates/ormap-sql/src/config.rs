use serde::{Deserialize, Serialize};

/// Settings applied by a [`Select`](crate::Select) builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length tag attached to every string parameter. The tag is not derived
    /// from the value.
    pub default_string_length: usize,

    /// Prefix used by [`Select::filter_default`](crate::Select::filter_default)
    pub parameter_prefix: String,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_string_length(mut self, length: usize) -> Self {
        self.default_string_length = length;
        self
    }

    pub fn parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_string_length: 4,
            parameter_prefix: "@".to_string(),
        }
    }
}
