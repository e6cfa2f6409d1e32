use super::DatabaseConfig;

use serde::{Deserialize, Serialize};

/// Describes one data source the persistence layer can talk to.
///
/// The registry only reads `database` from it, to pick the mapping that
/// applies to the source. The remaining fields are carried for the
/// execution layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Name of the source
    pub name: String,

    /// Connection string handed to the driver
    #[serde(default)]
    pub connection: String,

    /// Driver or provider name
    #[serde(default)]
    pub provider: String,

    /// Configuration whose mappings apply to this source
    pub database: DatabaseConfig,

    /// Character(s) preceding placeholder names in statements
    #[serde(default = "default_parameter_prefix")]
    pub parameter_prefix: String,

    #[serde(default = "default_true")]
    pub readable: bool,

    #[serde(default = "default_true")]
    pub writable: bool,
}

fn default_parameter_prefix() -> String {
    "@".to_string()
}

fn default_true() -> bool {
    true
}

impl SourceInfo {
    pub fn new(name: impl Into<String>, database: impl Into<DatabaseConfig>) -> SourceInfo {
        SourceInfo {
            name: name.into(),
            connection: String::new(),
            provider: String::new(),
            database: database.into(),
            parameter_prefix: default_parameter_prefix(),
            readable: true,
            writable: true,
        }
    }

    pub fn connection(mut self, connection: impl Into<String>) -> SourceInfo {
        self.connection = connection.into();
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> SourceInfo {
        self.provider = provider.into();
        self
    }

    pub fn parameter_prefix(mut self, prefix: impl Into<String>) -> SourceInfo {
        self.parameter_prefix = prefix.into();
        self
    }

    pub fn read_only(mut self) -> SourceInfo {
        self.writable = false;
        self
    }
}
