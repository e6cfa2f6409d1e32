use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Identifies the database configuration a mapping belongs to.
///
/// Mappings sharing a configuration are linked into one inheritance graph.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DatabaseConfig(Arc<str>);

impl DatabaseConfig {
    pub fn new(name: impl AsRef<str>) -> DatabaseConfig {
        DatabaseConfig(name.as_ref().into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DatabaseConfig {
    fn from(value: &str) -> Self {
        DatabaseConfig::new(value)
    }
}

impl From<String> for DatabaseConfig {
    fn from(value: String) -> Self {
        DatabaseConfig(value.into())
    }
}

impl From<&DatabaseConfig> for DatabaseConfig {
    fn from(value: &DatabaseConfig) -> Self {
        value.clone()
    }
}

impl From<DatabaseConfig> for String {
    fn from(value: DatabaseConfig) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatabaseConfig({})", self.0)
    }
}
