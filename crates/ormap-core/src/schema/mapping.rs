use super::{DatabaseConfig, ObjectType};

use std::fmt;

/// Binds one domain type to relational storage under one database
/// configuration.
///
/// A mapping is identified by the `(object_type, database)` pair. The same
/// object type may be mapped once per configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// The domain type being mapped
    pub object_type: ObjectType,

    /// Configuration this mapping belongs to
    pub database: DatabaseConfig,

    /// Relation the type is stored in. Defaults to the type name.
    pub table_name: String,

    /// Prepended to the table name when the relation is qualified
    pub prefix: String,

    /// Appended to the table name when the relation is qualified
    pub suffix: String,

    /// Relative position among mappings when relations are generated
    pub order: i32,
}

impl Mapping {
    pub fn new(object_type: impl Into<ObjectType>, database: impl Into<DatabaseConfig>) -> Mapping {
        let object_type = object_type.into();

        Mapping {
            table_name: object_type.name().to_string(),
            object_type,
            database: database.into(),
            prefix: String::new(),
            suffix: String::new(),
            order: 0,
        }
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Mapping {
        self.table_name = table_name.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Mapping {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Mapping {
        self.suffix = suffix.into();
        self
    }

    pub fn order(mut self, order: i32) -> Mapping {
        self.order = order;
        self
    }

    /// Table name with prefix and suffix applied.
    pub fn qualified_table_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.table_name, self.suffix)
    }

    /// Returns `true` if this mapping has the given identity.
    pub fn is(&self, object_type: &ObjectType, database: &DatabaseConfig) -> bool {
        self.object_type == *object_type && self.database == *database
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}{}{} ({})",
            self.object_type, self.prefix, self.table_name, self.suffix, self.database
        )
    }
}
