use std::{fmt, sync::Arc};

/// Identity of a mapped domain type.
///
/// Two `ObjectType` values are equal when their names are equal. Cloning is a
/// reference count bump, so the identity can be stored in several indexes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectType(Arc<str>);

impl ObjectType {
    pub fn new(name: impl AsRef<str>) -> ObjectType {
        ObjectType(name.as_ref().into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        ObjectType::new(value)
    }
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        ObjectType(value.into())
    }
}

impl From<&ObjectType> for ObjectType {
    fn from(value: &ObjectType) -> Self {
        value.clone()
    }
}

impl AsRef<str> for ObjectType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectType({})", self.0)
    }
}
