use chrono::{NaiveDate, NaiveDateTime};

/// A value bound to a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double precision floating point
    F64(f64),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident ),+ ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f64 => F64,
    String => String,
    NaiveDate => Date,
    NaiveDateTime => DateTime
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
