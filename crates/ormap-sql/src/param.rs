use crate::{Config, Value};

/// Storage type an execution layer binds a parameter as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Null,
    Bool,
    I32,
    I64,
    F64,

    /// Character data with a declared maximum length
    String { length: usize },

    Date,
    DateTime,
}

impl ParamType {
    /// Infers the binding type for `value`.
    pub fn infer(value: &Value, config: &Config) -> ParamType {
        match value {
            Value::Null => ParamType::Null,
            Value::Bool(_) => ParamType::Bool,
            Value::I32(_) => ParamType::I32,
            Value::I64(_) => ParamType::I64,
            Value::F64(_) => ParamType::F64,
            Value::String(_) => ParamType::String {
                length: config.default_string_length,
            },
            Value::Date(_) => ParamType::Date,
            Value::DateTime(_) => ParamType::DateTime,
        }
    }
}

/// A value bound to one placeholder of a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Placeholder token as it appears in the statement text, e.g. `@0`
    pub name: String,

    pub value: Value,

    pub ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, ty: ParamType) -> Parameter {
        Parameter {
            name: name.into(),
            value: value.into(),
            ty,
        }
    }

    /// A string parameter with an explicit length tag.
    pub fn string(name: impl Into<String>, value: impl Into<String>, length: usize) -> Parameter {
        let value: String = value.into();
        Parameter::new(name, value, ParamType::String { length })
    }
}
