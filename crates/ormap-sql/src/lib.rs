mod config;
pub use config::Config;

mod param;
pub use param::{ParamType, Parameter};

pub mod serializer;

mod select;
pub use select::{select, Direction, OrderBy, Select};

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;

pub use ormap_core::{Error, Result};
