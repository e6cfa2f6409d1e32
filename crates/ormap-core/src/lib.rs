mod error;
pub use error::{Error, IntoError};

pub mod graph;
pub use graph::Graph;

pub mod registry;
pub use registry::Registry;

pub mod schema;
pub use schema::{DatabaseConfig, Mapping, ObjectType, SourceInfo, TypeCatalog, TypeDescriptor};

/// A Result type alias that uses ormap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
