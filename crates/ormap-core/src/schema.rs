mod catalog;
pub use catalog::{TypeCatalog, TypeDef, TypeKind};

mod database;
pub use database::DatabaseConfig;

mod mapping;
pub use mapping::Mapping;

mod object_type;
pub use object_type::ObjectType;

mod source;
pub use source::SourceInfo;

mod type_descriptor;
pub use type_descriptor::{Supertypes, TypeDescriptor};
