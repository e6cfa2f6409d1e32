mod builder;
pub use builder::Builder;

use crate::graph::Graph;
use crate::schema::{DatabaseConfig, Mapping, ObjectType, SourceInfo, TypeDescriptor};
use crate::Result;

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Graph returned for configurations that have no mappings.
static EMPTY_STRUCTURE: Graph<Arc<Mapping>> = Graph::new();

/// Tracks every mapping record and the inheritance structure among mapped
/// types, per database configuration.
///
/// The registry is built once and is immutable afterwards, so a shared
/// reference can be handed to any number of threads. Lookups for unknown
/// types or configurations return empty results instead of errors.
#[derive(Debug)]
pub struct Registry {
    /// Mappings grouped by object type, in input order
    mappings: IndexMap<ObjectType, Vec<Arc<Mapping>>>,

    /// One inheritance graph per configuration. Edges point from a mapping
    /// to the mappings of its mapped supertypes and interfaces.
    structures: IndexMap<DatabaseConfig, Graph<Arc<Mapping>>>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a registry from a complete set of mappings.
    pub fn new<D>(types: &D, mappings: impl IntoIterator<Item = Mapping>) -> Result<Registry>
    where
        D: TypeDescriptor + ?Sized,
    {
        Registry::builder().mappings(mappings).build(types)
    }

    /// Returns the inheritance graph for `database`, or an empty graph if no
    /// mapping belongs to it.
    pub fn structure(&self, database: &DatabaseConfig) -> &Graph<Arc<Mapping>> {
        self.structures.get(database).unwrap_or(&EMPTY_STRUCTURE)
    }

    /// Returns every mapping of `ty`, in input order.
    pub fn mappings(&self, ty: &ObjectType) -> &[Arc<Mapping>] {
        self.mappings.get(ty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the mapping of `ty` that applies to `source`.
    pub fn mapping(&self, ty: &ObjectType, source: &SourceInfo) -> Option<&Arc<Mapping>> {
        self.mappings(ty)
            .iter()
            .find(|mapping| mapping.is(ty, &source.database))
    }

    /// Iterates all mappings, grouped by object type.
    ///
    /// Groups appear in the order their type was first seen; mappings within
    /// a group keep input order. Every call starts from the beginning.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Mapping>> + '_ {
        self.mappings.values().flatten()
    }

    /// Object types with at least one mapping.
    pub fn object_types(&self) -> impl ExactSizeIterator<Item = &ObjectType> + '_ {
        self.mappings.keys()
    }

    /// Configurations with at least one mapping.
    pub fn databases(&self) -> impl ExactSizeIterator<Item = &DatabaseConfig> + '_ {
        self.structures.keys()
    }

    /// Total number of mappings.
    pub fn len(&self) -> usize {
        self.mappings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Arc<Mapping>;
    type IntoIter = std::iter::Flatten<indexmap::map::Values<'a, ObjectType, Vec<Arc<Mapping>>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.values().flatten()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mappers: ")?;

        let mut s = "";
        for group in self.mappings.values() {
            let mut names: Vec<_> = group.iter().map(|mapping| mapping.to_string()).collect();
            names.sort();

            f.write_str(s)?;
            f.write_str(&names.join(","))?;
            s = ",";
        }

        f.write_str("\n")
    }
}
