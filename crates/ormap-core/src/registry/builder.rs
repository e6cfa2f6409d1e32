use super::Registry;
use crate::graph::{Graph, VertexId};
use crate::schema::{DatabaseConfig, Mapping, ObjectType, Supertypes, TypeDescriptor};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Collects mapping records and turns them into a [`Registry`].
#[derive(Debug, Default)]
pub struct Builder {
    /// `None` until a mapping source has been supplied
    mappings: Option<Vec<Mapping>>,
}

/// Used to track state while building the inheritance graph of one
/// configuration.
struct BuildStructure<'a, D: ?Sized> {
    types: &'a D,

    /// Mappings of the configuration, in input order. Vertex `i` of `graph`
    /// carries `partition[i]`.
    partition: &'a [Arc<Mapping>],

    /// First vertex mapping each object type. Later duplicates never become
    /// edge targets.
    lookup: HashMap<&'a ObjectType, VertexId>,

    graph: Graph<Arc<Mapping>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies mapping records. May be called several times; records are
    /// appended in call order.
    pub fn mappings(&mut self, mappings: impl IntoIterator<Item = Mapping>) -> &mut Self {
        self.mappings.get_or_insert_with(Vec::new).extend(mappings);
        self
    }

    pub fn mapping(&mut self, mapping: Mapping) -> &mut Self {
        self.mappings(Some(mapping))
    }

    pub fn build<D>(&self, types: &D) -> Result<Registry>
    where
        D: TypeDescriptor + ?Sized,
    {
        let Some(input) = &self.mappings else {
            return Err(Error::invalid_input("no mapping source was supplied"));
        };

        let mut seen = HashSet::new();
        for mapping in input {
            verify(mapping)?;

            if !seen.insert((&mapping.object_type, &mapping.database)) {
                log::warn!(
                    "{} is mapped more than once under {}; lookups use the first mapping",
                    mapping.object_type,
                    mapping.database
                );
            }
        }

        let mut mappings: IndexMap<ObjectType, Vec<Arc<Mapping>>> = IndexMap::new();
        let mut partitions: IndexMap<DatabaseConfig, Vec<Arc<Mapping>>> = IndexMap::new();

        for mapping in input {
            let mapping = Arc::new(mapping.clone());

            mappings
                .entry(mapping.object_type.clone())
                .or_default()
                .push(mapping.clone());

            partitions
                .entry(mapping.database.clone())
                .or_default()
                .push(mapping);
        }

        let structures: IndexMap<_, _> = partitions
            .iter()
            .map(|(database, partition)| {
                let graph = BuildStructure::new(types, partition).build();

                log::debug!(
                    "built structure for {database}; vertices={} edges={}",
                    graph.len(),
                    graph.edges().len()
                );

                (database.clone(), graph)
            })
            .collect();

        log::debug!(
            "mapping registry ready; mappings={} types={} databases={}",
            input.len(),
            mappings.len(),
            structures.len()
        );

        Ok(Registry {
            mappings,
            structures,
        })
    }
}

fn verify(mapping: &Mapping) -> Result<()> {
    if mapping.object_type.name().is_empty() {
        return Err(Error::invalid_input(format!(
            "mapping under {} has an empty object type",
            mapping.database
        )));
    }

    if mapping.database.name().is_empty() {
        return Err(Error::invalid_input(format!(
            "mapping of {} has an empty database configuration",
            mapping.object_type
        )));
    }

    Ok(())
}

impl<'a, D: TypeDescriptor + ?Sized> BuildStructure<'a, D> {
    fn new(types: &'a D, partition: &'a [Arc<Mapping>]) -> Self {
        let mut graph = Graph::new();
        let mut lookup = HashMap::new();

        for mapping in partition {
            let id = graph.add_vertex(mapping.clone());
            lookup.entry(&mapping.object_type).or_insert(id);
        }

        BuildStructure {
            types,
            partition,
            lookup,
            graph,
        }
    }

    fn build(mut self) -> Graph<Arc<Mapping>> {
        let types = self.types;
        let partition = self.partition;

        for (index, mapping) in partition.iter().enumerate() {
            let source = VertexId(index);

            // Link every mapped ancestor, not only the nearest one. Unmapped
            // ancestors are skipped but the walk continues past them.
            for ancestor in Supertypes::new(types, &mapping.object_type) {
                self.link(source, &ancestor);
            }

            for interface in types.interfaces(&mapping.object_type) {
                self.link(source, &interface);
            }
        }

        self.graph
    }

    fn link(&mut self, source: VertexId, target: &ObjectType) {
        if let Some(&sink) = self.lookup.get(target) {
            log::trace!(
                "{} -> {}",
                self.graph.vertex(source).data.object_type,
                target
            );
            self.graph.add_edge(source, sink);
        }
    }
}
