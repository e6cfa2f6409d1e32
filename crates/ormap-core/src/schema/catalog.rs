use super::{ObjectType, TypeDescriptor};

use indexmap::{IndexMap, IndexSet};

/// An in-memory [`TypeDescriptor`].
///
/// Types are registered up front with [`TypeDef`]s. Supertypes and
/// interfaces that were never registered are treated as leaf types: they
/// have no supertype and implement nothing.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: IndexMap<ObjectType, TypeDef>,

    /// Universal root, excluded from supertype walks
    root: Option<ObjectType>,
}

/// Declaration of one domain type.
#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: ObjectType,

    pub kind: TypeKind,

    /// Direct supertype. Always `None` for interfaces.
    pub supertype: Option<ObjectType>,

    /// Directly declared interfaces (for an interface: its super-interfaces)
    pub interfaces: Vec<ObjectType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeDef {
    pub fn class(name: impl Into<ObjectType>) -> TypeDef {
        TypeDef {
            name: name.into(),
            kind: TypeKind::Class,
            supertype: None,
            interfaces: vec![],
        }
    }

    pub fn interface(name: impl Into<ObjectType>) -> TypeDef {
        TypeDef {
            name: name.into(),
            kind: TypeKind::Interface,
            supertype: None,
            interfaces: vec![],
        }
    }

    pub fn extends(mut self, supertype: impl Into<ObjectType>) -> TypeDef {
        self.supertype = Some(supertype.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<ObjectType>) -> TypeDef {
        self.interfaces.push(interface.into());
        self
    }
}

impl TypeCatalog {
    pub fn new() -> TypeCatalog {
        TypeCatalog::default()
    }

    /// Names the universal root type. Classes declared without a supertype
    /// implicitly derive from it.
    pub fn with_root(root: impl Into<ObjectType>) -> TypeCatalog {
        let root = root.into();
        let mut catalog = TypeCatalog {
            types: IndexMap::new(),
            root: Some(root.clone()),
        };
        catalog.insert(TypeDef::class(root));
        catalog
    }

    /// Registers a type, replacing any earlier definition with the same name.
    pub fn insert(&mut self, mut def: TypeDef) -> &mut Self {
        if def.kind == TypeKind::Class && def.supertype.is_none() {
            if let Some(root) = &self.root {
                if *root != def.name {
                    def.supertype = Some(root.clone());
                }
            }
        }

        self.types.insert(def.name.clone(), def);
        self
    }

    /// Returns the declaration of `ty`, if it was registered.
    pub fn get(&self, ty: &ObjectType) -> Option<&TypeDef> {
        self.types.get(ty)
    }

    pub fn root(&self) -> Option<&ObjectType> {
        self.root.as_ref()
    }

    fn collect_interfaces(&self, ty: &ObjectType, dst: &mut IndexSet<ObjectType>) {
        let Some(def) = self.get(ty) else {
            return;
        };

        for interface in &def.interfaces {
            if dst.insert(interface.clone()) {
                self.collect_interfaces(interface, dst);
            }
        }
    }
}

impl TypeDescriptor for TypeCatalog {
    fn supertype(&self, ty: &ObjectType) -> Option<ObjectType> {
        self.get(ty)?.supertype.clone()
    }

    fn interfaces(&self, ty: &ObjectType) -> Vec<ObjectType> {
        let mut interfaces = IndexSet::new();

        self.collect_interfaces(ty, &mut interfaces);
        for supertype in self.supertypes(ty) {
            self.collect_interfaces(&supertype, &mut interfaces);
        }

        interfaces.into_iter().collect()
    }

    fn is_root(&self, ty: &ObjectType) -> bool {
        self.root.as_ref() == Some(ty)
    }
}

impl FromIterator<TypeDef> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDef>>(iter: I) -> Self {
        let mut catalog = TypeCatalog::new();
        for def in iter {
            catalog.insert(def);
        }
        catalog
    }
}
