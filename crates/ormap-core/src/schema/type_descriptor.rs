use super::ObjectType;

use std::collections::HashSet;

/// Answers structural questions about domain types.
///
/// The registry never inspects types itself. Whatever discovers type
/// relationships (a reflection layer, generated code, a hand-written
/// catalog) supplies them through this trait.
pub trait TypeDescriptor {
    /// The direct supertype of `ty`, or `None` when `ty` has no supertype.
    fn supertype(&self, ty: &ObjectType) -> Option<ObjectType>;

    /// Every interface `ty` implements, including those inherited from its
    /// supertypes and from other interfaces.
    fn interfaces(&self, ty: &ObjectType) -> Vec<ObjectType>;

    /// Returns `true` for the universal root type all types derive from.
    ///
    /// The root is never treated as a mapped ancestor.
    fn is_root(&self, ty: &ObjectType) -> bool {
        let _ = ty;
        false
    }

    /// Iterates the supertype chain of `ty`, nearest first, stopping before
    /// the universal root.
    fn supertypes<'a>(&'a self, ty: &ObjectType) -> Supertypes<'a, Self>
    where
        Self: Sized,
    {
        Supertypes::new(self, ty)
    }
}

impl<T: TypeDescriptor + ?Sized> TypeDescriptor for &T {
    fn supertype(&self, ty: &ObjectType) -> Option<ObjectType> {
        (**self).supertype(ty)
    }

    fn interfaces(&self, ty: &ObjectType) -> Vec<ObjectType> {
        (**self).interfaces(ty)
    }

    fn is_root(&self, ty: &ObjectType) -> bool {
        (**self).is_root(ty)
    }
}

/// Iterator over a type's ancestors. See [`TypeDescriptor::supertypes`].
///
/// A descriptor reporting a cyclic chain is cut off at the first repeated
/// type.
pub struct Supertypes<'a, D: ?Sized> {
    descriptor: &'a D,
    next: Option<ObjectType>,
    seen: HashSet<ObjectType>,
}

impl<'a, D: TypeDescriptor + ?Sized> Supertypes<'a, D> {
    pub fn new(descriptor: &'a D, ty: &ObjectType) -> Supertypes<'a, D> {
        let mut seen = HashSet::new();
        seen.insert(ty.clone());

        Supertypes {
            descriptor,
            next: descriptor.supertype(ty),
            seen,
        }
    }
}

impl<D: TypeDescriptor + ?Sized> Iterator for Supertypes<'_, D> {
    type Item = ObjectType;

    fn next(&mut self) -> Option<ObjectType> {
        let current = self.next.take()?;

        if self.descriptor.is_root(&current) {
            return None;
        }

        if !self.seen.insert(current.clone()) {
            log::warn!("supertype chain revisits {current}; stopping walk");
            return None;
        }

        self.next = self.descriptor.supertype(&current);
        Some(current)
    }
}
