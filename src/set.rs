use crate::ChainedHashSet;
use crate::hasher::HashFunction;

/// The minimal set capability: add elements, test membership, and count.
///
/// Implementors make no ordering promises. Consumers such as
/// [`WordChecker`](crate::suggest::WordChecker) treat a `Set` purely as a
/// membership oracle.
pub trait Set<T> {
    /// Adds `element`; does nothing if an equal element is already present.
    fn add(&mut self, element: T);

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of distinct elements.
    fn size(&self) -> usize;
}

impl<T, H> Set<T> for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        self.get(element).is_some()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "std")]
impl<T, S> Set<T> for std::collections::HashSet<T, S>
where
    T: Eq + core::hash::Hash,
    S: core::hash::BuildHasher,
{
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        std::collections::HashSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
