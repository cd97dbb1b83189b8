use alloc::collections::TryReserveError;
use core::fmt::Debug;

use crate::hash_table::Entry;
use crate::hash_table::HashTable;
use crate::hasher::HashFunction;
use crate::hasher::StdHash;

#[cfg(any(test, feature = "stats"))]
use crate::hash_table::ChainStats;

/// A hash set implemented as a separately-chained [`HashTable`].
///
/// `ChainedHashSet<T, H>` stores values of type `T: Eq` and hashes them with
/// an injected [`HashFunction`] `H`. That can be a closure `Fn(&T) -> u64`
/// or a [`StdHash`] wrapping any `BuildHasher`, which is the default.
///
/// The set starts with [`DEFAULT_CAPACITY`] buckets and grows to
/// `capacity * 2 + 1` buckets whenever adding a new element would push the
/// load factor above 0.8. Besides the usual set operations it exposes the
/// shape of the table through [`bucket_count`] and [`bucket_contains`].
///
/// Cloning deep-copies every bucket; the clone has the same capacity and the
/// same bucket contents and shares nothing with the original.
///
/// [`DEFAULT_CAPACITY`]: crate::hash_table::DEFAULT_CAPACITY
/// [`bucket_count`]: ChainedHashSet::bucket_count
/// [`bucket_contains`]: ChainedHashSet::bucket_contains
#[derive(Clone)]
pub struct ChainedHashSet<T, H = StdHash> {
    table: HashTable<T>,
    hasher: H,
}

impl<T, H> PartialEq for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }
}

impl<T, H> Eq for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
}

impl<T, H> Debug for ChainedHashSet<T, H>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.table.iter()).finish()
    }
}

impl<T, H> ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
    /// Creates an empty set that hashes elements with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let set = ChainedHashSet::with_hasher(|v: &u32| *v as u64);
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 10);
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            table: HashTable::new(),
            hasher,
        }
    }

    /// Creates an empty set with `capacity` buckets that hashes elements with
    /// `hasher`.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Returns the hash function used by the set.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of elements in the set. Same as [`len`].
    ///
    /// [`len`]: ChainedHashSet::len
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `len / capacity`. Never above 0.8 after an insertion.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes all elements from the set, keeping the bucket count.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Adds a value to the set. Has no effect if an equal value is already
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<&str> = ChainedHashSet::new();
    /// set.add("cat");
    /// set.add("cat");
    /// set.add("dog");
    /// assert_eq!(set.size(), 2);
    /// assert!(set.contains(&"cat"));
    /// assert!(!set.contains(&"bird"));
    /// ```
    pub fn add(&mut self, value: T) {
        self.insert(value);
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain this value, `true` is returned.
    /// - If the set already contained this value, `false` is returned.
    ///
    /// # Panics
    ///
    /// Panics if growing the bucket array fails to allocate. The set is left
    /// unchanged in that case; use [`try_insert`] to handle it instead.
    ///
    /// [`try_insert`]: ChainedHashSet::try_insert
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.hasher.hash_element(&value);
        match self.table.entry(hash, |v| v == &value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Adds a value to the set, reporting allocation failure of the grown
    /// bucket array instead of panicking.
    ///
    /// On error the set is exactly as it was before the call, and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<u8> = ChainedHashSet::new();
    /// assert_eq!(set.try_insert(1), Ok(true));
    /// assert_eq!(set.try_insert(1), Ok(false));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<bool, TryReserveError> {
        let hash = self.hasher.hash_element(&value);
        match self.table.entry(hash, |v| v == &value) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => entry.try_insert(value).map(|_| true),
        }
    }

    /// Returns `true` if the set contains a value.
    ///
    /// Only the one chain the value hashes to is scanned.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set, if any, that is equal to
    /// the given value.
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.hasher.hash_element(value);
        self.table.find(hash, |v| v == value)
    }

    /// Removes a value from the set. Returns whether the value was present.
    ///
    /// The bucket array is never shrunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), true);
    /// assert_eq!(set.remove(&1), false);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the
    /// given one.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hasher.hash_element(value);
        self.table.remove(hash, |v| v == value)
    }

    /// Returns the bucket index `value` hashes to under the current capacity.
    pub fn bucket_of(&self, value: &T) -> usize {
        self.table.bucket_index(self.hasher.hash_element(value))
    }

    /// Returns the number of elements stored in bucket `index`.
    ///
    /// Returns 0 if `index` is not below [`capacity`].
    ///
    /// [`capacity`]: ChainedHashSet::capacity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_hasher(|v: &u64| *v);
    /// set.add(3);
    /// set.add(13);
    /// assert_eq!(set.bucket_count(3), 2);
    /// assert_eq!(set.bucket_count(4), 0);
    /// assert_eq!(set.bucket_count(100), 0);
    /// ```
    pub fn bucket_count(&self, index: usize) -> usize {
        self.table.bucket_len(index)
    }

    /// Returns `true` if `value` is stored in bucket `index` specifically.
    ///
    /// Returns `false` if `index` is out of range, and for any bucket other
    /// than the one the value hashes to, even when the value is in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_hasher(|v: &u64| *v);
    /// set.add(3);
    /// assert!(set.bucket_contains(&3, 3));
    /// assert!(!set.bucket_contains(&3, 4));
    /// assert!(!set.bucket_contains(&3, 10));
    /// ```
    pub fn bucket_contains(&self, value: &T, index: usize) -> bool {
        self.table.bucket_find(index, |v| v == value).is_some()
    }

    /// Returns an iterator over the values of the set, in no particular
    /// order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns chain-length statistics for the underlying table.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> ChainStats {
        self.table.chain_stats()
    }
}

impl<T, H> ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T> + Clone,
{
    /// Moves every element into a new set, leaving `self` empty with the
    /// default bucket count and the same hash function.
    ///
    /// The bucket array changes owner without any element being copied or
    /// rehashed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut a: ChainedHashSet<i32> = (0..20).collect();
    /// let b = a.take_all();
    ///
    /// assert_eq!(b.len(), 20);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 10);
    ///
    /// a.insert(5);
    /// assert!(a.contains(&5));
    /// ```
    pub fn take_all(&mut self) -> Self {
        let hasher = self.hasher.clone();
        core::mem::replace(self, Self::with_hasher(hasher))
    }
}

impl<T, H> ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T> + Default,
{
    /// Creates an empty set with the default hash function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(H::default())
    }

    /// Creates an empty set with `capacity` buckets and the default hash
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::with_capacity(100);
    /// assert_eq!(set.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }
}

impl<T, H> Default for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the values of a `ChainedHashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A consuming iterator over the values of a `ChainedHashSet`.
pub struct IntoIter<T> {
    inner: crate::hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, H> IntoIterator for ChainedHashSet<T, H> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, T, H> IntoIterator for &'a ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, H> FromIterator<T> for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ChainedHashSet::new();
        set.extend(iter);
        set
    }
}

impl<T, H> Extend<T> for ChainedHashSet<T, H>
where
    T: Eq,
    H: HashFunction<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            Self {
                k1: OsRng.try_next_u64().unwrap_or(0),
                k2: OsRng.try_next_u64().unwrap_or(0),
            }
        }
    }

    type SipSet<T> = ChainedHashSet<T, StdHash<SipHashBuilder>>;

    fn identity(v: &u64) -> u64 {
        *v
    }

    fn assert_bucket_consistency<T: Eq, H: HashFunction<T>>(set: &ChainedHashSet<T, H>) {
        let mut total = 0;
        for i in 0..set.capacity() {
            total += set.bucket_count(i);
        }
        assert_eq!(total, set.size());

        for value in set.iter() {
            let home = set.bucket_of(value);
            for i in 0..set.capacity() {
                assert_eq!(set.bucket_contains(value, i), i == home);
            }
        }
    }

    #[test]
    fn test_new_and_with_hasher() {
        let set: SipSet<i32> = ChainedHashSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 10);

        let set2 = SipSet::<i32>::with_hasher(StdHash::new(SipHashBuilder::default()));
        assert!(set2.is_empty());
        assert_eq!(set2.size(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let set: SipSet<i32> = ChainedHashSet::with_capacity(100);
        assert_eq!(set.capacity(), 100);
        assert!(set.is_empty());

        let set2 = ChainedHashSet::<u64, _>::with_capacity_and_hasher(0, identity);
        assert_eq!(set2.capacity(), 1);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set: SipSet<i32> = ChainedHashSet::new();

        assert!(set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert!(set.contains(&1));

        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1));

        assert!(set.insert(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
    }

    #[test]
    fn cat_cat_dog() {
        let mut set: SipSet<String> = ChainedHashSet::new();
        set.add("cat".to_string());
        set.add("cat".to_string());
        set.add("dog".to_string());

        assert_eq!(set.size(), 2);
        assert!(set.contains(&"cat".to_string()));
        assert!(!set.contains(&"bird".to_string()));
    }

    #[test]
    fn add_is_idempotent() {
        let mut once: SipSet<&str> = ChainedHashSet::new();
        let mut twice: SipSet<&str> = ChainedHashSet::new();
        for word in ["a", "b", "c", "d", "e", "f", "g", "h", "i"] {
            once.add(word);
            twice.add(word);
            twice.add(word);
            assert_eq!(once.size(), twice.size());
            assert_eq!(once.contains(&word), twice.contains(&word));
            assert_eq!(once.capacity(), twice.capacity());
        }
    }

    #[test]
    fn ninth_insert_grows_to_twenty_one() {
        let mut set: SipSet<u32> = ChainedHashSet::new();
        for i in 0..8 {
            set.add(i);
        }
        assert_eq!(set.capacity(), 10);
        assert_eq!(set.load_factor(), 0.8);

        set.add(8);
        assert_eq!(set.capacity(), 21);
        assert_eq!(set.size(), 9);
        for i in 0..9 {
            assert!(set.contains(&i));
        }
        assert_bucket_consistency(&set);
    }

    #[test]
    fn load_factor_bound_holds_after_every_add() {
        let mut set: SipSet<u32> = ChainedHashSet::new();
        for i in 0..1000 {
            let before = set.capacity();
            set.add(i);
            let after = set.capacity();
            assert!(after == before || after == before * 2 + 1);
            assert!(set.load_factor() <= 0.8, "load factor {} at {}", set.load_factor(), i);
        }
    }

    #[test]
    fn bucket_placement_with_identity_hash() {
        let mut set = ChainedHashSet::with_hasher(identity);
        for v in [0u64, 10, 20, 5] {
            set.add(v);
        }
        assert_eq!(set.capacity(), 10);
        assert_eq!(set.bucket_count(0), 3);
        assert_eq!(set.bucket_count(5), 1);
        assert_eq!(set.bucket_count(1), 0);
        assert!(set.bucket_contains(&20, 0));
        assert!(!set.bucket_contains(&20, 5));
        assert!(!set.bucket_contains(&20, 10));
        assert!(!set.bucket_contains(&7, 7));

        for v in 100..105u64 {
            set.add(v);
        }
        // 9 elements grew the table to 21 buckets.
        assert_eq!(set.capacity(), 21);
        assert_eq!(set.bucket_count(0), 1);
        assert!(set.bucket_contains(&20, 20));
        assert!(set.bucket_contains(&10, 10));
        assert_bucket_consistency(&set);
    }

    #[test]
    fn closure_hasher_with_collisions() {
        let mut set = ChainedHashSet::with_hasher(|_: &String| 7u64);
        for i in 0..100 {
            assert!(set.insert(i.to_string()));
        }
        assert_eq!(set.len(), 100);
        assert_eq!(set.bucket_count(set.bucket_of(&"0".to_string())), 100);
        for i in 0..100 {
            assert!(set.contains(&i.to_string()));
        }
        assert!(!set.contains(&"100".to_string()));
        assert_bucket_consistency(&set);
    }

    #[test]
    fn test_remove_and_take() {
        let mut set: SipSet<i32> = ChainedHashSet::new();
        set.insert(1);
        set.insert(2);
        set.insert(3);

        assert!(set.remove(&2));
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&2));
        assert!(!set.remove(&2));

        assert_eq!(set.take(&1), Some(1));
        assert_eq!(set.take(&1), None);
        assert_eq!(set.len(), 1);
        assert_bucket_consistency(&set);
    }

    #[test]
    fn test_get() {
        let mut set: SipSet<i32> = ChainedHashSet::new();
        set.insert(42);

        assert_eq!(set.get(&42), Some(&42));
        assert_eq!(set.get(&1), None);
    }

    #[test]
    fn test_clear() {
        let mut set: SipSet<i32> = ChainedHashSet::new();
        for i in 0..30 {
            set.insert(i);
        }
        let capacity = set.capacity();

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        for i in 0..30 {
            assert!(!set.contains(&i));
        }
    }

    #[test]
    fn test_try_insert() {
        let mut set: SipSet<i32> = ChainedHashSet::new();
        for i in 0..9 {
            assert_eq!(set.try_insert(i), Ok(true));
        }
        assert_eq!(set.try_insert(0), Ok(false));
        assert_eq!(set.capacity(), 21);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let mut set: SipSet<i32> = ChainedHashSet::new();
        set.insert(1);
        set.insert(2);
        set.insert(3);

        assert_eq!(set.iter().len(), 3);
        let mut values: Vec<i32> = (&set).into_iter().copied().collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);

        let mut owned: Vec<i32> = set.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut set: SipSet<i32> = (0..5).collect();
        assert_eq!(set.len(), 5);

        set.extend(3..10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.capacity(), 21);
    }

    #[test]
    fn copy_is_independent() {
        let mut a: SipSet<String> = ChainedHashSet::new();
        for s in ["x", "y", "z"] {
            a.add(s.to_string());
        }

        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), a.capacity());
        for i in 0..a.capacity() {
            assert_eq!(a.bucket_count(i), b.bucket_count(i));
        }

        b.add("w".to_string());
        assert!(b.contains(&"w".to_string()));
        assert!(!a.contains(&"w".to_string()));
        assert_eq!(a.size(), 3);

        a.remove(&"x".to_string());
        assert!(b.contains(&"x".to_string()));
    }

    #[test]
    fn clone_keeps_shape_after_growth() {
        let mut a = ChainedHashSet::with_hasher(identity);
        for v in 0..50u64 {
            a.add(v * 3);
        }
        let b = a.clone();
        assert_eq!(a.capacity(), b.capacity());
        for i in 0..a.capacity() {
            assert_eq!(a.bucket_count(i), b.bucket_count(i));
        }
        assert_bucket_consistency(&b);
    }

    #[test]
    fn clone_from_overwrites() {
        let mut a: SipSet<i32> = (0..30).collect();
        let b: SipSet<i32> = (100..103).collect();

        a.clone_from(&b);
        assert_eq!(a, b);
        assert_eq!(a.capacity(), b.capacity());
        assert!(!a.contains(&0));
    }

    #[test]
    fn move_transfers_contents() {
        let mut a: SipSet<String> = ChainedHashSet::new();
        for i in 0..20 {
            a.add(i.to_string());
        }
        let capacity = a.capacity();

        let b = a;
        assert_eq!(b.len(), 20);
        assert_eq!(b.capacity(), capacity);
        for i in 0..20 {
            assert!(b.contains(&i.to_string()));
        }
    }

    #[test]
    fn take_all_leaves_usable_source() {
        let mut a: SipSet<String> = ChainedHashSet::new();
        for i in 0..20 {
            a.add(i.to_string());
        }
        let capacity = a.capacity();

        let b = a.take_all();
        assert_eq!(b.len(), 20);
        assert_eq!(b.capacity(), capacity);
        for i in 0..20 {
            assert!(b.contains(&i.to_string()));
        }

        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert!(!a.contains(&"0".to_string()));
        a.add("fresh".to_string());
        assert!(a.contains(&"fresh".to_string()));
        assert!(!b.contains(&"fresh".to_string()));
        drop(a);
        assert_eq!(b.len(), 20);
    }

    #[test]
    fn std_take_uses_default() {
        let mut a: SipSet<i32> = (0..12).collect();
        let b = core::mem::take(&mut a);
        assert_eq!(b.len(), 12);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let a: SipSet<i32> = (0..5).collect();
        let mut b: SipSet<i32> = ChainedHashSet::with_capacity(100);
        b.extend(0..5);
        assert_eq!(a, b);

        b.insert(6);
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_set() {
        let mut set = ChainedHashSet::with_hasher(identity);
        set.add(4u64);
        assert_eq!(alloc::format!("{:?}", set), "{4}");
    }

    #[test]
    fn test_chain_stats() {
        let mut set = ChainedHashSet::with_hasher(identity);
        for v in [1u64, 11, 21, 2] {
            set.add(v);
        }
        let stats = set.chain_stats();
        assert_eq!(stats.populated, 4);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.longest_chain, 3);
        assert_eq!(stats.empty_buckets, 8);
    }

    #[test]
    fn test_numeric_types() {
        let mut u8_set: SipSet<u8> = ChainedHashSet::new();
        let mut i32_set: SipSet<i32> = ChainedHashSet::new();

        for i in 0u8..=255u8 {
            u8_set.insert(i);
        }
        assert_eq!(u8_set.len(), 256);
        assert_bucket_consistency(&u8_set);

        for i in -50i32..50i32 {
            i32_set.insert(i);
        }
        assert_eq!(i32_set.len(), 100);
    }

    #[test]
    fn test_large_values() {
        let mut set: SipSet<String> = ChainedHashSet::new();

        for i in 0..100 {
            let large_string = "x".repeat(1000) + &i.to_string();
            assert!(set.insert(large_string.clone()));
            assert!(set.contains(&large_string))
        }

        assert_eq!(set.len(), 100);
    }
}
