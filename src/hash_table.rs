//! The raw separately-chained hash table behind [`ChainedHashSet`].
//!
//! [`ChainedHashSet`]: crate::ChainedHashSet

use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::fmt::Debug;

/// The number of buckets a table starts with when none is requested.
pub const DEFAULT_CAPACITY: usize = 10;

/// Returns `true` if holding `populated` entries in `capacity` buckets would
/// exceed the 0.8 load factor.
///
/// Integer form of `populated / capacity > 0.8`, so that the boundary
/// (8 entries in 10 buckets) is exact.
#[inline(always)]
fn exceeds_max_load(populated: usize, capacity: usize) -> bool {
    (populated as u128) * 5 > (capacity as u128) * 4
}

#[inline(always)]
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_mul(2)
        .and_then(|c| c.checked_add(1))
        .expect("bucket count overflow")
}

type Link<V> = Option<Box<Node<V>>>;

struct Node<V> {
    value: V,
    hash: u64,
    next: Link<V>,
}

/// Allocates `capacity` empty buckets, reporting allocation failure instead
/// of aborting.
fn try_alloc_buckets<V>(capacity: usize) -> Result<Box<[Link<V>]>, TryReserveError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity)?;
    buckets.resize_with(capacity, || None);
    Ok(buckets.into_boxed_slice())
}

fn alloc_buckets<V>(capacity: usize) -> Box<[Link<V>]> {
    match try_alloc_buckets(capacity) {
        Ok(buckets) => buckets,
        Err(err) => panic!("failed to allocate {capacity} buckets: {err}"),
    }
}

/// Drops a chain node by node so a long chain cannot recurse through `Box`'s
/// drop glue.
fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Chain-length statistics for a [`HashTable`].
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Buckets whose chain is empty
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// `chain_histogram[n]` is the number of buckets holding exactly `n`
    /// entries.
    pub chain_histogram: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ChainStats {
    /// Mean chain length over the non-empty buckets.
    pub fn mean_occupied_chain(&self) -> f64 {
        let occupied = self.capacity - self.empty_buckets;
        if occupied == 0 {
            0.0
        } else {
            self.populated as f64 / occupied as f64
        }
    }

    /// Pretty-print the statistics and a horizontal chain-length histogram.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Chained Table Statistics ===");
        println!(
            "Population: {}/{} buckets ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Empty buckets: {} ({:.2}%)",
            self.empty_buckets,
            if self.capacity == 0 {
                0.0
            } else {
                self.empty_buckets as f64 / self.capacity as f64 * 100.0
            }
        );
        println!(
            "Longest chain: {}, mean occupied chain: {:.2}",
            self.longest_chain,
            self.mean_occupied_chain()
        );

        let max = self.chain_histogram.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return;
        }
        let max_bar = 60usize;
        for (len, &count) in self.chain_histogram.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", len, "█".repeat(width), count);
        }
    }
}

/// A hash table using separate chaining.
///
/// `HashTable<V>` stores values of type `V` in an array of singly-linked
/// chains. Like the raw tables in other hashing crates, it does not know how
/// to hash or compare `V`: every operation takes the value's precomputed hash
/// and an equality predicate. The hash is cached in each node, so growth
/// never needs to hash a value again.
///
/// The table starts with [`DEFAULT_CAPACITY`] buckets. When inserting a new
/// value would push the load factor above 0.8 the bucket array grows to
/// `capacity * 2 + 1` and every node is relocated.
///
/// ## Example
///
/// ```rust
/// use chain_hash::hash_table::Entry;
/// use chain_hash::hash_table::HashTable;
///
/// let mut table = HashTable::new();
/// let hash = 42;
///
/// match table.entry(hash, |v: &&str| *v == "answer") {
///     Entry::Vacant(entry) => {
///         entry.insert("answer");
///     }
///     Entry::Occupied(_) => unreachable!(),
/// }
///
/// assert_eq!(table.find(hash, |v| *v == "answer"), Some(&"answer"));
/// assert_eq!(table.bucket_len(hash as usize % table.capacity()), 1);
/// ```
pub struct HashTable<V> {
    buckets: Box<[Link<V>]>,
    populated: usize,
}

impl<V> HashTable<V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// A capacity of zero is raised to one; the bucket count is never zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 100);
    ///
    /// let table: HashTable<String> = HashTable::with_capacity(0);
    /// assert_eq!(table.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: alloc_buckets(capacity.max(1)),
            populated: 0,
        }
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.capacity() as f64
    }

    /// Returns the bucket a value with `hash` belongs to.
    #[inline]
    pub fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    fn chain(&self, index: usize) -> impl Iterator<Item = &Node<V>> {
        let mut link = self.buckets[index].as_deref();
        core::iter::from_fn(move || {
            let node = link?;
            link = node.next.as_deref();
            Some(node)
        })
    }

    /// Position of the matching value within bucket `index`'s chain.
    fn chain_position(&self, index: usize, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        self.chain(index)
            .position(|node| node.hash == hash && eq(&node.value))
    }

    fn value_at_mut(&mut self, index: usize, depth: usize) -> Option<&mut V> {
        let mut node = self.buckets[index].as_deref_mut()?;
        for _ in 0..depth {
            node = node.next.as_deref_mut()?;
        }
        Some(&mut node.value)
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// Only the chain for `hash` is scanned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(7, |v: &u32| *v == 70).or_insert(70);
    ///
    /// assert_eq!(table.find(7, |v| *v == 70), Some(&70));
    /// assert_eq!(table.find(7, |v| *v == 71), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        self.chain(self.bucket_index(hash))
            .find(|node| node.hash == hash && eq(&node.value))
            .map(|node| &node.value)
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    ///
    /// The value must keep hashing to the same `hash` and compare the same way.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.bucket_index(hash);
        let depth = self.chain_position(index, hash, eq)?;
        self.value_at_mut(index, depth)
    }

    /// Gets the entry for a value with the given hash.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// assert!(matches!(table.entry(1, |v: &i32| *v == 1), Entry::Vacant(_)));
    /// table.entry(1, |v: &i32| *v == 1).or_insert(1);
    /// assert!(matches!(table.entry(1, |v: &i32| *v == 1), Entry::Occupied(_)));
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        let index = self.bucket_index(hash);
        match self.chain_position(index, hash, eq) {
            Some(depth) => match self.value_at_mut(index, depth) {
                Some(value) => Entry::Occupied(OccupiedEntry { value }),
                None => unreachable!("chain shorter than located position"),
            },
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Removes a value, returning it if present.
    ///
    /// The bucket array is never shrunk.
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.bucket_index(hash);
        let depth = self.chain_position(index, hash, eq)?;

        let mut link = &mut self.buckets[index];
        for _ in 0..depth {
            link = &mut link.as_mut()?.next;
        }
        let mut node = link.take()?;
        *link = node.next.take();
        self.populated -= 1;

        Some(node.value)
    }

    /// Removes every value, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
        self.populated = 0;
    }

    /// Returns the number of values stored in bucket `index`.
    ///
    /// Returns 0 if `index` is out of range.
    pub fn bucket_len(&self, index: usize) -> usize {
        if index >= self.capacity() {
            return 0;
        }
        self.chain(index).count()
    }

    /// Searches only bucket `index` for a value matching `eq`.
    ///
    /// Returns `None` if `index` is out of range, even when a matching value
    /// is stored in a different bucket.
    pub fn bucket_find(&self, index: usize, eq: impl Fn(&V) -> bool) -> Option<&V> {
        if index >= self.capacity() {
            return None;
        }
        self.chain(index)
            .find(|node| eq(&node.value))
            .map(|node| &node.value)
    }

    /// Returns an iterator over all values, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.populated,
        }
    }

    /// Grows the bucket array if inserting one more value would exceed the
    /// load factor.
    ///
    /// Nothing is mutated unless the new bucket array was allocated.
    fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        let capacity = self.capacity();
        if !exceeds_max_load(self.populated + 1, capacity) {
            return Ok(());
        }
        self.try_grow_to(grown_capacity(capacity))
    }

    /// Replaces the bucket array with one of `new_capacity` buckets.
    ///
    /// On allocation failure the table is untouched.
    fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        let new_buckets = try_alloc_buckets(new_capacity)?;

        #[cfg(feature = "tracing")]
        let old_capacity = self.capacity();

        self.rehash_into(new_buckets);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            old_capacity,
            new_capacity,
            populated = self.populated,
            "grew bucket array"
        );

        Ok(())
    }

    /// Moves every node into `new_buckets`, which then replaces the current
    /// bucket array.
    fn rehash_into(&mut self, new_buckets: Box<[Link<V>]>) {
        let mut old_buckets = core::mem::replace(&mut self.buckets, new_buckets);
        let new_capacity = self.buckets.len() as u64;

        let mut relocated = 0;
        for bucket in old_buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut node) = link {
                link = node.next.take();
                let slot = &mut self.buckets[(node.hash % new_capacity) as usize];
                node.next = slot.take();
                *slot = Some(node);
                relocated += 1;
            }
        }

        debug_assert_eq!(relocated, self.populated);
    }

    fn insert_unique(&mut self, hash: u64, value: V) -> &mut V {
        let index = self.bucket_index(hash);
        let slot = &mut self.buckets[index];
        let next = slot.take();
        self.populated += 1;

        &mut slot.insert(Box::new(Node { value, hash, next })).value
    }

    /// Returns chain-length statistics for the current table state.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> ChainStats {
        let lengths: Vec<usize> = (0..self.capacity()).map(|i| self.bucket_len(i)).collect();
        let longest_chain = lengths.iter().copied().max().unwrap_or(0);

        let mut chain_histogram = alloc::vec![0usize; longest_chain + 1];
        for &len in &lengths {
            chain_histogram[len] += 1;
        }

        ChainStats {
            populated: self.populated,
            capacity: self.capacity(),
            empty_buckets: chain_histogram[0],
            longest_chain,
            load_factor: self.load_factor(),
            chain_histogram,
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for HashTable<V> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    /// Deep-copies every bucket, keeping each value in the same bucket and
    /// at the same position within its chain.
    fn clone(&self) -> Self {
        let mut buckets = alloc_buckets(self.capacity());

        for (index, slot) in buckets.iter_mut().enumerate() {
            let mut tail = slot;
            for node in self.chain(index) {
                let copy = tail.insert(Box::new(Node {
                    value: node.value.clone(),
                    hash: node.hash,
                    next: None,
                }));
                tail = &mut copy.next;
            }
        }

        Self {
            buckets,
            populated: self.populated,
        }
    }
}

impl<V: Debug> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Chain<'a, V>(&'a HashTable<V>, usize);

        impl<V: Debug> Debug for Chain<'_, V> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list()
                    .entries(self.0.chain(self.1).map(|node| &node.value))
                    .finish()
            }
        }

        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.capacity())
            .field(
                "buckets",
                &(0..self.capacity())
                    .map(|i| Chain(self, i))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A view into a single entry in the table, which may be vacant or occupied.
///
/// Constructed by [`HashTable::entry`].
pub enum Entry<'a, V> {
    /// No equal value is present
    Vacant(VacantEntry<'a, V>),
    /// An equal value is present
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }
}

/// A vacant entry, holding the hash of the value about to be inserted.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts the value, growing the bucket array first if needed.
    ///
    /// # Panics
    ///
    /// Panics if the grown bucket array cannot be allocated. The table is
    /// left unchanged in that case.
    pub fn insert(self, value: V) -> &'a mut V {
        if let Err(err) = self.table.try_reserve_one() {
            panic!("failed to grow bucket array: {err}");
        }
        self.table.insert_unique(self.hash, value)
    }

    /// Inserts the value, returning an error instead of panicking if the grown
    /// bucket array cannot be allocated.
    ///
    /// On error the table is exactly as it was before the call.
    pub fn try_insert(self, value: V) -> Result<&'a mut V, TryReserveError> {
        self.table.try_reserve_one()?;
        Ok(self.table.insert_unique(self.hash, value))
    }

    /// The hash this entry was looked up with.
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// An occupied entry, borrowing the stored value.
pub struct OccupiedEntry<'a, V> {
    value: &'a mut V,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Returns a reference to the stored value.
    pub fn get(&self) -> &V {
        self.value
    }

    /// Returns a mutable reference to the stored value.
    pub fn get_mut(&mut self) -> &mut V {
        self.value
    }

    /// Converts the entry into a mutable reference bound to the table's
    /// lifetime.
    pub fn into_mut(self) -> &'a mut V {
        self.value
    }
}

/// An iterator over the values in a [`HashTable`].
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    current: Option<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_deref();
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A consuming iterator over the values in a [`HashTable`].
pub struct IntoIter<V> {
    buckets: alloc::vec::IntoIter<Link<V>>,
    current: Link<V>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut node) = self.current.take() {
                self.current = node.next.take();
                self.remaining -= 1;
                return Some(node.value);
            }
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        drop_chain(self.current.take());
        for link in &mut self.buckets {
            drop_chain(link);
        }
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(mut self) -> Self::IntoIter {
        let buckets = core::mem::take(&mut self.buckets);
        let remaining = core::mem::replace(&mut self.populated, 0);
        IntoIter {
            buckets: buckets.into_vec().into_iter(),
            current: None,
            remaining,
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
