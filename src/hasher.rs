use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

/// A hash function mapping an element to a `u64`.
///
/// The only requirement for correctness is determinism: equal values must
/// produce equal hashes for as long as they are stored in a set. A uniform
/// distribution only matters for chain length, i.e. performance.
///
/// This is implemented for every closure or function pointer of shape
/// `Fn(&T) -> u64`, and for [`StdHash`], which adapts any
/// [`BuildHasher`].
///
/// # Examples
///
/// ```rust
/// use chain_hash::ChainedHashSet;
///
/// let mut set = ChainedHashSet::with_hasher(|s: &String| s.len() as u64);
/// set.add("cat".to_string());
/// assert_eq!(set.bucket_of(&"dog".to_string()), 3);
/// ```
pub trait HashFunction<T: ?Sized> {
    /// Hashes a single element.
    fn hash_element(&self, value: &T) -> u64;
}

impl<T: ?Sized, F> HashFunction<T> for F
where
    F: Fn(&T) -> u64,
{
    #[inline]
    fn hash_element(&self, value: &T) -> u64 {
        self(value)
    }
}

/// Adapts a [`BuildHasher`] into a [`HashFunction`] for any `T: Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdHash<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> StdHash<S> {
    /// Wraps the given hasher builder.
    pub fn new(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    /// Returns the wrapped hasher builder.
    pub fn hash_builder(&self) -> &S {
        &self.hash_builder
    }
}

impl<T, S> HashFunction<T> for StdHash<S>
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn hash_element(&self, value: &T) -> u64 {
        self.hash_builder.hash_one(value)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used by [`StdHash`] when none is named.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used by [`StdHash`] when none is named.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// The hasher builder used by [`StdHash`] when none is named.
        ///
        /// Without `std` or `foldhash` there is no source of randomness, so this
        /// falls back to unkeyed FNV-1a.
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<FnvHasher>;
    }
}

/// Fowler–Noll–Vo (FNV-1a) hasher, used as the fallback default hasher.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self {
            hash: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as u64;
            self.hash = self.hash.wrapping_mul(Self::PRIME);
        }
    }
}
