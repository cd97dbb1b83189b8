#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod hash_table;

/// A hash set backed by a separately-chained hash table.
///
/// This module provides `ChainedHashSet`, which wraps the `HashTable` and
/// hashes elements with an injected hash function.
pub mod hash_set;

/// Hash functions a `ChainedHashSet` can be built with.
pub mod hasher;

/// The `Set` capability trait.
pub mod set;

pub mod suggest;

pub use hash_set::ChainedHashSet;
pub use hash_table::DEFAULT_CAPACITY;
pub use hash_table::HashTable;
pub use hasher::DefaultHashBuilder;
pub use hasher::HashFunction;
pub use hasher::StdHash;
pub use set::Set;
pub use suggest::WordChecker;
