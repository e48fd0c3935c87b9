#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! `longmap` provides [`LongMap`][long-map-struct], a hash map whose keys are
//! 64-bit signed integers (`i64`).
//!
//! The keys are stored inline in the map's entries, so no per-key allocation or
//! generic hashing is needed. Each key is folded to 32 bits and run through a
//! small bit mixer, and the result selects one of a power-of-two number of
//! buckets. Entries that land in the same bucket are chained together.
//!
//! The map grows when the number of entries exceeds `capacity * load_factor`
//! and shrinks again when it drops to half of that, so a map that once held many
//! entries does not keep a large bucket array around forever.
//!
//! [long-map-struct]: ./unsync/struct.LongMap.html
//!
//! # Thread safety
//!
//! `LongMap` is _not_ thread-safe. It does not use any locks or atomic
//! operations internally, and all mutating methods take `&mut self`. Wrap it in a
//! `Mutex` or keep it on one thread if it needs to be shared.
//!
//! # Examples
//!
//! ```rust
//! use longmap::LongMap;
//!
//! let mut map = LongMap::new();
//!
//! assert_eq!(map.insert(-25, "Minus twenty five"), None);
//! assert_eq!(map.insert(1, "One"), None);
//! // Overwriting returns the previous value.
//! assert_eq!(map.insert(1, "Another one"), Some("One"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(1), Some(&"Another one"));
//! assert_eq!(map.get(111), None);
//!
//! assert_eq!(map.remove(-25), Some("Minus twenty five"));
//! assert!(!map.contains_key(-25));
//! ```
//!
//! # Configuration
//!
//! The initial capacity and the load factor can be set at construction time,
//! either with [`LongMap::with_capacity_and_load_factor`][with-cap-lf] or with
//! the [`LongMapBuilder`][builder-struct]:
//!
//! ```rust
//! use longmap::LongMap;
//!
//! let mut map = LongMap::builder()
//!     .initial_capacity(1_000)
//!     .load_factor(0.5)
//!     .build()
//!     .expect("valid configuration");
//!
//! map.insert(42, 'x');
//! // The requested capacity is rounded up to a power of two.
//! assert_eq!(map.capacity(), 1_024);
//! ```
//!
//! [with-cap-lf]: ./unsync/struct.LongMap.html#method.with_capacity_and_load_factor
//! [builder-struct]: ./unsync/struct.LongMapBuilder.html
//!
//! # Logging
//!
//! Enable the `logging` feature to have the map emit [`log`][log-crate] records
//! when it allocates or resizes its bucket array.
//!
//! [log-crate]: https://crates.io/crates/log

pub(crate) mod common;
pub mod unsync;

pub use common::error::ConfigError;
pub use unsync::{LongMap, LongMapBuilder};
