//! Provides a _not_ thread-safe hash map for `i64` keys: `unsync::LongMap`.

mod bucket;
mod builder;
pub(crate) mod map;

pub use builder::LongMapBuilder;
pub use map::LongMap;
