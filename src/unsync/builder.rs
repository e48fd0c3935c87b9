use super::LongMap;
use crate::common::{
    builder_utils, error::ConfigError, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR,
};

use std::marker::PhantomData;

/// Builds a [`LongMap`][long-map-struct] with various configuration knobs.
///
/// [long-map-struct]: ./struct.LongMap.html
///
/// # Examples
///
/// ```rust
/// use longmap::unsync::LongMapBuilder;
///
/// let mut map = LongMapBuilder::new()
///     // Allocate 64 buckets on the first insert.
///     .initial_capacity(64)
///     // Grow once there are more than 32 entries.
///     .load_factor(0.5)
///     // Create the map.
///     .build()
///     .expect("valid configuration");
///
/// map.insert(7, "seven");
/// assert_eq!(map.capacity(), 64);
/// assert_eq!(map.threshold(), 32);
/// ```
///
#[must_use]
pub struct LongMapBuilder<C> {
    initial_capacity: Option<usize>,
    load_factor: Option<f32>,
    map_type: PhantomData<C>,
}

impl<V> Default for LongMapBuilder<LongMap<V>> {
    fn default() -> Self {
        Self {
            initial_capacity: None,
            load_factor: None,
            map_type: PhantomData,
        }
    }
}

impl<V> LongMapBuilder<LongMap<V>> {
    /// Constructs a new `LongMapBuilder` with the default capacity (16) and the
    /// default load factor (0.75).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `LongMap<V>`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLoadFactor`][invalid-lf] if the load factor
    /// is zero, negative, infinite or NaN.
    ///
    /// [invalid-lf]: ../enum.ConfigError.html#variant.InvalidLoadFactor
    pub fn build(self) -> Result<LongMap<V>, ConfigError> {
        let load_factor =
            builder_utils::ensure_load_factor(self.load_factor.unwrap_or(DEFAULT_LOAD_FACTOR))?;
        Ok(LongMap::with_everything(
            self.initial_capacity.unwrap_or(DEFAULT_INITIAL_CAPACITY),
            load_factor,
        ))
    }
}

impl<C> LongMapBuilder<C> {
    /// Sets the initial capacity of the map.
    ///
    /// The bucket array is allocated on the first insert, with `capacity` rounded
    /// up to the next power of two. Capacities above `2^30` are clamped to `2^30`.
    /// The map never shrinks below this capacity.
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: Some(capacity),
            ..self
        }
    }

    /// Sets the load factor of the map.
    ///
    /// The map grows when it holds more than `capacity * load_factor` entries.
    /// `build` fails unless the load factor is a positive finite number.
    pub fn load_factor(self, load_factor: f32) -> Self {
        Self {
            load_factor: Some(load_factor),
            ..self
        }
    }
}
