pub(crate) mod builder_utils;
pub(crate) mod error;
pub(crate) mod hash;

/// The capacity of the bucket array when none is specified. Must be a power of
/// two.
pub(crate) const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// The largest possible bucket array length. Larger requested capacities are
/// clamped to this value, and the map stops growing once it is reached.
pub(crate) const MAXIMUM_CAPACITY: usize = 1 << 30;

/// The load factor used when none is specified.
pub(crate) const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Returns the number of entries a bucket array of `capacity` may hold before
/// it has to grow.
#[inline]
pub(crate) fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    // Float to int `as` casts saturate, so a huge load factor cannot wrap.
    (capacity as f64 * load_factor as f64) as usize
}
