/// The error type for constructing a [`LongMap`][long-map-struct] with an
/// invalid configuration.
///
/// Returned by [`LongMap::with_capacity_and_load_factor`][with-cap-lf] and
/// [`LongMapBuilder::build`][builder-build].
///
/// [long-map-struct]: ./unsync/struct.LongMap.html
/// [with-cap-lf]: ./unsync/struct.LongMap.html#method.with_capacity_and_load_factor
/// [builder-build]: ./unsync/struct.LongMapBuilder.html#method.build
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The load factor was zero, negative, infinite or not a number.
    #[error("Illegal load factor: {0}")]
    InvalidLoadFactor(f32),
}
