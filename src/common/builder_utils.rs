use super::{error::ConfigError, MAXIMUM_CAPACITY};

pub(crate) fn ensure_load_factor(load_factor: f32) -> Result<f32, ConfigError> {
    if !load_factor.is_finite() || load_factor <= 0.0 {
        return Err(ConfigError::InvalidLoadFactor(load_factor));
    }
    Ok(load_factor)
}

/// Returns the bucket array length for a requested capacity: the next power of
/// two, at least 1 and at most `MAXIMUM_CAPACITY`.
pub(crate) fn table_size_for(capacity: usize) -> usize {
    if capacity >= MAXIMUM_CAPACITY {
        MAXIMUM_CAPACITY
    } else {
        capacity.max(1).next_power_of_two()
    }
}
