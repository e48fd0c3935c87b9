//! Hashing of `i64` keys.
//!
//! A key is first folded to 32 bits by XOR-ing its upper half into its lower
//! half. The folded value is then run through a two-stage mixer. Bucket indices
//! are taken from the low bits of the mixed hash, so the mixer's job is to make
//! those low bits depend on the upper bits too. Without it, keys that differ
//! only above the bucket mask (e.g. multiples of the capacity) would all end up
//! in the same bucket.
//!
//! The exact shift sequence is kept stable; entries store their mixed hash and
//! tests pin it with known vectors.

/// Folds a 64-bit key to 32 bits.
#[inline]
pub(crate) const fn fold(key: i64) -> u32 {
    let k = key as u64;
    (k ^ (k >> 32)) as u32
}

/// Spreads the entropy of the upper bits of `h` into its lower bits.
///
/// All shifts are logical (unsigned) shifts.
#[inline]
pub(crate) const fn mix(mut h: u32) -> u32 {
    // The 20/12 pair can flip any of the bottom 20 bits; the 7/4 pair then
    // reaches the bottom 28 bits, building on the first round.
    h ^= (h >> 20) ^ (h >> 12);
    h ^ (h >> 7) ^ (h >> 4)
}

/// Returns the mixed hash of `key`. This is the value stored on every entry.
#[inline]
pub(crate) const fn hash(key: i64) -> u32 {
    mix(fold(key))
}

/// Maps a mixed hash to a bucket index. `capacity` must be a power of two.
#[inline]
pub(crate) const fn bucket_index(hash: u32, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (hash as usize) & (capacity - 1)
}

#[cfg(test)]
mod tests {
    use super::{bucket_index, fold, hash, mix};

    #[test]
    fn fold_halves() {
        assert_eq!(fold(0), 0);
        assert_eq!(fold(1), 1);
        assert_eq!(fold(-1), 0);
        assert_eq!(fold(-25), 24);
        assert_eq!(fold(1 << 32), 1);
        assert_eq!(fold(i64::MIN), 0x8000_0000);
        assert_eq!(fold(i64::MAX), 0x8000_0000);
    }

    #[test]
    fn mixed_hash_vectors() {
        // (key, mixed hash)
        let vectors: &[(i64, u32)] = &[
            (0, 0),
            (1, 1),
            (-1, 0),
            (7, 7),
            (15, 15),
            (-25, 25),
            (566, 529),
            (1 << 32, 1),
            (123_456_789, 0x0720_b420),
            (0x1234_5678_9abc_def0, 0x8119_0811),
            (i64::MIN, 0x8908_9890),
            (i64::MAX, 0x8908_9890),
        ];

        for &(key, expected) in vectors {
            assert_eq!(hash(key), expected, "key: {key}");
        }
    }

    #[test]
    fn mix_is_identity_on_small_values() {
        // Values below 16 have nothing to shift down.
        for h in 0..16 {
            assert_eq!(mix(h), h);
        }
    }

    #[test]
    fn colliding_keys() {
        // A key whose upper and lower halves are equal folds to zero.
        for n in 0_i64..64 {
            assert_eq!(hash((n << 32) | n), 0);
        }
    }

    #[test]
    fn bucket_indices() {
        assert_eq!(bucket_index(hash(566), 16), 1);
        assert_eq!(bucket_index(hash(-25), 16), 9);
        assert_eq!(bucket_index(hash(-25), 32), 25);
        assert_eq!(bucket_index(u32::MAX, 1), 0);
        assert_eq!(bucket_index(u32::MAX, 1 << 30), (1 << 30) - 1);
    }
}
