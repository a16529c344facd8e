//! Draw primitives over a 32-bit random stream.
//!
//! Both primitives consume whole 32-bit words in a fixed pattern so that a
//! given stream always yields the same values, independent of platform. The
//! pinned stream is MT19937 with array-key seeding.

use rand::RngCore;
use rand_mt::Mt;

/// 2^26, the weight of the high word in a 53-bit float
const HIGH_WORD_SCALE: f64 = 67_108_864.0;

/// 2^-53
const FLOAT_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Build a fresh Mersenne Twister stream keyed with a single seed word
pub fn seeded_stream(seed: u32) -> Mt {
    Mt::new_with_key(std::iter::once(seed))
}

/// Draw a uniform float in `[0, 1)` with 53 bits of precision.
///
/// Consumes exactly two words: 27 bits from the first, 26 from the second.
pub fn unit_interval<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let high = rng.next_u32() >> 5;
    let low = rng.next_u32() >> 6;
    (f64::from(high) * HIGH_WORD_SCALE + f64::from(low)) * FLOAT_SCALE
}

/// Draw a uniform integer in `[0, bound)`.
///
/// Takes the top `bit_length(bound)` bits of each word and rejects values
/// outside the range, so a bound of 1 still consumes at least one word.
/// A bound of 0 has no valid value; it returns 0 without touching the stream.
pub fn index_below<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    let bits = u32::BITS - bound.leading_zeros();
    loop {
        let candidate = rng.next_u32() >> (u32::BITS - bits);
        if candidate < bound {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_stream_words() {
        // First words of MT19937 keyed with [12345]
        let mut rng = seeded_stream(12345);
        let words: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(words, vec![1789368711, 3146859322, 43676229, 3522623596]);
    }

    #[test]
    fn test_unit_interval_range() {
        let mut rng = seeded_stream(7);
        for _ in 0..1000 {
            let value = unit_interval(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_unit_interval_consumes_two_words() {
        let mut drawn = seeded_stream(12345);
        let mut reference = seeded_stream(12345);
        unit_interval(&mut drawn);
        reference.next_u32();
        reference.next_u32();
        assert_eq!(drawn.next_u32(), reference.next_u32());
    }

    #[test]
    fn test_index_below_bounds() {
        let mut rng = seeded_stream(99);
        for bound in 1..=9 {
            for _ in 0..200 {
                assert!(index_below(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn test_index_below_one_still_draws() {
        let mut drawn = seeded_stream(12345);
        let reference_words: Vec<u32> = {
            let mut reference = seeded_stream(12345);
            (0..8).map(|_| reference.next_u32()).collect()
        };
        assert_eq!(index_below(&mut drawn, 1), 0);
        // Rejection stops at the first word whose top bit is clear
        let consumed = reference_words
            .iter()
            .position(|word| word >> 31 == 0)
            .map(|pos| pos + 1)
            .unwrap();
        assert_eq!(drawn.next_u32(), reference_words[consumed]);
    }

    #[test]
    fn test_index_below_zero_is_inert() {
        let mut drawn = seeded_stream(3);
        let mut reference = seeded_stream(3);
        assert_eq!(index_below(&mut drawn, 0), 0);
        assert_eq!(drawn.next_u32(), reference.next_u32());
    }
}
