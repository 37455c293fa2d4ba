/// Seed used when none is given (and in place of 0, which xorshift can't leave)
pub const DEFAULT_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in [0, 1)
#[inline]
pub fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

/// Zero would lock xorshift at zero forever
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_samples_stay_in_half_open_range() {
        let mut state = DEFAULT_SEED;
        for _ in 0..10_000 {
            let r = next_unit(&mut state);
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut state = sanitize_seed(0);
        assert_ne!(xorshift32(&mut state), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 77;
        let mut b = 77;
        for _ in 0..16 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }
}
