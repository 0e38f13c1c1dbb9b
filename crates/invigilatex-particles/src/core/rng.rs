//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, so a seeded field can be replayed in tests.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift output tracks its state closely for the first draws, so a
        // small seed is spread over all 64 bits first.
        let state = splitmix64(seed);
        Rng {
            state: if state == 0 { 1 } else { state },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max]. Returns `min` when the range is empty.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.next_f32() * (max - min)
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not panic or loop forever
        let _ = rng.next_int(100);
        assert_eq!(rng.next_int(0), 0);
    }

    #[test]
    fn small_seeds_spread_first_draw() {
        let firsts: Vec<f32> = (1..=1000u64).map(|seed| Rng::new(seed).next_f32()).collect();
        let max = firsts.iter().cloned().fold(0.0f32, f32::max);
        let min = firsts.iter().cloned().fold(1.0f32, f32::min);
        let mean = firsts.iter().sum::<f32>() / firsts.len() as f32;
        assert!(max > 0.9, "largest first draw was {}", max);
        assert!(min < 0.1, "smallest first draw was {}", min);
        assert!((0.4..0.6).contains(&mean), "mean first draw was {}", mean);
        let upper_half = firsts.iter().filter(|v| **v >= 0.5).count();
        assert!(upper_half > 400, "only {} of 1000 first draws in [0.5, 1)", upper_half);
    }

    #[test]
    fn default_seed_first_draw_not_at_origin() {
        let first = Rng::new(42).next_f32();
        assert!(first > 0.001, "first draw was {}", first);
    }

    #[test]
    fn next_f32_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "value was {}", v);
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            let v = rng.range(-0.25, 0.25);
            assert!((-0.25..=0.25).contains(&v), "value was {}", v);
        }
        assert_eq!(rng.range(3.0, 3.0), 3.0);
        assert_eq!(rng.range(5.0, 1.0), 5.0);
    }
}
