//! RNG module - deterministic shuffling for level generation
//!
//! Level layouts must be reproducible from a seed (for tests and replays)
//! but different across restarts with different seeds. A small xorshift
//! generator is enough; no cryptographic quality is needed.

/// Xorshift32 generator (Marsaglia)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point and never advance
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick one element of a non-empty slice uniformly
    pub fn pick<T: Copy>(&mut self, slice: &[T]) -> T {
        slice[self.next_range(slice.len() as u32) as usize]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_still_advances() {
        let mut rng = SimpleRng::new(0);

        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);

        for _ in 0..1000 {
            assert!(rng.next_range(13) < 13);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(42);
        let mut values: Vec<u32> = (0..50).collect();

        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_differs_across_draws() {
        let mut rng = SimpleRng::new(42);
        let mut first: Vec<u32> = (0..50).collect();
        let mut second: Vec<u32> = (0..50).collect();

        rng.shuffle(&mut first);
        rng.shuffle(&mut second);

        // Technically could collide, but not for 50 elements
        assert_ne!(first, second);
    }

    #[test]
    fn test_pick_stays_in_slice() {
        let mut rng = SimpleRng::new(9);
        let options = [10, 20, 30];

        for _ in 0..100 {
            assert!(options.contains(&rng.pick(&options)));
        }
    }
}
