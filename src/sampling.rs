// ---------------------------------------------------------------------------
// Deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**).
///
/// Same seed, same stream, on every platform.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[0, bound)` without modulo bias. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        // Reject the tail that would make low values more likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let x = self.next_u64();
            if x < zone {
                return x % bound;
            }
        }
    }

    /// Box-Muller transform for normal distribution
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

// ---------------------------------------------------------------------------
// Sampling without replacement
// ---------------------------------------------------------------------------

/// Draw `min(amount, population)` distinct indices from `0..population`.
///
/// Partial Fisher–Yates shuffle: the result is in draw order, and the same
/// arguments always give the same result.
pub fn sample_indices(population: usize, amount: usize, seed: u64) -> Vec<usize> {
    let amount = amount.min(population);
    let mut rng = SimpleRng::new(seed);
    let mut pool: Vec<usize> = (0..population).collect();

    for i in 0..amount {
        let j = i + rng.below((population - i) as u64) as usize;
        pool.swap(i, j);
    }
    pool.truncate(amount);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        let mut c = SimpleRng::new(43);
        let xs: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();
        let zs: Vec<u64> = (0..16).map(|_| c.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }

    #[test]
    fn floats_and_bounded_draws_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!(rng.below(13) < 13);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn sample_is_distinct_and_sized() {
        let picked = sample_indices(1200, 1000, 42);
        assert_eq!(picked.len(), 1000);
        let unique: BTreeSet<usize> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 1000);
        assert!(picked.iter().all(|&i| i < 1200));
    }

    #[test]
    fn sample_is_reproducible() {
        assert_eq!(sample_indices(5000, 1000, 42), sample_indices(5000, 1000, 42));
        assert_ne!(sample_indices(5000, 1000, 42), sample_indices(5000, 1000, 1));
    }

    #[test]
    fn oversized_request_returns_whole_population() {
        let mut all = sample_indices(10, 50, 42);
        assert_eq!(all.len(), 10);
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
        assert!(sample_indices(0, 1000, 42).is_empty());
    }
}
