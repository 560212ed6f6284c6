//! Reusable discrete-distribution sampler.
//!
//! Category, severity and session-type draws all follow the same
//! cumulative-weight scheme, so the table lives here once instead of
//! being inlined at each call site.

use rand::Rng;

/// Cumulative-weight table for weighted sampling of a small closed set.
///
/// A uniform draw `r ∈ [0, 1)` selects the first item whose cumulative
/// weight is `>= r`. If floating-point rounding leaves no item selected
/// (possible when the weights sum to slightly less than 1), the
/// designated fallback item is returned.
#[derive(Debug, Clone)]
pub struct WeightedTable<T: Copy> {
    /// (item, cumulative weight), in input order.
    cumulative: Vec<(T, f64)>,
    fallback: T,
}

impl<T: Copy> WeightedTable<T> {
    /// Build a table from (item, weight) pairs. Weights are expected to
    /// sum to 1 across the set; `total_weight()` exposes the actual sum
    /// so callers can assert it.
    pub fn new(items: &[(T, f64)], fallback: T) -> Self {
        let mut cumulative = Vec::with_capacity(items.len());
        let mut acc = 0.0;
        for &(item, weight) in items {
            acc += weight;
            cumulative.push((item, acc));
        }
        Self { cumulative, fallback }
    }

    /// Sum of all weights (the last cumulative value).
    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().map(|&(_, acc)| acc).unwrap_or(0.0)
    }

    /// Draw one item.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        let r: f64 = rng.gen();
        for &(item, acc) in &self.cumulative {
            if r <= acc {
                return item;
            }
        }
        self.fallback
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T: ?Sized, R: Rng>(rng: &mut R, pool: &'a [&'a T]) -> &'a T {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn total_weight_accumulates() {
        let table = WeightedTable::new(&[("a", 0.5), ("b", 0.35), ("c", 0.15)], "a");
        assert!((table.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sample_converges_to_weights() {
        let table = WeightedTable::new(&[(0usize, 0.5), (1, 0.35), (2, 0.15)], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0u32; 3];
        let n = 100_000;
        for _ in 0..n {
            counts[table.sample(&mut rng)] += 1;
        }
        let freq = |i: usize| counts[i] as f64 / n as f64;
        assert!((freq(0) - 0.50).abs() < 0.01, "minor freq {}", freq(0));
        assert!((freq(1) - 0.35).abs() < 0.01, "moderate freq {}", freq(1));
        assert!((freq(2) - 0.15).abs() < 0.01, "severe freq {}", freq(2));
    }

    #[test]
    fn underweighted_table_falls_back() {
        // Weights sum to ~0, so every draw misses and hits the fallback.
        let table = WeightedTable::new(&[("x", 0.0), ("y", 0.0)], "fallback");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(table.sample(&mut rng), "fallback");
    }

    #[test]
    fn pick_is_deterministic_under_seed() {
        let pool: &[&str] = &["a", "b", "c", "d"];
        let mut rng1 = ChaCha8Rng::seed_from_u64(3);
        let mut rng2 = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..32 {
            assert_eq!(pick(&mut rng1, pool), pick(&mut rng2, pool));
        }
    }
}
