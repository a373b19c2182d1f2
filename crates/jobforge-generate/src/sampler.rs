use rand::Rng;

use crate::errors::GenerationError;

/// Draw one candidate with probability proportional to its weight.
///
/// Takes a single uniform draw over `[0, total)` and scans the slice in
/// order, returning the first candidate whose cumulative weight passes the
/// draw point. The fixed scan order is what makes replays under one seed
/// reproducible. Zero-weight candidates are tolerated but unreachable;
/// an empty slice or a zero total weight is an `EmptyDomain` error.
pub fn weighted_choice<'a, T, R: Rng>(
    pairs: &'a [(T, f64)],
    rng: &mut R,
) -> Result<&'a T, GenerationError> {
    let total: f64 = pairs.iter().map(|(_, weight)| weight.max(0.0)).sum();
    if pairs.is_empty() || total <= 0.0 {
        return Err(GenerationError::EmptyDomain(
            "weighted choice over empty or zero-weight domain".into(),
        ));
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (candidate, weight) in pairs {
        cumulative += weight.max(0.0);
        if cumulative > draw {
            return Ok(candidate);
        }
    }

    // Floating-point shortfall in the final accumulation.
    Ok(&pairs[pairs.len() - 1].0)
}

/// Sample up to `k` distinct elements without replacement.
///
/// Requests larger than the pool are clamped to the pool size rather than
/// failing.
pub fn sample_distinct<T: Clone, R: Rng>(pool: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let k = k.min(pool.len());
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let mut picked = Vec::with_capacity(k);
    for _ in 0..k {
        let slot = rng.random_range(0..indices.len());
        picked.push(pool[indices.swap_remove(slot)].clone());
    }
    picked
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn zero_weight_candidates_are_never_drawn() {
        let pairs = [("A", 0.0), ("B", 1.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let choice = weighted_choice(&pairs, &mut rng).expect("choice");
            assert_eq!(*choice, "B");
        }
    }

    #[test]
    fn single_positive_weight_always_wins() {
        let pairs = [("A", 1.0), ("B", 0.0), ("C", 0.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let choice = weighted_choice(&pairs, &mut rng).expect("choice");
            assert_eq!(*choice, "A");
        }
    }

    #[test]
    fn empty_domain_is_an_error() {
        let pairs: [(&str, f64); 0] = [];
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        assert!(matches!(
            weighted_choice(&pairs, &mut rng),
            Err(GenerationError::EmptyDomain(_))
        ));
    }

    #[test]
    fn all_zero_weights_are_an_error() {
        let pairs = [("A", 0.0), ("B", 0.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert!(matches!(
            weighted_choice(&pairs, &mut rng),
            Err(GenerationError::EmptyDomain(_))
        ));
    }

    #[test]
    fn sample_distinct_clamps_to_pool_size() {
        let pool = vec![1, 2, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        let mut picked = sample_distinct(&pool, 10, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, vec![1, 2, 3]);
    }

    #[test]
    fn sample_distinct_has_no_repeats() {
        let pool: Vec<u32> = (0..20).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..50 {
            let picked = sample_distinct(&pool, 5, &mut rng);
            let mut unique = picked.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), picked.len());
        }
    }
}
