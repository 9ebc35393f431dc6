//! Random feature-subset draws for ensemble decorrelation.

use rand::Rng;

/// Draw `k` distinct column indices uniformly from `0..n_columns`.
///
/// Pure with respect to its inputs: the caller injects the RNG, so tests
/// can fix a seed and replay the exact draw sequence. Uses a partial
/// Fisher-Yates shuffle, so only the first `k` positions are permuted.
///
/// `k` is clamped to `n_columns`.
#[must_use]
pub fn draw_feature_subset(n_columns: usize, k: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n_columns).collect();
    let take = k.min(n_columns);
    for i in 0..take {
        let j = rng.gen_range(i..n_columns);
        order.swap(i, j);
    }
    order.truncate(take);
    order
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::draw_feature_subset;

    #[test]
    fn subset_has_requested_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(draw_feature_subset(10, 4, &mut rng).len(), 4);
    }

    #[test]
    fn subset_is_clamped_to_available_columns() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(draw_feature_subset(3, 10, &mut rng).len(), 3);
    }

    #[test]
    fn indices_are_distinct_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let subset = draw_feature_subset(20, 8, &mut rng);
        let mut seen = subset.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
        assert!(subset.iter().all(|&c| c < 20));
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut subset = draw_feature_subset(6, 6, &mut rng);
        subset.sort_unstable();
        assert_eq!(subset, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                draw_feature_subset(15, 5, &mut a),
                draw_feature_subset(15, 5, &mut b)
            );
        }
    }
}
