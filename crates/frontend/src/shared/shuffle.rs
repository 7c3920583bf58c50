//! In-place shuffling with an injected random source.
//!
//! The browse view randomizes listing order on every fetch. The random source
//! is passed in so production code can use `js_sys::Math::random` while tests
//! inject a seeded generator.

/// Fisher-Yates shuffle. `rand` must return values in `[0, 1)`; out-of-range
/// values are clamped to a valid index.
pub fn shuffle<T>(items: &mut [T], mut rand: impl FnMut() -> f64) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in (1..len).rev() {
        let j = ((rand().max(0.0) * (i as f64 + 1.0)) as usize).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic generator in [0, 1) for tests.
    fn seeded(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed.max(1);
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut items: Vec<i64> = (0..100).collect();
        shuffle(&mut items, seeded(42));

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut a: Vec<i64> = (0..20).collect();
        let mut b: Vec<i64> = (0..20).collect();
        shuffle(&mut a, seeded(7));
        shuffle(&mut b, seeded(7));
        assert_eq!(a, b);

        let mut c: Vec<i64> = (0..20).collect();
        shuffle(&mut c, seeded(8));
        assert_ne!(a, c);
    }

    #[test]
    fn test_trivial_inputs_untouched() {
        let mut empty: Vec<i64> = Vec::new();
        shuffle(&mut empty, seeded(1));
        assert!(empty.is_empty());

        let mut single = vec![5];
        shuffle(&mut single, seeded(1));
        assert_eq!(single, vec![5]);
    }

    #[test]
    fn test_out_of_range_rand_is_clamped() {
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, || 1.5);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);

        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, || -0.5);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }
}
