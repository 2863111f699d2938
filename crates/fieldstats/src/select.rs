//! In-place order-statistic selection (quickselect).

use rand::Rng;

/// Finds the value with the given ascending `rank` in `values`.
///
/// Partitions `values` in place around uniformly random pivots until the
/// element that would sit at index `rank` after a full sort occupies that
/// index. Elements left of the found position end up less than or equal to
/// it, which makes a follow-up selection of a nearby rank over the same
/// buffer cheap.
///
/// Average time is O(n); the O(n²) worst case is accepted and mitigated by
/// the random pivot choice. The generator is injectable so callers can pin
/// the pivot sequence for reproducibility.
///
/// # Panics
///
/// Panics if `rank >= values.len()`.
///
/// # Examples
///
/// ```
/// use fieldstats::select_nth;
/// use rand_pcg::Pcg32;
/// use rand::SeedableRng as _;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let mut values = vec![9.0, 1.0, 8.0, 2.0, 7.0];
/// assert_eq!(select_nth(&mut values, 2, &mut rng), 7.0);
/// ```
pub fn select_nth(values: &mut [f64], rank: usize, rng: &mut impl Rng) -> f64 {
    assert!(rank < values.len(), "rank out of bounds");

    let mut left = 0;
    let mut right = values.len() - 1;
    loop {
        if left == right {
            return values[left];
        }
        let pivot_index = rng.random_range(left..=right);
        values.swap(pivot_index, right);
        let pivot = values[right];

        // Single-pass partition: everything strictly less than the pivot is
        // swapped to the front of the bound.
        let mut store = left;
        for i in left..right {
            if values[i] < pivot {
                values.swap(i, store);
                store += 1;
            }
        }
        values.swap(store, right);

        if rank == store {
            return values[store];
        } else if rank < store {
            right = store - 1;
        } else {
            left = store + 1;
        }
    }
}
