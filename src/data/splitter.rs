// ============================================================
// Layer 4 - Train/Validation/Test Splitter
// ============================================================
// Divides one class's files into three disjoint groups:
//   - Training set:   used to fit the model
//   - Validation set: used to tune it
//   - Test set:       held out until the very end
//
// A three-way split is done as two two-way partitions:
//
//   sorted files ──shuffle──► all
//   all          ──partition(test)──────────────► train+val | test
//   train+val    ──partition(val / (train+val))──► train     | val
//
// The second fraction is rescaled so validation ends up as a
// share of the whole class, not of the remainder.
//
// All randomness comes from a single ChaCha8 generator created
// from the run's seed and threaded through every call, in a
// fixed order: shuffle, partition, partition, per class.
// ChaCha8 output is stable across platforms and rand versions,
// so the same seed always gives the same file assignment.
//
// Reference: rand crate documentation (SliceRandom, SeedableRng)

use rand::{seq::SliceRandom, Rng, SeedableRng};
use std::ffi::OsString;
use rand_chacha::ChaCha8Rng;

use crate::domain::split::{SplitAssignment, SplitRatios};

/// Absorbs float noise such as `0.15 * 100 == 15.000000000000002`
/// so the ceiling lands on 15, not 16.
const PARTITION_EPSILON: f64 = 1e-9;

/// Build the generator for one run
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Number of items the taken side of a partition receives:
/// `ceil(n * fraction)`, clamped to `[0, n]`.
pub fn partition_count(n: usize, fraction: f64) -> usize {
    let raw = (n as f64 * fraction - PARTITION_EPSILON).ceil();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(n)
    }
}

/// Randomly permute `items` and split them into (kept, taken),
/// where `taken` holds `partition_count(len, fraction)` items.
pub fn two_way_partition<T, R>(mut items: Vec<T>, fraction: f64, rng: &mut R) -> (Vec<T>, Vec<T>)
where
    R: Rng + ?Sized,
{
    let taken_len = partition_count(items.len(), fraction);

    items.shuffle(rng);

    // After split_off: items = taken, kept = the rest
    let kept = items.split_off(taken_len);
    (kept, items)
}

/// Assign every file of one class to exactly one split.
///
/// Files are sorted first so the result does not depend on
/// directory-listing order, then shuffled with `rng`.
pub fn assign<R>(files: &[OsString], ratios: &SplitRatios, rng: &mut R) -> SplitAssignment
where
    R: Rng + ?Sized,
{
    let mut ordered = files.to_vec();
    ordered.sort();
    ordered.shuffle(rng);

    let (train_val, test) = two_way_partition(ordered, ratios.test(), rng);
    let (train, validation) =
        two_way_partition(train_val, ratios.val_fraction_of_remainder(), rng);

    let assignment = SplitAssignment { train, validation, test };
    tracing::debug!(
        "Assigned {} files: {} train, {} validation, {} test",
        assignment.len(),
        assignment.train.len(),
        assignment.validation.len(),
        assignment.test.len(),
    );
    assignment
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn file_names(n: usize) -> Vec<OsString> {
        (0..n).map(|i| OsString::from(format!("img_{i:03}.png"))).collect()
    }

    fn default_ratios() -> SplitRatios {
        SplitRatios::new(0.7, 0.15, 0.15).unwrap()
    }

    #[test]
    fn test_partition_count_rounds_up() {
        assert_eq!(partition_count(100, 0.15), 15);
        assert_eq!(partition_count(10, 0.15), 2);
        assert_eq!(partition_count(7, 0.5), 4);
    }

    #[test]
    fn test_partition_count_bounds() {
        assert_eq!(partition_count(0, 0.15), 0);
        assert_eq!(partition_count(10, 0.0), 0);
        assert_eq!(partition_count(10, 1.0), 10);
    }

    #[test]
    fn test_two_way_partition_sizes() {
        let mut rng         = seeded_rng(42);
        let (kept, taken)   = two_way_partition((0..20).collect::<Vec<_>>(), 0.25, &mut rng);
        assert_eq!(taken.len(), 5);
        assert_eq!(kept.len(), 15);
    }

    #[test]
    fn test_seventy_fifteen_fifteen_on_100_files() {
        let mut rng = seeded_rng(42);
        let a       = assign(&file_names(100), &default_ratios(), &mut rng);
        assert_eq!(a.train.len(), 70);
        assert_eq!(a.validation.len(), 15);
        assert_eq!(a.test.len(), 15);
    }

    #[test]
    fn test_all_files_assigned_exactly_once() {
        let ratio_sets = [(0.7, 0.15, 0.15), (0.8, 0.1, 0.1), (0.6, 0.2, 0.2), (1.0, 0.0, 0.0)];
        for (train, val, test) in ratio_sets {
            let ratios = SplitRatios::new(train, val, test).unwrap();
            for n in [1, 2, 3, 7, 33] {
                let files   = file_names(n);
                let mut rng = seeded_rng(7);
                let a       = assign(&files, &ratios, &mut rng);

                assert_eq!(a.len(), n);
                let union: HashSet<&OsString> =
                    a.train.iter().chain(&a.validation).chain(&a.test).collect();
                // No duplicates and nothing lost
                assert_eq!(union.len(), n);
                assert_eq!(union, files.iter().collect::<HashSet<_>>());
            }
        }
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let files = file_names(50);
        let a = assign(&files, &default_ratios(), &mut seeded_rng(42));
        let b = assign(&files, &default_ratios(), &mut seeded_rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let files        = file_names(30);
        let mut reversed = files.clone();
        reversed.reverse();

        let a = assign(&files, &default_ratios(), &mut seeded_rng(3));
        let b = assign(&reversed, &default_ratios(), &mut seeded_rng(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_assignment() {
        let files = file_names(20);
        let a = assign(&files, &default_ratios(), &mut seeded_rng(1));
        let b = assign(&files, &default_ratios(), &mut seeded_rng(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_input() {
        let a = assign(&[], &default_ratios(), &mut seeded_rng(42));
        assert_eq!(a.len(), 0);
    }
}
