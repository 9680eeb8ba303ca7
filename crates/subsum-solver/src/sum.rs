//! Bounded dynamic-programming subset-sum solver.
//!
//! For a collection, finds subsets having a specified sum. The collection can
//! contain plain numbers, or an adapter can be supplied to extract a numeric
//! value from each item. Decimal values are converted losslessly to fixed
//! point through a shared [`FixedPointScale`] before solving.
//!
//! The solver does not use the combination enumerator. It builds a bucket
//! table mapping each achievable sum to the subsets achieving it, processing
//! items in ascending value order and capping each bucket at `max_results`
//! entries. Two shortcuts avoid the table entirely: when the whole collection
//! is within tolerance of the target, and when the target is more than half
//! the collection total (solved for the mirrored target, then complemented).
//!
//! All sums are computed as `i64`; overflow for extreme magnitude-times-scale
//! products is out of scope. Negative item values are not supported.

use std::collections::BTreeMap;

use num_traits::AsPrimitive;
use rust_decimal::Decimal;
use subsum_core::{FixedPointScale, Result};

/// Initial bucket sizing hint when `max_results` is unlimited.
const EXPECTED_RESULTS: usize = 5;

/// Options for a subset-sum search.
///
/// `item_tolerance` is the precision of the item values: the allowed
/// deviation between a subset's sum and the target scales with it (by item
/// count for the whole-collection shortcut, by bucket size for the
/// nearest-match fallback). `max_results` caps the number of subsets
/// retained per achievable sum (`None` = unlimited).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumSearchConfig {
    /// Precision of the item values.
    pub item_tolerance: i64,
    /// Maximum number of subsets to return (`None` = unlimited).
    pub max_results: Option<usize>,
}

impl Default for SumSearchConfig {
    fn default() -> Self {
        SumSearchConfig { item_tolerance: 0, max_results: None }
    }
}

impl SumSearchConfig {
    /// Creates a config with the given result cap and zero tolerance.
    pub fn with_max_results(max_results: Option<usize>) -> Self {
        SumSearchConfig { max_results, ..Default::default() }
    }
}

/// Finds the subsets of `items` whose adapted values sum to `target`.
///
/// Returns the matching subsets, or an empty vector if none qualifies.
///
/// A `target` of exactly 0 always returns no matches, even when the
/// collection contains zero-valued items. This mirrors the historical
/// behavior of the solver and is relied on by callers that treat a zero
/// target as "nothing to reconcile".
pub fn subsets_with<T, F>(
    items: &[T],
    target: i64,
    adapter: F,
    config: &SumSearchConfig,
) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let values: Vec<i64> = items.iter().map(adapter).collect();
    solve(items, values, target, config.item_tolerance, config.max_results)
}

/// Finds the subsets of a collection of numbers having the specified sum.
///
/// # Examples
///
/// ```
/// use subsum_solver::sum::subsets;
///
/// let matches = subsets(&[1, 3, 4, 4, 5, 9], 13, None);
/// assert_eq!(matches.len(), 6);
/// assert!(matches.contains(&vec![4, 4, 5]));
/// ```
pub fn subsets<T>(items: &[T], target: T, max_results: Option<usize>) -> Vec<Vec<T>>
where
    T: AsPrimitive<i64>,
{
    let values: Vec<i64> = items.iter().map(|v| v.as_()).collect();
    solve(items, values, target.as_(), 0, max_results)
}

/// Finds a single subset of a collection of numbers having the specified sum.
///
/// Returns `None` when no subset qualifies; absence of a match is a normal
/// outcome, not an error.
pub fn subset<T>(items: &[T], target: T) -> Option<Vec<T>>
where
    T: AsPrimitive<i64>,
{
    subsets(items, target, Some(1)).into_iter().next()
}

/// Finds the subsets of `items` whose adapted decimal values sum to `target`.
///
/// The shared fixed-point scale is derived from every adapted value, the
/// target and the tolerance, so no conversion truncates. A value whose
/// scaled form does not fit in an `i64` fails with
/// [`SubsumError::Overflow`](subsum_core::SubsumError::Overflow).
pub fn decimal_subsets<T, F>(
    target: Decimal,
    item_tolerance: Decimal,
    items: &[T],
    adapter: F,
    max_results: Option<usize>,
) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    F: Fn(&T) -> Decimal,
{
    let scale =
        FixedPointScale::of_values(items.iter().map(&adapter).chain([target, item_tolerance]));
    let values = items
        .iter()
        .map(|item| scale.to_fixed(adapter(item)))
        .collect::<Result<Vec<i64>>>()?;
    Ok(solve(
        items,
        values,
        scale.to_fixed(target)?,
        scale.to_fixed(item_tolerance)?,
        max_results,
    ))
}

/// Finds the subsets of a collection of decimals having the specified sum.
pub fn decimal_sum_subsets(
    target: Decimal,
    items: &[Decimal],
    max_results: Option<usize>,
) -> Result<Vec<Vec<Decimal>>> {
    decimal_subsets(target, Decimal::ZERO, items, |v| *v, max_results)
}

/// Finds a single subset of a collection of decimals having the specified sum.
pub fn decimal_subset(target: Decimal, items: &[Decimal]) -> Result<Option<Vec<Decimal>>> {
    Ok(decimal_sum_subsets(target, items, Some(1))?.into_iter().next())
}

/// Runs the fixed-point solver and materializes index subsets back to items.
fn solve<T: Clone>(
    items: &[T],
    values: Vec<i64>,
    target: i64,
    item_tolerance: i64,
    max_results: Option<usize>,
) -> Vec<Vec<T>> {
    if target == 0 {
        return Vec::new();
    }
    tracing::debug!(item_count = items.len(), target, item_tolerance, "starting subset-sum solve");
    let solver = Solver {
        values,
        total: 0,
        max_results,
        sums: BTreeMap::new(),
    };
    let matches = solver.find_subsets(target, item_tolerance);
    tracing::debug!(match_count = matches.len(), "finished subset-sum solve");
    matches
        .into_iter()
        .map(|indices| indices.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}

/// The DP engine. Subsets are index vectors into the input slice; indices
/// within a subset appear in ascending-value processing order.
struct Solver {
    values: Vec<i64>,
    total: i64,
    max_results: Option<usize>,
    sums: BTreeMap<i64, Vec<Vec<usize>>>,
}

impl Solver {
    fn find_subsets(mut self, target: i64, item_tolerance: i64) -> Vec<Vec<usize>> {
        self.total = self.values.iter().sum();
        let item_count = self.values.len() as i64;
        if (self.total - target).abs() <= item_tolerance * item_count {
            // The whole collection is the (only) match.
            return vec![(0..self.values.len()).collect()];
        }
        if target > self.total / 2 {
            // Solve for the mirrored target and complement each result:
            // relative to a fixed total, the complement of a matching subset
            // matches the mirrored target.
            tracing::debug!(mirrored = self.total - target, "solving for complement");
            let mirrored = self.nearest_match(self.total - target, item_tolerance);
            return mirrored.into_iter().map(|subset| self.complement(&subset)).collect();
        }
        self.nearest_match(target, item_tolerance)
    }

    /// Returns the items not contained in `subset`, in original input order.
    fn complement(&self, subset: &[usize]) -> Vec<usize> {
        let mut included = vec![false; self.values.len()];
        for &index in subset {
            included[index] = true;
        }
        (0..self.values.len()).filter(|&i| !included[i]).collect()
    }

    /// Builds subsets with sums up to `target + item_tolerance * item_count`
    /// and returns the closest qualifying bucket.
    ///
    /// An exact bucket wins outright. Otherwise the bucket minimizing
    /// `|target - sum|` is returned, provided that difference is within
    /// `item_tolerance` scaled by that bucket's result count.
    fn nearest_match(&mut self, target: i64, item_tolerance: i64) -> Vec<Vec<usize>> {
        self.build_subsets(target + item_tolerance * self.values.len() as i64);
        if let Some(subsets) = self.sums.get(&target) {
            return subsets.clone();
        }
        let mut nearest: Option<&Vec<Vec<usize>>> = None;
        let mut min_diff = i64::MAX;
        for (key, subsets) in &self.sums {
            let diff = (target - key).abs();
            if diff <= item_tolerance * subsets.len() as i64 && diff < min_diff {
                nearest = Some(subsets);
                min_diff = diff;
            }
        }
        nearest.cloned().unwrap_or_default()
    }

    /// Populates the bucket table with every subset sum reachable using the
    /// usable items, each bucket capped at `max_results` entries.
    fn build_subsets(&mut self, max_sum: i64) {
        let mut order: Vec<usize> = (0..self.values.len())
            .filter(|&i| self.values[i] != 0 && self.values[i] <= max_sum)
            .collect();
        order.sort_by_key(|&i| self.values[i]);
        for index in order {
            let value = self.values[index];
            // Per-item buffer, merged afterwards so an item is never
            // combined with a subset formed during its own pass.
            let mut buffer: BTreeMap<i64, Vec<Vec<usize>>> = BTreeMap::new();
            for (&key, subsets) in self.sums.range(..=max_sum - value) {
                let subset_sum = key + value;
                let existing =
                    self.count(subset_sum) + buffer.get(&subset_sum).map_or(0, Vec::len);
                for sub_subset in self.limited(subsets, existing) {
                    let mut subset = Vec::with_capacity(sub_subset.len() + 1);
                    subset.extend_from_slice(sub_subset);
                    subset.push(index);
                    buffer.entry(subset_sum).or_default().push(subset);
                }
            }
            self.bucket(value).push(vec![index]);
            for (key, mut subsets) in buffer {
                self.bucket(key).append(&mut subsets);
            }
        }
    }

    /// Returns the bucket for `sum`, creating it if absent.
    fn bucket(&mut self, sum: i64) -> &mut Vec<Vec<usize>> {
        let hint = self.max_results.unwrap_or(EXPECTED_RESULTS);
        self.sums.entry(sum).or_insert_with(|| Vec::with_capacity(hint))
    }

    /// Returns the number of subsets already recorded for `sum`.
    fn count(&self, sum: i64) -> usize {
        self.sums.get(&sum).map_or(0, Vec::len)
    }

    /// Limits a source list to the remaining capacity toward `max_results`.
    fn limited<'s>(&self, subsets: &'s [Vec<usize>], existing: usize) -> &'s [Vec<usize>] {
        match self.max_results {
            None => subsets,
            Some(max) => &subsets[..subsets.len().min(max.saturating_sub(existing))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches() {
        let items = [1, 3, 4, 4, 5, 9];

        let matches = subsets(&items, 13, None);

        assert_eq!(matches.len(), 6);
        assert!(matches.contains(&vec![4, 9]));
        assert!(matches.contains(&vec![4, 4, 5]));
        assert!(matches.contains(&vec![1, 3, 9]));
        assert!(matches.contains(&vec![1, 3, 4, 5]));
    }

    #[test]
    fn all_matches_through_complement() {
        let items = [5, 6, 9, 15];

        // 20 > total/2, so this solves for 15 and complements.
        let matches = subsets(&items, 20, None);

        assert_eq!(matches.len(), 2);
        assert!(matches.contains(&vec![5, 6, 9]));
        assert!(matches.contains(&vec![5, 15]));
    }

    #[test]
    fn zero_target_returns_empty() {
        let items = [0, 1, 3, 4, 4, 5, 9];

        assert!(subsets(&items, 0, None).is_empty());
    }

    #[test]
    fn no_matches() {
        let items = [1, 3, 4, 4, 5, 9];

        assert!(subsets(&items, 2, None).is_empty());
        assert_eq!(subset(&items, 2), None);
    }

    #[test]
    fn single_subset() {
        let found = subset(&[1, 3, 4, 4, 5, 9], 13).expect("subset expected");

        assert_eq!(found.iter().sum::<i32>(), 13);
    }

    #[test]
    fn max_results_caps_bucket() {
        let matches = subsets(&[1, 3, 4, 4, 5, 9], 13, Some(2));

        assert_eq!(matches.len(), 2);
        for subset in &matches {
            assert_eq!(subset.iter().sum::<i32>(), 13);
        }
    }

    #[test]
    fn whole_collection_shortcut() {
        let items = [1, 2, 3];

        let matches = subsets(&items, 6, None);

        assert_eq!(matches, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn whole_collection_tolerance_scales_by_item_count() {
        let items = [1, 2, 3];
        let config = SumSearchConfig { item_tolerance: 1, max_results: None };

        // |total - target| = 3 <= tolerance * item_count = 3.
        let matches = subsets_with(&items, 3, |v| *v as i64, &config);

        assert_eq!(matches, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn nearest_match_tolerance_scales_by_bucket_size() {
        let config = SumSearchConfig { item_tolerance: 1, max_results: None };

        // Bucket 10 holds one subset: |12 - 10| = 2 > tolerance * 1.
        let matches = subsets_with(&[10, 20, 40], 12, |v| *v as i64, &config);
        assert!(matches.is_empty());

        // Bucket 10 holds two subsets: |12 - 10| = 2 <= tolerance * 2.
        let matches = subsets_with(&[10, 10, 40], 12, |v| *v as i64, &config);
        assert_eq!(matches, vec![vec![10], vec![10]]);
    }

    #[test]
    fn complement_law() {
        let items = [5, 6, 9, 15];
        let total: i32 = items.iter().sum();

        let low = subsets(&items, 15, None);
        let high = subsets(&items, total - 15, None);

        assert_eq!(low.len(), high.len());
        for subset in &low {
            let complement: Vec<i32> = {
                let mut remaining = items.to_vec();
                for item in subset {
                    let pos = remaining.iter().position(|v| v == item).unwrap();
                    remaining.remove(pos);
                }
                remaining
            };
            assert!(high.contains(&complement), "missing complement of {subset:?}");
        }
    }

    #[test]
    fn decimal_subsets_match_exactly() {
        let items: Vec<Decimal> =
            ["1.25", "3.75", "4.00", "5.50"].iter().map(|s| s.parse().unwrap()).collect();

        let matches = decimal_sum_subsets("5.00".parse().unwrap(), &items, None).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], vec![items[0], items[1]]);
    }

    #[test]
    fn decimal_subset_not_found_is_none() {
        let items: Vec<Decimal> = ["1.25", "3.75"].iter().map(|s| s.parse().unwrap()).collect();

        let found = decimal_subset("2.00".parse().unwrap(), &items).unwrap();

        assert_eq!(found, None);
    }

    #[test]
    fn decimal_adapter_entry_point() {
        #[derive(Debug, Clone, PartialEq)]
        struct Txn {
            amount: Decimal,
        }
        let txn = |s: &str| Txn { amount: s.parse().unwrap() };
        let items = vec![txn("10.01"), txn("2.50"), txn("7.49")];

        let matches = decimal_subsets(
            "9.99".parse().unwrap(),
            Decimal::ZERO,
            &items,
            |t: &Txn| t.amount,
            None,
        )
        .unwrap();

        assert_eq!(matches, vec![vec![items[1].clone(), items[2].clone()]]);
    }

    mod randomized {
        use rand::seq::SliceRandom;
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        use super::*;

        fn check_all(matches: &[Vec<i64>], target: i64) {
            assert!(!matches.is_empty(), "no subset found for {target}");
            for subset in matches {
                assert_eq!(subset.iter().sum::<i64>(), target);
            }
        }

        fn plant_subset(rng: &mut ChaCha8Rng, subset_size: usize, total_size: usize, max_item: i64) {
            let mut items: Vec<i64> = (0..total_size).map(|_| rng.random_range(1..max_item)).collect();
            let subtotal: i64 = items.iter().take(subset_size).sum();
            let total: i64 = items.iter().sum();
            items.shuffle(rng);

            let single = subset(&items, subtotal).expect("subset expected");
            assert_eq!(single.iter().sum::<i64>(), subtotal);
            let mirrored = subset(&items, total - subtotal).expect("subset expected");
            assert_eq!(mirrored.iter().sum::<i64>(), total - subtotal);
            check_all(&subsets(&items, subtotal, Some(10)), subtotal);
            check_all(&subsets(&items, total - subtotal, Some(10)), total - subtotal);
        }

        #[test]
        fn planted_integer_subsets() {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            plant_subset(&mut rng, 5, 10, 100);
            plant_subset(&mut rng, 2, 10, 100);
            plant_subset(&mut rng, 20, 40, 1000);
            plant_subset(&mut rng, 3, 7, 100);
        }

        #[test]
        fn planted_decimal_subsets() {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            for &(subset_size, total_size) in &[(5usize, 10usize), (2, 10), (3, 7)] {
                let mut items: Vec<Decimal> = (0..total_size)
                    .map(|_| Decimal::new(rng.random_range(1..100_000_000), 6))
                    .collect();
                let subtotal: Decimal = items.iter().take(subset_size).copied().sum();
                items.shuffle(&mut rng);

                let found = decimal_subset(subtotal, &items).unwrap().expect("subset expected");
                assert_eq!(found.iter().sum::<Decimal>(), subtotal);
                let matches = decimal_sum_subsets(subtotal, &items, Some(2)).unwrap();
                assert!(!matches.is_empty());
                for subset in &matches {
                    assert_eq!(subset.iter().sum::<Decimal>(), subtotal);
                }
            }
        }
    }
}
