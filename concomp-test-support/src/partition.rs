//! Partition normalisation for comparing component assignments.
//!
//! Component labels are arbitrary ids, so two algorithms can agree on the
//! partition while disagreeing on every value. Relabelling in first-seen
//! order gives each partition exactly one representation.

use std::collections::HashMap;

/// Relabels `labels` to consecutive ids in first-seen order.
///
/// # Examples
/// ```
/// use concomp_test_support::partition::canonical_labels;
///
/// assert_eq!(canonical_labels(&[7, 7, 3, 9, 3]), vec![0, 0, 1, 2, 1]);
/// ```
#[must_use]
pub fn canonical_labels(labels: &[usize]) -> Vec<usize> {
    let mut assigned: HashMap<usize, usize> = HashMap::new();
    labels
        .iter()
        .map(|label| {
            let next = assigned.len();
            *assigned.entry(*label).or_insert(next)
        })
        .collect()
}

/// Returns `true` when both label slices describe the same partition.
#[must_use]
pub fn same_partition(left: &[usize], right: &[usize]) -> bool {
    left.len() == right.len() && canonical_labels(left) == canonical_labels(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::already_canonical(&[0, 1, 1], &[0, 1, 1])]
    #[case::large_ids(&[4, 4, 2, 2], &[0, 0, 1, 1])]
    #[case::interleaved(&[2, 0, 2, 0], &[0, 1, 0, 1])]
    fn relabels_in_first_seen_order(#[case] raw: &[usize], #[case] expected: &[usize]) {
        assert_eq!(canonical_labels(raw), expected);
    }

    #[rstest]
    #[case(&[0, 0, 2], &[5, 5, 1], true)]
    #[case(&[0, 0, 2], &[5, 1, 1], false)]
    #[case(&[0, 0], &[0, 0, 0], false)]
    fn compares_partitions(#[case] left: &[usize], #[case] right: &[usize], #[case] same: bool) {
        assert_eq!(same_partition(left, right), same);
    }
}
