//! Comparator-driven sort driver.

use std::cmp::Ordering;

/// Sort in place with a caller-supplied comparator.
pub fn sort_with<T, F>(values: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    values.sort_unstable_by(cmp);
}

/// Ascending comparator for any ordered type.
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// `[n, n - 1, .., 1]`.
pub fn descending_sequence(n: u32) -> Vec<u32> {
    (1..=n).rev().collect()
}

/// Build the descending sequence and sort it ascending.
pub fn run_sort_driver(n: u32) -> Vec<u32> {
    let mut values = descending_sequence(n);
    sort_with(&mut values, ascending);
    values
}
