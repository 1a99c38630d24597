//! Lomuto partitioning around an explicitly chosen pivot.
//!
//! The pivot value is parked at `right`, every element strictly less than it is
//! swapped into a growing prefix starting at `left`, and the pivot is finally
//! dropped in right after that prefix. Elements equal to the pivot stay on the
//! right-hand side, so equal values keep no particular relative order.

use crate::error::{Error, Result};

/// Partitions `arr[left..=right]` around the value at `pivot_index`.
///
/// Returns the final position `p` of the pivot: every element in
/// `arr[left..p]` is strictly less than the pivot and every element in
/// `arr[p + 1..=right]` is greater than or equal to it. Elements outside
/// `left..=right` are not touched.
///
/// This is destructive: `arr` is permuted in place.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless
/// `left <= pivot_index <= right < arr.len()`.
pub fn partition<T: Ord>(
    arr: &mut [T],
    left: usize,
    right: usize,
    pivot_index: usize,
) -> Result<usize> {
    if right >= arr.len() {
        return Err(Error::invalid(format!(
            "right bound {right} is out of range for length {}",
            arr.len()
        )));
    }
    if left > pivot_index || pivot_index > right {
        return Err(Error::invalid(format!(
            "pivot index {pivot_index} is outside bounds [{left}, {right}]"
        )));
    }
    Ok(partition_unchecked(arr, left, right, pivot_index))
}

/// Same as [`partition`] with the bounds already validated by the caller.
pub(crate) fn partition_unchecked<T: Ord>(
    arr: &mut [T],
    left: usize,
    right: usize,
    pivot_index: usize,
) -> usize {
    arr.swap(pivot_index, right);
    let mut store = left;
    for i in left..right {
        if arr[i] < arr[right] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, right);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partitioned(arr: &[i32], left: usize, right: usize, p: usize) {
        let pivot = arr[p];
        assert!(arr[left..p].iter().all(|&x| x < pivot));
        assert!(arr[p + 1..=right].iter().all(|&x| x >= pivot));
    }

    #[test]
    fn test_partition_whole_slice() {
        let mut arr = [5, 3, 1, 4, 2];
        let p = partition(&mut arr, 0, 4, 0).unwrap();
        assert_eq!(p, 4);
        assert_eq!(arr[p], 5);
        assert_partitioned(&arr, 0, 4, p);
    }

    #[test]
    fn test_partition_middle_pivot() {
        let mut arr = [9, 7, 5, 11, 12, 2, 14, 3, 10, 6];
        let p = partition(&mut arr, 0, 9, 2).unwrap();
        assert_eq!(arr[p], 5);
        assert_eq!(p, 2);
        assert_partitioned(&arr, 0, 9, p);
    }

    #[test]
    fn test_partition_subrange_leaves_outside_untouched() {
        let mut arr = [100, 8, 6, 7, 5, -1];
        let p = partition(&mut arr, 1, 4, 3).unwrap();
        assert_eq!(arr[0], 100);
        assert_eq!(arr[5], -1);
        assert_eq!(arr[p], 7);
        assert_eq!(p, 3);
        assert_partitioned(&arr, 1, 4, p);
    }

    #[test]
    fn test_single_element_range() {
        let mut arr = [4, 2, 9];
        assert_eq!(partition(&mut arr, 1, 1, 1).unwrap(), 1);
        assert_eq!(arr, [4, 2, 9]);
    }

    #[test]
    fn test_duplicates_land_on_right() {
        let mut arr = [3, 3, 1, 3, 2];
        let p = partition(&mut arr, 0, 4, 0).unwrap();
        assert_eq!(p, 2);
        assert_eq!(&arr[p..], &[3, 3, 3]);
    }

    #[test]
    fn test_invalid_bounds() {
        let mut arr = [1, 2, 3];
        assert!(matches!(
            partition(&mut arr, 0, 3, 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            partition(&mut arr, 1, 2, 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            partition(&mut arr, 2, 1, 2),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(arr, [1, 2, 3]);
    }
}
