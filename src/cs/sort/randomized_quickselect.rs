use log::trace;
use rand::Rng;

use super::partition::partition_unchecked;
use crate::error::{Error, Result};

/// Returns the `k`-th smallest element (zero-based) of `arr`.
///
/// Iterative randomized selection: a pivot is drawn uniformly from the
/// current bounds, the bounds are partitioned around it, and only the side
/// holding `k` is kept. Expected running time is linear.
///
/// `arr` is permuted in place. Callers that need the original order must
/// copy it first. After a successful call `arr[k]` holds the returned value.
///
/// # Errors
///
/// [`Error::RankOutOfBounds`] if `k >= arr.len()`.
pub fn randomized_quickselect<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    if k >= arr.len() {
        return Err(Error::RankOutOfBounds {
            rank: k,
            len: arr.len(),
        });
    }

    let mut left = 0;
    let mut right = arr.len() - 1;
    // left <= k <= right holds on every iteration, so `pivot - 1` cannot
    // underflow: pivot > k >= 0.
    while left <= right {
        let pivot = rng.gen_range(left..=right);
        let pivot = partition_unchecked(arr, left, right, pivot);
        trace!("partitioned [{left}, {right}] at {pivot} looking for {k}");
        if pivot == k {
            return Ok(arr[pivot]);
        } else if pivot < k {
            left = pivot + 1;
        } else {
            right = pivot - 1;
        }
    }

    Err(Error::ExhaustedBounds {
        rank: k,
        left,
        right,
    })
}
