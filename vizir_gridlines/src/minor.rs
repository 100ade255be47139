// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minor tick placement.
//!
//! Minor ticks subdivide each interval between two consecutive major ticks into equal parts.
//! Nothing is extrapolated past the first or last major tick.

extern crate alloc;

use alloc::vec::Vec;

/// Returns the minor tick values between consecutive `major_ticks`.
///
/// Each interval `(a, b)` is split into `subdivisions` equal parts, producing the
/// `subdivisions - 1` interior values `a + i * (b - a) / subdivisions`. Values are emitted
/// interval by interval, in ascending offset within each interval.
///
/// `major_ticks` must already be in ascending order; it is not sorted here. A duplicate tick
/// (a zero-width interval) yields coincident values at that tick.
///
/// Returns an empty vector when there are fewer than two major ticks or when
/// `subdivisions <= 1`. A `subdivisions` of `0` is treated as `1`.
pub fn minor_positions(major_ticks: &[f64], subdivisions: usize) -> Vec<f64> {
    let subdivisions = subdivisions.max(1);
    if major_ticks.len() < 2 || subdivisions == 1 {
        return Vec::new();
    }

    let k = subdivisions as f64;
    let mut out = minor_count(major_ticks.len(), subdivisions)
        .map(Vec::with_capacity)
        .unwrap_or_default();
    for w in major_ticks.windows(2) {
        let (a, b) = (w[0], w[1]);
        let width = b - a;
        out.extend((1..subdivisions).map(|i| a + i as f64 * width / k));
    }
    out
}

/// Number of minor values for `ticks` major ticks, or `None` if it overflows `usize`.
fn minor_count(ticks: usize, subdivisions: usize) -> Option<usize> {
    ticks
        .saturating_sub(1)
        .checked_mul(subdivisions.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn halves_each_interval() {
        assert_eq!(minor_positions(&[0.0, 10.0, 20.0], 2), vec![5.0, 15.0]);
    }

    #[test]
    fn thirds_are_evenly_spaced() {
        let minor = minor_positions(&[0.0, 3.0, 6.0], 3);
        assert_eq!(minor, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn count_matches_interval_product() {
        let major = [-40.0, -12.5, 0.0, 7.25, 100.0];
        for k in 2..8 {
            let minor = minor_positions(&major, k);
            assert_eq!(
                minor.len(),
                (major.len() - 1) * (k - 1),
                "unexpected minor count for k={k}"
            );
        }
    }

    #[test]
    fn values_lie_strictly_inside_their_interval() {
        let major = [1.0, 2.5, 4.0, 10.0];
        let k = 4;
        let minor = minor_positions(&major, k);
        for (i, chunk) in minor.chunks(k - 1).enumerate() {
            let (a, b) = (major[i], major[i + 1]);
            for v in chunk {
                assert!(*v > a && *v < b, "{v} not inside ({a}, {b})");
            }
            assert!(
                chunk.windows(2).all(|w| w[0] < w[1]),
                "interval {i} not ascending: {chunk:?}"
            );
        }
    }

    #[test]
    fn single_subdivision_yields_nothing() {
        assert!(minor_positions(&[0.0, 10.0, 20.0], 1).is_empty());
    }

    #[test]
    fn zero_subdivisions_is_clamped() {
        assert!(minor_positions(&[0.0, 10.0, 20.0], 0).is_empty());
    }

    #[test]
    fn minor_count_reports_overflow() {
        assert_eq!(minor_count(4, 3), Some(6));
        assert_eq!(minor_count(0, 3), Some(0));
        assert_eq!(minor_count(4, usize::MAX / 2), None);
    }

    #[test]
    fn huge_subdivision_count_with_one_tick_is_empty() {
        assert!(minor_positions(&[7.0], usize::MAX / 2).is_empty());
    }

    #[test]
    fn too_few_major_ticks_yields_nothing() {
        assert!(minor_positions(&[], 4).is_empty());
        assert!(minor_positions(&[3.0], 4).is_empty());
    }

    #[test]
    fn duplicate_ticks_yield_coincident_values() {
        let minor = minor_positions(&[5.0, 5.0], 3);
        assert_eq!(minor, vec![5.0, 5.0]);
    }
}
