// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangle partitioning from per-axis split sequences.
//!
//! A split sequence is an ordered list of segment widths along one axis.
//! Its prefix sums give the cut coordinates; the first and last coincide
//! with the plot perimeter, everything in between becomes an interior wall.

use crate::error::{Error, Result};
use crate::types::{Point2D, Rect, Segment};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Relative tolerance used when comparing split sums with a dimension
const SUM_TOLERANCE: f64 = 1e-9;

/// What to do when a split sequence does not add up to its dimension
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Reject with [`Error::DimensionMismatch`]
    Strict,
    /// Scale every segment proportionally so the sum matches
    #[default]
    Rescale,
}

/// Cumulative sums starting at zero: `[0, s0, s0 + s1, ...]`
pub fn prefix_sums(splits: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(splits.len() + 1);
    sums.push(0.0);
    let mut acc = 0.0;
    for s in splits {
        acc += s;
        sums.push(acc);
    }
    sums
}

fn validate_splits(splits: &[f64]) -> Result<f64> {
    if splits.is_empty() {
        return Err(Error::EmptySplits);
    }
    for (index, &value) in splits.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::NonPositiveSplit { index, value });
        }
    }
    Ok(splits.iter().sum())
}

fn sums_match(dimension: f64, sum: f64) -> bool {
    (dimension - sum).abs() <= SUM_TOLERANCE * dimension.abs().max(1.0)
}

/// Interior cut coordinates of `dimension` split by `splits`.
///
/// The result excludes the first and last prefix sum, is strictly
/// increasing and lies strictly inside `(0, dimension)`.
pub fn partition(dimension: f64, splits: &[f64]) -> Result<Vec<f64>> {
    let sum = validate_splits(splits)?;
    if !sums_match(dimension, sum) {
        return Err(Error::DimensionMismatch { dimension, sum });
    }

    let sums = prefix_sums(splits);
    Ok(sums[1..sums.len() - 1].to_vec())
}

/// Scale `splits` proportionally so that they sum exactly to `dimension`
pub fn rescale_splits(dimension: f64, splits: &[f64]) -> Result<Vec<f64>> {
    if !dimension.is_finite() || dimension <= 0.0 {
        return Err(Error::InvalidDimension {
            name: "dimension",
            value: dimension,
        });
    }
    let sum = validate_splits(splits)?;
    let factor = dimension / sum;

    let mut scaled: Vec<f64> = splits.iter().map(|s| s * factor).collect();
    // Last segment absorbs floating point drift
    let head: f64 = scaled[..scaled.len() - 1].iter().sum();
    if let Some(last) = scaled.last_mut() {
        *last = dimension - head;
    }
    Ok(scaled)
}

fn apply_policy(dimension: f64, splits: &[f64], policy: SplitPolicy, axis: &str) -> Result<Vec<f64>> {
    let sum = validate_splits(splits)?;
    if sums_match(dimension, sum) {
        return Ok(splits.to_vec());
    }
    match policy {
        SplitPolicy::Strict => Err(Error::DimensionMismatch { dimension, sum }),
        SplitPolicy::Rescale => {
            tracing::debug!(axis, dimension, sum, factor = dimension / sum, "Rescaling splits");
            rescale_splits(dimension, splits)
        }
    }
}

/// Layout grid over a `width` x `depth` rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutGrid {
    pub width: f64,
    pub depth: f64,
    /// Effective x splits (after rescaling, if any)
    pub splits_x: Vec<f64>,
    /// Effective y splits (after rescaling, if any)
    pub splits_y: Vec<f64>,
    /// Prefix sums of `splits_x`
    pub xs: Vec<f64>,
    /// Prefix sums of `splits_y`
    pub ys: Vec<f64>,
    /// Interior x cuts, as returned by [`partition`]
    cuts_x: Vec<f64>,
    /// Interior y cuts, as returned by [`partition`]
    cuts_y: Vec<f64>,
}

impl LayoutGrid {
    pub fn new(
        width: f64,
        depth: f64,
        splits_x: &[f64],
        splits_y: &[f64],
        policy: SplitPolicy,
    ) -> Result<Self> {
        let splits_x = apply_policy(width, splits_x, policy, "x")?;
        let splits_y = apply_policy(depth, splits_y, policy, "y")?;
        let cuts_x = partition(width, &splits_x)?;
        let cuts_y = partition(depth, &splits_y)?;
        let xs = prefix_sums(&splits_x);
        let ys = prefix_sums(&splits_y);

        Ok(Self {
            width,
            depth,
            splits_x,
            splits_y,
            xs,
            ys,
            cuts_x,
            cuts_y,
        })
    }

    /// Number of intervals along x
    pub fn columns(&self) -> usize {
        self.splits_x.len()
    }

    /// Number of intervals along y
    pub fn rows(&self) -> usize {
        self.splits_y.len()
    }

    pub fn vertical_cuts(&self) -> &[f64] {
        &self.cuts_x
    }

    pub fn horizontal_cuts(&self) -> &[f64] {
        &self.cuts_y
    }

    /// Full-span interior walls: verticals first, then horizontals
    pub fn interior_walls(&self) -> Vec<Segment> {
        let vertical = self.vertical_cuts().iter().map(|&x| {
            Segment::new(Point2D::new(x, 0.0), Point2D::new(x, self.depth))
        });
        let horizontal = self.horizontal_cuts().iter().map(|&y| {
            Segment::new(Point2D::new(0.0, y), Point2D::new(self.width, y))
        });
        vertical.chain(horizontal).collect()
    }

    /// Single cell at x interval `ix` and y interval `iy`
    pub fn cell(&self, ix: usize, iy: usize) -> Result<Rect> {
        self.span(ix..=ix, iy..=iy)
    }

    /// Rectangle covering the given inclusive interval ranges
    pub fn span(&self, x: RangeInclusive<usize>, y: RangeInclusive<usize>) -> Result<Rect> {
        let (x0, x1) = Self::interval(&self.xs, x, "x")?;
        let (y0, y1) = Self::interval(&self.ys, y, "y")?;
        Ok(Rect::from_corners(Point2D::new(x0, y0), Point2D::new(x1, y1)))
    }

    fn interval(sums: &[f64], range: RangeInclusive<usize>, axis: &'static str) -> Result<(f64, f64)> {
        let len = sums.len() - 1;
        let (start, end) = range.into_inner();
        for index in [start, end] {
            if index >= len {
                return Err(Error::CellOutOfRange { axis, index, len });
            }
        }
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        Ok((sums[lo], sums[hi + 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const COMPACTA_X: [f64; 6] = [400.0, 3000.0, 400.0, 2000.0, 400.0, 1500.0];
    const COMPACTA_Y: [f64; 5] = [400.0, 1600.0, 800.0, 1600.0, 400.0];

    #[test]
    fn test_prefix_sums() {
        let sums = prefix_sums(&[1.0, 2.0, 3.0]);
        assert_eq!(sums, vec![0.0, 1.0, 3.0, 6.0]);
    }

    #[test]
    fn test_partition_matching_sum() {
        let cuts = partition(7700.0, &COMPACTA_X).unwrap();
        assert_eq!(cuts, vec![400.0, 3400.0, 3800.0, 5800.0, 6200.0]);
    }

    #[test]
    fn test_partition_cuts_strictly_increasing_and_inside() {
        let sequences: [&[f64]; 4] = [
            &COMPACTA_X,
            &COMPACTA_Y,
            &[0.5, 0.25, 0.25],
            &[10.0, 1.0, 1.0, 1.0, 1.0, 6.0],
        ];
        for splits in sequences {
            let dimension: f64 = splits.iter().sum();
            let cuts = partition(dimension, splits).unwrap();
            assert_eq!(cuts.len(), splits.len() - 1);
            for pair in cuts.windows(2) {
                assert!(pair[0] < pair[1], "cuts not increasing: {:?}", cuts);
            }
            for &c in &cuts {
                assert!(c > 0.0 && c < dimension, "cut {} outside (0, {})", c, dimension);
            }
        }
    }

    #[test]
    fn test_partition_single_split_has_no_interior_cut() {
        assert!(partition(5.0, &[5.0]).unwrap().is_empty());
    }

    #[test]
    fn test_partition_mismatched_sum_is_rejected() {
        let err = partition(8000.0, &COMPACTA_X).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                dimension: 8000.0,
                sum: 7700.0
            }
        );
    }

    #[test]
    fn test_partition_rejects_bad_splits() {
        assert_eq!(partition(1.0, &[]).unwrap_err(), Error::EmptySplits);
        assert!(matches!(
            partition(1.0, &[1.5, -0.5]),
            Err(Error::NonPositiveSplit { index: 1, .. })
        ));
        assert!(matches!(
            partition(1.0, &[0.0, 1.0]),
            Err(Error::NonPositiveSplit { index: 0, .. })
        ));
    }

    #[test]
    fn test_rescale_splits_matches_dimension() {
        let scaled = rescale_splits(8000.0, &COMPACTA_X).unwrap();
        assert_relative_eq!(scaled.iter().sum::<f64>(), 8000.0, epsilon = 1e-9);
        assert_relative_eq!(scaled[1], 3000.0 * 8000.0 / 7700.0, epsilon = 1e-9);

        let cuts = partition(8000.0, &scaled).unwrap();
        assert_eq!(cuts.len(), 5);
    }

    #[test]
    fn test_grid_strict_policy_rejects_mismatch() {
        let result = LayoutGrid::new(8000.0, 4800.0, &COMPACTA_X, &COMPACTA_Y, SplitPolicy::Strict);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_grid_rescale_policy_aligns_with_perimeter() {
        let grid =
            LayoutGrid::new(8000.0, 10000.0, &COMPACTA_X, &COMPACTA_Y, SplitPolicy::Rescale).unwrap();
        assert_relative_eq!(*grid.xs.last().unwrap(), 8000.0, epsilon = 1e-9);
        assert_relative_eq!(*grid.ys.last().unwrap(), 10000.0, epsilon = 1e-9);
        assert_eq!(grid.vertical_cuts().len(), 5);
        assert_eq!(grid.horizontal_cuts().len(), 4);
    }

    #[test]
    fn test_grid_cuts_come_from_partition() {
        let grid =
            LayoutGrid::new(8000.0, 10000.0, &COMPACTA_X, &COMPACTA_Y, SplitPolicy::Rescale).unwrap();
        assert_eq!(
            grid.vertical_cuts(),
            partition(8000.0, &grid.splits_x).unwrap().as_slice()
        );
        assert_eq!(
            grid.horizontal_cuts(),
            partition(10000.0, &grid.splits_y).unwrap().as_slice()
        );
        assert_eq!(grid.vertical_cuts(), &grid.xs[1..grid.xs.len() - 1]);
    }

    #[test]
    fn test_grid_interior_walls_span_full_plot() {
        let grid =
            LayoutGrid::new(7700.0, 4800.0, &COMPACTA_X, &COMPACTA_Y, SplitPolicy::Strict).unwrap();
        let walls = grid.interior_walls();
        assert_eq!(walls.len(), 9);

        let (vertical, horizontal): (Vec<&Segment>, Vec<&Segment>) =
            walls.iter().partition(|w| w.is_vertical());
        assert_eq!(vertical.len(), 5);
        for w in vertical {
            assert_relative_eq!(w.length(), 4800.0);
        }
        for w in horizontal {
            assert_relative_eq!(w.length(), 7700.0);
        }
    }

    #[test]
    fn test_grid_cells() {
        let grid =
            LayoutGrid::new(7700.0, 4800.0, &COMPACTA_X, &COMPACTA_Y, SplitPolicy::Strict).unwrap();
        let cell = grid.cell(1, 3).unwrap();
        assert_eq!(cell.origin, Point2D::new(400.0, 2800.0));
        assert_relative_eq!(cell.width, 3000.0);
        assert_relative_eq!(cell.height, 1600.0);

        let span = grid.span(5..=5, 1..=3).unwrap();
        assert_eq!(span.origin, Point2D::new(6200.0, 400.0));
        assert_relative_eq!(span.height, 4000.0);

        assert!(matches!(
            grid.cell(6, 0),
            Err(Error::CellOutOfRange { axis: "x", index: 6, len: 6 })
        ));
    }
}
