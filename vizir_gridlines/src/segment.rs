// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline segment descriptors.
//!
//! A gridline is a straight segment spanning the plot rectangle, tagged with its visual
//! [`Tier`] and its [`Orientation`]. Segments are plain values; hosts draw them however they
//! like (SVG `<line>`, a `kurbo::BezPath`, a GPU line list, ...).

use core::fmt;

use kurbo::{Line, Rect};

use crate::z_order;

/// The visual tier of a gridline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// A gridline at a labeled (major) tick.
    Major,
    /// An unlabeled subdivision between two major ticks.
    Minor,
}

/// The direction a gridline runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A vertical line at an x position, spanning the plot height.
    Vertical,
    /// A horizontal line at a y position, spanning the plot width.
    Horizontal,
}

/// A single gridline segment in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Visual tier.
    pub tier: Tier,
    /// Line direction.
    pub orientation: Orientation,
    /// Position of this line within its `(tier, orientation)` group.
    pub index: usize,
    /// The data-space value this line was mapped from.
    pub value: f64,
    /// Start and end points in pixel coordinates.
    pub line: Line,
}

impl GridLine {
    /// Creates a vertical line at pixel `x`, spanning the height of `plot`.
    pub fn vertical(tier: Tier, index: usize, value: f64, x: f64, plot: Rect) -> Self {
        Self {
            tier,
            orientation: Orientation::Vertical,
            index,
            value,
            line: Line::new((x, plot.y0), (x, plot.y1)),
        }
    }

    /// Creates a horizontal line at pixel `y`, spanning the width of `plot`.
    pub fn horizontal(tier: Tier, index: usize, value: f64, y: f64, plot: Rect) -> Self {
        Self {
            tier,
            orientation: Orientation::Horizontal,
            index,
            value,
            line: Line::new((plot.x0, y), (plot.x1, y)),
        }
    }

    /// Returns a stable key for this line, e.g. `minor-v-2`.
    pub fn key(&self) -> GridLineKey {
        GridLineKey {
            tier: self.tier,
            orientation: self.orientation,
            index: self.index,
        }
    }

    /// Returns the rendering order hint for this line's tier.
    pub fn z_index(&self) -> i32 {
        match self.tier {
            Tier::Major => z_order::MAJOR_GRID_LINES,
            Tier::Minor => z_order::MINOR_GRID_LINES,
        }
    }
}

/// Stable identity for a gridline, independent of its pixel position.
///
/// Two renders of the same chart produce equal keys for corresponding lines, so renderers can
/// diff them across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridLineKey {
    /// Visual tier.
    pub tier: Tier,
    /// Line direction.
    pub orientation: Orientation,
    /// Position within the `(tier, orientation)` group.
    pub index: usize,
}

impl fmt::Display for GridLineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self.tier {
            Tier::Major => "major",
            Tier::Minor => "minor",
        };
        let orientation = match self.orientation {
            Orientation::Vertical => 'v',
            Orientation::Horizontal => 'h',
        };
        write!(f, "{tier}-{orientation}-{}", self.index)
    }
}
