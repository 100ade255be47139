// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline generation.
//!
//! Lines are emitted in paint order:
//! 1. minor vertical
//! 2. minor horizontal
//! 3. major vertical
//! 4. major horizontal
//!
//! so that a host drawing them in sequence leaves major lines on top of minor ones.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::config::{GridlinesSpec, ResolvedGridlines};
use crate::minor::minor_positions;
use crate::scale::CoordinateMap;
use crate::segment::{GridLine, Tier};

/// Generates the gridlines for `spec`.
///
/// Equivalent to `spec.resolve().lines(&spec.x_ticks, &spec.y_ticks)`.
pub fn render_gridlines(spec: &GridlinesSpec) -> Vec<GridLine> {
    spec.resolve().lines(&spec.x_ticks, &spec.y_ticks)
}

impl GridlinesSpec {
    /// Generates the gridlines for this spec. See [`render_gridlines`].
    pub fn lines(&self) -> Vec<GridLine> {
        render_gridlines(self)
    }
}

impl ResolvedGridlines {
    /// Minor x values for the given major x ticks.
    pub fn minor_x(&self, x_ticks: &[f64]) -> Vec<f64> {
        minor_positions(x_ticks, self.x_minor_divisions())
    }

    /// Minor y values for the given major y ticks.
    pub fn minor_y(&self, y_ticks: &[f64]) -> Vec<f64> {
        minor_positions(y_ticks, self.y_minor_divisions())
    }

    /// Generates gridlines for the given major ticks.
    ///
    /// Both tick slices must be ascending. Empty slices are valid and contribute no lines.
    pub fn lines(&self, x_ticks: &[f64], y_ticks: &[f64]) -> Vec<GridLine> {
        let minor_x = self.minor_x(x_ticks);
        let minor_y = self.minor_y(y_ticks);
        let plot = self.plot();

        let mut out =
            Vec::with_capacity(minor_x.len() + minor_y.len() + x_ticks.len() + y_ticks.len());
        out.extend(grid_vertical(Tier::Minor, &minor_x, self.x_map(), plot));
        out.extend(grid_horizontal(Tier::Minor, &minor_y, self.y_map(), plot));
        out.extend(grid_vertical(Tier::Major, x_ticks, self.x_map(), plot));
        out.extend(grid_horizontal(Tier::Major, y_ticks, self.y_map(), plot));

        log::trace!(
            "gridlines: {} minor x, {} minor y, {} major x, {} major y",
            minor_x.len(),
            minor_y.len(),
            x_ticks.len(),
            y_ticks.len()
        );
        out
    }
}

fn grid_vertical<'a>(
    tier: Tier,
    values: &'a [f64],
    map: &'a dyn CoordinateMap,
    plot: Rect,
) -> impl Iterator<Item = GridLine> + 'a {
    values
        .iter()
        .copied()
        .enumerate()
        .map(move |(i, v)| GridLine::vertical(tier, i, v, map.map(v), plot))
}

fn grid_horizontal<'a>(
    tier: Tier,
    values: &'a [f64],
    map: &'a dyn CoordinateMap,
    plot: Rect,
) -> impl Iterator<Item = GridLine> + 'a {
    values
        .iter()
        .copied()
        .enumerate()
        .map(move |(i, v)| GridLine::horizontal(tier, i, v, map.map(v), plot))
}
