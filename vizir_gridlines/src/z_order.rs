// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for gridlines within a chart.
//!
//! Gridlines sit above the plot background but below every series mark, including filled
//! bands such as confidence intervals. Within the grid, minor lines are painted first so that
//! major lines render on top of them.
//!
//! Renderers should sort by `(z_index, key)` for a deterministic tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Minor gridlines.
pub const MINOR_GRID_LINES: i32 = -60;
/// Major gridlines.
pub const MAJOR_GRID_LINES: i32 = -50;
/// Filled series marks (bars, areas, confidence bands).
pub const SERIES_FILL: i32 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_sits_between_background_and_series() {
        let order = [PLOT_BACKGROUND, MINOR_GRID_LINES, MAJOR_GRID_LINES, SERIES_FILL];
        assert!(
            order.windows(2).all(|w| w[0] < w[1]),
            "unexpected layering: {order:?}"
        );
    }
}
