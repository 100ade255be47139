// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Major and minor gridline geometry for 2D Cartesian charts.
//!
//! A host chart owns tick selection and the render surface. This crate sits between the two:
//! - **Minor ticks** are derived by evenly subdividing each interval between major ticks.
//! - **Gridlines** are produced by mapping every major and minor value into pixel space and
//!   emitting one line segment per value, spanning the plot rectangle.
//!
//! Lines come back in paint order (minor vertical, minor horizontal, major vertical, major
//! horizontal) so major lines end up on top of minor ones. Drawing is left to the host.
//!
//! ```
//! use vizir_gridlines::{GridlinesSpec, Tier};
//!
//! let x_ticks = [0.0, 10.0, 20.0];
//! let y_ticks = [0.0, 50.0, 100.0];
//! let spec = GridlinesSpec::new(x_ticks, y_ticks, (0.0, 20.0), (0.0, 100.0))
//!     .with_size(800.0, 500.0)
//!     .with_minor_divisions(2, 2);
//! let lines = spec.lines();
//! assert_eq!(lines.iter().filter(|l| l.tier == Tier::Minor).count(), 4);
//! assert_eq!(lines.iter().filter(|l| l.tier == Tier::Major).count(), 6);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod gridlines;
mod minor;
mod scale;
mod segment;
mod style;
mod z_order;

pub use config::{
    DEFAULT_HEIGHT, DEFAULT_MARGIN, DEFAULT_WIDTH, DEFAULT_X_MINOR_DIVISIONS,
    DEFAULT_Y_MINOR_DIVISIONS, GridlinesSpec, Margin, ResolvedGridlines,
};
pub use gridlines::render_gridlines;
pub use minor::minor_positions;
pub use scale::{CoordinateMap, HostMap, LinearMap, ScaleFn};
pub use segment::{GridLine, GridLineKey, Orientation, Tier};
pub use style::{
    GridStyle, MAJOR_OPACITY, MAJOR_STROKE, MAJOR_STROKE_WIDTH, MINOR_OPACITY, MINOR_STROKE,
    MINOR_STROKE_WIDTH, StrokeStyle,
};
pub use z_order::*;
