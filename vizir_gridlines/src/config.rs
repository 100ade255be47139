// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline configuration and its resolution.
//!
//! A [`GridlinesSpec`] mirrors what a host chart hands over: ticks, domains, and a set of
//! optional overrides (outer size, view box, scale functions). Overrides are resolved exactly
//! once, by [`GridlinesSpec::resolve`], into a [`ResolvedGridlines`] that the geometry pass
//! consumes without any further fallback logic.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::scale::{CoordinateMap, HostMap, LinearMap, ScaleFn};
use crate::style::GridStyle;

/// Outer width used when neither a view box nor an explicit width is supplied.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Outer height used when neither a view box nor an explicit height is supplied.
pub const DEFAULT_HEIGHT: f64 = 500.0;
/// Default number of subdivisions between major x ticks (monthly lines in a quarter).
pub const DEFAULT_X_MINOR_DIVISIONS: usize = 3;
/// Default number of subdivisions between major y ticks.
pub const DEFAULT_Y_MINOR_DIVISIONS: usize = 2;
/// Default inset of the plot rectangle from the outer bounds.
pub const DEFAULT_MARGIN: Margin = Margin {
    top: 58.0,
    right: 20.0,
    bottom: 35.0,
    left: 5.0,
};

/// Per-side inset of the plot rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the left edge.
    pub left: f64,
}

impl Margin {
    /// Creates a margin from its four sides, in CSS order.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a margin with the same inset on every side.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Returns the plot rectangle for outer bounds of the given `size`.
    pub fn plot_rect(&self, size: Size) -> Rect {
        Rect::new(
            self.left,
            self.top,
            size.width - self.right,
            size.height - self.bottom,
        )
    }
}

impl Default for Margin {
    fn default() -> Self {
        DEFAULT_MARGIN
    }
}

/// Gridline inputs supplied by a host chart.
#[derive(Clone)]
pub struct GridlinesSpec {
    /// Major tick values along x, in ascending order.
    pub x_ticks: Vec<f64>,
    /// Major tick values along y, in ascending order.
    pub y_ticks: Vec<f64>,
    /// X domain in data units. Ignored when `x_scale` is set.
    pub x_domain: (f64, f64),
    /// Y domain in data units. Ignored when `y_scale` is set.
    pub y_domain: (f64, f64),
    /// Outer width. Falls back to [`DEFAULT_WIDTH`].
    pub width: Option<f64>,
    /// Outer height. Falls back to [`DEFAULT_HEIGHT`].
    pub height: Option<f64>,
    /// Inset of the plot rectangle.
    pub margin: Margin,
    /// Number of parts each major x interval is split into.
    pub x_minor_divisions: usize,
    /// Number of parts each major y interval is split into.
    pub y_minor_divisions: usize,
    /// Host x scale. When set, it replaces the linear mapping of `x_domain`.
    pub x_scale: Option<ScaleFn>,
    /// Host y scale. When set, it replaces the linear mapping of `y_domain`.
    pub y_scale: Option<ScaleFn>,
    /// Host view box. Its width and height take precedence over `width`/`height`.
    pub view_box: Option<Rect>,
    /// Per-tier styling.
    pub style: GridStyle,
}

impl core::fmt::Debug for GridlinesSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridlinesSpec")
            .field("x_ticks", &self.x_ticks)
            .field("y_ticks", &self.y_ticks)
            .field("x_domain", &self.x_domain)
            .field("y_domain", &self.y_domain)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("x_minor_divisions", &self.x_minor_divisions)
            .field("y_minor_divisions", &self.y_minor_divisions)
            .field("x_scale", &self.x_scale.is_some())
            .field("y_scale", &self.y_scale.is_some())
            .field("view_box", &self.view_box)
            .field("style", &self.style)
            .finish()
    }
}

impl GridlinesSpec {
    /// Creates a spec from major ticks and domains.
    ///
    /// The returned spec has:
    /// - no explicit size (resolves to [`DEFAULT_WIDTH`] x [`DEFAULT_HEIGHT`])
    /// - `margin = DEFAULT_MARGIN`
    /// - `x_minor_divisions = 3`, `y_minor_divisions = 2`
    /// - no host scales, no view box, and `GridStyle::default()`.
    pub fn new(
        x_ticks: impl Into<Vec<f64>>,
        y_ticks: impl Into<Vec<f64>>,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) -> Self {
        Self {
            x_ticks: x_ticks.into(),
            y_ticks: y_ticks.into(),
            x_domain,
            y_domain,
            width: None,
            height: None,
            margin: DEFAULT_MARGIN,
            x_minor_divisions: DEFAULT_X_MINOR_DIVISIONS,
            y_minor_divisions: DEFAULT_Y_MINOR_DIVISIONS,
            x_scale: None,
            y_scale: None,
            view_box: None,
            style: GridStyle::default(),
        }
    }

    /// Set the outer size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the plot margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Set minor subdivision counts for both axes.
    pub fn with_minor_divisions(mut self, x: usize, y: usize) -> Self {
        self.x_minor_divisions = x;
        self.y_minor_divisions = y;
        self
    }

    /// Use a host mapping for x instead of the linear domain mapping.
    pub fn with_x_scale(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.x_scale = Some(Arc::new(f));
        self
    }

    /// Use a host mapping for y instead of the linear domain mapping.
    pub fn with_y_scale(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.y_scale = Some(Arc::new(f));
        self
    }

    /// Set the host view box.
    pub fn with_view_box(mut self, view_box: Rect) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Set the per-tier styling.
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolves every override into a fixed configuration.
    ///
    /// Precedence, first defined wins:
    /// - width: `view_box` width, `width`, [`DEFAULT_WIDTH`]
    /// - height: `view_box` height, `height`, [`DEFAULT_HEIGHT`]
    /// - x/y mapping: host scale, linear mapping of the domain onto the plot rectangle.
    ///
    /// The linear y mapping is inverted: the domain maximum lands on the top of the plot.
    pub fn resolve(&self) -> ResolvedGridlines {
        let width = self
            .view_box
            .map(|vb| vb.width())
            .or(self.width)
            .unwrap_or(DEFAULT_WIDTH);
        let height = self
            .view_box
            .map(|vb| vb.height())
            .or(self.height)
            .unwrap_or(DEFAULT_HEIGHT);
        let size = Size::new(width, height);
        let plot = self.margin.plot_rect(size);

        let x_map = match &self.x_scale {
            Some(f) => axis_map_host(f),
            None => axis_map_linear("x", self.x_domain, (plot.x0, plot.x1)),
        };
        let (y0, y1) = self.y_domain;
        let y_map = match &self.y_scale {
            Some(f) => axis_map_host(f),
            None => axis_map_linear("y", (y1, y0), (plot.y0, plot.y1)),
        };

        ResolvedGridlines {
            size,
            margin: self.margin,
            plot,
            x_minor_divisions: clamp_divisions("x", self.x_minor_divisions),
            y_minor_divisions: clamp_divisions("y", self.y_minor_divisions),
            x_map,
            y_map,
            style: self.style.clone(),
        }
    }
}

type AxisMap = Arc<dyn CoordinateMap + Send + Sync>;

fn axis_map_host(f: &ScaleFn) -> AxisMap {
    Arc::new(HostMap::new(f.clone()))
}

fn axis_map_linear(axis: &str, domain: (f64, f64), range: (f64, f64)) -> AxisMap {
    let map = LinearMap::new(domain, range);
    if map.is_degenerate() {
        log::warn!(
            "degenerate {axis} domain {domain:?}; every {axis} gridline collapses to {}",
            range.0
        );
    }
    Arc::new(map)
}

fn clamp_divisions(axis: &str, divisions: usize) -> usize {
    if divisions == 0 {
        log::debug!("{axis} minor divisions of 0 clamped to 1");
        return 1;
    }
    divisions
}

/// A fully resolved gridline configuration.
///
/// Produced by [`GridlinesSpec::resolve`]. Cloning is cheap; the coordinate maps are shared.
#[derive(Clone)]
pub struct ResolvedGridlines {
    size: Size,
    margin: Margin,
    plot: Rect,
    x_minor_divisions: usize,
    y_minor_divisions: usize,
    x_map: AxisMap,
    y_map: AxisMap,
    style: GridStyle,
}

impl core::fmt::Debug for ResolvedGridlines {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResolvedGridlines")
            .field("size", &self.size)
            .field("margin", &self.margin)
            .field("plot", &self.plot)
            .field("x_minor_divisions", &self.x_minor_divisions)
            .field("y_minor_divisions", &self.y_minor_divisions)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ResolvedGridlines {
    /// Outer bounds size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Plot margin.
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// The drawable plot rectangle (outer bounds inset by the margin).
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// Minor subdivisions per major x interval (at least 1).
    pub fn x_minor_divisions(&self) -> usize {
        self.x_minor_divisions
    }

    /// Minor subdivisions per major y interval (at least 1).
    pub fn y_minor_divisions(&self) -> usize {
        self.y_minor_divisions
    }

    /// Per-tier styling.
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Maps an x data value to a pixel x coordinate.
    pub fn map_x(&self, value: f64) -> f64 {
        self.x_map.map(value)
    }

    /// Maps a y data value to a pixel y coordinate.
    pub fn map_y(&self, value: f64) -> f64 {
        self.y_map.map(value)
    }

    pub(crate) fn x_map(&self) -> &dyn CoordinateMap {
        &*self.x_map
    }

    pub(crate) fn y_map(&self) -> &dyn CoordinateMap {
        &*self.y_map
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn defaults_resolve_to_fallback_size_and_margin() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 1.0), (0.0, 1.0)).resolve();
        assert_eq!(r.size(), Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(r.margin(), DEFAULT_MARGIN);
        assert_eq!(r.plot(), Rect::new(5.0, 58.0, 780.0, 465.0));
        assert_eq!(r.x_minor_divisions(), 3);
        assert_eq!(r.y_minor_divisions(), 2);
    }

    #[test]
    fn view_box_size_wins_over_explicit_size() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 1.0), (0.0, 1.0))
            .with_size(300.0, 200.0)
            .with_view_box(Rect::new(10.0, 10.0, 650.0, 410.0))
            .resolve();
        assert_eq!(r.size(), Size::new(640.0, 400.0));
    }

    #[test]
    fn explicit_size_wins_over_fallback() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 1.0), (0.0, 1.0))
            .with_size(300.0, 200.0)
            .with_margin(Margin::uniform(10.0))
            .resolve();
        assert_eq!(r.size(), Size::new(300.0, 200.0));
        assert_eq!(r.plot(), Rect::new(10.0, 10.0, 290.0, 190.0));
    }

    #[test]
    fn x_mapping_spans_plot_width() {
        let spec = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 100.0), (0.0, 1.0))
            .with_size(800.0, 500.0);
        let r = spec.resolve();
        assert_close(r.map_x(0.0), 5.0);
        assert_close(r.map_x(100.0), 800.0 - 20.0);
        assert_close(r.map_x(50.0), 392.5);
    }

    #[test]
    fn y_mapping_is_inverted() {
        let spec = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 1.0), (-10.0, 30.0))
            .with_size(800.0, 500.0);
        let r = spec.resolve();
        assert_close(r.map_y(30.0), 58.0);
        assert_close(r.map_y(-10.0), 500.0 - 35.0);
        assert!(r.map_y(20.0) < r.map_y(0.0));
    }

    #[test]
    fn host_scales_override_domains() {
        let spec = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 100.0), (0.0, 100.0))
            .with_x_scale(|v| 1000.0 + v)
            .with_y_scale(|v| -v);
        let r = spec.resolve();
        assert_eq!(r.map_x(50.0), 1050.0);
        assert_eq!(r.map_y(50.0), -50.0);
    }

    #[test]
    fn degenerate_domains_map_to_margin_origin() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (7.0, 7.0), (3.0, 3.0)).resolve();
        assert_eq!(r.map_x(7.0), DEFAULT_MARGIN.left);
        assert_eq!(r.map_x(100.0), DEFAULT_MARGIN.left);
        assert_eq!(r.map_y(3.0), DEFAULT_MARGIN.top);
        assert_eq!(r.map_y(-100.0), DEFAULT_MARGIN.top);
    }

    #[test]
    fn huge_finite_domains_span_the_plot() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (-1e308, 1e308), (-1e308, 1e308))
            .with_size(800.0, 500.0)
            .resolve();
        let plot = r.plot();
        assert_eq!(r.map_x(-1e308), plot.x0);
        assert_eq!(r.map_x(1e308), plot.x1);
        assert_eq!(r.map_y(1e308), plot.y0);
        assert_eq!(r.map_y(-1e308), plot.y1);
    }

    #[test]
    fn zero_divisions_are_clamped_to_one() {
        let r = GridlinesSpec::new(Vec::new(), Vec::new(), (0.0, 1.0), (0.0, 1.0))
            .with_minor_divisions(0, 0)
            .resolve();
        assert_eq!(r.x_minor_divisions(), 1);
        assert_eq!(r.y_minor_divisions(), 1);
    }

    #[test]
    fn spec_and_resolution_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridlinesSpec>();
        assert_send_sync::<ResolvedGridlines>();
    }
}
