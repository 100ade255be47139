// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tier gridline styling.
//!
//! Styling is presentation-only: the engine carries it through to hosts but never derives
//! geometry from it.

use peniko::{Brush, Color};

use crate::segment::Tier;

/// Default stroke color for major gridlines.
pub const MAJOR_STROKE: Color = Color::from_rgba8(0xd4, 0xd0, 0xc8, 0xff);
/// Default stroke width for major gridlines.
pub const MAJOR_STROKE_WIDTH: f64 = 1.0;
/// Default stroke opacity for major gridlines.
pub const MAJOR_OPACITY: f64 = 0.6;

/// Default stroke color for minor gridlines.
pub const MINOR_STROKE: Color = Color::from_rgba8(0xe5, 0xe5, 0xe5, 0xff);
/// Default stroke width for minor gridlines.
pub const MINOR_STROKE_WIDTH: f64 = 0.5;
/// Default stroke opacity for minor gridlines.
pub const MINOR_OPACITY: f64 = 0.3;

/// A paint, width and opacity triple for a stroked gridline.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`, applied on top of any alpha in `brush`.
    pub opacity: f64,
}

impl StrokeStyle {
    /// Convenience for a fully opaque solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            opacity: 1.0,
        }
    }

    /// Sets the stroke opacity, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Gridline styling for both tiers.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Style for major gridlines.
    pub major: StrokeStyle,
    /// Style for minor gridlines.
    pub minor: StrokeStyle,
}

impl GridStyle {
    /// Returns the stroke style for `tier`.
    pub fn for_tier(&self, tier: Tier) -> &StrokeStyle {
        match tier {
            Tier::Major => &self.major,
            Tier::Minor => &self.minor,
        }
    }

    /// Sets the major gridline style.
    pub fn with_major(mut self, major: StrokeStyle) -> Self {
        self.major = major;
        self
    }

    /// Sets the minor gridline style.
    pub fn with_minor(mut self, minor: StrokeStyle) -> Self {
        self.minor = minor;
        self
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            major: StrokeStyle::solid(MAJOR_STROKE, MAJOR_STROKE_WIDTH)
                .with_opacity(MAJOR_OPACITY),
            minor: StrokeStyle::solid(MINOR_STROKE, MINOR_STROKE_WIDTH)
                .with_opacity(MINOR_OPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn default_tiers_are_distinct() {
        let style = GridStyle::default();
        assert_ne!(style.major, style.minor);
        assert!(style.major.stroke_width > style.minor.stroke_width);
        assert!(style.major.opacity > style.minor.opacity);
    }

    #[test]
    fn for_tier_selects_matching_style() {
        let style = GridStyle::default().with_minor(StrokeStyle::solid(css::RED, 0.25));
        assert_eq!(style.for_tier(Tier::Minor).stroke_width, 0.25);
        assert_eq!(style.for_tier(Tier::Major).stroke_width, MAJOR_STROKE_WIDTH);
    }

    #[test]
    fn opacity_is_clamped() {
        let s = StrokeStyle::solid(css::BLACK, 1.0).with_opacity(1.5);
        assert_eq!(s.opacity, 1.0);
        let s = s.with_opacity(-0.5);
        assert_eq!(s.opacity, 0.0);
    }
}
