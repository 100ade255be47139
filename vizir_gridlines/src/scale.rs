// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping from data space into pixel space.
//!
//! Gridlines only need one capability from a scale: mapping a data value to a pixel
//! coordinate. [`CoordinateMap`] captures exactly that, with two implementations:
//! - [`LinearMap`], built from an axis domain and a pixel range, and
//! - [`HostMap`], a pass-through for a mapping function owned by the host chart (which may be
//!   non-linear).

extern crate alloc;

use alloc::sync::Arc;

/// A host-supplied mapping function from data values to pixel coordinates.
pub type ScaleFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Maps a value from data space into pixel space along one axis.
pub trait CoordinateMap {
    /// Maps `value` into a pixel coordinate.
    fn map(&self, value: f64) -> f64;
}

/// A linear mapping from a continuous domain to a pixel range.
///
/// The domain endpoints map onto the range endpoints in order, so an inverted axis is
/// expressed by swapping either pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearMap {
    /// Creates a new mapping of `domain` values onto `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured pixel range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns `true` if the domain has zero span or a non-finite endpoint.
    ///
    /// A degenerate mapping sends every value to the start of its range. Finite endpoints
    /// whose difference overflows `f64` are not degenerate.
    pub fn is_degenerate(&self) -> bool {
        let (d0, d1) = self.domain;
        d0 == d1 || !d0.is_finite() || !d1.is_finite()
    }
}

impl CoordinateMap for LinearMap {
    fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return r0;
        }
        let span = d1 - d0;
        let t = if span.is_finite() {
            (value - d0) / span
        } else {
            // Span overflowed; halving keeps both operands in range.
            (value * 0.5 - d0 * 0.5) / (d1 * 0.5 - d0 * 0.5)
        };
        r0 + t * (r1 - r0)
    }
}

/// Adapter that forwards to a host-supplied [`ScaleFn`].
#[derive(Clone)]
pub struct HostMap(ScaleFn);

impl HostMap {
    /// Wraps a host mapping function.
    pub fn new(f: ScaleFn) -> Self {
        Self(f)
    }
}

impl core::fmt::Debug for HostMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("HostMap").finish_non_exhaustive()
    }
}

impl CoordinateMap for HostMap {
    fn map(&self, value: f64) -> f64 {
        (self.0)(value)
    }
}
