// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legal translation intervals for scaled content inside a viewport.
//!
//! Each axis is handled independently. With `slack = viewport - content * scale`:
//!
//! - `slack >= 0`: the content fits and is centered; the interval is pinned to
//!   the single value `slack / 2 - offset`.
//! - `slack < 0`: the content overflows and may be dragged until its far edge
//!   reaches the viewport edge: `[slack - offset, -offset]`.
//!
//! `offset` is the initial centering offset `(viewport - content) / 2` under
//! [`AnchorBasis::NaturalLayout`] and zero under [`AnchorBasis::Viewport`].

use kurbo::{Size, Vec2};

use crate::modes::AnchorBasis;

/// Closed interval of legal translation values along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    /// Smallest legal translation.
    pub min: f64,
    /// Largest legal translation.
    pub max: f64,
}

impl AxisBounds {
    /// Interval containing only `value`.
    #[must_use]
    pub const fn pinned(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns `true` if the interval collapses to a single value.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        (self.max - self.min).abs() < f64::EPSILON
    }

    /// Returns `true` if `value` lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the interval.
    ///
    /// Pinned intervals always return `min`. Non-finite input falls back to
    /// the nearest finite bound. A malformed interval (a NaN bound, or
    /// `min > max`) returns `min` if it is finite and zero otherwise, so this
    /// never panics.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_pinned() || !(self.min <= self.max) {
            return if self.min.is_finite() { self.min } else { 0.0 };
        }
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    fn for_axis(content: f64, viewport: f64, scale: f64, offset: f64) -> Self {
        let slack = viewport - content * scale;
        // NaN scale or infinite content leave no meaningful interval.
        if !(slack.is_finite() && offset.is_finite()) {
            return Self::pinned(0.0);
        }
        if slack >= 0.0 {
            Self::pinned(slack / 2.0 - offset)
        } else {
            Self {
                min: slack - offset,
                max: -offset,
            }
        }
    }
}

/// Legal translation intervals for both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslationBounds {
    /// Horizontal interval.
    pub x: AxisBounds,
    /// Vertical interval.
    pub y: AxisBounds,
}

impl TranslationBounds {
    /// Clamps a translation into these bounds, axis by axis.
    #[must_use]
    pub fn clamp(&self, translation: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(translation.x), self.y.clamp(translation.y))
    }

    /// Returns `true` if `translation` is legal on both axes.
    #[must_use]
    pub fn contains(&self, translation: Vec2) -> bool {
        self.x.contains(translation.x) && self.y.contains(translation.y)
    }
}

/// Offset of naturally centered content from the viewport origin.
///
/// This is `(viewport - content) / 2` for [`AnchorBasis::NaturalLayout`] and
/// zero for [`AnchorBasis::Viewport`].
#[must_use]
pub fn initial_centering_offset(content: Size, viewport: Size, basis: AnchorBasis) -> Vec2 {
    match basis {
        AnchorBasis::NaturalLayout => (viewport.to_vec2() - content.to_vec2()) / 2.0,
        AnchorBasis::Viewport => Vec2::ZERO,
    }
}

/// Computes the legal translation bounds for `content` scaled by `scale`
/// inside `viewport`.
///
/// Pure and `O(1)`. A zero content size produces a pinned interval on each
/// axis; no division takes place. Non-finite scales or sizes produce an
/// interval pinned at zero, so both bounds are always finite.
#[must_use]
pub fn legal_translation_bounds(
    content: Size,
    viewport: Size,
    scale: f64,
    basis: AnchorBasis,
) -> TranslationBounds {
    let offset = initial_centering_offset(content, viewport, basis);
    TranslationBounds {
        x: AxisBounds::for_axis(content.width, viewport.width, scale, offset.x),
        y: AxisBounds::for_axis(content.height, viewport.height, scale, offset.y),
    }
}
