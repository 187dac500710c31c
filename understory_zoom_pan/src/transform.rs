// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translation transform placing content inside a viewport.
///
/// `ZoomTransform` stores the six affine coefficients `[a, b, c, d, tx, ty]`
/// using the same layout as [`kurbo::Affine`]:
///
/// ```text
/// x' = a * x + c * y + tx
/// y' = b * x + d * y + ty
/// ```
///
/// Every transform produced by this crate has `b == c == 0` and `a == d`:
/// zooming and panning never introduce rotation or shear. Values are
/// immutable; every operation returns a new transform.
///
/// Composition order is fixed across the crate: [`ZoomTransform::composed`]
/// applies `self` *after* `other`, matching `Affine` multiplication
/// (`self * other`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform(Affine);

impl ZoomTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from raw coefficients `[a, b, c, d, tx, ty]`.
    #[must_use]
    pub const fn from_coeffs(coeffs: [f64; 6]) -> Self {
        Self(Affine::new(coeffs))
    }

    /// Creates a transform with uniform `scale` followed by `translation`.
    #[must_use]
    pub const fn from_scale_translation(scale: f64, translation: Vec2) -> Self {
        Self::from_coeffs([scale, 0.0, 0.0, scale, translation.x, translation.y])
    }

    /// Returns the raw coefficients `[a, b, c, d, tx, ty]`.
    #[must_use]
    pub fn coeffs(self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Returns the transform as a [`kurbo::Affine`] for rendering.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        self.0
    }

    /// Returns the uniform scale factor (the `a` coefficient).
    #[must_use]
    pub fn scale(self) -> f64 {
        self.0.as_coeffs()[0]
    }

    /// Returns the translation `(tx, ty)`.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        self.0.translation()
    }

    /// Returns a copy with the translation replaced, keeping the linear part.
    #[must_use]
    pub fn with_translation(self, translation: Vec2) -> Self {
        Self(self.0.with_translation(translation))
    }

    /// Effective scale along X: `hypot(a, c)`.
    #[must_use]
    pub fn effective_scale_x(self) -> f64 {
        let [a, _, c, _, _, _] = self.0.as_coeffs();
        Vec2::new(a, c).hypot()
    }

    /// Effective scale along Y: `hypot(b, d)`.
    #[must_use]
    pub fn effective_scale_y(self) -> f64 {
        let [_, b, _, d, _, _] = self.0.as_coeffs();
        Vec2::new(b, d).hypot()
    }

    /// Scales uniformly by `factor` about `origin`, expressed in the output
    /// space of this transform.
    ///
    /// `origin` is left fixed: `result.apply(p) == origin` whenever
    /// `self.apply(p) == origin`.
    #[must_use]
    pub fn scaled(self, factor: f64, origin: Point) -> Self {
        let o = origin.to_vec2();
        Self(Affine::translate(o) * Affine::scale(factor) * Affine::translate(-o) * self.0)
    }

    /// Translates by `delta` in this transform's own (pre-scale) space.
    ///
    /// The output moves by `delta * scale`; divide a viewport-space delta by
    /// the effective scale before passing it here.
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self(self.0 * Affine::translate(delta))
    }

    /// Returns `self ∘ other`: `other` is applied first, then `self`.
    #[must_use]
    pub fn composed(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Maps a content-local point into this transform's output space.
    #[must_use]
    pub fn apply(self, pt: Point) -> Point {
        self.0 * pt
    }

    /// Maps a point from output space back into content-local space.
    ///
    /// Only valid for the uniform, non-zero scale transforms this crate
    /// produces.
    #[must_use]
    pub fn inverse_apply(self, pt: Point) -> Point {
        let s = self.scale();
        debug_assert!(s != 0.0, "ZoomTransform with zero scale is not invertible");
        ((pt.to_vec2() - self.translation()) / s).to_point()
    }

    /// Rescales `basis` by `scale_factor` so that the content under `anchor`
    /// stays under `anchor`.
    ///
    /// `anchor` is expressed in the output space of `basis`. It is first
    /// converted into content-local coordinates
    /// (`(anchor - basis.translation) / basis.scale`), and the result is
    /// `basis ∘ translate(local) · scale(scale_factor) · translate(-local)`.
    ///
    /// No clamping is performed. A `basis` with zero scale is not a valid
    /// input; the result is unspecified (and debug builds assert).
    #[must_use]
    pub fn anchored_rescale(scale_factor: f64, anchor: Point, basis: Self) -> Self {
        let local = basis.inverse_apply(anchor).to_vec2();
        let about_local =
            Affine::translate(local) * Affine::scale(scale_factor) * Affine::translate(-local);
        Self(basis.0 * about_local)
    }

    /// Like [`anchored_rescale`](Self::anchored_rescale), but lands exactly on
    /// `target_scale` instead of multiplying by a ratio.
    ///
    /// Equivalent to `anchored_rescale(target_scale / basis.scale(), anchor,
    /// basis)` without the rounding introduced by the division, so callers
    /// comparing the result against a limit see the limit bit for bit.
    #[must_use]
    pub fn anchored_rescale_to(target_scale: f64, anchor: Point, basis: Self) -> Self {
        let local = basis.inverse_apply(anchor).to_vec2();
        Self::from_scale_translation(target_scale, anchor.to_vec2() - local * target_scale)
    }

    /// Returns `true` when every coefficient is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.as_coeffs().iter().all(|c| c.is_finite())
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ZoomTransform> for Affine {
    fn from(t: ZoomTransform) -> Self {
        t.0
    }
}
