// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::bounds::{TranslationBounds, initial_centering_offset, legal_translation_bounds};
use crate::config::{ConfigError, ZoomPanConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink, IgnoredReason, NoopDiagnostics};
use crate::modes::{AnchorBasis, ChangeReason, GesturePhase};
use crate::sink::{NoopSink, PresentationSink};
use crate::transform::ZoomTransform;

/// Tolerance for scale comparisons such as "is at the default scale".
pub const SCALE_EPSILON: f64 = 1e-9;

/// Pinch/pan/double‑tap state machine for one content element in a viewport.
///
/// The controller keeps two transforms:
/// - the *current* transform, updated live while a gesture is in progress and
///   allowed to leave the legal bounds (rubber‑banding), and
/// - the *settled* transform, the last clamped commit, which every gesture
///   uses as its basis.
///
/// Scale is clamped into the configured limits as soon as it is proposed.
/// Translation is clamped when a gesture ends, so the settled transform is
/// always within [`legal_translation_bounds`] for its own scale.
///
/// Every event is computed from the settled transform. A `*_changed` event
/// for a different gesture than the active one replaces the live transform,
/// and an `*_ended` event without a matching active gesture still clamps and
/// commits the current transform.
///
/// Until the content has a non‑zero size there is no legal motion: gesture
/// events are ignored and the transform stays at identity.
#[derive(Clone, Debug)]
pub struct ZoomPanController<S = NoopSink, D = NoopDiagnostics> {
    config: ZoomPanConfig,
    content_size: Size,
    current: ZoomTransform,
    settled: ZoomTransform,
    phase: GesturePhase,
    at_scale_limit: bool,
    sink: S,
    diagnostics: D,
}

impl ZoomPanController {
    /// Creates a controller with no presentation sink and no diagnostics.
    #[must_use]
    pub fn new(config: ZoomPanConfig) -> Self {
        Self::with_sink(config, NoopSink)
    }
}

impl<S: PresentationSink> ZoomPanController<S, NoopDiagnostics> {
    /// Creates a controller notifying `sink` of every change.
    #[must_use]
    pub fn with_sink(config: ZoomPanConfig, sink: S) -> Self {
        Self {
            config,
            content_size: Size::ZERO,
            current: ZoomTransform::IDENTITY,
            settled: ZoomTransform::IDENTITY,
            phase: GesturePhase::Idle,
            at_scale_limit: false,
            sink,
            diagnostics: NoopDiagnostics,
        }
    }
}

impl<S: PresentationSink, D: DiagnosticSink> ZoomPanController<S, D> {
    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics<D2: DiagnosticSink>(
        self,
        diagnostics: D2,
    ) -> ZoomPanController<S, D2> {
        ZoomPanController {
            config: self.config,
            content_size: self.content_size,
            current: self.current,
            settled: self.settled,
            phase: self.phase,
            at_scale_limit: self.at_scale_limit,
            sink: self.sink,
            diagnostics,
        }
    }

    /// Returns the presentation sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the presentation sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the diagnostic sink.
    #[must_use]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Consumes the controller and returns its sinks.
    #[must_use]
    pub fn into_parts(self) -> (S, D) {
        (self.sink, self.diagnostics)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomPanConfig {
        &self.config
    }

    /// Returns the measured content size (zero until known).
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the live transform.
    #[must_use]
    pub fn current_transform(&self) -> ZoomTransform {
        self.current
    }

    /// Returns the last committed, clamped transform.
    #[must_use]
    pub fn settled_transform(&self) -> ZoomTransform {
        self.settled
    }

    /// Returns the scale of the live transform.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.current.scale()
    }

    /// Returns the gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a live pinch is pushing against a scale limit.
    #[must_use]
    pub fn is_at_scale_limit(&self) -> bool {
        self.at_scale_limit
    }

    /// Returns `true` if the live scale equals the minimum scale.
    #[must_use]
    pub fn is_at_min_scale(&self) -> bool {
        (self.scale() - self.config.min_scale()).abs() < SCALE_EPSILON
    }

    /// Returns `true` if the live scale equals the default (unzoomed) scale.
    #[must_use]
    pub fn is_at_default_scale(&self) -> bool {
        (self.scale() - self.default_scale()).abs() < SCALE_EPSILON
    }

    /// Legal translation bounds at `scale` for the current content and viewport.
    #[must_use]
    pub fn bounds_for_scale(&self, scale: f64) -> TranslationBounds {
        legal_translation_bounds(
            self.content_size,
            self.config.viewport_size(),
            scale,
            self.config.anchor_basis(),
        )
    }

    /// Legal translation bounds at the live scale.
    #[must_use]
    pub fn translation_bounds(&self) -> TranslationBounds {
        self.bounds_for_scale(self.scale())
    }

    /// Clamps the translation of `t` into the legal bounds for `t`'s scale.
    ///
    /// The scale of `t` is assumed to already lie within the configured
    /// limits. Without content this returns the identity, and a transform
    /// with a non‑finite scale is replaced by the settled transform.
    #[must_use]
    pub fn limit_transform(&self, t: ZoomTransform) -> ZoomTransform {
        if !self.has_content() {
            return ZoomTransform::IDENTITY;
        }
        if !t.scale().is_finite() {
            return self.settled;
        }
        let bounds = self.bounds_for_scale(t.scale());
        t.with_translation(bounds.clamp(t.translation()))
    }

    /// Maps a viewport point to content‑local coordinates under the live
    /// transform.
    #[must_use]
    pub fn viewport_to_content(&self, pt: Point) -> Point {
        self.current.inverse_apply(self.to_transform_space(pt))
    }

    /// Maps a content‑local point to viewport coordinates under the live
    /// transform.
    #[must_use]
    pub fn content_to_viewport(&self, pt: Point) -> Point {
        self.current.apply(pt) + self.basis_origin()
    }

    /// Returns the content‑local rectangle currently visible in the viewport.
    ///
    /// The result is not intersected with the content bounds.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let viewport = Rect::from_origin_size(Point::ZERO, self.config.viewport_size());
        Rect::from_points(
            self.viewport_to_content(viewport.origin()),
            self.viewport_to_content(Point::new(viewport.x1, viewport.y1)),
        )
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomPanDebugInfo {
        ZoomPanDebugInfo {
            viewport_size: self.config.viewport_size(),
            content_size: self.content_size,
            current: self.current,
            settled: self.settled,
            phase: self.phase,
            bounds: self.translation_bounds(),
            at_scale_limit: self.at_scale_limit,
            min_scale: self.config.min_scale(),
            max_scale: self.config.max_scale(),
            anchor_basis: self.config.anchor_basis(),
        }
    }

    /// Updates the measured content size.
    ///
    /// A zero, negative or non‑finite size resets to identity. Otherwise the
    /// settled transform is re‑clamped for the new size; the live transform
    /// follows unless a gesture is active.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == size {
            return;
        }
        let old = self.content_size;
        if self.diagnostics.enabled() {
            self.diagnostics
                .record(&Diagnostic::ContentSizeChanged { old, new: size });
        }
        let had_content = self.has_content();
        self.content_size = size;

        if !self.has_content() {
            self.phase = GesturePhase::Idle;
            self.set_scale_limit(false);
            self.settled = ZoomTransform::IDENTITY;
            self.current = ZoomTransform::IDENTITY;
            self.sink
                .on_transform_changed(self.current, ChangeReason::Layout);
            return;
        }

        let base = if had_content {
            self.settled
        } else {
            ZoomTransform::IDENTITY
        };
        self.settled = self.normalize(base);
        if !self.phase.is_active() {
            self.current = self.settled;
            self.sink
                .on_transform_changed(self.current, ChangeReason::Layout);
        }
    }

    /// Replaces the configuration.
    ///
    /// The settled transform is rescaled into the new limits about the
    /// viewport center if needed and re‑clamped. When the anchor basis
    /// changes, the translation is shifted so the content stays where it is
    /// on screen.
    pub fn set_config(&mut self, config: ZoomPanConfig) {
        if self.config == config {
            return;
        }
        if self.diagnostics.enabled() {
            self.diagnostics.record(&Diagnostic::ConfigChanged {
                viewport_size: config.viewport_size(),
            });
        }
        let old_origin = self.basis_origin();
        let basis_changed = self.config.anchor_basis() != config.anchor_basis();
        self.config = config;
        if !self.has_content() {
            return;
        }

        let mut base = self.settled;
        if basis_changed {
            let shift = old_origin - self.basis_origin();
            base = base.with_translation(base.translation() + shift);
        }
        self.settled = self.normalize(base);
        if !self.phase.is_active() {
            self.current = self.settled;
            self.sink
                .on_transform_changed(self.current, ChangeReason::Layout);
        }
    }

    /// Changes the viewport size, keeping the other settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidViewportSize`] for negative or
    /// non‑finite sizes; the controller is left unchanged.
    pub fn set_viewport_size(&mut self, size: Size) -> Result<(), ConfigError> {
        let config = self.config.to_builder().viewport_size(size).build()?;
        self.set_config(config);
        Ok(())
    }

    /// Live pinch update.
    ///
    /// `magnification` is the cumulative factor since the pinch began and
    /// `anchor` the pinch location in viewport coordinates. The proposed
    /// scale is clamped into the limits and the content under `anchor` stays
    /// under it. Translation is not clamped until the pinch ends.
    ///
    /// A sample whose live transform would overflow to a non‑finite value is
    /// ignored.
    pub fn on_pinch_changed(&mut self, magnification: f64, anchor: Point) {
        if let Err(reason) = self.check_pinch_input(magnification, anchor) {
            self.ignore(reason);
            return;
        }
        let (transform, at_limit) = self.pinch_transform(magnification, anchor);
        if !transform.is_finite() {
            self.ignore(IgnoredReason::NonFiniteInput);
            return;
        }
        self.phase = GesturePhase::PinchActive;
        self.set_scale_limit(at_limit);
        self.current = transform;
        self.sink
            .on_transform_changed(transform, ChangeReason::Interactive);
    }

    /// Ends a pinch with its final magnification, clamps and commits.
    ///
    /// Invalid input ends the pinch as a no‑op, restoring the settled
    /// transform.
    pub fn on_pinch_ended(&mut self, magnification: f64, anchor: Point) {
        self.set_scale_limit(false);
        if let Err(reason) = self.check_pinch_input(magnification, anchor) {
            self.ignore(reason);
            self.phase = GesturePhase::Idle;
            if self.current != self.settled {
                self.current = self.settled;
                self.sink
                    .on_transform_changed(self.current, ChangeReason::Settle);
            }
            return;
        }
        let (transform, _) = self.pinch_transform(magnification, anchor);
        self.commit(transform, ChangeReason::Settle);
    }

    /// Live pan update with the cumulative drag `delta` in viewport units.
    pub fn on_pan_changed(&mut self, delta: Vec2) {
        if !self.has_content() {
            self.ignore(IgnoredReason::NoContent);
            return;
        }
        if !delta.is_finite() {
            self.ignore(IgnoredReason::NonFiniteInput);
            return;
        }
        // Drag deltas are in viewport pixels; translation is pre-scale.
        let local = Vec2::new(
            delta.x / self.settled.effective_scale_x(),
            delta.y / self.settled.effective_scale_y(),
        );
        let transform = self.settled.translated(local);
        if !transform.is_finite() {
            self.ignore(IgnoredReason::NonFiniteInput);
            return;
        }
        self.set_scale_limit(false);
        self.phase = GesturePhase::PanActive;
        self.current = transform;
        self.sink
            .on_transform_changed(self.current, ChangeReason::Interactive);
    }

    /// Ends a pan: clamps the live transform and commits it.
    pub fn on_pan_ended(&mut self) {
        self.set_scale_limit(false);
        if !self.has_content() {
            self.phase = GesturePhase::Idle;
            self.ignore(IgnoredReason::NoContent);
            return;
        }
        self.commit(self.current, ChangeReason::Settle);
    }

    /// Toggles between the default scale and the double‑tap scale, keeping
    /// the content under `location` fixed, and commits immediately.
    pub fn on_double_tap(&mut self, location: Point) {
        if !self.has_content() {
            self.ignore(IgnoredReason::NoContent);
            return;
        }
        if !location.is_finite() {
            self.ignore(IgnoredReason::NonFiniteInput);
            return;
        }
        let default_scale = self.default_scale();
        let target = if (self.settled.scale() - default_scale).abs() > SCALE_EPSILON {
            default_scale
        } else {
            self.config.double_tap_scale()
        };
        let transform = ZoomTransform::anchored_rescale_to(
            target,
            self.to_transform_space(location),
            self.settled,
        );
        self.set_scale_limit(false);
        self.commit(transform, ChangeReason::DoubleTap);
        self.sink.on_gesture_completed();
    }

    /// Centers the content‑local `point` in the viewport at the current scale,
    /// clamps and commits.
    ///
    /// Any live gesture is superseded.
    pub fn focus_on(&mut self, point: Point) {
        if !self.has_content() {
            self.ignore(IgnoredReason::NoContent);
            return;
        }
        if !point.is_finite() {
            self.ignore(IgnoredReason::NonFiniteInput);
            return;
        }
        let scale = self.settled.scale();
        let center = (self.config.viewport_size().to_vec2() / 2.0) - self.basis_origin();
        let translation = center - point.to_vec2() * scale;
        self.set_scale_limit(false);
        self.commit(
            ZoomTransform::from_scale_translation(scale, translation),
            ChangeReason::Focus,
        );
    }

    /// Consumes a one‑shot focus request.
    ///
    /// If `request` holds a point it is taken (leaving `None`) and passed to
    /// [`focus_on`](Self::focus_on). Returns whether a request was consumed.
    pub fn apply_focus_request(&mut self, request: &mut Option<Point>) -> bool {
        match request.take() {
            Some(point) => {
                self.focus_on(point);
                true
            }
            None => false,
        }
    }

    /// Abandons a live gesture and restores the settled transform.
    pub fn cancel_gesture(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        self.phase = GesturePhase::Idle;
        self.set_scale_limit(false);
        self.current = self.settled;
        self.sink
            .on_transform_changed(self.current, ChangeReason::Settle);
    }

    fn has_content(&self) -> bool {
        let Size { width, height } = self.content_size;
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// Scale a double tap returns to, and the reference for
    /// [`is_at_default_scale`](Self::is_at_default_scale).
    fn default_scale(&self) -> f64 {
        self.config.clamp_scale(1.0)
    }

    /// Viewport position of the transform's output origin.
    fn basis_origin(&self) -> Vec2 {
        initial_centering_offset(
            self.content_size,
            self.config.viewport_size(),
            self.config.anchor_basis(),
        )
    }

    fn to_transform_space(&self, viewport_pt: Point) -> Point {
        viewport_pt - self.basis_origin()
    }

    fn check_pinch_input(&self, magnification: f64, anchor: Point) -> Result<(), IgnoredReason> {
        if !self.has_content() {
            return Err(IgnoredReason::NoContent);
        }
        if !(magnification.is_finite() && magnification > 0.0) {
            return Err(IgnoredReason::InvalidMagnification);
        }
        if !anchor.is_finite() {
            return Err(IgnoredReason::NonFiniteInput);
        }
        Ok(())
    }

    /// Rescaled settled transform for a pinch, and whether the proposed scale
    /// hit a limit.
    fn pinch_transform(&self, magnification: f64, anchor: Point) -> (ZoomTransform, bool) {
        let proposed = self.settled.scale() * magnification;
        let clamped = self.config.clamp_scale(proposed);
        let transform = ZoomTransform::anchored_rescale_to(
            clamped,
            self.to_transform_space(anchor),
            self.settled,
        );
        (transform, proposed != clamped)
    }

    /// Brings `t` back into the scale limits (about the viewport center) and
    /// the translation bounds.
    fn normalize(&mut self, t: ZoomTransform) -> ZoomTransform {
        let scale = self.config.clamp_scale(t.scale());
        let t = if scale == t.scale() {
            t
        } else {
            let center = self.config.viewport_size().to_vec2() / 2.0;
            let anchor = (center - self.basis_origin()).to_point();
            ZoomTransform::anchored_rescale_to(scale, anchor, t)
        };
        self.clamp_recorded(t)
    }

    fn clamp_recorded(&mut self, t: ZoomTransform) -> ZoomTransform {
        let limited = self.limit_transform(t);
        if limited != t && self.diagnostics.enabled() {
            let bounds = self.bounds_for_scale(t.scale());
            self.diagnostics.record(&Diagnostic::Clamped {
                before: t,
                after: limited,
                bounds,
            });
        }
        limited
    }

    fn commit(&mut self, t: ZoomTransform, reason: ChangeReason) {
        let limited = self.clamp_recorded(t);
        self.current = limited;
        self.settled = limited;
        self.phase = GesturePhase::Idle;
        self.sink.on_transform_changed(limited, reason);
    }

    fn set_scale_limit(&mut self, at_limit: bool) {
        if self.at_scale_limit != at_limit {
            self.at_scale_limit = at_limit;
            self.sink.on_scale_limit_reached(at_limit);
        }
    }

    fn ignore(&mut self, reason: IgnoredReason) {
        if self.diagnostics.enabled() {
            self.diagnostics
                .record(&Diagnostic::GestureIgnored { reason });
        }
    }
}

/// Debug snapshot of a [`ZoomPanController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomPanDebugInfo {
    /// Viewport size in view/device units.
    pub viewport_size: Size,
    /// Measured content size.
    pub content_size: Size,
    /// Live transform.
    pub current: ZoomTransform,
    /// Last committed transform.
    pub settled: ZoomTransform,
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Legal translation bounds at the live scale.
    pub bounds: TranslationBounds,
    /// Whether a live pinch is pushing against a scale limit.
    pub at_scale_limit: bool,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Centering convention in use.
    pub anchor_basis: AnchorBasis,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{SCALE_EPSILON, ZoomPanController};
    use crate::config::ZoomPanConfig;
    use crate::modes::{AnchorBasis, GesturePhase};
    use crate::transform::ZoomTransform;

    fn controller(basis: AnchorBasis) -> ZoomPanController {
        let config = ZoomPanConfig::builder(Size::new(400.0, 800.0))
            .scale_limits(1.0, 3.0)
            .double_tap_scale(2.0)
            .anchor_basis(basis)
            .build()
            .unwrap();
        let mut c = ZoomPanController::new(config);
        c.set_content_size(Size::new(400.0, 400.0));
        c
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_idle_at_identity_without_content() {
        let config = ZoomPanConfig::new(Size::new(400.0, 800.0)).unwrap();
        let mut c = ZoomPanController::new(config);
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);

        c.on_pinch_changed(2.0, Point::new(200.0, 400.0));
        c.on_pan_changed(Vec2::new(50.0, 50.0));
        c.on_double_tap(Point::new(10.0, 10.0));
        c.focus_on(Point::new(10.0, 10.0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);
        assert_eq!(c.settled_transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn natural_layout_starts_centered_at_identity() {
        let c = controller(AnchorBasis::NaturalLayout);
        assert_eq!(c.settled_transform(), ZoomTransform::IDENTITY);
        let center = c.content_to_viewport(Point::new(200.0, 200.0));
        assert_eq!(center, Point::new(200.0, 400.0));
    }

    #[test]
    fn viewport_basis_centers_once_content_is_known() {
        let c = controller(AnchorBasis::Viewport);
        assert_eq!(c.settled_transform().translation(), Vec2::new(0.0, 200.0));
        let center = c.content_to_viewport(Point::new(200.0, 200.0));
        assert_eq!(center, Point::new(200.0, 400.0));
    }

    #[test]
    fn pinch_enters_and_leaves_pinch_phase() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(1.5, Point::new(200.0, 400.0));
        assert_eq!(c.phase(), GesturePhase::PinchActive);
        assert!(close(c.scale(), 1.5));
        assert_eq!(c.settled_transform(), ZoomTransform::IDENTITY);

        c.on_pinch_ended(1.5, Point::new(200.0, 400.0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), c.settled_transform());
    }

    #[test]
    fn pinch_scale_is_clamped_live() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(10.0, Point::new(200.0, 400.0));
        assert_eq!(c.scale(), 3.0);
        assert!(c.is_at_scale_limit());

        c.on_pinch_changed(2.0, Point::new(200.0, 400.0));
        assert_eq!(c.scale(), 2.0);
        assert!(!c.is_at_scale_limit());

        c.on_pinch_changed(0.2, Point::new(200.0, 400.0));
        assert_eq!(c.scale(), 1.0);
        assert!(c.is_at_scale_limit());
        assert!(c.is_at_min_scale());

        c.on_pinch_ended(0.2, Point::new(200.0, 400.0));
        assert!(!c.is_at_scale_limit());
    }

    #[test]
    fn invalid_magnification_is_ignored() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(0.0, Point::new(200.0, 400.0));
        c.on_pinch_changed(f64::NAN, Point::new(200.0, 400.0));
        c.on_pinch_changed(-1.0, Point::new(200.0, 400.0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn invalid_pinch_end_restores_settled() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(2.0, Point::new(200.0, 400.0));
        c.on_pinch_ended(f64::INFINITY, Point::new(200.0, 400.0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn overflowing_pinch_sample_is_ignored() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(2.0, Point::new(1e308, 400.0));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);

        c.on_pinch_changed(1.5, Point::new(200.0, 400.0));
        c.on_pinch_changed(2.0, Point::new(1e308, 400.0));
        assert!(c.current_transform().is_finite());
        assert!(close(c.scale(), 1.5));
    }

    #[test]
    fn overflowing_pan_sample_is_ignored() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(3.0, Point::new(0.0, 0.0));
        c.on_pan_changed(Vec2::new(f64::MAX, 0.0));
        c.on_pan_changed(Vec2::new(f64::MAX, 0.0));
        assert!(c.current_transform().is_finite());
    }

    #[test]
    fn limit_transform_keeps_settled_for_non_finite_scale() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_double_tap(Point::new(200.0, 400.0));
        let settled = c.settled_transform();
        for scale in [f64::NAN, f64::INFINITY] {
            let t = ZoomTransform::from_scale_translation(scale, Vec2::new(1.0, 1.0));
            let limited = c.limit_transform(t);
            assert_eq!(limited, settled);
            assert!(limited.is_finite());
        }
    }

    #[test]
    fn pan_divides_delta_by_scale() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_double_tap(Point::new(200.0, 400.0));
        let before = c.settled_transform().translation();

        c.on_pan_changed(Vec2::new(-30.0, 10.0));
        assert_eq!(c.phase(), GesturePhase::PanActive);
        let after = c.current_transform().translation();
        // Output moves by exactly the drag delta.
        assert!(close(after.x - before.x, -30.0));
        assert!(close(after.y - before.y, 10.0));
    }

    #[test]
    fn pan_deltas_are_cumulative_from_settled() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_double_tap(Point::new(200.0, 400.0));
        let settled = c.settled_transform().translation();
        c.on_pan_changed(Vec2::new(-10.0, 0.0));
        c.on_pan_changed(Vec2::new(-25.0, 0.0));
        assert!(close(c.current_transform().translation().x, settled.x - 25.0));
    }

    #[test]
    fn cancel_gesture_restores_settled() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_changed(2.5, Point::new(100.0, 100.0));
        c.cancel_gesture();
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.current_transform(), c.settled_transform());
        assert_eq!(c.current_transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn double_tap_toggles_between_default_and_double_tap_scale() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        assert!(c.is_at_default_scale());
        c.on_double_tap(Point::new(120.0, 380.0));
        assert_eq!(c.scale(), 2.0);
        assert_eq!(c.phase(), GesturePhase::Idle);
        c.on_double_tap(Point::new(120.0, 380.0));
        assert_eq!(c.scale(), 1.0);
        assert!(c.is_at_default_scale());
    }

    #[test]
    fn double_tap_from_other_scale_returns_to_default() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(2.7, Point::new(200.0, 400.0));
        assert!((c.scale() - 2.7).abs() < SCALE_EPSILON);
        c.on_double_tap(Point::new(10.0, 10.0));
        assert_eq!(c.scale(), 1.0);
    }

    #[test]
    fn focus_centers_point_at_current_scale() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(3.0, Point::new(200.0, 400.0));
        c.focus_on(Point::new(100.0, 150.0));
        let on_screen = c.content_to_viewport(Point::new(100.0, 150.0));
        assert!(close(on_screen.x, 200.0));
        assert!(close(on_screen.y, 400.0));
        assert_eq!(c.scale(), 3.0);
    }

    #[test]
    fn focus_near_edge_is_clamped() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(3.0, Point::new(200.0, 400.0));
        c.focus_on(Point::new(0.0, 0.0));
        let bounds = c.translation_bounds();
        let t = c.settled_transform().translation();
        assert_eq!(t.x, bounds.x.max);
        assert_eq!(t.y, bounds.y.max);
    }

    #[test]
    fn focus_request_is_consumed_once() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(2.0, Point::new(200.0, 400.0));
        let mut request = Some(Point::new(300.0, 300.0));
        assert!(c.apply_focus_request(&mut request));
        assert!(request.is_none());
        let after_first = c.settled_transform();
        c.on_pan_ended();
        assert!(!c.apply_focus_request(&mut request));
        assert_eq!(c.settled_transform(), after_first);
    }

    #[test]
    fn viewport_to_content_inverts_content_to_viewport() {
        let mut c = controller(AnchorBasis::NaturalLayout);
        c.on_pinch_ended(2.2, Point::new(150.0, 300.0));
        let p = Point::new(37.0, 211.0);
        let back = c.viewport_to_content(c.content_to_viewport(p));
        assert!(close(back.x, p.x));
        assert!(close(back.y, p.y));
    }

    #[test]
    fn visible_rect_covers_whole_content_at_rest() {
        let c = controller(AnchorBasis::NaturalLayout);
        let visible = c.visible_content_rect();
        assert!(close(visible.x0, 0.0));
        assert!(close(visible.x1, 400.0));
        assert!(close(visible.y0, -200.0));
        assert!(close(visible.y1, 600.0));
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut c = controller(AnchorBasis::Viewport);
        c.on_pinch_changed(5.0, Point::new(200.0, 400.0));
        let info = c.debug_info();
        assert_eq!(info.phase, GesturePhase::PinchActive);
        assert!(info.at_scale_limit);
        assert_eq!(info.max_scale, 3.0);
        assert_eq!(info.anchor_basis, AnchorBasis::Viewport);
        assert_eq!(info.content_size, Size::new(400.0, 400.0));
    }
}
