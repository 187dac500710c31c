// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::ChangeReason;
use crate::transform::ZoomTransform;

/// Outbound capability notified by a [`crate::ZoomPanController`].
///
/// The controller owns no animation or feedback state. Hosts implement this
/// trait to render transforms, choose easing from the [`ChangeReason`], and
/// trigger haptic or selection feedback. All methods default to no-ops.
pub trait PresentationSink {
    /// Called after every state change that produced a new transform.
    fn on_transform_changed(&mut self, transform: ZoomTransform, reason: ChangeReason) {
        let _ = (transform, reason);
    }

    /// Called when the live pinch starts or stops pushing against a scale
    /// limit. Only transitions are reported.
    fn on_scale_limit_reached(&mut self, at_limit: bool) {
        let _ = at_limit;
    }

    /// Called once a discrete gesture (a double tap) has completed.
    fn on_gesture_completed(&mut self) {}
}

/// [`PresentationSink`] that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl PresentationSink for NoopSink {}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn on_transform_changed(&mut self, transform: ZoomTransform, reason: ChangeReason) {
        (**self).on_transform_changed(transform, reason);
    }

    fn on_scale_limit_reached(&mut self, at_limit: bool) {
        (**self).on_scale_limit_reached(at_limit);
    }

    fn on_gesture_completed(&mut self) {
        (**self).on_gesture_completed();
    }
}
