// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where the zoom transform is applied relative to the viewport.
///
/// The choice fixes one centering convention for bounds, anchor conversion
/// and [`crate::ZoomPanController::focus_on`]. A controller never mixes the
/// two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorBasis {
    /// The transform is applied to content already centered in the viewport
    /// at its natural size.
    ///
    /// Identity leaves the content centered. Viewport points are shifted by
    /// the initial centering offset `(viewport - content) / 2` before they
    /// reach the transform, and translation bounds fold the same offset in.
    #[default]
    NaturalLayout,
    /// The transform maps content‑local coordinates directly into viewport
    /// coordinates.
    ///
    /// Identity places the content's origin at the viewport origin; the
    /// controller moves it to the centered position once the content size
    /// is known.
    Viewport,
}

/// Gesture phase of a [`crate::ZoomPanController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture is in progress; the current transform equals the settled one.
    #[default]
    Idle,
    /// A pinch gesture is updating the live transform.
    PinchActive,
    /// A pan gesture is updating the live transform.
    PanActive,
}

impl GesturePhase {
    /// Returns `true` while a pinch or pan gesture is live.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }
}

/// Why a transform was emitted to a [`crate::PresentationSink`].
///
/// Hosts use this to pick an animation: live updates usually track the
/// finger directly, while settling snaps benefit from easing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeReason {
    /// Live update during a pinch or pan; may be out of bounds.
    Interactive,
    /// A gesture ended and the clamped transform was committed.
    Settle,
    /// A double tap toggled the zoom level.
    DoubleTap,
    /// A programmatic focus request centered a content point.
    Focus,
    /// Content size, viewport size or configuration changed.
    Layout,
}
