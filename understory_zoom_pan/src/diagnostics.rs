// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable diagnostics for [`crate::ZoomPanController`].
//!
//! Diagnostics are structured values, never preformatted strings. The
//! controller checks [`DiagnosticSink::enabled`] before building an event,
//! so the default [`NoopDiagnostics`] costs a single branch.
//!
//! With the `tracing` feature, [`TracingDiagnostics`] forwards events to
//! the `tracing` ecosystem as `DEBUG` events with structured fields.

use kurbo::Size;

use crate::bounds::TranslationBounds;
use crate::transform::ZoomTransform;

/// Why a gesture event was dropped without changing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The content size is zero or unknown, so there is no legal motion yet.
    NoContent,
    /// The magnification factor was zero, negative or not finite.
    InvalidMagnification,
    /// A point or delta had a non-finite coordinate.
    NonFiniteInput,
}

/// A structured diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Diagnostic {
    /// A transform was clamped into the legal translation bounds.
    Clamped {
        /// Transform before clamping.
        before: ZoomTransform,
        /// Transform after clamping.
        after: ZoomTransform,
        /// Bounds used for clamping.
        bounds: TranslationBounds,
    },
    /// The measured content size changed.
    ContentSizeChanged {
        /// Previous size.
        old: Size,
        /// New size.
        new: Size,
    },
    /// The configuration (viewport size, limits or basis) was replaced.
    ConfigChanged {
        /// Viewport size of the new configuration.
        viewport_size: Size,
    },
    /// A gesture event was ignored.
    GestureIgnored {
        /// Why it was ignored.
        reason: IgnoredReason,
    },
}

/// Receiver for controller diagnostics.
pub trait DiagnosticSink {
    /// Returns `true` if events should be built and recorded.
    fn enabled(&self) -> bool;

    /// Records an event. Only called when [`enabled`](Self::enabled) is `true`.
    fn record(&mut self, event: &Diagnostic);
}

/// [`DiagnosticSink`] that is always disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    #[inline]
    fn enabled(&self) -> bool {
        false
    }

    #[inline]
    fn record(&mut self, _event: &Diagnostic) {}
}

/// [`DiagnosticSink`] forwarding to `tracing` at `DEBUG` level.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingDiagnostics {
    fn enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }

    fn record(&mut self, event: &Diagnostic) {
        match *event {
            Diagnostic::Clamped {
                before,
                after,
                bounds,
            } => {
                let b = before.translation();
                let a = after.translation();
                tracing::debug!(
                    scale = after.scale(),
                    before_tx = b.x,
                    before_ty = b.y,
                    after_tx = a.x,
                    after_ty = a.y,
                    min_x = bounds.x.min,
                    max_x = bounds.x.max,
                    min_y = bounds.y.min,
                    max_y = bounds.y.max,
                    "transform clamped"
                );
            }
            Diagnostic::ContentSizeChanged { old, new } => {
                tracing::debug!(
                    old_width = old.width,
                    old_height = old.height,
                    width = new.width,
                    height = new.height,
                    "content size changed"
                );
            }
            Diagnostic::ConfigChanged { viewport_size } => {
                tracing::debug!(
                    width = viewport_size.width,
                    height = viewport_size.height,
                    "configuration changed"
                );
            }
            Diagnostic::GestureIgnored { reason } => {
                tracing::debug!(?reason, "gesture ignored");
            }
        }
    }
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn record(&mut self, event: &Diagnostic) {
        (**self).record(event);
    }
}
