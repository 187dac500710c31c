// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_pan --heading-base-level=0

//! Understory Zoom Pan: headless pinch‑zoom and pan for one content element.
//!
//! This crate models the geometry behind "zoomable" content inside a fixed
//! viewport: pinch‑to‑scale, drag‑to‑pan, double‑tap‑to‑toggle‑zoom and
//! programmatic focus on a point. It focuses on:
//! - A uniform scale + translation transform ([`ZoomTransform`]) with
//!   anchor‑preserving rescale.
//! - Legal translation bounds that keep content centered when it fits and
//!   edge‑to‑edge when it overflows ([`legal_translation_bounds`]).
//! - A gesture state machine ([`ZoomPanController`]) that clamps scale live
//!   and translation when a gesture settles.
//!
//! It does **not** recognize gestures, animate or render. Callers are
//! expected to:
//! - Feed gesture samples (cumulative pinch magnification, cumulative drag
//!   translation, tap locations) from their input layer.
//! - Implement [`PresentationSink`] to apply transforms, pick easing from the
//!   [`ChangeReason`] and trigger haptic feedback.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom_pan::{ZoomPanConfig, ZoomPanController};
//!
//! let config = ZoomPanConfig::new(Size::new(400.0, 800.0)).unwrap();
//! let mut zoom = ZoomPanController::new(config);
//!
//! // The content reports its measured size once laid out.
//! zoom.set_content_size(Size::new(400.0, 400.0));
//!
//! // Pinch out around the content center.
//! zoom.on_pinch_changed(2.0, Point::new(200.0, 400.0));
//! zoom.on_pinch_ended(2.0, Point::new(200.0, 400.0));
//! assert_eq!(zoom.scale(), 2.0);
//!
//! // Drag far to the right; releasing snaps back to the left edge.
//! zoom.on_pan_changed(Vec2::new(1_000.0, 0.0));
//! zoom.on_pan_ended();
//! assert_eq!(zoom.content_to_viewport(Point::ZERO).x, 0.0);
//! ```
//!
//! ## Observing changes
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom_pan::{
//!     ChangeReason, PresentationSink, ZoomPanConfig, ZoomPanController, ZoomTransform,
//! };
//!
//! #[derive(Default)]
//! struct Haptics {
//!     bumps: u32,
//!     last: Option<(ZoomTransform, ChangeReason)>,
//! }
//!
//! impl PresentationSink for Haptics {
//!     fn on_transform_changed(&mut self, t: ZoomTransform, reason: ChangeReason) {
//!         self.last = Some((t, reason));
//!     }
//!     fn on_scale_limit_reached(&mut self, at_limit: bool) {
//!         if at_limit {
//!             self.bumps += 1;
//!         }
//!     }
//! }
//!
//! let config = ZoomPanConfig::new(Size::new(300.0, 300.0)).unwrap();
//! let mut zoom = ZoomPanController::with_sink(config, Haptics::default());
//! zoom.set_content_size(Size::new(300.0, 200.0));
//! zoom.on_pinch_changed(8.0, Point::new(150.0, 150.0));
//! assert_eq!(zoom.sink().bumps, 1);
//! assert_eq!(zoom.sink().last.unwrap().1, ChangeReason::Interactive);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis‑aligned with a **uniform** scale; no rotation or
//!   shear is ever introduced.
//! - One centering convention per controller, chosen by [`AnchorBasis`],
//!   is used for bounds, anchors and focus alike.
//! - Diagnostics go through an injectable [`DiagnosticSink`]; the default
//!   is a no‑op and nothing is formatted unless a sink is enabled. Enable the
//!   `tracing` feature for a sink backed by `tracing`.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod controller;
mod diagnostics;
mod modes;
mod sink;
mod transform;

pub use bounds::{
    AxisBounds, TranslationBounds, initial_centering_offset, legal_translation_bounds,
};
pub use config::{ConfigError, ZoomPanConfig, ZoomPanConfigBuilder};
pub use controller::{SCALE_EPSILON, ZoomPanController, ZoomPanDebugInfo};
#[cfg(feature = "tracing")]
pub use diagnostics::TracingDiagnostics;
pub use diagnostics::{Diagnostic, DiagnosticSink, IgnoredReason, NoopDiagnostics};
pub use modes::{AnchorBasis, ChangeReason, GesturePhase};
pub use sink::{NoopSink, PresentationSink};
pub use transform::ZoomTransform;
