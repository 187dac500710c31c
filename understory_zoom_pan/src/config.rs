// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

use crate::modes::AnchorBasis;

/// Error returned when a [`ZoomPanConfig`] would violate its invariants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The viewport size has a negative or non-finite dimension.
    InvalidViewportSize(Size),
    /// The scale limits do not satisfy `1 <= min_scale <= max_scale`, or
    /// are not finite.
    InvalidScaleLimits {
        /// Requested minimum scale.
        min_scale: f64,
        /// Requested maximum scale.
        max_scale: f64,
    },
    /// The double-tap scale lies outside `[min_scale, max_scale]`.
    DoubleTapScaleOutOfRange {
        /// Requested double-tap scale.
        double_tap_scale: f64,
        /// Configured minimum scale.
        min_scale: f64,
        /// Configured maximum scale.
        max_scale: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewportSize(size) => write!(
                f,
                "viewport size {}x{} must be finite and non-negative",
                size.width, size.height
            ),
            Self::InvalidScaleLimits {
                min_scale,
                max_scale,
            } => write!(
                f,
                "scale limits [{min_scale}, {max_scale}] must satisfy 1 <= min <= max"
            ),
            Self::DoubleTapScaleOutOfRange {
                double_tap_scale,
                min_scale,
                max_scale,
            } => write!(
                f,
                "double-tap scale {double_tap_scale} is outside [{min_scale}, {max_scale}]"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Validated, immutable settings for a [`crate::ZoomPanController`].
///
/// Build one with [`ZoomPanConfig::builder`] or [`ZoomPanConfig::new`]:
///
/// ```rust
/// use kurbo::Size;
/// use understory_zoom_pan::{AnchorBasis, ZoomPanConfig};
///
/// let config = ZoomPanConfig::builder(Size::new(400.0, 800.0))
///     .scale_limits(1.0, 4.0)
///     .double_tap_scale(2.5)
///     .anchor_basis(AnchorBasis::Viewport)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_scale(), 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPanConfig {
    viewport_size: Size,
    min_scale: f64,
    max_scale: f64,
    double_tap_scale: f64,
    anchor_basis: AnchorBasis,
}

impl ZoomPanConfig {
    /// Default minimum scale.
    pub const DEFAULT_MIN_SCALE: f64 = 1.0;
    /// Default maximum scale.
    pub const DEFAULT_MAX_SCALE: f64 = 3.0;
    /// Default scale targeted by a double tap at rest.
    pub const DEFAULT_DOUBLE_TAP_SCALE: f64 = 2.0;

    /// Creates a configuration for `viewport_size` with default limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidViewportSize`] if the size has a
    /// negative or non-finite dimension.
    pub fn new(viewport_size: Size) -> Result<Self, ConfigError> {
        Self::builder(viewport_size).build()
    }

    /// Starts a builder for `viewport_size` with default limits.
    #[must_use]
    pub fn builder(viewport_size: Size) -> ZoomPanConfigBuilder {
        ZoomPanConfigBuilder {
            config: Self {
                viewport_size,
                min_scale: Self::DEFAULT_MIN_SCALE,
                max_scale: Self::DEFAULT_MAX_SCALE,
                double_tap_scale: Self::DEFAULT_DOUBLE_TAP_SCALE,
                anchor_basis: AnchorBasis::default(),
            },
        }
    }

    /// Returns a builder seeded with this configuration.
    #[must_use]
    pub fn to_builder(&self) -> ZoomPanConfigBuilder {
        ZoomPanConfigBuilder { config: *self }
    }

    /// Viewport size in view/device units.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scale a double tap zooms to when the content is at the default scale.
    #[must_use]
    pub fn double_tap_scale(&self) -> f64 {
        self.double_tap_scale
    }

    /// Centering convention shared by bounds, anchors and focus.
    #[must_use]
    pub fn anchor_basis(&self) -> AnchorBasis {
        self.anchor_basis
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let Size { width, height } = self.viewport_size;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(ConfigError::InvalidViewportSize(self.viewport_size));
        }
        let (min_scale, max_scale) = (self.min_scale, self.max_scale);
        if !(min_scale.is_finite() && max_scale.is_finite())
            || min_scale < 1.0
            || min_scale > max_scale
        {
            return Err(ConfigError::InvalidScaleLimits {
                min_scale,
                max_scale,
            });
        }
        let double_tap_scale = self.double_tap_scale;
        if !(min_scale..=max_scale).contains(&double_tap_scale) {
            return Err(ConfigError::DoubleTapScaleOutOfRange {
                double_tap_scale,
                min_scale,
                max_scale,
            });
        }
        Ok(self)
    }
}

/// Builder for [`ZoomPanConfig`]; validation happens in [`build`](Self::build).
#[derive(Clone, Copy, Debug)]
pub struct ZoomPanConfigBuilder {
    config: ZoomPanConfig,
}

impl ZoomPanConfigBuilder {
    /// Sets the viewport size.
    #[must_use]
    pub fn viewport_size(mut self, size: Size) -> Self {
        self.config.viewport_size = size;
        self
    }

    /// Sets the minimum and maximum scale.
    #[must_use]
    pub fn scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.config.min_scale = min_scale;
        self.config.max_scale = max_scale;
        self
    }

    /// Sets the scale targeted by a double tap at the default scale.
    #[must_use]
    pub fn double_tap_scale(mut self, scale: f64) -> Self {
        self.config.double_tap_scale = scale;
        self
    }

    /// Sets the centering convention.
    #[must_use]
    pub fn anchor_basis(mut self, basis: AnchorBasis) -> Self {
        self.config.anchor_basis = basis;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidViewportSize`] for negative or non-finite sizes.
    /// - [`ConfigError::InvalidScaleLimits`] unless `1 <= min <= max`.
    /// - [`ConfigError::DoubleTapScaleOutOfRange`] unless the double-tap scale
    ///   lies within the limits.
    pub fn build(self) -> Result<ZoomPanConfig, ConfigError> {
        self.config.validate()
    }
}
