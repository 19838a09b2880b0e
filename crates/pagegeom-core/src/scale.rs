//! Fit-to-size scale computation.
//!
//! These helpers compute the uniform zoom factor needed to display content of
//! one size inside another, e.g. a page inside a viewport.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::types::Size;

/// Policy flags for [`scale_for_size_within_size_with_options`], bundled for
/// callers that keep a zoom policy around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Allow the scale to exceed 1.0. When false the content is only ever
    /// shrunk to fit.
    pub allow_zoom_in: bool,
    /// Fit the width only and let the height overflow (vertical scrolling).
    pub fit_width_only: bool,
}

impl ScaleOptions {
    /// Scale at which `target` fits inside `bounds` under this policy.
    pub fn scale_for(&self, target: Size, bounds: Size) -> Result<f64> {
        scale_for_size_within_size_with_options(
            target,
            bounds,
            self.allow_zoom_in,
            self.fit_width_only,
        )
    }
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            allow_zoom_in: true,
            fit_width_only: false,
        }
    }
}

/// Largest uniform scale at which `target` fits entirely inside `bounds`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidSize` if either side of `target` is zero,
/// negative or not finite, or if `bounds` is negative or not finite. A zero
/// `bounds` is valid and yields 0.
///
/// # Example
///
/// ```
/// use pagegeom_core::{scale_for_size_within_size, Size};
///
/// let scale = scale_for_size_within_size(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
/// assert_eq!(scale.unwrap(), 0.5);
/// ```
pub fn scale_for_size_within_size(target: Size, bounds: Size) -> Result<f64> {
    let options = ScaleOptions::default();
    scale_for_size_within_size_with_options(
        target,
        bounds,
        options.allow_zoom_in,
        options.fit_width_only,
    )
}

/// Like [`scale_for_size_within_size`], with zoom and width-fit policies.
///
/// With `fit_width_only` the height of `target` is ignored (and may be zero).
/// Without `allow_zoom_in` the result is clamped to at most 1.0.
pub fn scale_for_size_within_size_with_options(
    target: Size,
    bounds: Size,
    allow_zoom_in: bool,
    fit_width_only: bool,
) -> Result<f64> {
    validate_bounds(bounds)?;

    let scale = if fit_width_only {
        if !(target.width.is_finite() && target.width > 0.0) {
            return Err(GeometryError::invalid_size("target", target.width, target.height));
        }
        bounds.width / target.width
    } else {
        if !target.is_positive() {
            return Err(GeometryError::invalid_size("target", target.width, target.height));
        }
        (bounds.width / target.width).min(bounds.height / target.height)
    };

    if allow_zoom_in {
        Ok(scale)
    } else {
        Ok(scale.min(1.0))
    }
}

/// Size multiplied by `scale` on both axes.
pub fn size_for_scale(size: Size, scale: f64) -> Size {
    Size::new(size.width * scale, size.height * scale)
}

fn validate_bounds(bounds: Size) -> Result<()> {
    let valid = bounds.width.is_finite()
        && bounds.height.is_finite()
        && bounds.width >= 0.0
        && bounds.height >= 0.0;
    if valid {
        Ok(())
    } else {
        Err(GeometryError::invalid_size("bounds", bounds.width, bounds.height))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
