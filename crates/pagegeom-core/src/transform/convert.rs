//! Conversion between page space and view space.
//!
//! # Coordinate Transform Pipeline
//!
//! Page to view:
//! 1. Page rotation transform (crop box origin to `(0, 0)`, clockwise turn)
//! 2. Scale the rotated page onto the view bounds, flipping Y
//! 3. Offset by the view bounds origin
//!
//! View to page is the inverse of the same matrix, so the two directions
//! always agree.

use crate::affine::AffineTransform;
use crate::error::{GeometryError, Result};
use crate::types::{Point, Rect, Rotation};

use super::rotation::{apply_rotation_to_rect, transform_for_page_rect_and_rotation};

/// Transform from page space (crop box, Y-up) to view space (bounds, Y-down).
///
/// # Errors
///
/// Returns `GeometryError::InvalidSize` if the crop box or the view bounds
/// have a zero or non-finite extent, or a non-finite origin. Negative extents are normalized first.
pub fn page_to_view_transform(
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<AffineTransform> {
    let crop = crop_box.normalized();
    let view = bounds.normalized();
    if !crop.size.is_positive() || !crop.origin.x.is_finite() || !crop.origin.y.is_finite() {
        return Err(GeometryError::invalid_size(
            "crop box",
            crop.size.width,
            crop.size.height,
        ));
    }
    if !view.size.is_positive() || !view.origin.x.is_finite() || !view.origin.y.is_finite() {
        return Err(GeometryError::invalid_size(
            "view bounds",
            view.size.width,
            view.size.height,
        ));
    }

    let rotated = apply_rotation_to_rect(crop, rotation).size;
    let page = transform_for_page_rect_and_rotation(crop, rotation);

    Ok(page
        .then(&AffineTransform::scale(
            view.size.width / rotated.width,
            -view.size.height / rotated.height,
        ))
        .then(&AffineTransform::translation(
            view.origin.x,
            view.origin.y + view.size.height,
        )))
}

/// Transform from view space back to page space.
pub fn view_to_page_transform(
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<AffineTransform> {
    page_to_view_transform(crop_box, rotation, bounds)?.invert()
}

/// Convert a point in view space (e.g. a touch location) to page space.
pub fn convert_view_point_to_pdf_point(
    view_point: Point,
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<Point> {
    Ok(view_to_page_transform(crop_box, rotation, bounds)?.apply_to_point(view_point))
}

/// Convert a point in page space to view space.
pub fn convert_pdf_point_to_view_point(
    pdf_point: Point,
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<Point> {
    Ok(page_to_view_transform(crop_box, rotation, bounds)?.apply_to_point(pdf_point))
}

/// Convert a page-space rectangle to a normalized view-space rectangle.
///
/// Rotation may swap which corner is the minimum, so the result is rebuilt
/// from both converted corners.
pub fn convert_pdf_rect_to_view_rect(
    pdf_rect: Rect,
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<Rect> {
    let t = page_to_view_transform(crop_box, rotation, bounds)?;
    Ok(map_corners(&t, pdf_rect))
}

/// Convert a view-space rectangle to a normalized page-space rectangle.
pub fn convert_view_rect_to_pdf_rect(
    view_rect: Rect,
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
) -> Result<Rect> {
    let t = view_to_page_transform(crop_box, rotation, bounds)?;
    Ok(map_corners(&t, view_rect))
}

/// Equivalent rectangle with non-negative size and origin at the minimum
/// corner. See [`Rect::normalized`].
pub fn normalize_rect(rect: Rect) -> Rect {
    rect.normalized()
}

pub(crate) fn map_corners(t: &AffineTransform, rect: Rect) -> Rect {
    Rect::from_corners(
        t.apply_to_point(rect.origin),
        t.apply_to_point(rect.far_corner()),
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
