//! Page rotation: rotated rectangles and the page-space rotation transform.
//!
//! Page rotation is the PDF `/Rotate` convention: the page is displayed
//! turned clockwise by a multiple of 90°. In page space (Y-up) a clockwise
//! quarter turn maps `(x, y)` to `(y, -x)`.

use crate::affine::AffineTransform;
use crate::types::{Rect, Rotation};

/// Rotate `rect` by `rotation` about its origin corner and re-anchor the
/// rotated bounds at the same origin.
///
/// At 90° and 270° the width and height are swapped. At 0° and 180° the
/// rectangle is returned unchanged.
///
/// Only the size matches [`transform_for_page_rect_and_rotation`]: mapping a
/// rect through that transform puts its origin at `(0, 0)`, while this
/// function keeps `rect.origin`, so the two differ for a page rect with a
/// non-zero origin such as an inset crop box.
///
/// # Example
///
/// ```
/// use pagegeom_core::{apply_rotation_to_rect, Rect, Rotation};
///
/// let rotated = apply_rotation_to_rect(Rect::new(0.0, 0.0, 612.0, 792.0), Rotation::Deg90);
/// assert_eq!(rotated, Rect::new(0.0, 0.0, 792.0, 612.0));
/// ```
pub fn apply_rotation_to_rect(rect: Rect, rotation: Rotation) -> Rect {
    if rotation.swaps_dimensions() {
        Rect {
            origin: rect.origin,
            size: rect.size.swapped(),
        }
    } else {
        rect
    }
}

/// Transform from page space into rotated page space.
///
/// The transform moves the (normalized) `page_rect` origin to `(0, 0)`,
/// rotates clockwise by `rotation`, then translates so the rotated page again
/// has its minimum corner at `(0, 0)`. Applying it to `page_rect` therefore
/// yields `(0, 0, rotated_width, rotated_height)`.
///
/// Every page/view conversion in this crate is derived from this transform.
pub fn transform_for_page_rect_and_rotation(
    page_rect: Rect,
    rotation: Rotation,
) -> AffineTransform {
    let page = page_rect.normalized();
    let rotate = AffineTransform::translation(-page.origin.x, -page.origin.y)
        .then(&AffineTransform::quarter_turn(rotation));

    let rotated = rotate.apply_to_rect(page);
    rotate.then(&AffineTransform::translation(
        -rotated.min_x(),
        -rotated.min_y(),
    ))
}
