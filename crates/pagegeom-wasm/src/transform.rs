//! WASM bindings for page rotation and page/view coordinate conversion.
//!
//! Rotations are passed in degrees and must be 0, 90, 180 or 270.
//! `crop_box` is in PDF page space (origin bottom-left); `bounds` is the
//! page view's frame in view space (origin top-left).

use crate::types::{rotation_from_i32, to_js_error, JsAffineTransform, JsPoint, JsRect};
use pagegeom_core::transform;
use wasm_bindgen::prelude::*;

/// Rotate a rect by a quarter-turn multiple, swapping its size at 90/270.
#[wasm_bindgen]
pub fn apply_rotation_to_rect(rect: &JsRect, rotation: i32) -> Result<JsRect, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    Ok(transform::apply_rotation_to_rect(rect.into(), rotation).into())
}

/// Transform from page space into rotated page space.
#[wasm_bindgen]
pub fn transform_for_page_rect_and_rotation(
    page_rect: &JsRect,
    rotation: i32,
) -> Result<JsAffineTransform, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    Ok(transform::transform_for_page_rect_and_rotation(page_rect.into(), rotation).into())
}

/// Convert a view point (e.g. a pointer event location) to a PDF point.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const frame = pageElement.getBoundingClientRect();
/// const pdfPoint = convert_view_point_to_pdf_point(
///   new JsPoint(event.clientX, event.clientY),
///   cropBox,
///   90,
///   new JsRect(frame.x, frame.y, frame.width, frame.height),
/// );
/// ```
#[wasm_bindgen]
pub fn convert_view_point_to_pdf_point(
    view_point: &JsPoint,
    crop_box: &JsRect,
    rotation: i32,
    bounds: &JsRect,
) -> Result<JsPoint, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    transform::convert_view_point_to_pdf_point(
        view_point.into(),
        crop_box.into(),
        rotation,
        bounds.into(),
    )
    .map(JsPoint::from)
    .map_err(to_js_error)
}

/// Convert a PDF point to a view point.
#[wasm_bindgen]
pub fn convert_pdf_point_to_view_point(
    pdf_point: &JsPoint,
    crop_box: &JsRect,
    rotation: i32,
    bounds: &JsRect,
) -> Result<JsPoint, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    transform::convert_pdf_point_to_view_point(
        pdf_point.into(),
        crop_box.into(),
        rotation,
        bounds.into(),
    )
    .map(JsPoint::from)
    .map_err(to_js_error)
}

/// Convert a PDF rect to a normalized view rect.
#[wasm_bindgen]
pub fn convert_pdf_rect_to_view_rect(
    pdf_rect: &JsRect,
    crop_box: &JsRect,
    rotation: i32,
    bounds: &JsRect,
) -> Result<JsRect, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    transform::convert_pdf_rect_to_view_rect(
        pdf_rect.into(),
        crop_box.into(),
        rotation,
        bounds.into(),
    )
    .map(JsRect::from)
    .map_err(to_js_error)
}

/// Convert a view rect to a normalized PDF rect.
#[wasm_bindgen]
pub fn convert_view_rect_to_pdf_rect(
    view_rect: &JsRect,
    crop_box: &JsRect,
    rotation: i32,
    bounds: &JsRect,
) -> Result<JsRect, JsValue> {
    let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
    transform::convert_view_rect_to_pdf_rect(
        view_rect.into(),
        crop_box.into(),
        rotation,
        bounds.into(),
    )
    .map(JsRect::from)
    .map_err(to_js_error)
}

/// Normalize a rect with negative width or height.
#[wasm_bindgen]
pub fn normalize_rect(rect: &JsRect) -> JsRect {
    transform::normalize_rect(rect.into()).into()
}
