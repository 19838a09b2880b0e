//! WASM bindings for rectangle alignment.
//!
//! Alignments are passed as numeric codes:
//!
//! | Code | Alignment |
//! |---|---|
//! | 0 | center |
//! | 1 | top |
//! | 2 | top-left |
//! | 3 | top-right |
//! | 4 | left |
//! | 5 | bottom |
//! | 6 | bottom-left |
//! | 7 | bottom-right |
//! | 8 | right |

use crate::types::{alignment_from_u8, to_js_error, JsRect, JsSize};
use pagegeom_core::align;
use wasm_bindgen::prelude::*;

/// Move `alignee` to `alignment` relative to `aligner`, keeping its size.
///
/// # Errors
///
/// Returns an error if `alignment` is not a known code.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const centered = align_rectangles(
///   new JsRect(0, 0, 10, 10),
///   new JsRect(0, 0, 100, 100),
///   0, // center
/// );
/// // centered.x === 45, centered.y === 45
/// ```
#[wasm_bindgen]
pub fn align_rectangles(
    alignee: &JsRect,
    aligner: &JsRect,
    alignment: u8,
) -> Result<JsRect, JsValue> {
    let alignment = alignment_from_u8(alignment).map_err(to_js_error)?;
    Ok(align::align_rectangles(alignee.into(), aligner.into(), alignment).into())
}

/// Place `size` at `alignment` inside `bounds`, then offset by
/// `(width_offset, height_offset)`.
#[wasm_bindgen]
pub fn align_size_within_rect_with_offset(
    size: &JsSize,
    bounds: &JsRect,
    width_offset: f64,
    height_offset: f64,
    alignment: u8,
) -> Result<JsRect, JsValue> {
    let alignment = alignment_from_u8(alignment).map_err(to_js_error)?;
    Ok(align::align_size_within_rect_with_offset(
        size.into(),
        bounds.into(),
        width_offset,
        height_offset,
        alignment,
    )
    .into())
}
