//! pagegeom WASM - WebAssembly bindings for pagegeom
//!
//! This crate provides WASM bindings to expose the pagegeom-core functionality
//! to JavaScript/TypeScript document viewers.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types (point, size, rect, transform)
//! - `scale` - Fit-to-size scale computation
//! - `align` - Rectangle alignment
//! - `transform` - Page rotation and page/view coordinate conversion
//! - `viewport` - Cached page-to-view mapping for one page
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRect, JsPoint, convert_view_point_to_pdf_point } from '@pagegeom/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const cropBox = new JsRect(0, 0, 612, 792);
//! const bounds = new JsRect(0, 0, 396, 306);
//! const pdf = convert_view_point_to_pdf_point(new JsPoint(10, 10), cropBox, 90, bounds);
//! console.log(`PDF point ${pdf.x}, ${pdf.y}`);
//! ```

use wasm_bindgen::prelude::*;

mod align;
mod scale;
mod transform;
mod types;
mod viewport;

// Re-export public types
pub use align::{align_rectangles, align_size_within_rect_with_offset};
pub use scale::{
    scale_for_size_within_size, scale_for_size_within_size_with_options, size_for_scale,
};
pub use transform::{
    apply_rotation_to_rect, convert_pdf_point_to_view_point, convert_pdf_rect_to_view_rect,
    convert_view_point_to_pdf_point, convert_view_rect_to_pdf_rect, normalize_rect,
    transform_for_page_rect_and_rotation,
};
pub use types::{rect_from_object, JsAffineTransform, JsPoint, JsRect, JsSize};
pub use viewport::JsPageViewport;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("Initialized pagegeom-wasm logger");
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}


/// WASM-specific tests that require JsValue.
///
/// Rejected arguments come back as JavaScript `Error` values, which can only
/// be built on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn letter() -> JsRect {
        JsRect::new(0.0, 0.0, 612.0, 792.0)
    }

    fn assert_js_error(err: JsValue) {
        assert!(err.is_instance_of::<js_sys::Error>());
    }

    #[wasm_bindgen_test]
    fn test_align_rectangles_unknown_alignment() {
        let result = align_rectangles(&JsRect::new(0.0, 0.0, 10.0, 10.0), &letter(), 9);
        assert_js_error(result.unwrap_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_rotation_to_rect_invalid_rotation() {
        let result = apply_rotation_to_rect(&letter(), 45);
        assert_js_error(result.unwrap_err());

        assert!(apply_rotation_to_rect(&letter(), 90).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_viewport_rejects_invalid_arguments() {
        assert!(JsPageViewport::new(&letter(), 45, &letter()).is_err());

        let empty = JsRect::new(0.0, 0.0, 0.0, 0.0);
        let err = JsPageViewport::new(&letter(), 0, &empty).err().unwrap();
        assert_js_error(err);

        let err = JsPageViewport::new(&empty, 0, &letter()).err().unwrap();
        assert_js_error(err);
    }

    #[wasm_bindgen_test]
    fn test_conversion_rejects_empty_bounds() {
        let result = convert_view_point_to_pdf_point(
            &JsPoint::new(1.0, 1.0),
            &letter(),
            0,
            &JsRect::new(0.0, 0.0, 0.0, 10.0),
        );
        assert_js_error(result.unwrap_err());
    }

    #[wasm_bindgen_test]
    fn test_scale_rejects_empty_target() {
        let target = JsSize::new(0.0, 10.0);
        let result = scale_for_size_within_size(&target, &JsSize::new(100.0, 100.0));
        assert_js_error(result.unwrap_err());
    }
}
