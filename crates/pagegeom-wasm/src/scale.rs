//! WASM bindings for fit-to-size scale computation.

use crate::types::{to_js_error, JsSize};
use pagegeom_core::scale as core_scale;
use wasm_bindgen::prelude::*;

/// Largest uniform scale at which `target` fits inside `bounds`.
///
/// # Errors
///
/// Returns an error if `target` has a zero or negative side, or `bounds` is
/// negative.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const page = new JsSize(612, 792);
/// const view = new JsSize(390, 844);
/// const zoom = scale_for_size_within_size(page, view); // 0.637...
/// ```
#[wasm_bindgen]
pub fn scale_for_size_within_size(target: &JsSize, bounds: &JsSize) -> Result<f64, JsValue> {
    core_scale::scale_for_size_within_size(target.into(), bounds.into()).map_err(to_js_error)
}

/// Scale with zoom and width-fit policies.
///
/// # Arguments
///
/// * `allow_zoom_in` - Allow scales above 1.0; otherwise content is only shrunk
/// * `fit_width_only` - Fit the width and let the height overflow
#[wasm_bindgen]
pub fn scale_for_size_within_size_with_options(
    target: &JsSize,
    bounds: &JsSize,
    allow_zoom_in: bool,
    fit_width_only: bool,
) -> Result<f64, JsValue> {
    core_scale::scale_for_size_within_size_with_options(
        target.into(),
        bounds.into(),
        allow_zoom_in,
        fit_width_only,
    )
    .map_err(to_js_error)
}

/// Size multiplied by `scale` on both axes.
#[wasm_bindgen]
pub fn size_for_scale(size: &JsSize, scale: f64) -> JsSize {
    core_scale::size_for_scale(size.into(), scale).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_size_within_size() {
        let scale =
            scale_for_size_within_size(&JsSize::new(200.0, 100.0), &JsSize::new(100.0, 100.0))
                .unwrap();
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn test_scale_with_options() {
        let scale = scale_for_size_within_size_with_options(
            &JsSize::new(50.0, 50.0),
            &JsSize::new(100.0, 200.0),
            false,
            false,
        )
        .unwrap();
        assert_eq!(scale, 1.0);

        let scale = scale_for_size_within_size_with_options(
            &JsSize::new(100.0, 1000.0),
            &JsSize::new(300.0, 200.0),
            true,
            true,
        )
        .unwrap();
        assert_eq!(scale, 3.0);
    }

    #[test]
    fn test_size_for_scale() {
        let s = size_for_scale(&JsSize::new(200.0, 100.0), 0.5);
        assert_eq!(s.width(), 100.0);
        assert_eq!(s.height(), 50.0);
    }
}
