//! WASM bindings for `PageViewport`.
//!
//! A viewport validates the crop box, rotation and view bounds once and keeps
//! both conversion matrices, which is what a page view wants for pointer hit
//! testing and annotation overlays.

use crate::types::{
    alignment_from_u8, rotation_from_i32, to_js_error, JsAffineTransform, JsPoint, JsRect, JsSize,
};
use pagegeom_core::{PageViewport, ScaleOptions};
use wasm_bindgen::prelude::*;

/// Page-to-view mapping for one displayed page.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const viewport = JsPageViewport.fit_in(cropBox, 90, container, 0, true, false);
/// const frame = viewport.pdf_rect_to_view(annotationRect);
/// ```
#[wasm_bindgen]
pub struct JsPageViewport {
    inner: PageViewport,
}

#[wasm_bindgen]
impl JsPageViewport {
    /// Create a viewport from a crop box, rotation in degrees and view bounds.
    ///
    /// # Errors
    /// Returns an error for an invalid rotation or an empty crop box / bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(
        crop_box: &JsRect,
        rotation: i32,
        bounds: &JsRect,
    ) -> Result<JsPageViewport, JsValue> {
        let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
        let inner =
            PageViewport::new(crop_box.into(), rotation, bounds.into()).map_err(to_js_error)?;
        Ok(JsPageViewport { inner })
    }

    /// Create a viewport showing the page scaled to fit `container`.
    pub fn fit_in(
        crop_box: &JsRect,
        rotation: i32,
        container: &JsRect,
        alignment: u8,
        allow_zoom_in: bool,
        fit_width_only: bool,
    ) -> Result<JsPageViewport, JsValue> {
        let rotation = rotation_from_i32(rotation).map_err(to_js_error)?;
        let alignment = alignment_from_u8(alignment).map_err(to_js_error)?;
        let options = ScaleOptions {
            allow_zoom_in,
            fit_width_only,
        };
        let inner = PageViewport::fit_in(
            crop_box.into(),
            rotation,
            container.into(),
            alignment,
            options,
        )
        .map_err(to_js_error)?;
        Ok(JsPageViewport { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn crop_box(&self) -> JsRect {
        self.inner.crop_box().into()
    }

    /// Rotation in degrees.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.rotation().degrees()
    }

    #[wasm_bindgen(getter)]
    pub fn bounds(&self) -> JsRect {
        self.inner.bounds().into()
    }

    /// View units per page unit.
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom()
    }

    /// Crop box size after rotation.
    pub fn rotated_page_size(&self) -> JsSize {
        self.inner.rotated_page_size().into()
    }

    /// Page-to-view transform, e.g. for a canvas `setTransform` call.
    pub fn transform(&self) -> JsAffineTransform {
        self.inner.transform().into()
    }

    pub fn inverse_transform(&self) -> JsAffineTransform {
        self.inner.inverse_transform().into()
    }

    pub fn pdf_point_to_view(&self, point: &JsPoint) -> JsPoint {
        self.inner.pdf_point_to_view(point.into()).into()
    }

    pub fn view_point_to_pdf(&self, point: &JsPoint) -> JsPoint {
        self.inner.view_point_to_pdf(point.into()).into()
    }

    pub fn pdf_rect_to_view(&self, rect: &JsRect) -> JsRect {
        self.inner.pdf_rect_to_view(rect.into()).into()
    }

    pub fn view_rect_to_pdf(&self, rect: &JsRect) -> JsRect {
        self.inner.view_rect_to_pdf(rect.into()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> JsRect {
        JsRect::new(0.0, 0.0, 612.0, 792.0)
    }

    #[test]
    fn test_viewport_identity() {
        let vp = JsPageViewport::new(&letter(), 0, &letter()).unwrap();
        assert_eq!(vp.rotation(), 0);
        assert_eq!(vp.zoom(), 1.0);

        let p = vp.pdf_point_to_view(&JsPoint::new(72.0, 720.0));
        assert!((p.x() - 72.0).abs() < 1e-9);
        assert!((p.y() - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_fit_in() {
        let vp = JsPageViewport::fit_in(
            &letter(),
            90,
            &JsRect::new(0.0, 0.0, 396.0, 1000.0),
            1, // top
            true,
            false,
        )
        .unwrap();
        let b = vp.bounds();
        assert!((b.width() - 396.0).abs() < 1e-9);
        assert!((b.height() - 306.0).abs() < 1e-9);
        assert_eq!(b.y(), 0.0);

        let size = vp.rotated_page_size();
        assert_eq!((size.width(), size.height()), (792.0, 612.0));
    }

    #[test]
    fn test_viewport_rect_round_trip() {
        let vp = JsPageViewport::new(&letter(), 270, &JsRect::new(0.0, 0.0, 792.0, 612.0)).unwrap();
        let view = vp.pdf_rect_to_view(&JsRect::new(10.0, 20.0, 30.0, 40.0));
        let back = vp.view_rect_to_pdf(&view);
        assert!((back.x() - 10.0).abs() < 1e-9);
        assert!((back.y() - 20.0).abs() < 1e-9);
        assert!((back.width() - 30.0).abs() < 1e-9);
        assert!((back.height() - 40.0).abs() < 1e-9);
    }
}
