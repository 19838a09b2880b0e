//! WASM-compatible wrapper types for geometry values.
//!
//! This module provides JavaScript-friendly classes that wrap the core pagegeom
//! value types, plus the conversions from raw JS numbers (alignment codes and
//! rotation degrees) into the core's closed enums.

use pagegeom_core::{AffineTransform, GeometryError, Point, Rect, RectAlignment, Rotation, Size};
use wasm_bindgen::prelude::*;

/// A point for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsPoint {
    inner: Point,
}

#[wasm_bindgen]
impl JsPoint {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> JsPoint {
        JsPoint {
            inner: Point::new(x, y),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }
}

/// A size for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsSize {
    inner: Size,
}

#[wasm_bindgen]
impl JsSize {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> JsSize {
        JsSize {
            inner: Size::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height
    }
}

/// A rectangle for JavaScript.
///
/// Rectangles can also be exchanged as plain `{ origin: { x, y }, size:
/// { width, height } }` objects via [`rect_from_object`] and `to_object()`.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    inner: Rect,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsRect {
        JsRect {
            inner: Rect::new(x, y, width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.origin.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.origin.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.size.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.size.height
    }

    /// Copy into a plain JavaScript object.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner)
            .map_err(|e| js_sys::Error::new(&format!("Cannot convert rect: {}", e)).into())
    }
}

/// Build a `JsRect` from a plain `{ origin: { x, y }, size: { width, height } }`
/// object.
///
/// # Errors
/// Returns an error if the value does not have that shape.
#[wasm_bindgen]
pub fn rect_from_object(value: JsValue) -> Result<JsRect, JsValue> {
    let rect: Rect = serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_sys::Error::new(&format!("Invalid rect: {}", e)))?;
    Ok(JsRect::from(rect))
}

/// An affine transform for JavaScript, with the usual `a b c d tx ty`
/// coefficients (compatible with `DOMMatrix` / canvas `setTransform`).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsAffineTransform {
    inner: AffineTransform,
}

#[wasm_bindgen]
impl JsAffineTransform {
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> f64 {
        self.inner.a
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> f64 {
        self.inner.b
    }

    #[wasm_bindgen(getter)]
    pub fn c(&self) -> f64 {
        self.inner.c
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> f64 {
        self.inner.d
    }

    #[wasm_bindgen(getter)]
    pub fn tx(&self) -> f64 {
        self.inner.tx
    }

    #[wasm_bindgen(getter)]
    pub fn ty(&self) -> f64 {
        self.inner.ty
    }

    /// Coefficients as `[a, b, c, d, tx, ty]`.
    pub fn to_array(&self) -> Vec<f64> {
        let t = self.inner;
        vec![t.a, t.b, t.c, t.d, t.tx, t.ty]
    }

    /// Apply the transform to a point.
    pub fn apply_to_point(&self, point: &JsPoint) -> JsPoint {
        JsPoint::from(self.inner.apply_to_point(point.inner))
    }
}

macro_rules! wrapper_conversions {
    ($js:ty, $core:ty) => {
        impl From<$core> for $js {
            fn from(inner: $core) -> Self {
                Self { inner }
            }
        }

        impl From<&$js> for $core {
            fn from(value: &$js) -> Self {
                value.inner
            }
        }
    };
}

wrapper_conversions!(JsPoint, Point);
wrapper_conversions!(JsSize, Size);
wrapper_conversions!(JsRect, Rect);
wrapper_conversions!(JsAffineTransform, AffineTransform);

/// Convert a u8 alignment code to the core RectAlignment enum.
///
/// Values:
/// - 0 = Center
/// - 1 = Top, 2 = TopLeft, 3 = TopRight
/// - 4 = Left
/// - 5 = Bottom, 6 = BottomLeft, 7 = BottomRight
/// - 8 = Right
pub(crate) fn alignment_from_u8(value: u8) -> Result<RectAlignment, GeometryError> {
    RectAlignment::try_from(value)
}

/// Convert rotation degrees (0, 90, 180 or 270) to the core Rotation enum.
pub(crate) fn rotation_from_i32(degrees: i32) -> Result<Rotation, GeometryError> {
    Rotation::try_from(degrees)
}

/// Turn a core error into a JavaScript `Error`.
pub(crate) fn to_js_error(err: GeometryError) -> JsValue {
    log::warn!("Geometry call rejected: {err}");
    js_sys::Error::new(&err.to_string()).into()
}


/// WASM-specific tests that require JsValue.
///
/// These tests exchange plain JavaScript objects and can only run on wasm32
/// targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestPoint {
        x: f64,
        y: f64,
    }

    #[derive(Serialize)]
    struct TestSize {
        width: f64,
        height: f64,
    }

    #[derive(Serialize)]
    struct TestRect {
        origin: TestPoint,
        size: TestSize,
    }

    #[wasm_bindgen_test]
    fn test_rect_object_round_trip() {
        let rect = JsRect::new(36.0, 18.0, 540.0, 720.0);
        let object = rect.to_object().unwrap();
        assert!(object.is_object());

        let back = rect_from_object(object).unwrap();
        assert_eq!(back, rect);
    }

    #[wasm_bindgen_test]
    fn test_rect_from_plain_object() {
        let value = serde_wasm_bindgen::to_value(&TestRect {
            origin: TestPoint { x: 0.0, y: 0.0 },
            size: TestSize {
                width: 612.0,
                height: 792.0,
            },
        })
        .unwrap();

        let rect = rect_from_object(value).unwrap();
        assert_eq!(Rect::from(&rect), Rect::new(0.0, 0.0, 612.0, 792.0));
    }

    #[wasm_bindgen_test]
    fn test_rect_from_malformed_object() {
        // A bare point has no origin/size.
        let value = serde_wasm_bindgen::to_value(&TestPoint { x: 1.0, y: 2.0 }).unwrap();
        assert!(rect_from_object(value).is_err());

        assert!(rect_from_object(JsValue::from_str("not a rect")).is_err());
        assert!(rect_from_object(JsValue::NULL).is_err());
    }
}
