//! pagegeom Core - Page geometry for document viewers
//!
//! This crate provides the geometry used to display document pages:
//! fit-to-size scaling, rectangle alignment, page rotation, and conversion
//! between page space (PDF, Y-up) and view space (screen, Y-down).
//!
//! Every function is pure. Inputs are small `Copy` value types and results
//! are new values; invalid arguments are reported as [`GeometryError`].

pub mod affine;
pub mod align;
pub mod error;
pub mod scale;
pub mod transform;
pub mod types;

pub use affine::AffineTransform;
pub use align::{align_rectangles, align_size_within_rect_with_offset};
pub use error::{GeometryError, Result};
pub use scale::{
    scale_for_size_within_size, scale_for_size_within_size_with_options, size_for_scale,
    ScaleOptions,
};
pub use transform::{
    apply_rotation_to_rect, convert_pdf_point_to_view_point, convert_pdf_rect_to_view_rect,
    convert_view_point_to_pdf_point, convert_view_rect_to_pdf_rect, normalize_rect,
    page_to_view_transform, transform_for_page_rect_and_rotation, view_to_page_transform,
    PageViewport,
};
pub use types::{Point, Rect, RectAlignment, Rotation, Size};
