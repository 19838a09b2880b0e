//! Page rotation and page/view coordinate conversion.
//!
//! # Coordinate Systems
//!
//! - Page space: PDF user space, origin bottom-left, Y-up, bounded by the
//!   crop box
//! - View space: the rendering surface, origin top-left, Y-down, bounded by
//!   the view bounds
//! - Rotation is the clockwise page display rotation (0, 90, 180 or 270)
//!
//! All conversions derive from [`transform_for_page_rect_and_rotation`], so
//! converting a point to view space and back returns the original point.

mod convert;
mod rotation;
mod viewport;

pub use convert::{
    convert_pdf_point_to_view_point, convert_pdf_rect_to_view_rect,
    convert_view_point_to_pdf_point, convert_view_rect_to_pdf_rect, normalize_rect,
    page_to_view_transform, view_to_page_transform,
};
pub use rotation::{apply_rotation_to_rect, transform_for_page_rect_and_rotation};
pub use viewport::PageViewport;
