//! A page displayed in a view.
//!
//! [`PageViewport`] validates a crop box / rotation / view bounds triple once
//! and keeps both conversion matrices, so repeated conversions (hit testing,
//! drawing annotation frames) do not rebuild and invert the transform for
//! every point.

use crate::affine::AffineTransform;
use crate::align::align_size_within_rect_with_offset;
use crate::error::Result;
use crate::scale::{size_for_scale, ScaleOptions};
use crate::types::{Point, Rect, RectAlignment, Rotation, Size};

use super::convert::{map_corners, page_to_view_transform};
use super::rotation::apply_rotation_to_rect;

/// Page-to-view mapping for one displayed page.
///
/// # Example
///
/// ```
/// use pagegeom_core::{PageViewport, Point, Rect, Rotation};
///
/// // US Letter page shown at 100% without rotation
/// let page = Rect::new(0.0, 0.0, 612.0, 792.0);
/// let viewport = PageViewport::new(page, Rotation::Deg0, page).unwrap();
///
/// // Point near the top in PDF space (y=720) -> near the top of the view (y=72)
/// let p = viewport.pdf_point_to_view(Point::new(72.0, 720.0));
/// assert!((p.y - 72.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    crop_box: Rect,
    rotation: Rotation,
    bounds: Rect,
    to_view: AffineTransform,
    to_pdf: AffineTransform,
}

impl PageViewport {
    /// Create a viewport for a page.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSize` if the crop box or the view
    /// bounds have a zero or non-finite extent.
    pub fn new(crop_box: Rect, rotation: Rotation, bounds: Rect) -> Result<Self> {
        let to_view = page_to_view_transform(crop_box, rotation, bounds)?;
        let to_pdf = to_view.invert()?;
        log::trace!(
            "Created page viewport: crop box {crop_box:?}, rotation {}, bounds {bounds:?}",
            rotation.degrees()
        );
        Ok(Self {
            crop_box: crop_box.normalized(),
            rotation,
            bounds: bounds.normalized(),
            to_view,
            to_pdf,
        })
    }

    /// Create a viewport that shows the page scaled to fit `container`.
    ///
    /// The rotated page is scaled with `options`, then placed inside
    /// `container` at `alignment`.
    pub fn fit_in(
        crop_box: Rect,
        rotation: Rotation,
        container: Rect,
        alignment: RectAlignment,
        options: ScaleOptions,
    ) -> Result<Self> {
        let page_size = apply_rotation_to_rect(crop_box.normalized(), rotation).size;
        let container = container.normalized();
        let scale = options.scale_for(page_size, container.size)?;
        let bounds = align_size_within_rect_with_offset(
            size_for_scale(page_size, scale),
            container,
            0.0,
            0.0,
            alignment,
        );
        Self::new(crop_box, rotation, bounds)
    }

    pub fn crop_box(&self) -> Rect {
        self.crop_box
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Page-to-view transform.
    pub fn transform(&self) -> AffineTransform {
        self.to_view
    }

    /// View-to-page transform.
    pub fn inverse_transform(&self) -> AffineTransform {
        self.to_pdf
    }

    /// Crop box size after rotation (width and height swapped at 90°/270°).
    pub fn rotated_page_size(&self) -> Size {
        apply_rotation_to_rect(self.crop_box, self.rotation).size
    }

    /// Current zoom: view units per page unit.
    pub fn zoom(&self) -> f64 {
        self.bounds.size.width / self.rotated_page_size().width
    }

    /// Scale at which the rotated page fits `view_size` under `options`.
    pub fn fit_scale(&self, view_size: Size, options: ScaleOptions) -> Result<f64> {
        options.scale_for(self.rotated_page_size(), view_size)
    }

    pub fn pdf_point_to_view(&self, point: Point) -> Point {
        self.to_view.apply_to_point(point)
    }

    pub fn view_point_to_pdf(&self, point: Point) -> Point {
        self.to_pdf.apply_to_point(point)
    }

    /// Page rectangle to normalized view rectangle.
    pub fn pdf_rect_to_view(&self, rect: Rect) -> Rect {
        map_corners(&self.to_view, rect)
    }

    /// View rectangle to normalized page rectangle.
    pub fn view_rect_to_pdf(&self, rect: Rect) -> Rect {
        map_corners(&self.to_pdf, rect)
    }
}
