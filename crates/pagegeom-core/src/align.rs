//! Rectangle alignment.
//!
//! Alignment uses view-space conventions (origin top-left, Y-down): the "top"
//! edge of a rectangle is its `min_y` edge and the "left" edge its `min_x`.

use crate::types::{Point, Rect, RectAlignment, Size};

/// Where an anchor sits along one axis.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// Position of a span of `length` placed at this anchor inside
    /// `[start, start + extent]`.
    fn place(self, start: f64, extent: f64, length: f64) -> f64 {
        match self {
            Anchor::Start => start,
            Anchor::Middle => start + (extent - length) / 2.0,
            Anchor::End => start + extent - length,
        }
    }
}

/// Horizontal and vertical anchors for an alignment.
fn anchors(alignment: RectAlignment) -> (Anchor, Anchor) {
    match alignment {
        RectAlignment::Center => (Anchor::Middle, Anchor::Middle),
        RectAlignment::Top => (Anchor::Middle, Anchor::Start),
        RectAlignment::TopLeft => (Anchor::Start, Anchor::Start),
        RectAlignment::TopRight => (Anchor::End, Anchor::Start),
        RectAlignment::Left => (Anchor::Start, Anchor::Middle),
        RectAlignment::Bottom => (Anchor::Middle, Anchor::End),
        RectAlignment::BottomLeft => (Anchor::Start, Anchor::End),
        RectAlignment::BottomRight => (Anchor::End, Anchor::End),
        RectAlignment::Right => (Anchor::End, Anchor::Middle),
    }
}

/// Move `alignee` so that it sits at `alignment` relative to `aligner`.
///
/// The size of `alignee` is preserved. Both rectangles are normalized first,
/// so PDF-style rectangles with negative extents are handled.
///
/// # Example
///
/// ```
/// use pagegeom_core::{align_rectangles, Rect, RectAlignment};
///
/// let centered = align_rectangles(
///     Rect::new(0.0, 0.0, 10.0, 10.0),
///     Rect::new(0.0, 0.0, 100.0, 100.0),
///     RectAlignment::Center,
/// );
/// assert_eq!(centered, Rect::new(45.0, 45.0, 10.0, 10.0));
/// ```
pub fn align_rectangles(alignee: Rect, aligner: Rect, alignment: RectAlignment) -> Rect {
    let alignee = alignee.normalized();
    let aligner = aligner.normalized();
    let (horizontal, vertical) = anchors(alignment);

    Rect {
        origin: Point::new(
            horizontal.place(aligner.origin.x, aligner.size.width, alignee.size.width),
            vertical.place(aligner.origin.y, aligner.size.height, alignee.size.height),
        ),
        size: alignee.size,
    }
}

/// Place a rectangle of `size` at `alignment` inside `bounds`, then move it by
/// `(width_offset, height_offset)`.
///
/// Offsets are applied after alignment, in the coordinate space of `bounds`.
pub fn align_size_within_rect_with_offset(
    size: Size,
    bounds: Rect,
    width_offset: f64,
    height_offset: f64,
    alignment: RectAlignment,
) -> Rect {
    let alignee = Rect {
        origin: Point::default(),
        size,
    };
    align_rectangles(alignee, bounds, alignment).offset(width_offset, height_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligner() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn alignee() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    fn origin_for(alignment: RectAlignment) -> (f64, f64) {
        let r = align_rectangles(alignee(), aligner(), alignment);
        assert_eq!(r.size, Size::new(10.0, 10.0), "size preserved for {alignment:?}");
        (r.origin.x, r.origin.y)
    }

    #[test]
    fn test_center() {
        assert_eq!(
            align_rectangles(alignee(), aligner(), RectAlignment::Center),
            Rect::new(45.0, 45.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_all_nine_anchors() {
        assert_eq!(origin_for(RectAlignment::Center), (45.0, 45.0));
        assert_eq!(origin_for(RectAlignment::Top), (45.0, 0.0));
        assert_eq!(origin_for(RectAlignment::TopLeft), (0.0, 0.0));
        assert_eq!(origin_for(RectAlignment::TopRight), (90.0, 0.0));
        assert_eq!(origin_for(RectAlignment::Left), (0.0, 45.0));
        assert_eq!(origin_for(RectAlignment::Bottom), (45.0, 90.0));
        assert_eq!(origin_for(RectAlignment::BottomLeft), (0.0, 90.0));
        assert_eq!(origin_for(RectAlignment::BottomRight), (90.0, 90.0));
        assert_eq!(origin_for(RectAlignment::Right), (90.0, 45.0));
    }

    #[test]
    fn test_aligner_with_offset_origin() {
        let r = align_rectangles(
            Rect::new(500.0, 500.0, 20.0, 10.0),
            Rect::new(100.0, 200.0, 60.0, 40.0),
            RectAlignment::BottomRight,
        );
        assert_eq!(r, Rect::new(140.0, 230.0, 20.0, 10.0));
    }

    #[test]
    fn test_alignee_larger_than_aligner() {
        let r = align_rectangles(
            Rect::new(0.0, 0.0, 200.0, 50.0),
            aligner(),
            RectAlignment::Center,
        );
        assert_eq!(r, Rect::new(-50.0, 25.0, 200.0, 50.0));
    }

    #[test]
    fn test_negative_extents_are_normalized() {
        let r = align_rectangles(
            Rect::new(10.0, 10.0, -10.0, -10.0),
            Rect::new(100.0, 100.0, -100.0, -100.0),
            RectAlignment::TopLeft,
        );
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_align_size_with_offset() {
        let r = align_size_within_rect_with_offset(
            Size::new(10.0, 20.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            5.0,
            -3.0,
            RectAlignment::Center,
        );
        assert_eq!(r, Rect::new(50.0, 37.0, 10.0, 20.0));
    }

    #[test]
    fn test_align_size_without_offset_matches_align_rectangles() {
        let bounds = Rect::new(12.0, 34.0, 300.0, 200.0);
        for alignment in RectAlignment::ALL {
            let expected = align_rectangles(Rect::new(0.0, 0.0, 50.0, 25.0), bounds, alignment);
            let actual = align_size_within_rect_with_offset(
                Size::new(50.0, 25.0),
                bounds,
                0.0,
                0.0,
                alignment,
            );
            assert_eq!(actual, expected, "{alignment:?}");
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
