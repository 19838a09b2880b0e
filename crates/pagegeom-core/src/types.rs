//! Geometric value types: points, sizes, rectangles, alignments and rotations.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// A point in either page or view space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle.
///
/// Both components should be non-negative. Size-based functions do not
/// normalize negative values; they reject them where a positive extent is
/// required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Size with width and height exchanged.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// True if both components are finite and strictly positive.
    pub(crate) fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle.
///
/// Rectangles read from PDF files may carry a negative width or height, in
/// which case `origin` is not the minimum corner. Use [`Rect::normalized`]
/// to get the equivalent rectangle with a non-negative size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Smallest normalized rectangle spanning two corner points.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        Self::new(x0, y0, a.x.max(b.x) - x0, a.y.max(b.y) - y0)
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The corner opposite to `origin`.
    pub fn far_corner(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
        )
    }

    /// Equivalent rectangle with non-negative size and origin at the
    /// minimum corner.
    ///
    /// Idempotent: a rectangle that is already normalized is returned
    /// unchanged.
    pub fn normalized(&self) -> Self {
        let mut rect = *self;
        if rect.size.width < 0.0 {
            rect.origin.x += rect.size.width;
            rect.size.width = -rect.size.width;
        }
        if rect.size.height < 0.0 {
            rect.origin.y += rect.size.height;
            rect.size.height = -rect.size.height;
        }
        rect
    }

    /// Rectangle moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

/// Anchor used to position one rectangle relative to another.
///
/// Discriminants follow the classic declaration order, so raw values coming
/// from other environments can be converted with `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum RectAlignment {
    #[default]
    Center = 0,
    Top = 1,
    TopLeft = 2,
    TopRight = 3,
    Left = 4,
    Bottom = 5,
    BottomLeft = 6,
    BottomRight = 7,
    Right = 8,
}

impl RectAlignment {
    /// All nine anchors in declaration order.
    pub const ALL: [RectAlignment; 9] = [
        RectAlignment::Center,
        RectAlignment::Top,
        RectAlignment::TopLeft,
        RectAlignment::TopRight,
        RectAlignment::Left,
        RectAlignment::Bottom,
        RectAlignment::BottomLeft,
        RectAlignment::BottomRight,
        RectAlignment::Right,
    ];
}

impl TryFrom<u8> for RectAlignment {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self> {
        RectAlignment::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| {
                log::debug!("Rejected rectangle alignment {value}");
                GeometryError::InvalidAlignment(value)
            })
    }
}

/// Clockwise page display rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Convert a PDF `/Rotate` value, accepting any multiple of 90.
    ///
    /// Values such as -90 or 450 are normalized into 0..360. Anything that is
    /// not a multiple of 90 is rejected.
    pub fn from_page_rotate(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            log::debug!("Rejected page rotation {degrees}");
            return Err(GeometryError::InvalidRotation(degrees));
        }
        Rotation::try_from(degrees.rem_euclid(360))
    }

    /// Rotation in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    /// Number of clockwise quarter turns (0..=3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Rotation that undoes this one.
    pub fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    /// This rotation followed by `other`.
    pub fn then(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => {
                log::debug!("Rejected rotation {degrees}");
                Err(GeometryError::InvalidRotation(degrees))
            }
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> i32 {
        rotation.degrees()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
