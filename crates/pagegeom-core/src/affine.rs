//! 2D affine transforms.
//!
//! Coefficients follow the usual row-vector convention:
//!
//! ```text
//! x' = a * x + c * y + tx
//! y' = b * x + d * y + ty
//! ```
//!
//! Composition is associative but not commutative: `t1.then(t2)` applies
//! `t1` first.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::types::{Point, Rect, Rotation};

/// A 2D affine transform made of six coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Clockwise rotation about the origin in a Y-up coordinate system.
    ///
    /// Coefficients are exact (no trigonometry), so quarter turns never
    /// accumulate rounding error.
    pub fn quarter_turn(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Deg0 => Self::IDENTITY,
            // (x, y) -> (y, -x)
            Rotation::Deg90 => Self::new(0.0, -1.0, 1.0, 0.0, 0.0, 0.0),
            // (x, y) -> (-x, -y)
            Rotation::Deg180 => Self::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0),
            // (x, y) -> (-y, x)
            Rotation::Deg270 => Self::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Transform that applies `self` first and then `other`.
    pub fn then(&self, other: &AffineTransform) -> Self {
        Self {
            a: other.a * self.a + other.c * self.b,
            b: other.b * self.a + other.d * self.b,
            c: other.a * self.c + other.c * self.d,
            d: other.b * self.c + other.d * self.d,
            tx: other.a * self.tx + other.c * self.ty + other.tx,
            ty: other.b * self.tx + other.d * self.ty + other.ty,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    /// Inverse transform.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonInvertible` if the determinant is zero or
    /// not finite.
    pub fn invert(&self) -> Result<Self> {
        if !self.is_invertible() {
            log::debug!("Cannot invert transform {self:?}");
            return Err(GeometryError::NonInvertible);
        }
        let det = self.determinant();
        Ok(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            tx: (self.c * self.ty - self.d * self.tx) / det,
            ty: (self.b * self.tx - self.a * self.ty) / det,
        })
    }

    pub fn apply_to_point(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    /// Bounding rectangle of the four transformed corners of `rect`.
    ///
    /// The result is always normalized.
    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        let r = rect.normalized();
        let corners = [
            Point::new(r.min_x(), r.min_y()),
            Point::new(r.max_x(), r.min_y()),
            Point::new(r.min_x(), r.max_y()),
            Point::new(r.max_x(), r.max_y()),
        ]
        .map(|p| self.apply_to_point(p));

        let (mut x0, mut y0) = (f64::INFINITY, f64::INFINITY);
        let (mut x1, mut y1) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in corners {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Coefficient-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &AffineTransform, epsilon: f64) -> bool {
        (self.a - other.a).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.c - other.c).abs() <= epsilon
            && (self.d - other.d).abs() <= epsilon
            && (self.tx - other.tx).abs() <= epsilon
            && (self.ty - other.ty).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_point() {
        let p = Point::new(3.0, -7.5);
        assert_eq!(AffineTransform::IDENTITY.apply_to_point(p), p);
        assert_eq!(AffineTransform::default(), AffineTransform::IDENTITY);
    }

    #[test]
    fn test_translation_then_scale() {
        let t = AffineTransform::translation(10.0, 20.0).then(&AffineTransform::scale(2.0, 3.0));
        assert_eq!(t.apply_to_point(Point::new(1.0, 1.0)), Point::new(22.0, 63.0));
    }

    #[test]
    fn test_composition_not_commutative() {
        let t = AffineTransform::translation(10.0, 0.0);
        let s = AffineTransform::scale(2.0, 2.0);
        let p = Point::new(1.0, 0.0);
        assert_eq!(t.then(&s).apply_to_point(p), Point::new(22.0, 0.0));
        assert_eq!(s.then(&t).apply_to_point(p), Point::new(12.0, 0.0));
    }

    #[test]
    fn test_quarter_turns_clockwise() {
        let p = Point::new(1.0, 0.0);
        let turn = |r| AffineTransform::quarter_turn(r).apply_to_point(p);
        assert_eq!(turn(Rotation::Deg0), Point::new(1.0, 0.0));
        assert_eq!(turn(Rotation::Deg90), Point::new(0.0, -1.0));
        assert_eq!(turn(Rotation::Deg180), Point::new(-1.0, 0.0));
        assert_eq!(turn(Rotation::Deg270), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_quarter_turns_compose() {
        let ninety = AffineTransform::quarter_turn(Rotation::Deg90);
        let twice = ninety.then(&ninety);
        assert_eq!(twice, AffineTransform::quarter_turn(Rotation::Deg180));
    }

    #[test]
    fn test_invert() {
        let t = AffineTransform::new(2.0, 1.0, -1.0, 3.0, 5.0, -4.0);
        let inv = t.invert().unwrap();
        assert!(t.then(&inv).approx_eq(&AffineTransform::IDENTITY, 1e-12));
        assert!(inv.then(&t).approx_eq(&AffineTransform::IDENTITY, 1e-12));
    }

    #[test]
    fn test_invert_singular() {
        let t = AffineTransform::scale(0.0, 1.0);
        assert!(!t.is_invertible());
        assert_eq!(t.invert(), Err(GeometryError::NonInvertible));
    }

    #[test]
    fn test_apply_to_rect_rotated() {
        let r = Rect::new(0.0, 0.0, 20.0, 10.0);
        let rotated = AffineTransform::quarter_turn(Rotation::Deg90).apply_to_rect(r);
        assert_eq!(rotated, Rect::new(0.0, -20.0, 10.0, 20.0));
    }

    #[test]
    fn test_apply_to_rect_normalizes_input() {
        let r = Rect::new(20.0, 10.0, -20.0, -10.0);
        let out = AffineTransform::IDENTITY.apply_to_rect(r);
        assert_eq!(out, Rect::new(0.0, 0.0, 20.0, 10.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
