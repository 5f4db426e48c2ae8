//! Axis-aligned rectangles and the capability trait for indexable items.
//!
//! Coordinates follow screen conventions: `(x, y)` is the top-left corner and
//! y grows downward.

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::QuadTreeError;

/// Rectangle: x, y (top-left), width, height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    ///
    /// No validation happens here; use [`Rect::validate`] where bounds come
    /// from untrusted input.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Returns true when all four fields are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Checks that the rectangle can serve as node bounds.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] when any field is NaN or
    /// infinite, or when width or height is negative.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.is_finite() && self.width >= 0.0 && self.height >= 0.0 {
            Ok(())
        } else {
            Err(QuadTreeError::InvalidBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Right edge (`x + width`)
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point as `(x, y)`
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area of the rectangle
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlap test; rectangles sharing only an edge count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Returns true when `other` lies entirely inside `self` (edges inclusive)
    #[inline]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Anything with an axis-aligned bounding rectangle can be indexed.
///
/// Items do not carry any tree state; the index only asks for the rectangle
/// whenever it needs to route the item.
pub trait Bounded {
    /// Bounding rectangle of the item
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    #[inline]
    fn bounds(&self) -> Rect {
        *self
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<T: Bounded + ?Sized> Bounded for Box<T> {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<T: Bounded + ?Sized> Bounded for Rc<T> {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<T: Bounded + ?Sized> Bounded for Arc<T> {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounded, Rect};
    use crate::error::QuadTreeError;
    use std::rc::Rc;

    #[test]
    fn test_validate_accepts_finite() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).validate().is_ok());
        assert!(Rect::new(-5.0, -5.0, 0.0, 0.0).validate().is_ok(), "Zero extent is allowed");
    }

    #[test]
    fn test_validate_rejects_nan_and_infinite() {
        let nan = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(matches!(nan.validate(), Err(QuadTreeError::InvalidBounds { .. })));

        let inf = Rect::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert!(inf.validate().is_err(), "Infinite width must be rejected");
    }

    #[test]
    fn test_validate_rejects_negative_extent() {
        assert!(Rect::new(0.0, 0.0, -1.0, 10.0).validate().is_err());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), (25.0, 40.0));
        assert_eq!(r.area(), 1200.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);
        let touching = Rect::new(10.0, 0.0, 5.0, 5.0);

        assert!(a.intersects(&b) && b.intersects(&a));
        assert!(!a.intersects(&c) && !c.intersects(&a));
        assert!(a.intersects(&touching), "Shared edge counts as overlap");
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&Rect::new(90.0, 90.0, 20.0, 5.0)));
    }

    #[test]
    fn test_bounded_forwarding() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((&r).bounds(), r);
        assert_eq!(Box::new(r).bounds(), r);
        assert_eq!(Rc::new(r).bounds(), r);
    }
}
