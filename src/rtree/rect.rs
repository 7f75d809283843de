//! Axis-aligned integer rectangles.

use geo_traits::{CoordTrait, RectTrait};

use crate::error::{RTreeError, Result};
use crate::r#type::IndexableNum;

/// An axis-aligned rectangle with inclusive integer bounds.
///
/// Always satisfies `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<N: IndexableNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: IndexableNum> Rect<N> {
    /// Create a rectangle from two opposite corners, in any order.
    pub fn new(x1: N, y1: N, x2: N, y2: N) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Create a rectangle from its minimum and maximum corners, rejecting inverted input.
    pub fn try_new(min_x: N, min_y: N, max_x: N, max_y: N) -> Result<Self> {
        if min_x > max_x || min_y > max_y {
            return Err(RTreeError::InvalidRect {
                min_x: min_x.widen(),
                min_y: min_y.widen(),
                max_x: max_x.widen(),
                max_y: max_y.widen(),
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// A degenerate rectangle covering a single point.
    pub fn point(x: N, y: N) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// The bounding rectangle of every rectangle in `rects`, or `None` when it is empty.
    pub fn of<'a>(rects: impl IntoIterator<Item = &'a Rect<N>>) -> Option<Self> {
        let mut rects = rects.into_iter();
        let first = *rects.next()?;
        Some(rects.fold(first, |acc, r| acc.union(r)))
    }

    pub fn min_x(&self) -> N {
        self.min_x
    }

    pub fn min_y(&self) -> N {
        self.min_y
    }

    pub fn max_x(&self) -> N {
        self.max_x
    }

    pub fn max_y(&self) -> N {
        self.max_y
    }

    /// Horizontal midpoint, truncated toward zero.
    #[inline]
    pub fn center_x(&self) -> N {
        self.min_x.midpoint(self.max_x)
    }

    /// Vertical midpoint, truncated toward zero.
    #[inline]
    pub fn center_y(&self) -> N {
        self.min_y.midpoint(self.max_y)
    }

    /// Returns `true` unless one rectangle lies strictly to one side of the other. Rectangles
    /// that only share an edge or a corner intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect<N>) -> bool {
        if self.max_x < other.min_x {
            return false;
        }

        if self.max_y < other.min_y {
            return false;
        }

        if self.min_x > other.max_x {
            return false;
        }

        if self.min_y > other.max_y {
            return false;
        }

        true
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect<N>) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// The smallest rectangle covering both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Rect<N>) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grow this rectangle in place to cover `other`.
    pub fn expand(&mut self, other: &Rect<N>) {
        *self = self.union(other);
    }

    /// Area as a wide integer, so that large coordinate ranges cannot overflow.
    pub fn area(&self) -> i128 {
        let width = (self.max_x.widen() - self.min_x.widen()) as i128;
        let height = (self.max_y.widen() - self.min_y.widen()) as i128;
        width * height
    }

    /// Build a rectangle from any [`RectTrait`] implementation.
    pub fn from_rect_trait(rect: &impl RectTrait<T = N>) -> Self {
        Self::new(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }
}

/// A single coordinate.
///
/// Used in the implementation of RectTrait for Rect.
pub struct Coord<N: IndexableNum> {
    x: N,
    y: N,
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl<N: IndexableNum> RectTrait for Rect<N> {
    type T = N;
    type CoordType<'a>
        = Coord<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.min_x,
            y: self.min_y,
        }
    }

    fn max(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.max_x,
            y: self.max_y,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalises_corners() {
        let r = Rect::new(5, 1, 2, 4);
        assert_eq!((r.min_x(), r.min_y(), r.max_x(), r.max_y()), (2, 1, 5, 4));
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert!(matches!(
            Rect::try_new(3, 0, 1, 0),
            Err(RTreeError::InvalidRect { .. })
        ));
        assert!(Rect::try_new(1, 1, 1, 1).is_ok());
    }

    #[test]
    fn centers_truncate() {
        let r = Rect::new(1, 1, 4, 6);
        assert_eq!(r.center_x(), 2);
        assert_eq!(r.center_y(), 3);
    }

    #[test]
    fn touching_edges_intersect() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(2, 0, 4, 2);
        let c = Rect::new(2, 2, 3, 3);
        assert!(a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(!a.intersects(&Rect::new(3, 0, 4, 2)));
        assert!(!a.intersects(&Rect::new(0, 3, 2, 4)));
    }

    #[test]
    fn intersects_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 6, 6),
            Rect::new(10, 10, 20, 20),
            Rect::new(11, 0, 12, 1),
            Rect::new(-5, -5, -1, -1),
            Rect::point(3, 7),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn bounding_rect_of_many() {
        let rects = [Rect::new(1, 1, 3, 3), Rect::new(-2, 4, 0, 9)];
        assert_eq!(Rect::of(&rects), Some(Rect::new(-2, 1, 3, 9)));
        assert_eq!(Rect::<i32>::of(&[]), None);
    }

    #[test]
    fn contains_and_area() {
        let outer = Rect::new(0, 0, 10, 5);
        assert!(outer.contains(&Rect::new(1, 1, 2, 2)));
        assert!(!outer.contains(&Rect::new(1, 1, 11, 2)));
        assert_eq!(outer.area(), 50);
    }

    #[test]
    fn expand_grows_in_place() {
        let mut r = Rect::point(2, 2);
        r.expand(&Rect::new(4, -1, 5, 1));
        assert_eq!(r, Rect::new(2, -1, 5, 2));

        // already covered
        r.expand(&Rect::new(3, 0, 4, 1));
        assert_eq!(r, Rect::new(2, -1, 5, 2));
    }

    #[test]
    fn from_geo_rect() {
        let rect = geo::Rect::new(geo::coord! { x: 4, y: 0 }, geo::coord! { x: 1, y: 3 });
        assert_eq!(Rect::from_rect_trait(&rect), Rect::new(1, 0, 4, 3));
    }
}
