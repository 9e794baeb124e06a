use crate::Point;

/// An axis-aligned rectangle defined by its minimum corner and its size.
///
/// The rect covers the half-open ranges `[position.x, bottom.x)` and
/// `[position.y, bottom.y)`, so a point on the right or bottom edge belongs to
/// the neighbouring rect. This lets the four quarters of a node tile it
/// without overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    position: Point,
    size: Point,
}

impl Rect {
    /// Create a new rect from its top-left corner and its size
    pub fn new(position: Point, size: Point) -> Self {
        Self { position, size }
    }

    /// Create a new rect spanning from `start` to the exclusive corner `end`
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start, end - start)
    }

    /// Get the top-left (minimum) corner of the rect
    pub fn position(&self) -> Point {
        self.position
    }

    /// Get the width and height of the rect
    pub fn size(&self) -> Point {
        self.size
    }

    /// Get the exclusive bottom-right (maximum) corner of the rect
    pub fn bottom(&self) -> Point {
        self.position + self.size
    }

    /// Get the center point of the rect
    pub fn center(&self) -> Point {
        self.position + self.size.halved()
    }

    /// Get both corners, minimum first
    pub fn corners(&self) -> (Point, Point) {
        (self.position, self.bottom())
    }

    /// Check if a point lies within the rect
    pub fn contains(&self, point: &Point) -> bool {
        let bottom = self.bottom();
        self.position.x() <= point.x()
            && point.x() < bottom.x()
            && self.position.y() <= point.y()
            && point.y() < bottom.y()
    }

    /// Check if the rect shares any area with another rect
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_start, a_end) = self.corners();
        let (b_start, b_end) = other.corners();
        a_start.x() < b_end.x()
            && a_end.x() > b_start.x()
            && a_start.y() < b_end.y()
            && a_end.y() > b_start.y()
    }

    /// Check if either rect contains the other's top-left corner.
    ///
    /// This misses overlaps where neither corner falls inside the other rect,
    /// e.g. a wide, short rect crossing a tall, narrow one.
    pub fn corner_intersects(&self, other: &Rect) -> bool {
        self.contains(&other.position) || other.contains(&self.position)
    }

    /// Check if the rect is usable as a tree boundary
    pub(crate) fn is_valid(&self) -> bool {
        let (start, end) = self.corners();
        [start.x(), start.y(), end.x(), end.y()]
            .iter()
            .all(|c| c.is_finite())
            && self.size.x() >= 0.
            && self.size.y() >= 0.
    }

    /// Quarter the rect to produce four smaller rects, ordered top-left,
    /// top-right, bottom-left, bottom-right
    pub fn quarter(&self) -> [Self; 4] {
        let half = self.size.halved();
        let (x, y) = (self.position.x(), self.position.y());
        let (hw, hh) = (half.x(), half.y());

        [
            Rect::new(Point::new(x, y), half),
            Rect::new(Point::new(x + hw, y), half),
            Rect::new(Point::new(x, y + hh), half),
            Rect::new(Point::new(x + hw, y + hh), half),
        ]
    }
}
