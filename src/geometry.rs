//! Plain geometry values used as keys and query regions.
//!
//! The coordinate system has its origin at the lower left corner, with X growing
//! to the right and Y growing upwards. Rectangles are half-open: a [`Rect`] covers
//! `[x, x + width) × [y, y + height)`, so its upper edges are never inside it and
//! a rectangle with zero width or height contains no points at all.

/// A position in 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its lower left origin and its extent.
///
/// Width and height are expected to be non-negative. Nothing is enforced here;
/// a negative extent simply produces a rectangle that contains nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Origin X (left edge, inclusive)
    pub x: f64,
    /// Origin Y (bottom edge, inclusive)
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

/// One of the four equal sub-rectangles of a node's bounds.
///
/// The discriminant is the slot of the matching child in an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Quadrant {
    UpperLeft = 0,
    UpperRight = 1,
    LowerLeft = 2,
    LowerRight = 3,
}

impl Quadrant {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Rect {
    /// Creates a rectangle from its origin and extent
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge (inclusive)
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Bottom edge (inclusive)
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge (exclusive)
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Midpoint of the rectangle
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns whether the point lies inside the half-open rectangle
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Returns whether two rectangles share any area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.max_y() > other.y
            && self.y < other.max_y()
    }
}

/// Node bounds kept as explicit edges.
///
/// Children are cut at the parent's midpoint and reuse the parent's own edges, so
/// the four quadrants tile the parent exactly. Containment is half-open like
/// [`Rect::contains`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cell {
    pub(crate) min_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_x: f64,
    pub(crate) max_y: f64,
}

impl Cell {
    pub(crate) const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub(crate) fn mid(&self) -> Point {
        Point::new(
            self.min_x + (self.max_x - self.min_x) / 2.0,
            self.min_y + (self.max_y - self.min_y) / 2.0,
        )
    }

    #[inline]
    pub(crate) fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.y >= self.min_y && point.x < self.max_x && point.y < self.max_y
    }

    /// Same rule as [`Rect::overlaps`]
    #[inline]
    pub(crate) fn overlaps(&self, area: &Rect) -> bool {
        self.min_x < area.max_x() && self.max_x > area.x && self.max_y > area.y && self.min_y < area.max_y()
    }

    /// Whether the midpoint falls strictly inside on both axes.
    ///
    /// Once a cell is a few ULPs wide the midpoint rounds onto an edge and the
    /// cell can no longer be subdivided.
    pub(crate) fn can_split(&self) -> bool {
        let mid = self.mid();
        self.min_x < mid.x && mid.x < self.max_x && self.min_y < mid.y && mid.y < self.max_y
    }

    /// Quadrant of `point` relative to the midpoint. Points on the vertical
    /// midline go right, points on the horizontal midline go up.
    ///
    /// Every point inside the cell lands in the child returned by
    /// [`quadrants`](Self::quadrants) at the same index.
    pub(crate) fn quadrant_of(&self, point: Point) -> Quadrant {
        let mid = self.mid();
        match (point.x < mid.x, point.y < mid.y) {
            (true, true) => Quadrant::LowerLeft,
            (true, false) => Quadrant::UpperLeft,
            (false, true) => Quadrant::LowerRight,
            (false, false) => Quadrant::UpperRight,
        }
    }

    /// The four children, ordered by [`Quadrant::index`]
    pub(crate) fn quadrants(&self) -> [Self; 4] {
        let mid = self.mid();
        [
            Self::new(self.min_x, mid.y, mid.x, self.max_y),
            Self::new(mid.x, mid.y, self.max_x, self.max_y),
            Self::new(self.min_x, self.min_y, mid.x, mid.y),
            Self::new(mid.x, self.min_y, self.max_x, mid.y),
        ]
    }
}

impl From<Rect> for Cell {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.max_x(), rect.max_y())
    }
}
