use std::fmt::{self, Display, Formatter};

use super::RelationMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The squared distance from the origin.
    pub const fn norm_squared(&self) -> i32 {
        self.x * self.x + self.y * self.y
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The integer points with both coordinates in `-1..=1`.
pub const GRID_3X3: [Point; 9] = [
    Point::new(-1, -1), Point::new(-1, 0), Point::new(-1, 1),
    Point::new(0, -1), Point::new(0, 0), Point::new(0, 1),
    Point::new(1, -1), Point::new(1, 0), Point::new(1, 1),
];

/// The integer points no further than 2 from the origin, measured along the axes.
pub const DIAMOND_13: [Point; 13] = [
    Point::new(-2, 0),
    Point::new(-1, -1), Point::new(-1, 0), Point::new(-1, 1),
    Point::new(0, -2), Point::new(0, -1), Point::new(0, 0), Point::new(0, 1), Point::new(0, 2),
    Point::new(1, -1), Point::new(1, 0), Point::new(1, 1),
    Point::new(2, 0),
];

/// An ordered set of points. Elements of relations over the set are indices into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet(pub Vec<Point>);

impl PointSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The strict order where `a` precedes `b` when `a` is closer to the origin.
    pub fn norm_order(&self) -> RelationMatrix {
        RelationMatrix::from_fn(self.len(), |a, b| self.0[a].norm_squared() < self.0[b].norm_squared())
    }
}

impl From<&[Point]> for PointSet {
    fn from(points: &[Point]) -> Self {
        PointSet(points.to_vec())
    }
}
