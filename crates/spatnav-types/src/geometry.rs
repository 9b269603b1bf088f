//! Axis-aligned rectangles and points in viewport coordinates.

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates.
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

/// A border box as reported by the host, edge-addressed the way a
/// bounding client rect is.
///
/// `right >= left` and `bottom >= top` always hold: constructors clamp a
/// negative extent to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            top: y,
            right: x + width,
            bottom: y + height,
            left: x,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// A zero-size rectangle sitting on `point`.
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Round every edge to two decimal places.
    ///
    /// Sub-pixel layout noise otherwise turns equal distances into
    /// unequal ones and breaks DOM-order tie-breaking.
    pub fn rounded(&self) -> Self {
        fn round2(v: f64) -> f64 {
            (v * 100.0).round() / 100.0
        }
        Self {
            top: round2(self.top),
            right: round2(self.right),
            bottom: round2(self.bottom),
            left: round2(self.left),
            width: round2(self.width),
            height: round2(self.height),
        }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Geometric center.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Half-open containment test: the right and bottom edges are
    /// outside.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// The overlapping region of two rectangles, or `None` when they
    /// only touch or are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::from_edges(left, top, right, bottom))
    }

    /// Area of the overlapping region, zero when disjoint.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        self.intersection(other)
            .map(|r| r.width * r.height)
            .unwrap_or(0.0)
    }
}
