//! CSS-pixel geometry for wave placement.
//!
//! ## Usage
//!
//! Convert client coordinates into element-local origins and size waves so
//! they cover the element from any press point.

/// A 2D point in CSS pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin point.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from `x` and `y` coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An element bounding box in CSS pixels, positioned in client space.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    /// Distance from the client-space origin to the left edge.
    pub left: f32,
    /// Distance from the client-space origin to the top edge.
    pub top: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
}

impl Rect {
    /// Creates a rect from its client offset and size.
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The center of the box in element-local coordinates.
    pub fn local_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts a client-space point into element-local coordinates.
    pub fn relative_to(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }

    /// Distance from an element-local origin to the farthest corner of the
    /// box. A wave with this radius covers the element from any press point.
    pub fn corner_distance(&self, origin: Point) -> f32 {
        let dx = origin.x.max(self.width - origin.x);
        let dy = origin.y.max(self.height - origin.y);
        dx.hypot(dy)
    }
}
