use serde::{Deserialize, Serialize};

/// Point in map-local (SVG user) or screen coordinates, depending on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair, used for tooltip blocks and the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box of a rendered region shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub const fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width over height. Infinite for zero-height boxes.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            f64::INFINITY
        } else {
            self.width / self.height
        }
    }

    pub fn center(&self) -> Point {
        self.at_fraction(0.5, 0.5)
    }

    /// Point at `(fx, fy)` of the box, measured from its top-left corner.
    pub fn at_fraction(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x + self.width * fx, self.y + self.height * fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_center() {
        let bbox = BBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bbox.left(), 10.0);
        assert_eq!(bbox.right(), 110.0);
        assert_eq!(bbox.top(), 20.0);
        assert_eq!(bbox.bottom(), 70.0);
        assert_eq!(bbox.center(), Point::new(60.0, 45.0));
        assert_eq!(bbox.area(), 5_000.0);
        assert_eq!(bbox.aspect_ratio(), 2.0);
    }

    #[test]
    fn fractional_point() {
        let bbox = BBox::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(bbox.at_fraction(0.78, 0.45), Point::new(156.0, 45.0));
    }

    #[test]
    fn zero_height_aspect_is_infinite() {
        assert!(BBox::new(0.0, 0.0, 5.0, 0.0).aspect_ratio().is_infinite());
    }
}
