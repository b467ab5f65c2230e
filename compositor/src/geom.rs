#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in container space (CSS pixels, origin at the container's top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// Both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Clamp a top-left position so a box of `item` size stays inside `bounds`.
///
/// The upper bound is floored at zero, so an item larger than the bounds
/// pins to the top/left edge instead of going negative.
#[must_use]
pub fn clamp_into(pos: Point, item: Size, bounds: Size) -> Point {
    let max_x = (bounds.width - item.width).max(0.0);
    let max_y = (bounds.height - item.height).max(0.0);
    Point { x: pos.x.clamp(0.0, max_x), y: pos.y.clamp(0.0, max_y) }
}
