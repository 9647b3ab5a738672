use crate::geometry::primitives::{Point, Rect};
use anyhow::Result;
use anyhow::ensure;

/// Fixed bounds for one layout attempt.
/// Origin in the top-left corner, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "canvas dimensions must be positive, got {width} x {height}"
        );
        Ok(Canvas { width, height })
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    pub fn center(&self) -> Point {
        Point(self.width / 2.0, self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
