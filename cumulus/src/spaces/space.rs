use crate::geometry::primitives::{Point, Rect};

/// Direction in which a free space extends from its anchor point.
///
/// Placing a rectangular label inside a larger free rectangle leaves an
/// L-shaped remainder. Representing the remainder as up to two new rectangles
/// anchored to the same corner as their parent keeps the free-space set exactly
/// representable as axis-aligned rectangles, without a general polygon structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerDir {
    /// Extends right and up from the anchor
    LeftBottom,
    /// Extends right and down from the anchor
    LeftTop,
    /// Extends left and down from the anchor
    RightTop,
    /// Extends left and up from the anchor
    RightBottom,
}

impl CornerDir {
    /// Multipliers mapping (width, height) to the offset of the space's
    /// top-left corner relative to the anchor.
    pub fn span_mul(self) -> (f32, f32) {
        match self {
            CornerDir::LeftBottom => (0.0, -1.0),
            CornerDir::LeftTop => (0.0, 0.0),
            CornerDir::RightTop => (-1.0, 0.0),
            CornerDir::RightBottom => (-1.0, -1.0),
        }
    }

    /// Multipliers for shifting the anchor of leftover child spaces after a
    /// label consumed part of this space.
    pub fn child_mul(self) -> (f32, f32) {
        match self {
            CornerDir::LeftBottom => (1.0, -1.0),
            CornerDir::LeftTop => (1.0, 1.0),
            CornerDir::RightTop => (-1.0, 1.0),
            CornerDir::RightBottom => (-1.0, -1.0),
        }
    }
}

/// A free rectangular region available for placing a label,
/// anchored at a point and extending in the direction of its [`CornerDir`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    pub corner: CornerDir,
    pub anchor: Point,
    pub width: f32,
    pub height: f32,
}

impl Space {
    pub fn new(corner: CornerDir, anchor: Point, width: f32, height: f32) -> Self {
        Space {
            corner,
            anchor,
            width,
            height,
        }
    }

    /// The actual rectangle covered by this space.
    /// `None` if the extent is non-positive.
    pub fn rect(&self) -> Option<Rect> {
        let (x_mul, y_mul) = self.corner.span_mul();
        let top_left = Point(
            self.anchor.x() + x_mul * self.width,
            self.anchor.y() + y_mul * self.height,
        );
        Rect::from_corner_and_size(top_left, self.width, self.height).ok()
    }

    /// True if an extent of `width` x `height` fits in this space.
    pub fn fits(&self, width: f32, height: f32) -> bool {
        width <= self.width && height <= self.height
    }
}
