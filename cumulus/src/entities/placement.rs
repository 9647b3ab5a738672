use crate::geometry::primitives::Rect;

/// Orientation of a placed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left-to-right reading direction
    Horizontal,
    /// Rotated 270°, reading bottom-to-top
    Vertical,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Horizontal => 0,
            Rotation::Vertical => 270,
        }
    }
}

/// A label positioned on the canvas.
/// `bbox` is the post-rotation bounding box: width and height are swapped
/// with respect to the measured label when `rotation` is vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub label_id: usize,
    pub bbox: Rect,
    pub rotation: Rotation,
    pub font_size: f32,
}
