use anyhow::Result;
use anyhow::ensure;

/// One weighted word to be rendered in the cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: usize,
    pub text: String,
    /// Relative importance, drives the font size. Strictly positive.
    pub weight: f32,
}

impl Label {
    pub fn new(id: usize, text: String, weight: f32) -> Result<Self> {
        ensure!(!text.is_empty(), "label {id} has empty text");
        ensure!(
            weight.is_finite() && weight > 0.0,
            "label {id} ({text}) has invalid weight: {weight}"
        );
        Ok(Label { id, text, weight })
    }
}

/// [`Label`] with the font size derived from its weight for one scale attempt
/// and its measured bounding box at that size (spacing padding included).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredLabel {
    pub label_id: usize,
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
}
