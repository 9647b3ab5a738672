mod corner_space;
mod golden;
mod scatter;
mod spiral;

#[doc(inline)]
pub use corner_space::CornerSpaceEngine;
#[doc(inline)]
pub use golden::GoldenAngleEngine;
#[doc(inline)]
pub use spiral::SpiralEngine;

use crate::entities::{Canvas, Layout, MeasuredLabel};
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Places measured labels one at a time onto the canvas.
///
/// `labels` must be sorted descending by weight; the first label anchors the
/// layout at the canvas center. Strategies stop at the first label that cannot
/// be placed: partial layouts are never grown further within one attempt, the
/// scale-search loop retries at a smaller scale instead.
pub trait PlacementStrategy {
    fn place(&mut self, labels: &[MeasuredLabel], canvas: Canvas) -> Layout;
}

/// Tunables shared by all placement strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceOptions {
    /// Allow labels to be rotated 270° (reading bottom-to-top)
    pub vertical_enabled: bool,
    /// Probability of picking the vertical orientation when both fit
    pub vertical_bias: f32,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        PlaceOptions {
            vertical_enabled: true,
            vertical_bias: 0.375,
        }
    }
}

impl PlaceOptions {
    /// The bias is drawn as a probability, out-of-range values are rejected here.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.vertical_bias),
            "vertical bias must lie in [0, 1], got {}",
            self.vertical_bias
        );
        Ok(())
    }
}
