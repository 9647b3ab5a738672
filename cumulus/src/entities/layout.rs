use crate::entities::{Canvas, Placement};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique key for a placed label within a [`Layout`]
    pub struct PLabelKey;
}

/// The set of positioned labels produced by one placement attempt on a fixed canvas.
#[derive(Debug, Clone)]
pub struct Layout {
    pub canvas: Canvas,
    pub placements: SlotMap<PLabelKey, Placement>,
}

impl Layout {
    pub fn new(canvas: Canvas) -> Self {
        Layout {
            canvas,
            placements: SlotMap::with_key(),
        }
    }

    pub fn place(&mut self, placement: Placement) -> PLabelKey {
        self.placements.insert(placement)
    }

    /// A layout is complete iff it contains one placement per input label.
    pub fn is_complete(&self, n_labels: usize) -> bool {
        self.placements.len() == n_labels
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Ratio of the area covered by placed labels to the canvas area.
    pub fn coverage(&self) -> f32 {
        self.placements
            .values()
            .map(|p| p.bbox.area())
            .sum::<f32>()
            / self.canvas.area()
    }

    pub fn placement_of(&self, label_id: usize) -> Option<&Placement> {
        self.placements.values().find(|p| p.label_id == label_id)
    }
}
