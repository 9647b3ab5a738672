use crate::entities::{Canvas, Label};
use anyhow::Result;
use anyhow::ensure;

/// A validated word-cloud layout problem: a set of labels and the canvas to place them on.
#[derive(Debug, Clone)]
pub struct CloudInstance {
    pub labels: Vec<Label>,
    pub canvas: Canvas,
}

impl CloudInstance {
    pub fn new(labels: Vec<Label>, canvas: Canvas) -> Result<Self> {
        ensure!(
            labels.iter().enumerate().all(|(i, l)| l.id == i),
            "all labels should have consecutive IDs starting from 0"
        );
        Ok(CloudInstance { labels, canvas })
    }

    pub fn label(&self, id: usize) -> &Label {
        &self.labels[id]
    }

    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }
}
