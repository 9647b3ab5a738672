use anyhow::Result;
use cumulus::entities::{Canvas, CloudInstance, Label};
use serde::{Deserialize, Serialize};

/// External (serializable) representation of a word cloud instance.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    pub words: Vec<ExtWord>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtWord {
    pub word: String,
    pub weight: f32,
    /// Explicit render color, overrides the palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Imports an instance into the library.
/// Labels are assigned consecutive ids in input order.
pub fn import(ext_instance: &ExtInstance, canvas: Canvas) -> Result<CloudInstance> {
    let labels = ext_instance
        .words
        .iter()
        .enumerate()
        .map(|(id, w)| Label::new(id, w.word.clone(), w.weight))
        .collect::<Result<Vec<Label>>>()?;

    CloudInstance::new(labels, canvas)
}
