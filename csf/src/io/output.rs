use crate::config::CSFConfig;
use crate::io::ext_repr::{ExtInstance, ExtWord};
use crate::io::svg_util;
use cumulus::entities::CloudInstance;
use cumulus::search::CloudSolution;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct CloudOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CSFConfig,
}

/// External (serializable) representation of a solved layout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Font scale the layout was achieved at
    pub scale: f32,
    /// Whether every word was placed
    pub complete: bool,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub placements: Vec<ExtPlacement>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub word: String,
    pub weight: f32,
    /// Top-left corner of the bounding box
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_deg: u32,
    pub font_size: f32,
    pub color: String,
}

/// Exports a solution out of the library.
/// Placements are listed in word input order; unplaced words are absent.
pub fn export(instance: &CloudInstance, solution: &CloudSolution) -> ExtSolution {
    let mut placed: Vec<_> = solution.layout.placements.values().collect();
    placed.sort_by_key(|p| p.label_id);

    let placements: Vec<ExtPlacement> = placed
        .into_iter()
        .map(|p| {
            let label = instance.label(p.label_id);
            ExtPlacement {
                word: label.text.clone(),
                weight: label.weight,
                x: p.bbox.x_min,
                y: p.bbox.y_min,
                width: p.bbox.width(),
                height: p.bbox.height(),
                rotation_deg: p.rotation.degrees(),
                font_size: p.font_size,
                color: svg_util::word_color(&label.text).to_string(),
            }
        })
        .collect();

    ExtSolution {
        scale: solution.scale,
        complete: solution.complete,
        canvas_width: solution.layout.canvas.width,
        canvas_height: solution.layout.canvas.height,
        placements,
    }
}

/// Explicit per-word colors from the input override the palette.
pub fn apply_word_colors(solution: &mut ExtSolution, words: &[ExtWord]) {
    for p in &mut solution.placements {
        if let Some(color) = words
            .iter()
            .find(|w| w.word == p.word)
            .and_then(|w| w.color.as_deref())
        {
            p.color = color.to_string();
        }
    }
}
