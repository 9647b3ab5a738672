use crate::io::svg_util::SvgDrawOptions;
use anyhow::Result;
use cumulus::entities::{Canvas, FontRange};
use cumulus::place::PlaceOptions;
use cumulus::search::CloudConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the CSF optimizer
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CSFConfig {
    /// Canvas dimensions in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Font size range mapped onto the label weights
    pub font_range: FontRange,
    pub font_family: String,
    /// Spacing margin around every label
    pub padding: f32,
    /// Allow labels to be rotated 270°
    pub vertical_enabled: bool,
    /// Probability of the vertical orientation when both fit
    pub vertical_bias: f32,
    /// Font scale decrement between placement attempts
    pub scale_step: f32,
    /// The scale search gives up below this
    pub min_scale: f32,
    /// Which placement strategy to run
    pub strategy: StrategyKind,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    CornerSpace,
    Spiral,
    GoldenAngle,
}

impl Default for CSFConfig {
    fn default() -> Self {
        Self {
            canvas_width: 900.0,
            canvas_height: 600.0,
            font_range: FontRange {
                min: 12.0,
                max: 84.0,
            },
            font_family: "Impact".to_string(),
            padding: 5.0,
            vertical_enabled: true,
            vertical_bias: 0.375,
            scale_step: 0.1,
            min_scale: 0.2,
            strategy: StrategyKind::CornerSpace,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl CSFConfig {
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    pub fn cloud_config(&self) -> CloudConfig {
        CloudConfig {
            font_range: self.font_range,
            font_family: self.font_family.clone(),
            padding: self.padding,
            scale_step: self.scale_step,
            min_scale: self.min_scale,
        }
    }

    pub fn place_options(&self) -> PlaceOptions {
        PlaceOptions {
            vertical_enabled: self.vertical_enabled,
            vertical_bias: self.vertical_bias,
        }
    }
}
