use crate::entities::{CloudInstance, FontRange, FontScale, Layout, MeasuredLabel};
use crate::metrics::{CachedMeasurer, TextMeasurer};
use crate::place::PlacementStrategy;
use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;
use log::info;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Parameters for one [`search`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    pub font_range: FontRange,
    pub font_family: String,
    /// Fixed spacing margin added around every label, in pixels
    pub padding: f32,
    /// Amount subtracted from the font scale between attempts
    pub scale_step: f32,
    /// The search gives up once the scale drops below this
    pub min_scale: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        CloudConfig {
            font_range: FontRange {
                min: 12.0,
                max: 84.0,
            },
            font_family: "Impact".to_string(),
            padding: 5.0,
            scale_step: 0.1,
            min_scale: 0.2,
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<()> {
        FontRange::new(self.font_range.min, self.font_range.max)?;
        ensure!(
            self.padding >= 0.0,
            "padding must be non-negative, got {}",
            self.padding
        );
        ensure!(
            self.scale_step > 0.0,
            "scale step must be positive, got {}",
            self.scale_step
        );
        ensure!(
            self.min_scale > 0.0 && self.min_scale <= 1.0,
            "min scale must lie in (0, 1], got {}",
            self.min_scale
        );
        // a zero minimum font with zero padding measures labels at zero extent
        ensure!(
            self.font_range.min > 0.0 || self.padding > 0.0,
            "either the minimum font size or the padding must be positive"
        );
        Ok(())
    }
}

/// The outcome of a scale search: the best achieved layout, the font scale it
/// was produced at and whether every label was placed.
///
/// An incomplete solution is not a fault: callers decide whether to render the
/// placed subset, retry with a larger canvas, or show an empty state.
#[derive(Debug, Clone)]
pub struct CloudSolution {
    pub layout: Layout,
    pub scale: f32,
    pub complete: bool,
}

/// Label ids in placement order: descending by weight, ties by id.
pub fn label_placement_order(instance: &CloudInstance) -> Vec<usize> {
    (0..instance.n_labels())
        .sorted_by_cached_key(|&id| {
            let weight = instance.label(id).weight;
            Reverse(NotNan::new(weight).expect("label weight is NaN"))
        })
        .collect_vec()
}

/// Guards the loop condition against accumulated float drift in the scale decrements.
const SCALE_EPS: f32 = 1e-4;

/// Runs placement attempts at decreasing font scales until a complete layout
/// is found or `min_scale` is reached.
///
/// Starts at scale 1.0; each attempt derives the shrunk font range, re-measures
/// every label through `measurer` (memoized per search call) and invokes
/// `strategy`. The first complete layout wins: the largest successful scale is
/// never traded for a "better" layout at a smaller one. If no attempt
/// succeeds, the last attempted layout is returned with `complete == false`.
pub fn search(
    instance: &CloudInstance,
    config: &CloudConfig,
    measurer: &impl TextMeasurer,
    strategy: &mut impl PlacementStrategy,
) -> Result<CloudSolution> {
    config.validate()?;

    let cached = CachedMeasurer::new(measurer);
    let order = label_placement_order(instance);

    let mut last_attempt: Option<CloudSolution> = None;
    let mut scale = 1.0;

    while scale >= config.min_scale - SCALE_EPS {
        let range = config.font_range.scaled(scale);
        let font_scale = FontScale::new(&instance.labels, range);

        let measured: Vec<MeasuredLabel> = order
            .iter()
            .map(|&id| {
                let label = instance.label(id);
                let font_size = font_scale.size_for(label.weight);
                let extent = cached.measure(&label.text, font_size, &config.font_family)?;
                Ok(MeasuredLabel {
                    label_id: id,
                    font_size,
                    width: extent.width + 2.0 * config.padding,
                    height: extent.height + 2.0 * config.padding,
                })
            })
            .collect::<Result<_>>()?;

        let layout = strategy.place(&measured, instance.canvas);
        let placed = layout.placements.len();
        info!(
            "[SEARCH] scale {:.2}: placed {}/{} labels",
            scale,
            placed,
            instance.n_labels()
        );

        if layout.is_complete(instance.n_labels()) {
            return Ok(CloudSolution {
                layout,
                scale,
                complete: true,
            });
        }

        last_attempt = Some(CloudSolution {
            layout,
            scale,
            complete: false,
        });
        scale -= config.scale_step;
    }

    info!(
        "[SEARCH] exhausted at min scale {:.2} without a complete layout",
        config.min_scale
    );
    // the search ran at least one attempt (min_scale <= 1.0), surface the last one
    Ok(last_attempt.expect("at least one attempt was made"))
}
