use crate::entities::Label;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Font size assigned when there are no labels to derive a scale from.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Inclusive font size range `[min, max]` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontRange {
    pub min: f32,
    pub max: f32,
}

impl FontRange {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        ensure!(
            min.is_finite() && max.is_finite() && min >= 0.0 && min <= max,
            "invalid font range: [{min}, {max}]"
        );
        Ok(FontRange { min, max })
    }

    /// The same range shrunk by `scale`, used by the scale-search loop.
    pub fn scaled(&self, scale: f32) -> FontRange {
        FontRange {
            min: self.min * scale,
            max: self.max * scale,
        }
    }
}

/// Linear mapping from label weight to font size:
/// the minimum weight maps to `range.min`, the maximum weight to `range.max`.
#[derive(Debug, Clone, Copy)]
pub struct FontScale {
    range: FontRange,
    min_weight: f32,
    spread: f32,
}

impl FontScale {
    pub fn new(labels: &[Label], range: FontRange) -> Self {
        if labels.is_empty() {
            return FontScale::constant(DEFAULT_FONT_SIZE);
        }
        let min_weight = labels.iter().map(|l| l.weight).fold(f32::INFINITY, f32::min);
        let max_weight = labels
            .iter()
            .map(|l| l.weight)
            .fold(f32::NEG_INFINITY, f32::max);

        // equal weights would make the spread zero, treat it as one
        let spread = match max_weight - min_weight {
            0.0 => 1.0,
            s => s,
        };

        FontScale {
            range,
            min_weight,
            spread,
        }
    }

    /// A scale mapping every weight to the same font size.
    pub fn constant(font_size: f32) -> Self {
        FontScale {
            range: FontRange {
                min: font_size,
                max: font_size,
            },
            min_weight: 0.0,
            spread: 1.0,
        }
    }

    pub fn size_for(&self, weight: f32) -> f32 {
        let t = (weight - self.min_weight) / self.spread;
        self.range.min + t * (self.range.max - self.range.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(weights: &[f32]) -> Vec<Label> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Label::new(i, format!("w{i}"), w).unwrap())
            .collect()
    }

    #[test]
    fn maps_extreme_weights_to_range_bounds() {
        let scale = FontScale::new(&labels(&[1.0, 4.0, 10.0]), FontRange::new(12.0, 84.0).unwrap());
        assert_eq!(scale.size_for(1.0), 12.0);
        assert_eq!(scale.size_for(10.0), 84.0);
    }

    #[test]
    fn is_monotonic_in_weight() {
        let scale = FontScale::new(&labels(&[2.0, 8.0]), FontRange::new(10.0, 100.0).unwrap());
        let mut prev = f32::NEG_INFINITY;
        for w in [2.0, 3.0, 4.5, 7.0, 8.0] {
            let size = scale.size_for(w);
            assert!(size >= prev);
            prev = size;
        }
    }

    #[test]
    fn equal_weights_map_to_min_font() {
        let scale = FontScale::new(&labels(&[3.0, 3.0, 3.0]), FontRange::new(12.0, 84.0).unwrap());
        assert_eq!(scale.size_for(3.0), 12.0);
    }

    #[test]
    fn empty_label_set_yields_default_size() {
        let scale = FontScale::new(&[], FontRange::new(12.0, 84.0).unwrap());
        assert_eq!(scale.size_for(42.0), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn scaled_range_shrinks_sizes_proportionally() {
        let range = FontRange::new(12.0, 84.0).unwrap();
        let full = FontScale::new(&labels(&[1.0, 10.0]), range);
        let half = FontScale::new(&labels(&[1.0, 10.0]), range.scaled(0.5));
        for w in [1.0, 5.5, 10.0] {
            assert!(half.size_for(w) <= full.size_for(w));
        }
        assert_eq!(half.size_for(10.0), 42.0);
    }
}
