use crate::entities::{Canvas, Layout, MeasuredLabel, Rotation};
use crate::geometry::primitives::Point;
use crate::place::scatter;
use crate::place::{PlaceOptions, PlacementStrategy};
use crate::util::assertions;
use log::debug;
use rand::prelude::SmallRng;

/// Archimedean-spiral placement.
///
/// Each label walks a spiral outward from the canvas center and takes the
/// first position where it collides with nothing. Simpler than the
/// corner-space engine and tends to produce rounder clouds, at the cost of a
/// brute-force overlap check per candidate. The step count per label is
/// bounded to guard against pathological inputs.
pub struct SpiralEngine {
    pub opts: PlaceOptions,
    pub rng: SmallRng,
    /// Candidate positions tried per label before giving up
    pub max_steps: usize,
}

/// Angular increment between consecutive candidates, in radians.
const ANGLE_STEP: f32 = 0.35;

impl SpiralEngine {
    pub fn new(opts: PlaceOptions, rng: SmallRng) -> Self {
        SpiralEngine {
            opts,
            rng,
            max_steps: 4000,
        }
    }
}

impl PlacementStrategy for SpiralEngine {
    fn place(&mut self, labels: &[MeasuredLabel], canvas: Canvas) -> Layout {
        let mut layout = Layout::new(canvas);
        let center = canvas.center();
        // radius grows linearly with the angle; sized so the spiral sweeps
        // past the canvas corners within the step budget
        let half_diag = (canvas.width.powi(2) + canvas.height.powi(2)).sqrt() / 2.0;
        let radial_rate = half_diag / (self.max_steps as f32 * ANGLE_STEP);

        for (i, label) in labels.iter().enumerate() {
            // the heaviest label must sit at the center, never rotated away from it
            let rotation = match i {
                0 => Rotation::Horizontal,
                _ => scatter::draw_rotation(&mut self.rng, &self.opts),
            };
            let (ew, eh) = scatter::rotated_extent(label, rotation);

            let mut placed = false;
            for step in 0..self.max_steps {
                let t = step as f32 * ANGLE_STEP;
                let r = radial_rate * t;
                let candidate = Point(center.x() + r * t.cos(), center.y() + r * t.sin());

                if let Some(bbox) = scatter::accept_candidate(&layout, candidate, ew, eh) {
                    layout.place(scatter::placement(label, bbox, rotation));
                    placed = true;
                    break;
                }
            }

            if !placed {
                debug!(
                    "[SPIRAL] no position for label {} within {} steps, attempt failed",
                    label.label_id, self.max_steps
                );
                break;
            }
        }

        debug_assert!(assertions::placements_within_canvas(&layout));
        debug_assert!(assertions::placements_disjoint(&layout));

        layout
    }
}
