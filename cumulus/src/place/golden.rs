use crate::entities::{Canvas, Layout, MeasuredLabel, Rotation};
use crate::geometry::primitives::Point;
use crate::place::scatter;
use crate::place::{PlaceOptions, PlacementStrategy};
use crate::util::assertions;
use log::debug;
use rand::prelude::SmallRng;

/// Golden-angle scatter placement.
///
/// Candidates follow a sunflower pattern: the k-th point sits at angle
/// k * 137.5° and radius proportional to sqrt(k), which spreads candidates
/// evenly over the canvas area. Same accept test as [`super::SpiralEngine`].
pub struct GoldenAngleEngine {
    pub opts: PlaceOptions,
    pub rng: SmallRng,
    /// Candidate positions tried per label before giving up
    pub max_candidates: usize,
}

/// The golden angle in radians (~137.508°).
const GOLDEN_ANGLE: f32 = 2.399_963;

impl GoldenAngleEngine {
    pub fn new(opts: PlaceOptions, rng: SmallRng) -> Self {
        GoldenAngleEngine {
            opts,
            rng,
            max_candidates: 4000,
        }
    }
}

impl PlacementStrategy for GoldenAngleEngine {
    fn place(&mut self, labels: &[MeasuredLabel], canvas: Canvas) -> Layout {
        let mut layout = Layout::new(canvas);
        let center = canvas.center();
        // sqrt(k) radius growth, scaled to reach the canvas edge at the budget
        let spread = f32::min(canvas.width, canvas.height) / 2.0
            / (self.max_candidates as f32).sqrt();

        for (i, label) in labels.iter().enumerate() {
            let rotation = match i {
                0 => Rotation::Horizontal,
                _ => scatter::draw_rotation(&mut self.rng, &self.opts),
            };
            let (ew, eh) = scatter::rotated_extent(label, rotation);

            let mut placed = false;
            for k in 0..self.max_candidates {
                let theta = k as f32 * GOLDEN_ANGLE;
                let r = spread * (k as f32).sqrt();
                let candidate = Point(center.x() + r * theta.cos(), center.y() + r * theta.sin());

                if let Some(bbox) = scatter::accept_candidate(&layout, candidate, ew, eh) {
                    layout.place(scatter::placement(label, bbox, rotation));
                    placed = true;
                    break;
                }
            }

            if !placed {
                debug!(
                    "[GOLDEN] no position for label {} within {} candidates, attempt failed",
                    label.label_id, self.max_candidates
                );
                break;
            }
        }

        debug_assert!(assertions::placements_within_canvas(&layout));
        debug_assert!(assertions::placements_disjoint(&layout));

        layout
    }
}
