use crate::entities::{Canvas, Layout, MeasuredLabel, Placement, Rotation};
use crate::geometry::primitives::{Point, Rect};
use crate::place::{PlaceOptions, PlacementStrategy};
use crate::spaces::{CornerDir, Space, SpaceTracker};
use crate::util::assertions;
use log::debug;
use rand::Rng;
use rand::prelude::SmallRng;

/// Corner-space placement: the classic word-cloud heuristic.
///
/// The heaviest label is placed at the canvas center and the surrounding area
/// is seeded into candidate [`Space`]s. Every further label consumes the first
/// space it fits into (scanning outward from the center) and leaves behind up
/// to two child spaces covering the remainder. Since children never exceed
/// their parent and the seed spaces tile the area around the first label,
/// placements can never overlap.
pub struct CornerSpaceEngine {
    pub opts: PlaceOptions,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl CornerSpaceEngine {
    pub fn new(opts: PlaceOptions, rng: SmallRng) -> Self {
        CornerSpaceEngine { opts, rng }
    }

    /// Seeds the tracker with twelve candidate spaces around the first label:
    /// four quadrant bands reaching the canvas edges, four half-size corner
    /// pockets hugging the label, and four outer diagonal regions. The ring is
    /// a tiling: the seeds touch but never overlap each other or the label.
    fn seed_spaces(tracker: &mut SpaceTracker, canvas: Canvas, first: Rect) {
        let (tw, th) = (canvas.width, canvas.height);
        let (w, h) = (first.width(), first.height());
        let (xoff, yoff) = (first.x_min, first.y_min);

        use CornerDir::*;
        let seeds = [
            // quadrant bands
            Space::new(LeftBottom, Point(xoff + w, yoff + h / 2.0), tw - xoff - w, h),
            Space::new(LeftTop, Point(xoff + w / 2.0, yoff + h), w, th - yoff - h),
            Space::new(RightTop, Point(xoff, yoff + h / 2.0), xoff, h),
            Space::new(RightBottom, Point(xoff + w / 2.0, yoff), w, yoff),
            // corner pockets
            Space::new(LeftTop, Point(xoff + w, yoff + h / 2.0), w / 2.0, h / 2.0),
            Space::new(RightTop, Point(xoff + w / 2.0, yoff + h), w / 2.0, h / 2.0),
            Space::new(RightBottom, Point(xoff, yoff + h / 2.0), w / 2.0, h / 2.0),
            Space::new(LeftBottom, Point(xoff + w / 2.0, yoff), w / 2.0, h / 2.0),
            // outer diagonal regions
            Space::new(
                LeftTop,
                Point(xoff + 1.5 * w, yoff + h / 2.0),
                tw - xoff - 1.5 * w,
                th - yoff - h / 2.0,
            ),
            Space::new(
                RightTop,
                Point(xoff + w / 2.0, yoff + 1.5 * h),
                xoff + w / 2.0,
                th - yoff - 1.5 * h,
            ),
            Space::new(
                RightBottom,
                Point(xoff - w / 2.0, yoff + h / 2.0),
                xoff - w / 2.0,
                yoff + h / 2.0,
            ),
            Space::new(
                LeftBottom,
                Point(xoff + w / 2.0, yoff - h / 2.0),
                xoff + w / 2.0,
                yoff - h / 2.0,
            ),
        ];

        for seed in seeds {
            tracker.insert(seed);
        }
    }

    /// Finds the first space the label fits into and picks an orientation.
    fn find_space(
        &mut self,
        tracker: &SpaceTracker,
        label: &MeasuredLabel,
    ) -> Option<(usize, Rotation)> {
        for (idx, space) in tracker.iter() {
            let fits_h = space.fits(label.width, label.height);
            let fits_v = self.opts.vertical_enabled && space.fits(label.height, label.width);

            let rotation = match (fits_h, fits_v) {
                (false, false) => continue,
                (true, false) => Rotation::Horizontal,
                (false, true) => Rotation::Vertical,
                (true, true) => match self.rng.random_bool(self.opts.vertical_bias as f64) {
                    true => Rotation::Vertical,
                    false => Rotation::Horizontal,
                },
            };
            return Some((idx, rotation));
        }
        None
    }

    /// Consumes `space`, positions the label inside it and pushes the leftover
    /// area back as 0-2 child spaces. Two decompositions of the L-shaped
    /// remainder are equally valid; picking one at random diversifies layouts.
    fn fill_space(
        &mut self,
        tracker: &mut SpaceTracker,
        space: Space,
        label: &MeasuredLabel,
        rotation: Rotation,
    ) -> Placement {
        // post-rotation extent
        let (ew, eh) = match rotation {
            Rotation::Horizontal => (label.width, label.height),
            Rotation::Vertical => (label.height, label.width),
        };

        let (x_mul, y_mul) = space.corner.span_mul();
        let x_min = space.anchor.x() + x_mul * ew;
        let y_min = space.anchor.y() + y_mul * eh;
        let bbox = Rect::try_new(x_min, y_min, x_min + ew, y_min + eh)
            .expect("consumed space has positive extent");

        let (cx_mul, cy_mul) = space.corner.child_mul();
        let side_anchor = Point(space.anchor.x() + cx_mul * ew, space.anchor.y());
        let stack_anchor = Point(space.anchor.x(), space.anchor.y() + cy_mul * eh);

        let (side, stack) = match self.rng.random_bool(0.5) {
            // side strip keeps the label's height, stack strip spans the full width
            true => (
                Space::new(space.corner, side_anchor, space.width - ew, eh),
                Space::new(space.corner, stack_anchor, space.width, space.height - eh),
            ),
            // side strip spans the full height, stack strip keeps the label's width
            false => (
                Space::new(space.corner, side_anchor, space.width - ew, space.height),
                Space::new(space.corner, stack_anchor, ew, space.height - eh),
            ),
        };
        tracker.insert(side);
        tracker.insert(stack);

        Placement {
            label_id: label.label_id,
            bbox,
            rotation,
            font_size: label.font_size,
        }
    }
}

impl PlacementStrategy for CornerSpaceEngine {
    fn place(&mut self, labels: &[MeasuredLabel], canvas: Canvas) -> Layout {
        let mut layout = Layout::new(canvas);
        let Some(first) = labels.first() else {
            return layout;
        };

        // the first label goes dead center, or the attempt is lost
        if first.width > canvas.width || first.height > canvas.height {
            debug!(
                "[CORNER] first label {} ({}x{}) exceeds the canvas",
                first.label_id, first.width, first.height
            );
            return layout;
        }
        let center = canvas.center();
        let first_bbox = Rect::try_new(
            center.x() - first.width / 2.0,
            center.y() - first.height / 2.0,
            center.x() + first.width / 2.0,
            center.y() + first.height / 2.0,
        )
        .expect("measured labels have positive extent");

        layout.place(Placement {
            label_id: first.label_id,
            bbox: first_bbox,
            rotation: Rotation::Horizontal,
            font_size: first.font_size,
        });

        let mut tracker = SpaceTracker::new(canvas);
        Self::seed_spaces(&mut tracker, canvas, first_bbox);

        for label in &labels[1..] {
            match self.find_space(&tracker, label) {
                Some((idx, rotation)) => {
                    let space = tracker.consume(idx);
                    let placement = self.fill_space(&mut tracker, space, label, rotation);
                    debug!(
                        "[CORNER] placed label {} at ({:.1}, {:.1}) {:?}",
                        label.label_id, placement.bbox.x_min, placement.bbox.y_min, rotation
                    );
                    layout.place(placement);
                }
                None => {
                    // no fitting space, end the attempt
                    debug!(
                        "[CORNER] no space fits label {} ({:.1}x{:.1}), attempt failed",
                        label.label_id, label.width, label.height
                    );
                    break;
                }
            }
        }

        debug_assert!(assertions::placements_within_canvas(&layout));
        debug_assert!(assertions::placements_disjoint(&layout));

        layout
    }
}
