//! Helpers shared by the point-scatter strategies (spiral, golden-angle).
//! Unlike the corner-space engine these have no free-space bookkeeping:
//! every candidate position is validated against all placed labels directly.

use crate::entities::{Layout, MeasuredLabel, Placement, Rotation};
use crate::geometry::primitives::{Point, Rect};
use crate::place::PlaceOptions;
use rand::Rng;
use rand::prelude::SmallRng;

/// Orientation for the next label, drawn up front.
pub(super) fn draw_rotation(rng: &mut SmallRng, opts: &PlaceOptions) -> Rotation {
    match opts.vertical_enabled && rng.random_bool(opts.vertical_bias as f64) {
        true => Rotation::Vertical,
        false => Rotation::Horizontal,
    }
}

/// Post-rotation extent of a measured label.
pub(super) fn rotated_extent(label: &MeasuredLabel, rotation: Rotation) -> (f32, f32) {
    match rotation {
        Rotation::Horizontal => (label.width, label.height),
        Rotation::Vertical => (label.height, label.width),
    }
}

/// A bounding box of `ew` x `eh` centered at `center`, accepted iff it lies
/// fully on the canvas and its interior is disjoint from every placed label.
pub(super) fn accept_candidate(
    layout: &Layout,
    center: Point,
    ew: f32,
    eh: f32,
) -> Option<Rect> {
    let bbox = Rect::try_new(
        center.x() - ew / 2.0,
        center.y() - eh / 2.0,
        center.x() + ew / 2.0,
        center.y() + eh / 2.0,
    )
    .ok()?;

    if !layout.canvas.bbox().contains(&bbox) {
        return None;
    }
    let disjoint = layout
        .placements
        .values()
        .all(|p| Rect::intersection(p.bbox, bbox).is_none());
    disjoint.then_some(bbox)
}

pub(super) fn placement(label: &MeasuredLabel, bbox: Rect, rotation: Rotation) -> Placement {
    Placement {
        label_id: label.label_id,
        bbox,
        rotation,
        font_size: label.font_size,
    }
}
