use crate::entities::Layout;
use crate::geometry::primitives::Rect;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of produced layouts
//Used in debug_assert!() blocks and tests

/// Intersections thinner than this (in pixels) count as shared edges.
/// Anchors of neighboring spaces are derived through different arithmetic
/// and can disagree by a few ulps at canvas-scale coordinates.
const EDGE_EPS: f32 = 1e-3;

/// True if every placement's post-rotation bounding box lies fully within the canvas.
pub fn placements_within_canvas(layout: &Layout) -> bool {
    let canvas_bbox = layout.canvas.bbox();
    for p in layout.placements.values() {
        if !canvas_bbox.almost_contains(&p.bbox) {
            error!(
                "placement of label {} leaks past canvas bounds: {:?}",
                p.label_id, p.bbox
            );
            return false;
        }
    }
    true
}

/// True if no two placements overlap. Shared edges are allowed:
/// only intersections wider than [`EDGE_EPS`] in both dimensions count as overlap.
pub fn placements_disjoint(layout: &Layout) -> bool {
    for (a, b) in layout.placements.values().tuple_combinations() {
        let overlap = Rect::intersection(a.bbox, b.bbox)
            .is_some_and(|r| r.width() > EDGE_EPS && r.height() > EDGE_EPS);
        if overlap {
            error!(
                "placements of labels {} and {} overlap: {:?} vs {:?}",
                a.label_id, b.label_id, a.bbox, b.bbox
            );
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Canvas, Placement, Rotation};

    fn layout_with(boxes: &[Rect]) -> Layout {
        let mut layout = Layout::new(Canvas::new(900.0, 600.0).unwrap());
        for (id, &bbox) in boxes.iter().enumerate() {
            layout.place(Placement {
                label_id: id,
                bbox,
                rotation: Rotation::Horizontal,
                font_size: 16.0,
            });
        }
        layout
    }

    #[test]
    fn ulp_thin_slivers_count_as_shared_edges() {
        // boundary coordinates differ by one ulp at magnitude ~120
        let upper = Rect::try_new(100.0, 50.0, 300.0, 122.96103).unwrap();
        let lower = Rect::try_new(150.0, 122.96102, 350.0, 200.0).unwrap();
        assert!(placements_disjoint(&layout_with(&[upper, lower])));
    }

    #[test]
    fn touching_edges_are_not_overlap() {
        let left = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
        let right = Rect::try_new(100.0, 0.0, 200.0, 100.0).unwrap();
        assert!(placements_disjoint(&layout_with(&[left, right])));
    }

    #[test]
    fn real_overlap_is_detected() {
        let a = Rect::try_new(0.0, 0.0, 100.0, 100.0).unwrap();
        let b = Rect::try_new(99.0, 50.0, 200.0, 150.0).unwrap();
        assert!(!placements_disjoint(&layout_with(&[a, b])));
    }
}
