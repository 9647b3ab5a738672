use crate::entities::Canvas;
use crate::geometry::{CollidesWith, DistanceTo};
use crate::spaces::Space;
use log::trace;

#[derive(Debug, Clone, Copy)]
struct SpaceEntry {
    space: Space,
    /// Euclidean distance from the space's anchor to the canvas center
    dist: f32,
    /// Insertion counter, breaks ties between equidistant spaces
    seq: u64,
}

/// The set of currently available free spaces, ordered ascending by distance
/// of their anchor from the canvas center. Ties are broken by insertion order:
/// a monotonically increasing counter assigned at insertion time, never reused.
///
/// One tracker lives for the duration of a single placement attempt.
#[derive(Debug, Clone)]
pub struct SpaceTracker {
    entries: Vec<SpaceEntry>,
    canvas: Canvas,
    counter: u64,
}

impl SpaceTracker {
    pub fn new(canvas: Canvas) -> Self {
        SpaceTracker {
            entries: Vec::new(),
            canvas,
            counter: 0,
        }
    }

    /// Inserts a space at the position that preserves ascending-distance order.
    /// Degenerate spaces are silently dropped: non-positive extent, anchor
    /// outside the canvas, or a rectangle not fully contained in the canvas.
    /// The containment check guarantees that labels placed into any tracked
    /// space stay within canvas bounds.
    pub fn insert(&mut self, space: Space) {
        if space.width <= 0.0 || space.height <= 0.0 {
            return;
        }
        if !self.canvas.bbox().collides_with(&space.anchor) {
            trace!("[SPACES] dropping space with out-of-canvas anchor: {space:?}");
            return;
        }
        let within_canvas = space
            .rect()
            .is_some_and(|r| self.canvas.bbox().almost_contains(&r));
        if !within_canvas {
            trace!("[SPACES] dropping space leaking past canvas bounds: {space:?}");
            return;
        }

        let dist = space.anchor.distance_to(&self.canvas.center());
        let seq = self.counter;
        self.counter += 1;

        // linear scan; strict comparison puts equal-distance entries after existing ones
        let idx = self
            .entries
            .iter()
            .position(|e| dist < e.dist)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, SpaceEntry { space, dist, seq });

        debug_assert!(
            self.entries
                .windows(2)
                .all(|w| (w[0].dist, w[0].seq) <= (w[1].dist, w[1].seq)),
            "space entries out of (distance, insertion) order"
        );
    }

    /// Removes and returns the space at `index` (in ascending-distance order).
    pub fn consume(&mut self, index: usize) -> Space {
        self.entries.remove(index).space
    }

    /// Lazy, restartable scan over (index, space) pairs in ascending-distance order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Space)> {
        self.entries.iter().enumerate().map(|(i, e)| (i, &e.space))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
