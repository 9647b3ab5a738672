//! `cumulus` is a layout engine for word clouds: it takes a set of weighted
//! text labels and positions them on a bounded canvas without overlap,
//! scaling font sizes by weight and shrinking the whole layout until every
//! label fits.
//!
//! Text measurement is delegated to an injected [`metrics::TextMeasurer`];
//! the engine itself never touches a rendering surface.

/// Entities to model word-cloud layout problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Text measurement abstraction and built-in measurers
pub mod metrics;

/// Placement strategies which fill the canvas one label at a time
pub mod place;

/// The outer scale-search loop driving the placement strategies
pub mod search;

/// Tracking of free rectangular regions during placement
pub mod spaces;

/// Helper functions which do not belong to any specific module
pub mod util;
