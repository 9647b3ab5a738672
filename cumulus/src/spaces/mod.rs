mod space;
mod tracker;

#[doc(inline)]
pub use space::CornerDir;
#[doc(inline)]
pub use space::Space;
#[doc(inline)]
pub use tracker::SpaceTracker;
