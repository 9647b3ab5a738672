mod geo_traits;

/// Geometric primitives
pub mod primitives;

#[doc(inline)]
pub use geo_traits::CollidesWith;
#[doc(inline)]
pub use geo_traits::DistanceTo;
