/// Trait for checking if two geometric entities collide (overlap or touch).
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for computing the distance between two geometric entities.
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f32;
    fn sq_distance_to(&self, other: &T) -> f32;
}
