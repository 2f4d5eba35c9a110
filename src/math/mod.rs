//! Math primitives shared by the physics layers.

mod vec2;

pub use vec2::Vec2;
