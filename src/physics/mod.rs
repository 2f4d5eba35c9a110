//! Soft-body physics: point-masses, distance constraints, polygon bodies and
//! SAT collision.
//!
//! Everything here works on the world's flat `PointMass` / `Constraint`
//! lists through indices; bodies only remember which slice they own.

mod body;
mod collision;
mod constraint;
mod point_mass;

pub use body::{Body, Projection};
pub use collision::{sat, Contact};
pub use constraint::Constraint;
pub use point_mass::{IntegrateParams, PointMass, MIN_WALL_PADDING};

/// Index of a body in the world's body list.
pub type BodyId = usize;
