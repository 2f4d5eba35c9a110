use crate::math::Vec2;
use crate::physics::{Body, BodyId, Constraint, PointMass};

use super::WorldCore;

/// Geometry of a body before it joins the world.
///
/// Constraint endpoints are indices into `vertices`; the flag marks perimeter
/// edges, which must be listed in winding order and close the loop.
#[derive(Clone, Debug, Default)]
pub struct BodyDef {
    pub vertices: Vec<Vec2>,
    pub constraints: Vec<(usize, usize, bool)>,
    pub mass: f32,
    pub color: String,
}

impl BodyDef {
    /// Four corners clockwise from (x, y), outline plus both diagonals.
    pub fn rectangle(x: f32, y: f32, w: f32, h: f32, mass: f32, color: &str) -> Self {
        Self {
            vertices: vec![
                Vec2::new(x, y),
                Vec2::new(x + w, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            constraints: vec![
                (0, 1, true),
                (1, 2, true),
                (2, 3, true),
                (3, 0, true),
                (0, 2, false),
                (3, 1, false),
            ],
            mass,
            color: color.to_string(),
        }
    }

    /// Regular polygon, outline only (no internal bracing).
    pub fn circle(cx: f32, cy: f32, radius: f32, sides: u32, mass: f32, color: &str) -> Self {
        let sides = if sides == 0 { 10 } else { sides as usize };
        let mut vertices = Vec::with_capacity(sides);
        let mut constraints = Vec::with_capacity(sides);
        for i in 0..sides {
            let a = (i as f32 / sides as f32) * std::f32::consts::TAU;
            vertices.push(Vec2::new(cx + a.cos() * radius, cy + a.sin() * radius));
            constraints.push((i, (i + 1) % sides, true));
        }
        Self {
            vertices,
            constraints,
            mass,
            color: color.to_string(),
        }
    }

    /// Check the construction preconditions the solver relies on.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(format!("mass must be positive, got {}", self.mass));
        }
        if self.vertices.len() < 3 {
            return Err(format!("a body needs at least 3 vertices, got {}", self.vertices.len()));
        }
        if let Some(v) = self.vertices.iter().find(|v| !v.is_finite()) {
            return Err(format!("vertex position is not finite: {:?}", v));
        }

        let n = self.vertices.len();
        let mut edges = Vec::new();
        for &(a, b, edge) in &self.constraints {
            if a >= n || b >= n {
                return Err(format!("constraint ({}, {}) is out of range for {} vertices", a, b, n));
            }
            if self.vertices[a].square_dist(&self.vertices[b]) == 0.0 {
                return Err(format!("constraint ({}, {}) has zero length", a, b));
            }
            if edge {
                edges.push((a, b));
            }
        }

        if edges.len() < 3 {
            return Err("a body needs a closed outline of at least 3 edges".to_string());
        }
        for i in 0..edges.len() {
            let next = edges[(i + 1) % edges.len()];
            if edges[i].1 != next.0 {
                return Err(format!("outline is not closed between edge {} and {}", i, (i + 1) % edges.len()));
            }
        }
        Ok(())
    }
}

pub(super) fn add_body(world: &mut WorldCore, def: BodyDef) -> Result<BodyId, String> {
    def.validate()?;

    let id = world.bodies.len();
    let base = world.vertices.len();
    for v in &def.vertices {
        world.vertices.push(PointMass::new(v.x, v.y, id));
    }

    let mut edges = Vec::new();
    for &(a, b, edge) in &def.constraints {
        let constraint = Constraint::new(&world.vertices, base + a, base + b, id, edge);
        if edge {
            edges.push(world.constraints.len());
        }
        world.constraints.push(constraint);
    }

    let mut body = Body::new(id, base..world.vertices.len(), edges, def.mass, def.color);
    body.bounding_box(&world.vertices);
    world.bodies.push(body);
    Ok(id)
}

pub(super) fn create_rectangle(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    mass: f32,
    color: &str,
) -> Result<BodyId, String> {
    add_body(world, BodyDef::rectangle(x, y, w, h, mass, color))
}

pub(super) fn create_circle(
    world: &mut WorldCore,
    cx: f32,
    cy: f32,
    radius: f32,
    sides: u32,
    mass: f32,
    color: &str,
) -> Result<BodyId, String> {
    add_body(world, BodyDef::circle(cx, cy, radius, sides, mass, color))
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.vertices.clear();
    world.constraints.clear();
    world.drag = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_and_circle_defs_are_valid() {
        assert!(BodyDef::rectangle(0.0, 0.0, 10.0, 5.0, 1.0, "#fff").validate().is_ok());
        let circle = BodyDef::circle(0.0, 0.0, 15.0, 0, 1.0, "#fff");
        assert_eq!(circle.vertices.len(), 10);
        assert!(circle.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let flat = BodyDef::rectangle(0.0, 0.0, 0.0, 10.0, 1.0, "#fff");
        assert!(flat.validate().unwrap_err().contains("zero length"));

        let tiny = BodyDef::circle(0.0, 0.0, 0.0, 6, 1.0, "#fff");
        assert!(tiny.validate().is_err());

        let massless = BodyDef::rectangle(0.0, 0.0, 5.0, 5.0, 0.0, "#fff");
        assert!(massless.validate().is_err());
    }

    #[test]
    fn rejects_open_or_missing_outline() {
        let mut chain = BodyDef::rectangle(0.0, 0.0, 10.0, 10.0, 1.0, "#fff");
        chain.constraints = vec![(0, 1, true), (1, 2, true), (2, 3, true)];
        assert!(chain.validate().unwrap_err().contains("not closed"));

        let mut braced_only = BodyDef::rectangle(0.0, 0.0, 10.0, 10.0, 1.0, "#fff");
        for c in braced_only.constraints.iter_mut() {
            c.2 = false;
        }
        assert!(braced_only.validate().is_err());
    }
}
