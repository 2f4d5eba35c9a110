use std::ops::Range;

use crate::math::Vec2;

use super::{BodyId, Constraint, PointMass};

/// Scalar extent of a body along an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

/// Closed polygon made of point-masses and constraints.
///
/// The body does not store its point-masses or constraints itself; it keeps
/// the range/indices of the ones it owns inside the world's flat lists.
pub struct Body {
    pub id: BodyId,
    /// Contiguous slice of the world's point-mass list
    pub vertices: Range<usize>,
    /// Perimeter constraint indices, in winding order
    pub edges: Vec<usize>,

    // === Bounding Box (AABB) ===
    pub center: Vec2,
    pub half_extents: Vec2,

    /// Uniform mass (weights collision response only)
    pub mass: f32,
    /// Fill color (rendering only)
    pub color: String,
}

impl Body {
    pub fn new(id: BodyId, vertices: Range<usize>, edges: Vec<usize>, mass: f32, color: String) -> Self {
        Self {
            id,
            vertices,
            edges,
            center: Vec2::zero(),
            half_extents: Vec2::zero(),
            mass,
            color,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Recompute center and half extents from the current positions.
    pub fn bounding_box(&mut self, vertices: &[PointMass]) {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for v in &vertices[self.vertices.clone()] {
            let p = v.position;
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }
        self.center.set((min_x + max_x) * 0.5, (min_y + max_y) * 0.5);
        self.half_extents.set((max_x - min_x) * 0.5, (max_y - min_y) * 0.5);
    }

    /// Min/max of every point-mass position dotted with `axis`.
    pub fn project_axis(&self, vertices: &[PointMass], axis: &Vec2) -> Projection {
        let slice = &vertices[self.vertices.clone()];
        let first = slice[0].position.dot(axis);
        let mut proj = Projection { min: first, max: first };
        for v in &slice[1..] {
            let d = v.position.dot(axis);
            if d > proj.max {
                proj.max = d;
            }
            if d < proj.min {
                proj.min = d;
            }
        }
        proj
    }

    /// Outline points in winding order (start point of every perimeter edge).
    pub fn outline<'a>(
        &'a self,
        vertices: &'a [PointMass],
        constraints: &'a [Constraint],
    ) -> impl Iterator<Item = Vec2> + 'a {
        self.edges
            .iter()
            .map(move |&e| vertices[constraints[e].v0].position)
    }

    /// Even-odd test of `p` against the filled outline.
    pub fn contains_point(&self, vertices: &[PointMass], constraints: &[Constraint], p: &Vec2) -> bool {
        let mut inside = false;
        for &e in &self.edges {
            let c = &constraints[e];
            let a = vertices[c.v0].position;
            let b = vertices[c.v1].position;
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Index of the body's point-mass closest to `p`.
    pub fn nearest_vertex(&self, vertices: &[PointMass], p: &Vec2) -> Option<usize> {
        let mut best = None;
        let mut best_dist = f32::MAX;
        for i in self.vertices.clone() {
            let d = vertices[i].position.square_dist(p);
            if d < best_dist {
                best_dist = d;
                best = Some(i);
            }
        }
        best
    }

    /// Mean of the body's point-mass positions.
    pub fn centroid(&self, vertices: &[PointMass]) -> Vec2 {
        let slice = &vertices[self.vertices.clone()];
        let mut sum = Vec2::zero();
        for v in slice {
            sum = sum + v.position;
        }
        sum * (1.0 / slice.len() as f32)
    }
}
