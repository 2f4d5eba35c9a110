//! SAT narrow phase and positional response for soft polygons.
//!
//! Candidate axes are the normals of both bodies' perimeter edges. The axis
//! with the least penetration becomes the contact normal; the body owning
//! that edge receives the edge side of the response, the other body
//! contributes its deepest point-mass.

use crate::math::Vec2;

use super::{Body, BodyId, Constraint, PointMass};

/// Result of a positive SAT test.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Unit normal pointing from the edge body toward the vertex body
    pub axis: Vec2,
    /// Penetration along `axis`
    pub depth: f32,
    /// Constraint index of the contact edge
    pub edge: usize,
    /// Point-mass index of the penetrating vertex
    pub vertex: usize,
    pub edge_body: BodyId,
    pub vertex_body: BodyId,
}

/// Separating-axis test between bodies `i0` and `i1`.
///
/// Bounding boxes must be current. Returns `None` when a separating axis
/// exists (or when either body has no perimeter edges).
pub fn sat(
    bodies: &[Body],
    i0: BodyId,
    i1: BodyId,
    vertices: &[PointMass],
    constraints: &[Constraint],
) -> Option<Contact> {
    let (mut b0, mut b1) = (&bodies[i0], &bodies[i1]);

    // Broad phase: boxes must overlap on both axes
    let overlap_x = (b1.center.x - b0.center.x).abs() < b1.half_extents.x + b0.half_extents.x;
    let overlap_y = (b1.center.y - b0.center.y).abs() < b1.half_extents.y + b0.half_extents.y;
    if !(overlap_x && overlap_y) {
        return None;
    }

    let mut min_distance = f32::MAX;
    let mut axis = Vec2::zero();
    let mut test_axis = Vec2::zero();
    let mut contact_edge = None;

    for &e in b0.edges.iter().chain(b1.edges.iter()) {
        let c = &constraints[e];
        test_axis.edge_normal(&vertices[c.v0].position, &vertices[c.v1].position);
        let a = b0.project_axis(vertices, &test_axis);
        let b = b1.project_axis(vertices, &test_axis);
        let dist = if a.min < b.min { b.min - a.max } else { a.min - b.max };
        if dist > 0.0 {
            return None;
        }
        if dist.abs() < min_distance {
            min_distance = dist.abs();
            axis.copy(&test_axis);
            contact_edge = Some(e);
        }
    }

    let edge = contact_edge?;
    let (mut vertex_body, mut edge_body) = (i0, i1);
    if constraints[edge].body != i1 {
        std::mem::swap(&mut b0, &mut b1);
        std::mem::swap(&mut vertex_body, &mut edge_body);
    }

    let mut to_vertex_body = Vec2::zero();
    if to_vertex_body.sub(&b0.center, &b1.center).dot(&axis) < 0.0 {
        axis.neg();
    }

    let mut line = Vec2::zero();
    let mut smallest = f32::MAX;
    let mut vertex = b0.vertices.start;
    for i in b0.vertices.clone() {
        let d = axis.dot(line.sub(&vertices[i].position, &b1.center));
        if d < smallest {
            smallest = d;
            vertex = i;
        }
    }

    Some(Contact {
        axis,
        depth: min_distance,
        edge,
        vertex,
        edge_body,
        vertex_body,
    })
}

impl Contact {
    /// Barycentric position of the corrected vertex along the contact edge,
    /// measured on the edge's dominant axis.
    pub fn edge_parameter(&self, vertices: &[PointMass], constraints: &[Constraint]) -> f32 {
        let c = &constraints[self.edge];
        let p0 = vertices[c.v0].position;
        let p1 = vertices[c.v1].position;
        let vp = vertices[self.vertex].position;
        let rs = self.axis * self.depth;
        if (p0.x - p1.x).abs() > (p0.y - p1.y).abs() {
            (vp.x - rs.x - p0.x) / (p1.x - p0.x)
        } else {
            (vp.y - rs.y - p0.y) / (p1.y - p0.y)
        }
    }

    /// Push the pair apart and apply tangential friction.
    ///
    /// The correction is split by mass (the heavier body moves less) and,
    /// on the edge side, by how close the contact is to each endpoint.
    /// Friction only touches previous positions, which is how a Verlet
    /// integrator sees a velocity change.
    pub fn resolve(
        &self,
        bodies: &[Body],
        vertices: &mut [PointMass],
        constraints: &[Constraint],
        friction: f32,
    ) {
        let c = &constraints[self.edge];
        let (e0, e1) = (c.v0, c.v1);
        let rs = self.axis * self.depth;

        let t = self.edge_parameter(vertices, constraints);
        let lambda = 1.0 / (t * t + (1.0 - t) * (1.0 - t));

        let m0 = bodies[self.vertex_body].mass;
        let m1 = bodies[self.edge_body].mass;
        let tm = m0 + m1;
        let m0_tm = m0 / tm;
        let m1_tm = m1 / tm;

        let mut p0 = vertices[e0].position;
        let mut p1 = vertices[e1].position;
        let mut vp = vertices[self.vertex].position;
        let mut o0 = vertices[e0].old_position;
        let mut o1 = vertices[e1].old_position;
        let mut vo = vertices[self.vertex].old_position;

        p0 = p0 - rs * ((1.0 - t) * lambda * m0_tm);
        p1 = p1 - rs * (t * lambda * m0_tm);
        vp = vp + rs * m1_tm;

        let rel_vel = Vec2::new(
            vp.x - vo.x - (p0.x + p1.x - o0.x - o1.x) * 0.5,
            vp.y - vo.y - (p0.y + p1.y - o0.y - o1.y) * 0.5,
        );
        let mut tangent = Vec2::zero();
        tangent.perp(&self.axis);
        let rt = tangent * rel_vel.dot(&tangent);

        vo = vo + rt * (friction * m1_tm);
        o0 = o0 - rt * ((1.0 - t) * friction * lambda * m0_tm);
        o1 = o1 - rt * (t * friction * lambda * m0_tm);

        vertices[e0].position = p0;
        vertices[e1].position = p1;
        vertices[self.vertex].position = vp;
        vertices[e0].old_position = o0;
        vertices[e1].old_position = o1;
        vertices[self.vertex].old_position = vo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scene {
        bodies: Vec<Body>,
        vertices: Vec<PointMass>,
        constraints: Vec<Constraint>,
    }

    impl Scene {
        fn new() -> Self {
            Self { bodies: Vec::new(), vertices: Vec::new(), constraints: Vec::new() }
        }

        fn polygon(&mut self, pts: &[(f32, f32)], mass: f32) -> BodyId {
            let id = self.bodies.len();
            let start = self.vertices.len();
            for &(x, y) in pts {
                self.vertices.push(PointMass::new(x, y, id));
            }
            let mut edges = Vec::new();
            for i in 0..pts.len() {
                edges.push(self.constraints.len());
                let c = Constraint::new(&self.vertices, start + i, start + (i + 1) % pts.len(), id, true);
                self.constraints.push(c);
            }
            let mut body = Body::new(id, start..self.vertices.len(), edges, mass, String::new());
            body.bounding_box(&self.vertices);
            self.bodies.push(body);
            id
        }

        fn square(&mut self, x: f32, y: f32, size: f32, mass: f32) -> BodyId {
            self.polygon(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)], mass)
        }

        fn sat(&self, a: BodyId, b: BodyId) -> Option<Contact> {
            sat(&self.bodies, a, b, &self.vertices, &self.constraints)
        }
    }

    #[test]
    fn far_apart_bodies_fail_broad_phase() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 10.0, 1.0);
        let b = s.square(50.0, 0.0, 10.0, 1.0);
        assert!(s.sat(a, b).is_none());
    }

    #[test]
    fn diagonal_edge_separates_overlapping_boxes() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 18.0, 1.0);
        let b = s.polygon(&[(25.0, 15.0), (35.0, 25.0), (25.0, 35.0), (15.0, 25.0)], 1.0);
        assert!(s.sat(a, b).is_none());
    }

    #[test]
    fn least_penetration_axis_and_deepest_vertex() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 20.0, 1.0);
        let b = s.square(15.0, 5.0, 10.0, 1.0);
        let contact = s.sat(a, b).expect("overlapping squares collide");

        // A's right edge has the shallowest overlap, so A is the edge body
        assert_eq!(contact.edge_body, a);
        assert_eq!(contact.vertex_body, b);
        assert_eq!(contact.edge, 1);
        assert!((contact.depth - 5.0).abs() < 1e-5);
        // Axis points from A toward B
        assert_eq!(contact.axis, Vec2::new(1.0, 0.0));
        assert_eq!(contact.vertex, 4);
    }

    #[test]
    fn equal_masses_move_contact_points_equally_and_oppositely() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 20.0, 3.0);
        let b = s.square(15.0, 5.0, 10.0, 3.0);
        let contact = s.sat(a, b).unwrap();

        let c = &s.constraints[contact.edge];
        let (e0, e1) = (c.v0, c.v1);
        let before_v = s.vertices[contact.vertex].position;
        let before_0 = s.vertices[e0].position;
        let before_1 = s.vertices[e1].position;
        let t = contact.edge_parameter(&s.vertices, &s.constraints);

        contact.resolve(&s.bodies, &mut s.vertices, &s.constraints, 0.2);

        let dv = s.vertices[contact.vertex].position - before_v;
        let d0 = s.vertices[e0].position - before_0;
        let d1 = s.vertices[e1].position - before_1;
        let de = d0 * (1.0 - t) + d1 * t;

        assert!((dv.x - 2.5).abs() < 1e-4, "dv = {:?}", dv);
        assert!((de.x + 2.5).abs() < 1e-4, "de = {:?}", de);
        assert!(dv.y.abs() < 1e-5 && de.y.abs() < 1e-5);
    }

    #[test]
    fn resolution_separates_on_the_contact_axis() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 20.0, 1.0);
        let b = s.square(15.0, 5.0, 10.0, 1.0);
        let contact = s.sat(a, b).unwrap();
        contact.resolve(&s.bodies, &mut s.vertices, &s.constraints, 0.2);

        // The contact vertex now sits exactly on the displaced edge line
        let c = &s.constraints[contact.edge];
        let t = 0.25;
        let edge_x = s.vertices[c.v0].position.x * (1.0 - t) + s.vertices[c.v1].position.x * t;
        assert!((s.vertices[contact.vertex].position.x - edge_x).abs() < 1e-4);
    }

    #[test]
    fn friction_damps_sliding_contact() {
        let mut s = Scene::new();
        let a = s.square(0.0, 0.0, 20.0, 1.0);
        let b = s.square(15.0, 5.0, 10.0, 1.0);
        // B slides downward along A's right edge
        for i in s.bodies[b].vertices.clone() {
            s.vertices[i].old_position.y -= 2.0;
        }
        let contact = s.sat(a, b).unwrap();
        let v = contact.vertex;
        let before = s.vertices[v].velocity().y;
        contact.resolve(&s.bodies, &mut s.vertices, &s.constraints, 0.2);
        let after = s.vertices[v].velocity().y;
        assert!(after < before, "before = {}, after = {}", before, after);
        assert!(after > 0.0);
    }
}
