use super::{BodyId, PointMass};

/// Soft distance constraint between two point-masses.
///
/// Endpoints are indices into the world's flat point-mass list. The rest
/// length is captured (squared) from the positions at creation and never
/// changes afterwards.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub v0: usize,
    pub v1: usize,
    pub body: BodyId,
    pub rest_sq: f32,
    /// Part of the body's outline (drawn and used as a collision edge)
    pub edge: bool,
}

impl Constraint {
    pub fn new(vertices: &[PointMass], v0: usize, v1: usize, body: BodyId, edge: bool) -> Self {
        let rest_sq = vertices[v0].position.square_dist(&vertices[v1].position);
        Self { v0, v1, body, rest_sq, edge }
    }

    /// One relaxation step.
    ///
    /// Uses the first-order approximation of the square root so no `sqrt` is
    /// needed; repeated calls converge on the rest length. Both endpoints move
    /// by the same amount regardless of mass.
    pub fn solve(&self, vertices: &mut [PointMass]) {
        let p0 = vertices[self.v0].position;
        let p1 = vertices[self.v1].position;
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let delta = self.rest_sq / (dx * dx + dy * dy + self.rest_sq) - 0.5;
        let ddx = dx * delta;
        let ddy = dy * delta;

        let b = &mut vertices[self.v1].position;
        b.x += ddx;
        b.y += ddy;
        let a = &mut vertices[self.v0].position;
        a.x -= ddx;
        a.y -= ddy;
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_sq.sqrt()
    }

    pub fn current_length(&self, vertices: &[PointMass]) -> f32 {
        vertices[self.v0]
            .position
            .square_dist(&vertices[self.v1].position)
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn pair(a: Vec2, b: Vec2) -> Vec<PointMass> {
        vec![PointMass::new(a.x, a.y, 0), PointMass::new(b.x, b.y, 0)]
    }

    #[test]
    fn rest_length_is_fixed_at_creation() {
        let mut vs = pair(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0));
        let c = Constraint::new(&vs, 0, 1, 0, true);
        vs[1].position = Vec2::new(300.0, 0.0);
        assert_eq!(c.rest_sq, 2500.0);
        assert_eq!(c.rest_length(), 50.0);
    }

    #[test]
    fn converges_from_stretched_and_compressed() {
        for stretched_to in [Vec2::new(100.0, 0.0), Vec2::new(2.0, 3.0), Vec2::new(-250.0, 80.0)] {
            let mut vs = pair(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
            let c = Constraint::new(&vs, 0, 1, 0, false);
            vs[1].position = stretched_to;
            for _ in 0..20 {
                c.solve(&mut vs);
            }
            assert!(
                (c.current_length(&vs) - 20.0).abs() < 1e-2,
                "length = {}",
                c.current_length(&vs)
            );
        }
    }

    #[test]
    fn moves_endpoints_symmetrically() {
        let mut vs = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let c = Constraint::new(&vs, 0, 1, 0, false);
        vs[1].position = Vec2::new(20.0, 0.0);
        c.solve(&mut vs);
        let mid = (vs[0].position.x + vs[1].position.x) * 0.5;
        assert!((mid - 10.0).abs() < 1e-5);
    }
}
