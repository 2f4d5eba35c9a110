use crate::math::Vec2;

use super::BodyId;

/// Minimum wall padding applied to every point-mass, whatever its body size.
pub const MIN_WALL_PADDING: f32 = 20.0;

/// Per-frame inputs of the Verlet step.
#[derive(Clone, Copy, Debug)]
pub struct IntegrateParams {
    pub viscosity: f32,
    pub gravity: f32,
    pub friction_ground: f32,
    pub width: f32,
    pub height: f32,
}

/// A simulated particle. Velocity is implicit in `position - old_position`.
#[derive(Clone, Debug)]
pub struct PointMass {
    pub position: Vec2,
    pub old_position: Vec2,
    /// Owning body (index into the world's body list)
    pub body: BodyId,
}

impl PointMass {
    pub fn new(x: f32, y: f32, body: BodyId) -> Self {
        Self {
            position: Vec2::new(x, y),
            old_position: Vec2::new(x, y),
            body,
        }
    }

    /// Verlet step followed by walled-box clamping.
    ///
    /// `half_extents` is the owning body's current bounding box; the walls are
    /// pushed inward by it (never less than `MIN_WALL_PADDING`).
    pub fn integrate(&mut self, half_extents: Vec2, params: &IntegrateParams) {
        let p = &mut self.position;
        let o = &mut self.old_position;
        let (x, y) = (p.x, p.y);

        p.x += params.viscosity * p.x - params.viscosity * o.x;
        p.y += params.viscosity * p.y - params.viscosity * o.y + params.gravity;
        o.set(x, y);

        let pad_x = wall_padding(half_extents.x);
        let pad_y = wall_padding(half_extents.y);

        if p.y < pad_y {
            p.y = pad_y;
        } else if p.y > params.height - pad_y {
            // Floor contact bleeds horizontal speed proportional to penetration
            p.x -= (p.y - (params.height - pad_y)) * (p.x - o.x) * params.friction_ground;
            p.y = params.height - pad_y;
        }
        if p.x < pad_x {
            p.x = pad_x;
        } else if p.x > params.width - pad_x {
            p.x = params.width - pad_x;
        }
    }

    /// Displacement since the previous step.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.old_position
    }
}

#[inline]
fn wall_padding(half_extent: f32) -> f32 {
    let h = half_extent.abs();
    if h == 0.0 {
        MIN_WALL_PADDING
    } else {
        h.max(MIN_WALL_PADDING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(gravity: f32) -> IntegrateParams {
        IntegrateParams {
            viscosity: 1.0,
            gravity,
            friction_ground: 0.1,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn keeps_implicit_velocity() {
        let mut p = PointMass::new(100.0, 100.0, 0);
        p.old_position = Vec2::new(98.0, 100.0);
        p.integrate(Vec2::zero(), &params(0.0));
        assert_eq!(p.position, Vec2::new(102.0, 100.0));
        assert_eq!(p.old_position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn gravity_accumulates_on_y_only() {
        let mut p = PointMass::new(100.0, 100.0, 0);
        p.integrate(Vec2::zero(), &params(0.5));
        p.integrate(Vec2::zero(), &params(0.5));
        assert_eq!(p.position.x, 100.0);
        assert!((p.position.y - 101.5).abs() < 1e-5);
    }

    #[test]
    fn stays_inside_padded_box() {
        let mut p = PointMass::new(200.0, 150.0, 0);
        p.old_position = Vec2::new(180.0, 140.0);
        let half = Vec2::new(30.0, 5.0);
        for _ in 0..500 {
            p.integrate(half, &params(0.3));
            assert!(p.position.x >= 30.0 && p.position.x <= 400.0 - 30.0);
            assert!(p.position.y >= 20.0 && p.position.y <= 300.0 - 20.0);
        }
    }

    #[test]
    fn floor_contact_slows_sliding() {
        let mut p = PointMass::new(200.0, 279.0, 0);
        p.old_position = Vec2::new(196.0, 275.0);
        p.integrate(Vec2::zero(), &params(0.0));
        // penetration 3 * slide 4 * 0.1
        assert_eq!(p.position.y, 280.0);
        assert!((p.position.x - 202.8).abs() < 1e-4);
    }
}
