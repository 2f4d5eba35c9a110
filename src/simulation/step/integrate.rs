use crate::physics::IntegrateParams;

use super::WorldCore;

/// Verlet-step every point-mass against the current canvas walls.
pub(super) fn integrate_all(world: &mut WorldCore) {
    let params = IntegrateParams {
        viscosity: world.settings.viscosity,
        gravity: world.settings.gravity,
        friction_ground: world.settings.friction_ground,
        width: world.width,
        height: world.height,
    };
    let bodies = &world.bodies;

    // Each point only reads its own body's extents, so the pass splits freely
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        world.vertices.par_iter_mut().for_each(|v| {
            let half = bodies[v.body].half_extents;
            v.integrate(half, &params);
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for v in world.vertices.iter_mut() {
            let half = bodies[v.body].half_extents;
            v.integrate(half, &params);
        }
    }
}
