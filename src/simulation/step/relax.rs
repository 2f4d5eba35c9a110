use crate::physics::sat;

use super::WorldCore;

/// Per-pass work counters (feed the perf snapshot).
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct RelaxCounts {
    pub(super) pairs_tested: u32,
    pub(super) contacts_resolved: u32,
}

/// `iterations` rounds of: relax every constraint, refresh every bounding
/// box, then test and resolve every body pair.
///
/// Boxes are refreshed each round because relaxation moves points between
/// collision passes. Pair testing is O(n²); scenes hold tens of bodies.
pub(super) fn relax_and_collide(world: &mut WorldCore) -> RelaxCounts {
    let mut counts = RelaxCounts::default();
    let friction = world.settings.friction;
    let n = world.bodies.len();

    for _ in 0..world.settings.iterations {
        for c in world.constraints.iter() {
            c.solve(&mut world.vertices);
        }
        for body in world.bodies.iter_mut() {
            body.bounding_box(&world.vertices);
        }
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                counts.pairs_tested += 1;
                if let Some(contact) = sat(&world.bodies, i, j, &world.vertices, &world.constraints) {
                    contact.resolve(&world.bodies, &mut world.vertices, &world.constraints, friction);
                    counts.contacts_resolved += 1;
                }
            }
        }
    }
    counts
}
