use crate::math::Vec2;

use super::WorldCore;

/// Pointer position in canvas space and whether a button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub is_down: bool,
}

pub(super) fn pointer_move(world: &mut WorldCore, x: f32, y: f32) {
    world.pointer.position.set(x, y);
}

pub(super) fn pointer_down(world: &mut WorldCore, x: f32, y: f32) {
    world.pointer.is_down = true;
    world.pointer.position.set(x, y);
}

pub(super) fn pointer_up(world: &mut WorldCore) {
    world.pointer.is_down = false;
    world.drag = None;
}

/// While the button is held and nothing is grabbed, grab the nearest
/// point-mass of the first body (in creation order) under the pointer.
pub(super) fn pick_drag_target(world: &mut WorldCore) {
    if !world.pointer.is_down || world.drag.is_some() {
        return;
    }
    let p = world.pointer.position;
    for body in &world.bodies {
        if body.contains_point(&world.vertices, &world.constraints, &p) {
            world.drag = body.nearest_vertex(&world.vertices, &p);
            return;
        }
    }
}

/// Pull the grabbed point-mass toward the pointer; heavier bodies follow
/// more slowly.
pub(super) fn apply_drag(world: &mut WorldCore) {
    let Some(index) = world.drag else {
        return;
    };
    let body = world.vertices[index].body;
    let s = world.bodies[body].mass * world.settings.drag_stiffness;
    let target = world.pointer.position;
    let p = &mut world.vertices[index].position;
    p.x += (target.x - p.x) / s;
    p.y += (target.y - p.y) / s;
}

/// Radial push away from the pointer with linear falloff to zero at
/// `mouse_radius`.
pub(super) fn apply_ambient_current(world: &mut WorldCore) {
    let radius = world.settings.mouse_radius;
    let strength = world.settings.mouse_strength;
    let radius_sq = radius * radius;
    let origin = world.pointer.position;

    for v in world.vertices.iter_mut() {
        let dx = v.position.x - origin.x;
        let dy = v.position.y - origin.y;
        let dist_sq = dx * dx + dy * dy;
        // A point exactly under the pointer has no direction to go
        if dist_sq >= radius_sq || dist_sq == 0.0 {
            continue;
        }
        let dist = dist_sq.sqrt();
        let force = (1.0 - dist / radius) * strength;
        v.position.x += dx / dist * force;
        v.position.y += dy / dist * force;
    }
}
