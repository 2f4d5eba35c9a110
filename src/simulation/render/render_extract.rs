use crate::math::Vec2;

use super::surface::RasterSurface;
use super::WorldCore;

const DRAG_LINE_COLOR: &str = "#0f0";

/// Clear the surface, fill every body outline, then the drag line if any.
pub(super) fn draw(world: &WorldCore, surface: &mut dyn RasterSurface) {
    surface.clear(world.width, world.height);

    let mut points: Vec<Vec2> = Vec::with_capacity(16);
    for body in &world.bodies {
        points.clear();
        points.extend(body.outline(&world.vertices, &world.constraints));
        surface.fill_polygon(&points, &body.color);
    }

    if let Some(index) = world.drag {
        surface.stroke_line(world.vertices[index].position, world.pointer.position, DRAG_LINE_COLOR);
    }
}

/// Flatten every outline into `outline_buffer` for JS-side renderers.
///
/// Layout per body: `[body_index, point_count, x0, y0, x1, y1, ...]`.
/// Returns the number of floats written.
pub(super) fn extract_outlines(world: &mut WorldCore) -> usize {
    let buf = &mut world.outline_buffer;
    buf.clear();
    for (i, body) in world.bodies.iter().enumerate() {
        buf.push(i as f32);
        buf.push(body.edges.len() as f32);
        for p in body.outline(&world.vertices, &world.constraints) {
            buf.push(p.x);
            buf.push(p.y);
        }
    }
    buf.len()
}
