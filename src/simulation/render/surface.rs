use web_sys::CanvasRenderingContext2d;

use crate::math::Vec2;

/// 2D raster target the world paints into.
pub trait RasterSurface {
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str);
}

impl RasterSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.begin_path();
        self.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.line_to(p.x as f64, p.y as f64);
        }
        self.close_path();
        self.set_fill_style_str(color);
        self.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str) {
        self.begin_path();
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.set_stroke_style_str(color);
        self.stroke();
    }
}
