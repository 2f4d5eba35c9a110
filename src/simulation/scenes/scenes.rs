use crate::domain::SceneKind;

use super::WorldCore;

/// Caller-supplied body layout.
///
/// `populate` runs on an empty world whose canvas already has the given
/// size. Layouts draw randomness from `WorldCore::random_range` so a seed
/// reproduces the scene.
pub trait SceneLayout {
    fn populate(&self, world: &mut WorldCore, width: f32, height: f32);
}

const BUBBLE_COLORS: [&str; 4] = ["#E0FBFC", "#98F5E1", "#38A3A5", "#B9FBC0"];
const ORB_COLORS: [&str; 4] = ["#9BF47A", "#FFD36E", "#F78CFF", "#9AA6FF"];

/// Neutral-buoyancy pool: a training module among bubbles, debris and
/// equipment boxes.
pub struct PoolScene {
    pub bubbles: u32,
    pub debris: u32,
    pub equipment: u32,
}

impl Default for PoolScene {
    fn default() -> Self {
        Self { bubbles: 25, debris: 30, equipment: 15 }
    }
}

impl SceneLayout for PoolScene {
    fn populate(&self, world: &mut WorldCore, w: f32, h: f32) {
        let mut rejected = 0u32;

        if world.create_rectangle(w / 2.0 - 50.0, h / 3.0, 100.0, 60.0, 20.0, "#EAEAEA").is_err() {
            rejected += 1;
        }

        for k in 0..self.bubbles {
            let x = world.random_range(50.0, w - 100.0);
            let y = world.random_range(50.0, h - 100.0);
            let r = world.random_range(10.0, 20.0);
            let m = world.random_range(5.0, 10.0);
            if world.create_circle(x, y, r, 12, m, BUBBLE_COLORS[k as usize % 4]).is_err() {
                rejected += 1;
            }
        }

        for _ in 0..self.debris {
            let x = world.random_range(50.0, w - 100.0);
            let y = world.random_range(50.0, h - 100.0);
            let rw = world.random_range(15.0, 20.0);
            let rh = world.random_range(15.0, 20.0);
            let m = world.random_range(5.0, 5.0);
            if world.create_rectangle(x, y, rw, rh, m, "#AAAAAA").is_err() {
                rejected += 1;
            }
        }

        for _ in 0..self.equipment {
            let x = world.random_range(50.0, w - 100.0);
            let y = world.random_range(50.0, h - 100.0);
            let size = world.random_range(25.0, 25.0);
            let m = world.random_range(10.0, 10.0);
            if world.create_rectangle(x, y, size, size, m, "#888888").is_err() {
                rejected += 1;
            }
        }

        if rejected > 0 {
            console_warn!("pool scene: {} bodies rejected", rejected);
        }
    }
}

/// Observation-module page: a word spelled in square tiles plus a few
/// floating orbs.
pub struct CupolaScene {
    /// Bitmap rows; any non-space character is a tile
    pub rows: Vec<&'static str>,
    pub orbs: u32,
}

/// Columns the letterform scale is fitted to
const LETTER_GRID_COLUMNS: f32 = 35.0;

impl Default for CupolaScene {
    fn default() -> Self {
        Self {
            rows: vec![
                "*** * * *** *** *   ***",
                "*   * * * * * * *   * *",
                "*   * * *** * * *   ***",
                "*   * * *   * * *   * *",
                "*** *** *   *** *** * *",
            ],
            orbs: 6,
        }
    }
}

impl CupolaScene {
    pub fn tile_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().filter(|c| *c != ' ').count())
            .sum()
    }
}

impl SceneLayout for CupolaScene {
    fn populate(&self, world: &mut WorldCore, w: f32, h: f32) {
        let s = w / LETTER_GRID_COLUMNS;
        let y_offset = h / 2.0 - 4.5 * s;
        let widest = self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let x_offset = ((LETTER_GRID_COLUMNS - widest as f32) / 2.0).floor().max(0.0);

        let mut rejected = 0u32;
        for (i, row) in self.rows.iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let x = s * 0.5 + s * (x_offset + j as f32);
                let y = y_offset + s * i as f32;
                if world.create_rectangle(x, y, s * 0.8, s * 0.8, 1.0, "#77E0FF").is_err() {
                    rejected += 1;
                }
            }
        }

        for k in 0..self.orbs {
            let x = world.random_range(50.0, w - 100.0);
            let y = world.random_range(50.0, h / 2.0);
            let r = world.random_range(18.0, 18.0);
            let m = world.random_range(5.0, 10.0);
            if world.create_circle(x, y, r, 12, m, ORB_COLORS[k as usize % 4]).is_err() {
                rejected += 1;
            }
        }

        if rejected > 0 {
            console_warn!("cupola scene: {} bodies rejected", rejected);
        }
    }
}

pub(super) fn init_scene(world: &mut WorldCore, width: f32, height: f32, scene: SceneKind) {
    world.resize(width, height);
    if scene != SceneKind::Custom {
        world.layout = None;
    }
    world.scene = scene;
    reset(world);
}

pub(super) fn populate_with(world: &mut WorldCore, layout: Box<dyn SceneLayout>) {
    world.layout = Some(layout);
    world.scene = SceneKind::Custom;
    reset(world);
}

fn populate(world: &mut WorldCore, layout: &dyn SceneLayout) {
    world.clear();
    let (w, h) = (world.width, world.height);
    layout.populate(world, w, h);
}

pub(super) fn reset(world: &mut WorldCore) {
    world.rng_state = world.rng_seed;
    match world.scene {
        SceneKind::Pool => populate(world, &PoolScene::default()),
        SceneKind::Cupola => populate(world, &CupolaScene::default()),
        SceneKind::Custom => match world.layout.take() {
            Some(layout) => {
                populate(world, layout.as_ref());
                world.layout = Some(layout);
            }
            None => world.clear(),
        },
        SceneKind::Empty => world.clear(),
    }
    console_log!("scene reset: {} bodies", world.bodies.len());
}
