//! Configuration and scene vocabulary shared by the simulation and the
//! WASM facade.

pub mod settings;

pub use settings::{EngineSettings, Preset};

/// Presentation mode of a quiz canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentMode {
    /// Zero gravity, ambient current follows the pointer
    Buoyant,
    /// Downward gravity, no current
    Gravity,
}

/// Built-in body layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// One training module plus bubbles, debris and equipment boxes
    Pool,
    /// Letterform of small tiles plus a few floating circles
    Cupola,
    /// Caller adds bodies itself
    Empty,
    /// Layout handed to `WorldCore::populate_with`
    Custom,
}

impl SceneKind {
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "pool" => Ok(SceneKind::Pool),
            "cupola" => Ok(SceneKind::Cupola),
            "empty" => Ok(SceneKind::Empty),
            other => Err(format!("unknown scene '{}'", other)),
        }
    }
}
