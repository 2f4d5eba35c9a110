use serde::{Deserialize, Serialize};

/// Tunable engine parameters.
///
/// `gravity` is the live value (the tween writes it every frame); the
/// `mode_*` fields describe where the buoyant/gravity mode switch takes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Downward acceleration added every step (px/frame²)
    pub gravity: f32,
    /// Fraction of last step's displacement carried over (1.0 = no drag)
    pub viscosity: f32,
    /// Horizontal damping on floor contact
    pub friction_ground: f32,
    /// Tangential damping in collision response
    pub friction: f32,
    /// Relaxation + collision passes per frame
    pub iterations: u32,
    /// Ambient current radius (px)
    pub mouse_radius: f32,
    /// Ambient current push at the pointer (px/frame)
    pub mouse_strength: f32,
    /// Drag pull divisor, multiplied by the dragged body's mass
    pub drag_stiffness: f32,

    /// Gravity used by `EnvironmentMode::Gravity`
    pub mode_gravity: f32,
    /// Tween length when switching to buoyant
    pub to_buoyant_ms: f64,
    /// Tween length when switching to gravity
    pub to_gravity_ms: f64,
}

/// Named parameter sets of the two quiz canvases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Neutral-buoyancy pool: light water drag, wider and softer current
    Pool,
    /// Observation module: no drag, tighter and stronger current
    Cupola,
}

impl Preset {
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "pool" => Ok(Preset::Pool),
            "cupola" => Ok(Preset::Cupola),
            other => Err(format!("unknown preset '{}'", other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Pool => "pool",
            Preset::Cupola => "cupola",
        }
    }

    pub fn settings(self) -> EngineSettings {
        let base = EngineSettings {
            gravity: 0.0,
            viscosity: 1.0,
            friction_ground: 0.1,
            friction: 0.2,
            iterations: 5,
            mouse_radius: 70.0,
            mouse_strength: 0.8,
            drag_stiffness: 5.0,
            mode_gravity: 0.12,
            to_buoyant_ms: 150.0,
            to_gravity_ms: 600.0,
        };
        match self {
            Preset::Pool => EngineSettings {
                viscosity: 0.99,
                mouse_radius: 80.0,
                mouse_strength: 0.6,
                mode_gravity: 0.1,
                to_buoyant_ms: 250.0,
                ..base
            },
            Preset::Cupola => base,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Preset::Pool.settings()
    }
}

impl EngineSettings {
    /// Parse a full settings object; missing fields take the pool values.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: EngineSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay a partial JSON object on these settings.
    pub fn merge_json(&self, json: &str) -> Result<Self, String> {
        let patch: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
        self.merge_value(patch)
    }

    /// Fields absent from `patch` keep their current value.
    pub fn merge_value(&self, patch: serde_json::Value) -> Result<Self, String> {
        let serde_json::Value::Object(fields) = patch else {
            return Err("settings must be a JSON object".to_string());
        };
        let mut merged = serde_json::to_value(self).map_err(|e| e.to_string())?;
        if let serde_json::Value::Object(current) = &mut merged {
            current.extend(fields);
        }
        let settings: EngineSettings = serde_json::from_value(merged).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let scalars = [
            ("gravity", self.gravity),
            ("viscosity", self.viscosity),
            ("frictionGround", self.friction_ground),
            ("friction", self.friction),
            ("mouseRadius", self.mouse_radius),
            ("mouseStrength", self.mouse_strength),
            ("dragStiffness", self.drag_stiffness),
            ("modeGravity", self.mode_gravity),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(format!("{} must be finite", name));
            }
        }
        if !self.to_buoyant_ms.is_finite() || !self.to_gravity_ms.is_finite() {
            return Err("tween durations must be finite".to_string());
        }
        if !(0.0..=1.0).contains(&self.viscosity) {
            return Err(format!("viscosity must be within 0..=1, got {}", self.viscosity));
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".to_string());
        }
        if self.drag_stiffness <= 0.0 {
            return Err("dragStiffness must be positive".to_string());
        }
        if self.mouse_radius <= 0.0 {
            return Err("mouseRadius must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_quiz_pages() {
        let pool = Preset::Pool.settings();
        assert_eq!(pool.viscosity, 0.99);
        assert_eq!(pool.mode_gravity, 0.1);
        assert_eq!(pool.to_buoyant_ms, 250.0);

        let cupola = Preset::Cupola.settings();
        assert_eq!(cupola.viscosity, 1.0);
        assert_eq!(cupola.mouse_radius, 70.0);
        assert_eq!(cupola.mode_gravity, 0.12);

        assert!(pool.validate().is_ok());
        assert!(cupola.validate().is_ok());
    }

    #[test]
    fn json_uses_camel_case_and_fills_defaults() {
        let s = EngineSettings::from_json(r#"{"iterations": 8, "dragStiffness": 2.5}"#).unwrap();
        assert_eq!(s.iterations, 8);
        assert_eq!(s.drag_stiffness, 2.5);
        assert_eq!(s.viscosity, Preset::Pool.settings().viscosity);

        let back = EngineSettings::from_json(&s.to_json()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(EngineSettings::from_json("not json").is_err());
        assert!(EngineSettings::from_json(r#"{"iterations": 0}"#).is_err());
        assert!(EngineSettings::from_json(r#"{"dragStiffness": 0}"#).is_err());
        assert!(EngineSettings::from_json(r#"{"viscosity": 1.5}"#).is_err());
        assert!(EngineSettings::from_json(r#"{"mouseRadius": -3}"#).is_err());
    }

    #[test]
    fn partial_json_keeps_the_base_preset() {
        let cupola = Preset::Cupola.settings();
        let merged = cupola.merge_json(r#"{"iterations": 8}"#).unwrap();
        assert_eq!(merged.iterations, 8);
        assert_eq!(merged.viscosity, 1.0);
        assert_eq!(merged.mouse_radius, 70.0);
        assert_eq!(merged.mouse_strength, 0.8);
        assert_eq!(merged.mode_gravity, 0.12);
        assert_eq!(merged, EngineSettings { iterations: 8, ..cupola.clone() });

        let live = EngineSettings { gravity: 0.05, ..cupola };
        assert_eq!(live.merge_json(r#"{"friction": 0.4}"#).unwrap().gravity, 0.05);
    }

    #[test]
    fn merge_rejects_non_objects_and_bad_values() {
        let pool = Preset::Pool.settings();
        assert!(pool.merge_json("[1, 2]").is_err());
        assert!(pool.merge_json("3").is_err());
        assert!(pool.merge_json(r#"{"iterations": 0}"#).is_err());
        assert!(pool.merge_json(r#"{"viscosity": "thick"}"#).is_err());
        assert_eq!(pool.merge_json("{}").unwrap(), pool);
    }

    #[test]
    fn preset_names() {
        assert_eq!(Preset::from_name("cupola"), Ok(Preset::Cupola));
        assert_eq!(Preset::Pool.name(), "pool");
        assert!(Preset::from_name("moon").is_err());
    }
}
