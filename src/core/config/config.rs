use bevy::prelude::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            title: "Pegfall".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -600.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub restitution: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 25.0,
            restitution: 0.4,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BouncerConfig {
    pub restitution: f32,
}
impl Default for BouncerConfig {
    fn default() -> Self {
        Self { restitution: 1.0 }
    }
}

/// Edit-mode obstacle boxes. Width is drawn uniformly per box; rotation
/// is drawn uniformly from 0..max_rotation radians.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width_min: f32,
    pub width_max: f32,
    pub height: f32,
    pub max_rotation: f32,
}
impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width_min: 16.0,
            width_max: 128.0,
            height: 16.0,
            max_rotation: 3.0,
        }
    }
}

/// Burst shown where a ball is removed. Best-effort decoration only.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub enabled: bool,
    pub particle_count: usize,
    pub particle_lifetime: f32,
    pub particle_speed: f32,
}
impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particle_count: 24,
            particle_lifetime: 0.6,
            particle_speed: 220.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub ball: BallConfig,
    pub bouncer: BouncerConfig,
    pub obstacle: ObstacleConfig,
    pub effects: EffectsConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            ball: Default::default(),
            bouncer: Default::default(),
            obstacle: Default::default(),
            effects: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Sibling `.local.ron` override layer for a base config path, replacing
    /// only the final extension. Paths not ending in `.ron` get no layer.
    pub fn local_layer(path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) == Some("ron") {
            Some(path.with_extension("local.ron"))
        } else {
            None
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (shallow & deep merge).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; balls may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.gravity.y < -2000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if !(0.0..=1.5).contains(&self.ball.restitution) {
            w.push(format!(
                "ball.restitution {} outside recommended 0..1.5",
                self.ball.restitution
            ));
        }
        if self.ball.restitution < 0.0 {
            w.push("ball.restitution negative -> energy gain/clamping side effects".into());
        }
        if !(0.0..=1.5).contains(&self.bouncer.restitution) {
            w.push(format!(
                "bouncer.restitution {} outside recommended 0..1.5",
                self.bouncer.restitution
            ));
        }
        if self.obstacle.width_min <= 0.0 {
            w.push("obstacle.width_min must be > 0".into());
        }
        if self.obstacle.width_min > self.obstacle.width_max {
            w.push(format!(
                "obstacle.width_min ({}) greater than width_max ({})",
                self.obstacle.width_min, self.obstacle.width_max
            ));
        }
        if self.obstacle.height <= 0.0 {
            w.push("obstacle.height must be > 0".into());
        }
        if self.obstacle.max_rotation < 0.0 {
            w.push("obstacle.max_rotation negative".into());
        }
        if self.effects.enabled {
            if self.effects.particle_count == 0 {
                w.push("effects.particle_count is 0; bursts will be invisible".into());
            }
            if self.effects.particle_count > 10_000 {
                w.push(format!(
                    "effects.particle_count {} very high; performance may suffer",
                    self.effects.particle_count
                ));
            }
            if self.effects.particle_lifetime <= 0.0 {
                w.push("effects.particle_lifetime must be > 0 when enabled".into());
            }
            if self.effects.particle_speed < 0.0 {
                w.push("effects.particle_speed negative".into());
            }
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            gravity: (y: -500.0),
            ball: (radius: 20.0, restitution: 0.5),
            bouncer: (restitution: 0.9),
            obstacle: (width_min: 16.0, width_max: 128.0, height: 16.0, max_rotation: 3.0),
            effects: (enabled: true, particle_count: 12, particle_lifetime: 0.5, particle_speed: 180.0),
            rapier_debug: false,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.ball.radius, 20.0);
        assert_eq!(cfg.ball.restitution, 0.5);
        assert_eq!(cfg.effects.particle_count, 12);
        // Should produce no warnings for the nominal sample config
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn defaults_match_classic_session() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.width, 1024.0);
        assert_eq!(cfg.window.height, 768.0);
        assert_eq!(cfg.ball.restitution, 0.4);
        assert_eq!(cfg.obstacle.height, 16.0);
        assert!(cfg.validate().is_empty(), "defaults must be warning-free");
    }

    #[test]
    fn validate_detects_warnings() {
        // Intentionally craft a config with multiple issues
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -5.0,
            },
            gravity: GravityConfig { y: 0.0 },
            ball: BallConfig {
                radius: 0.0,
                restitution: -0.2,
            },
            bouncer: BouncerConfig { restitution: 3.0 },
            obstacle: ObstacleConfig {
                width_min: 64.0,
                width_max: 16.0,
                height: 0.0,
                max_rotation: -1.0,
            },
            effects: EffectsConfig {
                enabled: true,
                particle_count: 0,
                particle_lifetime: 0.0,
                particle_speed: -10.0,
            },
            rapier_debug: false,
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("gravity.y magnitude near zero"));
        assert!(joined.contains("ball.radius must be > 0"));
        assert!(joined.contains("ball.restitution negative"));
        assert!(joined.contains("bouncer.restitution"));
        assert!(joined.contains("obstacle.width_min (64) greater than width_max (16)"));
        assert!(joined.contains("obstacle.height must be > 0"));
        assert!(joined.contains("effects.particle_count is 0"));
        assert!(joined.contains("effects.particle_lifetime must be > 0"));
        assert!(
            warnings.len() >= 10,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        // Defaults applied
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            gravity: (y: -700.0),
            ball: (restitution: 0.7),
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            ball: (restitution: 0.3),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0); // from base
        assert_eq!(cfg.window.title, "Custom Title"); // overridden
        assert_eq!(cfg.ball.restitution, 0.3); // overridden
        assert_eq!(cfg.gravity.y, -700.0); // from base
                                           // Height default still present
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn local_layer_replaces_only_final_extension() {
        assert_eq!(
            GameConfig::local_layer("assets/config/game.ron"),
            Some(PathBuf::from("assets/config/game.local.ron"))
        );
        // A `.ron` earlier in the path must not be rewritten.
        assert_eq!(
            GameConfig::local_layer("configs.ron.d/game.ron"),
            Some(PathBuf::from("configs.ron.d/game.local.ron"))
        );
    }

    #[test]
    fn local_layer_skipped_without_ron_extension() {
        assert_eq!(GameConfig::local_layer("game"), None);
        assert_eq!(GameConfig::local_layer("game.toml"), None);
    }

    #[test]
    fn parse_autoclose_and_validate() {
        // explicit positive value
        let sample = r"(window: (autoClose: 3.25), gravity: (y: -600.0))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);
        // negative -> warning
        let neg_sample = r"(window: (autoClose: -5.0))";
        let mut file2 = tempfile::NamedTempFile::new().unwrap();
        file2.write_all(neg_sample.as_bytes()).unwrap();
        let cfg2 = GameConfig::load_from_file(file2.path()).expect("parse config");
        assert!(
            cfg2.validate()
                .iter()
                .any(|w| w.contains("window.autoClose")),
            "expected warning for negative autoClose"
        );
    }
}
