pub mod config;

pub use config::{
    BallConfig, BouncerConfig, EffectsConfig, GameConfig, GravityConfig, ObstacleConfig,
    WindowConfig,
};
