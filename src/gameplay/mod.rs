pub mod board;
pub mod effects;
pub mod hud;
pub mod scoring;
pub mod session;
