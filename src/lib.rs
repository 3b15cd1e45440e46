//! Breakout - a single-screen block breaker
//!
//! Core modules:
//! - `sim`: Scene state machine, collision geometry and the Playing physics
//! - `driver`: Frame loop over a `Platform`
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Input, drawing and window abstraction (plus a headless backend)
//! - `config`: Data-driven game constants

pub mod config;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::FrameDriver;

/// Frame timing constants
pub mod consts {
    /// Nominal frame time used by the headless demo
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Longest frame the browser loop will report (tab switches, stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
