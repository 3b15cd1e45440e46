//! Game configuration
//!
//! Every tunable number the simulation reads lives here. Defaults match the
//! classic 800x600 layout; a JSON blob can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Why a configuration was rejected
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("screen size must be positive, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },
    #[error("paddle ({paddle_width} wide) does not fit the play field")]
    PaddleTooWide { paddle_width: f32 },
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("block grid needs at least one row and one column")]
    EmptyGrid,
    #[error("menu needs at least one option")]
    NoMenuOptions,
}

/// Block grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Gap between neighbouring blocks (split evenly around each block)
    pub padding: f32,
    /// Top-left corner of the area the grid is laid out in
    pub origin: Vec2,
    /// Height of the grid area; width is the screen minus both insets
    pub height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            padding: 4.0,
            origin: Vec2::new(8.0, 40.0),
            height: 160.0,
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,

    // === Paddle ===
    pub paddle_size: Vec2,
    /// Pixels per second
    pub paddle_speed: f32,
    /// Gap between paddle bottom and screen bottom
    pub paddle_y_offset: f32,
    /// Horizontal inset of the paddle travel limits from each screen edge
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Pixels per second along each axis
    pub ball_speed: f32,
    /// Gap between the resting ball and the paddle top
    pub ball_launch_gap: f32,

    pub starting_lives: i32,
    pub grid: GridConfig,

    // === Menu / HUD ===
    pub menu_options: Vec<String>,
    pub title_font_size: f32,
    pub option_font_size: f32,
    pub dead_font_size: f32,
    pub life_radius: f32,
    /// Center x of the first life indicator
    pub life_start_x: f32,
    pub life_spacing: f32,
    /// Life indicator centers sit this far above the bottom edge
    pub life_baseline: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Breakout".to_string(),

            paddle_size: Vec2::new(96.0, 16.0),
            paddle_speed: 200.0,
            paddle_y_offset: 16.0,
            paddle_inset: 8.0,

            ball_radius: 8.0,
            ball_speed: 300.0,
            ball_launch_gap: 4.0,

            starting_lives: 3,
            grid: GridConfig::default(),

            menu_options: vec!["Play".to_string(), "Quit".to_string()],
            title_font_size: 32.0,
            option_font_size: 16.0,
            dead_font_size: 48.0,
            life_radius: 6.0,
            life_start_x: 16.0,
            life_spacing: 20.0,
            life_baseline: 8.0,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "breakout_config";

    /// Parse a (possibly partial) JSON config over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::ScreenSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::NonPositive("ball_radius"));
        }
        if self.ball_speed <= 0.0 {
            return Err(ConfigError::NonPositive("ball_speed"));
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::NonPositive("paddle_speed"));
        }
        if self.paddle_size.x <= 0.0 || self.paddle_size.y <= 0.0 {
            return Err(ConfigError::NonPositive("paddle_size"));
        }
        if self.starting_lives <= 0 {
            return Err(ConfigError::NonPositive("starting_lives"));
        }
        if self.paddle_right_limit() < self.paddle_left_limit() {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_size.x,
            });
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.menu_options.is_empty() {
            return Err(ConfigError::NoMenuOptions);
        }
        Ok(())
    }

    /// Leftmost paddle x (paddle position is its left edge)
    #[inline]
    pub fn paddle_left_limit(&self) -> f32 {
        self.paddle_inset
    }

    /// Rightmost paddle x
    #[inline]
    pub fn paddle_right_limit(&self) -> f32 {
        self.width - self.paddle_inset - self.paddle_size.x
    }

    /// Paddle top edge (paddle y never changes)
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_y_offset - self.paddle_size.y
    }

    /// Paddle x that centers it horizontally
    #[inline]
    pub fn paddle_start_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_size.x / 2.0
    }

    /// Where the ball waits before launch: centered, just above the paddle
    pub fn ball_rest_position(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0,
            self.height
                - self.paddle_y_offset
                - self.paddle_size.y
                - self.ball_radius
                - self.ball_launch_gap,
        )
    }

    /// Size of one grid cell (block plus its share of padding)
    pub fn grid_cell(&self) -> Vec2 {
        let area_width = self.width - 2.0 * self.grid.origin.x;
        Vec2::new(
            area_width / self.grid.cols as f32,
            self.grid.height / self.grid.rows as f32,
        )
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
