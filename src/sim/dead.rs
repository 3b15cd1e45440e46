//! Game over screen. No way out except closing the game.

use glam::Vec2;

use super::scene::Scene;
use crate::config::GameConfig;
use crate::platform::{Canvas, colors};

pub const DEAD_LABEL: &str = "DEAD";

#[derive(Debug, Clone, Default)]
pub struct DeadScene;

impl Scene for DeadScene {
    fn enter(_config: &GameConfig) -> Self {
        DeadScene
    }

    fn draw(&self, config: &GameConfig, canvas: &mut dyn Canvas) {
        canvas.clear(colors::BACKGROUND);

        let size = config.dead_font_size;
        let width = canvas.measure_text(DEAD_LABEL, size);
        canvas.draw_text(
            DEAD_LABEL,
            Vec2::new(
                config.width / 2.0 - width / 2.0,
                config.height / 2.0 - size / 2.0,
            ),
            size,
            colors::DEAD_LABEL,
        );
    }
}
