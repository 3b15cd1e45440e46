//! Title menu: a vertical option list with a highlighted selection

use glam::Vec2;

use super::scene::{Frame, Scene, SceneId, Transition};
use crate::config::GameConfig;
use crate::platform::{Canvas, Key, colors};

/// Menu data: the option labels and which one is highlighted
#[derive(Debug, Clone)]
pub struct MenuScene {
    /// Always `< options.len()`
    selected: usize,
    options: Vec<String>,
}

impl MenuScene {
    pub fn new(options: Vec<String>) -> Self {
        debug_assert!(!options.is_empty(), "menu needs at least one option");
        Self {
            selected: 0,
            options,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Move the highlight down, wrapping to the top
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        let n = self.options.len();
        self.selected = (self.selected + n - 1) % n;
    }

    /// What confirming the current selection does: the first option plays,
    /// the last one quits
    pub fn confirm(&self) -> Option<Transition> {
        if self.selected == 0 {
            Some(Transition::To(SceneId::Playing))
        } else if self.selected == self.options.len() - 1 {
            Some(Transition::Quit)
        } else {
            None
        }
    }
}

impl Scene for MenuScene {
    fn enter(config: &GameConfig) -> Self {
        Self::new(config.menu_options.clone())
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        // One input per frame, in priority order
        if frame.input.pressed(Key::Down) {
            self.select_next();
        } else if frame.input.pressed(Key::Up) {
            self.select_previous();
        } else if frame.input.pressed(Key::Confirm) {
            if let Some(transition) = self.confirm() {
                frame.request(transition);
            }
        }
    }

    fn draw(&self, config: &GameConfig, canvas: &mut dyn Canvas) {
        canvas.clear(colors::BACKGROUND);

        let title_size = config.title_font_size;
        let title_width = canvas.measure_text(&config.title, title_size);
        canvas.draw_text(
            &config.title,
            Vec2::new(config.width / 2.0 - title_width / 2.0, config.height * 0.4),
            title_size,
            colors::TITLE,
        );

        let size = config.option_font_size;
        for (i, option) in self.options.iter().enumerate() {
            let width = canvas.measure_text(option, size);
            let x = config.width / 2.0 - width / 2.0;
            let y = config.height / 2.0 + size * 1.5 * i as f32;
            canvas.draw_text(option, Vec2::new(x, y), size, colors::OPTION);

            if i == self.selected {
                canvas.fill_rect(
                    Vec2::new(x - 4.0, y + size + 3.0),
                    Vec2::new(width + 8.0, 1.0),
                    colors::OPTION,
                );
            }
        }
    }
}
