//! Platform abstraction layer
//!
//! The simulation never talks to a window, a keyboard or a GPU directly.
//! It consumes the narrow interfaces defined here:
//! - Input queries (edge- and level-triggered)
//! - Drawing primitives
//! - Window lifecycle and frame timing (`Platform`)

pub mod headless;

use glam::Vec2;

pub use headless::{DrawCall, KeyEvent, RecordingCanvas, ScriptedPlatform};

/// The fixed key set the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    /// Menu confirm and ball launch
    Confirm,
    Left,
    Right,
}

impl Key {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "c" | "C" | "Enter" | " " => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Keyboard queries for the current frame
pub trait Input {
    /// True only on the frame the key went down
    fn pressed(&self, key: Key) -> bool;
    /// True while the key is down
    fn held(&self, key: Key) -> bool;
}

/// Key state accumulated from platform events between frames
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; 5],
    pressed: [bool; 5],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat of an already held key is not a new press.
    pub fn press(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Clear edge-triggered state (call once the frame has consumed it)
    pub fn end_frame(&mut self) {
        self.pressed = [false; 5];
    }
}

impl Input for KeyboardState {
    fn pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    fn held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// RGBA color, components in 0..1
pub type Color = [f32; 4];

/// Palette
pub mod colors {
    use super::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: Color = rgb(245, 245, 245);
    pub const TITLE: Color = rgb(130, 130, 130);
    pub const OPTION: Color = rgb(200, 200, 200);
    pub const PADDLE: Color = rgb(130, 130, 130);
    pub const BALL: Color = rgb(200, 200, 200);
    pub const LIFE: Color = rgb(230, 41, 55);
    pub const DEAD_LABEL: Color = rgb(190, 33, 55);

    /// Row-based block colors (from top to bottom)
    pub const BLOCK_ROWS: [Color; 5] = [
        rgb(230, 41, 55),
        rgb(255, 161, 0),
        rgb(253, 249, 0),
        rgb(0, 228, 48),
        rgb(0, 121, 241),
    ];
}

/// Drawing sink. Calls are painted back-to-front in the order they are made.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    /// `pos` is the top-left corner of the text
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    fn measure_text(&self, text: &str, size: f32) -> f32;
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
}

/// Window lifecycle, timing and input for one frame loop
pub trait Platform {
    /// Polled once per frame; ends the loop
    fn close_requested(&self) -> bool;
    /// Poll pending events; returns seconds since the previous frame (non-negative)
    fn begin_frame(&mut self) -> f32;
    fn input(&self) -> &dyn Input;
    /// Drawing target for this frame
    fn canvas(&mut self) -> &mut dyn Canvas;
    /// Present the frame and reset edge-triggered input
    fn end_frame(&mut self);
    /// Release the window
    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut keys = KeyboardState::new();
        keys.press(Key::Down);
        assert!(keys.pressed(Key::Down));
        assert!(keys.held(Key::Down));

        keys.end_frame();
        assert!(!keys.pressed(Key::Down));
        assert!(keys.held(Key::Down));

        // Auto-repeat while held
        keys.press(Key::Down);
        assert!(!keys.pressed(Key::Down));

        keys.release(Key::Down);
        keys.press(Key::Down);
        assert!(keys.pressed(Key::Down));
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("c"), Some(Key::Confirm));
        assert_eq!(Key::from_dom_key("Enter"), Some(Key::Confirm));
        assert_eq!(Key::from_dom_key("x"), None);
    }
}
