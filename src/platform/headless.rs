//! Headless platform: scripted input, recorded drawing
//!
//! Drives the full frame loop without a window. Used by tests and by the
//! native binary's demo run.

use std::collections::VecDeque;

use glam::Vec2;

use super::{Canvas, Color, Input, Key, KeyboardState, Platform};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
}

/// Canvas that stores every call instead of painting
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Fixed text advance per character, as a fraction of font size
    pub const CHAR_ADVANCE: f32 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded calls
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Texts drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::CHAR_ADVANCE
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::Rect { pos, size, color });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.calls.push(DrawCall::Ellipse {
            center,
            radii,
            color,
        });
    }
}

/// Key transition applied at the start of a scripted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Platform that replays a fixed script of frames
///
/// Reports close-requested once every scripted frame has run.
#[derive(Debug)]
pub struct ScriptedPlatform {
    script: VecDeque<Vec<KeyEvent>>,
    keys: KeyboardState,
    dt: f32,
    canvas: RecordingCanvas,
    last_frame: Vec<DrawCall>,
    frames_run: usize,
    closed: bool,
}

impl ScriptedPlatform {
    pub fn new(dt: f32) -> Self {
        Self {
            script: VecDeque::new(),
            keys: KeyboardState::new(),
            dt,
            canvas: RecordingCanvas::new(),
            last_frame: Vec::new(),
            frames_run: 0,
            closed: false,
        }
    }

    /// Append one frame with the given key events
    pub fn frame(mut self, events: &[KeyEvent]) -> Self {
        self.script.push_back(events.to_vec());
        self
    }

    /// Append `n` frames with no key events
    pub fn idle(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.script.push_back(Vec::new());
        }
        self
    }

    /// Press and immediately release a key (one frame)
    pub fn tap(self, key: Key) -> Self {
        self.frame(&[KeyEvent::Down(key)]).frame(&[KeyEvent::Up(key)])
    }

    /// Hold a key down for `n` frames, released on the following frame
    pub fn hold(mut self, key: Key, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        self.script.push_back(vec![KeyEvent::Down(key)]);
        self = self.idle(n - 1);
        self.script.push_back(vec![KeyEvent::Up(key)]);
        self
    }

    /// Drawing calls of the most recently finished frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Platform for ScriptedPlatform {
    fn close_requested(&self) -> bool {
        self.script.is_empty()
    }

    fn begin_frame(&mut self) -> f32 {
        if let Some(events) = self.script.pop_front() {
            for event in events {
                match event {
                    KeyEvent::Down(key) => self.keys.press(key),
                    KeyEvent::Up(key) => self.keys.release(key),
                }
            }
        }
        self.dt
    }

    fn input(&self) -> &dyn Input {
        &self.keys
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn end_frame(&mut self) {
        self.last_frame = self.canvas.take();
        self.keys.end_frame();
        self.frames_run += 1;
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
