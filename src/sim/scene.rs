//! Scene state machine
//!
//! Exactly one scene is active at a time. Scenes request transitions during
//! update; the request is only committed at the end of the frame, after the
//! active scene has been drawn, so draw never sees a half-entered scene.

use serde::{Deserialize, Serialize};

use super::dead::DeadScene;
use super::menu::MenuScene;
use super::playing::PlayingScene;
use crate::config::GameConfig;
use crate::platform::{Canvas, Input};

/// Which scene is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    Menu,
    Playing,
    Dead,
}

/// A pending request, consumed once at the end of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Leave the active scene and enter this one (re-entering resets it)
    To(SceneId),
    /// Stop the frame loop
    Quit,
}

/// Whether the frame loop keeps going after a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Per-frame context handed to a scene's update hook
pub struct Frame<'a> {
    pub config: &'a GameConfig,
    pub input: &'a dyn Input,
    /// Seconds since the previous frame
    pub dt: f32,
    pending: &'a mut Option<Transition>,
}

impl<'a> Frame<'a> {
    pub fn new(
        config: &'a GameConfig,
        input: &'a dyn Input,
        dt: f32,
        pending: &'a mut Option<Transition>,
    ) -> Self {
        Self {
            config,
            input,
            dt,
            pending,
        }
    }

    /// Record a transition; a later request in the same frame replaces it
    pub fn request(&mut self, transition: Transition) {
        log::debug!("Transition requested: {:?}", transition);
        *self.pending = Some(transition);
    }

    pub fn pending(&self) -> Option<Transition> {
        *self.pending
    }
}

/// Capability set every scene provides. Hooks a scene does not need keep the
/// default no-op body.
pub trait Scene {
    /// Entry hook: build fresh scene data
    fn enter(config: &GameConfig) -> Self
    where
        Self: Sized;

    /// Exit hook, run just before the scene's data is dropped
    fn exit(&mut self, _config: &GameConfig) {}

    fn update(&mut self, _frame: &mut Frame<'_>) {}

    fn draw(&self, _config: &GameConfig, _canvas: &mut dyn Canvas) {}
}

/// The active scene and the data it owns
#[derive(Debug, Clone)]
pub enum ActiveScene {
    Menu(MenuScene),
    Playing(PlayingScene),
    Dead(DeadScene),
}

impl ActiveScene {
    /// Run the entry hook of `id`
    pub fn enter(id: SceneId, config: &GameConfig) -> Self {
        match id {
            SceneId::Menu => ActiveScene::Menu(MenuScene::enter(config)),
            SceneId::Playing => ActiveScene::Playing(PlayingScene::enter(config)),
            SceneId::Dead => ActiveScene::Dead(DeadScene::enter(config)),
        }
    }

    pub fn id(&self) -> SceneId {
        match self {
            ActiveScene::Menu(_) => SceneId::Menu,
            ActiveScene::Playing(_) => SceneId::Playing,
            ActiveScene::Dead(_) => SceneId::Dead,
        }
    }

    fn scene(&self) -> &dyn Scene {
        match self {
            ActiveScene::Menu(s) => s,
            ActiveScene::Playing(s) => s,
            ActiveScene::Dead(s) => s,
        }
    }

    fn scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            ActiveScene::Menu(s) => s,
            ActiveScene::Playing(s) => s,
            ActiveScene::Dead(s) => s,
        }
    }
}

/// Owns the active scene and the pending-transition slot
#[derive(Debug, Clone)]
pub struct SceneMachine {
    config: GameConfig,
    active: ActiveScene,
    pending: Option<Transition>,
}

impl SceneMachine {
    /// Start in the menu, entered through its entry hook
    pub fn new(config: GameConfig) -> Self {
        let active = ActiveScene::enter(SceneId::Menu, &config);
        log::info!("Entered {:?}", active.id());
        Self {
            config,
            active,
            pending: None,
        }
    }

    pub fn current(&self) -> SceneId {
        self.active.id()
    }

    pub fn active(&self) -> &ActiveScene {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveScene {
        &mut self.active
    }

    pub fn pending(&self) -> Option<Transition> {
        self.pending
    }

    /// Record a transition; the last request before the commit wins
    pub fn request_transition(&mut self, transition: Transition) {
        log::debug!("Transition requested: {:?}", transition);
        self.pending = Some(transition);
    }

    pub fn update(&mut self, input: &dyn Input, dt: f32) {
        let mut frame = Frame::new(&self.config, input, dt, &mut self.pending);
        self.active.scene_mut().update(&mut frame);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.active.scene().draw(&self.config, canvas);
    }

    /// Apply the pending transition, if any.
    ///
    /// A scene change runs the old scene's exit hook, drops its data and
    /// enters the target fresh. `Quit` skips exit hooks entirely.
    pub fn commit_pending_transition(&mut self) -> Flow {
        match self.pending.take() {
            None => Flow::Continue,
            Some(Transition::Quit) => {
                log::info!("Quit requested from {:?}", self.active.id());
                Flow::Quit
            }
            Some(Transition::To(target)) => {
                let from = self.active.id();
                self.active.scene_mut().exit(&self.config);
                self.active = ActiveScene::enter(target, &self.config);
                log::info!("Scene {:?} -> {:?}", from, target);
                Flow::Continue
            }
        }
    }

    /// One full frame: update, draw, then commit
    pub fn step(&mut self, input: &dyn Input, dt: f32, canvas: &mut dyn Canvas) -> Flow {
        self.update(input, dt);
        self.draw(canvas);
        self.commit_pending_transition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Key, KeyboardState, RecordingCanvas};

    fn machine() -> SceneMachine {
        SceneMachine::new(GameConfig::default())
    }

    fn tap(key: Key) -> KeyboardState {
        let mut keys = KeyboardState::new();
        keys.press(key);
        keys
    }

    #[test]
    fn test_starts_in_menu() {
        let m = machine();
        assert_eq!(m.current(), SceneId::Menu);
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let mut m = machine();
        assert_eq!(m.commit_pending_transition(), Flow::Continue);
        assert_eq!(m.current(), SceneId::Menu);
    }

    #[test]
    fn test_last_request_wins() {
        let mut m = machine();
        m.request_transition(Transition::To(SceneId::Dead));
        m.request_transition(Transition::To(SceneId::Playing));
        assert_eq!(m.pending(), Some(Transition::To(SceneId::Playing)));

        assert_eq!(m.commit_pending_transition(), Flow::Continue);
        assert_eq!(m.current(), SceneId::Playing);
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn test_draw_after_request_renders_old_scene() {
        let mut m = machine();
        let mut canvas = RecordingCanvas::new();

        // Confirm on "Play" requests Playing during update
        let flow = m.step(&tap(Key::Confirm), 1.0 / 60.0, &mut canvas);
        assert_eq!(flow, Flow::Continue);

        // The frame was still drawn by the menu
        assert_eq!(canvas.texts(), vec!["Breakout", "Play", "Quit"]);
        // ...and the commit happened afterwards
        assert_eq!(m.current(), SceneId::Playing);
    }

    #[test]
    fn test_reentry_resets_scene_data() {
        let mut m = machine();
        m.request_transition(Transition::To(SceneId::Playing));
        m.commit_pending_transition();

        if let ActiveScene::Playing(p) = m.active_mut() {
            p.lives = 1;
            p.blocks[0].active = false;
        }

        m.request_transition(Transition::To(SceneId::Playing));
        m.commit_pending_transition();
        match m.active() {
            ActiveScene::Playing(p) => {
                assert_eq!(p.lives, 3);
                assert!(p.blocks.iter().all(|b| b.active));
            }
            other => panic!("expected Playing, got {:?}", other.id()),
        }
    }

    #[test]
    fn test_quit_stops_without_scene_change() {
        let mut m = machine();
        m.request_transition(Transition::Quit);
        assert_eq!(m.commit_pending_transition(), Flow::Quit);
        assert_eq!(m.current(), SceneId::Menu);
        assert_eq!(m.pending(), None);
    }

    #[test]
    fn test_frame_request_goes_to_pending_slot() {
        let config = GameConfig::default();
        let keys = KeyboardState::new();
        let mut pending = None;
        let mut frame = Frame::new(&config, &keys, 0.0, &mut pending);
        frame.request(Transition::Quit);
        frame.request(Transition::To(SceneId::Dead));
        assert_eq!(frame.pending(), Some(Transition::To(SceneId::Dead)));
        assert_eq!(pending, Some(Transition::To(SceneId::Dead)));
    }
}
