//! Game simulation
//!
//! Scenes, collision geometry and the Playing physics. Nothing here touches
//! a window or a GPU; input and drawing go through `crate::platform`.

pub mod dead;
pub mod geometry;
pub mod menu;
pub mod playing;
pub mod scene;

pub use dead::{DEAD_LABEL, DeadScene};
pub use geometry::{Penetration, Rect, Side, flush_against, reflect};
pub use menu::MenuScene;
pub use playing::{Block, FrameEvents, LAUNCH_DIRECTION, PlayingScene, layout_blocks};
pub use scene::{ActiveScene, Flow, Frame, Scene, SceneId, SceneMachine, Transition};
