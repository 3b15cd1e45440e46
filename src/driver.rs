//! Frame driver: one loop iteration is update, draw, commit, present

use crate::config::GameConfig;
use crate::platform::Platform;
use crate::sim::{Flow, SceneMachine};

/// Owns the scene machine and runs it against a platform
#[derive(Debug, Clone)]
pub struct FrameDriver {
    machine: SceneMachine,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: GameConfig) -> Self {
        Self {
            machine: SceneMachine::new(config),
            frames: 0,
        }
    }

    pub fn machine(&self) -> &SceneMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut SceneMachine {
        &mut self.machine
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single frame. The pending transition is committed after the
    /// frame has been drawn and before it is presented.
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Flow {
        let dt = platform.begin_frame().max(0.0);

        self.machine.update(platform.input(), dt);
        self.machine.draw(platform.canvas());
        let flow = self.machine.commit_pending_transition();

        platform.end_frame();
        self.frames += 1;
        flow
    }

    /// Loop until the window asks to close or a scene quits, then release
    /// the window
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Flow {
        let mut flow = Flow::Continue;
        while !platform.close_requested() {
            flow = self.frame(platform);
            if flow == Flow::Quit {
                break;
            }
        }

        log::info!(
            "Frame loop finished after {} frames in {:?} ({:?})",
            self.frames,
            self.machine.current(),
            flow
        );
        platform.close();
        flow
    }
}
