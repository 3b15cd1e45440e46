//! Playing scene: paddle, ball, lives and the block grid
//!
//! Per-frame order: launch gate, paddle motion, ball integration, wall
//! reflection (including the missed-ball check), paddle collision, block
//! collision. At most one block is resolved per frame, the first overlapping
//! one in grid scan order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Penetration, Rect, Side, flush_against, reflect};
use super::scene::{Frame, Scene, SceneId, Transition};
use crate::config::GameConfig;
use crate::platform::{Canvas, Key, colors};

/// Direction the ball takes on launch
pub const LAUNCH_DIRECTION: Vec2 = Vec2::new(1.0, 1.0);

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Cleared on the first hit; inactive blocks are neither hit nor drawn
    pub active: bool,
}

/// Lay out the full grid, row by row, all blocks active
pub fn layout_blocks(config: &GameConfig) -> Vec<Block> {
    let grid = &config.grid;
    let cell = config.grid_cell();
    let size = cell - Vec2::splat(grid.padding);

    let mut blocks = Vec::with_capacity(grid.rows * grid.cols);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = grid.origin
                + cell * Vec2::new(col as f32, row as f32)
                + Vec2::splat(grid.padding / 2.0);
            blocks.push(Block {
                rect: Rect::new(pos, size),
                active: true,
            });
        }
    }
    blocks
}

/// What happened during one playing update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    pub launched: bool,
    pub life_lost: bool,
    /// Lives ran out and Dead was requested
    pub died: bool,
    /// Paddle side the ball was pushed out through
    pub paddle_hit: Option<Side>,
    /// Grid index of the block struck and the side it was struck on
    pub block_hit: Option<(usize, Side)>,
}

/// Playing data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingScene {
    /// False while the ball waits for launch
    pub started: bool,
    pub lives: i32,
    /// Paddle top-left corner
    pub paddle: Vec2,
    /// Ball center
    pub ball: Vec2,
    /// Per-axis direction, components are ±1 once launched
    pub ball_vel: Vec2,
    pub blocks: Vec<Block>,
}

impl PlayingScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            started: false,
            lives: config.starting_lives,
            paddle: Vec2::new(config.paddle_start_x(), config.paddle_y()),
            ball: config.ball_rest_position(),
            ball_vel: Vec2::ZERO,
            blocks: layout_blocks(config),
        }
    }

    pub fn paddle_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.paddle, config.paddle_size)
    }

    pub fn active_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }

    /// Put the ball back above the paddle, waiting for launch
    pub fn reset_ball(&mut self, config: &GameConfig) {
        self.ball = config.ball_rest_position();
        self.ball_vel = Vec2::ZERO;
        self.started = false;
    }

    /// Advance one frame
    pub fn step(&mut self, frame: &mut Frame<'_>) -> FrameEvents {
        let config = frame.config;
        let dt = frame.dt;
        let mut events = FrameEvents::default();

        // Launch gate
        if !self.started {
            if frame.input.pressed(Key::Confirm) {
                self.started = true;
                self.ball_vel = LAUNCH_DIRECTION;
                events.launched = true;
            } else {
                return events;
            }
        }

        // Paddle: left and right cancel out
        let mut movement = 0.0;
        if frame.input.held(Key::Left) {
            movement -= 1.0;
        }
        if frame.input.held(Key::Right) {
            movement += 1.0;
        }
        self.paddle.x = (self.paddle.x + movement * config.paddle_speed * dt)
            .clamp(config.paddle_left_limit(), config.paddle_right_limit());

        self.ball += self.ball_vel * config.ball_speed * dt;

        if self.reflect_off_walls(config) {
            self.lives -= 1;
            events.life_lost = true;
            if self.lives <= 0 {
                frame.request(Transition::To(SceneId::Dead));
                events.died = true;
            } else {
                self.reset_ball(config);
            }
            return events;
        }

        events.paddle_hit = self.collide_paddle(config);
        events.block_hit = self.collide_blocks(config);
        events
    }

    /// Keep the ball inside the field. Returns true if it fell past the
    /// bottom edge (position untouched in that case).
    fn reflect_off_walls(&mut self, config: &GameConfig) -> bool {
        let r = config.ball_radius;

        if self.ball.x < r {
            self.ball.x = r;
            self.ball_vel.x = -self.ball_vel.x;
        } else if self.ball.x > config.width - r {
            self.ball.x = config.width - r;
            self.ball_vel.x = -self.ball_vel.x;
        }

        if self.ball.y < r {
            self.ball.y = r;
            self.ball_vel.y = -self.ball_vel.y;
        } else if self.ball.y > config.height - r {
            return true;
        }

        false
    }

    /// Bounce off the paddle. When the boxes overlap further horizontally
    /// than vertically the ball came over the top or bottom, otherwise it
    /// came in from the side its center is on. A side hit always sends the
    /// ball away from the paddle, even when the paddle ran into it.
    fn collide_paddle(&mut self, config: &GameConfig) -> Option<Side> {
        let r = config.ball_radius;
        let paddle = self.paddle_rect(config);
        let ball_box = Rect::around_circle(self.ball, r);
        if !ball_box.overlaps(&paddle) {
            return None;
        }

        // Overlap extent per axis: combined half sizes minus center distance
        let reach = (ball_box.size + paddle.size) / 2.0;
        let overlap = reach - (self.ball - paddle.center()).abs();
        let side = if overlap.x > overlap.y {
            if self.ball_vel.y > 0.0 {
                Side::Top
            } else {
                Side::Bottom
            }
        } else if self.ball.x < paddle.center().x {
            Side::Left
        } else {
            Side::Right
        };

        self.ball = flush_against(&paddle, side, self.ball, r);
        self.ball_vel = match side {
            Side::Left => Vec2::new(-self.ball_vel.x.abs(), self.ball_vel.y),
            Side::Right => Vec2::new(self.ball_vel.x.abs(), self.ball_vel.y),
            Side::Top | Side::Bottom => reflect(self.ball_vel, side),
        };
        // A paddle at its travel limit can push the ball past the wall
        self.ball.x = self.ball.x.clamp(r, config.width - r);
        Some(side)
    }

    /// Resolve against the first overlapping active block in scan order.
    /// Other overlapping blocks wait for a later frame.
    fn collide_blocks(&mut self, config: &GameConfig) -> Option<(usize, Side)> {
        let r = config.ball_radius;
        let ball_box = Rect::around_circle(self.ball, r);

        let (index, block) = self
            .blocks
            .iter_mut()
            .enumerate()
            .find(|(_, b)| b.active && ball_box.overlaps(&b.rect))?;

        let side = Penetration::between(&ball_box, &block.rect).shallowest();
        self.ball = flush_against(&block.rect, side, self.ball, r);
        self.ball_vel = reflect(self.ball_vel, side);
        block.active = false;
        Some((index, side))
    }
}

impl Scene for PlayingScene {
    fn enter(config: &GameConfig) -> Self {
        let scene = Self::new(config);
        log::info!(
            "New round: {} lives, {} blocks",
            scene.lives,
            scene.blocks.len()
        );
        scene
    }

    fn exit(&mut self, _config: &GameConfig) {
        log::info!(
            "Round over: {} lives left, {} blocks standing",
            self.lives.max(0),
            self.active_blocks()
        );
    }

    fn update(&mut self, frame: &mut Frame<'_>) {
        let events = self.step(frame);

        if events.launched {
            log::debug!("Ball launched");
        }
        if events.died {
            log::info!("Out of lives");
        } else if events.life_lost {
            log::info!("Ball lost, {} lives remaining", self.lives);
        }
        if let Some((index, side)) = events.block_hit {
            log::debug!(
                "Block {} hit on {:?}, {} remaining",
                index,
                side,
                self.active_blocks()
            );
        }
    }

    fn draw(&self, config: &GameConfig, canvas: &mut dyn Canvas) {
        canvas.clear(colors::BACKGROUND);

        let life_radius = Vec2::splat(config.life_radius);
        for i in 0..self.lives.max(0) {
            let center = Vec2::new(
                config.life_start_x + i as f32 * config.life_spacing,
                config.height - config.life_baseline,
            );
            canvas.fill_ellipse(center, life_radius, colors::LIFE);
        }

        canvas.fill_rect(self.paddle, config.paddle_size, colors::PADDLE);
        canvas.fill_ellipse(self.ball, Vec2::splat(config.ball_radius), colors::BALL);

        let cols = config.grid.cols.max(1);
        for (i, block) in self.blocks.iter().enumerate() {
            if !block.active {
                continue;
            }
            let color = colors::BLOCK_ROWS[(i / cols) % colors::BLOCK_ROWS.len()];
            canvas.fill_rect(block.rect.pos, block.rect.size, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCall, Input, KeyboardState, RecordingCanvas};
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn keys(pressed: &[Key], held: &[Key]) -> KeyboardState {
        let mut k = KeyboardState::new();
        for &key in held {
            k.press(key);
        }
        k.end_frame();
        for &key in pressed {
            k.press(key);
        }
        k
    }

    /// Run one update, returning the events and the pending transition
    fn step(
        scene: &mut PlayingScene,
        config: &GameConfig,
        input: &KeyboardState,
        dt: f32,
    ) -> (FrameEvents, Option<Transition>) {
        let mut pending = None;
        let mut frame = Frame::new(config, input as &dyn Input, dt, &mut pending);
        let events = scene.step(&mut frame);
        (events, pending)
    }

    /// Launched scene with no blocks in the way
    fn launched(config: &GameConfig) -> PlayingScene {
        let mut s = PlayingScene::new(config);
        s.blocks.clear();
        s.started = true;
        s.ball_vel = LAUNCH_DIRECTION;
        s
    }

    #[test]
    fn test_entry_state() {
        let c = config();
        let s = PlayingScene::enter(&c);
        assert!(!s.started);
        assert_eq!(s.lives, 3);
        assert_eq!(s.paddle, Vec2::new(352.0, 568.0));
        assert_eq!(s.ball, Vec2::new(400.0, 556.0));
        assert_eq!(s.ball_vel, Vec2::ZERO);
        assert_eq!(s.blocks.len(), 50);
        assert!(s.blocks.iter().all(|b| b.active));
    }

    #[test]
    fn test_block_layout() {
        let c = config();
        let blocks = layout_blocks(&c);
        let cell = c.grid_cell();

        assert_eq!(blocks[0].rect.pos, Vec2::new(10.0, 42.0));
        assert_eq!(blocks[0].rect.size, cell - Vec2::splat(4.0));
        // Second row starts one cell lower
        assert_eq!(blocks[10].rect.pos.x, 10.0);
        assert_eq!(blocks[10].rect.pos.y, 42.0 + cell.y);
        // Neighbours never overlap
        assert!(!blocks[0].rect.overlaps(&blocks[1].rect));
        assert!(!blocks[0].rect.overlaps(&blocks[10].rect));
    }

    #[test]
    fn test_launch_gate_holds_ball() {
        let c = config();
        let mut s = PlayingScene::new(&c);
        let paddle = s.paddle;

        let (events, _) = step(&mut s, &c, &keys(&[], &[Key::Left]), DT);
        assert_eq!(events, FrameEvents::default());
        assert!(!s.started);
        assert_eq!(s.paddle, paddle);
        assert_eq!(s.ball, c.ball_rest_position());
    }

    #[test]
    fn test_launch_arms_and_moves_same_frame() {
        let c = config();
        let mut s = PlayingScene::new(&c);

        // The ball launches downward and bounces straight off the paddle
        let (events, _) = step(&mut s, &c, &keys(&[Key::Confirm], &[]), DT);
        assert!(events.launched);
        assert!(s.started);
        assert_eq!(events.paddle_hit, Some(Side::Top));
        assert!(s.ball.x > 400.0);
        assert_eq!(s.ball.y, 568.0 - 8.0);
        assert_eq!(s.ball_vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_paddle_moves_and_cancels() {
        let c = config();
        let mut s = launched(&c);
        s.ball = Vec2::new(400.0, 300.0);
        let start = s.paddle.x;

        step(&mut s, &c, &keys(&[], &[Key::Right]), 0.1);
        assert!((s.paddle.x - (start + 20.0)).abs() < 1e-3);

        step(&mut s, &c, &keys(&[], &[Key::Left, Key::Right]), 0.1);
        assert!((s.paddle.x - (start + 20.0)).abs() < 1e-3);

        step(&mut s, &c, &keys(&[], &[Key::Left]), 100.0);
        assert_eq!(s.paddle.x, c.paddle_left_limit());
    }

    #[test]
    fn test_side_walls_reflect() {
        let c = config();
        let mut s = launched(&c);
        s.ball = Vec2::new(795.0, 300.0);

        step(&mut s, &c, &keys(&[], &[]), DT);
        assert_eq!(s.ball.x, 792.0);
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));

        s.ball = Vec2::new(3.0, 3.0);
        s.ball_vel = Vec2::new(-1.0, -1.0);
        step(&mut s, &c, &keys(&[], &[]), DT);
        assert_eq!(s.ball, Vec2::new(8.0, 8.0));
        assert_eq!(s.ball_vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_miss_costs_life_and_rearms() {
        let c = config();
        let mut s = launched(&c);
        s.ball = Vec2::new(100.0, 595.0);
        s.paddle.x = 600.0;

        let (events, pending) = step(&mut s, &c, &keys(&[], &[]), DT);
        assert!(events.life_lost);
        assert!(!events.died);
        assert_eq!(pending, None);
        assert_eq!(s.lives, 2);
        assert!(!s.started);
        assert_eq!(s.ball, c.ball_rest_position());
        assert_eq!(s.ball_vel, Vec2::ZERO);
        // Paddle stays where the player left it
        assert_eq!(s.paddle.x, 600.0);
    }

    #[test]
    fn test_last_life_requests_dead_and_freezes() {
        let c = config();
        let mut s = launched(&c);
        s.lives = 1;
        s.ball = Vec2::new(100.0, 595.0);

        let (events, pending) = step(&mut s, &c, &keys(&[], &[]), DT);
        assert!(events.died);
        assert_eq!(s.lives, 0);
        assert_eq!(pending, Some(Transition::To(SceneId::Dead)));
        // Nothing else touched after the request
        assert!(s.started);
        assert!(s.ball.y > 592.0);
        assert_eq!(events.paddle_hit, None);
    }

    #[test]
    fn test_paddle_top_hit() {
        let c = config();
        let mut s = launched(&c);
        // Near the right end of the paddle, sinking into its top
        s.ball = Vec2::new(s.paddle.x + 90.0, 562.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.paddle_hit, Some(Side::Top));
        assert_eq!(s.ball.y, 568.0 - 8.0);
        assert_eq!(s.ball_vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_paddle_side_hit() {
        let c = config();
        let mut s = launched(&c);
        // Clipping the paddle's left end: deep vertical overlap, shallow
        // horizontal overlap
        s.ball = Vec2::new(s.paddle.x - 4.0, 576.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(s.ball.x, s.paddle.x - 8.0);
        assert_eq!(s.ball.y, 576.0);
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_paddle_chasing_ball_past_right_end() {
        let c = config();
        let mut s = launched(&c);
        // Just past the right end, moving right, paddle moving right into it
        s.ball = Vec2::new(s.paddle.x + c.paddle_size.x + 3.0, 560.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[Key::Right]), DT);
        let paddle_right = s.paddle.x + c.paddle_size.x;
        assert_eq!(events.paddle_hit, Some(Side::Right));
        assert!((s.ball.x - (paddle_right + c.ball_radius)).abs() < 1e-3);
        assert!(s.ball.x > paddle_right);
        // Sent away from the paddle, not back into it
        assert_eq!(s.ball_vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_paddle_chasing_ball_past_left_end() {
        let c = config();
        let mut s = launched(&c);
        s.ball_vel = Vec2::new(-1.0, 1.0);
        s.ball = Vec2::new(s.paddle.x - 3.0, 560.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[Key::Left]), DT);
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert!((s.ball.x - (s.paddle.x - c.ball_radius)).abs() < 1e-3);
        assert!(s.ball.x < s.paddle.x);
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_side_hit_at_travel_limit_stays_in_field() {
        let c = config();
        let mut s = launched(&c);
        s.paddle.x = c.paddle_left_limit();
        s.ball_vel = Vec2::new(-1.0, 1.0);
        s.ball = Vec2::new(10.0, 576.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(s.ball.x, c.ball_radius);
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_paddle_bottom_hit_when_rising() {
        let c = config();
        let mut s = launched(&c);
        s.ball_vel = Vec2::new(-1.0, -1.0);
        s.ball = Vec2::new(s.paddle.x + 40.0, 590.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.paddle_hit, Some(Side::Bottom));
        assert_eq!(s.ball.y, 584.0 + 8.0);
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_block_tie_breaks_to_left() {
        let c = config();
        let mut s = PlayingScene::new(&c);
        s.started = true;
        s.ball_vel = LAUNCH_DIRECTION;
        let target = 45;
        for (i, b) in s.blocks.iter_mut().enumerate() {
            b.active = i == target;
        }
        // Centered on the block's top-left corner: left and top depths are
        // both one radius
        let corner = s.blocks[target].rect.pos;
        s.ball = corner;

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.block_hit, Some((target, Side::Left)));
        assert_eq!(s.ball, Vec2::new(corner.x - 8.0, corner.y));
        assert_eq!(s.ball_vel, Vec2::new(-1.0, 1.0));
        assert!(!s.blocks[target].active);
        assert_eq!(s.active_blocks(), 0);
    }

    #[test]
    fn test_block_from_below() {
        let c = config();
        let mut s = PlayingScene::new(&c);
        s.started = true;
        s.ball_vel = Vec2::new(1.0, -1.0);
        let rect = s.blocks[45].rect;
        s.ball = Vec2::new(rect.center().x, rect.bottom() + 6.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.block_hit, Some((45, Side::Bottom)));
        assert_eq!(s.ball.y, rect.bottom() + 8.0);
        assert_eq!(s.ball_vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_one_block_per_frame() {
        // Two neighbouring blocks overlap the ball; only the first in scan
        // order is resolved this frame
        let c = config();
        let mut s = PlayingScene::new(&c);
        s.started = true;
        s.ball_vel = Vec2::new(1.0, -1.0);
        let first = s.blocks[45].rect;
        s.ball = Vec2::new(first.right() + 2.0, first.bottom() + 4.0);

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.block_hit.map(|(i, _)| i), Some(45));
        assert!(!s.blocks[45].active);
        assert!(s.blocks[46].active);
        assert_eq!(s.active_blocks(), 49);
    }

    #[test]
    fn test_inactive_blocks_are_ignored() {
        let c = config();
        let mut s = PlayingScene::new(&c);
        s.started = true;
        s.ball_vel = LAUNCH_DIRECTION;
        s.blocks[45].active = false;
        s.ball = s.blocks[45].rect.center();

        let (events, _) = step(&mut s, &c, &keys(&[], &[]), 0.0);
        assert_eq!(events.block_hit, None);
        assert_eq!(s.ball_vel, LAUNCH_DIRECTION);
    }

    #[test]
    fn test_draw_order() {
        let c = config();
        let mut s = PlayingScene::new(&c);
        s.lives = 2;
        s.blocks.iter_mut().skip(1).for_each(|b| b.active = false);

        let mut canvas = RecordingCanvas::new();
        s.draw(&c, &mut canvas);

        let calls = &canvas.calls;
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], DrawCall::Clear(colors::BACKGROUND));
        assert!(matches!(calls[1], DrawCall::Ellipse { center, .. } if center == Vec2::new(16.0, 592.0)));
        assert!(matches!(calls[2], DrawCall::Ellipse { center, .. } if center == Vec2::new(36.0, 592.0)));
        assert!(matches!(calls[3], DrawCall::Rect { pos, .. } if pos == s.paddle));
        assert!(matches!(calls[4], DrawCall::Ellipse { center, .. } if center == s.ball));
        assert!(matches!(calls[5], DrawCall::Rect { pos, .. } if pos == s.blocks[0].rect.pos));
    }

    #[test]
    fn test_life_indicators_follow_config() {
        let c = GameConfig {
            life_start_x: 30.0,
            life_baseline: 12.0,
            ..config()
        };
        let mut s = PlayingScene::new(&c);
        s.lives = 2;

        let mut canvas = RecordingCanvas::new();
        s.draw(&c, &mut canvas);
        assert!(matches!(canvas.calls[1], DrawCall::Ellipse { center, .. } if center == Vec2::new(30.0, 588.0)));
        assert!(matches!(canvas.calls[2], DrawCall::Ellipse { center, .. } if center == Vec2::new(50.0, 588.0)));
    }

    proptest! {
        #[test]
        fn prop_ball_stays_in_field(
            x in -200.0f32..1000.0,
            y in -200.0f32..590.0,
            vx in prop::sample::select(vec![-1.0f32, 1.0]),
            vy in prop::sample::select(vec![-1.0f32, 1.0]),
        ) {
            let c = config();
            let mut s = launched(&c);
            s.paddle.x = c.paddle_left_limit();
            s.ball = Vec2::new(x, y);
            s.ball_vel = Vec2::new(vx, vy);

            let missed = s.reflect_off_walls(&c);
            prop_assert!(!missed);
            prop_assert!(s.ball.x >= 8.0 && s.ball.x <= 792.0);
            prop_assert!(s.ball.y >= 8.0 && s.ball.y <= 592.0);
        }

        #[test]
        fn prop_paddle_stays_in_limits(
            start in 8.0f32..696.0,
            left in any::<bool>(),
            right in any::<bool>(),
            dt in 0.0f32..5.0,
        ) {
            let c = config();
            let mut s = launched(&c);
            s.ball = Vec2::new(400.0, 300.0);
            s.paddle.x = start;

            let mut held = Vec::new();
            if left { held.push(Key::Left); }
            if right { held.push(Key::Right); }
            step(&mut s, &c, &keys(&[], &held), dt);

            prop_assert!(s.paddle.x >= c.paddle_left_limit());
            prop_assert!(s.paddle.x <= c.paddle_right_limit());
            if left == right {
                prop_assert_eq!(s.paddle.x, start);
            }
        }
    }
}
