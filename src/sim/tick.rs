//! Fixed timestep simulation tick and session control
//!
//! `tick` advances the world by one frame. `Session` wraps it with the
//! Running/GameOver state machine, rendering and restart.

use super::collision::{resolve_landing, touches_obstacle};
use super::generator::{Spawned, populate_ahead};
use super::physics::{extend_ground, integrate, prune, scroll};
use super::state::{Facing, GamePhase, World};
use crate::Tuning;
use crate::renderer::{
    ContinuePrompt, DrawCmd, DrawList, PromptChoice, SpriteAnimator, draw_score, draw_world,
};

/// Logical input keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Jump,
}

/// Input state written by the host between ticks, read at tick start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Direction of the most recently pressed arrow (Idle once released)
    pub held: Facing,
    /// Jump requested since the last tick
    pub jump: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Right => self.held = Facing::Right,
            Key::Left => self.held = Facing::Left,
            Key::Jump => self.jump = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            // Releasing either arrow stops the player
            Key::Right | Key::Left => self.held = Facing::Idle,
            Key::Jump => {}
        }
    }

    /// Forget held arrows and any queued jump
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub landed: bool,
    pub died: bool,
    pub spawned: Spawned,
}

/// Copy input into the player; a jump only starts from a non-jumping state
fn apply_input(world: &mut World, input: &mut InputState, tuning: &Tuning) {
    let player = &mut world.player;
    player.facing = input.held;
    player.vel.x = input.held.sign() * tuning.run_speed;

    if std::mem::take(&mut input.jump) && !player.jumping {
        player.vel.y = -tuning.jump_speed;
        player.jumping = true;
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &mut InputState, tuning: &Tuning) -> TickEvents {
    let mut events = TickEvents::default();

    apply_input(world, input, tuning);

    scroll(world, tuning);
    events.spawned = populate_ahead(world, tuning);
    extend_ground(world, tuning);

    integrate(world, tuning);
    events.landed = resolve_landing(
        &mut world.player,
        std::iter::once(&world.ground).chain(world.ledges.iter()),
    );
    prune(world);

    events.died = touches_obstacle(&world.player, &world.obstacles);
    events
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// A play session: world, phase and presentation state
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub phase: GamePhase,
    pub animator: SpriteAnimator,
    /// Frames simulated since the last (re)start
    pub ticks: u64,
    tuning: Tuning,
}

impl Session {
    /// Start a session; fails if the tuning can't support generation
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, crate::TuningError> {
        tuning.validate()?;
        log::info!("Session started with seed {}", seed);
        Ok(Self {
            world: World::new(seed),
            phase: GamePhase::Running,
            animator: SpriteAnimator::default(),
            ticks: 0,
            tuning,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> f32 {
        self.world.score()
    }

    pub fn prompt(&self) -> ContinuePrompt {
        ContinuePrompt::new(self.tuning.viewport_width, self.tuning.viewport_height)
    }

    /// Run one frame and describe it in `out`.
    ///
    /// Returns `Stop` once the session is over; the host must not schedule
    /// another frame until a restart.
    pub fn frame(&mut self, input: &mut InputState, out: &mut DrawList) -> LoopControl {
        if self.phase == GamePhase::GameOver {
            return LoopControl::Stop;
        }

        out.clear();
        out.push(DrawCmd::Clear);

        let events = tick(&mut self.world, input, &self.tuning);
        self.ticks += 1;

        draw_world(&self.world, &mut self.animator, &self.tuning, out);
        draw_score(self.score(), &self.tuning, out);

        if events.died && self.enter_game_over() {
            self.prompt().draw(out);
            return LoopControl::Stop;
        }

        log::trace!(
            "tick {} offset={:.0} player=({:.1}, {:.1})",
            self.ticks,
            self.world.offset_x,
            self.world.player.pos.x,
            self.world.player.pos.y
        );
        LoopControl::Continue
    }

    /// Switch to GameOver. Returns false if already there.
    pub fn enter_game_over(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over at score {} after {} ticks",
            self.score().floor(),
            self.ticks
        );
        true
    }

    /// Handle a click on the surface. Only meaningful on the game over
    /// prompt; a restart click resets the session and `input`.
    pub fn click(&mut self, x: f32, y: f32, input: &mut InputState) -> Option<PromptChoice> {
        if self.phase != GamePhase::GameOver {
            return None;
        }

        let choice = self.prompt().hit_test(x, y)?;
        match choice {
            PromptChoice::Restart => self.restart(input),
            PromptChoice::Exit => log::info!("Player chose to exit"),
        }
        Some(choice)
    }

    /// Back to the starting layout, running. Keys pressed while the prompt
    /// was up are dropped.
    pub fn restart(&mut self, input: &mut InputState) {
        input.reset();
        self.world.reset();
        self.animator = SpriteAnimator::default();
        self.ticks = 0;
        self.phase = GamePhase::Running;
        log::info!("Session restarted");
    }
}
