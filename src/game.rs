use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    EFFECT_DURATION, MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD, SLOW_MULTIPLIER, SPEED_STEP_MS,
};
use crate::effects::{EffectKind, EffectLabel, Effects};
use crate::grid::{Cell, GridSize};
use crate::input::Direction;
use crate::scheduler::TickScheduler;
use crate::settings::Settings;
use crate::snake::Snake;
use crate::spawner::{PowerUp, roll_power_up, spawn_food, spawn_power_up};
use crate::theme::ThemeId;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Ready,
    Running,
    Paused,
    GameOver,
    /// The snake filled the board and no food could be placed.
    Victory,
}

impl RunState {
    /// Status text shown to the player.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::GameOver => "Game Over",
            Self::Victory => "Victory",
        }
    }

    /// Returns true for states that only a reset leaves.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Why the run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Final figures recorded when a run ends in a collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverSummary {
    pub final_score: u32,
    /// Best score as it stood when the run started.
    pub previous_best: u32,
    pub reason: DeathReason,
}

impl GameOverSummary {
    #[must_use]
    pub fn is_new_best(&self) -> bool {
        self.final_score > self.previous_best
    }
}

/// What happened during one call to [`GameSession::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session was not running.
    Skipped,
    Advanced(TickReport),
    Collided(GameOverSummary),
    Cleared { new_best: Option<u32> },
}

/// Details of a tick in which the snake moved and survived.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickReport {
    pub ate_food: bool,
    pub picked: Option<EffectKind>,
    /// Set when the score beat the best score; carries the new best.
    pub new_best: Option<u32>,
    /// The tick timer was re-armed with a different interval.
    pub rescheduled: bool,
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: GridSize,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub power_up: Option<PowerUp>,
    pub score: u32,
    pub best_score: u32,
    pub status: RunState,
    pub effects: Vec<EffectLabel>,
    pub theme: ThemeId,
    pub tick_interval: Duration,
    pub game_over: Option<GameOverSummary>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Cell,
    pub power_up: Option<PowerUp>,
    pub score: u32,
    pub effects: Effects,
    best_score: u32,
    best_at_start: u32,
    base_interval: Duration,
    status: RunState,
    scheduler: TickScheduler,
    paused_at: Option<Instant>,
    game_over: Option<GameOverSummary>,
    tick_count: u64,
    settings: Settings,
    grid: GridSize,
    seed: Option<u64>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(settings: Settings, best_score: u32) -> Self {
        Self::with_rng(settings, best_score, None, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    ///
    /// Every reset reseeds, so resets produce identical boards.
    #[must_use]
    pub fn new_with_seed(settings: Settings, best_score: u32, seed: u64) -> Self {
        Self::with_rng(settings, best_score, Some(seed), StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, best_score: u32, seed: Option<u64>, rng: StdRng) -> Self {
        let grid = settings.grid_size.grid();
        let snake = Snake::spawn(grid);
        let mut session = Self {
            food: snake.head(),
            snake,
            power_up: None,
            score: 0,
            effects: Effects::default(),
            best_score,
            best_at_start: best_score,
            base_interval: settings.speed.tick_interval(),
            status: RunState::Ready,
            scheduler: TickScheduler::default(),
            paused_at: None,
            game_over: None,
            tick_count: 0,
            settings,
            grid,
            seed,
            rng,
        };
        session.reset(settings);
        session
    }

    /// Reinitializes every entity from `settings` and returns to `Ready`.
    pub fn reset(&mut self, settings: Settings) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        self.scheduler.cancel();
        self.settings = settings;
        self.grid = settings.grid_size.grid();
        self.snake = Snake::spawn(self.grid);
        self.power_up = None;
        self.food = spawn_food(&mut self.rng, self.grid, &self.snake, None)
            .expect("a fresh board always has free cells");
        self.score = 0;
        self.effects.clear();
        self.best_at_start = self.best_score;
        self.base_interval = settings.speed.tick_interval();
        self.status = RunState::Ready;
        self.paused_at = None;
        self.game_over = None;
        self.tick_count = 0;

        tracing::debug!(?settings, "session reset");
    }

    /// `Ready -> Running`. Returns whether the transition happened.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.status != RunState::Ready {
            return false;
        }

        self.scheduler.cancel();
        self.status = RunState::Running;
        self.scheduler.schedule(self.effective_interval(now), now);
        tracing::info!(
            interval_ms = self.base_interval.as_millis() as u64,
            "run started"
        );
        true
    }

    /// `Running -> Paused`. Returns whether the transition happened.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.status != RunState::Running {
            return false;
        }

        self.scheduler.cancel();
        self.paused_at = Some(now);
        self.status = RunState::Paused;
        tracing::debug!("paused");
        true
    }

    /// `Paused -> Running`, keeping effect time left unchanged.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.status != RunState::Paused {
            return false;
        }

        if let Some(pause_start) = self.paused_at.take() {
            self.effects.shift_after_pause(pause_start, now);
        }
        self.status = RunState::Running;
        self.scheduler.schedule(self.effective_interval(now), now);
        tracing::debug!("resumed");
        true
    }

    /// Flips between `Running` and `Paused`; ignored in other states.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        match self.status {
            RunState::Running => self.pause(now),
            RunState::Paused => self.resume(now),
            _ => false,
        }
    }

    /// Buffers a heading for the next tick. Returns whether it was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        match self.status {
            RunState::Ready | RunState::Running => self.snake.buffer_direction(direction),
            _ => false,
        }
    }

    /// Runs a tick if the scheduler says one is due.
    pub fn tick_if_due(&mut self, now: Instant) -> TickOutcome {
        if self.status != RunState::Running || !self.scheduler.fire_if_due(now) {
            return TickOutcome::Skipped;
        }
        self.tick(now)
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.status != RunState::Running {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        self.snake.commit_direction();

        let next_head = self.snake.next_head();
        let will_grow = next_head == self.food;
        let picked = self.power_up.filter(|power_up| power_up.cell == next_head);

        if !next_head.is_within_bounds(self.grid) {
            return TickOutcome::Collided(self.end_run(DeathReason::WallCollision));
        }

        let ghost = self.effects.is_active(EffectKind::Ghost, now);
        if !ghost && self.snake.blocks(next_head, will_grow) {
            return TickOutcome::Collided(self.end_run(DeathReason::SelfCollision));
        }

        self.snake.advance(next_head, will_grow);

        let mut report = TickReport::default();

        if will_grow {
            report.ate_food = true;
            self.score += POINTS_PER_FOOD;
            if self.score > self.best_score {
                self.best_score = self.score;
                report.new_best = Some(self.score);
            }

            let Some(food) = self.place_food() else {
                self.scheduler.cancel();
                self.status = RunState::Victory;
                tracing::info!(score = self.score, "board cleared");
                return TickOutcome::Cleared {
                    new_best: report.new_best,
                };
            };
            self.food = food;

            if self.power_up.is_none() && roll_power_up(&mut self.rng) {
                self.power_up = spawn_power_up(&mut self.rng, self.grid, &self.snake, self.food);
            }

            self.speed_up();
        }

        if let Some(power_up) = picked {
            self.effects.activate(power_up.kind, now, EFFECT_DURATION);
            self.power_up = None;
            report.picked = Some(power_up.kind);
            tracing::debug!(kind = power_up.kind.label(), "power-up picked");
        }

        let effective = self.effective_interval(now);
        if self.scheduler.interval() != Some(effective) {
            self.scheduler.schedule(effective, now);
            report.rescheduled = true;
        }

        TickOutcome::Advanced(report)
    }

    /// Delay between ticks after applying the slow effect.
    #[must_use]
    pub fn effective_interval(&self, now: Instant) -> Duration {
        if !self.effects.is_active(EffectKind::Slow, now) {
            return self.base_interval;
        }

        let slowed = self.base_interval.as_millis() as f64 * SLOW_MULTIPLIER;
        Duration::from_millis(slowed.round() as u64)
    }

    /// Builds the read-only view handed to rendering.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            power_up: self.power_up,
            score: self.score,
            best_score: self.best_score,
            status: self.status,
            effects: self.effects.labels(now),
            theme: self.settings.theme,
            tick_interval: self.scheduler.interval().unwrap_or(self.base_interval),
            game_over: self.game_over,
        }
    }

    #[must_use]
    pub fn status(&self) -> RunState {
        self.status
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    #[cfg(test)]
    pub(crate) fn set_base_interval(&mut self, interval: Duration) {
        self.base_interval = interval;
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn game_over(&self) -> Option<GameOverSummary> {
        self.game_over
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    fn end_run(&mut self, reason: DeathReason) -> GameOverSummary {
        self.scheduler.cancel();
        self.status = RunState::GameOver;

        let summary = GameOverSummary {
            final_score: self.score,
            previous_best: self.best_at_start,
            reason,
        };
        self.game_over = Some(summary);
        tracing::info!(score = self.score, ?reason, "game over");
        summary
    }

    /// New food cell; a power-up sitting on the last free cell gives way.
    fn place_food(&mut self) -> Option<Cell> {
        if let Some(cell) = spawn_food(&mut self.rng, self.grid, &self.snake, self.power_up) {
            return Some(cell);
        }

        let cell = spawn_food(&mut self.rng, self.grid, &self.snake, None)?;
        self.power_up = None;
        Some(cell)
    }

    fn speed_up(&mut self) {
        let floor = Duration::from_millis(MIN_TICK_INTERVAL_MS);
        self.base_interval = self
            .base_interval
            .saturating_sub(Duration::from_millis(SPEED_STEP_MS))
            .max(floor);
    }
}
