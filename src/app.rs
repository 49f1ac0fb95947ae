use std::time::{Duration, Instant};

use crate::config::FRAME_INTERVAL;
use crate::game::{GameSession, RunState, Snapshot, TickOutcome};
use crate::input::{GameInput, SettingKey};
use crate::score::ScoreStore;
use crate::settings::{Settings, SettingsFile};

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// Owns the session and its collaborators for the lifetime of the program.
#[derive(Debug)]
pub struct App<S: ScoreStore> {
    session: GameSession,
    store: S,
    /// Settings for the next reset; may differ from the running session's.
    settings: Settings,
    settings_file: Option<SettingsFile>,
}

impl<S: ScoreStore> App<S> {
    /// Builds the controller, loading the best score from `store`.
    #[must_use]
    pub fn new(
        store: S,
        settings: Settings,
        settings_file: Option<SettingsFile>,
        seed: Option<u64>,
    ) -> Self {
        let best_score = store.load_best_score();
        let session = match seed {
            Some(seed) => GameSession::new_with_seed(settings, best_score, seed),
            None => GameSession::new(settings, best_score),
        };

        Self {
            session,
            store,
            settings,
            settings_file,
        }
    }

    /// Applies one input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> AppControl {
        match input {
            GameInput::Direction(direction) => {
                self.session.steer(direction);
            }
            GameInput::Pause => {
                self.session.toggle_pause(now);
            }
            GameInput::Confirm => match self.session.status() {
                RunState::Ready => {
                    self.session.start(now);
                }
                RunState::Paused => {
                    self.session.resume(now);
                }
                status if status.is_finished() => self.session.reset(self.settings),
                _ => {}
            },
            GameInput::Reset => self.session.reset(self.settings),
            GameInput::Cycle(key) => self.cycle_setting(key),
            GameInput::Quit => return AppControl::Quit,
        }

        AppControl::Continue
    }

    /// Runs a due tick and persists a beaten best score.
    pub fn tick_if_due(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.session.tick_if_due(now);

        let new_best = match outcome {
            TickOutcome::Advanced(report) => report.new_best,
            TickOutcome::Cleared { new_best } => new_best,
            TickOutcome::Skipped | TickOutcome::Collided(_) => None,
        };
        if let Some(best) = new_best {
            self.store.save_best_score(best);
        }

        outcome
    }

    /// How long the frame loop may wait for input before the next tick.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .scheduler()
            .next_due()
            .map_or(FRAME_INTERVAL, |due| {
                due.saturating_duration_since(now).min(FRAME_INTERVAL)
            })
    }

    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        self.session.snapshot(now)
    }

    /// Settings the next reset will use.
    #[must_use]
    pub fn pending_settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Settings only change between runs; a waiting board is rebuilt at once.
    fn cycle_setting(&mut self, key: SettingKey) {
        let status = self.session.status();
        if status != RunState::Ready && !status.is_finished() {
            return;
        }

        match key {
            SettingKey::GridSize => self.settings.grid_size = self.settings.grid_size.next(),
            SettingKey::Speed => self.settings.speed = self.settings.speed.next(),
            SettingKey::Theme => self.settings.theme = self.settings.theme.next(),
        }
        tracing::debug!(settings = ?self.settings, "settings changed");

        if let Some(file) = &self.settings_file {
            file.save(&self.settings);
        }
        if status == RunState::Ready {
            self.session.reset(self.settings);
        }
    }
}
