use std::time::{Duration, Instant};

use powerup_snake::config::{EFFECT_DURATION, SPEED_STEP_MS};
use powerup_snake::effects::EffectKind;
use powerup_snake::game::{DeathReason, GameSession, RunState, TickOutcome};
use powerup_snake::grid::Cell;
use powerup_snake::input::Direction;
use powerup_snake::settings::{BoardSize, Settings, SpeedPreset};
use powerup_snake::spawner::PowerUp;

fn medium_board() -> Settings {
    Settings {
        grid_size: BoardSize::Medium,
        speed: SpeedPreset::Normal,
        ..Settings::default()
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let start = Instant::now();
    let mut session = GameSession::new_with_seed(medium_board(), 0, 42);
    assert_eq!(session.status(), RunState::Ready);
    assert!(session.start(start));

    session.food = Cell::new(8, 7);
    let mut now = start + Duration::from_millis(140);
    let outcome = session.tick_if_due(now);
    assert!(matches!(outcome, TickOutcome::Advanced(report) if report.ate_food));
    assert_eq!(session.score, 10);
    assert_eq!(session.snake.len(), 4);
    assert_eq!(
        session.base_interval(),
        Duration::from_millis(140 - SPEED_STEP_MS)
    );
    assert_eq!(session.scheduler().interval(), Some(session.base_interval()));

    session.food = Cell::new(14, 14);
    session.power_up = None;
    assert!(session.steer(Direction::Up));

    let mut ticks = 0;
    while session.status() == RunState::Running {
        now += session.base_interval();
        session.tick_if_due(now);
        ticks += 1;
        assert!(ticks <= 8, "snake should reach the top wall within 8 ticks");
    }

    assert_eq!(session.status(), RunState::GameOver);
    assert_eq!(session.snake.head(), Cell::new(8, 0));
    let summary = session.game_over().expect("summary recorded");
    assert_eq!(summary.reason, DeathReason::WallCollision);
    assert_eq!(summary.final_score, 10);
    assert!(!session.scheduler().is_armed());
}

#[test]
fn slow_effect_survives_a_pause_and_expires_on_schedule() {
    let start = Instant::now();
    let mut session = GameSession::new_with_seed(medium_board(), 0, 7);
    session.start(start);
    session.food = Cell::new(0, 14);
    session.power_up = Some(PowerUp {
        cell: Cell::new(8, 7),
        kind: EffectKind::Slow,
    });

    let picked_at = start + Duration::from_millis(140);
    session.tick_if_due(picked_at);
    assert_eq!(
        session.scheduler().interval(),
        Some(Duration::from_millis(224))
    );

    let pause_at = picked_at + Duration::from_secs(1);
    session.pause(pause_at);
    let resume_at = pause_at + Duration::from_secs(120);
    session.resume(resume_at);

    assert_eq!(
        session.effects.remaining(EffectKind::Slow, resume_at),
        Some(EFFECT_DURATION - Duration::from_secs(1))
    );
    assert_eq!(
        session.scheduler().next_due(),
        Some(resume_at + Duration::from_millis(224))
    );

    let after_expiry = resume_at + EFFECT_DURATION;
    assert!(!session.effects.is_active(EffectKind::Slow, after_expiry));
    session.tick(after_expiry);
    assert_eq!(
        session.scheduler().interval(),
        Some(Duration::from_millis(140))
    );
}

#[test]
fn reset_from_game_over_restores_initial_board() {
    let now = Instant::now();
    let mut session = GameSession::new_with_seed(medium_board(), 0, 99);
    let initial = session.snapshot(now);

    session.start(now);
    session.food = Cell::new(0, 0);
    session.steer(Direction::Down);
    while session.status() == RunState::Running {
        session.tick(now);
    }
    assert_eq!(session.status(), RunState::GameOver);

    session.reset(medium_board());
    assert_eq!(session.snapshot(now), initial);
}
