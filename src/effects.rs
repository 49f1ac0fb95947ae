use std::fmt;
use std::time::{Duration, Instant};

/// Timed effects granted by power-ups.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EffectKind {
    /// Stretches the tick interval.
    Slow,
    /// Lets the head pass through the body. Walls still kill.
    Ghost,
}

impl EffectKind {
    pub const ALL: [Self; 2] = [Self::Slow, Self::Ghost];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Ghost => "Ghost",
        }
    }
}

/// Expiry timestamps for every effect.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Effects {
    slow_until: Option<Instant>,
    ghost_until: Option<Instant>,
}

impl Effects {
    /// Starts `kind` for `duration`, replacing whatever was left of it.
    pub fn activate(&mut self, kind: EffectKind, now: Instant, duration: Duration) {
        *self.slot_mut(kind) = Some(now + duration);
    }

    #[must_use]
    pub fn is_active(&self, kind: EffectKind, now: Instant) -> bool {
        self.slot(kind).is_some_and(|until| now < until)
    }

    /// Time left on `kind`, or `None` when it is not active.
    #[must_use]
    pub fn remaining(&self, kind: EffectKind, now: Instant) -> Option<Duration> {
        self.slot(kind)
            .filter(|until| now < *until)
            .map(|until| until - now)
    }

    /// Pushes still-running expiries back by the length of a pause.
    ///
    /// Effects that ran out before `pause_start` stay expired.
    pub fn shift_after_pause(&mut self, pause_start: Instant, pause_end: Instant) {
        let paused_for = pause_end.saturating_duration_since(pause_start);
        for kind in EffectKind::ALL {
            let slot = self.slot_mut(kind);
            if let Some(until) = slot.as_mut() {
                if *until > pause_start {
                    *until += paused_for;
                }
            }
        }
    }

    /// Labels for every active effect, in a fixed order.
    #[must_use]
    pub fn labels(&self, now: Instant) -> Vec<EffectLabel> {
        EffectKind::ALL
            .into_iter()
            .filter_map(|kind| {
                self.remaining(kind, now).map(|left| EffectLabel {
                    kind,
                    remaining_secs: left.as_millis().div_ceil(1000) as u64,
                })
            })
            .collect()
    }

    /// Drops every effect.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&self, kind: EffectKind) -> Option<Instant> {
        match kind {
            EffectKind::Slow => self.slow_until,
            EffectKind::Ghost => self.ghost_until,
        }
    }

    fn slot_mut(&mut self, kind: EffectKind) -> &mut Option<Instant> {
        match kind {
            EffectKind::Slow => &mut self.slow_until,
            EffectKind::Ghost => &mut self.ghost_until,
        }
    }
}

/// Display label for an active effect, e.g. `Ghost 3s`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EffectLabel {
    pub kind: EffectKind,
    pub remaining_secs: u64,
}

impl fmt::Display for EffectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}s", self.kind.label(), self.remaining_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{EffectKind, EffectLabel, Effects};

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn effect_is_active_until_expiry() {
        let start = Instant::now();
        let mut effects = Effects::default();

        effects.activate(EffectKind::Slow, start, 5 * SECOND);

        assert!(effects.is_active(EffectKind::Slow, start));
        assert!(effects.is_active(EffectKind::Slow, start + 4 * SECOND));
        assert!(!effects.is_active(EffectKind::Slow, start + 5 * SECOND));
        assert!(!effects.is_active(EffectKind::Ghost, start));
    }

    #[test]
    fn activation_overwrites_instead_of_stacking() {
        let start = Instant::now();
        let mut effects = Effects::default();

        effects.activate(EffectKind::Ghost, start, 5 * SECOND);
        effects.activate(EffectKind::Ghost, start + 4 * SECOND, 2 * SECOND);

        assert_eq!(
            effects.remaining(EffectKind::Ghost, start + 4 * SECOND),
            Some(2 * SECOND)
        );
    }

    #[test]
    fn pause_preserves_remaining_time() {
        let start = Instant::now();
        let mut effects = Effects::default();
        effects.activate(EffectKind::Slow, start, 6 * SECOND);

        let pause_start = start + 2 * SECOND;
        let remaining = effects.remaining(EffectKind::Slow, pause_start);
        let pause_end = pause_start + 30 * SECOND;
        effects.shift_after_pause(pause_start, pause_end);

        assert_eq!(effects.remaining(EffectKind::Slow, pause_end), remaining);
    }

    #[test]
    fn expired_effects_stay_expired_after_pause() {
        let start = Instant::now();
        let mut effects = Effects::default();
        effects.activate(EffectKind::Ghost, start, SECOND);

        let pause_start = start + 3 * SECOND;
        let pause_end = pause_start + 10 * SECOND;
        effects.shift_after_pause(pause_start, pause_end);

        assert!(!effects.is_active(EffectKind::Ghost, pause_end));
    }

    #[test]
    fn labels_round_remaining_seconds_up() {
        let start = Instant::now();
        let mut effects = Effects::default();
        effects.activate(EffectKind::Slow, start, Duration::from_millis(2_100));
        effects.activate(EffectKind::Ghost, start, 6 * SECOND);

        let labels = effects.labels(start);
        assert_eq!(
            labels,
            vec![
                EffectLabel {
                    kind: EffectKind::Slow,
                    remaining_secs: 3,
                },
                EffectLabel {
                    kind: EffectKind::Ghost,
                    remaining_secs: 6,
                },
            ]
        );
        assert_eq!(labels[0].to_string(), "Slow 3s");
    }
}
