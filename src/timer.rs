use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bevy::prelude::*;

use crate::app::SimSet;
use crate::config::TimerConfig;

/// Elapsed-time overlay anchored to a fixed reference instant.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ElapsedTimer {
    pub start: SystemTime,
    pub font_size: f32,
    pub left: f32,
    pub top: f32,
    pub color: Color,
}

impl ElapsedTimer {
    /// `None` when the overlay is disabled or has no reference instant.
    pub fn from_config(cfg: &TimerConfig) -> Option<Self> {
        if !cfg.enabled {
            return None;
        }
        let start = unix_to_system_time(cfg.start?);
        let (r, g, b) = cfg.color;
        Some(Self {
            start,
            font_size: cfg.font_size,
            left: cfg.left,
            top: cfg.top,
            color: Color::srgb_u8(r, g, b),
        })
    }

    pub fn text_at(&self, now: SystemTime) -> String {
        format_elapsed(elapsed_since(self.start, now))
    }
}

#[derive(Component)]
pub struct ElapsedTimerText;

pub struct ElapsedTimerPlugin;

impl Plugin for ElapsedTimerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_timer_text)
            .add_systems(Update, update_timer_text.in_set(SimSet::Present));
    }
}

pub fn unix_to_system_time(secs: i64) -> SystemTime {
    let offset = Duration::from_secs(secs.unsigned_abs());
    let t = if secs >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    t.unwrap_or(UNIX_EPOCH)
}

/// Time since `start`, or zero if `start` is still in the future.
pub fn elapsed_since(start: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(start).unwrap_or(Duration::ZERO)
}

/// `HHH:MM:SS`; hours grow past three digits rather than wrapping.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:03}:{minutes:02}:{seconds:02}")
}

fn spawn_timer_text(mut commands: Commands, timer: Option<Res<ElapsedTimer>>) {
    let Some(timer) = timer else {
        return;
    };
    commands.spawn((
        Text::new(timer.text_at(SystemTime::now())),
        TextFont {
            font_size: timer.font_size,
            ..Default::default()
        },
        TextColor(timer.color),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(timer.top),
            left: Val::Px(timer.left),
            ..Default::default()
        },
        ElapsedTimerText,
    ));
}

fn update_timer_text(
    timer: Option<Res<ElapsedTimer>>,
    mut q_text: Query<&mut Text, With<ElapsedTimerText>>,
) {
    let Some(timer) = timer else {
        return;
    };
    let label = timer.text_at(SystemTime::now());
    for mut text in &mut q_text {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_elapsed(Duration::ZERO), "000:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "000:00:59");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "001:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600 + 5 * 60 + 9)), "100:05:09");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_elapsed(Duration::from_millis(1999)), "000:00:01");
    }

    #[test]
    fn hours_widen_past_three_digits() {
        assert_eq!(format_elapsed(Duration::from_secs(1234 * 3600)), "1234:00:00");
    }

    #[test]
    fn future_start_clamps_to_zero() {
        let now = unix_to_system_time(1_000);
        let start = unix_to_system_time(2_000);
        assert_eq!(elapsed_since(start, now), Duration::ZERO);
        assert_eq!(elapsed_since(now, start), Duration::from_secs(1_000));
    }

    #[test]
    fn config_round_trip() {
        let cfg = TimerConfig::default();
        let timer = ElapsedTimer::from_config(&cfg).expect("enabled by default");
        // Default reference: 2025-09-09 21:05:45 UTC; one day later reads 024:00:00.
        let later = unix_to_system_time(1_757_451_945 + 86_400);
        assert_eq!(timer.text_at(later), "024:00:00");
        assert_eq!(timer.color, Color::srgb_u8(50, 150, 50));
    }

    #[test]
    fn disabled_or_unset_timer_yields_none() {
        let mut cfg = TimerConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(ElapsedTimer::from_config(&cfg).is_none());
        cfg.enabled = true;
        cfg.start = None;
        assert!(ElapsedTimer::from_config(&cfg).is_none());
    }

    #[test]
    fn negative_unix_seconds_before_epoch() {
        let t = unix_to_system_time(-10);
        assert_eq!(elapsed_since(t, UNIX_EPOCH), Duration::from_secs(10));
    }
}
