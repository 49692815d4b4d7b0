#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::app::SimStats;
#[cfg(feature = "debug")]
use crate::sim::DonutField;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Clone)]
pub struct StatsLogState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub lines_written: u64,
}

#[cfg(feature = "debug")]
impl Default for StatsLogState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            lines_written: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn sim_stats_logging_system(
    time: Res<Time>,
    mut state: ResMut<StatsLogState>,
    stats: Res<SimStats>,
    field: Option<Res<DonutField>>,
) {
    let Some(field) = field else {
        return;
    };
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        state.lines_written += 1;
        let screen = field.arena().screen;
        info!(
            "SIM tick={} t={:.3}s donuts={} contacts={} generation={} screen={}x{}",
            stats.ticks,
            time.elapsed_secs(),
            field.count(),
            stats.contacts,
            field.generation(),
            screen.x,
            screen.y
        );
    }
}
