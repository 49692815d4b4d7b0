//! Debug module: feature gated periodic simulation stats logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::{sim_stats_logging_system, StatsLogState};

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct SimStatsLogPlugin;

#[cfg(feature = "debug")]
impl Plugin for SimStatsLogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatsLogState>()
            .add_systems(Update, sim_stats_logging_system);
    }
}
