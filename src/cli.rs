use std::path::PathBuf;

use clap::Parser;

use crate::config::SaverConfig;

pub const DEFAULT_CONFIG: &str = "assets/config/saver.ron";
pub const LOCAL_OVERLAY: &str = "assets/config/saver.local.ron";

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Bouncing donut screensaver", version)]
pub struct Args {
    /// RON config file. `saver.local.ron` next to the default config is layered on top when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Initial number of donuts (clamped to the configured min/max).
    #[arg(long)]
    pub count: Option<usize>,
    /// Seed for reproducible spawns.
    #[arg(long)]
    pub seed: Option<u64>,
    /// PNG to use instead of the built-in donut.
    #[arg(long)]
    pub sprite: Option<PathBuf>,
    /// Run in a window instead of fullscreen.
    #[arg(long)]
    pub windowed: bool,
    /// Timer reference instant, Unix seconds (UTC).
    #[arg(long, allow_hyphen_values = true)]
    pub timer_start: Option<i64>,
    /// Hide the elapsed-time overlay.
    #[arg(long, conflicts_with = "timer_start")]
    pub no_timer: bool,
    /// Exit after this many seconds.
    #[arg(long)]
    pub auto_close: Option<f32>,
}

impl Args {
    /// Config files to layer, in order. Missing optional overlays are skipped.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        match &self.config {
            Some(p) => vec![p.clone()],
            None => {
                let mut paths = Vec::new();
                for p in [DEFAULT_CONFIG, LOCAL_OVERLAY] {
                    let p = PathBuf::from(p);
                    if p.exists() {
                        paths.push(p);
                    }
                }
                paths
            }
        }
    }

    /// Command line wins over anything read from files.
    pub fn apply(&self, cfg: &mut SaverConfig) {
        if let Some(count) = self.count {
            cfg.donuts.initial = count;
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(sprite) = &self.sprite {
            cfg.donuts.sprite = Some(sprite.display().to_string());
        }
        if self.windowed {
            cfg.window.fullscreen = false;
        }
        if let Some(start) = self.timer_start {
            cfg.timer.enabled = true;
            cfg.timer.start = Some(start);
        }
        if self.no_timer {
            cfg.timer.enabled = false;
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
    }
}
