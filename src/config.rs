use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical size used when not fullscreen, and the initial arena size before
    /// the first window layout arrives.
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub fullscreen: bool,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Donut Screensaver".into(),
            fullscreen: true,
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DonutConfig {
    pub initial: usize,
    pub min: usize,
    pub max: usize,
    /// Uniform sprite scale (1.0 = source pixel size).
    pub scale: f32,
    /// Sprite override on disk. `None` uses the embedded donut.
    pub sprite: Option<String>,
}
impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            initial: 6,
            min: 1,
            max: 50,
            scale: 0.5,
            sprite: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Per-axis speed magnitude in pixels per tick.
    pub speed: SpawnRange<f32>,
    /// Spin magnitude in radians per tick.
    pub spin: SpawnRange<f32>,
    pub spawn_radius_factor: f32,
    /// Simulation ticks per second.
    pub tick_hz: f64,
}
impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: SpawnRange { min: 1.5, max: 4.5 },
            spin: SpawnRange {
                min: 0.015,
                max: 0.035,
            },
            spawn_radius_factor: 0.25,
            tick_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimerConfig {
    pub enabled: bool,
    /// Reference instant as Unix seconds (UTC).
    pub start: Option<i64>,
    pub font_size: f32,
    pub left: f32,
    pub top: f32,
    pub color: (u8, u8, u8),
}
impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // 2025-09-09 21:05:45 UTC
            start: Some(1_757_451_945),
            font_size: 64.0,
            left: 30.0,
            top: 30.0,
            color: (50, 150, 50),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SaverConfig {
    pub window: WindowConfig,
    pub donuts: DonutConfig,
    pub motion: MotionConfig,
    pub timer: TimerConfig,
    /// Fixed RNG seed for reproducible spawns. `None` = entropy.
    pub seed: Option<u64>,
}

impl SaverConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Deep-merge several RON files, later ones winning, then deserialize once.
    /// Returns the config, the files that contributed, and per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<SaverConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (SaverConfig::default(), used, errors)
                }
            },
            None => (SaverConfig::default(), used, errors),
        }
    }

    /// Non-fatal sanity checks. Every entry is a human readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        let d = &self.donuts;
        if d.min == 0 {
            w.push("donuts.min is 0; the screen can end up empty".into());
        }
        if d.min > d.max {
            w.push(format!(
                "donuts.min ({}) greater than donuts.max ({}); max is raised to min",
                d.min, d.max
            ));
        } else if d.initial < d.min || d.initial > d.max {
            w.push(format!(
                "donuts.initial {} outside {}..={} -> clamped",
                d.initial, d.min, d.max
            ));
        }
        if d.max > 500 {
            w.push(format!(
                "donuts.max {} very high; collision checks are quadratic",
                d.max
            ));
        }
        if d.scale <= 0.0 {
            w.push(format!("donuts.scale {} must be > 0", d.scale));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if r.min < 0.0 {
                w.push(format!("{label} min ({}) negative; ranges are magnitudes", r.min));
            }
        }
        check_range_f32(&mut w, "motion.speed", &self.motion.speed);
        check_range_f32(&mut w, "motion.spin", &self.motion.spin);
        if !(0.0..=0.5).contains(&self.motion.spawn_radius_factor) {
            w.push(format!(
                "motion.spawn_radius_factor {} outside 0..0.5; donuts will pile on the edges",
                self.motion.spawn_radius_factor
            ));
        }
        if !(self.motion.tick_hz.is_finite() && self.motion.tick_hz > 0.0) {
            w.push(format!(
                "motion.tick_hz {} must be finite and > 0 -> using 60",
                self.motion.tick_hz
            ));
        }
        if self.timer.enabled {
            if self.timer.start.is_none() {
                w.push("timer.enabled without timer.start; overlay disabled".into());
            }
            if self.timer.font_size <= 0.0 {
                w.push(format!("timer.font_size {} must be > 0", self.timer.font_size));
            }
        }
        w
    }

    /// Ticks per second with a usable fallback for invalid values.
    pub fn tick_hz(&self) -> f64 {
        if self.motion.tick_hz.is_finite() && self.motion.tick_hz > 0.0 {
            self.motion.tick_hz
        } else {
            60.0
        }
    }
}
