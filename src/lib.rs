pub mod app;
pub mod auto_close;
pub mod cli;
pub mod config;
pub mod debug;
pub mod input;
pub mod render;
pub mod sim;
pub mod sprite;
pub mod timer;

// Curated re-exports
pub use app::{field_from_config, ConfigDiagnostics, DonutFieldPlugin, SaverPlugin, SimSet, SimStats};
pub use config::{SaverConfig, WindowConfig};
pub use sim::{Arena, Donut, DonutField};
pub use sprite::SpriteSource;
