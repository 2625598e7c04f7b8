/// Command-line flags for the terminal demo
use blocky_core::SceneConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The animated robot
    Rig,
    /// The 2D painter
    Paint,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "blocky-terminal", version, about = "BlockyAnimal in the terminal")]
pub struct Args {
    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Which demo to start in
    #[arg(long, value_enum, default_value_t = Mode::Rig)]
    pub mode: Mode,

    /// Segments per cone
    #[arg(long)]
    pub cone_segments: Option<u32>,

    /// Segments per painted circle
    #[arg(long)]
    pub circle_segments: Option<u32>,

    /// Camera zoom
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Start with every limb animated
    #[arg(long)]
    pub animate: bool,

    /// Log filter in env_logger syntax, e.g. "debug" or "blocky_core=trace"
    #[arg(long)]
    pub log: Option<String>,

    /// Append logs to this file; without it only warnings reach stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Overlay the flags that were given onto the defaults.
    pub fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::default();
        if let Some(segments) = self.cone_segments {
            config.cone_segments = segments;
        }
        if let Some(segments) = self.circle_segments {
            config.circle_segments = segments;
        }
        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        config
    }
}
