// Configuration management
//
// Handles persisted emulator configuration: video presentation and the
// trace/cycle-cap knobs the CLI exposes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Default configuration file path
const CONFIG_FILE: &str = "emulator_config.toml";

/// Emulator configuration
///
/// Stores user-configurable settings for the emulator core and its host shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video presentation settings
    pub video: VideoConfig,

    /// Trace logging / cycle budget settings
    pub trace: TraceConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target FPS (60 for NTSC)
    pub fps: u32,

    /// Enable fullscreen
    pub fullscreen: bool,
}

/// Trace/cycle-budget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Emit a nestest-format instruction trace on every step
    pub enabled: bool,

    /// Stop after this many CPU cycles, if set
    pub max_cycles: Option<u64>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
                fullscreen: false,
            },
            trace: TraceConfig {
                enabled: false,
                max_cycles: None,
            },
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist or fails to parse, falls back
    /// to the default configuration and tries to persist it so a first run
    /// seeds a usable file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
