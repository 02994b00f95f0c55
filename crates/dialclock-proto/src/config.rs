use std::{ops::Deref, path::PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

mod appearance;
mod validation;

pub use appearance::Appearance;
pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/dialclock/config.toml";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
    #[serde(default = "default_window_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

fn default_window_width() -> f32 {
    900.
}

fn default_window_height() -> f32 {
    600.
}

fn default_window_title() -> String {
    "Analog Clock".to_owned()
}

/// How the hour hand reacts to the passing minutes.
#[derive(Deserialize, Default, Copy, Clone, Debug, PartialEq, Eq)]
pub enum HourHandMode {
    /// Hour hand moves only when the hour changes.
    #[default]
    Stepped,
    /// Hour hand creeps half a degree per minute, rounded down.
    Sweeping,
}

/// Newtype wrapper around [`Tz`] so IANA names deserialize through `FromStr`.
#[serde_as]
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TimezoneCfg(#[serde_as(as = "DisplayFromStr")] pub Tz);

impl Default for TimezoneCfg {
    fn default() -> Self {
        Self(chrono_tz::Asia::Tehran)
    }
}

impl Deref for TimezoneCfg {
    type Target = Tz;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default)]
    pub timezone: TimezoneCfg,
    #[serde(default)]
    pub hour_hand: HourHandMode,
    /// Initial state of the ticking sound checkbox.
    #[serde(default)]
    pub ticking_sound: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SoundConfig {
    /// Replaces the bundled sample when set.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            path: None,
            volume: default_volume(),
        }
    }
}

fn default_volume() -> f32 {
    1.0
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub appearance: Appearance,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window: WindowConfig::default(),
            clock: ClockConfig::default(),
            sound: SoundConfig::default(),
            appearance: Appearance::default(),
        }
    }
}
