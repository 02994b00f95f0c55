use std::time::Duration;

use chrono_tz::Tz;
use dialclock_proto::config::{ClockConfig, HourHandMode};
use log::debug;

use crate::dial::RotationSnapshot;

/// Period of the repeating timer that drives the hands.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Events emitted by the clock module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// The hands moved; `play_sample` is set while ticking sound is enabled.
    Ticked { play_sample: bool },
    TickingToggled(bool),
}

/// Message type for GUI communication
#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    ToggleTicking(bool),
}

/// Clock module - business logic only, no GUI!
#[derive(Debug)]
pub struct Clock {
    rotation: RotationSnapshot,
    timezone: Tz,
    mode:     HourHandMode,
    ticking:  bool,
}

impl Clock {
    pub fn new(config: &ClockConfig) -> Self {
        let timezone = *config.timezone;

        Self {
            rotation: RotationSnapshot::now(timezone, config.hour_hand),
            timezone,
            mode: config.hour_hand,
            ticking: config.ticking_sound,
        }
    }

    /// Hand angles for rendering
    pub fn rotation(&self) -> RotationSnapshot {
        self.rotation
    }

    pub fn ticking(&self) -> bool {
        self.ticking
    }

    /// Update clock state from GUI message
    pub fn update(&mut self, message: Message) -> ClockEvent {
        match message {
            Message::Tick => {
                self.rotation = RotationSnapshot::now(self.timezone, self.mode);

                ClockEvent::Ticked {
                    play_sample: self.ticking,
                }
            }
            Message::ToggleTicking(enabled) => {
                debug!("Ticking sound {}", if enabled { "enabled" } else { "disabled" });
                self.ticking = enabled;

                ClockEvent::TickingToggled(enabled)
            }
        }
    }
}
