use std::sync::Arc;

use dialclock_core::{
    config::Config,
    dial::ContainerTracker,
    modules::{self, clock::Clock},
};
use dialclock_proto::ports::sound::SoundPort;
use iced::{Size, Task, widget::canvas};
use log::debug;

/// Height reserved for the bar holding the ticking checkbox.
pub const TOP_BAR_HEIGHT: f32 = 30.;

pub struct App {
    pub(super) sound:      Arc<dyn SoundPort>,
    pub(super) container:  ContainerTracker,
    pub(super) face_cache: canvas::Cache,
    pub config: Config,
    pub clock:  Clock,
}

#[derive(Debug, Clone)]
pub enum Message {
    Clock(modules::clock::Message),
    WindowResized(Size),
}

impl App {
    pub fn new(
        (config, sound): (Config, Arc<dyn SoundPort>),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || {
            let mut app = App {
                sound,
                container: ContainerTracker::new(),
                face_cache: canvas::Cache::new(),
                clock: Clock::new(&config.clock),
                config,
            };

            let initial = Size::new(app.config.window.width, app.config.window.height);
            app.resize_window(initial);

            (app, Task::none())
        }
    }

    /// Feed a new window size into the face layout. Returns `true` when the
    /// face has to be redrawn.
    pub(super) fn resize_window(&mut self, size: Size) -> bool {
        let height = (size.height - TOP_BAR_HEIGHT).max(0.);
        let changed = self.container.resize(size.width, height);

        if changed {
            debug!("Container resized to {}x{height}", size.width);
            self.face_cache.clear();
        }

        changed
    }
}
