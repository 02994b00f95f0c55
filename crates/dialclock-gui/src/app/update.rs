use dialclock_core::modules::clock::{self, ClockEvent, TICK_INTERVAL};
use iced::{Subscription, Task, time, window};
use log::{debug, warn};

use super::state::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Clock(message) => match self.clock.update(message) {
                ClockEvent::Ticked { play_sample } => {
                    if play_sample
                        && let Err(err) = self.sound.play()
                    {
                        warn!("Failed to queue tick sample: {err}");
                    }
                }
                ClockEvent::TickingToggled(enabled) => {
                    debug!("Ticking toggled: {enabled}");
                }
            },
            Message::WindowResized(size) => {
                self.resize_window(size);
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(TICK_INTERVAL).map(|_| Message::Clock(clock::Message::Tick));
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([timer, resize])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dialclock_core::{config::Config, dial::FaceLayout, test_utils::MockSoundPort};
    use dialclock_proto::ports::sound::SoundPort;
    use iced::Size;

    use super::*;
    use crate::app::{TOP_BAR_HEIGHT, test_logger};

    fn app_with(mock: &Arc<MockSoundPort>, ticking_sound: bool) -> App {
        let mut config = Config::default();
        config.clock.ticking_sound = ticking_sound;
        let port: Arc<dyn SoundPort> = mock.clone();

        App::new((config, port))().0
    }

    #[test]
    fn tick_without_ticking_sound_stays_silent() {
        let _logger = test_logger();
        let mock = Arc::new(MockSoundPort::default());
        let mut app = app_with(&mock, false);

        let _ = app.update(Message::Clock(clock::Message::Tick));
        let _ = app.update(Message::Clock(clock::Message::Tick));

        assert_eq!(mock.play_calls(), 0);
    }

    #[test]
    fn each_tick_plays_once_when_enabled() {
        let _logger = test_logger();
        let mock = Arc::new(MockSoundPort::default());
        let mut app = app_with(&mock, true);

        let _ = app.update(Message::Clock(clock::Message::Tick));
        let _ = app.update(Message::Clock(clock::Message::Tick));

        assert_eq!(mock.play_calls(), 2);
    }

    #[test]
    fn toggling_does_not_play_until_next_tick() {
        let _logger = test_logger();
        let mock = Arc::new(MockSoundPort::default());
        let mut app = app_with(&mock, false);

        let _ = app.update(Message::Clock(clock::Message::ToggleTicking(true)));
        assert_eq!(mock.play_calls(), 0);

        let _ = app.update(Message::Clock(clock::Message::Tick));
        assert_eq!(mock.play_calls(), 1);

        let _ = app.update(Message::Clock(clock::Message::ToggleTicking(false)));
        let _ = app.update(Message::Clock(clock::Message::Tick));
        assert_eq!(mock.play_calls(), 1);
    }

    #[test]
    fn playback_errors_are_swallowed() {
        let _logger = test_logger();
        let mock = Arc::new(MockSoundPort::failing());
        let mut app = app_with(&mock, true);

        let _ = app.update(Message::Clock(clock::Message::Tick));
        assert_eq!(mock.play_calls(), 1);
    }

    #[test]
    fn window_resize_updates_the_layout() {
        let _logger = test_logger();
        let mock = Arc::new(MockSoundPort::default());
        let mut app = app_with(&mock, false);

        let _ = app.update(Message::WindowResized(Size::new(300., 600.)));
        assert_eq!(app.container.layout().map(FaceLayout::radius), Some(150.));

        let _ = app.update(Message::WindowResized(Size::new(
            1200.,
            400. + TOP_BAR_HEIGHT,
        )));
        assert_eq!(app.container.layout().map(FaceLayout::radius), Some(200.));
    }
}
