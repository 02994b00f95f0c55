use dialclock_core::modules::clock;
use iced::{
    Element, Length, Theme,
    widget::{canvas, checkbox, column, container},
};

use super::state::{App, Message, TOP_BAR_HEIGHT};
use crate::views::dial::Dial;

impl App {
    pub fn title(&self) -> String {
        self.config.window.title.clone()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn view(&self) -> Element<'_, Message> {
        let ticking = checkbox("Ticking Sound", self.clock.ticking())
            .on_toggle(|enabled| Message::Clock(clock::Message::ToggleTicking(enabled)));

        let top = container(ticking)
            .padding(5)
            .width(Length::Fill)
            .height(Length::Fixed(TOP_BAR_HEIGHT));

        let dial = canvas(Dial::new(
            self.container.layout(),
            self.clock.rotation(),
            &self.config.appearance,
            &self.face_cache,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let background = self.config.appearance.background();

        container(column![top, dial])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(background.into()),
                ..container::Style::default()
            })
            .into()
    }
}
