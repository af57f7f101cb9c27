//! Empty state for sections that are selectable but not built

use cosmic::Element;
use cosmic::cosmic_theme::Spacing;
use cosmic::iced::Length;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::column;
use cosmic::widget::{container, icon, text};

use crate::domain::Section;
use crate::fl;

pub fn view<'a, Msg: 'static>(section: Section, spacing: Spacing) -> Element<'a, Msg> {
    let content = column![
        icon::from_name(section.icon_name()).size(64).icon(),
        text::title3(fl!("section-unavailable", section = section.label())),
        text::body(fl!("section-unavailable-hint")),
    ]
    .spacing(spacing.space_s)
    .align_x(Alignment::Center);

    container(content).center(Length::Fill).into()
}
