//! Settings drawer shown beside the active section

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Background, Border};
use cosmic::iced_widget::{column, row, toggler};
use cosmic::widget::{container, dropdown, text};

use crate::fl;

/// Build the settings drawer element
pub fn build_settings_drawer<'a, Msg: Clone + 'static>(
    device_options: &'a [String],
    selected_device: usize,
    on_device_select: impl Fn(usize) -> Msg + Send + Sync + 'static,
    mirror_enabled: bool,
    on_mirror_toggle: impl Fn(bool) -> Msg + 'a,
    space_s: u16,
) -> Element<'a, Msg> {
    let device_row = column![
        text::body(fl!("camera-device")),
        dropdown(device_options, Some(selected_device), on_device_select),
    ]
    .spacing(space_s / 2);

    let mirror_row = row![
        text::body(fl!("mirror-preview")),
        cosmic::widget::horizontal_space(),
        toggler(mirror_enabled).on_toggle(on_mirror_toggle).size(24.0),
    ]
    .spacing(space_s)
    .align_y(cosmic::iced_core::Alignment::Center)
    .width(Length::Fill);

    let drawer_content: Element<'_, Msg> = column![
        text::heading(fl!("settings")),
        device_row,
        mirror_row,
        text::caption(fl!("settings-apply-hint")),
    ]
    .spacing(space_s)
    .padding(space_s)
    .width(Length::Fixed(260.0))
    .into();

    container(drawer_content)
        .height(Length::Fill)
        .class(cosmic::theme::Container::Custom(Box::new(|theme| {
            let cosmic_theme = theme.cosmic();
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(
                    cosmic_theme.background.component.base.into(),
                )),
                text_color: Some(cosmic_theme.background.component.on.into()),
                border: Border {
                    radius: cosmic_theme.corner_radii.radius_s.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
}
