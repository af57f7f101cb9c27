//! Translator section view
//!
//! Renders exactly one of the two mode layouts. The sign-to-text layout shows
//! either the "Start Webcam" trigger or the live preview, next to the
//! translation area.

use cosmic::Element;
use cosmic::cosmic_theme::Spacing;
use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::{column, row, scrollable, text_editor};
use cosmic::widget::{button, container, icon, text, tooltip};

use crate::domain::TranslationMode;
use crate::fl;
use crate::session::messages::TranslatorMsg;
use crate::session::state::TranslatorState;

/// Height of the webcam and translation panels
const PANEL_HEIGHT: f32 = 280.0;

pub fn view<'a>(
    state: &'a TranslatorState,
    spacing: Spacing,
) -> Element<'a, TranslatorMsg> {
    let body = match state.mode {
        TranslationMode::SignToText => sign_to_text(state, spacing),
        TranslationMode::TextToSign => text_to_sign(&state.sign_input, spacing),
    };

    let card = container(
        column![mode_switch(state.mode, spacing), body]
            .spacing(spacing.space_l)
            .width(Length::Fill),
    )
    .padding(spacing.space_l)
    .class(cosmic::theme::Container::Card);

    let page = column![text::title1(fl!("translator-heading")), card]
        .spacing(spacing.space_m)
        .padding(spacing.space_l)
        .max_width(960.0);

    scrollable(container(page).center_x(Length::Fill)).into()
}

/// Pill of the two mode buttons; the active one is highlighted
fn mode_switch<'a>(active: TranslationMode, spacing: Spacing) -> Element<'a, TranslatorMsg> {
    let buttons = TranslationMode::ALL.iter().map(|&mode| -> Element<'a, TranslatorMsg> {
        let label = mode.label();
        let button = if mode == active {
            button::suggested(label)
        } else {
            button::text(label)
        };
        button.on_press(TranslatorMsg::SetMode(mode)).into()
    });

    container(row(buttons).spacing(spacing.space_xxs))
        .center_x(Length::Fill)
        .into()
}

fn sign_to_text<'a>(state: &'a TranslatorState, spacing: Spacing) -> Element<'a, TranslatorMsg> {
    let webcam_surface: Element<'a, TranslatorMsg> = if state.shows_start_button() {
        let start = if state.is_requesting() {
            // Disabled until the host answers
            button::suggested(fl!("requesting-webcam"))
        } else {
            button::suggested(fl!("start-webcam")).on_press(TranslatorMsg::StartWebcam)
        };
        container(start)
            .center(Length::Fill)
            .height(Length::Fixed(PANEL_HEIGHT))
            .into()
    } else if let Some(handle) = &state.preview {
        container(
            cosmic::widget::image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill),
        )
        .height(Length::Fixed(PANEL_HEIGHT))
        .center_x(Length::Fill)
        .into()
    } else {
        // Stream granted, first frame not decoded yet
        container(cosmic::iced_widget::Space::new(Length::Fill, Length::Fill))
            .height(Length::Fixed(PANEL_HEIGHT))
            .width(Length::Fill)
            .into()
    };

    let webcam_panel = panel(fl!("webcam-input"), webcam_surface, spacing);

    let translation = state
        .translation()
        .map(str::to_string)
        .unwrap_or_else(|| fl!("translation-placeholder"));
    let translation_box = container(text::body(translation))
        .padding(spacing.space_s)
        .width(Length::Fill)
        .height(Length::Fixed(PANEL_HEIGHT - 48.0))
        .class(cosmic::theme::Container::Card);

    let actions = row![
        tooltip(
            button::icon(icon::from_name("audio-input-microphone-symbolic"))
                .on_press(TranslatorMsg::Microphone),
            text::body(fl!("microphone")),
            tooltip::Position::Bottom,
        ),
        tooltip(
            button::icon(icon::from_name("audio-volume-high-symbolic"))
                .on_press(TranslatorMsg::Speak),
            text::body(fl!("speak-translation")),
            tooltip::Position::Bottom,
        ),
    ]
    .spacing(spacing.space_s);

    let translation_panel = panel(
        fl!("translation"),
        column![translation_box, actions].spacing(spacing.space_s).into(),
        spacing,
    );

    row![webcam_panel, translation_panel]
        .spacing(spacing.space_m)
        .into()
}

fn text_to_sign<'a>(
    sign_input: &'a text_editor::Content,
    spacing: Spacing,
) -> Element<'a, TranslatorMsg> {
    let editor = text_editor(sign_input)
        .placeholder(fl!("text-to-sign-placeholder"))
        .on_action(TranslatorMsg::EditSignInput)
        .padding(spacing.space_s)
        .height(120.0);

    let translate = container(
        button::suggested(fl!("translate-to-sign")).on_press(TranslatorMsg::TranslateToSign),
    )
    .center_x(Length::Fill);

    container(column![editor, translate].spacing(spacing.space_m))
        .padding(spacing.space_m)
        .class(cosmic::theme::Container::Card)
        .into()
}

/// Titled half-width panel
fn panel<'a>(
    title: String,
    content: Element<'a, TranslatorMsg>,
    spacing: Spacing,
) -> Element<'a, TranslatorMsg> {
    container(column![text::title4(title), content].spacing(spacing.space_s))
        .padding(spacing.space_s)
        .width(Length::FillPortion(1))
        .class(cosmic::theme::Container::Card)
        .into()
}
