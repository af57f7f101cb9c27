//! Learn section view: a fixed grid of category cards

use cosmic::Element;
use cosmic::cosmic_theme::Spacing;
use cosmic::iced::Length;
use cosmic::iced_widget::{column, row, scrollable};
use cosmic::widget::{button, container, icon, text};

use crate::domain::Category;
use crate::fl;
use crate::session::messages::LearnMsg;

pub fn view<'a>(spacing: Spacing) -> Element<'a, LearnMsg> {
    let cards = Category::ALL
        .iter()
        .map(|&category| category_card(category, spacing));

    let page = column![
        text::title1(fl!("learn-heading")),
        row(cards).spacing(spacing.space_m),
    ]
    .spacing(spacing.space_l)
    .padding(spacing.space_l);

    scrollable(page).into()
}

fn category_card<'a>(category: Category, spacing: Spacing) -> Element<'a, LearnMsg> {
    let content = column![
        icon::from_name(category.icon_name()).size(32).icon(),
        text::title4(category.name()),
        text::body(fl!("signs-to-learn", count = category.sign_count())),
        button::suggested(fl!("start-learning")).on_press(LearnMsg::StartLearning(category)),
    ]
    .spacing(spacing.space_s);

    container(content)
        .padding(spacing.space_m)
        .width(Length::FillPortion(1))
        .class(cosmic::theme::Container::Card)
        .into()
}
