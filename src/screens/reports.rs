use iced::font::Weight;
use iced::widget::canvas::Canvas;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Border, Color, Element, Fill, Font};
use lucide_icons::iced::{icon_chart_pie, icon_star, icon_users};

use crate::charts::BarChart;
use crate::error::ViewerError;
use crate::message::Message;
use crate::reports::{Block, CardIcon, ChartBlock, MetricCard, Note, RenderedPage, Section, StatCard};
use crate::theme::{CARD_BLUE, CARD_GREEN, CARD_YELLOW, ERROR_TEXT, METRIC_TEXT, MUTED_TEXT};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn view<'a>(page: &'a Result<RenderedPage, ViewerError>) -> Element<'a, Message> {
    let content = match page {
        Ok(page) => section_view(&page.body),
        Err(err) => error_view(err),
    };

    scrollable(container(content).padding(32).max_width(1280))
        .width(Fill)
        .height(Fill)
        .into()
}

fn section_view<'a>(section: &'a Section) -> Element<'a, Message> {
    let mut content = column![].spacing(24);

    if let Some(heading) = section.heading {
        content = content.push(text(heading).size(28).font(BOLD));
    }

    for block in &section.blocks {
        content = content.push(block_view(block));
    }

    content.into()
}

fn block_view<'a>(block: &'a Block) -> Element<'a, Message> {
    match block {
        Block::StatCards(cards) => row(cards.iter().map(stat_card)).spacing(24).into(),
        Block::Insights { title, items } => card(
            column![text(*title).size(20).font(BOLD)]
                .push(column(items.iter().map(|item| note_view(item, 15.0))).spacing(8))
                .spacing(16),
        ),
        Block::MetricCards {
            title,
            description,
            cards,
        } => card(
            column![
                text(*title).size(20).font(BOLD),
                text(description.as_str()).size(15).style(muted),
                row(cards.iter().map(metric_card)).spacing(16),
            ]
            .spacing(16),
        ),
        Block::Chart(chart) => chart_section(chart),
        Block::Section(section) => section_view(section),
    }
}

fn chart_section<'a>(chart: &'a ChartBlock) -> Element<'a, Message> {
    let mut section = column![text(chart.title).size(20).font(BOLD)].spacing(12);

    if let Some(description) = chart.description {
        section = section.push(text(description).size(15).style(muted));
    }

    section = section.push(
        Canvas::new(BarChart::new(chart.spec.clone()))
            .width(Fill)
            .height(chart.height),
    );

    if let Some(caption) = &chart.caption {
        section = section.push(note_view(caption, 13.0));
    }

    card(section)
}

fn stat_card<'a>(stat: &'a StatCard) -> Element<'a, Message> {
    let (icon, color) = match stat.icon {
        CardIcon::Passengers => (icon_users(), CARD_BLUE),
        CardIcon::Satisfied => (icon_star(), CARD_GREEN),
        CardIcon::Rate => (icon_chart_pie(), CARD_YELLOW),
    };

    let badge = container(icon.size(20).style(|_| text::Style {
        color: Some(Color::WHITE),
    }))
    .padding(12)
    .style(move |_| container::Style {
        background: Some(color.into()),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    container(
        row![
            badge,
            column![
                text(stat.title).size(13).style(muted),
                text(stat.value.as_str()).size(30).font(BOLD),
            ]
            .spacing(4)
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(24)
    .width(Fill)
    .style(container::bordered_box)
    .into()
}

fn metric_card<'a>(metric: &'a MetricCard) -> Element<'a, Message> {
    let value = text(metric.value.as_str()).size(22).font(BOLD);
    let value = if metric.emphasized {
        value.style(|_| text::Style {
            color: Some(METRIC_TEXT),
        })
    } else {
        value
    };

    container(column![text(metric.label.as_str()).size(13).style(muted), value].spacing(6))
        .padding(16)
        .width(Fill)
        .style(container::rounded_box)
        .into()
}

fn note_view<'a>(note: &'a Note, size: f32) -> Element<'a, Message> {
    row![
        text(note.lead).size(size).font(BOLD),
        text(note.body).size(size).width(Fill),
    ]
    .spacing(6)
    .into()
}

fn error_view<'a>(err: &'a ViewerError) -> Element<'a, Message> {
    card(
        column![
            text("This report could not be rendered").size(20).font(BOLD),
            text(err.to_string()).size(15).style(|_| text::Style {
                color: Some(ERROR_TEXT),
            }),
        ]
        .spacing(12),
    )
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Fill)
        .style(container::bordered_box)
        .into()
}

fn muted(_theme: &iced::Theme) -> text::Style {
    text::Style {
        color: Some(MUTED_TEXT),
    }
}
