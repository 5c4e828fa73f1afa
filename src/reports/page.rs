//! Renderer-agnostic page tree handed to the display surface.

use crate::charts::SeriesSpec;
use crate::router::ReportView;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub view: ReportView,
    pub body: Section,
}

impl RenderedPage {
    pub fn heading(&self) -> Option<&'static str> {
        self.body.heading
    }

    /// Every chart on the page, nested sections included, in display order.
    pub fn charts(&self) -> Vec<&ChartBlock> {
        self.body.charts()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn charts(&self) -> Vec<&ChartBlock> {
        let mut charts = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Chart(chart) => charts.push(chart),
                Block::Section(section) => charts.extend(section.charts()),
                _ => {}
            }
        }
        charts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    StatCards(Vec<StatCard>),
    Insights {
        title: &'static str,
        items: Vec<Note>,
    },
    MetricCards {
        title: &'static str,
        description: String,
        cards: Vec<MetricCard>,
    },
    Chart(ChartBlock),
    Section(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Passengers,
    Satisfied,
    Rate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub icon: CardIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub emphasized: bool,
}

/// Text with a bold lead phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub lead: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBlock {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub spec: SeriesSpec,
    pub caption: Option<Note>,
    pub height: f32,
}
