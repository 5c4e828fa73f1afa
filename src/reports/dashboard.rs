use super::exploratory::{ExploratoryOptions, ExploratoryReport};
use super::page::{Block, CardIcon, Note, Section, StatCard};
use crate::charts::ChartAdapter;
use crate::data::{DatasetRegistry, SampleSummary, airline};
use crate::error::ViewerError;
use crate::format::format_percent;

const INSIGHTS: [Note; 5] = [
    Note {
        lead: "Online Boarding",
        body: "is the single most critical factor. A poor boarding experience (rating 1-2) almost guarantees dissatisfaction.",
    },
    Note {
        lead: "Business Class",
        body: "passengers are significantly more satisfied, driven by better services across the board.",
    },
    Note {
        lead: "In-flight Wifi Service",
        body: "is a major driver, especially for Business travelers. A rating below 3 is a strong predictor of dissatisfaction.",
    },
    Note {
        lead: "Type of Travel",
        body: "matters: business travellers have higher expectations but are also more often satisfied, likely because they fly Business Class.",
    },
    Note {
        lead: "Seat Comfort and In-flight Entertainment",
        body: "are important, but less critical than the big three (Boarding, Class, Wifi).",
    },
];

pub struct DashboardReport;

impl DashboardReport {
    pub fn title() -> &'static str {
        "Dashboard"
    }

    pub fn insights_title() -> &'static str {
        "Key Insights Summary"
    }

    pub fn section(
        adapter: &ChartAdapter,
        registry: &DatasetRegistry,
    ) -> Result<Section, ViewerError> {
        let summary = airline::sample_summary()?;
        let breakdowns = ExploratoryReport::section(
            adapter,
            registry,
            ExploratoryOptions {
                show_heading: false,
            },
        )?;

        Ok(Section {
            heading: Some(Self::title()),
            blocks: vec![
                Block::StatCards(summary_cards(&summary)),
                Block::Insights {
                    title: Self::insights_title(),
                    items: INSIGHTS.to_vec(),
                },
                Block::Section(breakdowns),
            ],
        })
    }
}

fn summary_cards(summary: &SampleSummary) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Passengers (Sample)",
            value: summary.total().to_string(),
            icon: CardIcon::Passengers,
        },
        StatCard {
            title: "Satisfied (Sample)",
            value: summary.satisfied().to_string(),
            icon: CardIcon::Satisfied,
        },
        StatCard {
            title: "Satisfaction Rate (Sample)",
            value: format_percent(summary.rate()),
            icon: CardIcon::Rate,
        },
    ]
}
