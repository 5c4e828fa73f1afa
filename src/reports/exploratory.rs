use super::page::{Block, ChartBlock, Section};
use crate::charts::{ChartAdapter, ChartKind, Orientation};
use crate::data::{DatasetRegistry, airline};
use crate::error::ViewerError;

/// Controls how the breakdown charts are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploratoryOptions {
    pub show_heading: bool,
}

impl Default for ExploratoryOptions {
    fn default() -> Self {
        Self { show_heading: true }
    }
}

struct BreakdownChart {
    bundle: &'static str,
    title: &'static str,
    orientation: Orientation,
}

const BREAKDOWNS: [BreakdownChart; 3] = [
    BreakdownChart {
        bundle: airline::BY_CLASS,
        title: "Satisfaction by Class",
        orientation: Orientation::Horizontal,
    },
    BreakdownChart {
        bundle: airline::BY_ONLINE_BOARDING,
        title: "Satisfaction by Online Boarding Rating",
        orientation: Orientation::Vertical,
    },
    BreakdownChart {
        bundle: airline::BY_WIFI,
        title: "Satisfaction by Inflight Wifi Service",
        orientation: Orientation::Vertical,
    },
];

pub struct ExploratoryReport;

impl ExploratoryReport {
    pub fn title() -> &'static str {
        "Exploratory Data Analysis (EDA)"
    }

    /// Satisfaction breakdowns, used both standalone and embedded in the dashboard.
    pub fn section(
        adapter: &ChartAdapter,
        registry: &DatasetRegistry,
        options: ExploratoryOptions,
    ) -> Result<Section, ViewerError> {
        let blocks = BREAKDOWNS
            .iter()
            .map(|chart| {
                let bundle = registry.get(chart.bundle)?;
                let spec = adapter
                    .to_series(bundle, ChartKind::StackedBar)?
                    .with_orientation(chart.orientation);
                Ok(Block::Chart(ChartBlock {
                    title: chart.title,
                    description: None,
                    spec,
                    caption: None,
                    height: 300.0,
                }))
            })
            .collect::<Result<Vec<_>, ViewerError>>()?;

        Ok(Section {
            heading: options.show_heading.then(Self::title),
            blocks,
        })
    }
}
