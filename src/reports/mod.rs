//! Composes report pages from registry bundles.

pub mod dashboard;
pub mod exploratory;
pub mod model;
pub mod page;

use crate::charts::ChartAdapter;
use crate::config::ViewerConfig;
use crate::data::DatasetRegistry;
use crate::error::ViewerError;
use crate::router::ReportView;

pub use dashboard::DashboardReport;
pub use exploratory::{ExploratoryOptions, ExploratoryReport};
pub use model::ModelReport;
pub use page::{Block, CardIcon, ChartBlock, MetricCard, Note, RenderedPage, Section, StatCard};

/// Builds the page for a view. Holds no state besides its adapter settings,
/// so rendering the same view twice yields equal pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer {
    adapter: ChartAdapter,
}

impl ReportRenderer {
    pub fn new(adapter: ChartAdapter) -> Self {
        Self { adapter }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(ChartAdapter::new(config.emphasis_rank))
    }

    pub fn render(
        &self,
        view: ReportView,
        registry: &DatasetRegistry,
    ) -> Result<RenderedPage, ViewerError> {
        let body = match view {
            ReportView::Dashboard => DashboardReport::section(&self.adapter, registry)?,
            ReportView::ExploratoryAnalysis => {
                self.exploratory(registry, ExploratoryOptions::default())?
            }
            ReportView::ModelAnalysis => ModelReport::section(&self.adapter, registry)?,
        };
        Ok(RenderedPage { view, body })
    }

    pub fn exploratory(
        &self,
        registry: &DatasetRegistry,
        options: ExploratoryOptions,
    ) -> Result<Section, ViewerError> {
        ExploratoryReport::section(&self.adapter, registry, options)
    }
}
