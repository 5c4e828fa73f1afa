use crate::charts::DEFAULT_EMPHASIS_RANK;
use crate::router::ReportView;

/// Startup options for the viewer. Built in code; nothing is read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerConfig {
    /// How many top-ranked features are highlighted in importance charts.
    pub emphasis_rank: usize,
    pub initial_view: ReportView,
    pub sidebar_collapsed: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            emphasis_rank: DEFAULT_EMPHASIS_RANK,
            initial_view: ReportView::Dashboard,
            sidebar_collapsed: false,
        }
    }
}

impl ViewerConfig {
    pub fn with_emphasis_rank(mut self, rank: usize) -> Self {
        self.emphasis_rank = rank;
        self
    }

    pub fn with_initial_view(mut self, view: ReportView) -> Self {
        self.initial_view = view;
        self
    }

    pub fn with_sidebar_collapsed(mut self, collapsed: bool) -> Self {
        self.sidebar_collapsed = collapsed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_highlight_top_three_on_dashboard() {
        let config = ViewerConfig::default();
        assert_eq!(config.emphasis_rank, 3);
        assert_eq!(config.initial_view, ReportView::Dashboard);
        assert!(!config.sidebar_collapsed);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = ViewerConfig::default()
            .with_emphasis_rank(5)
            .with_initial_view(ReportView::ModelAnalysis);
        assert_eq!(config.emphasis_rank, 5);
        assert_eq!(config.initial_view, ReportView::ModelAnalysis);
        assert!(!config.sidebar_collapsed);
    }
}
