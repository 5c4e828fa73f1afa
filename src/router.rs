//! Which report page is on screen.

#[derive(Debug, Default, Hash, Eq, PartialEq, Clone, Copy)]
pub enum ReportView {
    #[default]
    Dashboard,
    ExploratoryAnalysis,
    ModelAnalysis,
}

impl ReportView {
    /// Navigation order.
    pub const ALL: [ReportView; 3] = [
        ReportView::Dashboard,
        ReportView::ExploratoryAnalysis,
        ReportView::ModelAnalysis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportView::Dashboard => "Dashboard",
            ReportView::ExploratoryAnalysis => "Exploratory Analysis",
            ReportView::ModelAnalysis => "Model & SHAP",
        }
    }
}

/// A transition that actually changed the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewChange {
    pub from: ReportView,
    pub to: ReportView,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    active: ReportView,
}

impl ViewRouter {
    pub fn new(initial: ReportView) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> ReportView {
        self.active
    }

    pub fn is_active(&self, view: ReportView) -> bool {
        self.active == view
    }

    /// Makes `view` active. Selecting the current view changes nothing and
    /// reports no change.
    pub fn select(&mut self, view: ReportView) -> Option<ViewChange> {
        if self.active == view {
            tracing::trace!(view = view.label(), "view already active");
            return None;
        }
        let change = ViewChange {
            from: self.active,
            to: view,
        };
        self.active = view;
        tracing::debug!(from = change.from.label(), to = change.to.label(), "view changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(ViewRouter::default().active(), ReportView::Dashboard);
    }

    #[test]
    fn select_then_read_returns_selection() {
        let mut router = ViewRouter::default();
        for view in ReportView::ALL {
            router.select(view);
            assert_eq!(router.active(), view);
            assert!(router.is_active(view));
        }
    }

    #[test]
    fn any_state_reaches_any_state() {
        for from in ReportView::ALL {
            for to in ReportView::ALL {
                let mut router = ViewRouter::new(from);
                let change = router.select(to);
                assert_eq!(router.active(), to);
                assert_eq!(change.is_some(), from != to);
            }
        }
    }

    #[test]
    fn self_transition_is_silent_and_idempotent() {
        let mut router = ViewRouter::new(ReportView::ModelAnalysis);
        assert_eq!(router.select(ReportView::ModelAnalysis), None);
        assert_eq!(router.select(ReportView::ModelAnalysis), None);
        assert_eq!(router.active(), ReportView::ModelAnalysis);
    }

    #[test]
    fn change_reports_both_ends() {
        let mut router = ViewRouter::default();
        assert_eq!(
            router.select(ReportView::ExploratoryAnalysis),
            Some(ViewChange {
                from: ReportView::Dashboard,
                to: ReportView::ExploratoryAnalysis,
            })
        );
    }

    #[test]
    fn navigation_labels_are_distinct() {
        let labels: Vec<_> = ReportView::ALL.iter().map(ReportView::label).collect();
        assert_eq!(labels, ["Dashboard", "Exploratory Analysis", "Model & SHAP"]);
    }
}
