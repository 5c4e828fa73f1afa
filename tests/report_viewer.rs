use airline_intel::charts::{ChartAdapter, ChartKind, ColorToken, Fill};
use airline_intel::data::{DatasetBundle, airline};
use airline_intel::error::ViewerError;
use airline_intel::reports::{Block, RenderedPage, ReportRenderer};
use airline_intel::router::{ReportView, ViewRouter};

fn rendered(view: ReportView) -> RenderedPage {
    let registry = airline::registry().unwrap();
    ReportRenderer::default().render(view, &registry).unwrap()
}

#[test]
fn navigating_every_view_renders_its_page() {
    let registry = airline::registry().unwrap();
    let renderer = ReportRenderer::default();
    let mut router = ViewRouter::default();

    for view in ReportView::ALL {
        router.select(view);
        let page = renderer.render(router.active(), &registry).unwrap();
        assert_eq!(page.view, view);
        assert!(page.heading().is_some());
    }
}

#[test]
fn satisfied_color_is_shared_by_all_breakdown_charts() {
    let page = rendered(ReportView::ExploratoryAnalysis);
    let fills: Vec<_> = page
        .charts()
        .iter()
        .map(|chart| chart.spec.series("satisfied").unwrap().fill.clone())
        .collect();
    assert_eq!(fills, vec![Fill::Uniform(ColorToken::Primary); 3]);
}

#[test]
fn dashboard_and_standalone_breakdowns_share_values() {
    let dashboard = rendered(ReportView::Dashboard);
    let standalone = rendered(ReportView::ExploratoryAnalysis);

    let embedded = dashboard
        .body
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Section(section) => Some(section),
            _ => None,
        })
        .unwrap();
    assert!(embedded.heading.is_none());
    assert_eq!(standalone.heading(), Some("Exploratory Data Analysis (EDA)"));
    assert_eq!(embedded.charts(), standalone.charts());
}

#[test]
fn importance_chart_highlights_top_three_drivers() {
    let page = rendered(ReportView::ModelAnalysis);
    let chart = page.charts()[0];
    let highlighted: Vec<_> = chart
        .spec
        .categories
        .iter()
        .enumerate()
        .filter(|(i, _)| chart.spec.series[0].color_at(*i) == ColorToken::Highlight)
        .map(|(_, feature)| feature.as_str())
        .collect();
    assert_eq!(
        highlighted,
        ["Online boarding", "Class (Business)", "Inflight wifi service"]
    );
}

#[test]
fn metrics_bundle_cannot_be_drawn_as_bars() {
    let registry = airline::registry().unwrap();
    let metrics = registry.get(airline::MODEL_METRICS).unwrap();
    assert!(matches!(metrics, DatasetBundle::ScalarMetrics(_)));

    let err = ChartAdapter::default()
        .to_series(metrics, ChartKind::HorizontalBar)
        .unwrap_err();
    assert!(matches!(err, ViewerError::UnsupportedShape { .. }));
    assert_eq!(
        err.to_string(),
        "Cannot draw horizontal bar over a scalar metrics bundle"
    );
}
