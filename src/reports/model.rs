use super::page::{Block, ChartBlock, MetricCard, Note, Section};
use crate::charts::{ChartAdapter, ChartKind};
use crate::data::{DatasetRegistry, airline};
use crate::error::ViewerError;

pub struct ModelReport;

impl ModelReport {
    pub fn title() -> &'static str {
        "Model & SHAP Analysis"
    }

    pub fn performance_title() -> &'static str {
        "Model Performance (Simulated)"
    }

    pub fn drivers_title() -> &'static str {
        "SHAP Analysis: Key Drivers of Satisfaction"
    }

    pub fn drivers_subtitle() -> &'static str {
        "SHAP (SHapley Additive exPlanations) values show the average impact of each feature on the model's prediction, which explains why the model decides as it does."
    }

    pub fn section(
        adapter: &ChartAdapter,
        registry: &DatasetRegistry,
    ) -> Result<Section, ViewerError> {
        let bundle = registry.get(airline::MODEL_METRICS)?;
        let metrics = bundle
            .as_metrics()
            .ok_or_else(|| ViewerError::InvalidBundle {
                name: airline::MODEL_METRICS.to_owned(),
                reason: format!("expected scalar metrics, found {}", bundle.shape()),
            })?;

        let mut cards = vec![MetricCard {
            label: "Model Type".to_owned(),
            value: metrics.model.clone(),
            emphasized: false,
        }];
        cards.extend(metrics.metrics.iter().map(|(name, display)| MetricCard {
            label: name.clone(),
            value: display.clone(),
            emphasized: true,
        }));

        let importance = registry.get(airline::FEATURE_IMPORTANCE)?;
        let spec = adapter.to_series(importance, ChartKind::HorizontalBar)?;

        Ok(Section {
            heading: Some(Self::title()),
            blocks: vec![
                Block::MetricCards {
                    title: Self::performance_title(),
                    description: format!(
                        "The {} was trained on the full dataset and shows high predictive power.",
                        metrics.model
                    ),
                    cards,
                },
                Block::Chart(ChartBlock {
                    title: Self::drivers_title(),
                    description: Some(Self::drivers_subtitle()),
                    spec,
                    caption: Some(Note {
                        lead: "Interpretation:",
                        body: "Online boarding has the largest impact on predicting satisfaction, followed by Class and Inflight wifi. The highlighted top drivers clearly outweigh the rest.",
                    }),
                    height: 400.0,
                }),
            ],
        })
    }
}
