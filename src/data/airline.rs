//! Pre-computed airline passenger satisfaction results.
//!
//! These figures come out of an offline analysis of the full survey export;
//! the viewer ships them as literals.

use super::{
    BreakdownRecord, DatasetBundle, DatasetRegistry, FeatureScore, SampleSummary, ScalarMetrics,
};
use crate::error::ViewerError;

pub const BY_CLASS: &str = "eda.by_class";
pub const BY_ONLINE_BOARDING: &str = "eda.by_online_boarding";
pub const BY_WIFI: &str = "eda.by_wifi";
pub const FEATURE_IMPORTANCE: &str = "model.feature_importance";
pub const MODEL_METRICS: &str = "model.metrics";

const SAMPLE_TOTAL: u32 = 100;
const SAMPLE_SATISFIED: u32 = 43;

const CLASS_SATISFIED: &[(&str, f64)] = &[("Business", 69.9), ("Eco", 18.5), ("Eco Plus", 22.1)];

const ONLINE_BOARDING_SATISFIED: &[(&str, f64)] = &[
    ("0", 9.3),
    ("1", 18.1),
    ("2", 28.5),
    ("3", 46.8),
    ("4", 72.3),
    ("5", 86.1),
];

const WIFI_SATISFIED: &[(&str, f64)] = &[
    ("0", 3.2),
    ("1", 22.4),
    ("2", 38.6),
    ("3", 52.3),
    ("4", 71.8),
    ("5", 75.1),
];

const SHAP_IMPORTANCE: &[(&str, f64)] = &[
    ("Online boarding", 0.42),
    ("Class (Business)", 0.35),
    ("Inflight wifi service", 0.28),
    ("Type of Travel (Business)", 0.21),
    ("Seat comfort", 0.15),
    ("Inflight entertainment", 0.12),
    ("Leg room service", 0.09),
    ("On-board service", 0.07),
];

/// Builds the registry with every bundle the report views read.
pub fn registry() -> Result<DatasetRegistry, ViewerError> {
    let mut registry = DatasetRegistry::new();
    registry.register(BY_CLASS, breakdown(CLASS_SATISFIED))?;
    registry.register(BY_ONLINE_BOARDING, breakdown(ONLINE_BOARDING_SATISFIED))?;
    registry.register(BY_WIFI, breakdown(WIFI_SATISFIED))?;
    registry.register(
        FEATURE_IMPORTANCE,
        DatasetBundle::FeatureImportance(
            SHAP_IMPORTANCE
                .iter()
                .map(|(feature, importance)| FeatureScore::new(*feature, *importance))
                .collect(),
        ),
    )?;
    registry.register(
        MODEL_METRICS,
        DatasetBundle::ScalarMetrics(
            ScalarMetrics::new("XGBoost Classifier")
                .with_metric("Accuracy", "96.2%")
                .with_metric("Precision (for 'satisfied')", "95.8%")
                .with_metric("Recall (for 'satisfied')", "94.1%"),
        ),
    )?;
    tracing::info!(bundles = registry.len(), "dataset registry ready");
    Ok(registry)
}

/// Illustrative passenger sample shown on the dashboard.
///
/// Kept as independent counts: it is not an aggregate of the breakdowns.
pub fn sample_summary() -> Result<SampleSummary, ViewerError> {
    SampleSummary::from_counts(SAMPLE_TOTAL, SAMPLE_SATISFIED)
}

/// Expands satisfied shares into records; the dissatisfied share is the complement.
fn breakdown(satisfied: &[(&str, f64)]) -> DatasetBundle {
    DatasetBundle::CategoryBreakdown(
        satisfied
            .iter()
            .map(|(category, pct)| {
                let dissatisfied = ((100.0 - pct) * 10.0).round() / 10.0;
                BreakdownRecord::new(*category, *pct, dissatisfied)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PERCENT_SUM_TOLERANCE;

    #[test]
    fn every_breakdown_record_sums_to_one_hundred() {
        let registry = registry().unwrap();
        let mut checked = 0;
        for (_, bundle) in registry.iter() {
            if let DatasetBundle::CategoryBreakdown(records) = bundle {
                for record in records {
                    let sum = record.satisfied_pct + record.dissatisfied_pct;
                    assert!((sum - 100.0).abs() <= PERCENT_SUM_TOLERANCE, "{record:?}");
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 15);
    }

    #[test]
    fn feature_importance_is_non_increasing() {
        let registry = registry().unwrap();
        let DatasetBundle::FeatureImportance(scores) = registry.get(FEATURE_IMPORTANCE).unwrap()
        else {
            panic!("feature importance bundle has the wrong shape");
        };
        assert_eq!(scores.len(), 8);
        assert_eq!(scores[0].feature, "Online boarding");
        assert!(
            scores
                .windows(2)
                .all(|pair| pair[0].importance >= pair[1].importance)
        );
    }

    #[test]
    fn complement_keeps_published_dissatisfied_values() {
        let registry = registry().unwrap();
        let DatasetBundle::CategoryBreakdown(records) = registry.get(BY_CLASS).unwrap() else {
            panic!("class bundle has the wrong shape");
        };
        let dissatisfied: Vec<f64> = records.iter().map(|r| r.dissatisfied_pct).collect();
        assert_eq!(dissatisfied, [30.1, 81.5, 77.9]);
    }

    #[test]
    fn metrics_keep_display_order() {
        let registry = registry().unwrap();
        let metrics = registry.get(MODEL_METRICS).unwrap().as_metrics().unwrap();
        assert_eq!(metrics.model, "XGBoost Classifier");
        assert_eq!(metrics.metrics[0], ("Accuracy".to_owned(), "96.2%".to_owned()));
        assert_eq!(metrics.metrics.len(), 3);
    }

    #[test]
    fn sample_summary_matches_published_cards() {
        let summary = sample_summary().unwrap();
        assert_eq!((summary.total(), summary.satisfied()), (100, 43));
        assert_eq!(summary.rate(), 43.0);
    }
}
