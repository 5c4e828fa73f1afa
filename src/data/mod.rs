//! Named, immutable dataset bundles and the registry that holds them.
//!
//! Bundles are the output of an offline analytics job. The viewer only
//! depends on their shape and invariants, which are checked once when a
//! bundle is registered and never again by consumers.

pub mod airline;
pub mod summary;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ViewerError;

pub use summary::SampleSummary;

/// Allowed drift between `satisfied + dissatisfied` and 100.
pub const PERCENT_SUM_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRecord {
    pub category: String,
    pub satisfied_pct: f64,
    pub dissatisfied_pct: f64,
}

impl BreakdownRecord {
    pub fn new(category: impl Into<String>, satisfied_pct: f64, dissatisfied_pct: f64) -> Self {
        Self {
            category: category.into(),
            satisfied_pct,
            dissatisfied_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScore {
    pub feature: String,
    pub importance: f64,
}

impl FeatureScore {
    pub fn new(feature: impl Into<String>, importance: f64) -> Self {
        Self {
            feature: feature.into(),
            importance,
        }
    }
}

/// Model identifier plus ordered metric name/display pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarMetrics {
    pub model: String,
    pub metrics: Vec<(String, String)>,
}

impl ScalarMetrics {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            metrics: Vec::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, display: impl Into<String>) -> Self {
        self.metrics.push((name.into(), display.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|(metric, _)| metric == name)
            .map(|(_, display)| display.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetBundle {
    CategoryBreakdown(Vec<BreakdownRecord>),
    FeatureImportance(Vec<FeatureScore>),
    ScalarMetrics(ScalarMetrics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleShape {
    CategoryBreakdown,
    FeatureImportance,
    ScalarMetrics,
}

impl fmt::Display for BundleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BundleShape::CategoryBreakdown => "category breakdown",
            BundleShape::FeatureImportance => "feature importance",
            BundleShape::ScalarMetrics => "scalar metrics",
        };
        f.write_str(label)
    }
}

impl DatasetBundle {
    pub fn shape(&self) -> BundleShape {
        match self {
            DatasetBundle::CategoryBreakdown(_) => BundleShape::CategoryBreakdown,
            DatasetBundle::FeatureImportance(_) => BundleShape::FeatureImportance,
            DatasetBundle::ScalarMetrics(_) => BundleShape::ScalarMetrics,
        }
    }

    pub fn as_metrics(&self) -> Option<&ScalarMetrics> {
        match self {
            DatasetBundle::ScalarMetrics(metrics) => Some(metrics),
            _ => None,
        }
    }

    /// Checks the invariant of this bundle's shape, returning the reason it fails.
    fn validate(&self) -> Result<(), String> {
        match self {
            DatasetBundle::CategoryBreakdown(records) => {
                if records.is_empty() {
                    return Err("breakdown has no records".to_owned());
                }
                for record in records {
                    let in_range = |value: f64| (0.0..=100.0).contains(&value);
                    if !in_range(record.satisfied_pct) || !in_range(record.dissatisfied_pct) {
                        return Err(format!(
                            "`{}` has a share outside 0..=100",
                            record.category
                        ));
                    }
                    let sum = record.satisfied_pct + record.dissatisfied_pct;
                    if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE + 1e-9 {
                        return Err(format!(
                            "`{}` shares add up to {sum:.2}, expected 100",
                            record.category
                        ));
                    }
                }
                Ok(())
            }
            DatasetBundle::FeatureImportance(scores) => {
                if scores.is_empty() {
                    return Err("importance list is empty".to_owned());
                }
                if let Some(score) = scores.iter().find(|score| !score.importance.is_finite()) {
                    return Err(format!("`{}` has a non-finite importance", score.feature));
                }
                if let Some(pair) = scores
                    .windows(2)
                    .find(|pair| pair[1].importance > pair[0].importance)
                {
                    return Err(format!(
                        "`{}` ranks below `{}` but scores higher",
                        pair[1].feature, pair[0].feature
                    ));
                }
                Ok(())
            }
            DatasetBundle::ScalarMetrics(metrics) => {
                if metrics.model.trim().is_empty() {
                    return Err("model identifier is empty".to_owned());
                }
                if metrics.metrics.is_empty() {
                    return Err("no metrics listed".to_owned());
                }
                Ok(())
            }
        }
    }
}

/// Read-only store of named bundles.
///
/// Populated once during startup; afterwards only shared references are
/// handed out, so concurrent reads need no coordination.
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    bundles: BTreeMap<String, DatasetBundle>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        bundle: DatasetBundle,
    ) -> Result<(), ViewerError> {
        let name = name.into();
        if self.bundles.contains_key(&name) {
            return Err(ViewerError::DuplicateBundle { name });
        }
        if let Err(reason) = bundle.validate() {
            return Err(ViewerError::InvalidBundle { name, reason });
        }
        tracing::trace!(bundle = %name, shape = %bundle.shape(), "registered bundle");
        self.bundles.insert(name, bundle);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&DatasetBundle, ViewerError> {
        self.bundles.get(name).ok_or_else(|| ViewerError::NotFound {
            name: name.to_owned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatasetBundle)> {
        self.bundles
            .iter()
            .map(|(name, bundle)| (name.as_str(), bundle))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(records: &[(&str, f64, f64)]) -> DatasetBundle {
        DatasetBundle::CategoryBreakdown(
            records
                .iter()
                .map(|(name, sat, dis)| BreakdownRecord::new(*name, *sat, *dis))
                .collect(),
        )
    }

    #[test]
    fn get_returns_registered_bundle() {
        let mut registry = DatasetRegistry::new();
        let bundle = breakdown(&[("a", 40.0, 60.0)]);
        registry.register("eda.a", bundle.clone()).unwrap();

        assert_eq!(registry.get("eda.a").unwrap(), &bundle);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let registry = DatasetRegistry::new();
        let err = registry.get("eda.missing").unwrap_err();
        assert_eq!(
            err,
            ViewerError::NotFound {
                name: "eda.missing".to_owned()
            }
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = DatasetRegistry::new();
        registry
            .register("eda.a", breakdown(&[("a", 50.0, 50.0)]))
            .unwrap();
        let err = registry
            .register("eda.a", breakdown(&[("b", 50.0, 50.0)]))
            .unwrap_err();
        assert!(matches!(err, ViewerError::DuplicateBundle { .. }));
    }

    #[test]
    fn breakdown_sum_within_tolerance_is_accepted() {
        let mut registry = DatasetRegistry::new();
        registry
            .register("eda.a", breakdown(&[("a", 33.3, 66.6)]))
            .unwrap();
    }

    #[test]
    fn breakdown_sum_off_by_more_than_tolerance_is_rejected() {
        let mut registry = DatasetRegistry::new();
        let err = registry
            .register("eda.a", breakdown(&[("ok", 50.0, 50.0), ("bad", 40.0, 50.0)]))
            .unwrap_err();
        match err {
            ViewerError::InvalidBundle { name, reason } => {
                assert_eq!(name, "eda.a");
                assert!(reason.contains("bad"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn importance_must_be_non_increasing() {
        let mut registry = DatasetRegistry::new();
        let ties = DatasetBundle::FeatureImportance(vec![
            FeatureScore::new("a", 0.4),
            FeatureScore::new("b", 0.4),
            FeatureScore::new("c", 0.1),
        ]);
        registry.register("model.ties", ties).unwrap();

        let unsorted = DatasetBundle::FeatureImportance(vec![
            FeatureScore::new("a", 0.1),
            FeatureScore::new("b", 0.4),
        ]);
        let err = registry.register("model.unsorted", unsorted).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidBundle { .. }));
    }

    #[test]
    fn empty_bundles_are_rejected() {
        let mut registry = DatasetRegistry::new();
        assert!(registry.register("a", breakdown(&[])).is_err());
        assert!(
            registry
                .register("b", DatasetBundle::FeatureImportance(Vec::new()))
                .is_err()
        );
        assert!(
            registry
                .register("c", DatasetBundle::ScalarMetrics(ScalarMetrics::new("m")))
                .is_err()
        );
    }

    #[test]
    fn scalar_metrics_keep_insertion_order() {
        let metrics = ScalarMetrics::new("Model")
            .with_metric("Recall", "90.0%")
            .with_metric("Accuracy", "95.0%");
        let names: Vec<_> = metrics.metrics.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Recall", "Accuracy"]);
        assert_eq!(metrics.get("Accuracy"), Some("95.0%"));
        assert_eq!(metrics.get("F1"), None);
    }
}
