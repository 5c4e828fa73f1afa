use super::model::{
    ChartKind, ColorToken, Fill, Orientation, Outcome, Series, SeriesSpec, ValueAxis, ValueUnit,
};
use crate::data::{BreakdownRecord, DatasetBundle, FeatureScore};
use crate::error::ViewerError;

pub const DEFAULT_EMPHASIS_RANK: usize = 3;

/// Turns dataset bundles into series specs.
///
/// Pure: the same bundle and kind always produce the same spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartAdapter {
    emphasis_rank: usize,
}

impl Default for ChartAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EMPHASIS_RANK)
    }
}

impl ChartAdapter {
    pub fn new(emphasis_rank: usize) -> Self {
        Self { emphasis_rank }
    }

    pub fn emphasis_rank(&self) -> usize {
        self.emphasis_rank
    }

    pub fn to_series(
        &self,
        bundle: &DatasetBundle,
        kind: ChartKind,
    ) -> Result<SeriesSpec, ViewerError> {
        match (kind, bundle) {
            (ChartKind::StackedBar, DatasetBundle::CategoryBreakdown(records)) => {
                Ok(stacked_outcomes(records))
            }
            (ChartKind::HorizontalBar, DatasetBundle::FeatureImportance(scores)) => {
                Ok(ranked_importance(scores, self.emphasis_rank))
            }
            _ => Err(ViewerError::UnsupportedShape {
                kind,
                shape: bundle.shape(),
            }),
        }
    }
}

fn stacked_outcomes(records: &[BreakdownRecord]) -> SeriesSpec {
    let series = Outcome::ALL
        .into_iter()
        .map(|outcome| Series {
            key: outcome.key(),
            values: records
                .iter()
                .map(|record| match outcome {
                    Outcome::Satisfied => record.satisfied_pct,
                    Outcome::Dissatisfied => record.dissatisfied_pct,
                })
                .collect(),
            fill: Fill::Uniform(outcome.color()),
        })
        .collect();

    SeriesSpec {
        orientation: Orientation::Vertical,
        stacked: true,
        categories: records.iter().map(|record| record.category.clone()).collect(),
        value_axis: ValueAxis {
            unit: ValueUnit::Percent,
            max: 100.0,
        },
        series,
        show_legend: true,
    }
}

fn ranked_importance(scores: &[FeatureScore], emphasis_rank: usize) -> SeriesSpec {
    let colors = (0..scores.len())
        .map(|rank| {
            if rank < emphasis_rank {
                ColorToken::Highlight
            } else {
                ColorToken::Primary
            }
        })
        .collect();

    let max = scores
        .iter()
        .map(|score| score.importance)
        .fold(0.0_f64, f64::max);

    SeriesSpec {
        orientation: Orientation::Horizontal,
        stacked: false,
        categories: scores.iter().map(|score| score.feature.clone()).collect(),
        value_axis: ValueAxis {
            unit: ValueUnit::Score,
            max: nice_ceiling(max),
        },
        series: vec![Series {
            key: "importance",
            values: scores.iter().map(|score| score.importance).collect(),
            fill: Fill::PerBar(colors),
        }],
        show_legend: false,
    }
}

/// Rounds up to the next tenth so the axis ends on a readable tick.
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    (value * 10.0).ceil() / 10.0
}
