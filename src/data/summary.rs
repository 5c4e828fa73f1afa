use crate::error::ViewerError;

/// Headline counts for the passenger sample shown on the dashboard.
///
/// The rate is always derived from the counts so the three cards can never
/// disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    total: u32,
    satisfied: u32,
    rate: f64,
}

impl SampleSummary {
    pub fn from_counts(total: u32, satisfied: u32) -> Result<Self, ViewerError> {
        if total == 0 || satisfied > total {
            return Err(ViewerError::InvalidSummary { total, satisfied });
        }
        let rate = (1000.0 * f64::from(satisfied) / f64::from(total)).round() / 10.0;
        Ok(Self {
            total,
            satisfied,
            rate,
        })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn satisfied(&self) -> u32 {
        self.satisfied
    }

    /// Satisfied share in percent, rounded to one decimal.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}
