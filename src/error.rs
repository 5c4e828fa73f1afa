use thiserror::Error;

use crate::charts::ChartKind;
use crate::data::BundleShape;

/// Errors raised while registering, adapting or rendering report data.
///
/// None of these are runtime conditions to recover from: they point at a
/// mismatch between the literal bundles and the views that consume them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// A view asked for a bundle that was never registered.
    #[error("No dataset bundle registered under `{name}`")]
    NotFound { name: String },
    /// A chart kind was requested over a bundle shape it cannot draw.
    #[error("Cannot draw {kind} over a {shape} bundle")]
    UnsupportedShape { kind: ChartKind, shape: BundleShape },
    /// A bundle failed its shape invariant at registration time.
    #[error("Bundle `{name}` rejected: {reason}")]
    InvalidBundle { name: String, reason: String },
    /// The same bundle name was registered twice.
    #[error("Bundle `{name}` is already registered")]
    DuplicateBundle { name: String },
    /// Sample counts that cannot produce a satisfaction rate.
    #[error("Invalid sample summary: {satisfied} satisfied out of {total}")]
    InvalidSummary { total: u32, satisfied: u32 },
}
