//! Error types for parameter validation and metric computation

use thiserror::Error;

/// Rejected input to [`GenerationParams::new`](crate::generator::GenerationParams::new).
///
/// Each variant carries the offending value so callers can report exactly
/// what was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidParameter {
    /// Fewer than three nodes cannot form a ring.
    #[error("node count must be at least 3 to form a ring, got {got}")]
    NodeCountTooSmall { got: usize },

    /// The lattice connects each node to `k / 2` neighbours per side, so `k`
    /// must be even.
    #[error("mean degree must be even, got {got}")]
    DegreeOdd { got: usize },

    /// A simple graph on `n` nodes caps the degree at `n - 1`.
    #[error("mean degree must be smaller than the node count, got k={k} with n={n}")]
    DegreeTooLarge { k: usize, n: usize },

    /// Rewiring probabilities live in the closed unit interval.
    #[error("rewiring probability must be a finite value in [0, 1], got {got}")]
    BetaOutOfRange { got: f64 },
}

impl InvalidParameter {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::NodeCountTooSmall { .. } => "n",
            Self::DegreeOdd { .. } | Self::DegreeTooLarge { .. } => "k",
            Self::BetaOutOfRange { .. } => "beta",
        }
    }
}

/// Returned by [`analyze`](crate::metrics::analyze) when the graph has no
/// nodes and every metric would be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph has no nodes, metrics are undefined")]
pub struct EmptyGraphError;
