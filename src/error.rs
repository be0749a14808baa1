//! Error types for cost function composition.

use crate::cost::CostKind;

/// Errors that can occur while composing cost functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostError {
    /// No cost function was supplied to a composition.
    ///
    /// Supply at least one function of the named kind.
    #[error("no {kind} cost function provided")]
    EmptyComposition {
        /// Kind of cost function that was being composed
        kind: CostKind,
    },

    /// A weighted composition received weights it cannot average over.
    #[error("invalid weight for {kind} cost composition: {reason}")]
    InvalidWeight {
        /// Kind of cost function that was being composed
        kind: CostKind,
        /// What is wrong with the weights
        reason: InvalidWeightReason,
    },
}

/// Why a list of weights was rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidWeightReason {
    /// A single weight is below zero.
    #[error("weight at index {index} is negative ({weight})")]
    Negative {
        /// Position of the offending entry
        index: usize,
        /// The rejected weight
        weight: f64,
    },

    /// A single weight is NaN or infinite.
    #[error("weight at index {index} is not finite ({weight})")]
    NonFinite {
        /// Position of the offending entry
        index: usize,
        /// The rejected weight
        weight: f64,
    },

    /// All weights are zero, so the weighted mean is undefined.
    #[error("weights sum to zero")]
    ZeroTotal,

    /// Each weight is finite but their sum overflows.
    #[error("weights sum to infinity")]
    TotalOverflow,
}
