//! # weighted-levenshtein
//!
//! Levenshtein distance with pluggable per-character edit costs.
//!
//! The classic edit distance charges 1 for every insertion, deletion and
//! substitution. This library lets each of the three operations be priced by
//! an arbitrary function of the characters involved, so that, for example,
//! whitespace can be free to insert, accented letters cheap to substitute for
//! their base letter, or deletions more expensive than insertions.
//!
//! Distances are computed over Unicode scalar values (`char`s), never bytes,
//! using the single-row Wagner–Fischer dynamic program.
//!
//! ## Example
//!
//! ```rust
//! use weighted_levenshtein::cost::{InsertCost, DeleteCost, ReplaceCost};
//! use weighted_levenshtein::WeightedLevenshtein;
//!
//! // Unit costs give the classic distance
//! let lev = WeightedLevenshtein::new();
//! assert_eq!(lev.distance("kitten", "sitting"), 3.0);
//!
//! // Custom costs
//! let lev = WeightedLevenshtein::builder()
//!     .insert_cost(InsertCost::constant(1.1))
//!     .delete_cost(DeleteCost::constant(1.2))
//!     .replace_cost(ReplaceCost::mismatch(2.2))
//!     .build();
//! assert_eq!(lev.distance("abc", "xbc"), 2.2);
//! ```
//!
//! ## Composing costs
//!
//! Several candidate cost functions of the same kind can be merged into one
//! with [`cost::compose_insert_cost`] and friends, or their weighted
//! counterparts:
//!
//! ```rust
//! use weighted_levenshtein::cost::{compose_insert_cost, ComposeStrategy, InsertCost};
//!
//! let cheap_space = InsertCost::new(|c| if c == ' ' { 0.1 } else { 1.0 });
//! let cheap_digit = InsertCost::new(|c| if c.is_ascii_digit() { 0.5 } else { 1.0 });
//!
//! let insert = compose_insert_cost(ComposeStrategy::Min, [cheap_space, cheap_digit])?;
//! assert_eq!(insert.cost(' '), 0.1);
//! assert_eq!(insert.cost('7'), 0.5);
//! assert_eq!(insert.cost('x'), 1.0);
//! # Ok::<(), weighted_levenshtein::CostError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost;
pub mod distance;
pub mod error;

#[cfg(feature = "serialization")]
pub mod config;

pub use crate::distance::{EditDistance, WeightedLevenshtein, WeightedLevenshteinBuilder};
pub use crate::error::{CostError, InvalidWeightReason};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{
        compose_delete_cost, compose_insert_cost, compose_replace_cost,
        compose_weighted_delete_cost, compose_weighted_insert_cost, compose_weighted_replace_cost,
        CharCosts, ComposeStrategy, CostKind, DeleteCost, InsertCost, ReplaceCost,
        SubstitutionCosts, SubstitutionPreset, WeightedEntry,
    };
    pub use crate::distance::{EditDistance, WeightedLevenshtein, WeightedLevenshteinBuilder};
    pub use crate::error::{CostError, InvalidWeightReason};

    #[cfg(feature = "serialization")]
    pub use crate::config::{ConfigError, CostConfig};
}
