//! Builder pattern for creating WeightedLevenshtein instances.
//!
//! The `WeightedLevenshteinBuilder` provides a fluent API for choosing which
//! cost functions an engine uses. Every cost is optional and falls back to
//! the unit default, so building never fails.

use tracing::trace;

use crate::cost::{DeleteCost, InsertCost, ReplaceCost};
use crate::distance::WeightedLevenshtein;

/// Builder for constructing a `WeightedLevenshtein` with a fluent API.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::{InsertCost, ReplaceCost};
/// use weighted_levenshtein::WeightedLevenshtein;
///
/// let lev = WeightedLevenshtein::builder()
///     .insert_cost(InsertCost::constant(0.5))
///     .replace_cost(ReplaceCost::case_insensitive(0.1, 1.0))
///     .build();
///
/// assert_eq!(lev.distance("ab", "abc"), 0.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedLevenshteinBuilder {
    insert_cost: Option<InsertCost>,
    delete_cost: Option<DeleteCost>,
    replace_cost: Option<ReplaceCost>,
}

impl WeightedLevenshteinBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost of inserting a character of the target.
    pub fn insert_cost(mut self, cost: InsertCost) -> Self {
        self.insert_cost = Some(cost);
        self
    }

    /// Set the cost of deleting a character of the source.
    pub fn delete_cost(mut self, cost: DeleteCost) -> Self {
        self.delete_cost = Some(cost);
        self
    }

    /// Set the cost of replacing a source character with a target character.
    pub fn replace_cost(mut self, cost: ReplaceCost) -> Self {
        self.replace_cost = Some(cost);
        self
    }

    /// Build the `WeightedLevenshtein`.
    ///
    /// Unset costs default to: insert = 1, delete = 1, replace = 0 if the
    /// characters are equal and 1 otherwise.
    pub fn build(self) -> WeightedLevenshtein {
        trace!(
            custom_insert = self.insert_cost.is_some(),
            custom_delete = self.delete_cost.is_some(),
            custom_replace = self.replace_cost.is_some(),
            "building weighted levenshtein"
        );

        WeightedLevenshtein::with_costs(
            self.insert_cost.unwrap_or_default(),
            self.delete_cost.unwrap_or_default(),
            self.replace_cost.unwrap_or_default(),
        )
    }
}
