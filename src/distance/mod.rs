//! Weighted edit distance.
//!
//! This module provides [`WeightedLevenshtein`], which computes the minimum
//! total cost of transforming one sequence of Unicode code points into
//! another using single-character insertions, deletions and substitutions,
//! each priced by a configurable cost function.
//!
//! The computation is the Wagner-Fischer recurrence compressed to a single
//! working row sized to the shorter input, so it runs in O(m·n) time and
//! O(min(m, n)) extra space.

use smallvec::SmallVec;

use crate::cost::{DeleteCost, InsertCost, ReplaceCost};

mod builder;

pub use self::builder::WeightedLevenshteinBuilder;

/// Anything that can price the transformation of one string into another.
pub trait EditDistance {
    /// Cost of transforming `source` into `target`.
    fn distance(&self, source: &str, target: &str) -> f64;
}

/// Edit distance with pluggable insert, delete and replace costs.
///
/// Defaults to unit costs: inserting or deleting any character costs 1,
/// replacing costs 0 for equal characters and 1 otherwise. The
/// configuration is fixed at construction; the engine holds no other state,
/// so one instance can be reused for any number of calls and shared across
/// threads.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::WeightedLevenshtein;
/// use weighted_levenshtein::cost::DeleteCost;
///
/// let lev = WeightedLevenshtein::new();
/// assert_eq!(lev.distance("kitten", "sitting"), 3.0);
///
/// let expensive_delete = WeightedLevenshtein::builder()
///     .delete_cost(DeleteCost::constant(2.0))
///     .build();
/// assert_eq!(expensive_delete.distance("abc", ""), 6.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedLevenshtein {
    insert_cost: InsertCost,
    delete_cost: DeleteCost,
    replace_cost: ReplaceCost,
}

impl WeightedLevenshtein {
    /// Engine with unit costs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit cost functions.
    pub fn with_costs(
        insert_cost: InsertCost,
        delete_cost: DeleteCost,
        replace_cost: ReplaceCost,
    ) -> Self {
        Self {
            insert_cost,
            delete_cost,
            replace_cost,
        }
    }

    /// Start a builder; unset costs fall back to the unit defaults.
    pub fn builder() -> WeightedLevenshteinBuilder {
        WeightedLevenshteinBuilder::new()
    }

    /// Configured insert cost.
    pub fn insert_cost(&self) -> &InsertCost {
        &self.insert_cost
    }

    /// Configured delete cost.
    pub fn delete_cost(&self) -> &DeleteCost {
        &self.delete_cost
    }

    /// Configured replace cost.
    pub fn replace_cost(&self) -> &ReplaceCost {
        &self.replace_cost
    }

    /// Minimum total cost of transforming `source` into `target`.
    ///
    /// Both strings are decoded into Unicode scalar values first, so a
    /// multi-byte character is always one unit.
    ///
    /// ```rust
    /// # use weighted_levenshtein::WeightedLevenshtein;
    /// let lev = WeightedLevenshtein::new();
    /// assert_eq!(lev.distance("", ""), 0.0);
    /// assert_eq!(lev.distance("안녕하세요", "안녕하세여"), 1.0);
    /// ```
    pub fn distance(&self, source: &str, target: &str) -> f64 {
        let source_chars: SmallVec<[char; 32]> = source.chars().collect();
        let target_chars: SmallVec<[char; 32]> = target.chars().collect();
        self.distance_chars(&source_chars, &target_chars)
    }

    /// Minimum total cost of transforming `source` into `target`, both
    /// already decoded into code points.
    pub fn distance_chars(&self, source: &[char], target: &[char]) -> f64 {
        if source.is_empty() {
            return target.iter().map(|&c| self.insert_cost.cost(c)).sum();
        }
        if target.is_empty() {
            return source.iter().map(|&c| self.delete_cost.cost(c)).sum();
        }

        // Row over the shorter side. Walking the transposed table visits the
        // same cells with the same predecessors, so the result is identical.
        if target.len() <= source.len() {
            single_row_distance(
                source,
                target,
                |c| self.delete_cost.cost(c),
                |c| self.insert_cost.cost(c),
                |s, t| self.replace_cost.cost(s, t),
            )
        } else {
            single_row_distance(
                target,
                source,
                |c| self.insert_cost.cost(c),
                |c| self.delete_cost.cost(c),
                |t, s| self.replace_cost.cost(s, t),
            )
        }
    }
}

impl EditDistance for WeightedLevenshtein {
    fn distance(&self, source: &str, target: &str) -> f64 {
        WeightedLevenshtein::distance(self, source, target)
    }
}

/// Single-row Wagner-Fischer over a table with `outer.len()` rows and
/// `inner.len()` columns.
///
/// - `vertical(c)`: cost of consuming outer character `c` (moving down a row)
/// - `horizontal(c)`: cost of consuming inner character `c` (moving right a column)
/// - `diagonal(o, i)`: cost of consuming both at once
///
/// After processing `i` outer characters, `row[j]` holds the cheapest way to
/// reach cell `(i, j)`. Both inputs must be non-empty.
fn single_row_distance<V, H, D>(
    outer: &[char],
    inner: &[char],
    vertical: V,
    horizontal: H,
    diagonal: D,
) -> f64
where
    V: Fn(char) -> f64,
    H: Fn(char) -> f64,
    D: Fn(char, char) -> f64,
{
    let n = inner.len();

    // Step costs along the row are identical for every row
    let horizontal_costs: SmallVec<[f64; 32]> = inner.iter().map(|&c| horizontal(c)).collect();

    let mut row: Vec<f64> = Vec::with_capacity(n + 1);
    row.push(0.0);
    for (j, &step) in horizontal_costs.iter().enumerate() {
        let reached = row[j] + step;
        row.push(reached);
    }

    for &o in outer {
        let down = vertical(o);

        // (i-1, j-1) for the first column
        let mut diagonal_prev = row[0];
        row[0] += down;

        for j in 1..=n {
            let above = row[j];

            let across = row[j - 1] + horizontal_costs[j - 1];
            let descend = above + down;
            let substitute = diagonal_prev + diagonal(o, inner[j - 1]);

            row[j] = across.min(descend).min(substitute);
            diagonal_prev = above;
        }
    }

    row[n]
}
