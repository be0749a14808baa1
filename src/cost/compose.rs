//! Merging several cost functions of the same kind into one.
//!
//! Two families are provided:
//!
//! - **Strategy-based** (`compose_insert_cost`, `compose_delete_cost`,
//!   `compose_replace_cost`): reduce the values of every function with a
//!   [`ComposeStrategy`] (minimum, maximum, arithmetic mean).
//! - **Weighted** (`compose_weighted_*`): weighted arithmetic mean over a list
//!   of [`WeightedEntry`] values, `Σ(wᵢ·vᵢ) / Σwᵢ`.
//!
//! ## Composition rules
//!
//! - Zero functions is an error ([`CostError::EmptyComposition`]).
//! - Exactly one function is returned unchanged, whatever the strategy. The
//!   weighted family still validates the single weight first and then ignores
//!   it, so a "weighted" composition of one function yields that function's
//!   raw values.
//! - Two or more functions are all evaluated on every call and reduced.
//!
//! ## Example
//!
//! ```rust
//! use weighted_levenshtein::cost::{compose_insert_cost, ComposeStrategy, InsertCost};
//!
//! let cheap_digits = InsertCost::new(|c| if c.is_ascii_digit() { 0.5 } else { 2.0 });
//! let flat = InsertCost::constant(1.0);
//!
//! let cheapest = compose_insert_cost(ComposeStrategy::Min, [cheap_digits, flat]).unwrap();
//! assert_eq!(cheapest.cost('7'), 0.5);
//! assert_eq!(cheapest.cost('x'), 1.0);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{CostFunction, CostKind, DeleteCost, InsertCost, ReplaceCost};
use crate::error::{CostError, InvalidWeightReason};

/// How the values of several cost functions reduce to one.
///
/// The enumeration is closed: every strategy-based composer matches it
/// exhaustively. The weighted mean is not a variant here; it has its own
/// `compose_weighted_*` operations because it needs a weight per function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ComposeStrategy {
    /// Smallest of the evaluated values
    Min,
    /// Largest of the evaluated values
    Max,
    /// Unweighted arithmetic mean of the evaluated values
    Avg,
}

impl ComposeStrategy {
    /// Reduce `count` values with this strategy.
    #[inline]
    fn reduce<I>(self, values: I, count: usize) -> f64
    where
        I: Iterator<Item = f64>,
    {
        match self {
            ComposeStrategy::Min => values.fold(f64::INFINITY, f64::min),
            ComposeStrategy::Max => values.fold(f64::NEG_INFINITY, f64::max),
            ComposeStrategy::Avg => values.sum::<f64>() / count as f64,
        }
    }
}

impl fmt::Display for ComposeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComposeStrategy::Min => "min",
            ComposeStrategy::Max => "max",
            ComposeStrategy::Avg => "avg",
        })
    }
}

/// A cost function paired with its weight in a weighted composition.
#[derive(Clone, Debug)]
pub struct WeightedEntry<C> {
    /// The cost function
    pub cost: C,
    /// Non-negative weight of this function
    pub weight: f64,
}

impl<C> WeightedEntry<C> {
    /// Pair `cost` with `weight`.
    pub fn new(cost: C, weight: f64) -> Self {
        Self { cost, weight }
    }
}

impl<C> From<(C, f64)> for WeightedEntry<C> {
    fn from((cost, weight): (C, f64)) -> Self {
        Self::new(cost, weight)
    }
}

/// Compose cost functions of any kind with `strategy`.
///
/// The kind-specific `compose_*_cost` functions are thin wrappers around
/// this one.
///
/// # Errors
///
/// [`CostError::EmptyComposition`] if `funcs` yields nothing.
pub fn compose<C, I>(strategy: ComposeStrategy, funcs: I) -> Result<C, CostError>
where
    C: CostFunction,
    I: IntoIterator<Item = C>,
{
    let funcs: Vec<C> = funcs.into_iter().collect();

    match funcs.as_slice() {
        [] => return Err(CostError::EmptyComposition { kind: C::KIND }),
        [only] => {
            trace!(kind = %C::KIND, %strategy, "single cost function, composing as identity");
            return Ok(only.clone());
        }
        _ => {}
    }

    debug!(
        kind = %C::KIND,
        %strategy,
        arity = funcs.len(),
        "composed cost functions"
    );

    let funcs: Arc<[C]> = funcs.into();
    Ok(C::from_evaluator(move |input| {
        strategy.reduce(funcs.iter().map(|f| f.evaluate(input)), funcs.len())
    }))
}

/// Compose cost functions of any kind as a weighted arithmetic mean.
///
/// # Errors
///
/// - [`CostError::EmptyComposition`] if `entries` yields nothing
/// - [`CostError::InvalidWeight`] if a weight is negative or not finite, or
///   if the weights sum to zero or overflow to infinity
pub fn compose_weighted<C, I>(entries: I) -> Result<C, CostError>
where
    C: CostFunction,
    I: IntoIterator<Item = WeightedEntry<C>>,
{
    let entries: Vec<WeightedEntry<C>> = entries.into_iter().collect();
    if entries.is_empty() {
        return Err(CostError::EmptyComposition { kind: C::KIND });
    }

    let total = validate_weights(C::KIND, &entries)?;

    if let [only] = entries.as_slice() {
        trace!(
            kind = %C::KIND,
            weight = only.weight,
            "single weighted cost function, weight ignored"
        );
        return Ok(only.cost.clone());
    }

    debug!(
        kind = %C::KIND,
        arity = entries.len(),
        total_weight = total,
        "composed weighted cost functions"
    );

    let entries: Arc<[WeightedEntry<C>]> = entries.into();
    Ok(C::from_evaluator(move |input| {
        let weighted: f64 = entries
            .iter()
            .map(|entry| entry.weight * entry.cost.evaluate(input))
            .sum();
        weighted / total
    }))
}

/// Check every weight and return their sum.
fn validate_weights<C>(
    kind: CostKind,
    entries: &[WeightedEntry<C>],
) -> Result<f64, CostError> {
    let invalid = |reason| CostError::InvalidWeight { kind, reason };

    let mut total = 0.0;
    for (index, entry) in entries.iter().enumerate() {
        let weight = entry.weight;
        if !weight.is_finite() {
            return Err(invalid(InvalidWeightReason::NonFinite { index, weight }));
        }
        if weight < 0.0 {
            return Err(invalid(InvalidWeightReason::Negative { index, weight }));
        }
        total += weight;
    }

    if total == 0.0 {
        return Err(invalid(InvalidWeightReason::ZeroTotal));
    }
    if !total.is_finite() {
        return Err(invalid(InvalidWeightReason::TotalOverflow));
    }
    Ok(total)
}

/// Combine insert cost functions with `strategy`.
///
/// # Errors
///
/// [`CostError::EmptyComposition`] if no function is supplied.
pub fn compose_insert_cost<I>(strategy: ComposeStrategy, funcs: I) -> Result<InsertCost, CostError>
where
    I: IntoIterator<Item = InsertCost>,
{
    compose(strategy, funcs)
}

/// Combine delete cost functions with `strategy`.
///
/// # Errors
///
/// [`CostError::EmptyComposition`] if no function is supplied.
pub fn compose_delete_cost<I>(strategy: ComposeStrategy, funcs: I) -> Result<DeleteCost, CostError>
where
    I: IntoIterator<Item = DeleteCost>,
{
    compose(strategy, funcs)
}

/// Combine replace cost functions with `strategy`.
///
/// # Errors
///
/// [`CostError::EmptyComposition`] if no function is supplied.
pub fn compose_replace_cost<I>(
    strategy: ComposeStrategy,
    funcs: I,
) -> Result<ReplaceCost, CostError>
where
    I: IntoIterator<Item = ReplaceCost>,
{
    compose(strategy, funcs)
}

/// Weighted mean of insert cost functions.
///
/// # Errors
///
/// See [`compose_weighted`].
pub fn compose_weighted_insert_cost<I>(entries: I) -> Result<InsertCost, CostError>
where
    I: IntoIterator<Item = WeightedEntry<InsertCost>>,
{
    compose_weighted(entries)
}

/// Weighted mean of delete cost functions.
///
/// # Errors
///
/// See [`compose_weighted`].
pub fn compose_weighted_delete_cost<I>(entries: I) -> Result<DeleteCost, CostError>
where
    I: IntoIterator<Item = WeightedEntry<DeleteCost>>,
{
    compose_weighted(entries)
}

/// Weighted mean of replace cost functions.
///
/// # Errors
///
/// See [`compose_weighted`].
pub fn compose_weighted_replace_cost<I>(entries: I) -> Result<ReplaceCost, CostError>
where
    I: IntoIterator<Item = WeightedEntry<ReplaceCost>>,
{
    compose_weighted(entries)
}
