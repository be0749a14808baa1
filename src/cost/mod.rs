//! Pluggable per-character edit costs.
//!
//! An edit distance is parameterised by three cost functions:
//!
//! - [`InsertCost`]: price of inserting one character of the target
//! - [`DeleteCost`]: price of deleting one character of the source
//! - [`ReplaceCost`]: price of substituting a source character with a target character
//!
//! Each type wraps a shared, immutable closure, so cloning is cheap and every
//! cost function can be handed to several engines or threads at once.
//! Cost functions are expected to be pure and deterministic; the engine may
//! evaluate a function once per character and reuse the value.
//!
//! Several candidate functions of the same kind can be merged into one with
//! the [`compose`](self::compose) family, and table-driven costs are available
//! through [`CharCosts`] and [`SubstitutionCosts`].
//!
//! ## Example
//!
//! ```rust
//! use weighted_levenshtein::cost::{InsertCost, ReplaceCost};
//!
//! let insert = InsertCost::new(|c| if c.is_whitespace() { 0.25 } else { 1.0 });
//! assert_eq!(insert.cost(' '), 0.25);
//! assert_eq!(insert.cost('x'), 1.0);
//!
//! let replace = ReplaceCost::case_insensitive(0.1, 1.0);
//! assert_eq!(replace.cost('a', 'a'), 0.0);
//! assert_eq!(replace.cost('a', 'A'), 0.1);
//! assert_eq!(replace.cost('a', 'b'), 1.0);
//! ```

use std::fmt;
use std::sync::Arc;

pub mod compose;
mod table;

pub use self::compose::{
    compose_delete_cost, compose_insert_cost, compose_replace_cost, compose_weighted_delete_cost,
    compose_weighted_insert_cost, compose_weighted_replace_cost, ComposeStrategy, WeightedEntry,
};
pub use self::table::{CharCosts, SubstitutionCosts, SubstitutionPreset};

/// Which edit operation a cost function prices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CostKind {
    /// Inserting a character of the target sequence
    Insert,
    /// Deleting a character of the source sequence
    Delete,
    /// Substituting a source character with a target character
    Replace,
}

impl CostKind {
    /// Lowercase name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            CostKind::Insert => "insert",
            CostKind::Delete => "delete",
            CostKind::Replace => "replace",
        }
    }
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default insert cost: every character costs 1.
#[inline]
pub fn default_insert_cost(_c: char) -> f64 {
    1.0
}

/// Default delete cost: every character costs 1.
#[inline]
pub fn default_delete_cost(_c: char) -> f64 {
    1.0
}

/// Default replace cost: 0 for equal characters, otherwise 1.
#[inline]
pub fn default_replace_cost(a: char, b: char) -> f64 {
    if a == b {
        0.0
    } else {
        1.0
    }
}

/// Common interface of the three cost function types.
///
/// This lets composition and other generic code treat insert, delete and
/// replace costs uniformly. `Input` is `char` for the unary costs and
/// `(char, char)` for [`ReplaceCost`].
pub trait CostFunction: Clone + Send + Sync + 'static {
    /// Argument the function is evaluated at.
    type Input: Copy;

    /// Edit operation this function prices.
    const KIND: CostKind;

    /// Evaluate the cost at `input`.
    fn evaluate(&self, input: Self::Input) -> f64;

    /// Wrap a closure as a cost function of this kind.
    fn from_evaluator<F>(evaluator: F) -> Self
    where
        F: Fn(Self::Input) -> f64 + Send + Sync + 'static;

    /// Whether both values share the same underlying function object.
    fn ptr_eq(&self, other: &Self) -> bool;
}

type UnitFn = dyn Fn(char) -> f64 + Send + Sync;
type PairFn = dyn Fn(char, char) -> f64 + Send + Sync;

macro_rules! unit_cost {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $default:path) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Arc<UnitFn>);

        impl $name {
            /// Wrap a closure as a cost function.
            pub fn new<F>(f: F) -> Self
            where
                F: Fn(char) -> f64 + Send + Sync + 'static,
            {
                Self(Arc::new(f))
            }

            /// Every character costs 1.
            pub fn unit() -> Self {
                Self::new($default)
            }

            /// Every character costs `cost`.
            pub fn constant(cost: f64) -> Self {
                Self::new(move |_| cost)
            }

            /// Cost of the operation on `c`.
            #[inline]
            pub fn cost(&self, c: char) -> f64 {
                (self.0)(c)
            }

            /// Whether both values share the same underlying function object.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::unit()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        impl CostFunction for $name {
            type Input = char;
            const KIND: CostKind = $kind;

            #[inline]
            fn evaluate(&self, input: char) -> f64 {
                self.cost(input)
            }

            fn from_evaluator<F>(evaluator: F) -> Self
            where
                F: Fn(char) -> f64 + Send + Sync + 'static,
            {
                Self::new(evaluator)
            }

            fn ptr_eq(&self, other: &Self) -> bool {
                $name::ptr_eq(self, other)
            }
        }
    };
}

unit_cost!(
    /// Cost of inserting a single character of the target sequence.
    InsertCost,
    CostKind::Insert,
    default_insert_cost
);

unit_cost!(
    /// Cost of deleting a single character of the source sequence.
    DeleteCost,
    CostKind::Delete,
    default_delete_cost
);

/// Cost of substituting a source character with a target character.
///
/// Arguments are ordered `(source, target)`. Replace costs need not be
/// symmetric, and returning 0 for equal characters is a convention the
/// engine does not enforce.
#[derive(Clone)]
pub struct ReplaceCost(Arc<PairFn>);

impl ReplaceCost {
    /// Wrap a closure as a replace cost.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(char, char) -> f64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// 0 for equal characters, otherwise 1.
    pub fn equality() -> Self {
        Self::new(default_replace_cost)
    }

    /// 0 for equal characters, otherwise `cost`.
    pub fn mismatch(cost: f64) -> Self {
        Self::new(move |a, b| if a == b { 0.0 } else { cost })
    }

    /// Every pair costs `cost`, equal characters included.
    pub fn constant(cost: f64) -> Self {
        Self::new(move |_, _| cost)
    }

    /// Characters differing only in case cost `case_cost`, other mismatches cost `mismatch`.
    ///
    /// ```rust
    /// # use weighted_levenshtein::cost::ReplaceCost;
    /// let replace = ReplaceCost::case_insensitive(0.0, 1.0);
    /// assert_eq!(replace.cost('Σ', 'σ'), 0.0);
    /// assert_eq!(replace.cost('Σ', 'τ'), 1.0);
    /// ```
    pub fn case_insensitive(case_cost: f64, mismatch: f64) -> Self {
        Self::new(move |a, b| {
            if a == b {
                0.0
            } else if a.to_lowercase().eq(b.to_lowercase()) {
                case_cost
            } else {
                mismatch
            }
        })
    }

    /// Cost of replacing `source` with `target`.
    #[inline]
    pub fn cost(&self, source: char, target: char) -> f64 {
        (self.0)(source, target)
    }

    /// Whether both values share the same underlying function object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ReplaceCost {
    fn default() -> Self {
        Self::equality()
    }
}

impl fmt::Debug for ReplaceCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplaceCost").finish_non_exhaustive()
    }
}

impl CostFunction for ReplaceCost {
    type Input = (char, char);
    const KIND: CostKind = CostKind::Replace;

    #[inline]
    fn evaluate(&self, (source, target): (char, char)) -> f64 {
        self.cost(source, target)
    }

    fn from_evaluator<F>(evaluator: F) -> Self
    where
        F: Fn((char, char)) -> f64 + Send + Sync + 'static,
    {
        Self::new(move |a, b| evaluator((a, b)))
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        ReplaceCost::ptr_eq(self, other)
    }
}
