//! Serializable cost configuration.
//!
//! A [`CostConfig`] describes the three cost functions of an engine as plain
//! data, so they can live in a JSON document next to the rest of an
//! application's settings instead of in code.
//!
//! Every section and field is optional; a missing section means unit costs.
//!
//! # Example
//!
//! ```rust
//! use weighted_levenshtein::config::CostConfig;
//!
//! let config = CostConfig::from_json_str(r#"{
//!     "insert": { "default": 1.0, "overrides": { " ": 0.0 } },
//!     "delete": { "overrides": { " ": 0.0 } },
//!     "replace": {
//!         "mismatch": 1.0,
//!         "presets": [{ "preset": "ocr_friendly", "cost": 0.5 }],
//!         "pairs": [{ "from": "a", "to": "b", "cost": 0.25, "symmetric": true }]
//!     }
//! }"#)?;
//!
//! let lev = config.build()?;
//! assert_eq!(lev.distance("new york", "newyork"), 0.0);
//! assert_eq!(lev.distance("B0X", "BOX"), 0.5);
//! assert_eq!(lev.distance("b", "a"), 0.25);
//! # Ok::<(), weighted_levenshtein::config::ConfigError>(())
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cost::{
    compose_replace_cost, CharCosts, ComposeStrategy, CostKind, ReplaceCost, SubstitutionCosts,
    SubstitutionPreset,
};
use crate::distance::WeightedLevenshtein;
use crate::error::CostError;

/// Errors that can occur while loading or applying a cost configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error while reading the document
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// A cost is negative, NaN or infinite
    #[error("invalid {kind} cost {value}: costs must be finite and non-negative")]
    InvalidCost {
        /// Section the cost belongs to
        kind: CostKind,
        /// The rejected value
        value: f64,
    },
    /// Combining the configured replace costs failed.
    ///
    /// Reserved: [`CostConfig::build`] always supplies at least one replace
    /// candidate, so the current schema cannot produce it.
    #[error("composition error: {0}")]
    Compose(#[from] CostError),
}

fn unit() -> f64 {
    1.0
}

/// Costs of one unary operation (insert or delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharCostConfig {
    /// Cost of characters without an override
    #[serde(default = "unit")]
    pub default: f64,
    /// Per-character costs
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<char, f64>,
}

impl Default for CharCostConfig {
    fn default() -> Self {
        Self {
            default: unit(),
            overrides: BTreeMap::new(),
        }
    }
}

impl CharCostConfig {
    fn validate(&self, kind: CostKind) -> Result<(), ConfigError> {
        check_cost(kind, self.default)?;
        self.overrides
            .values()
            .try_for_each(|&cost| check_cost(kind, cost))
    }

    fn to_table(&self) -> CharCosts {
        let mut table = CharCosts::new(self.default);
        for (&c, &cost) in &self.overrides {
            table.set(c, cost);
        }
        table
    }
}

/// A preset applied in both directions at one cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    /// Which preset
    pub preset: SubstitutionPreset,
    /// Cost of every pair in the preset
    pub cost: f64,
}

/// One explicit replace cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairCostConfig {
    /// Source character
    pub from: char,
    /// Target character
    pub to: char,
    /// Cost of replacing `from` with `to`
    pub cost: f64,
    /// Also apply the cost to `to` → `from`
    #[serde(default)]
    pub symmetric: bool,
}

/// Costs of the replace operation.
///
/// Presets are applied first and explicit pairs second, so a pair overrides a
/// preset entry for the same characters. When `case_cost` is set, unequal
/// characters differing only in case cost at most `case_cost`; every other
/// pair, equal pairs included, keeps its table cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceCostConfig {
    /// Cost of unequal characters without an explicit entry
    #[serde(default = "unit")]
    pub mismatch: f64,
    /// Cost of characters that differ only in case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_cost: Option<f64>,
    /// Presets to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<PresetConfig>,
    /// Explicit pair costs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<PairCostConfig>,
}

impl Default for ReplaceCostConfig {
    fn default() -> Self {
        Self {
            mismatch: unit(),
            case_cost: None,
            presets: Vec::new(),
            pairs: Vec::new(),
        }
    }
}

impl ReplaceCostConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let kind = CostKind::Replace;
        check_cost(kind, self.mismatch)?;
        if let Some(case_cost) = self.case_cost {
            check_cost(kind, case_cost)?;
        }
        self.presets
            .iter()
            .try_for_each(|preset| check_cost(kind, preset.cost))?;
        self.pairs
            .iter()
            .try_for_each(|pair| check_cost(kind, pair.cost))
    }

    fn to_replace_cost(&self) -> Result<ReplaceCost, ConfigError> {
        let mut table = SubstitutionCosts::new(self.mismatch);
        for preset in &self.presets {
            table.add_preset(preset.preset, preset.cost);
        }
        for pair in &self.pairs {
            if pair.symmetric {
                table.set_symmetric(pair.from, pair.to, pair.cost);
            } else {
                table.set(pair.from, pair.to, pair.cost);
            }
        }

        let mut candidates = vec![table.into_replace_cost()];
        if let Some(case_cost) = self.case_cost {
            // Only case-only pairs get a finite candidate, so the table decides everything else
            candidates.push(ReplaceCost::new(move |a, b| {
                if a != b && a.to_lowercase().eq(b.to_lowercase()) {
                    case_cost
                } else {
                    f64::INFINITY
                }
            }));
        }
        Ok(compose_replace_cost(ComposeStrategy::Min, candidates)?)
    }
}

/// Data description of an engine's insert, delete and replace costs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Insert costs
    pub insert: CharCostConfig,
    /// Delete costs
    pub delete: CharCostConfig,
    /// Replace costs
    pub replace: ReplaceCostConfig,
}

impl CostConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or has
    /// unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or reading
    /// fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Render the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if a cost cannot be represented in JSON
    /// (NaN or infinite).
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every cost is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCost`] for the first offending cost.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.insert.validate(CostKind::Insert)?;
        self.delete.validate(CostKind::Delete)?;
        self.replace.validate()
    }

    /// Validate the configuration and build an engine from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCost`] if a cost is invalid.
    pub fn build(&self) -> Result<WeightedLevenshtein, ConfigError> {
        self.validate()?;

        debug!(
            insert_overrides = self.insert.overrides.len(),
            delete_overrides = self.delete.overrides.len(),
            replace_presets = self.replace.presets.len(),
            replace_pairs = self.replace.pairs.len(),
            "building weighted levenshtein from configuration"
        );

        Ok(WeightedLevenshtein::builder()
            .insert_cost(self.insert.to_table().into_insert_cost())
            .delete_cost(self.delete.to_table().into_delete_cost())
            .replace_cost(self.replace.to_replace_cost()?)
            .build())
    }
}

fn check_cost(kind: CostKind, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCost { kind, value })
    }
}
