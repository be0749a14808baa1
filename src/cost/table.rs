//! Table-driven cost functions.
//!
//! [`CharCosts`] prices single characters (for insert and delete costs) and
//! [`SubstitutionCosts`] prices character pairs (for replace costs). Both
//! fall back to a default for characters that have no explicit entry.
//!
//! ## Use Cases
//!
//! - **Whitespace-tolerant matching**: make inserting or deleting spaces cheap
//! - **OCR errors**: make visually similar characters cheap to substitute
//! - **Keyboard typos**: make adjacent keys cheap to substitute
//! - **Diacritics**: make accented and unaccented letters cheap to substitute
//!
//! ## Example
//!
//! ```rust
//! use weighted_levenshtein::cost::{CharCosts, SubstitutionCosts};
//! use weighted_levenshtein::WeightedLevenshtein;
//!
//! let mut whitespace = CharCosts::new(1.0);
//! whitespace.set(' ', 0.1);
//!
//! let ocr = SubstitutionCosts::ocr_friendly(0.2);
//!
//! let lev = WeightedLevenshtein::builder()
//!     .insert_cost(whitespace.clone().into_insert_cost())
//!     .delete_cost(whitespace.into_delete_cost())
//!     .replace_cost(ocr.into_replace_cost())
//!     .build();
//!
//! assert!((lev.distance("HELL0", "HELLO") - 0.2).abs() < 1e-9);
//! ```

use rustc_hash::FxHashMap;

use super::{DeleteCost, InsertCost, ReplaceCost};

/// Per-character cost table with a default for unlisted characters.
#[derive(Clone, Debug, PartialEq)]
pub struct CharCosts {
    default: f64,
    overrides: FxHashMap<char, f64>,
}

impl CharCosts {
    /// Create a table where every character costs `default`.
    pub fn new(default: f64) -> Self {
        Self {
            default,
            overrides: FxHashMap::default(),
        }
    }

    /// Create a table from explicit `(character, cost)` entries.
    ///
    /// ```rust
    /// # use weighted_levenshtein::cost::CharCosts;
    /// let costs = CharCosts::from_pairs(1.0, &[(' ', 0.0), ('\t', 0.0)]);
    /// assert_eq!(costs.cost(' '), 0.0);
    /// assert_eq!(costs.cost('a'), 1.0);
    /// ```
    pub fn from_pairs(default: f64, pairs: &[(char, f64)]) -> Self {
        let mut table = Self::new(default);
        for &(c, cost) in pairs {
            table.set(c, cost);
        }
        table
    }

    /// Set the cost of `c`, returning the previous explicit cost if any.
    pub fn set(&mut self, c: char, cost: f64) -> Option<f64> {
        self.overrides.insert(c, cost)
    }

    /// Cost of `c`.
    #[inline]
    pub fn cost(&self, c: char) -> f64 {
        self.overrides.get(&c).copied().unwrap_or(self.default)
    }

    /// Cost of characters without an explicit entry.
    pub fn default_cost(&self) -> f64 {
        self.default
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Use this table as an insert cost.
    pub fn into_insert_cost(self) -> InsertCost {
        InsertCost::new(move |c| self.cost(c))
    }

    /// Use this table as a delete cost.
    pub fn into_delete_cost(self) -> DeleteCost {
        DeleteCost::new(move |c| self.cost(c))
    }
}

impl Default for CharCosts {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Named sets of character pairs that are commonly confused.
///
/// Pairs are listed once; [`SubstitutionCosts::add_preset`] registers both
/// directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SubstitutionPreset {
    /// Accented Latin letters and their unaccented base letter
    DiacriticsLatin,
    /// Visually similar characters (0/O, 1/l/I, 5/S, 8/B)
    OcrFriendly,
    /// Horizontally and vertically adjacent keys on a QWERTY keyboard
    KeyboardQwerty,
    /// Common leetspeak replacements (3/e, 0/o, @/a)
    LeetSpeak,
}

impl SubstitutionPreset {
    #[rustfmt::skip]
    const DIACRITICS_LATIN: &'static [(char, char)] = &[
        ('á', 'a'), ('à', 'a'), ('â', 'a'), ('ä', 'a'), ('ã', 'a'), ('å', 'a'),
        ('é', 'e'), ('è', 'e'), ('ê', 'e'), ('ë', 'e'),
        ('í', 'i'), ('ì', 'i'), ('î', 'i'), ('ï', 'i'),
        ('ó', 'o'), ('ò', 'o'), ('ô', 'o'), ('ö', 'o'), ('õ', 'o'), ('ø', 'o'),
        ('ú', 'u'), ('ù', 'u'), ('û', 'u'), ('ü', 'u'),
        ('ñ', 'n'), ('ç', 'c'), ('ý', 'y'), ('ÿ', 'y'),
        ('Á', 'A'), ('À', 'A'), ('Â', 'A'), ('Ä', 'A'), ('Ã', 'A'), ('Å', 'A'),
        ('É', 'E'), ('È', 'E'), ('Ê', 'E'), ('Ë', 'E'),
        ('Í', 'I'), ('Ì', 'I'), ('Î', 'I'), ('Ï', 'I'),
        ('Ó', 'O'), ('Ò', 'O'), ('Ô', 'O'), ('Ö', 'O'), ('Õ', 'O'), ('Ø', 'O'),
        ('Ú', 'U'), ('Ù', 'U'), ('Û', 'U'), ('Ü', 'U'),
        ('Ñ', 'N'), ('Ç', 'C'), ('Ý', 'Y'),
    ];

    #[rustfmt::skip]
    const OCR_FRIENDLY: &'static [(char, char)] = &[
        ('0', 'O'), ('0', 'o'), ('O', 'o'),
        ('1', 'l'), ('1', 'I'), ('l', 'I'), ('1', 'i'),
        ('5', 'S'), ('8', 'B'), ('2', 'Z'), ('6', 'G'),
        ('c', 'e'), ('u', 'v'), ('m', 'n'),
    ];

    #[rustfmt::skip]
    const LEET_SPEAK: &'static [(char, char)] = &[
        ('e', '3'), ('a', '@'), ('a', '4'), ('o', '0'), ('i', '1'), ('l', '1'),
        ('s', '$'), ('s', '5'), ('t', '7'), ('b', '8'), ('g', '9'),
    ];

    const QWERTY_ROWS: [&'static str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

    /// Pairs belonging to this preset, one direction each.
    pub fn pairs(self) -> Vec<(char, char)> {
        match self {
            SubstitutionPreset::DiacriticsLatin => Self::DIACRITICS_LATIN.to_vec(),
            SubstitutionPreset::OcrFriendly => Self::OCR_FRIENDLY.to_vec(),
            SubstitutionPreset::LeetSpeak => Self::LEET_SPEAK.to_vec(),
            SubstitutionPreset::KeyboardQwerty => Self::qwerty_pairs(),
        }
    }

    fn qwerty_pairs() -> Vec<(char, char)> {
        let rows: Vec<Vec<char>> = Self::QWERTY_ROWS
            .iter()
            .map(|row| row.chars().collect())
            .collect();

        let mut pairs = Vec::new();
        for row in &rows {
            pairs.extend(row.windows(2).map(|w| (w[0], w[1])));
        }
        // Keys directly below each other (rows are staggered, so this is approximate)
        for adjacent in rows.windows(2) {
            pairs.extend(adjacent[0].iter().copied().zip(adjacent[1].iter().copied()));
        }
        pairs
    }
}

/// Per-pair replace cost table.
///
/// Lookup order for `cost(a, b)`:
///
/// 1. an explicit `(a, b)` entry
/// 2. 0 when `a == b`
/// 3. the mismatch cost
///
/// Entries are directional: `set('a', 'b', ..)` says nothing about `('b', 'a')`.
/// Use [`set_symmetric`](Self::set_symmetric) for both directions.
#[derive(Clone, Debug, PartialEq)]
pub struct SubstitutionCosts {
    mismatch: f64,
    pairs: FxHashMap<(char, char), f64>,
}

impl SubstitutionCosts {
    /// Create a table charging `mismatch` for every unequal pair.
    pub fn new(mismatch: f64) -> Self {
        Self {
            mismatch,
            pairs: FxHashMap::default(),
        }
    }

    /// Set the cost of replacing `source` with `target`.
    pub fn set(&mut self, source: char, target: char, cost: f64) -> Option<f64> {
        self.pairs.insert((source, target), cost)
    }

    /// Set the cost of replacing `a` with `b` and `b` with `a`.
    pub fn set_symmetric(&mut self, a: char, b: char, cost: f64) {
        self.pairs.insert((a, b), cost);
        self.pairs.insert((b, a), cost);
    }

    /// Register every pair of `preset` in both directions at `cost`.
    pub fn add_preset(&mut self, preset: SubstitutionPreset, cost: f64) {
        for (a, b) in preset.pairs() {
            self.set_symmetric(a, b, cost);
        }
    }

    /// Builder-style [`add_preset`](Self::add_preset).
    pub fn with_preset(mut self, preset: SubstitutionPreset, cost: f64) -> Self {
        self.add_preset(preset, cost);
        self
    }

    /// Unit mismatch cost with Latin diacritic pairs at `cost`.
    ///
    /// ```rust
    /// # use weighted_levenshtein::cost::SubstitutionCosts;
    /// let costs = SubstitutionCosts::diacritics_latin(0.1);
    /// assert_eq!(costs.cost('é', 'e'), 0.1);
    /// assert_eq!(costs.cost('e', 'é'), 0.1);
    /// assert_eq!(costs.cost('e', 'x'), 1.0);
    /// ```
    pub fn diacritics_latin(cost: f64) -> Self {
        Self::new(1.0).with_preset(SubstitutionPreset::DiacriticsLatin, cost)
    }

    /// Unit mismatch cost with OCR confusion pairs at `cost`.
    pub fn ocr_friendly(cost: f64) -> Self {
        Self::new(1.0).with_preset(SubstitutionPreset::OcrFriendly, cost)
    }

    /// Unit mismatch cost with adjacent QWERTY keys at `cost`.
    pub fn keyboard_qwerty(cost: f64) -> Self {
        Self::new(1.0).with_preset(SubstitutionPreset::KeyboardQwerty, cost)
    }

    /// Unit mismatch cost with leetspeak pairs at `cost`.
    pub fn leet_speak(cost: f64) -> Self {
        Self::new(1.0).with_preset(SubstitutionPreset::LeetSpeak, cost)
    }

    /// Cost of replacing `source` with `target`.
    #[inline]
    pub fn cost(&self, source: char, target: char) -> f64 {
        match self.pairs.get(&(source, target)) {
            Some(&cost) => cost,
            None if source == target => 0.0,
            None => self.mismatch,
        }
    }

    /// Whether `(source, target)` has an explicit entry.
    pub fn contains(&self, source: char, target: char) -> bool {
        self.pairs.contains_key(&(source, target))
    }

    /// Cost of unequal pairs without an explicit entry.
    pub fn mismatch_cost(&self) -> f64 {
        self.mismatch
    }

    /// Number of explicit (directional) entries.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Use this table as a replace cost.
    pub fn into_replace_cost(self) -> ReplaceCost {
        ReplaceCost::new(move |a, b| self.cost(a, b))
    }
}

impl Default for SubstitutionCosts {
    fn default() -> Self {
        Self::new(1.0)
    }
}
