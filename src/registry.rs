#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{
    error::{KeyKind, VocabError},
    numeric::NumericGrade,
    ordinal::OrdinalGrade,
};

/// A grade as it appears on a transcript: a letter grade or a qualitative
/// grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    /// A letter grade with a grade point score.
    Numeric(NumericGrade),
    /// A Da Vinci or Enrichment grade.
    Ordinal(OrdinalGrade),
}

impl Grade {
    /// Every grade known to the registry, in table order: letters best
    /// first, then the Da Vinci scale, then the Enrichment-only grades.
    pub const ALL: [Grade; 18] = [
        Grade::Numeric(NumericGrade::APlus),
        Grade::Numeric(NumericGrade::A),
        Grade::Numeric(NumericGrade::AMinus),
        Grade::Numeric(NumericGrade::BPlus),
        Grade::Numeric(NumericGrade::B),
        Grade::Numeric(NumericGrade::BMinus),
        Grade::Numeric(NumericGrade::CPlus),
        Grade::Numeric(NumericGrade::C),
        Grade::Numeric(NumericGrade::DPlus),
        Grade::Numeric(NumericGrade::D),
        Grade::Numeric(NumericGrade::F),
        Grade::Ordinal(OrdinalGrade::Excellent),
        Grade::Ordinal(OrdinalGrade::Merit),
        Grade::Ordinal(OrdinalGrade::Satisfactory),
        Grade::Ordinal(OrdinalGrade::Unsatisfactory),
        Grade::Ordinal(OrdinalGrade::Distinction),
        Grade::Ordinal(OrdinalGrade::Pass),
        Grade::Ordinal(OrdinalGrade::Fail),
    ];

    /// The textual representation the registry keys this grade by.
    pub const fn key(self) -> &'static str {
        match self {
            Grade::Numeric(g) => g.label(),
            Grade::Ordinal(g) => g.name(),
        }
    }

    /// Grade point score for letter grades, `None` for qualitative grades.
    pub fn score(self) -> Option<f64> {
        self.as_numeric().map(NumericGrade::score)
    }

    /// Points this grade contributes per credit: the score of a letter
    /// grade, zero for a qualitative grade.
    pub fn credit_weight(self) -> f64 {
        match self {
            Grade::Numeric(g) => g.score(),
            Grade::Ordinal(g) => g.credit_weight(),
        }
    }

    /// Whether this is a letter grade.
    pub fn is_numeric(self) -> bool {
        matches!(self, Grade::Numeric(_))
    }

    /// The letter grade, if this is one.
    pub fn as_numeric(self) -> Option<NumericGrade> {
        match self {
            Grade::Numeric(g) => Some(g),
            Grade::Ordinal(_) => None,
        }
    }

    /// The qualitative grade, if this is one.
    pub fn as_ordinal(self) -> Option<OrdinalGrade> {
        match self {
            Grade::Ordinal(g) => Some(g),
            Grade::Numeric(_) => None,
        }
    }

    /// Orders two grades: letter grades by score, qualitative grades by a
    /// shared scale. A letter grade never orders against a qualitative one.
    pub fn try_cmp(self, other: Grade) -> Result<Ordering, VocabError> {
        match (self, other) {
            (Grade::Numeric(a), Grade::Numeric(b)) => Ok(a.score().total_cmp(&b.score())),
            (Grade::Ordinal(a), Grade::Ordinal(b)) => a.try_cmp(b),
            _ => Err(VocabError::IncomparableScales {
                left:  self.to_string(),
                right: other.to_string(),
            }),
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Grade {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry().lookup(s)
    }
}

impl From<NumericGrade> for Grade {
    fn from(value: NumericGrade) -> Self {
        Grade::Numeric(value)
    }
}

impl From<OrdinalGrade> for Grade {
    fn from(value: OrdinalGrade) -> Self {
        Grade::Ordinal(value)
    }
}

/// Maps every textual grade representation to its [`Grade`].
#[derive(Debug, Clone)]
pub struct GradeRegistry {
    /// Key to grade.
    by_key: HashMap<&'static str, Grade>,
}

impl GradeRegistry {
    /// Builds the registry from [`Grade::ALL`].
    pub fn new() -> Self {
        let by_key: HashMap<_, _> = Grade::ALL.into_iter().map(|g| (g.key(), g)).collect();
        debug_assert_eq!(by_key.len(), Grade::ALL.len(), "duplicate grade key");
        tracing::debug!("built grade registry with {} entries", by_key.len());
        Self { by_key }
    }

    /// The grade for `key`, if any. Keys are case-sensitive.
    pub fn get(&self, key: &str) -> Option<Grade> {
        self.by_key.get(key).copied()
    }

    /// The grade for `key`, or [`VocabError::UnrecognizedKey`].
    pub fn lookup(&self, key: &str) -> Result<Grade, VocabError> {
        self.get(key).ok_or_else(|| {
            tracing::debug!("no grade named `{key}` in the registry");
            VocabError::unrecognized(KeyKind::Grade, key)
        })
    }

    /// Whether `key` names a grade.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Always `false` for a registry built by [`GradeRegistry::new`].
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Key and grade pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Grade)> + '_ {
        Grade::ALL
            .into_iter()
            .filter_map(|g| self.by_key.get(g.key()).map(|&v| (g.key(), v)))
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|(k, _)| k)
    }
}

impl Default for GradeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry, built on first use.
static REGISTRY: OnceLock<GradeRegistry> = OnceLock::new();

/// Returns the process-wide registry.
pub fn registry() -> &'static GradeRegistry {
    REGISTRY.get_or_init(GradeRegistry::new)
}

/// Resolves free-text grade input against the process-wide registry.
pub fn lookup(key: &str) -> Result<Grade, VocabError> {
    registry().lookup(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_maps_back_to_itself() {
        let reg = GradeRegistry::new();
        for (key, grade) in reg.iter() {
            assert_eq!(grade.to_string(), key);
        }
        assert_eq!(reg.keys().count(), 18);
    }

    #[test]
    fn untagged_serde_picks_the_right_family() {
        let g: Grade = serde_json::from_str("\"A-\"").expect("letter");
        assert_eq!(g, Grade::Numeric(NumericGrade::AMinus));
        let g: Grade = serde_json::from_str("\"PASS\"").expect("ordinal");
        assert_eq!(g, Grade::Ordinal(OrdinalGrade::Pass));
        assert!(serde_json::from_str::<Grade>("\"Z\"").is_err());
    }
}
