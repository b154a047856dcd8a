#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

/// What kind of name a failed lookup was resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Any grade in the combined registry.
    Grade,
    /// A letter grade.
    NumericGrade,
    /// A Da Vinci or Enrichment grade.
    OrdinalGrade,
    /// A year level tag.
    YearType,
    /// A module category tag.
    ModuleType,
    /// A prerequisite suffix tag.
    SuffixType,
    /// A tag of any family.
    ModuleAttribute,
}

impl Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            KeyKind::Grade => "grade",
            KeyKind::NumericGrade => "letter grade",
            KeyKind::OrdinalGrade => "qualitative grade",
            KeyKind::YearType => "year type",
            KeyKind::ModuleType => "module type",
            KeyKind::SuffixType => "suffix type",
            KeyKind::ModuleAttribute => "module attribute",
        };
        write!(f, "{s}")
    }
}

/// Errors raised while resolving or comparing grade vocabulary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// The name is not part of the relevant lookup table.
    #[error("`{key}` is not a recognized {kind}.")]
    UnrecognizedKey {
        /// The table that was searched.
        kind: KeyKind,
        /// The name that was looked up.
        key:  String,
    },
    /// A qualitative grade was converted into a scale it does not belong to.
    #[error("{grade} is not on the {scale} scale.")]
    OutOfScale {
        /// Display name of the grade.
        grade: String,
        /// Name of the target scale.
        scale: &'static str,
    },
    /// Two qualitative grades share no scale and cannot be ordered.
    #[error("{left} and {right} are on different grading scales and cannot be compared.")]
    IncomparableScales {
        /// Display name of the left operand.
        left:  String,
        /// Display name of the right operand.
        right: String,
    },
}

impl VocabError {
    /// Shorthand for an [`VocabError::UnrecognizedKey`] error.
    pub fn unrecognized(kind: KeyKind, key: impl Into<String>) -> Self {
        VocabError::UnrecognizedKey {
            kind,
            key: key.into(),
        }
    }
}
