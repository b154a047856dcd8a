#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{KeyKind, VocabError};

/// A letter grade on the 11-point scale, paired with its grade point score.
///
/// Identity is by label: `A` and `A+` are different grades that share a
/// score of 5.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericGrade {
    /// `A+`, 5.0
    #[serde(rename = "A+")]
    APlus,
    /// `A`, 5.0
    #[serde(rename = "A")]
    A,
    /// `A-`, 4.5
    #[serde(rename = "A-")]
    AMinus,
    /// `B+`, 4.0
    #[serde(rename = "B+")]
    BPlus,
    /// `B`, 3.5
    #[serde(rename = "B")]
    B,
    /// `B-`, 3.0
    #[serde(rename = "B-")]
    BMinus,
    /// `C+`, 2.5
    #[serde(rename = "C+")]
    CPlus,
    /// `C`, 2.0
    #[serde(rename = "C")]
    C,
    /// `D+`, 1.5
    #[serde(rename = "D+")]
    DPlus,
    /// `D`, 1.0
    #[serde(rename = "D")]
    D,
    /// `F`, 0.0
    #[serde(rename = "F")]
    F,
}

impl NumericGrade {
    /// Every letter grade, best first.
    pub const ALL: [NumericGrade; 11] = [
        NumericGrade::APlus,
        NumericGrade::A,
        NumericGrade::AMinus,
        NumericGrade::BPlus,
        NumericGrade::B,
        NumericGrade::BMinus,
        NumericGrade::CPlus,
        NumericGrade::C,
        NumericGrade::DPlus,
        NumericGrade::D,
        NumericGrade::F,
    ];

    /// The display label, e.g. `"B+"`.
    pub const fn label(self) -> &'static str {
        match self {
            NumericGrade::APlus => "A+",
            NumericGrade::A => "A",
            NumericGrade::AMinus => "A-",
            NumericGrade::BPlus => "B+",
            NumericGrade::B => "B",
            NumericGrade::BMinus => "B-",
            NumericGrade::CPlus => "C+",
            NumericGrade::C => "C",
            NumericGrade::DPlus => "D+",
            NumericGrade::D => "D",
            NumericGrade::F => "F",
        }
    }

    /// The grade point score used for CAP/GPA aggregation.
    pub const fn score(self) -> f64 {
        match self {
            NumericGrade::APlus | NumericGrade::A => 5.0,
            NumericGrade::AMinus => 4.5,
            NumericGrade::BPlus => 4.0,
            NumericGrade::B => 3.5,
            NumericGrade::BMinus => 3.0,
            NumericGrade::CPlus => 2.5,
            NumericGrade::C => 2.0,
            NumericGrade::DPlus => 1.5,
            NumericGrade::D => 1.0,
            NumericGrade::F => 0.0,
        }
    }
}

impl Display for NumericGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for NumericGrade {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericGrade::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| VocabError::unrecognized(KeyKind::NumericGrade, s))
    }
}
