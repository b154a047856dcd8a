#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Qualitative grades and the rules for ordering them.
//!
//! Two ranking scales exist:
//!
//! | Rank | Da Vinci         | Enrichment    |
//! |------|------------------|---------------|
//! | 3    | `EXCELLENT`      | `DISTINCTION` |
//! | 2    | `MERIT`          | `MERIT`       |
//! | 1    | `SATISFACTORY`   | `PASS`        |
//! | 0    | `UNSATISFACTORY` | `FAIL`        |
//!
//! [`DaVinciGrade`] and [`EnrichmentGrade`] are the per-scale types and are
//! totally ordered. [`OrdinalGrade`] is the union of all seven names; `MERIT`
//! lives on both scales, so it orders against either family through
//! [`OrdinalGrade::try_cmp`].

use std::{cmp::Ordering, fmt::Display, ops::Mul, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{KeyKind, VocabError};

/// Display string for a name that is not a qualitative grade.
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// One of the two qualitative ranking scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// EXCELLENT > MERIT > SATISFACTORY > UNSATISFACTORY
    DaVinci,
    /// DISTINCTION > MERIT > PASS > FAIL
    Enrichment,
}

impl Scale {
    /// Human readable scale name.
    pub const fn name(self) -> &'static str {
        match self {
            Scale::DaVinci => "Da Vinci",
            Scale::Enrichment => "Enrichment",
        }
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A grade on the Da Vinci scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DaVinciGrade {
    /// Rank 3.
    Excellent,
    /// Rank 2, shared with the Enrichment scale.
    Merit,
    /// Rank 1.
    Satisfactory,
    /// Rank 0.
    Unsatisfactory,
}

impl DaVinciGrade {
    /// Every Da Vinci grade, best first.
    pub const ALL: [DaVinciGrade; 4] = [
        DaVinciGrade::Excellent,
        DaVinciGrade::Merit,
        DaVinciGrade::Satisfactory,
        DaVinciGrade::Unsatisfactory,
    ];

    /// Position on the scale, 0 (worst) to 3 (best).
    pub const fn rank(self) -> u8 {
        match self {
            DaVinciGrade::Excellent => 3,
            DaVinciGrade::Merit => 2,
            DaVinciGrade::Satisfactory => 1,
            DaVinciGrade::Unsatisfactory => 0,
        }
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        OrdinalGrade::from_da_vinci(self).name()
    }
}

/// A grade on the Enrichment scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrichmentGrade {
    /// Rank 3.
    Distinction,
    /// Rank 2, shared with the Da Vinci scale.
    Merit,
    /// Rank 1.
    Pass,
    /// Rank 0.
    Fail,
}

impl EnrichmentGrade {
    /// Every Enrichment grade, best first.
    pub const ALL: [EnrichmentGrade; 4] = [
        EnrichmentGrade::Distinction,
        EnrichmentGrade::Merit,
        EnrichmentGrade::Pass,
        EnrichmentGrade::Fail,
    ];

    /// Position on the scale, 0 (worst) to 3 (best).
    pub const fn rank(self) -> u8 {
        match self {
            EnrichmentGrade::Distinction => 3,
            EnrichmentGrade::Merit => 2,
            EnrichmentGrade::Pass => 1,
            EnrichmentGrade::Fail => 0,
        }
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        OrdinalGrade::from_enrichment(self).name()
    }
}

impl PartialOrd for DaVinciGrade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DaVinciGrade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for EnrichmentGrade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnrichmentGrade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Any qualitative grade.
///
/// Equality is by name. There is no `PartialOrd<OrdinalGrade>` impl: ordering
/// only exists between grades that share a scale, see
/// [`OrdinalGrade::try_cmp`]. Against a [`DaVinciGrade`] or an
/// [`EnrichmentGrade`] the relational operators work directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdinalGrade {
    /// Da Vinci rank 3.
    Excellent,
    /// Rank 2 on both scales.
    Merit,
    /// Da Vinci rank 1.
    Satisfactory,
    /// Da Vinci rank 0.
    Unsatisfactory,
    /// Enrichment rank 3.
    Distinction,
    /// Enrichment rank 1.
    Pass,
    /// Enrichment rank 0.
    Fail,
}

impl OrdinalGrade {
    /// Every qualitative grade: the Da Vinci scale best first, then the
    /// Enrichment-only grades best first.
    pub const ALL: [OrdinalGrade; 7] = [
        OrdinalGrade::Excellent,
        OrdinalGrade::Merit,
        OrdinalGrade::Satisfactory,
        OrdinalGrade::Unsatisfactory,
        OrdinalGrade::Distinction,
        OrdinalGrade::Pass,
        OrdinalGrade::Fail,
    ];

    /// Canonical display name, e.g. `"MERIT"`.
    pub const fn name(self) -> &'static str {
        match self {
            OrdinalGrade::Excellent => "EXCELLENT",
            OrdinalGrade::Merit => "MERIT",
            OrdinalGrade::Satisfactory => "SATISFACTORY",
            OrdinalGrade::Unsatisfactory => "UNSATISFACTORY",
            OrdinalGrade::Distinction => "DISTINCTION",
            OrdinalGrade::Pass => "PASS",
            OrdinalGrade::Fail => "FAIL",
        }
    }

    /// Canonical name for `name` if it is a qualitative grade, otherwise
    /// [`UNRECOGNIZED`].
    pub fn name_of(name: &str) -> &'static str {
        name.parse::<OrdinalGrade>()
            .map(OrdinalGrade::name)
            .unwrap_or(UNRECOGNIZED)
    }

    /// Widens a Da Vinci grade.
    pub const fn from_da_vinci(grade: DaVinciGrade) -> Self {
        match grade {
            DaVinciGrade::Excellent => OrdinalGrade::Excellent,
            DaVinciGrade::Merit => OrdinalGrade::Merit,
            DaVinciGrade::Satisfactory => OrdinalGrade::Satisfactory,
            DaVinciGrade::Unsatisfactory => OrdinalGrade::Unsatisfactory,
        }
    }

    /// Widens an Enrichment grade.
    pub const fn from_enrichment(grade: EnrichmentGrade) -> Self {
        match grade {
            EnrichmentGrade::Distinction => OrdinalGrade::Distinction,
            EnrichmentGrade::Merit => OrdinalGrade::Merit,
            EnrichmentGrade::Pass => OrdinalGrade::Pass,
            EnrichmentGrade::Fail => OrdinalGrade::Fail,
        }
    }

    /// This grade as a Da Vinci grade, if it is on that scale.
    pub const fn as_da_vinci(self) -> Option<DaVinciGrade> {
        match self {
            OrdinalGrade::Excellent => Some(DaVinciGrade::Excellent),
            OrdinalGrade::Merit => Some(DaVinciGrade::Merit),
            OrdinalGrade::Satisfactory => Some(DaVinciGrade::Satisfactory),
            OrdinalGrade::Unsatisfactory => Some(DaVinciGrade::Unsatisfactory),
            OrdinalGrade::Distinction | OrdinalGrade::Pass | OrdinalGrade::Fail => None,
        }
    }

    /// This grade as an Enrichment grade, if it is on that scale.
    pub const fn as_enrichment(self) -> Option<EnrichmentGrade> {
        match self {
            OrdinalGrade::Distinction => Some(EnrichmentGrade::Distinction),
            OrdinalGrade::Merit => Some(EnrichmentGrade::Merit),
            OrdinalGrade::Pass => Some(EnrichmentGrade::Pass),
            OrdinalGrade::Fail => Some(EnrichmentGrade::Fail),
            OrdinalGrade::Excellent | OrdinalGrade::Satisfactory | OrdinalGrade::Unsatisfactory => {
                None
            }
        }
    }

    /// Da Vinci rank, or `None` for Enrichment-only grades.
    pub fn da_vinci_rank(self) -> Option<u8> {
        self.as_da_vinci().map(DaVinciGrade::rank)
    }

    /// Enrichment rank, or `None` for Da Vinci-only grades.
    pub fn enrichment_rank(self) -> Option<u8> {
        self.as_enrichment().map(EnrichmentGrade::rank)
    }

    /// Rank on the given scale, or `None` if the grade is not on it.
    pub fn rank_on(self, scale: Scale) -> Option<u8> {
        match scale {
            Scale::DaVinci => self.da_vinci_rank(),
            Scale::Enrichment => self.enrichment_rank(),
        }
    }

    /// The scales this grade belongs to. Only `MERIT` has two.
    pub const fn scales(self) -> &'static [Scale] {
        match self {
            OrdinalGrade::Merit => &[Scale::DaVinci, Scale::Enrichment],
            OrdinalGrade::Excellent | OrdinalGrade::Satisfactory | OrdinalGrade::Unsatisfactory => {
                &[Scale::DaVinci]
            }
            OrdinalGrade::Distinction | OrdinalGrade::Pass | OrdinalGrade::Fail => {
                &[Scale::Enrichment]
            }
        }
    }

    /// Orders two grades on a scale they share.
    ///
    /// `MERIT` takes the scale of its partner; `MERIT` against itself is
    /// `Equal`. Grades with no common scale, such as `EXCELLENT` and `PASS`,
    /// produce [`VocabError::IncomparableScales`].
    pub fn try_cmp(self, other: OrdinalGrade) -> Result<Ordering, VocabError> {
        if let (Some(a), Some(b)) = (self.as_da_vinci(), other.as_da_vinci()) {
            return Ok(a.cmp(&b));
        }
        if let (Some(a), Some(b)) = (self.as_enrichment(), other.as_enrichment()) {
            return Ok(a.cmp(&b));
        }
        Err(VocabError::IncomparableScales {
            left:  self.name().to_string(),
            right: other.name().to_string(),
        })
    }

    /// `self > other`; `false` when the grades share no scale.
    pub fn is_above(self, other: OrdinalGrade) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Greater))
    }

    /// `self < other`; `false` when the grades share no scale.
    pub fn is_below(self, other: OrdinalGrade) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Less))
    }

    /// `self >= other`; `false` when the grades share no scale.
    pub fn is_at_least(self, other: OrdinalGrade) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Greater | Ordering::Equal))
    }

    /// `self <= other`; `false` when the grades share no scale.
    pub fn is_at_most(self, other: OrdinalGrade) -> bool {
        matches!(self.try_cmp(other), Ok(Ordering::Less | Ordering::Equal))
    }

    /// Weight this grade contributes to a credit-weighted aggregate: always
    /// zero, qualitative grades carry no grade points.
    pub const fn credit_weight(self) -> f64 {
        0.0
    }
}

/// Compares an [`OrdinalGrade`] with a scale-typed grade on that scale.
///
/// `OrdinalGrade::Merit > DaVinciGrade::Satisfactory` holds, while a grade
/// off the scale (`OrdinalGrade::Pass` against any Da Vinci grade) is
/// unordered and unequal.
macro_rules! scale_comparisons {
    ($scale:ty, $narrow:ident) => {
        impl PartialEq<$scale> for OrdinalGrade {
            fn eq(&self, other: &$scale) -> bool {
                self.$narrow() == Some(*other)
            }
        }

        impl PartialEq<OrdinalGrade> for $scale {
            fn eq(&self, other: &OrdinalGrade) -> bool {
                other == self
            }
        }

        impl PartialOrd<$scale> for OrdinalGrade {
            fn partial_cmp(&self, other: &$scale) -> Option<Ordering> {
                self.$narrow().map(|g| g.cmp(other))
            }
        }

        impl PartialOrd<OrdinalGrade> for $scale {
            fn partial_cmp(&self, other: &OrdinalGrade) -> Option<Ordering> {
                PartialOrd::<$scale>::partial_cmp(other, self).map(Ordering::reverse)
            }
        }
    };
}

scale_comparisons!(DaVinciGrade, as_da_vinci);
scale_comparisons!(EnrichmentGrade, as_enrichment);

impl Display for OrdinalGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for DaVinciGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for EnrichmentGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OrdinalGrade {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrdinalGrade::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| VocabError::unrecognized(KeyKind::OrdinalGrade, s))
    }
}

impl FromStr for DaVinciGrade {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<OrdinalGrade>()?.try_into()
    }
}

impl FromStr for EnrichmentGrade {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<OrdinalGrade>()?.try_into()
    }
}

impl From<DaVinciGrade> for OrdinalGrade {
    fn from(value: DaVinciGrade) -> Self {
        OrdinalGrade::from_da_vinci(value)
    }
}

impl From<EnrichmentGrade> for OrdinalGrade {
    fn from(value: EnrichmentGrade) -> Self {
        OrdinalGrade::from_enrichment(value)
    }
}

impl TryFrom<OrdinalGrade> for DaVinciGrade {
    type Error = VocabError;

    fn try_from(value: OrdinalGrade) -> Result<Self, Self::Error> {
        value.as_da_vinci().ok_or_else(|| VocabError::OutOfScale {
            grade: value.name().to_string(),
            scale: Scale::DaVinci.name(),
        })
    }
}

impl TryFrom<OrdinalGrade> for EnrichmentGrade {
    type Error = VocabError;

    fn try_from(value: OrdinalGrade) -> Result<Self, Self::Error> {
        value.as_enrichment().ok_or_else(|| VocabError::OutOfScale {
            grade: value.name().to_string(),
            scale: Scale::Enrichment.name(),
        })
    }
}

/// `grade * n` and `n * grade` are zero for every qualitative grade, so
/// formula-style aggregation over mixed grades does not need a special case.
macro_rules! zero_product {
    ($grade:ty => $($num:ty),+) => {
        $(
            impl Mul<$num> for $grade {
                type Output = $num;

                fn mul(self, _rhs: $num) -> $num {
                    0 as $num
                }
            }

            impl Mul<$grade> for $num {
                type Output = $num;

                fn mul(self, _rhs: $grade) -> $num {
                    0 as $num
                }
            }
        )+
    };
}

zero_product!(OrdinalGrade => f64, f32, i32, i64, u32, u64, usize);
zero_product!(DaVinciGrade => f64, f32, i32, i64, u32, u64, usize);
zero_product!(EnrichmentGrade => f64, f32, i32, i64, u32, u64, usize);
