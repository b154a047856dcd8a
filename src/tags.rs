#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{KeyKind, VocabError};

/// Year level of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YearType {
    /// Foundation year.
    Foundation,
    /// Intermediate year.
    Intermediate,
    /// Advanced year.
    Advanced,
}

/// Category of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleType {
    /// Elective module.
    Elective,
    /// Core module.
    Core,
    /// Enrichment module, graded on the Enrichment scale.
    Enrichment,
    /// Honours module.
    Honor,
}

/// How a module relates to another module's prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuffixType {
    /// Precludes another module.
    Preclusion,
    /// Core prerequisite.
    CorePrereq,
    /// Major taken in lieu.
    MtInLieu,
    /// Taken externally.
    External,
}

impl YearType {
    /// Every year type, in declaration order.
    pub const ALL: [YearType; 3] = [YearType::Foundation, YearType::Intermediate, YearType::Advanced];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            YearType::Foundation => "FOUNDATION",
            YearType::Intermediate => "INTERMEDIATE",
            YearType::Advanced => "ADVANCED",
        }
    }
}

impl ModuleType {
    /// Every module type, in declaration order.
    pub const ALL: [ModuleType; 4] =
        [ModuleType::Elective, ModuleType::Core, ModuleType::Enrichment, ModuleType::Honor];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            ModuleType::Elective => "ELECTIVE",
            ModuleType::Core => "CORE",
            ModuleType::Enrichment => "ENRICHMENT",
            ModuleType::Honor => "HONOR",
        }
    }
}

impl SuffixType {
    /// Every suffix type, in declaration order.
    pub const ALL: [SuffixType; 4] = [
        SuffixType::Preclusion,
        SuffixType::CorePrereq,
        SuffixType::MtInLieu,
        SuffixType::External,
    ];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            SuffixType::Preclusion => "PRECLUSION",
            SuffixType::CorePrereq => "CORE_PREREQ",
            SuffixType::MtInLieu => "MT_IN_LIEU",
            SuffixType::External => "EXTERNAL",
        }
    }
}

/// Implements `Display` and a by-name `FromStr` for a tag family.
macro_rules! tag_family {
    ($ty:ident, $kind:expr) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl FromStr for $ty {
            type Err = VocabError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|t| t.name() == s)
                    .ok_or_else(|| VocabError::unrecognized($kind, s))
            }
        }
    };
}

tag_family!(YearType, KeyKind::YearType);
tag_family!(ModuleType, KeyKind::ModuleType);
tag_family!(SuffixType, KeyKind::SuffixType);

/// A tag from any of the three families, for combined name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleAttribute {
    /// A year level.
    Year(YearType),
    /// A module category.
    Module(ModuleType),
    /// A prerequisite suffix.
    Suffix(SuffixType),
}

impl ModuleAttribute {
    /// Every tag across all three families, year types first.
    pub const ALL: [ModuleAttribute; 11] = [
        ModuleAttribute::Year(YearType::Foundation),
        ModuleAttribute::Year(YearType::Intermediate),
        ModuleAttribute::Year(YearType::Advanced),
        ModuleAttribute::Module(ModuleType::Elective),
        ModuleAttribute::Module(ModuleType::Core),
        ModuleAttribute::Module(ModuleType::Enrichment),
        ModuleAttribute::Module(ModuleType::Honor),
        ModuleAttribute::Suffix(SuffixType::Preclusion),
        ModuleAttribute::Suffix(SuffixType::CorePrereq),
        ModuleAttribute::Suffix(SuffixType::MtInLieu),
        ModuleAttribute::Suffix(SuffixType::External),
    ];

    /// Stable display name of the wrapped tag.
    pub const fn name(self) -> &'static str {
        match self {
            ModuleAttribute::Year(t) => t.name(),
            ModuleAttribute::Module(t) => t.name(),
            ModuleAttribute::Suffix(t) => t.name(),
        }
    }

    /// Name of the family the tag belongs to.
    pub const fn family(self) -> &'static str {
        match self {
            ModuleAttribute::Year(_) => "year",
            ModuleAttribute::Module(_) => "module",
            ModuleAttribute::Suffix(_) => "suffix",
        }
    }

    /// Resolves a tag name from any family.
    pub fn lookup(name: &str) -> Result<Self, VocabError> {
        ModuleAttribute::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| VocabError::unrecognized(KeyKind::ModuleAttribute, name))
    }
}

impl Display for ModuleAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ModuleAttribute {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleAttribute::lookup(s)
    }
}

impl From<YearType> for ModuleAttribute {
    fn from(value: YearType) -> Self {
        ModuleAttribute::Year(value)
    }
}

impl From<ModuleType> for ModuleAttribute {
    fn from(value: ModuleType) -> Self {
        ModuleAttribute::Module(value)
    }
}

impl From<SuffixType> for ModuleAttribute {
    fn from(value: SuffixType) -> Self {
        ModuleAttribute::Suffix(value)
    }
}
