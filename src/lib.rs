//! # grade_vocab
//!
//! The fixed vocabulary of academic grades: letter grades with grade point
//! scores, Da Vinci and Enrichment grades with their ordering rules, and the
//! tags used to describe a module's year level, category and prerequisite
//! relationship.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment driven settings for the `grade-vocab` binary
pub mod config;
/// The error type shared by every lookup
pub mod error;
/// Letter grades and their scores
pub mod numeric;
/// Da Vinci and Enrichment grades, ranks and comparisons
pub mod ordinal;
/// The combined text to grade lookup
pub mod registry;
/// Table and JSON rendering of the vocabulary
pub mod report;
/// Year, module and suffix tags
pub mod tags;

pub use error::{KeyKind, VocabError};
pub use numeric::NumericGrade;
pub use ordinal::{DaVinciGrade, EnrichmentGrade, OrdinalGrade, Scale};
pub use registry::{Grade, GradeRegistry, lookup, registry};
pub use tags::{ModuleAttribute, ModuleType, SuffixType, YearType};
