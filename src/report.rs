#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::cmp::Ordering;

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    config::OutputFormat,
    ordinal::Scale,
    registry::Grade,
    tags::ModuleAttribute,
};

/// Everything known about a single grade.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GradeInfo {
    /// Registry key.
    pub key:             &'static str,
    /// `"letter"` or `"qualitative"`.
    pub kind:            &'static str,
    /// Grade point score, letter grades only.
    pub score:           Option<f64>,
    /// Points per credit in an aggregate.
    pub credit_weight:   f64,
    /// Scales a qualitative grade sits on.
    pub scales:          Vec<Scale>,
    /// Da Vinci rank, if on that scale.
    pub da_vinci_rank:   Option<u8>,
    /// Enrichment rank, if on that scale.
    pub enrichment_rank: Option<u8>,
}

impl From<Grade> for GradeInfo {
    fn from(grade: Grade) -> Self {
        let ordinal = grade.as_ordinal();
        Self {
            key:             grade.key(),
            kind:            if grade.is_numeric() { "letter" } else { "qualitative" },
            score:           grade.score(),
            credit_weight:   grade.credit_weight(),
            scales:          ordinal.map(|g| g.scales().to_vec()).unwrap_or_default(),
            da_vinci_rank:   ordinal.and_then(|g| g.da_vinci_rank()),
            enrichment_rank: ordinal.and_then(|g| g.enrichment_rank()),
        }
    }
}

#[derive(Tabled)]
/// Table row for a [`GradeInfo`].
struct GradeRow {
    #[tabled(rename = "Grade")]
    /// * `key`: registry key
    key:        String,
    #[tabled(rename = "Kind")]
    /// * `kind`: letter or qualitative
    kind:       String,
    #[tabled(rename = "Score")]
    /// * `score`: grade points, `-` for qualitative grades
    score:      String,
    #[tabled(rename = "Da Vinci")]
    /// * `da_vinci`: Da Vinci rank or `-`
    da_vinci:   String,
    #[tabled(rename = "Enrichment")]
    /// * `enrichment`: Enrichment rank or `-`
    enrichment: String,
}

/// Formats an optional cell, using `-` for missing values.
fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl From<&GradeInfo> for GradeRow {
    fn from(info: &GradeInfo) -> Self {
        Self {
            key:        info.key.to_string(),
            kind:       info.kind.to_string(),
            score:      cell(info.score.map(|s| format!("{s:.1}"))),
            da_vinci:   cell(info.da_vinci_rank),
            enrichment: cell(info.enrichment_rank),
        }
    }
}

#[derive(Tabled, Serialize)]
/// Table row for a module attribute tag.
struct TagRow {
    #[tabled(rename = "Tag")]
    /// * `name`: display name
    name:   &'static str,
    #[tabled(rename = "Family")]
    /// * `family`: year, module or suffix
    family: &'static str,
}

/// Renders `rows` as a titled table.
fn titled_table<R: Tabled>(title: &str, rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows)
        .with(Panel::header(title))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Serializes `value` as pretty JSON.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Could not serialize output to JSON")
}

/// Renders a list of grades.
pub fn render_grades(
    grades: impl IntoIterator<Item = Grade>,
    format: OutputFormat,
) -> Result<String> {
    let infos: Vec<GradeInfo> = grades.into_iter().map(GradeInfo::from).collect();
    match format {
        OutputFormat::Json => to_json(&infos),
        OutputFormat::Table => {
            let title = format!("Grades: {}", infos.iter().map(|i| i.key).join(", "));
            Ok(titled_table(&title, infos.iter().map(GradeRow::from)))
        }
    }
}

/// Renders every module attribute tag with its family.
pub fn render_tags(format: OutputFormat) -> Result<String> {
    let rows: Vec<TagRow> = ModuleAttribute::ALL
        .into_iter()
        .map(|a| TagRow {
            name:   a.name(),
            family: a.family(),
        })
        .collect();
    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Table => Ok(titled_table("Module attributes", rows)),
    }
}

/// Outcome of comparing two grades.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Left operand.
    pub left:     String,
    /// Right operand.
    pub right:    String,
    /// `"<"`, `"="`, `">"` or `"incomparable"`.
    pub relation: &'static str,
}

impl Comparison {
    /// Compares two grades.
    pub fn of(left: Grade, right: Grade) -> Self {
        let relation = match left.try_cmp(right) {
            Ok(Ordering::Less) => "<",
            Ok(Ordering::Equal) => "=",
            Ok(Ordering::Greater) => ">",
            Err(e) => {
                tracing::debug!("{e}");
                "incomparable"
            }
        };
        Self {
            left: left.to_string(),
            right: right.to_string(),
            relation,
        }
    }
}

/// Renders a comparison.
pub fn render_comparison(cmp: &Comparison, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(cmp),
        OutputFormat::Table => {
            let relation = match cmp.relation {
                ">" => cmp.relation.green().bold(),
                "<" => cmp.relation.red().bold(),
                "=" => cmp.relation.blue().bold(),
                _ => cmp.relation.yellow(),
            };
            Ok(format!("{} {} {}", cmp.left, relation, cmp.right))
        }
    }
}
