#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # grade-vocab
//!
//! Inspect the grade vocabulary from the command line: resolve a grade,
//! list the registry or the module attribute tags, and compare two grades.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use grade_vocab::{
    Grade, config,
    config::OutputFormat,
    registry,
    report::{Comparison, render_comparison, render_grades, render_tags},
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone, PartialEq)]
enum Cmd {
    /// Resolve a grade name
    Lookup(String),
    /// List every grade in the registry
    List,
    /// List every module attribute tag
    Tags,
    /// Compare two grades
    Compare(String, String),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    /// Force JSON output
    json: bool,
    /// Subcommand to run
    cmd:  Cmd,
}

/// Build the command line parser
fn options() -> OptionParser<Options> {
    /// parses a grade name
    fn g(name: &'static str) -> impl Parser<String> {
        positional(name).help("Grade as written on a transcript, e.g. A- or MERIT")
    }

    let grade = g("GRADE");
    let lookup = construct!(Cmd::Lookup(grade))
        .to_options()
        .command("lookup")
        .help("Resolve a grade and print what is known about it");

    let list = pure(Cmd::List)
        .to_options()
        .command("list")
        .help("Print every grade in the registry");

    let tags = pure(Cmd::Tags)
        .to_options()
        .command("tags")
        .help("Print every module attribute tag");

    let left = g("LEFT");
    let right = g("RIGHT");
    let compare = construct!(Cmd::Compare(left, right))
        .to_options()
        .command("compare")
        .help("Compare two grades on a shared scale");

    let json = long("json").help("Print JSON instead of a table").switch();
    let cmd = construct!([lookup, list, tags, compare]);

    construct!(Options { json, cmd })
        .to_options()
        .descr("Grade vocabulary inspector")
}

/// `--json` wins over the configured format.
fn output_format(json: bool, configured: OutputFormat) -> OutputFormat {
    if json { OutputFormat::Json } else { configured }
}

/// Resolves a grade name, attaching the name to any failure.
fn resolve(name: &str) -> Result<Grade> {
    registry::lookup(name).with_context(|| format!("Could not resolve grade `{name}`"))
}

/// Runs a command and returns what should be printed.
fn execute(cmd: Cmd, format: OutputFormat) -> Result<String> {
    match cmd {
        Cmd::Lookup(name) => render_grades([resolve(&name)?], format),
        Cmd::List => render_grades(registry::registry().iter().map(|(_, g)| g), format),
        Cmd::Tags => render_tags(format),
        Cmd::Compare(left, right) => {
            let cmp = Comparison::of(resolve(&left)?, resolve(&right)?);
            render_comparison(&cmp, format)
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let cfg = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    tracing_subscriber::registry()
        .with(fmt)
        .with(cfg.level_filter())
        .init();

    let opts = options().run();
    let format = output_format(opts.json, cfg.format());
    let out = execute(opts.cmd, format)?;
    println!("{out}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_subcommand() {
        let parser = options();
        let parse = |args: &[&str]| parser.run_inner(args).expect("valid arguments");

        assert_eq!(
            parse(&["lookup", "A-"]),
            Options {
                json: false,
                cmd:  Cmd::Lookup("A-".to_string()),
            }
        );
        assert_eq!(parse(&["list"]).cmd, Cmd::List);
        assert_eq!(parse(&["tags"]).cmd, Cmd::Tags);
        assert_eq!(
            parse(&["--json", "compare", "MERIT", "PASS"]),
            Options {
                json: true,
                cmd:  Cmd::Compare("MERIT".to_string(), "PASS".to_string()),
            }
        );
    }

    #[test]
    fn rejects_missing_operands() {
        let parser = options();
        assert!(parser.run_inner(&["compare", "MERIT"][..]).is_err());
        assert!(parser.run_inner(&["lookup"][..]).is_err());
        assert!(parser.run_inner(&["frobnicate"][..]).is_err());
    }

    #[test]
    fn json_flag_overrides_configured_format() {
        assert_eq!(output_format(true, OutputFormat::Table), OutputFormat::Json);
        assert_eq!(output_format(false, OutputFormat::Json), OutputFormat::Json);
        assert_eq!(output_format(false, OutputFormat::Table), OutputFormat::Table);
    }

    #[test]
    fn lookup_of_unknown_grade_fails() {
        let err = execute(Cmd::Lookup("Z".to_string()), OutputFormat::Table).unwrap_err();
        assert!(format!("{err:#}").contains("`Z` is not a recognized grade."));
        assert!(execute(Cmd::Compare("MERIT".into(), "Z".into()), OutputFormat::Json).is_err());
    }

    #[test]
    fn compare_reports_the_relation() {
        let out = execute(Cmd::Compare("MERIT".into(), "PASS".into()), OutputFormat::Json)
            .expect("known grades");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["relation"], ">");

        let out = execute(Cmd::Compare("EXCELLENT".into(), "PASS".into()), OutputFormat::Json)
            .expect("known grades");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["relation"], "incomparable");
    }

    #[test]
    fn lookup_and_list_render() {
        let out = execute(Cmd::Lookup("A-".to_string()), OutputFormat::Json).expect("known");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value[0]["score"], 4.5);

        let table = execute(Cmd::List, OutputFormat::Table).expect("list");
        assert!(table.contains("DISTINCTION"));
    }
}
