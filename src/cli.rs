// src/cli.rs

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Derives filter controls from a collection template and filters front-matter records.
///
/// Records are JSON objects whose `frontmatter` member holds the user-defined
/// attributes. They can be given as a JSON array file, a JSON Lines file
/// (`.jsonl`), or a directory of one-record `.json` files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the filter controls for a collection as JSON.
    Controls(ControlsArgs),
    /// Print the records that pass every given filter.
    Filter(FilterArgs),
    /// Print the summary of a single field (distinct values or bounds).
    Values(ValuesArgs),
}

/// Options shared by commands that build a filter configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Also hide these fields from the controls (repeatable).
    #[arg(short = 'x', long = "exclude-field", value_name = "FIELD", num_args = 1..)]
    pub exclude_fields: Option<Vec<String>>,

    /// Do not hide the default fields (title, image, cover, thumbnail, heroImage).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_default_excludes: bool,

    /// Placeholder bounds for number fields without numeric values.
    #[arg(long, value_name = "MIN:MAX")]
    pub number_fallback: Option<String>,

    /// Number of tags a tag control shows before collapsing the rest.
    #[arg(long, value_name = "COUNT")]
    pub max_visible_tags: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ControlsArgs {
    /// Collection template (JSON with a `fields` list).
    #[arg(short = 't', long, value_name = "FILE")]
    pub template: PathBuf,

    /// Records file or directory.
    #[arg(short = 'r', long, value_name = "PATH")]
    pub records: PathBuf,

    /// Active filter set (JSON object of field -> criterion) to mark on the controls.
    #[arg(short = 'F', long, value_name = "FILE")]
    pub filters_file: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Records file or directory.
    #[arg(short = 'r', long, value_name = "PATH")]
    pub records: PathBuf,

    /// A criterion as FIELD=JSON, e.g. 'rating={"type":"number","value":{"min":3}}' (repeatable).
    #[arg(short = 'f', long = "filter", value_name = "FIELD=JSON")]
    pub filters: Vec<String>,

    /// Active filter set (JSON object of field -> criterion).
    #[arg(short = 'F', long, value_name = "FILE")]
    pub filters_file: Option<PathBuf>,

    /// Print only the number of matching records.
    #[arg(short = 'c', long, action = clap::ArgAction::SetTrue)]
    pub count: bool,

    /// Print a one-line match summary to stderr.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub summary: bool,
}

/// Which summary the `values` command computes.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryKind {
    /// Sorted distinct values.
    #[default]
    Strings,
    /// Numeric min and max.
    Number,
    /// Earliest and latest date.
    Date,
}

#[derive(Args, Debug)]
pub struct ValuesArgs {
    /// Records file or directory.
    #[arg(short = 'r', long, value_name = "PATH")]
    pub records: PathBuf,

    /// Front-matter field to summarize.
    #[arg(long, value_name = "FIELD")]
    pub field: String,

    /// Kind of summary.
    #[arg(short = 'k', long, value_enum, default_value_t = SummaryKind::Strings)]
    pub kind: SummaryKind,

    #[command(flatten)]
    pub config: ConfigArgs,
}
