//! Command-line interface.
//!
//! ## Commands
//!
//! - `browse` (default) - interactive terminal browser
//! - `list [PATH]` - languages, or what lives under a catalog path
//! - `show PATH` - print one example
//! - `search QUERY` - find examples by title or description
//! - `check` - load and validate a catalog
//! - `format TEXT` - run inline markup through the formatter
//!
//! Command functions build their output as a `String` and return
//! [`Result`]; only [`run`] prints errors and exits.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use catalog::search::search_examples;
use catalog::{Catalog, CatalogPath, Resolved};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rich::format;

use crate::ansi::{render_formatted, render_lines};
use crate::app::CodeSheets;
use crate::config::Config;
use crate::document::example_lines;
use crate::error::{AppError, Result};
use crate::screens::count;
use crate::theme::Theme;
use crate::{App, log_init};

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

/// Programming-language cheat sheets in the terminal
#[derive(Parser, Debug)]
#[command(name = "codesheets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read the catalog from a JSON file instead of the built-in one
    #[arg(long, global = true, env = "CODESHEETS_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Append log records to this file
    #[arg(long, global = true, env = "CODESHEETS_LOG", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub log_level: LevelFilter,

    /// Disable colors and text attributes
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Browse the cheat sheets interactively (default)
    Browse,

    /// List languages, or the contents of a catalog path
    List {
        /// language[/category[/subcategory]]
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },

    /// Print one example
    Show {
        /// Path holding examples, optionally with `#N` to pick one
        #[arg(value_name = "PATH")]
        path: String,
        /// 1-based example number
        #[arg(short = 'n', long, value_name = "N")]
        index: Option<usize>,
        /// Print only the code, unstyled
        #[arg(long)]
        code_only: bool,
    },

    /// Find examples whose title or description contains QUERY
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Load and validate the catalog
    Check,

    /// Apply **bold** and `code` markup to TEXT
    Format {
        #[arg(value_name = "TEXT")]
        text: String,
        /// Print the segment list instead of styled text
        #[arg(long)]
        segments: bool,
    },
}

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli);
    if let Some(path) = &config.log_file {
        log_init::init_logger(path, config.log_level)?;
    }
    log::info!("codesheets {} starting", env!("CARGO_PKG_VERSION"));

    let output = match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            let catalog = config.load_catalog()?;
            let mut app = CodeSheets::new(&catalog, Theme::new(config.color));
            return app.run();
        }
        Command::List { path } => list_command(&config.load_catalog()?, path.as_deref())?,
        Command::Show {
            path,
            index,
            code_only,
        } => {
            let catalog = config.load_catalog()?;
            show_command(&catalog, &path, index, code_only, output_width(), config.color)?
        }
        Command::Search { query } => search_command(&config.load_catalog()?, &query),
        Command::Check => check_command(&config.load_catalog()?),
        Command::Format { text, segments } => format_command(&text, segments, config.color),
    };
    println!("{output}");
    Ok(())
}

fn output_width() -> usize {
    if !std::io::stdout().is_terminal() {
        return DEFAULT_WIDTH;
    }
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).min(MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Two aligned columns: ids on the left, descriptions on the right.
fn columns<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let rows: Vec<(&str, String)> = rows.into_iter().collect();
    let width = rows.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(id, text)| format!("{id:<width$}  {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(examples: &[catalog::Example]) -> String {
    examples
        .iter()
        .enumerate()
        .map(|(i, example)| format!("{:>3}. {}", i + 1, example.title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list_command(catalog: &Catalog, path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        return Ok(columns(catalog.languages.iter().map(|language| {
            let badge = if language.is_empty() {
                "coming soon".to_string()
            } else {
                count(language.categories.len(), "category", "categories")
            };
            (language.id.as_str(), format!("{} ({badge})", language.name))
        })));
    };

    let path: CatalogPath = path.parse()?;
    let output = match catalog.resolve(&path)? {
        Resolved::Language(language) => columns(language.categories.iter().map(|category| {
            let badge = if category.is_flat() {
                count(category.section_count(), "example", "examples")
            } else {
                count(category.section_count(), "subcategory", "subcategories")
            };
            (category.id.as_str(), format!("{} ({badge})", category.title))
        })),
        Resolved::Category { category, .. } if !category.is_flat() => {
            columns(category.subcategories().iter().map(|subcategory| {
                let badge = count(subcategory.examples.len(), "example", "examples");
                (subcategory.id.as_str(), format!("{} ({badge})", subcategory.title))
            }))
        }
        resolved => numbered(resolved.examples().unwrap_or_default()),
    };
    Ok(output)
}

/// Split `lang/cat/sub#3` into the path and the 1-based number.
fn split_example_ref(reference: &str) -> (&str, Option<usize>) {
    match reference.rsplit_once('#') {
        Some((path, number)) => match number.trim().parse() {
            Ok(n) => (path, Some(n)),
            Err(_) => (reference, None),
        },
        None => (reference, None),
    }
}

pub fn show_command(
    catalog: &Catalog,
    reference: &str,
    index: Option<usize>,
    code_only: bool,
    width: usize,
    color: bool,
) -> Result<String> {
    let (path_text, suffix) = split_example_ref(reference);
    let number = index.or(suffix).unwrap_or(1);
    let path: CatalogPath = path_text.parse()?;
    let resolved = catalog.resolve(&path)?;
    let examples = resolved.examples().ok_or_else(|| AppError::NoExamples {
        path: path.to_string(),
    })?;

    let example = number
        .checked_sub(1)
        .and_then(|i| examples.get(i))
        .ok_or_else(|| AppError::ExampleOutOfRange {
            path: path.to_string(),
            index: number,
            count: examples.len(),
        })?;
    log::debug!("show {path}#{number}");

    if code_only {
        return Ok(example.code.clone());
    }
    let theme = Theme::new(color);
    let accent = theme.accent(resolved.language());
    let lines = example_lines(example, &accent, &theme, width);
    Ok(render_lines(&lines, width, color))
}

pub fn search_command(catalog: &Catalog, query: &str) -> String {
    let hits = search_examples(catalog, query);
    if hits.is_empty() {
        return format!("No examples match \"{query}\"");
    }
    let refs: Vec<String> = hits
        .iter()
        .map(|hit| format!("{}#{}", hit.path, hit.index + 1))
        .collect();
    columns(
        refs.iter()
            .zip(&hits)
            .map(|(reference, hit)| (reference.as_str(), hit.example.title.clone())),
    )
}

pub fn check_command(catalog: &Catalog) -> String {
    let categories: usize = catalog.languages.iter().map(|l| l.categories.len()).sum();
    let empty: Vec<&str> = catalog
        .languages
        .iter()
        .filter(|l| l.is_empty())
        .map(|l| l.name.as_str())
        .collect();
    let mut report = format!(
        "Catalog OK: {}, {}, {}",
        count(catalog.languages.len(), "language", "languages"),
        count(categories, "category", "categories"),
        count(catalog.example_count(), "example", "examples"),
    );
    if !empty.is_empty() {
        report.push_str(&format!("\nWithout content: {}", empty.join(", ")));
    }
    report
}

pub fn format_command(text: &str, segments: bool, color: bool) -> String {
    let formatted = format(text);
    if segments {
        return formatted
            .segments()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
    }
    let theme = Theme::new(color);
    render_formatted(&formatted, &theme.segment_styles(&theme.primary()), color)
}
