//! restyle CLI - stylesheet section extraction and reassembly
//!
//! Usage:
//!   restyle [INPUT]                  Reorganize INPUT (default from config) into the output file
//!   restyle [INPUT] --stdout         Print the result instead of writing it
//!   restyle [INPUT] --list-sections  Show where each section was found
//!
//! Examples:
//!   restyle css/phone_v2.css.backup -o css/phone_v2.css
//!   restyle --config restyle.toml --list-sections --json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use restyle_common::fs::write_atomic;
use restyle_config::{Loader, PROJECT_FILE, RestyleConfig};
use restyle_css::{COMPONENT_CSS, Plan, SectionSpec, Stage, extract_sections, reorganize};

#[derive(Debug, Parser)]
#[command(
    name = "restyle",
    version,
    about = "Split a stylesheet at fixed markers and reassemble it with shared component rules"
)]
struct Cli {
    /// Stylesheet to reorganize (overrides `paths.input`)
    input: Option<PathBuf>,

    /// Where to write the result (overrides `paths.output`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (default: ./restyle.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File to append instead of the built-in component rules
    #[arg(long)]
    template: Option<PathBuf>,

    /// Print the result to stdout instead of writing the output file
    #[arg(long, conflicts_with = "list_sections")]
    stdout: bool,

    /// List the extracted sections and exit
    #[arg(long)]
    list_sections: bool,

    /// Print the section listing as JSON
    #[arg(long, requires = "list_sections")]
    json: bool,

    /// Show debug logging (otherwise controlled by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// One row of `--list-sections` output.
#[derive(Debug, Serialize)]
struct SectionSummary<'a> {
    name: &'a str,
    start: usize,
    end: usize,
    bytes: usize,
    lines: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli).with_context(|| format!("{}: invalid configuration", Stage::Load))?;
    let RestyleConfig {
        paths,
        template,
        sections,
    } = config;

    let source = read_text(&paths.input)?;
    info!(stage = %Stage::Load, path = %paths.input.display(), bytes = source.len(), "read input");

    if cli.list_sections {
        return list_sections(&source, &sections, &paths.input, cli.json);
    }

    let trailing = match &template.path {
        Some(path) => read_text(path)?,
        None => COMPONENT_CSS.to_string(),
    };
    let plan = Plan::new(sections, trailing);

    let output = reorganize(&source, &plan).map_err(|err| {
        let stage = err.stage();
        anyhow!(err).context(format!("{stage}: failed to reorganize `{}`", paths.input.display()))
    })?;
    debug!(stage = %Stage::Assemble, bytes = output.len(), "assembled output");

    if cli.stdout {
        print!("{output}");
        return Ok(());
    }

    write_atomic(&paths.output, &output).with_context(|| {
        format!("{}: failed to write `{}`", Stage::Persist, paths.output.display())
    })?;
    info!(stage = %Stage::Persist, path = %paths.output.display(), "wrote output");

    println!(
        "{} {} bytes to {}",
        "Wrote".green().bold(),
        output.len(),
        paths.output.display()
    );
    Ok(())
}

/// Install the stderr subscriber. `--verbose` wins over `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Defaults, then the project file (or `--config`), then flags.
fn load_config(cli: &Cli) -> Result<RestyleConfig> {
    let mut loader = match &cli.config {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(PROJECT_FILE),
    };

    let overrides = [
        ("paths.input", &cli.input),
        ("paths.output", &cli.output),
        ("template.path", &cli.template),
    ];
    for (key, value) in overrides {
        if let Some(path) = value {
            loader = loader.set_override(key, path.to_string_lossy().into_owned())?;
        }
    }

    Ok(loader.build()?)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("{}: failed to read `{}`", Stage::Load, path.display()))
}

fn list_sections(source: &str, specs: &[SectionSpec], input: &Path, json: bool) -> Result<()> {
    let sections = extract_sections(source, specs).map_err(|err| {
        let stage = err.stage();
        anyhow!(err).context(format!("{stage}: failed to split `{}`", input.display()))
    })?;

    let summaries: Vec<SectionSummary<'_>> = sections
        .iter()
        .map(|section| SectionSummary {
            name: section.name,
            start: section.range.start,
            end: section.range.end,
            bytes: section.text.len(),
            lines: section.text.lines().count(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("=== Sections ({}) ===", summaries.len());
    for summary in &summaries {
        println!(
            "  {:<12} {:>7}..{:<7} {:>6} bytes {:>5} lines",
            summary.name.cyan(),
            summary.start,
            summary.end,
            summary.bytes,
            summary.lines
        );
    }
    Ok(())
}
