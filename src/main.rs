//! Command-line front end.
//!
//! Reads candidates from a file or from piped stdin, runs the prompt on the
//! controlling terminal (drawing on stderr), and prints the selection on
//! stdout so the binary composes in shell pipelines:
//!
//! ```text
//! git branch --format='%(refname:short)' | autoprompt "checkout:" | xargs git checkout
//! ```
//!
//! # Exit Status
//!
//! - `0`: a candidate was confirmed and printed
//! - `130`: the prompt was interrupted with Ctrl-C
//! - `1`: invalid arguments or a terminal error

use anyhow::{Context, Result};
use autoprompt::observability::init_tracing;
use autoprompt::{
    Config, DisplayAttribute, InterruptPolicy, MatchOrder, Outcome, Prompt, Validation,
    INTERRUPT_EXIT_CODE,
};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "autoprompt")]
#[command(about = "Pick one line from a list with live autocomplete", long_about = None)]
#[command(version)]
struct Cli {
    /// Prompt text shown before the query
    prompt: Option<String>,

    /// Read candidates from FILE instead of stdin, one per line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Number of visible candidate rows (default: terminal height - 2)
    #[arg(short = 'n', long = "max-visible", value_name = "ROWS")]
    max_visible: Option<usize>,

    /// Display attribute for matched text: bright, dim, underscore, blink, reverse, hidden
    #[arg(long = "highlight", value_name = "STYLE")]
    highlight: Option<DisplayAttribute>,

    /// Match ordering: original or whole-first
    #[arg(long = "order", value_name = "ORDER")]
    order: Option<MatchOrder>,

    /// Load settings from a TOML config file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fall back to a default prompt and demo candidates when none are given
    #[arg(long = "lenient")]
    lenient: bool,

    /// Print the selection as JSON with its original index
    #[arg(long = "json")]
    json: bool,

    /// Write a JSON trace log at this level (e.g. debug)
    #[arg(long = "trace-level", value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Cli {
    /// Layers command-line flags over the config file.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if self.max_visible.is_some() {
            config.max_visible = self.max_visible;
        }
        if self.highlight.is_some() {
            config.highlight_style = self.highlight;
        }
        if let Some(order) = self.order {
            config.match_order = order;
        }
        if self.lenient {
            config.validation = Validation::Lenient;
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }

        // the binary reports interrupts through its exit status
        config.interrupt = InterruptPolicy::Cancel;
        Ok(config)
    }

    /// Candidate lines from `--file` or piped stdin. `None` when stdin is a
    /// terminal and no file was given.
    fn candidates(&self) -> Result<Option<Vec<String>>> {
        if let Some(path) = &self.file {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            return read_lines(io::BufReader::new(file)).map(Some);
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(None);
        }
        read_lines(stdin.lock()).map(Some)
    }
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read candidates")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_tracing(&config);

    let mut builder = Prompt::builder().config(config);
    if let Some(prompt) = &cli.prompt {
        builder = builder.message(prompt.as_str());
    }
    if let Some(candidates) = cli.candidates()? {
        tracing::debug!(count = candidates.len(), "candidates read");
        builder = builder.candidates(candidates);
    }

    let prompt = builder.build()?;
    match prompt.run()? {
        Outcome::Confirmed(candidate) => {
            if cli.json {
                println!("{}", serde_json::to_string(&candidate)?);
            } else {
                println!("{}", candidate.text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::from(
            u8::try_from(INTERRUPT_EXIT_CODE).unwrap_or(1),
        )),
    }
}
