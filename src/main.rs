//! mdparser: extract headings, emphasis and text matches from markdown files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdparser::config::Config;
use mdparser::emphasis::EmphasisFilter;
use mdparser::extraction::Extraction;
use mdparser::formats::OutputFormat;
use mdparser::headings::ContentLimit;
use mdparser::search::SearchOptions;
use mdparser::{input, Document, Error};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Exit status when an operation succeeds but finds nothing.
const EXIT_NO_MATCHES: u8 = 2;

const LONG_ABOUT: &str = "\
mdparser extracts structured information from Markdown files including headings,
emphasized text (bold/italic), and text patterns with context. Outputs in markdown,
plain text, or structured JSON formats.

Examples:
  mdparser document.md --headings 3
  mdparser document.md --emphasized-bold
  mdparser document.md --find \"### 1.1\" --lines-after 5
  mdparser document.md --find '\"CIF\"' --within-section \"6. DEFINITIONS\" --lines-after 1
  mdparser document.md --headings 2 --format json --output headings.json

Exit Codes:
  0: Success
  1: Error (file not found, invalid parameters, etc.)
  2: No matches found

Status messages go to stderr, results to stdout (use --quiet to suppress status).";

#[derive(Parser)]
#[command(name = "mdparser", version)]
#[command(
    about = "Extract headings, emphasis and text matches from Markdown",
    long_about = LONG_ABOUT
)]
struct Args {
    /// Path to the Markdown file to process
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Extract headings up to level N (1-6)
    #[arg(
        long,
        value_name = "LEVELS",
        allow_negative_numbers = true,
        help_heading = "Heading Extraction"
    )]
    headings: Option<i64>,

    /// Include N lines of content after headings at the deepest extracted level
    #[arg(long, value_name = "N", help_heading = "Heading Extraction")]
    include_content_lines: Option<usize>,

    /// Include N characters of content after headings at the deepest extracted level
    #[arg(long, value_name = "N", help_heading = "Heading Extraction")]
    include_content_chars: Option<usize>,

    /// Extract all emphasized text (both bold and italic)
    #[arg(long, help_heading = "Emphasized Text Extraction")]
    emphasized: bool,

    /// Extract only bold text (**text**)
    #[arg(long, help_heading = "Emphasized Text Extraction")]
    emphasized_bold: bool,

    /// Extract only italic text (*text* or _text_)
    #[arg(long, help_heading = "Emphasized Text Extraction")]
    emphasized_italic: bool,

    /// Extract emphasized text under a specific heading
    #[arg(long, value_name = "HEADING", help_heading = "Emphasized Text Extraction")]
    emphasized_under: Option<String>,

    /// Find text pattern and extract context (supports regex)
    #[arg(long, value_name = "TEXT", help_heading = "Text Search")]
    find: Option<String>,

    /// Number of lines to extract before each match
    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help_heading = "Text Search"
    )]
    lines_before: Option<i64>,

    /// Number of lines to extract after each match
    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help_heading = "Text Search"
    )]
    lines_after: Option<i64>,

    /// Case-sensitive search (default: case-insensitive)
    #[arg(long, help_heading = "Text Search")]
    case_sensitive: bool,

    /// Limit search to content under a specific heading
    #[arg(long, value_name = "HEADING", help_heading = "Text Search")]
    within_section: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "FILE", help_heading = "Output Options")]
    output: Option<PathBuf>,

    /// Output format (default: markdown, or the config file's choice)
    #[arg(long, value_enum, help_heading = "Output Options")]
    format: Option<OutputFormat>,

    /// Load settings from this file instead of ./mdparser.toml
    #[arg(long, value_name = "FILE", help_heading = "Output Options")]
    config: Option<PathBuf>,

    /// Show detailed operation messages
    #[arg(short, long, conflicts_with = "quiet", help_heading = "Verbosity")]
    verbose: bool,

    /// Suppress status messages (only show results)
    #[arg(short, long, help_heading = "Verbosity")]
    quiet: bool,
}

impl Args {
    fn emphasis_filter(&self) -> Option<EmphasisFilter> {
        if self.emphasized {
            Some(EmphasisFilter::All)
        } else if self.emphasized_bold {
            Some(EmphasisFilter::Bold)
        } else if self.emphasized_italic {
            Some(EmphasisFilter::Italic)
        } else {
            None
        }
    }

    fn content_limit(&self) -> Option<ContentLimit> {
        ContentLimit::from_counts(self.include_content_lines, self.include_content_chars)
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.verbose, args.quiet);

    match run(&args) {
        Ok(0) => {
            info!("No matches found");
            ExitCode::from(EXIT_NO_MATCHES)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Runs the requested operation and emits its output, returning the result count.
fn run(args: &Args) -> mdparser::Result<usize> {
    let cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = match args.format {
        Some(format) => format,
        None => cfg.output_format()?,
    };

    let document = input::read_document(&args.file)?;
    let extraction = extract(args, &cfg, &document)?;
    let count = extraction.count();

    if count == 0 && format != OutputFormat::Json {
        return Ok(0);
    }
    if count > 0 {
        info!("Found {count} result(s)");
    }

    let source = args.file.display().to_string();
    let output = format.formatter().render(&extraction, &source)?;
    match &args.output {
        Some(path) => {
            input::write_output(path, &output)?;
            info!("Output written to {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(count)
}

fn extract<'a>(
    args: &Args,
    cfg: &Config,
    document: &'a Document,
) -> mdparser::Result<Extraction<'a>> {
    if let Some(level) = args.headings {
        info!("Extracting headings up to level {level}...");
        let limit = args.content_limit();
        if let Some(limit) = limit {
            debug!("Including {limit:?} of content for level {level} headings");
        }
        return Ok(document.extract_headings(level, limit)?.into());
    }

    if let Some(filter) = args.emphasis_filter() {
        info!("Extracting {filter} emphasized text...");
        let section = args.emphasized_under.as_deref();
        if let Some(heading) = section {
            debug!("Filtering by heading: {heading}");
        }
        return Ok(document.extract_emphasis(filter, section)?.into());
    }

    if let Some(pattern) = &args.find {
        info!("Searching for pattern: {pattern}");
        let section = args.within_section.as_deref();
        if let Some(heading) = section {
            info!("Limiting search to section: {heading}");
        }
        let options = SearchOptions::new(
            args.lines_before.unwrap_or(cfg.lines_before),
            args.lines_after.unwrap_or(cfg.lines_after),
            args.case_sensitive || cfg.case_sensitive,
        )?;
        debug!(
            "Case sensitive: {}, Context: {} before, {} after",
            options.case_sensitive, options.lines_before, options.lines_after
        );
        return Ok(document.search(pattern, options, section)?.into());
    }

    Err(Error::InvalidParameter(
        "No operation specified. Use --headings, --emphasized, or --find".to_string(),
    ))
}
