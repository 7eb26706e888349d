//! Hyphenate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::collect_inputs;
use crate::output::{HyphenatedDocument, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gehyph_engine::{ConfigUpdate, DictionaryStatus, Hyphenator, JsonFileSource};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the hyphenate command
#[derive(Debug, Args)]
pub struct HyphenateArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Hyphenate this text instead of reading input files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON exception dictionary
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Break marker inserted between syllables
    #[arg(long, value_name = "STR")]
    pub marker: Option<String>,

    /// Letters kept before the first break
    #[arg(long, value_name = "N")]
    pub left_min: Option<usize>,

    /// Letters kept after the last break
    #[arg(long, value_name = "N")]
    pub right_min: Option<usize>,

    /// Keep one-letter first/last syllables
    #[arg(long)]
    pub no_orphan_fix: bool,

    /// Treat input as HTML: tags and code blocks are left alone
    #[arg(long)]
    pub html: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HyphenateArgs {
    /// Execute the hyphenate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting hyphenation");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load(self.config.as_deref())?;
        let hyphenator = self.build_hyphenator(&config)?;
        let format = self.resolve_format(&config)?;

        let documents = collect_inputs(self.text.as_deref(), &self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        let results: Vec<HyphenatedDocument> = documents
            .par_iter()
            .map(|doc| {
                let result =
                    HyphenatedDocument::build(&doc.source, &doc.content, &hyphenator, self.html);
                progress.file_completed(&doc.source);
                result
            })
            .collect();
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = format.formatter(writer, config.output.pretty_json);
        for document in &results {
            formatter.format_document(document)?;
        }
        formatter.finish()?;

        log::info!("Hyphenated {} document(s)", results.len());
        Ok(())
    }

    /// Hyphenator from the config file, then flags, then dictionary
    fn build_hyphenator(&self, config: &CliConfig) -> Result<Hyphenator> {
        let mut hyphenator = config.hyphenator()?;

        let update = ConfigUpdate {
            break_marker: self.marker.clone(),
            left_min: self.left_min,
            right_min: self.right_min,
            fix_orphans: self.no_orphan_fix.then_some(false),
            load_timeout_ms: None,
        };
        hyphenator
            .configure(update)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if let Some(path) = self.dictionary.as_ref().or(config.dictionary.path.as_ref()) {
            load_dictionary(&mut hyphenator, path)?;
        }

        Ok(hyphenator)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.format
                ))
                .into()
            }),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Load a JSON dictionary file; an unreadable file leaves the algorithm in charge
fn load_dictionary(hyphenator: &mut Hyphenator, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start dictionary loader")?;
    let source = JsonFileSource::new(path);

    match runtime.block_on(hyphenator.load_dictionary_from_source(&source)) {
        DictionaryStatus::Loaded { entries } => {
            log::info!("Loaded {entries} exceptions from {}", path.display());
        }
        DictionaryStatus::Unavailable { reason } => {
            log::warn!("Continuing without dictionary: {reason}");
        }
        DictionaryStatus::AlreadyLoaded => {}
    }
    Ok(())
}
