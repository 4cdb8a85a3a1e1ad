//! Discover command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use kotoba_core::{
    CorpusLoader, DiscoveryConfig, ExecutionMode, MissingEntropyPolicy, WordDiscovery,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the discover command
#[derive(Debug, Args)]
pub struct DiscoverArgs {
    /// Corpus files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Longest candidate word in characters
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,

    /// Words reported per length
    #[arg(long, value_name = "K")]
    pub top_k: Option<usize>,

    /// Characters that disqualify a candidate (replaces the default set)
    #[arg(long, value_name = "CHARS")]
    pub exclude: Option<String>,

    /// Scoring of words with no neighbor on one side
    #[arg(long, value_enum)]
    pub missing_entropy: Option<MissingEntropy>,

    /// Score on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Number of scoring threads
    #[arg(short, long, value_name = "N", conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Show composite values in text and markdown output
    #[arg(long)]
    pub scores: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Missing-entropy policies accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MissingEntropy {
    /// Score the word as 0
    Zero,
    /// Leave the word out
    Exclude,
}

impl From<MissingEntropy> for MissingEntropyPolicy {
    fn from(value: MissingEntropy) -> Self {
        match value {
            MissingEntropy::Zero => MissingEntropyPolicy::Zero,
            MissingEntropy::Exclude => MissingEntropyPolicy::Exclude,
        }
    }
}

impl DiscoverArgs {
    /// Execute the discover command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting word discovery");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let config = self.discovery_config(&cli_config.discovery)?;
        let format = match self.format {
            Some(format) => format,
            None => cli_config.output.format()?,
        };
        let options = FormatOptions {
            pretty_json: cli_config.output.pretty_json,
            include_scores: self.scores || cli_config.output.include_scores,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} corpus files", files.len());

        let discovery =
            WordDiscovery::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut counter = discovery.counter();
        for path in &files {
            let loader = CorpusLoader::from_path(path)
                .with_context(|| format!("Failed to open corpus: {}", path.display()))?;
            let sentences = counter
                .count_corpus(loader)
                .with_context(|| format!("Failed to read corpus: {}", path.display()))?;
            log::debug!("{}: {} sentences", path.display(), sentences);
            progress.file_completed(&path.display().to_string(), sentences);
        }

        progress.scoring();
        let result = discovery
            .score(counter.finish())
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        progress.finish();

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let mut formatter = create_formatter(format, writer, options);
        for group in result.report() {
            formatter.format_group(&group)?;
        }
        formatter.finish(result.stats())?;

        log::info!(
            "Reported words from {} sentences ({} scored)",
            result.stats().sentences,
            result.stats().scored_words
        );
        Ok(())
    }

    /// Apply command line overrides to the configured discovery settings
    fn discovery_config(&self, base: &DiscoveryConfig) -> Result<DiscoveryConfig> {
        let mut builder = base.to_builder();

        if let Some(max_len) = self.max_len {
            builder = builder.max_word_length(max_len);
        }
        if let Some(top_k) = self.top_k {
            builder = builder.top_k(top_k);
        }
        if let Some(exclude) = &self.exclude {
            builder = builder.excluded_chars(exclude.chars());
        }
        if let Some(policy) = self.missing_entropy {
            builder = builder.missing_entropy(policy.into());
        }
        if self.sequential {
            builder = builder.execution_mode(ExecutionMode::Sequential);
        }
        if let Some(threads) = self.threads {
            builder = builder
                .execution_mode(ExecutionMode::Parallel)
                .threads(Some(threads));
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
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
            // a logger installed by an earlier command in this process stays active
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
