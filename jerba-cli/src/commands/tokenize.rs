//! Tokenize command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{ConllFormatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use jerba_core::conll;
use jerba_core::{BatchConfig, BatchTokenizer, ExecutionMode, Lexicon, PrefixIndex};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Name given to a sentence passed on the command line
pub const SINGLE_SENTENCE_NAME: &str = "singleSentence.txt";

/// Arguments for the tokenize command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["sentence", "input"])))]
pub struct TokenizeArgs {
    /// Sentence to tokenize
    #[arg(short, long, value_name = "TEXT")]
    pub sentence: Option<String>,

    /// Input files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Folder of .sfplm lexicon files
    #[arg(short, long, value_name = "DIR")]
    pub lexicon: Option<PathBuf>,

    /// Tokenize without multi-word expressions
    #[arg(long, conflicts_with = "lexicon")]
    pub no_lexicon: bool,

    /// Output format (default: from config, or conll)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one <name>.empty.conll file per input into this folder
    #[arg(short = 'd', long, value_name = "DIR", conflicts_with = "format")]
    pub output_dir: Option<PathBuf>,

    /// Force parallel tokenization even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One unit of input: a file, or the sentence given with `--sentence`
struct Document {
    path: PathBuf,
    sentences: Vec<String>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let index = self.load_index(&config)?;
        let batch = BatchTokenizer::new(&index, self.batch_config(&config));

        match &self.output_dir {
            Some(dir) => self.write_conll_files(&batch, dir),
            None => {
                let format = match self.format {
                    Some(format) => format,
                    None => OutputFormat::from_name(&config.output.default_format)?,
                };
                self.write_stream(&batch, format, config.output.pretty_json)
            }
        }
    }

    /// Load the multi-word lexicon, or an empty index when disabled
    fn load_index(&self, config: &CliConfig) -> Result<PrefixIndex> {
        if self.no_lexicon || (self.lexicon.is_none() && !config.lexicon.enabled) {
            log::info!("Multi-word lexicon disabled");
            return Ok(PrefixIndex::empty());
        }

        let folder = self.lexicon.as_ref().unwrap_or(&config.lexicon.folder);
        log::info!("Loading lexicon from {}", folder.display());

        let lexicon = Lexicon::load_folder(folder).map_err(|e| {
            CliError::LexiconError(format!("{e} (use --no-lexicon to tokenize without one)"))
        })?;
        let stats = lexicon.stats();
        log::debug!(
            "Lexicon: {} files, {} entries, {} skipped lines",
            stats.files,
            stats.entries,
            stats.skipped_lines
        );

        Ok(lexicon.into_index())
    }

    /// Combine command-line flags with the performance settings
    fn batch_config(&self, config: &CliConfig) -> BatchConfig {
        let threads = self.threads.or(match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        let execution_mode = if self.parallel || self.threads.is_some() {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        log::info!(
            "Execution mode: {:?}, {} worker threads",
            execution_mode,
            threads.unwrap_or_else(num_cpus::get)
        );

        BatchConfig {
            execution_mode,
            threads,
            parallel_threshold: config.performance.parallel_threshold_lines,
        }
    }

    /// Input files, resolved from the glob patterns
    fn input_files(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_empty() {
            return Ok(Vec::new());
        }
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to tokenize", files.len());
        Ok(files)
    }

    /// Call `handle` on each document, then report progress
    fn for_each_document<F>(&self, mut handle: F) -> Result<usize>
    where
        F: FnMut(&Document) -> Result<()>,
    {
        let mut sentences = 0;

        if let Some(sentence) = &self.sentence {
            let document = Document {
                path: PathBuf::from(SINGLE_SENTENCE_NAME),
                sentences: sentence.lines().map(str::to_string).collect(),
            };
            handle(&document)?;
            sentences += document.sentences.len();
        }

        let files = self.input_files()?;
        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        for path in files {
            log::info!("Tokenizing {}", path.display());
            let document = Document {
                sentences: FileReader::read_sentences(&path)?,
                path,
            };
            handle(&document)?;

            sentences += document.sentences.len();
            progress.file_completed(&document.path.display().to_string(), document.sentences.len());
        }

        progress.finish();
        Ok(sentences)
    }

    /// Tokenize every document into one stream
    fn write_stream(
        &self,
        batch: &BatchTokenizer<'_>,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, pretty_json);

        let total = self.for_each_document(|document| {
            let tokens = batch.tokenize_lines(&document.sentences)?;
            for (sentence, tokens) in document.sentences.iter().zip(&tokens) {
                formatter.format_sentence(sentence, tokens)?;
            }
            Ok(())
        })?;

        formatter.finish()?;
        log::info!("Tokenized {} sentences", total);
        Ok(())
    }

    /// Tokenize each document into its own empty CoNLL file
    fn write_conll_files(&self, batch: &BatchTokenizer<'_>, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output folder {}", dir.display()))?;

        let total = self.for_each_document(|document| {
            let target = conll::empty_conll_path(&document.path, dir);
            let file = File::create(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;

            let tokens = batch.tokenize_lines(&document.sentences)?;
            let mut formatter = ConllFormatter::new(file);
            for (sentence, tokens) in document.sentences.iter().zip(&tokens) {
                formatter.format_sentence(sentence, tokens)?;
            }
            formatter.finish()?;

            if !self.quiet {
                println!("{}", target.display());
            }
            Ok(())
        })?;

        log::info!("Tokenized {} sentences into {}", total, dir.display());
        Ok(())
    }
}
