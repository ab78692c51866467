//! Batch tokenization of many lines
//!
//! Lines are independent, so large inputs are split across a rayon pool.
//! Results always come back in input order.

use crate::error::Result;
use crate::prefix_index::PrefixIndex;
use crate::tokenizer::Tokenizer;

#[cfg(feature = "parallel")]
use crate::error::CoreError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded processing
    Sequential,
    /// Multi-threaded processing across lines
    Parallel,
    /// Parallel above the line threshold, sequential below
    #[default]
    Adaptive,
}

/// Batch configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum number of lines for adaptive mode to go parallel
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 1_000,
        }
    }
}

impl BatchConfig {
    /// Always sequential
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Always parallel, with an optional thread count
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads,
            ..Self::default()
        }
    }
}

/// Pick the mode actually used for `line_count` lines
pub fn auto_select(config: &BatchConfig, line_count: usize) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Sequential => ExecutionMode::Sequential,
        ExecutionMode::Parallel | ExecutionMode::Adaptive if cfg!(not(feature = "parallel")) => {
            ExecutionMode::Sequential
        }
        ExecutionMode::Parallel => ExecutionMode::Parallel,
        ExecutionMode::Adaptive if line_count >= config.parallel_threshold => {
            ExecutionMode::Parallel
        }
        ExecutionMode::Adaptive => ExecutionMode::Sequential,
    }
}

/// Tokenizes many lines against one lexicon
#[derive(Debug, Clone)]
pub struct BatchTokenizer<'d> {
    tokenizer: Tokenizer<'d>,
    config: BatchConfig,
}

impl<'d> BatchTokenizer<'d> {
    /// Create a batch tokenizer
    pub fn new(index: &'d PrefixIndex, config: BatchConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(index),
            config,
        }
    }

    /// Batch configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Tokenize every line of `text`, one sentence per line
    pub fn tokenize_text(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let lines: Vec<&str> = text.lines().collect();
        self.tokenize_lines(&lines)
    }

    /// Tokenize each line; the result has one entry per input line
    pub fn tokenize_lines<S>(&self, lines: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let mode = auto_select(&self.config, lines.len());
        log::debug!("tokenizing {} lines ({:?})", lines.len(), mode);

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.tokenize_parallel(lines),
            _ => Ok(self.tokenize_sequential(lines)),
        }
    }

    fn tokenize_sequential<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Vec<String>> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i > 0 && i % 1000 == 0 {
                    log::info!("Tokenized {} sentences", i);
                }
                self.tokenizer.tokenize_to_vec(line.as_ref())
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn tokenize_parallel<S>(&self, lines: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let run = || -> Vec<Vec<String>> {
            lines
                .par_iter()
                .map(|line| self.tokenizer.tokenize_to_vec(line.as_ref()))
                .collect()
        };

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| CoreError::ThreadPool(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}
