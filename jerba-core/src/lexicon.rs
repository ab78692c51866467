//! Lexicon loading
//!
//! A lexicon folder holds `.sfplm` files: UTF-8 text, one
//! `form<TAB>lemma` pair per line. Only the forms are kept; they become the
//! entries of the [`PrefixIndex`] used by the tokenizer.

use crate::error::{CoreError, Result};
use crate::prefix_index::PrefixIndex;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of lexicon files
pub const LEXICON_EXTENSION: &str = "sfplm";

/// Counters collected while reading a lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconStats {
    /// Number of files read
    pub files: usize,
    /// Number of entries kept
    pub entries: usize,
    /// Lines skipped because they had no tab or an empty form
    pub skipped_lines: usize,
}

/// Forms read from one or more lexicon files
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<String>,
    stats: LexiconStats,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every `.sfplm` file of `folder`, in path order
    pub fn load_folder(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            return Err(CoreError::LexiconNotFound(folder.to_path_buf()));
        }

        let files = lexicon_files(folder)?;
        if files.is_empty() {
            return Err(CoreError::EmptyLexicon(folder.to_path_buf()));
        }

        let mut lexicon = Self::new();
        for file in &files {
            lexicon.read_file(file)?;
        }

        log::info!("{} special character words", lexicon.stats.entries);
        Ok(lexicon)
    }

    /// Read one lexicon file and add its forms
    pub fn read_file(&mut self, path: &Path) -> Result<()> {
        log::debug!("reading {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;

        let before = self.stats.skipped_lines;
        self.add_content(&content);
        self.stats.files += 1;

        let skipped = self.stats.skipped_lines - before;
        if skipped > 0 {
            log::debug!("{}: skipped {} malformed lines", path.display(), skipped);
        }
        Ok(())
    }

    /// Add the forms found in `content`
    ///
    /// Lines without a tab are skipped, as are lines whose form is empty.
    /// Extra fields after the lemma are ignored.
    pub fn add_content(&mut self, content: &str) {
        for line in content.lines() {
            match parse_line(line) {
                Some(form) => {
                    self.entries.push(form.to_string());
                    self.stats.entries += 1;
                }
                None if line.trim().is_empty() => {}
                None => self.stats.skipped_lines += 1,
            }
        }
    }

    /// The forms, in reading order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Reading statistics
    pub fn stats(&self) -> &LexiconStats {
        &self.stats
    }

    /// Build the prefix index over the forms
    pub fn to_index(&self) -> PrefixIndex {
        PrefixIndex::new(&self.entries)
    }

    /// Consume the lexicon into its prefix index
    pub fn into_index(self) -> PrefixIndex {
        PrefixIndex::new(self.entries)
    }
}

/// Form of a `form<TAB>lemma` line
fn parse_line(line: &str) -> Option<&str> {
    let (form, _lemma) = line.split_once('\t')?;
    let form = form.trim();
    (!form.is_empty()).then_some(form)
}

/// Sorted lexicon files directly inside `folder`
fn lexicon_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let folder = glob::Pattern::escape(&folder.to_string_lossy());
    let pattern = format!("{folder}/*.{LEXICON_EXTENSION}");

    let paths =
        glob::glob(&pattern).map_err(|e| CoreError::InvalidPattern(format!("{pattern}: {e}")))?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            CoreError::io(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Load a lexicon folder straight into a prefix index
pub fn load_index(folder: &Path) -> Result<PrefixIndex> {
    Ok(Lexicon::load_folder(folder)?.into_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_content_keeps_forms() {
        let mut lexicon = Lexicon::new();
        lexicon.add_content("je ne sais quoi\tje ne sais quoi\nd'\tde\n");

        assert_eq!(lexicon.entries(), ["je ne sais quoi", "d'"]);
        assert_eq!(lexicon.stats().entries, 2);
        assert_eq!(lexicon.stats().skipped_lines, 0);

        let index = lexicon.to_index();
        assert!(index.contains("d'"));
        assert_eq!(lexicon.entries().len(), index.len());
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let mut lexicon = Lexicon::new();
        lexicon.add_content("sans tabulation\n\n\tlemme seul\nbon\tbon\textra\n");

        assert_eq!(lexicon.entries(), ["bon"]);
        assert_eq!(lexicon.stats().skipped_lines, 2);
    }

    #[test]
    fn test_crlf_lines() {
        let mut lexicon = Lexicon::new();
        lexicon.add_content("parce que\tparce que\r\nau-delà\tau-delà\r\n");

        assert_eq!(lexicon.entries(), ["parce que", "au-delà"]);
    }

    #[test]
    fn test_load_folder_reads_only_lexicon_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.sfplm"), "parce que\tparce que\n").unwrap();
        fs::write(dir.path().join("a.sfplm"), "d'\tde\nmalformé\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignoré\tignoré\n").unwrap();

        let lexicon = Lexicon::load_folder(dir.path()).unwrap();

        assert_eq!(lexicon.entries(), ["d'", "parce que"]);
        assert_eq!(
            lexicon.stats(),
            &LexiconStats {
                files: 2,
                entries: 2,
                skipped_lines: 1,
            }
        );

        let index = lexicon.into_index();
        assert!(index.contains("parce que"));
        assert!(!index.contains("ignoré"));
    }

    #[test]
    fn test_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        match Lexicon::load_folder(&missing) {
            Err(CoreError::LexiconNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected LexiconNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_folder_without_lexicon_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "rien").unwrap();

        assert!(matches!(
            Lexicon::load_folder(dir.path()),
            Err(CoreError::EmptyLexicon(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.sfplm"), [0xff, 0xfe, b'\t', b'x']).unwrap();

        assert!(matches!(
            Lexicon::load_folder(dir.path()),
            Err(CoreError::Io { .. })
        ));
    }

    #[test]
    fn test_load_index() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mots.sfplm"), "à cause de\tà cause de\n").unwrap();

        let index = load_index(dir.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.has_prefix("à cau"));
    }
}
