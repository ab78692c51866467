//! Empty CoNLL output
//!
//! The downstream parser reads one token per row: its 1-based position, the
//! token, and twelve `_` placeholder columns it fills in itself. Sentences
//! are separated by a blank line.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Number of `_` columns after the token
pub const PLACEHOLDER_FIELDS: usize = 12;

/// Suffix of tokenized files
pub const EMPTY_CONLL_SUFFIX: &str = ".empty.conll";

/// Write one sentence, including its terminating blank line
pub fn write_sentence<W, S>(writer: &mut W, tokens: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    for (position, token) in tokens.iter().enumerate() {
        write!(writer, "{}\t{}", position + 1, token.as_ref())?;
        for _ in 0..PLACEHOLDER_FIELDS {
            writer.write_all(b"\t_")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.write_all(b"\n")
}

/// Render one sentence as a string
pub fn format_sentence<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sentence(&mut buffer, tokens);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write every sentence in order
pub fn write_document<W, S>(writer: &mut W, sentences: &[Vec<S>]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    for sentence in sentences {
        write_sentence(writer, sentence)?;
    }
    Ok(())
}

/// File name of the tokenized version of `input`
///
/// `phrases.txt` becomes `phrases.empty.conll`; any other name simply gets
/// the suffix appended.
pub fn empty_conll_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".txt").unwrap_or(&name);
    format!("{stem}{EMPTY_CONLL_SUFFIX}")
}

/// Path of the tokenized version of `input` inside `out_dir`
pub fn empty_conll_path(input: &Path, out_dir: &Path) -> PathBuf {
    out_dir.join(empty_conll_file_name(input))
}
