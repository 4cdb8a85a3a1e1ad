//! Corpus loading
//!
//! A corpus is a UTF-8 text with one sentence per line. [`CorpusLoader`]
//! reads it line by line, so only the sentence being counted has to be
//! resident in memory.

use crate::error::{DiscoveryError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines, Read};
use std::path::PathBuf;

/// Where a corpus comes from
pub enum CorpusSource {
    /// In-memory text
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, pipes, decompressors)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            CorpusSource::File(path) => f.debug_tuple("File").field(path).finish(),
            CorpusSource::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl From<String> for CorpusSource {
    fn from(text: String) -> Self {
        CorpusSource::Text(text)
    }
}

impl From<&str> for CorpusSource {
    fn from(text: &str) -> Self {
        CorpusSource::Text(text.to_string())
    }
}

impl From<PathBuf> for CorpusSource {
    fn from(path: PathBuf) -> Self {
        CorpusSource::File(path)
    }
}

/// Single-pass iterator over the trimmed sentences of a corpus
pub struct CorpusLoader {
    name: String,
    lines: Lines<Box<dyn BufRead + Send>>,
}

impl std::fmt::Debug for CorpusLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusLoader")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CorpusLoader {
    /// Open a corpus source
    ///
    /// Fails with [`DiscoveryError::CorpusUnreadable`] when a file source
    /// cannot be opened. No retry is attempted.
    pub fn open(source: CorpusSource) -> Result<Self> {
        match source {
            CorpusSource::Text(text) => Ok(Self::new("<text>", Box::new(Cursor::new(text)))),
            CorpusSource::File(path) => {
                let file = File::open(&path).map_err(|source| DiscoveryError::CorpusUnreadable {
                    path: path.display().to_string(),
                    source,
                })?;
                log::debug!("opened corpus {}", path.display());
                Ok(Self::new(
                    path.display().to_string(),
                    Box::new(BufReader::new(file)),
                ))
            }
            CorpusSource::Reader(reader) => {
                Ok(Self::new("<reader>", Box::new(BufReader::new(reader))))
            }
        }
    }

    /// Open a corpus file
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Result<Self> {
        Self::open(CorpusSource::File(path.into()))
    }

    /// Iterate over in-memory text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::new("<text>", Box::new(Cursor::new(text.into())))
    }

    /// Iterate over any reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Self::new("<reader>", Box::new(BufReader::new(reader)))
    }

    /// Display name of the source (path for files)
    pub fn name(&self) -> &str {
        &self.name
    }

    fn new(name: impl Into<String>, reader: Box<dyn BufRead + Send>) -> Self {
        Self {
            name: name.into(),
            lines: reader.lines(),
        }
    }
}

impl Iterator for CorpusLoader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map(|sentence| sentence.trim().to_string())
                .map_err(DiscoveryError::from)
        })
    }
}
