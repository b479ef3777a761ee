//! Vocabulary pairs and the line parser

use crate::Result;
use crate::constants::FIELD_DELIMITER;
use std::path::PathBuf;
use tracing::{debug, trace, warn};

/// A term and its translation, parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabPair {
    pub term: String,
    pub translation: String,
}

impl VocabPair {
    /// Create a new pair
    pub fn new<T: Into<String>, U: Into<String>>(term: T, translation: U) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// A non-empty line that did not yield a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The trimmed line content
    pub content: String,
}

/// Result of parsing a vocabulary list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedVocab {
    pub pairs: Vec<VocabPair>,
    pub skipped: Vec<SkippedLine>,
}

/// Where vocabulary text comes from
#[derive(Debug, Clone)]
pub enum VocabSource {
    /// A text file on disk
    File(PathBuf),
    /// Raw bytes, e.g. an uploaded file
    Bytes(Vec<u8>),
}

impl VocabSource {
    /// Read and decode the source as UTF-8.
    ///
    /// A leading byte order mark is dropped.
    pub fn read_text(&self) -> Result<String> {
        let text = match self {
            VocabSource::File(path) => {
                debug!("Reading vocabulary from {}", path.display());
                let bytes = std::fs::read(path)?;
                std::str::from_utf8(&bytes)?.to_string()
            }
            VocabSource::Bytes(bytes) => {
                debug!("Reading vocabulary from {} uploaded bytes", bytes.len());
                std::str::from_utf8(bytes)?.to_string()
            }
        };

        Ok(match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// Read, decode and parse the source
    pub fn parse(&self) -> Result<ParsedVocab> {
        Ok(parse_vocab(&self.read_text()?))
    }
}

/// Split raw text into vocabulary pairs.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Each non-empty line is split
/// on `;`; the first two fields become the pair and any further fields are
/// ignored. Lines with fewer than two fields are collected in
/// [`ParsedVocab::skipped`].
pub fn parse_vocab(text: &str) -> ParsedVocab {
    let mut parsed = ParsedVocab::default();
    let text = text.replace("\r\n", "\n");

    for (idx, line) in text.split(['\n', '\r']).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(FIELD_DELIMITER);
        match (fields.next(), fields.next()) {
            (Some(term), Some(translation)) => {
                let pair = VocabPair::new(term.trim(), translation.trim());
                trace!("Line {}: {:?}", idx + 1, pair);
                parsed.pairs.push(pair);
            }
            _ => {
                warn!("Skipping line {} without a translation: {:?}", idx + 1, line);
                parsed.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    debug!(
        "Parsed {} pairs, skipped {} lines",
        parsed.pairs.len(),
        parsed.skipped.len()
    );
    parsed
}
