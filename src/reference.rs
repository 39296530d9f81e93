//! Reference transcript index for WER scoring.
//!
//! One record per line, `<identifier>|<transcript>`, UTF-8. Loaded once
//! and read-only for the duration of a batch run.

use crate::error::{Result, VoxbridgeError};
use std::collections::HashMap;
use std::path::Path;

/// Mapping from sample identifier to reference transcript.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Load an index from a delimited text file.
    ///
    /// Lines without a `|` separator fail with a line-numbered error;
    /// blank lines are skipped. The transcript keeps everything after the
    /// first `|`, so transcripts may themselves contain pipes.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut entries = HashMap::new();

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let (id, text) = line.split_once('|').ok_or(VoxbridgeError::Reference {
                line: idx + 1,
                message: "missing '|' separator".to_string(),
            })?;
            entries.insert(id.to_string(), text.to_string());
        }

        Ok(Self { entries })
    }

    /// Reference transcript for `identifier`, if present.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
