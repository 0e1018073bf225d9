use crate::LoadError;
use std::path::Path;

/// Class names, index-aligned with the model's score vector.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn from_labels(labels: Vec<String>) -> Result<Self, LoadError> {
        if labels.is_empty() {
            return Err(LoadError::Labels("label table is empty".to_string()));
        }
        Ok(Self { labels })
    }

    /// Parse a newline-delimited label list.
    ///
    /// Lines are kept verbatim apart from a trailing `\r`; a final newline
    /// does not add an empty label.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::from_labels(text.lines().map(str::to_string).collect())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoadError::Labels(format!("failed to read {}: {e}", path.display()))
        })?;
        let table = Self::parse(&text)?;
        log::info!("loaded {} labels from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
