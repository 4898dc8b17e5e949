// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Value;
use crate::document::Document;
use crate::error::{AdfError, AdfResult};
use crate::parser::{self, ParseOptions};

mod access;
mod conversion;
mod helpers;
mod validation;

/// A parsed ADF document together with the text and path it came from.
///
/// The raw text is kept so typed-access errors can point at the line that
/// defines the offending key.
#[derive(Debug, Clone)]
pub struct AdfConfig {
    document: Document,
    raw_content: String,
    source_path: Option<PathBuf>,
}

impl AdfConfig {
    /// Load and parse an ADF file. A leading `~/` expands to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = AdfConfig::from_file("~/.config/app/settings.adf")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> AdfResult<Self> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> AdfResult<Self> {
        let resolved = helpers::resolve_path(path.as_ref())?;
        let content = read_source(&resolved)?;
        let document = parser::parse_with_options(&content, options)?;
        tracing::debug!(path = %resolved.display(), keys = document.len(), "loaded config file");

        Ok(Self {
            document,
            raw_content: content,
            source_path: Some(resolved),
        })
    }

    /// Load a config file with fallback support.
    ///
    /// Only a [`AdfError::FileError`] on the primary path triggers the
    /// fallback; parse failures are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> AdfResult<Self> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(AdfError::FileError { .. }) => {
                tracing::debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unavailable, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    AdfError::FileError { message, .. } => AdfError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse ADF text held in memory. No file I/O.
    pub fn from_str(content: &str) -> AdfResult<Self> {
        Self::from_str_with_options(content, ParseOptions::default())
    }

    pub fn from_str_with_options(content: &str, options: ParseOptions) -> AdfResult<Self> {
        Ok(Self {
            document: parser::parse_with_options(content, options)?,
            raw_content: content.to_string(),
            source_path: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// 1-based line number and trimmed text of the key/value line defining `path`.
    pub fn find_source_line(&self, path: &str) -> Option<(usize, String)> {
        helpers::find_source_line(path, &self.raw_content)
    }
}

/// Reads a whole source file, mapping I/O failures to [`AdfError::FileError`].
pub(crate) fn read_source(path: &Path) -> AdfResult<String> {
    fs::read_to_string(path).map_err(|e| AdfError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })
}
