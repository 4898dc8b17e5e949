use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::document::Document;
use crate::error::{AdfError, AdfResult};
use crate::lexer::{Lexer, Token};

mod document;
mod value;

pub use document::SectionShape;

/// How malformed input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Lenient,
    /// Accepted and recorded. Every line currently classifies, so parsing
    /// behaves exactly as in lenient mode.
    Strict,
}

impl FromStr for ParseMode {
    type Err = AdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            other => Err(AdfError::ValidationError {
                message: format!("Unknown parse mode '{}'", other),
                path: None,
                hint: Some("Use 'lenient' or 'strict'".into()),
                code: Some(452),
            }),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => write!(f, "lenient"),
            ParseMode::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Turn `true`, `42`, `3.5` into booleans and numbers. When off every
    /// scalar stays a string.
    pub infer_types: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            mode: ParseMode::Lenient,
            infer_types: true,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            mode: ParseMode::Strict,
            ..Self::default()
        }
    }

    pub fn without_inference() -> Self {
        ParseOptions {
            infer_types: false,
            ..Self::default()
        }
    }
}

/// Turns ADF text (or an already lexed token stream) into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, text: &str) -> AdfResult<Document> {
        let tokens = Lexer::new().tokenize(text);
        self.parse_tokens(&tokens)
    }

    /// Groups tokens into sections and writes each one into a fresh document.
    pub fn parse_tokens(&self, tokens: &[Token]) -> AdfResult<Document> {
        tracing::debug!(mode = %self.options.mode, infer_types = self.options.infer_types, tokens = tokens.len(), "parsing document");
        let mut doc = Document::new();
        document::parse_sections(self, tokens, &mut doc);
        Ok(doc)
    }
}

/// Parse ADF text with default options.
pub fn parse(text: &str) -> AdfResult<Document> {
    Parser::default().parse(text)
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> AdfResult<Document> {
    Parser::new(options).parse(text)
}

/// Read and parse a file with default options.
pub fn parse_file<P: AsRef<Path>>(path: P) -> AdfResult<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> AdfResult<Document> {
    let text = crate::config::read_source(path.as_ref())?;
    parse_with_options(&text, options)
}

#[cfg(test)]
mod tests;
