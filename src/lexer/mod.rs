// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Blank,
    AbsoluteHeader,
    RelativeHeader,
    KeyValue,
    ScalarValue,
    MultilineStart,
    MultilineContent,
    MultilineEnd,
}

impl TokenKind {
    pub fn is_header(&self) -> bool {
        matches!(self, TokenKind::AbsoluteHeader | TokenKind::RelativeHeader)
    }

    /// Key/value lines, including the opening line of a multiline block.
    pub fn is_key_value(&self) -> bool {
        matches!(self, TokenKind::KeyValue | TokenKind::MultilineStart)
    }
}

/// One classified line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub line_number: usize,
    pub raw_line: String,

    // --- headers ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub is_absolute: bool,

    // --- key/value, scalar and multiline lines ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Set for `key = "text"` values closed on the same line.
    pub quoted: bool,

    // --- multiline ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_count: Option<usize>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, line_number: usize, raw_line: &str) -> Self {
        Token {
            kind,
            line_number,
            raw_line: raw_line.to_string(),
            path: None,
            is_absolute: false,
            key: None,
            value: None,
            constraint: None,
            quoted: false,
            quote_count: None,
        }
    }
}

/// Lexer state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    #[default]
    Normal,
    /// Inside a multiline block opened by a run of this many `"`.
    InMultiline(usize),
}

/// Line-oriented lexer. Every input line maps to exactly one token.
#[derive(Debug, Default)]
pub struct Lexer {
    state: LexState,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer { state: LexState::Normal }
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    /// Tokenize a whole text. The state is reset first, so a lexer can be reused.
    pub fn tokenize(&mut self, text: &str) -> Vec<Token> {
        self.state = LexState::Normal;
        let tokens: Vec<Token> = text
            .lines()
            .enumerate()
            .map(|(i, line)| self.next_line(line, i + 1))
            .collect();

        if let LexState::InMultiline(n) = self.state {
            tracing::debug!(quote_count = n, "input ended inside an unterminated multiline block");
        }
        tokens
    }

    /// Classify one line, advancing the multiline state.
    pub fn next_line(&mut self, line: &str, line_number: usize) -> Token {
        let token = tokenizer::tokenize_line(self, line, line_number);
        tracing::trace!(line = line_number, kind = ?token.kind, "classified line");
        token
    }
}

/// Tokenize `text` with a fresh lexer.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new().tokenize(text)
}
