pub mod ast;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod path;
pub mod serializer;

pub use ast::{Object, Value};
pub use config::AdfConfig;
pub use document::Document;
pub use error::{AdfError, AdfResult};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, parse_file, parse_with_options, ParseMode, ParseOptions, Parser};
pub use serializer::{serialize, Serializer};
