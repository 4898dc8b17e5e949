use super::*;
use super::scanner::{count_leading_quotes, find_closing_run, split_constraint};
use crate::path::is_valid_path;

pub(super) fn tokenize_line(lexer: &mut Lexer, line: &str, line_number: usize) -> Token {
    if let LexState::InMultiline(count) = lexer.state {
        return tokenize_multiline_line(lexer, line, line_number, count);
    }

    if line.trim().is_empty() {
        return Token::new(TokenKind::Blank, line_number, line);
    }

    if let Some(header) = tokenize_header(line, line_number) {
        return header;
    }

    if line.contains('=') {
        return tokenize_key_value(lexer, line, line_number);
    }

    tokenize_scalar(line, line_number)
}

fn tokenize_multiline_line(lexer: &mut Lexer, line: &str, line_number: usize, count: usize) -> Token {
    match find_closing_run(line, count) {
        Some((end, constraint)) => {
            lexer.state = LexState::Normal;
            Token {
                value: Some(line[..end].trim_end().to_string()),
                constraint,
                quote_count: Some(count),
                ..Token::new(TokenKind::MultilineEnd, line_number, line)
            }
        }
        None => Token {
            value: Some(line.to_string()),
            ..Token::new(TokenKind::MultilineContent, line_number, line)
        },
    }
}

/// `# path:`, `#:` or `path:`. Returns `None` when the line is not a valid
/// header, letting it fall through to key/value or scalar classification.
fn tokenize_header(line: &str, line_number: usize) -> Option<Token> {
    let body = line.trim().strip_suffix(':')?;
    let mut path = body.trim();
    let is_absolute = path.starts_with('#');
    if is_absolute {
        path = path[1..].trim();
    }

    if path.is_empty() && !is_absolute {
        // A bare `:` line has no path context; it is classified as content.
        return None;
    }
    if !path.is_empty() && !is_valid_path(path) {
        return None;
    }

    let kind = if is_absolute {
        TokenKind::AbsoluteHeader
    } else {
        TokenKind::RelativeHeader
    };
    Some(Token {
        path: Some(path.to_string()),
        is_absolute,
        ..Token::new(kind, line_number, line)
    })
}

fn tokenize_key_value(lexer: &mut Lexer, line: &str, line_number: usize) -> Token {
    let Some((raw_key, rest)) = line.split_once('=') else {
        return tokenize_scalar(line, line_number);
    };
    let key = raw_key.trim().to_string();
    let raw_value = rest.trim_start();
    let quote_count = count_leading_quotes(raw_value);

    if quote_count == 0 {
        let (value, constraint) = split_constraint(raw_value);
        return Token {
            key: Some(key),
            value: Some(value),
            constraint,
            ..Token::new(TokenKind::KeyValue, line_number, line)
        };
    }

    // Closed on the same line: `key = "text"`, `key = """text"""`.
    if let Some((end, constraint)) = find_closing_run(raw_value, quote_count) {
        if end > quote_count {
            return Token {
                key: Some(key),
                value: Some(raw_value[quote_count..end].to_string()),
                constraint,
                quoted: true,
                ..Token::new(TokenKind::KeyValue, line_number, line)
            };
        }
    }

    lexer.state = LexState::InMultiline(quote_count);
    Token {
        key: Some(key),
        value: Some(raw_value[quote_count..].to_string()),
        quote_count: Some(quote_count),
        ..Token::new(TokenKind::MultilineStart, line_number, line)
    }
}

fn tokenize_scalar(line: &str, line_number: usize) -> Token {
    Token {
        value: Some(line.trim().to_string()),
        ..Token::new(TokenKind::ScalarValue, line_number, line)
    }
}
