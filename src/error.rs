use std::fmt;

/// The main error type for ADF parsing, loading and typed access.
#[derive(Debug, Clone, PartialEq)]
pub enum AdfError {
    /// Malformed input under strict handling.
    ParseError {
        message: String,
        line: Option<usize>,
        raw_line: Option<String>,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by post-parse consistency checks.
    ValidationError {
        message: String,
        path: Option<String>,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a value cannot be converted to the requested Rust type.
    TypeError {
        message: String,
        path: Option<String>,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

pub type AdfResult<T> = Result<T, AdfError>;

impl AdfError {
    pub fn parse_error(message: impl Into<String>, line: Option<usize>, raw_line: Option<&str>) -> Self {
        AdfError::ParseError {
            message: message.into(),
            line,
            raw_line: raw_line.map(str::to_string),
            hint: None,
            code: Some(101),
        }
    }

    pub fn validation_error(message: impl Into<String>, path: Option<&str>) -> Self {
        AdfError::ValidationError {
            message: message.into(),
            path: path.map(str::to_string),
            hint: None,
            code: Some(450),
        }
    }

    /// Numeric code attached to the error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            AdfError::ParseError { code, .. }
            | AdfError::ValidationError { code, .. }
            | AdfError::TypeError { code, .. }
            | AdfError::FileError { code, .. } => *code,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdfError::FileError { .. })
            || matches!(self, AdfError::ValidationError { code: Some(304), .. })
    }
}

fn hint_suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for AdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdfError::ParseError { message, line, raw_line, hint, code } => {
                match line {
                    Some(l) => write!(f, "[ADF] Parse Error at line {}: {}", l, message)?,
                    None => write!(f, "[ADF] Parse Error: {}", message)?,
                }
                if let Some(raw) = raw_line {
                    write!(f, "\n  {}", raw)?;
                }
                write!(f, "{}", hint_suffix(hint, code))
            }
            AdfError::ValidationError { message, path, hint, code } => match path {
                Some(p) => write!(f, "[ADF] Validation Error at '{}': {}{}", p, message, hint_suffix(hint, code)),
                None => write!(f, "[ADF] Validation Error: {}{}", message, hint_suffix(hint, code)),
            },
            AdfError::TypeError { message, path, hint, code } => match path {
                Some(p) => write!(f, "[ADF] Type Error at '{}': {}{}", p, message, hint_suffix(hint, code)),
                None => write!(f, "[ADF] Type Error: {}{}", message, hint_suffix(hint, code)),
            },
            AdfError::FileError { message, path, hint, code } => {
                write!(f, "[ADF] File Error '{}': {}{}", path, message, hint_suffix(hint, code))
            }
        }
    }
}

impl std::error::Error for AdfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_line_and_raw_text() {
        let err = AdfError::parse_error("unterminated block", Some(7), Some("body = \"\"\""));
        let rendered = err.to_string();
        assert!(rendered.contains("line 7"));
        assert!(rendered.contains("body = \"\"\""));
        assert_eq!(err.code(), Some(101));
    }

    #[test]
    fn test_validation_error_display_with_and_without_path() {
        let with_path = AdfError::validation_error("bad port", Some("server.port"));
        assert!(with_path.to_string().contains("'server.port'"));

        let without_path = AdfError::validation_error("bad document", None);
        assert_eq!(without_path.to_string(), "[ADF] Validation Error: bad document Code: 450");
    }

    #[test]
    fn test_not_found_classification() {
        let file = AdfError::FileError {
            message: "missing".into(),
            path: "a.adf".into(),
            hint: None,
            code: Some(301),
        };
        assert!(file.is_not_found());
        assert!(!AdfError::validation_error("x", None).is_not_found());
    }
}
