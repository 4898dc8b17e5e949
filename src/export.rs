// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use serde::Serialize;

use crate::ast::Value;
use crate::document::Document;
use crate::error::{AdfError, AdfResult};
use crate::parser;

/// Both trees side by side. Field order is kept in the output.
#[derive(Serialize)]
struct SplitDocument {
    absolute: Value,
    relative: Value,
}

fn to_pretty_json<T: Serialize>(value: &T) -> AdfResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AdfError::ValidationError {
        message: format!("Failed to render JSON: {}", e),
        path: None,
        hint: None,
        code: Some(500),
    })
}

/// Export the absolute tree of a document as pretty-printed JSON.
///
/// Key order follows definition order. Relative sections are left out; use
/// [`document_to_json_with_relative`] to include them.
///
/// # Examples
/// ```no_run
/// use adf_cfg::export::document_to_json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = adf_cfg::parse("# server:\nport = 8080")?;
/// println!("{}", document_to_json(&doc)?);
/// # Ok(())
/// # }
/// ```
pub fn document_to_json(doc: &Document) -> AdfResult<String> {
    to_pretty_json(&doc.to_structured_copy())
}

/// Both trees, as `{"absolute": {...}, "relative": {...}}`.
pub fn document_to_json_with_relative(doc: &Document) -> AdfResult<String> {
    to_pretty_json(&SplitDocument {
        absolute: doc.to_structured_copy(),
        relative: doc.relative_sections_copy(),
    })
}

/// Export an ADF file directly to JSON.
///
/// # Errors
/// Returns a [`AdfError::FileError`] if the file can't be read.
pub fn export_adf_file<P: AsRef<Path>>(path: P) -> AdfResult<String> {
    let doc = parser::parse_file(path)?;
    document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_export_preserves_types_and_order() {
        let doc = parser::parse("# app:\nname = demo\nport = 8080\nratio = 0.5\ndebug = false\n\n# tags:\nb\na\n")
            .unwrap();
        let json_output = document_to_json(&doc).expect("Failed to export document to JSON");
        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["app"]["name"], "demo");
        assert_eq!(v["app"]["port"], 8080);
        assert_eq!(v["app"]["ratio"], 0.5);
        assert_eq!(v["app"]["debug"], false);
        assert_eq!(v["tags"], json!(["b", "a"]));

        let name_at = json_output.find("\"name\"").unwrap();
        let port_at = json_output.find("\"port\"").unwrap();
        assert!(name_at < port_at);
    }

    #[test]
    fn test_export_with_relative_sections() {
        let doc = parser::parse("# a:\nx = 1\n\nweapon:\ndamage = 5\n").unwrap();

        let plain: serde_json::Value = serde_json::from_str(&document_to_json(&doc).unwrap()).unwrap();
        assert!(plain.get("weapon").is_none());

        let both: serde_json::Value =
            serde_json::from_str(&document_to_json_with_relative(&doc).unwrap()).unwrap();
        assert_eq!(both["absolute"]["a"]["x"], 1);
        assert_eq!(both["relative"]["weapon"]["damage"], 5);
    }

    #[test]
    fn test_export_adf_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# users:\nname = Alice\n\nname = Bob\n").unwrap();

        let v: serde_json::Value = serde_json::from_str(&export_adf_file(file.path()).unwrap()).unwrap();
        assert_eq!(v["users"][1]["name"], "Bob");

        let err = export_adf_file("/nonexistent/file.adf").unwrap_err();
        assert!(matches!(err, AdfError::FileError { .. }));
    }
}
