use super::*;

impl AdfConfig {
    /// Get a typed value and check it with `validator`. `valid_values`
    /// describes what was expected and ends up in the error hint.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> AdfResult<T>
    where
        T: TryFrom<Value, Error = AdfError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            return Err(AdfError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                path: Some(path.to_string()),
                hint: Some(self.hint_with_snippet(format!("Valid values are: {}", valid_values), path)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string and check it is one of `allowed_values`, ignoring case.
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> AdfResult<String> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
            return Err(AdfError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                path: Some(path.to_string()),
                hint: Some(self.hint_with_snippet(
                    format!("Expected one of: {}", allowed_values.join(", ")),
                    path,
                )),
                code: Some(451),
            });
        }

        Ok(value)
    }

    fn hint_with_snippet(&self, hint: String, path: &str) -> String {
        match self.find_source_line(path) {
            Some((line, snippet)) => format!("{}\n  → line {}: {}", hint, line, snippet),
            None => hint,
        }
    }
}
