use super::*;

impl AdfConfig {
    /// Get a typed value from the absolute tree using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use adf_cfg::AdfConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = AdfConfig::from_file("config.adf")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let tags: Vec<String> = config.get("tags")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> AdfResult<T>
    where
        T: TryFrom<Value, Error = AdfError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    /// A value that exists but has the wrong type is still an error.
    pub fn get_optional<T>(&self, path: &str) -> AdfResult<Option<T>>
    where
        T: TryFrom<Value, Error = AdfError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(AdfError::ValidationError { code: Some(304), .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use adf_cfg::AdfConfig;
    /// # let config = AdfConfig::from_file("config.adf").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = AdfError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the absolute tree. An empty path returns the whole tree.
    pub fn get_value(&self, path: &str) -> AdfResult<Value> {
        self.document.get(path).ok_or_else(|| not_found(path, "configuration"))
    }

    /// Get a raw `Value` from the relative sections.
    pub fn get_relative_value(&self, path: &str) -> AdfResult<Value> {
        self.document
            .get_relative(path)
            .ok_or_else(|| not_found(path, "relative sections"))
    }

    /// Get all keys at a given path level, in definition order.
    pub fn get_keys(&self, path: &str) -> AdfResult<Vec<String>> {
        match self.get_value(path)? {
            Value::Object(items) => Ok(items.keys().cloned().collect()),
            other => Err(AdfError::TypeError {
                message: format!("Path '{}' is a {}, not an object", path, other.type_name()),
                path: Some(path.to_string()),
                hint: Some("Only objects have keys".into()),
                code: Some(306),
            }),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.document.contains(path)
    }
}

fn not_found(path: &str, tree: &str) -> AdfError {
    AdfError::ValidationError {
        message: format!("Path '{}' not found in {}", path, tree),
        path: Some(path.to_string()),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}

/// Attach the path and the defining source line to a conversion error.
fn enhance_error_with_line_info(e: AdfError, path: &str, raw_content: &str) -> AdfError {
    let located = |message: String| match helpers::find_source_line(path, raw_content) {
        Some((line, snippet)) => format!("{}\n  → line {}: {}", message, line, snippet),
        None => message,
    };

    match e {
        AdfError::TypeError { message, hint, code, .. } => AdfError::TypeError {
            message: located(message),
            path: Some(path.to_string()),
            hint,
            code,
        },
        AdfError::ValidationError { message, hint, code, .. } => AdfError::ValidationError {
            message: located(message),
            path: Some(path.to_string()),
            hint,
            code,
        },
        other => other,
    }
}
