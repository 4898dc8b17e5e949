// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::ast::Value;
use crate::error::AdfError;

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> AdfError {
    AdfError::TypeError {
        message: format!("Expected {}, got {} ({})", expected, value.type_name(), value),
        path: None,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(type_error(
                "string",
                &other,
                "Quote the value if it should be read as text",
                401,
            )),
        }
    }
}

/// Near-misses of `true`/`false`: a shared prefix or the same letters shuffled (`ture`, `flase`).
fn looks_like_bool(s: &str) -> bool {
    let lower = s.trim().to_lowercase();
    let letters = |w: &str| {
        let mut chars: Vec<char> = w.chars().collect();
        chars.sort_unstable();
        chars
    };
    ["true", "false"].iter().any(|word| {
        lower.starts_with(&word[..3]) || letters(&lower) == letters(word)
    })
}

impl TryFrom<Value> for bool {
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::String(ref s) if looks_like_bool(s) => {
                Err(AdfError::TypeError {
                    message: format!("Invalid boolean value '{}'. Did you mean 'true' or 'false'?", s),
                    path: None,
                    hint: None,
                    code: Some(404),
                })
            }
            other => Err(type_error("boolean", &other, "Use true or false", 404)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| type_error("number", &value, "Use a number value in your config", 402))
    }
}

impl TryFrom<Value> for f32 {
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(type_error("integer", &other, "Use a whole number in your config", 402)),
        }
    }
}

/// Narrowing integer conversions; values outside the target range are rejected.
macro_rules! impl_try_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = AdfError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| AdfError::TypeError {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        path: None,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(403),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, u16, u32, u64, usize);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = AdfError>,
{
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(type_error(
                "array",
                &other,
                "Put one element per line under a section header",
                405,
            )),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = AdfError>,
{
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

/// Keeps definition order.
impl<T> TryFrom<Value> for IndexMap<String, T>
where
    T: TryFrom<Value, Error = AdfError>,
{
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(items) => items
                .into_iter()
                .map(|(key, item)| T::try_from(item).map(|converted| (key, converted)))
                .collect(),
            other => Err(type_error("object", &other, "Use a section with key = value lines", 410)),
        }
    }
}

impl<T> TryFrom<Value> for HashMap<String, T>
where
    T: TryFrom<Value, Error = AdfError>,
{
    type Error = AdfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        IndexMap::<String, T>::try_from(value).map(|map| map.into_iter().collect())
    }
}
