//! Lenient deserializers for caller-supplied tuning fields.
//!
//! Browser clients submit form values with unreliable JSON types: numbers
//! arrive as strings, booleans as `"true"`/`"false"`, strings occasionally
//! as bare numbers. Each deserializer here coerces the loose representation
//! to the field's declared type before the value is forwarded upstream.
//! Values that cannot represent the type (a fractional number for an
//! integer field, an arbitrary word for a boolean) are rejected.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// A JSON scalar before coercion.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl Loose {
    fn into_u32(self) -> Result<u32, String> {
        let n = match self {
            Loose::Num(n) => n,
            Loose::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("cannot coerce {s:?} to an integer"))?,
            Loose::Bool(b) => return Err(format!("cannot coerce {b} to an integer")),
        };
        if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
            Ok(n as u32)
        } else {
            Err(format!("expected a non-negative integer, got {n}"))
        }
    }

    fn into_f64(self) -> Result<f64, String> {
        match self {
            Loose::Num(n) => Ok(n),
            Loose::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("cannot coerce {s:?} to a number")),
            Loose::Bool(b) => Err(format!("cannot coerce {b} to a number")),
        }
    }

    fn into_bool(self) -> Result<bool, String> {
        match self {
            Loose::Bool(b) => Ok(b),
            Loose::Str(s) => match s.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(format!("cannot coerce {other:?} to a boolean")),
            },
            Loose::Num(n) if n == 0.0 => Ok(false),
            Loose::Num(n) if n == 1.0 => Ok(true),
            Loose::Num(n) => Err(format!("cannot coerce {n} to a boolean")),
        }
    }

    fn into_string(self) -> Result<String, String> {
        match self {
            Loose::Str(s) => Ok(s),
            // Render integral floats without the trailing ".0" a plain
            // f64 Display would produce.
            Loose::Num(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                Ok(format!("{}", n as i64))
            }
            Loose::Num(n) => Ok(n.to_string()),
            Loose::Bool(b) => Ok(b.to_string()),
        }
    }
}

/// Coerce to `u32`: accepts integers, integral floats, and numeric strings.
pub fn int<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Loose::deserialize(deserializer)?
        .into_u32()
        .map_err(D::Error::custom)
}

/// Coerce to `f64`: accepts numbers and numeric strings.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Loose::deserialize(deserializer)?
        .into_f64()
        .map_err(D::Error::custom)
}

/// Coerce to `bool`: accepts booleans, `"true"`/`"false"`, and `0`/`1`.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Loose::deserialize(deserializer)?
        .into_bool()
        .map_err(D::Error::custom)
}

/// Coerce to `String`: accepts strings, numbers, and booleans.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Loose::deserialize(deserializer)?
        .into_string()
        .map_err(D::Error::custom)
}
