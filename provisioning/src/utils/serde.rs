use std::fmt;

use serde::de::{self, Visitor};

/// Accept a version only if the source already holds it as a string.
///
/// Unquoted YAML versions such as `1.10` arrive as floats and would be
/// rendered as `1.1`, so numbers are rejected instead of converted.
pub fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(VersionVisitor)
}

struct VersionVisitor;

impl VersionVisitor {
    fn reject_number<E: de::Error>(value: impl fmt::Display) -> E {
        E::custom(format!(
            "version was read as the number {value}, quote the version to keep it verbatim"
        ))
    }
}

impl<'de> Visitor<'de> for VersionVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a version string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Err(Self::reject_number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Err(Self::reject_number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Err(Self::reject_number(value))
    }
}
