//! Lenient deserializers for fields the fixtures and clients send either as
//! JSON numbers or as numeric strings.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Bool(bool),
    Str(String),
}

/// Required integer: `15` or `"15"`.
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Int(value) => i32::try_from(value).map_err(D::Error::custom),
        Loose::Str(value) => value
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {value:?}"))),
        Loose::Bool(value) => Err(D::Error::custom(format!(
            "expected an integer, got {value}"
        ))),
    }
}

/// Optional integer. Blank or unparsable strings become `None`.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(value)) => i32::try_from(value).ok(),
        Some(Loose::Str(value)) => value.trim().parse().ok(),
        Some(Loose::Bool(_)) | None => None,
    })
}

/// Boolean flag: `true`, `"true"`, `"yes"`, `1`. Anything else is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(value)) => value,
        Some(Loose::Int(value)) => value != 0,
        Some(Loose::Str(value)) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        None => false,
    })
}
