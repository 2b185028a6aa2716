use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyId {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Backend ids arrive as integers, demo data uses strings; both become `String`.
pub(crate) fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AnyId::deserialize(deserializer)? {
        AnyId::Text(text) => text,
        AnyId::Integer(n) => n.to_string(),
        AnyId::Float(n) => n.to_string(),
    })
}

pub(crate) fn default_true() -> bool {
    true
}
