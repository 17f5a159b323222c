//! Generic parsed documents.

use crate::{EntityKind, RegistryError};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// The text format of a registry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DocumentFormat {
    /// YAML
    #[display("YAML")]
    Yaml,
    /// JSON
    #[display("JSON")]
    Json,
}

impl DocumentFormat {
    /// Picks the format from a file extension: `.json` is JSON, anything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A parsed, untyped document tree together with where it came from.
///
/// YAML and JSON both decode into the same tree so the entity parsers do not care which
/// format an artifact was written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
    path: PathBuf,
}

impl Document {
    /// Creates a document from an already parsed tree.
    pub fn new(value: Value, path: impl Into<PathBuf>) -> Self {
        Self { value, path: path.into() }
    }

    /// Parses `text` in the given format. Syntax errors are reported against `kind`.
    pub fn parse(
        text: &str,
        format: DocumentFormat,
        kind: EntityKind,
        path: impl Into<PathBuf>,
    ) -> Result<Self, RegistryError> {
        let path = path.into();
        if text.trim().is_empty() {
            return Ok(Self { value: Value::Null, path });
        }
        let value = match format {
            DocumentFormat::Yaml => {
                serde_yaml::from_str::<YamlTree>(text).map(|tree| tree.0).map_err(|e| e.to_string())
            }
            DocumentFormat::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
        };
        match value {
            Ok(value) => Ok(Self { value, path }),
            Err(e) => Err(RegistryError::MalformedEntity {
                kind,
                path,
                reason: format!("invalid {format}: {e}"),
            }),
        }
    }

    /// Parses YAML text.
    pub fn from_yaml(text: &str, kind: EntityKind) -> Result<Self, RegistryError> {
        Self::parse(text, DocumentFormat::Yaml, kind, "<memory>")
    }

    /// Parses JSON text.
    pub fn from_json(text: &str, kind: EntityKind) -> Result<Self, RegistryError> {
        Self::parse(text, DocumentFormat::Json, kind, "<memory>")
    }

    /// Reads and parses the file at `path`, choosing the format from its extension.
    pub fn read(path: &Path, kind: EntityKind) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            RegistryError::UnreadableSource { path: path.to_path_buf(), source }
        })?;
        Self::parse(&text, DocumentFormat::from_path(path), kind, path)
    }

    /// Returns the parsed tree.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A YAML document decoded into a [`Value`] without losing integers wider than 64 bits.
///
/// YAML integers up to 128 bits arrive as `u128`/`i128`; they are stored as exact
/// [`Number`]s, which `serde_json`'s `arbitrary_precision` keeps as decimal text.
struct YamlTree(Value);

impl<'de> Deserialize<'de> for YamlTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(YamlTreeVisitor).map(Self)
    }
}

struct YamlTreeVisitor;

impl YamlTreeVisitor {
    fn wide_integer<E: de::Error>(text: String) -> Result<Value, E> {
        serde_json::from_str::<Number>(&text).map(Value::Number).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for YamlTreeVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Value, E> {
        Self::wide_integer(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Value, E> {
        Self::wide_integer(v.to_string())
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        YamlTree::deserialize(deserializer).map(|tree| tree.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(YamlTree(value)) = seq.next_element()? {
            values.push(value);
        }
        Ok(Value::Array(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = Map::new();
        while let Some((key, YamlTree(value))) = map.next_entry::<String, YamlTree>()? {
            entries.insert(key, value);
        }
        Ok(Value::Object(entries))
    }
}
