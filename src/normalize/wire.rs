use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Row;

#[derive(Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub(crate) struct Envelope<R> {
    #[serde(default, deserialize_with = "de_object")]
    pub(crate) query: Option<QueryNode<R>>,
    #[serde(default, deserialize_with = "de_object")]
    pub(crate) error: Option<ErrorNode>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorNode {
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub(crate) struct QueryNode<R> {
    pub(crate) count: Option<u64>,
    pub(crate) created: Option<String>,
    pub(crate) lang: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: explicit `null` (zero rows).
    #[serde(default, deserialize_with = "de_present")]
    pub(crate) results: Option<Option<R>>,
}

/// `query.results` of the `csv` table.
#[derive(Deserialize)]
pub(crate) struct QuoteResults {
    #[serde(default)]
    pub(crate) row: Option<Rows>,
}

/// `query.results` of `yahoo.finance.historicaldata`.
#[derive(Deserialize)]
pub(crate) struct HistoryResults {
    #[serde(default)]
    pub(crate) quote: Option<Rows>,
}

/// The service sends a bare object for one row and an array for several.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Rows {
    Many(Vec<Row>),
    One(Row),
}

impl Rows {
    pub(crate) fn into_vec(self) -> Vec<Row> {
        match self {
            Rows::Many(rows) => rows,
            Rows::One(row) => vec![row],
        }
    }
}

pub(crate) trait ResultsNode {
    fn into_rows(self) -> Option<Rows>;
}

impl ResultsNode for QuoteResults {
    fn into_rows(self) -> Option<Rows> {
        self.row
    }
}

impl ResultsNode for HistoryResults {
    fn into_rows(self) -> Option<Rows> {
        self.quote
    }
}

/// Decodes a whole body. The top level must be a JSON object.
pub(crate) fn decode<R>(body: &str) -> Result<Envelope<R>, serde_json::Error>
where
    R: for<'de> Deserialize<'de>,
{
    let value: Value = serde_json::from_str(body)?;
    object_into(value)
}

/// Derived struct impls also accept a sequence and fill fields by position.
/// The envelope levels are only valid as objects.
fn object_into<'de, T, E>(value: Value) -> Result<T, E>
where
    T: Deserialize<'de>,
    E: serde::de::Error,
{
    match value {
        Value::Object(_) => T::deserialize(value).map_err(E::custom),
        other => Err(E::custom(format_args!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn de_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => object_into(value).map(Some),
    }
}

fn de_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    de_object(deserializer).map(Some)
}
