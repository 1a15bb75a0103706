//! Turns a YQL JSON body into a uniform list of rows.
//!
//! YQL collapses a one-row result into a bare object and only uses an array
//! when there are several rows. Callers always get a `Vec<Row>` here: empty
//! when the service reports no rows, one element for a bare object, and the
//! array unchanged otherwise.
//!
//! A body that cannot be navigated down to `query.results` is rejected as a
//! whole with [`YqlError::Parse`]; no partial result is returned.

mod wire;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::YqlError;
use wire::{Envelope, HistoryResults, QuoteResults, ResultsNode};

/// One result row, keyed by column name.
pub type Row = Map<String, Value>;

/// Envelope metadata the service attaches to every answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMeta {
    /// Row count as reported by the service.
    pub count: Option<u64>,
    /// Server-side creation timestamp, verbatim.
    pub created: Option<String>,
    pub lang: Option<String>,
}

/// Normalized rows plus envelope metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub meta: QueryMeta,
    pub rows: Vec<Row>,
}

/// Rows of a quote answer, found at `query.results.row`.
///
/// # Errors
///
/// [`YqlError::Parse`] for malformed JSON, a missing `query` or `results` key,
/// an error envelope, or a `row` value that is neither an object nor an array
/// of objects.
pub fn normalize_quotes(body: &str) -> Result<Vec<Row>, YqlError> {
    parse_quotes(body).map(|set| set.rows)
}

/// Rows of a history answer, found at `query.results.quote`.
///
/// # Errors
///
/// Same as [`normalize_quotes`].
pub fn normalize_history(body: &str) -> Result<Vec<Row>, YqlError> {
    parse_history(body).map(|set| set.rows)
}

/// Like [`normalize_quotes`], keeping the envelope metadata.
pub fn parse_quotes(body: &str) -> Result<ResultSet, YqlError> {
    parse_with::<QuoteResults>(body)
}

/// Like [`normalize_history`], keeping the envelope metadata.
pub fn parse_history(body: &str) -> Result<ResultSet, YqlError> {
    parse_with::<HistoryResults>(body)
}

fn parse_with<R>(body: &str) -> Result<ResultSet, YqlError>
where
    R: ResultsNode + DeserializeOwned,
{
    let env: Envelope<R> =
        wire::decode(body).map_err(|e| YqlError::Parse(format!("json parse error: {e}")))?;

    if let Some(err) = env.error {
        return Err(YqlError::Parse(format!(
            "yql error: {}",
            err.description.unwrap_or_else(|| "no description".into())
        )));
    }

    let query = env
        .query
        .ok_or_else(|| YqlError::Parse("missing query".into()))?;

    let results = query
        .results
        .ok_or_else(|| YqlError::Parse("missing results".into()))?;

    let rows = results
        .and_then(R::into_rows)
        .map(wire::Rows::into_vec)
        .unwrap_or_default();

    Ok(ResultSet {
        meta: QueryMeta {
            count: query.count,
            created: query.created,
            lang: query.lang,
        },
        rows,
    })
}
