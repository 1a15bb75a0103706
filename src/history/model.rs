use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::YqlError;
use crate::normalize::Row;

/// One daily bar from `yahoo.finance.historicaldata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// Close adjusted for splits and dividends.
    pub adj_close: Decimal,
    pub volume: u64,
}

impl TryFrom<&Row> for HistoryBar {
    type Error = YqlError;

    /// The table reports every value as a string (`"Open": "98.779999"`);
    /// plain JSON numbers are accepted as well.
    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let date = text(row, "Date")?;
        Ok(Self {
            symbol: text(row, "Symbol")?.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| YqlError::InvalidRow(format!("Date {date:?}: {e}")))?,
            open: decimal(row, "Open")?,
            high: decimal(row, "High")?,
            low: decimal(row, "Low")?,
            close: decimal(row, "Close")?,
            adj_close: decimal(row, "Adj_Close")?,
            volume: volume(row)?,
        })
    }
}

fn field<'a>(row: &'a Row, key: &str) -> Result<&'a Value, YqlError> {
    row.get(key)
        .ok_or_else(|| YqlError::InvalidRow(format!("missing {key}")))
}

fn text<'a>(row: &'a Row, key: &str) -> Result<&'a str, YqlError> {
    field(row, key)?
        .as_str()
        .ok_or_else(|| YqlError::InvalidRow(format!("{key} is not a string")))
}

fn decimal(row: &Row, key: &str) -> Result<Decimal, YqlError> {
    let raw = match field(row, key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(YqlError::InvalidRow(format!("{key} has unexpected value {other}"))),
    };
    Decimal::from_str(raw.trim())
        .map_err(|e| YqlError::InvalidRow(format!("{key} {raw:?}: {e}")))
}

fn volume(row: &Row) -> Result<u64, YqlError> {
    match field(row, "Volume")? {
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|e| YqlError::InvalidRow(format!("Volume {s:?}: {e}"))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| YqlError::InvalidRow(format!("Volume {n} is not a non-negative integer"))),
        other => Err(YqlError::InvalidRow(format!("Volume has unexpected value {other}"))),
    }
}
