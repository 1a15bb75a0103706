use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use yql_finance::{FieldCatalog, HistoryBar, Row, YqlError};

use crate::common::{self, RecordingFetcher};

fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[tokio::test]
async fn fetch_bars_parses_string_values() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_history_AAPL"));
    let client = common::stub_client(fetcher, FieldCatalog::default());

    let bars = client.history_builder("AAPL").fetch_bars().await.unwrap();

    assert_eq!(bars.len(), 3);
    let first = &bars[0];
    assert_eq!(first.symbol, "AAPL");
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2016, 5, 19).unwrap());
    assert_eq!(first.open, Decimal::from_str("94.639999").unwrap());
    assert_eq!(first.low, Decimal::from_str("93.57").unwrap());
    assert_eq!(first.adj_close, first.close);
    assert_eq!(first.volume, 30_442_100);
}

#[test]
fn bar_accepts_numeric_values() {
    let r = row(json!({
        "Symbol": "IBM", "Date": "2016-05-19",
        "Open": 145.75, "High": 146.35, "Low": 144.2, "Close": 144.93,
        "Volume": 2839200, "Adj_Close": 144.93
    }));
    let bar = HistoryBar::try_from(&r).unwrap();
    assert_eq!(bar.high, Decimal::from_str("146.35").unwrap());
    assert_eq!(bar.volume, 2_839_200);
}

#[test]
fn bar_rejects_missing_or_bad_fields() {
    let missing = row(json!({"Symbol": "IBM", "Date": "2016-05-19"}));
    assert!(matches!(
        HistoryBar::try_from(&missing),
        Err(YqlError::InvalidRow(_))
    ));

    let bad_date = row(json!({
        "Symbol": "IBM", "Date": "05/19/2016",
        "Open": "1", "High": "1", "Low": "1", "Close": "1", "Volume": "1", "Adj_Close": "1"
    }));
    match HistoryBar::try_from(&bad_date) {
        Err(YqlError::InvalidRow(msg)) => assert!(msg.contains("Date"), "{msg}"),
        other => panic!("expected InvalidRow, got {other:?}"),
    }

    let bad_volume = row(json!({
        "Symbol": "IBM", "Date": "2016-05-19",
        "Open": "1", "High": "1", "Low": "1", "Close": "1", "Volume": "-5", "Adj_Close": "1"
    }));
    assert!(matches!(
        HistoryBar::try_from(&bad_volume),
        Err(YqlError::InvalidRow(_))
    ));
}

#[tokio::test]
async fn fetch_bars_on_empty_results_is_empty() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_history_EMPTY"));
    let client = common::stub_client(fetcher, FieldCatalog::default());

    let bars = client.history_builder("ZZZZ").fetch_bars().await.unwrap();
    assert!(bars.is_empty());
}
