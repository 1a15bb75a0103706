use httpmock::Method::GET;
use crate::common::{self, mock_quotes, setup_server};
use yql_finance::FieldCatalog;

#[tokio::test]
async fn offline_quotes_single_row_with_default_catalog() {
    let server = setup_server();
    let mock = mock_quotes(&server, "yql_quotes_AAPL");

    let client = common::client_for(&server, FieldCatalog::default());
    let rows = client.quotes("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["symbol"], "AAPL");
    assert_eq!(row["price"], "95.22");
    assert_eq!(row["volume"], "7516133");
}

#[tokio::test]
async fn offline_quotes_multiple_rows_keep_order() {
    let server = setup_server();
    let mock = mock_quotes(&server, "yql_quotes_MULTI");

    let mut catalog = FieldCatalog::new();
    catalog.add("s", "symbol").add("l1", "price");
    let client = common::client_for(&server, catalog);

    let rows = client.quotes("AAPL,MSFT").await.unwrap();

    mock.assert();
    let syms: Vec<_> = rows.iter().map(|r| r["symbol"].as_str().unwrap()).collect();
    assert_eq!(syms, ["AAPL", "MSFT"]);
}

#[tokio::test]
async fn offline_quotes_null_row_is_empty() {
    let server = setup_server();
    let mock = mock_quotes(&server, "yql_quotes_NOROW");

    let client = common::client_for(&server, FieldCatalog::default());
    let rows = client.quotes("NOPE").await.unwrap();

    mock.assert();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn quotes_full_exposes_meta() {
    let server = setup_server();
    let _mock = mock_quotes(&server, "yql_quotes_AAPL");

    let client = common::client_for(&server, FieldCatalog::default());
    let set = client.quotes_full("AAPL").await.unwrap();

    assert_eq!(set.meta.count, Some(1));
    assert_eq!(set.rows.len(), 1);
}

#[tokio::test]
async fn quote_request_sends_catalog_as_statement() {
    let fetcher = common::RecordingFetcher::answering(common::fixture("yql_quotes_AAPL"));
    let catalog: FieldCatalog = [("s", "symbol"), ("l1", "price")].into_iter().collect();
    let client = common::stub_client(fetcher.clone(), catalog);

    client.quotes("AAPL").await.unwrap();

    let urls = fetcher.urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].path(), "/v1/public/yql");
    let statement = common::statement_of(&urls[0]);
    assert!(statement.contains("s=AAPL&f=sl1"), "{statement}");
    assert!(statement.contains("columns='symbol,price'"), "{statement}");
    assert!(urls[0].query_pairs().any(|(k, v)| k == "format" && v == "json"));
}

#[tokio::test]
async fn stubbed_single_row_matches_expected_shape() {
    let body = r#"{"query":{"results":{"row":{"symbol":"AAPL","price":"150.00"}}}}"#;
    let fetcher = common::RecordingFetcher::answering(body);
    let catalog: FieldCatalog = [("s", "symbol"), ("l1", "price")].into_iter().collect();
    let client = common::stub_client(fetcher, catalog);

    let rows = client.quotes("AAPL").await.unwrap();
    assert_eq!(
        serde_json::Value::from(rows[0].clone()),
        serde_json::json!({"symbol": "AAPL", "price": "150.00"})
    );
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn default_user_agent_names_the_crate() {
    let server = common::setup_server();
    let ua = concat!("yql-finance/", env!("CARGO_PKG_VERSION"));
    let mock = server.mock(|when, then| {
        when.method(GET).path(common::YQL_PATH).header("user-agent", ua);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("yql_quotes_AAPL"));
    });

    let client = common::client_for(&server, FieldCatalog::default());
    client.quotes("AAPL").await.unwrap();

    mock.assert();
}
