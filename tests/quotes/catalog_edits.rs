use crate::common::{self, RecordingFetcher};
use yql_finance::FieldCatalog;

#[tokio::test]
async fn empty_catalog_returns_nothing_without_a_request() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_quotes_AAPL"));
    let client = common::stub_client(fetcher.clone(), FieldCatalog::new());

    let rows = client.quotes("AAPL").await.unwrap();

    assert!(rows.is_empty());
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn cleared_catalog_short_circuits_until_fields_return() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_quotes_AAPL"));
    let mut client = common::stub_client(fetcher.clone(), FieldCatalog::default());

    client.clear_fields();
    assert!(client.quotes("AAPL").await.unwrap().is_empty());
    assert_eq!(fetcher.calls(), 0);

    client.add_field("s", "symbol");
    assert_eq!(client.quotes("AAPL").await.unwrap().len(), 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn set_fields_changes_the_next_request() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_quotes_AAPL"));
    let mut client = common::stub_client(fetcher.clone(), FieldCatalog::default());

    client.set_fields([("b", "bid"), ("a", "ask")]);
    client.quotes("MSFT").await.unwrap();
    client.catalog_mut().add("v", "volume");
    client.quotes("MSFT").await.unwrap();

    let statements: Vec<String> = fetcher.urls().iter().map(common::statement_of).collect();
    assert!(statements[0].contains("s=MSFT&f=ba&e=.csv"));
    assert!(statements[0].ends_with("columns='bid,ask'"));
    assert!(statements[1].contains("f=bav"));
    assert!(statements[1].ends_with("columns='bid,ask,volume'"));
}

#[tokio::test]
async fn cloned_clients_do_not_share_catalogs() {
    let fetcher = RecordingFetcher::answering(common::fixture("yql_quotes_AAPL"));
    let mut a = common::stub_client(fetcher.clone(), FieldCatalog::default());
    let b = a.clone();

    a.clear_fields();

    assert!(a.catalog().is_empty());
    assert_eq!(b.catalog(), &FieldCatalog::default());
    assert_eq!(b.quotes("AAPL").await.unwrap().len(), 1);
    assert_eq!(fetcher.calls(), 1);
}
