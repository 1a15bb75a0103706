use httpmock::Method::GET;
use httpmock::MockServer;
use yql_finance::{FieldCatalog, YqlError};

use crate::common;

#[tokio::test]
async fn history_returns_status_error_on_non_2xx() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path(common::YQL_PATH);
        then.status(400).body("{\"error\":{\"description\":\"bad request\"}}");
    });

    let client = common::client_for(&server, FieldCatalog::default());
    let err = client.history("FAIL", 30, 0).await.unwrap_err();
    mock.assert();

    match err {
        YqlError::Status { status, url } => {
            assert_eq!(status, 400);
            assert!(url.contains("/v1/public/yql"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn history_truncated_body_is_a_parse_error() {
    let server = MockServer::start();

    let body = common::fixture("yql_history_AAPL");
    let truncated = body[..body.len() / 2].to_string();
    let mock = server.mock(|when, then| {
        when.method(GET).path(common::YQL_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(truncated);
    });

    let client = common::client_for(&server, FieldCatalog::default());
    let err = client.history("AAPL", 3, 0).await.unwrap_err();
    mock.assert();

    assert!(matches!(err, YqlError::Parse(_)), "got {err:?}");
}
