use std::future::Future;
use std::pin::Pin;

#[cfg(feature = "test-mode")]
use std::env;

use reqwest::Client;
use url::Url;

use crate::core::YqlError;

/// Boxed future returned by [`Fetcher::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<String, YqlError>> + Send + 'a>>;

/// Performs a single GET against a fully built endpoint URL and returns the body.
///
/// This is the seam between query building and response normalization. It is
/// implemented by [`HttpFetcher`]; tests substitute their own implementation to
/// observe or script network traffic.
///
/// Implementations must not retry. A failed round trip is reported as
/// [`YqlError::Http`] and a non-2xx answer as [`YqlError::Status`].
pub trait Fetcher: Send + Sync {
    /// Issues one request for `url`.
    fn fetch<'a>(&'a self, url: &'a Url) -> FetchFuture<'a>;
}

/// [`Fetcher`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Wraps an already configured HTTP client.
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    async fn get(&self, url: &Url) -> Result<String, YqlError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "yql request");

        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), "yql response");

        if !status.is_success() {
            return Err(YqlError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = get_text(resp, url).await?;
        Ok(text)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> FetchFuture<'a> {
        Box::pin(self.get(url))
    }
}

/// Read the response body as text.
/// In `test-mode`, if `YQL_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(resp: reqwest::Response, _url: &Url) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("YQL_RECORD").ok().as_deref() == Some("1") {
            let key = fixture_key(_url);
            if let Err(e) = crate::core::fixtures::record_fixture(&key, "json", &text) {
                eprintln!("YQL_RECORD: failed to write fixture for {key}: {e}");
            }
        }
    }

    Ok(text)
}

/// Stable file stem for a request, e.g. `yql_history_AAPL`.
#[cfg(feature = "test-mode")]
fn fixture_key(url: &Url) -> String {
    let statement = url
        .query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default();

    let (kind, symbol) = match statement.split_once("symbol = '") {
        Some((_, rest)) => ("history", rest.split('\'').next()),
        None => (
            "quotes",
            statement
                .split_once("?s=")
                .and_then(|(_, rest)| rest.split('&').next()),
        ),
    };

    format!("yql_{kind}_{}", symbol.unwrap_or("UNKNOWN"))
}
