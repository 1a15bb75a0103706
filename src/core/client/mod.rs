//! Public client surface + builder.
//! Default endpoints and UA live in `constants`.

mod constants;

pub use constants::DEFAULT_ENV;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use url::Url;

use crate::catalog::{FieldCatalog, FieldMapping};
use crate::core::YqlError;
use crate::core::net::{Fetcher, HttpFetcher};
use crate::history::HistoryBuilder;
use crate::normalize::{self, ResultSet, Row};
use crate::query::{DEFAULT_HISTORY_END_DAYS_AGO, DEFAULT_HISTORY_START_DAYS_AGO, QuerySpec};
use constants::{DEFAULT_BASE_URL, USER_AGENT};

/// Source of "today" for day-offset history ranges.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Quote and history client for the YQL finance tables.
///
/// The client owns its [`FieldCatalog`]. Editing the catalog needs `&mut self`,
/// so it cannot change underneath a request that is in flight; clone the client
/// or take a [`FieldCatalog::snapshot`] to share the field list.
#[derive(Clone)]
pub struct FinanceClient {
    fetcher: Arc<dyn Fetcher>,
    base_url: Url,
    env: String,
    catalog: FieldCatalog,
    clock: Clock,
}

impl fmt::Debug for FinanceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinanceClient")
            .field("base_url", &self.base_url.as_str())
            .field("env", &self.env)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl FinanceClient {
    /// Create a new builder.
    pub fn builder() -> FinanceClientBuilder {
        FinanceClientBuilder::default()
    }

    /// Client with the default endpoint, HTTP stack and field catalog.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, YqlError> {
        Self::builder().build()
    }

    /* -------- catalog -------- */

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut FieldCatalog {
        &mut self.catalog
    }

    /// Appends a field to request in subsequent quote calls.
    pub fn add_field(&mut self, code: impl Into<String>, column: impl Into<String>) -> &mut Self {
        self.catalog.add(code, column);
        self
    }

    /// Replaces the whole field list.
    pub fn set_fields<I, M>(&mut self, mappings: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<FieldMapping>,
    {
        self.catalog.replace_all(mappings);
        self
    }

    /// Removes every field. Quote calls return no rows until fields are added again.
    pub fn clear_fields(&mut self) -> &mut Self {
        self.catalog.clear();
        self
    }

    /* -------- configuration getters -------- */

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /* -------- quotes -------- */

    /// Fetches a quote snapshot for `symbol` with one column per catalog field.
    ///
    /// An empty catalog yields `Ok(vec![])` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns a transport error (`Http`/`Status`) or `Parse` if the body is not
    /// a well-formed YQL answer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quotes(&self, symbol: &str) -> Result<Vec<Row>, YqlError> {
        Ok(self.quotes_full(symbol).await?.rows)
    }

    /// Like [`quotes`](Self::quotes), keeping the envelope metadata.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quotes_full(&self, symbol: &str) -> Result<ResultSet, YqlError> {
        let spec = match QuerySpec::quote(symbol, self.catalog.mappings()) {
            Ok(spec) => spec,
            Err(YqlError::EmptyQuery) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("empty field catalog, skipping request");
                return Ok(ResultSet::default());
            }
            Err(e) => return Err(e),
        };

        let body = self.send(&spec).await?;
        normalize::parse_quotes(&body)
    }

    /* -------- history -------- */

    /// Fetches daily history for `symbol` from `start_days_ago` to `end_days_ago`
    /// days before today (inclusive). Always issues a request.
    ///
    /// `start_days_ago` is expected to be the larger offset; the order is not
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns a transport error (`Http`/`Status`) or `Parse`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn history(
        &self,
        symbol: &str,
        start_days_ago: u32,
        end_days_ago: u32,
    ) -> Result<Vec<Row>, YqlError> {
        self.history_builder(symbol)
            .days_ago(start_days_ago, end_days_ago)
            .fetch()
            .await
    }

    /// History for the last 30 days up to today.
    pub async fn history_default(&self, symbol: &str) -> Result<Vec<Row>, YqlError> {
        self.history(
            symbol,
            DEFAULT_HISTORY_START_DAYS_AGO,
            DEFAULT_HISTORY_END_DAYS_AGO,
        )
        .await
    }

    /// Builder for history requests with explicit dates or typed bars.
    pub fn history_builder(&self, symbol: impl Into<String>) -> HistoryBuilder<'_> {
        HistoryBuilder::new(self, symbol)
    }

    /* -------- internal -------- */

    pub(crate) async fn send(&self, spec: &QuerySpec) -> Result<String, YqlError> {
        let url = spec.endpoint(&self.base_url, &self.env);
        self.fetcher.fetch(&url).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FinanceClientBuilder {
    base_url: Option<Url>,
    env: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    catalog: Option<FieldCatalog>,
    fetcher: Option<Arc<dyn Fetcher>>,
    clock: Option<Clock>,
}

impl FinanceClientBuilder {
    /// Override the YQL endpoint (e.g., a mock server in tests).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the table store sent with history queries.
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Start from this catalog instead of the default field set.
    pub fn catalog(mut self, catalog: FieldCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a custom [`Fetcher`]. `user_agent` and the timeouts are ignored when set.
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Replace the local-time clock used to resolve day offsets.
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Result<FinanceClient, YqlError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(f) => f,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                Arc::new(HttpFetcher::new(httpb.build()?))
            }
        };

        let clock: Clock = match self.clock {
            Some(c) => c,
            None => Arc::new(|| Local::now().date_naive()),
        };

        Ok(FinanceClient {
            fetcher,
            base_url,
            env: self.env.unwrap_or_else(|| DEFAULT_ENV.to_string()),
            catalog: self.catalog.unwrap_or_default(),
            clock,
        })
    }
}
