use chrono::NaiveDate;

use crate::core::{FinanceClient, YqlError};
use crate::history::HistoryBar;
use crate::normalize::{self, ResultSet, Row};
use crate::query::{DEFAULT_HISTORY_END_DAYS_AGO, DEFAULT_HISTORY_START_DAYS_AGO, QuerySpec};

#[derive(Debug, Clone, Copy)]
enum Window {
    DaysAgo { start: u32, end: u32 },
    Between { start: NaiveDate, end: NaiveDate },
}

/// A builder for a daily history request for a single symbol.
///
/// Defaults to the last 30 days up to today.
#[derive(Clone)]
pub struct HistoryBuilder<'a> {
    client: &'a FinanceClient,
    symbol: String,
    window: Window,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a new `HistoryBuilder` for `symbol`.
    pub fn new(client: &'a FinanceClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            window: Window::DaysAgo {
                start: DEFAULT_HISTORY_START_DAYS_AGO,
                end: DEFAULT_HISTORY_END_DAYS_AGO,
            },
        }
    }

    /// Sets the range as day offsets relative to the client's clock.
    ///
    /// `start` should be the larger offset; an inverted range is sent as is.
    /// Overrides any previous `between()`.
    pub fn days_ago(mut self, start: u32, end: u32) -> Self {
        self.window = Window::DaysAgo { start, end };
        self
    }

    /// Sets an absolute, inclusive date range. Overrides any previous `days_ago()`.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Window::Between { start, end };
        self
    }

    /// The query this builder would send.
    ///
    /// # Errors
    ///
    /// Returns [`YqlError::InvalidSymbol`] for a symbol that cannot be embedded
    /// in the statement.
    pub fn query(&self) -> Result<QuerySpec, YqlError> {
        match self.window {
            Window::DaysAgo { start, end } => {
                QuerySpec::history(self.symbol.clone(), start, end, self.client.today())
            }
            Window::Between { start, end } => {
                QuerySpec::history_between(self.symbol.clone(), start, end)
            }
        }
    }

    /// Executes the request and returns the normalized rows.
    pub async fn fetch(self) -> Result<Vec<Row>, YqlError> {
        Ok(self.fetch_full().await?.rows)
    }

    /// Executes the request and returns rows plus envelope metadata.
    pub async fn fetch_full(self) -> Result<ResultSet, YqlError> {
        let body = self.client.send(&self.query()?).await?;
        normalize::parse_history(&body)
    }

    /// Executes the request and converts every row into a [`HistoryBar`].
    ///
    /// # Errors
    ///
    /// Besides transport and parse failures, returns [`YqlError::InvalidRow`]
    /// for the first row that cannot be converted.
    pub async fn fetch_bars(self) -> Result<Vec<HistoryBar>, YqlError> {
        let rows = self.fetch().await?;
        rows.iter().map(HistoryBar::try_from).collect()
    }
}
