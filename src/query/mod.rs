//! Compiles a symbol and field list into a YQL statement and endpoint URL.
//!
//! Everything here is pure string and date arithmetic. Nothing touches the
//! network, and "today" is always passed in by the caller.

mod dates;

pub use dates::{days_ago, format_date};

use chrono::NaiveDate;
use url::Url;

use crate::catalog::{self, FieldMapping};
use crate::core::YqlError;

/// Default start offset for history requests, in days before today.
pub const DEFAULT_HISTORY_START_DAYS_AGO: u32 = 30;
/// Default end offset for history requests, in days before today.
pub const DEFAULT_HISTORY_END_DAYS_AGO: u32 = 0;

/// Characters a symbol may not carry. `'` and `\` end or escape the YQL
/// string literal; `&` and `#` split the embedded quotes URL.
const FORBIDDEN_SYMBOL_CHARS: [char; 4] = ['\'', '\\', '&', '#'];

/// Source of live quotes; `s=` and `f=` are filled in per request.
const QUOTES_CSV_URL: &str = "http://download.finance.yahoo.com/d/quotes.csv";
const HISTORY_TABLE: &str = "yahoo.finance.historicaldata";

/// Which YQL table a [`QuerySpec`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Live quote snapshot through the `csv` table.
    Quote,
    /// Daily history through `yahoo.finance.historicaldata`.
    History,
}

/// One fully resolved request. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub kind: QueryKind,
    pub symbol: String,
    /// Concatenated fetch codes (quotes only; empty for history).
    pub params: String,
    /// Comma-joined column names (quotes only; empty for history).
    pub columns: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl QuerySpec {
    /// Builds a live-quote query for `symbol` from `mappings`.
    ///
    /// The symbol is placed verbatim and unquoted in the `s=` parameter of the
    /// quotes URL, e.g. `quotes.csv?s=AAPL&f=sl1&e=.csv`. Several symbols can
    /// be requested at once as `"AAPL,MSFT"`.
    ///
    /// # Errors
    ///
    /// Returns [`YqlError::EmptyQuery`] when the mappings yield no codes or no
    /// columns. No request should be issued in that case.
    /// Returns [`YqlError::InvalidSymbol`] when `symbol` contains `'`, `\`,
    /// `&` or `#`.
    pub fn quote(symbol: impl Into<String>, mappings: &[FieldMapping]) -> Result<Self, YqlError> {
        let params = catalog::codes_joined(mappings);
        let columns = catalog::columns_joined(mappings);
        if params.is_empty() || columns.is_empty() {
            return Err(YqlError::EmptyQuery);
        }
        let symbol = checked_symbol(symbol.into())?;

        Ok(Self {
            kind: QueryKind::Quote,
            symbol,
            params,
            columns,
            start_date: None,
            end_date: None,
        })
    }

    /// Builds a history query covering `today - start_days_ago` through
    /// `today - end_days_ago`.
    ///
    /// `start_days_ago` is expected to be the larger offset. The order is not
    /// checked: swapping the offsets produces an inverted range and the
    /// service's answer to that is undefined.
    ///
    /// # Errors
    ///
    /// Returns [`YqlError::InvalidSymbol`] like [`history_between`](Self::history_between).
    pub fn history(
        symbol: impl Into<String>,
        start_days_ago: u32,
        end_days_ago: u32,
        today: NaiveDate,
    ) -> Result<Self, YqlError> {
        Self::history_between(
            symbol,
            days_ago(today, start_days_ago),
            days_ago(today, end_days_ago),
        )
    }

    /// Builds a history query for an explicit date range. Order is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`YqlError::InvalidSymbol`] when `symbol` contains `'`, `\`,
    /// `&` or `#`.
    pub fn history_between(
        symbol: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, YqlError> {
        Ok(Self {
            kind: QueryKind::History,
            symbol: checked_symbol(symbol.into())?,
            params: String::new(),
            columns: String::new(),
            start_date: Some(start),
            end_date: Some(end),
        })
    }

    /// Renders the YQL statement.
    pub fn statement(&self) -> String {
        match self.kind {
            QueryKind::Quote => format!(
                "select * from csv where url='{QUOTES_CSV_URL}?s={}&f={}&e=.csv' and columns='{}'",
                self.symbol, self.params, self.columns
            ),
            QueryKind::History => format!(
                "select * from {HISTORY_TABLE} where symbol = '{}' and startDate = '{}' and endDate = '{}'",
                self.symbol,
                self.start_date.map(format_date).unwrap_or_default(),
                self.end_date.map(format_date).unwrap_or_default(),
            ),
        }
    }

    /// Full endpoint URL: `base` with the form-encoded statement and output directives.
    ///
    /// `env` names the table store and is only sent for history queries.
    pub fn endpoint(&self, base: &Url, env: &str) -> Url {
        let mut url = base.clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("q", &self.statement());
            match self.kind {
                QueryKind::Quote => {
                    qp.append_pair("format", "json");
                }
                QueryKind::History => {
                    qp.append_pair("diagnostics", "true");
                    qp.append_pair("env", env);
                    qp.append_pair("format", "json");
                    qp.append_pair("callback", "");
                }
            }
        }
        url
    }
}

fn checked_symbol(symbol: String) -> Result<String, YqlError> {
    if symbol.contains(FORBIDDEN_SYMBOL_CHARS) {
        return Err(YqlError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}
