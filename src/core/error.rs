use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YqlError {
    /// The HTTP request failed before a usable response was read
    /// (connection refused, timeout, broken body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The body was not valid JSON, lacked the expected `query.results` nesting,
    /// or was an error envelope from the service.
    #[error("Data format unexpected or missing field: {0}")]
    Parse(String),

    /// The field catalog produced no fetch codes or no columns, so there is nothing to query.
    #[error("field catalog is empty: nothing to query")]
    EmptyQuery,

    /// The symbol contains a character that would break out of the YQL string
    /// literal or the embedded quotes URL (`'`, `\`, `&`, `#`).
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// A history row could not be converted into a typed bar.
    #[error("invalid history row: {0}")]
    InvalidRow(String),
}

impl YqlError {
    /// True for failures that happened on the wire (`Http` or `Status`).
    pub fn is_transport(&self) -> bool {
        matches!(self, YqlError::Http(_) | YqlError::Status { .. })
    }
}
