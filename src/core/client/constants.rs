//! Centralized constants for default endpoints and UA.

/// Default UA: crate name and version.
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Public YQL endpoint (the statement goes into the `q` parameter).
pub(crate) const DEFAULT_BASE_URL: &str = "http://query.yahooapis.com/v1/public/yql";

/// Table store that exposes the community `yahoo.finance.*` tables.
pub const DEFAULT_ENV: &str = "store://datatables.org/alltableswithkeys";
