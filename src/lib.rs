//! yql-finance: stock quotes and daily history from Yahoo's YQL finance tables.
//!
//! A [`FinanceClient`] keeps an ordered [`FieldCatalog`] of `quotes.csv` fetch
//! codes and column names, compiles it into a YQL statement for each request,
//! and normalizes the JSON answer into a `Vec<Row>` whether the service sent
//! one row as a bare object or several as an array.
//!
//! ```no_run
//! # async fn run() -> Result<(), yql_finance::YqlError> {
//! let mut client = yql_finance::FinanceClient::new()?;
//! client.clear_fields().add_field("s", "symbol").add_field("l1", "price");
//!
//! for row in client.quotes("AAPL").await? {
//!     println!("{} {}", row["symbol"], row["price"]);
//! }
//!
//! let last_week = client.history("AAPL", 7, 0).await?;
//! println!("{} daily rows", last_week.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod core;
pub mod history;
pub mod normalize;
pub mod query;

pub use catalog::{FieldCatalog, FieldMapping};
pub use crate::core::{FinanceClient, FinanceClientBuilder, Fetcher, HttpFetcher, YqlError};
pub use history::{HistoryBar, HistoryBuilder};
pub use normalize::{QueryMeta, ResultSet, Row, normalize_history, normalize_quotes};
pub use query::{QueryKind, QuerySpec};
