//! Daily price history from `yahoo.finance.historicaldata`.

mod builder;
mod model;

pub use builder::HistoryBuilder;
pub use model::HistoryBar;
