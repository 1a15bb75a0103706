//! Core components of the `yql-finance` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FinanceClient`] and its builder.
//! - The primary [`YqlError`] type.
//! - The [`Fetcher`] seam and its reqwest implementation.

/// The main client (`FinanceClient`), builder, and configuration.
pub mod client;
/// The primary error type (`YqlError`) for the crate.
pub mod error;
/// HTTP transport behind the [`Fetcher`] trait.
pub mod net;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::FinanceClient`
pub use client::{Clock, DEFAULT_ENV, FinanceClient, FinanceClientBuilder};
pub use error::YqlError;
pub use net::{FetchFuture, Fetcher, HttpFetcher};
