//! Core types and trait definitions for the Orchard migration pipeline.
//!
//! This crate is deliberately free of CSV and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod content;
pub mod error;
pub mod identity;
pub mod namemap;
pub mod relation;
pub mod store;

pub use error::{Error, Result};
