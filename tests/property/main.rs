#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based test suite entry point.
//!
//! ```bash
//! cargo test --test property
//! PROPTEST_CASES=512 cargo test --test property
//! ```

mod common;
mod conflict;
mod booking;
