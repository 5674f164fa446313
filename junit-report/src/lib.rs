// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate JUnit XML reports in Rust.
//!
//! A [`Report`] is a tree of test suites and test cases, built up in memory and
//! serialized in a single pass once complete. Serialization goes through
//! `quick-xml`, so every attribute value and text node is escaped uniformly.

#![warn(missing_docs)]

mod errors;
mod report;
mod serialize;

pub use errors::*;
pub use report::*;
