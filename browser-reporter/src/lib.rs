// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Aggregate test results streamed from browsers and write them out as JUnit
//! XML at the end of a run.
//!
//! The host test runner dispatches [`TestEvent`](events::TestEvent) values to
//! a [`JunitReporter`], which accumulates per-browser summary counters and a
//! hierarchical suite tree. When the run completes, the tree is serialized
//! into a [`junit_report::Report`] and written to the configured location.

pub mod config;
pub mod errors;
pub mod events;
mod reporter;

pub use reporter::JunitReporter;
