// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events dispatched by the host test runner.
//!
//! Events are produced by the runner's dispatch mechanism and consumed by a
//! [`JunitReporter`](crate::JunitReporter). Events from different browsers may
//! interleave arbitrarily, but are delivered one at a time.

/// A browser participating in a test run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Browser {
    /// The launcher-assigned identity of this browser.
    pub id: String,

    /// The display name, e.g. "Firefox 128.0 (Linux)".
    pub name: String,
}

impl Browser {
    /// Creates a new `Browser`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The completion record for a single test case, as reported by a browser.
#[derive(Clone, Debug)]
pub struct TestResult {
    /// The suite path leading to this test, outermost segment first.
    ///
    /// Must be non-empty; an empty path is a contract violation on the part of
    /// the dispatcher.
    pub suite: Vec<String>,

    /// The test description. Must be non-empty.
    pub description: String,

    /// True if the test passed.
    pub success: bool,

    /// True if the test was skipped. Takes precedence over `success`.
    pub skipped: bool,

    /// Wall-clock execution time in milliseconds, if reported.
    pub time: Option<f64>,

    /// Log lines captured while the test ran. Only retained for failures.
    pub log: Vec<String>,
}

/// A test run event.
#[derive(Clone, Debug)]
pub enum TestEvent {
    /// The test run started. Discards any state left over from a prior run.
    RunStarted {
        /// The browsers scheduled for this run. Summaries are created lazily
        /// as results arrive, so this list is informational.
        browsers: Vec<Browser>,
    },

    /// A browser emitted a console log message.
    BrowserLog {
        /// The reporting browser.
        browser: Browser,

        /// The log message.
        message: String,

        /// The log level as reported by the browser, e.g. "log" or "warn".
        level: String,
    },

    /// A browser reported a runtime error outside of any test.
    BrowserError {
        /// The reporting browser.
        browser: Browser,

        /// The error text.
        error: String,
    },

    /// A test case finished in a browser.
    TestDone {
        /// The reporting browser.
        browser: Browser,

        /// The completion record.
        result: TestResult,
    },

    /// The test run completed; the report is serialized and written out.
    RunCompleted,
}
