// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run-scoped aggregation of test results.
//!
//! A [`RunAggregator`] owns one summary per browser and a single suite tree
//! shared across all browsers. Both are rebuilt incrementally as events
//! arrive, and read once at the end of the run by the serializer.

use crate::events::{Browser, TestResult};
use chrono::{DateTime, FixedOffset, Local};
use indexmap::IndexMap;
use std::time::Instant;
use tracing::{debug, error};

/// The outcome of a single test case execution in one browser.
///
/// Exactly one outcome applies per completion event: a skip takes precedence
/// over the success flag, and anything that neither skipped nor passed is a
/// failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The test passed.
    Passed,
    /// The test failed.
    Failed,
    /// The test was skipped.
    Skipped,
}

impl Outcome {
    pub(crate) fn classify(result: &TestResult) -> Self {
        if result.skipped {
            Outcome::Skipped
        } else if result.success {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

/// Pass/fail/skip counters. `total` is always the sum of the other three.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Counts {
    pub(crate) passed: usize,
    pub(crate) failed: usize,
    pub(crate) skipped: usize,
    pub(crate) total: usize,
}

impl Counts {
    /// Records one outcome, incrementing `total` and exactly one bucket.
    fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// A console log entry captured from a browser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BrowserLogEntry {
    pub(crate) level: String,
    pub(crate) message: String,
}

/// Summary counters and log output for a single browser.
///
/// Created lazily on the first event referencing the browser; cleared at the
/// next run start.
#[derive(Clone, Debug)]
pub(crate) struct BrowserSummary {
    pub(crate) name: String,
    pub(crate) counts: Counts,
    pub(crate) log: Vec<BrowserLogEntry>,
}

impl BrowserSummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            counts: Counts::default(),
            log: Vec::new(),
        }
    }
}

/// A merged result row for one test identity (suite path + description),
/// accumulated across all browsers that report it.
#[derive(Clone, Debug, Default)]
pub(crate) struct CaseResult {
    pub(crate) counts: Counts,
    /// Log lines from the most recent failure. Last writer wins.
    pub(crate) log: Option<Vec<String>>,
    /// Elapsed milliseconds from the most recent event. Last writer wins.
    pub(crate) time: Option<f64>,
}

/// A node in the suite tree, addressed by child-name lookup.
///
/// A node may have children, case results, both, or neither. Nodes without
/// case results exist purely to group their descendants and never become
/// report elements themselves.
#[derive(Clone, Debug, Default)]
pub(crate) struct SuiteNode {
    pub(crate) children: IndexMap<String, SuiteNode>,
    pub(crate) cases: IndexMap<String, CaseResult>,
}

#[derive(Clone, Debug)]
struct RunStart {
    timestamp: DateTime<FixedOffset>,
    instant: Instant,
}

/// Owns all mutable state for a test run.
///
/// All operations are invoked synchronously by the event dispatcher;
/// [`reset_run`](Self::reset_run) must be called before anything else in a
/// run, and discards any prior state.
#[derive(Clone, Debug, Default)]
pub(crate) struct RunAggregator {
    browsers: IndexMap<String, BrowserSummary>,
    root: SuiteNode,
    start: Option<RunStart>,
}

impl RunAggregator {
    /// Discards all state and starts a new run, capturing the run-start
    /// clocks used for suite timestamps and elapsed time.
    pub(crate) fn reset_run(&mut self) {
        self.browsers.clear();
        self.root = SuiteNode::default();
        self.start = Some(RunStart {
            timestamp: Local::now().fixed_offset(),
            instant: Instant::now(),
        });
    }

    /// Appends a log entry to the browser's summary, creating the summary if
    /// this is the first event for the browser. The "log" level is normalized
    /// to "info".
    pub(crate) fn record_browser_log(&mut self, browser: &Browser, message: String, level: &str) {
        let level = if level == "log" { "info" } else { level };
        let entry = BrowserLogEntry {
            level: level.to_owned(),
            message,
        };
        debug!(browser = %browser.name, level = %entry.level, "{}", entry.message);
        self.summary_mut(browser).log.push(entry);
    }

    /// Reports a browser-level runtime error to the log, scoped to the
    /// browser's name. Does not mutate aggregator state, so the error is not
    /// reflected in the generated report.
    pub(crate) fn record_browser_error(&self, browser: &Browser, error: &str) {
        error!(browser = %browser.name, "{error}");
    }

    /// Records one test completion: updates the browser's summary counters,
    /// walks (creating as needed) the suite tree along the result's path, and
    /// folds the outcome into the merged case result at the terminal node.
    pub(crate) fn record_case_result(&mut self, browser: &Browser, result: &TestResult) {
        let outcome = Outcome::classify(result);
        self.summary_mut(browser).counts.record(outcome);

        let mut node = &mut self.root;
        for segment in &result.suite {
            node = node.children.entry(segment.clone()).or_default();
        }

        let case = node.cases.entry(result.description.clone()).or_default();
        case.counts.record(outcome);
        if outcome == Outcome::Failed {
            case.log = Some(result.log.clone());
        }
        case.time = result.time;
    }

    /// Browser summaries, in registration order.
    pub(crate) fn browsers(&self) -> &IndexMap<String, BrowserSummary> {
        &self.browsers
    }

    /// The root of the shared suite tree.
    pub(crate) fn suite_tree(&self) -> &SuiteNode {
        &self.root
    }

    /// The wall-clock time at which the current run started.
    pub(crate) fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.start.as_ref().map(|start| start.timestamp)
    }

    /// Seconds elapsed since the run started, with millisecond precision.
    pub(crate) fn elapsed_seconds(&self) -> f64 {
        self.start
            .as_ref()
            .map(|start| start.instant.elapsed().as_millis() as f64 / 1000.0)
            .unwrap_or(0.0)
    }

    fn summary_mut(&mut self, browser: &Browser) -> &mut BrowserSummary {
        self.browsers
            .entry(browser.id.clone())
            .or_insert_with(|| BrowserSummary::new(&browser.name))
    }
}
