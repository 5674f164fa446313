// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Code to build a JUnit report from the aggregated suite tree.

use crate::{
    config::JunitConfig,
    reporter::aggregator::{CaseResult, RunAggregator, SuiteNode},
};
use chrono::{DateTime, FixedOffset};
use junit_report::{Report, TestCase, TestCaseStatus, TestSuite};

static FAILURE_PLACEHOLDER: &str = "Test failed";

/// Builds the final report: one depth-first walk of the shared suite tree per
/// browser, in browser registration order.
///
/// The timestamp and elapsed seconds are measured once per run, so every
/// suite element carries the same values.
pub(super) fn build_report(
    aggregator: &RunAggregator,
    config: &JunitConfig,
    timestamp: Option<DateTime<FixedOffset>>,
    elapsed_seconds: f64,
) -> Report {
    let mut report = Report::new();
    for summary in aggregator.browsers().values() {
        let walk = SuiteWalk {
            browser_name: normalize_browser_name(&summary.name),
            classname_format: config.classname_format(),
            timestamp,
            time: elapsed_seconds,
        };
        let mut path = Vec::new();
        walk.visit(aggregator.suite_tree(), &mut path, &mut report);
    }
    report
}

struct SuiteWalk<'cfg> {
    /// The browser display name with whitespace replaced by underscores.
    browser_name: String,
    classname_format: &'cfg str,
    timestamp: Option<DateTime<FixedOffset>>,
    time: f64,
}

impl SuiteWalk<'_> {
    fn visit(&self, node: &SuiteNode, path: &mut Vec<String>, report: &mut Report) {
        // Nodes without case results only group their descendants; they never
        // produce a suite element of their own. The root always falls into
        // this category since suite paths are non-empty.
        if let Some(name) = path.last() {
            if !node.cases.is_empty() {
                report.add_test_suite(self.build_suite(name, path, node));
            }
        }
        for (name, child) in &node.children {
            path.push(name.clone());
            self.visit(child, path, report);
            path.pop();
        }
    }

    fn build_suite(&self, name: &str, path: &[String], node: &SuiteNode) -> TestSuite {
        let classname = self.classname(path);

        let mut testsuite = TestSuite::new(name);
        if let Some(timestamp) = self.timestamp {
            testsuite.set_timestamp(timestamp);
        }
        testsuite.set_time(self.time);

        for (description, case) in &node.cases {
            let mut testcase = TestCase::new(description, case_status(case));
            testcase.set_classname(classname.clone());
            if let Some(millis) = case.time {
                testcase.set_time(millis / 1000.0);
            }
            testsuite.add_test_case(testcase);
        }
        testsuite
    }

    fn classname(&self, path: &[String]) -> String {
        self.classname_format
            .replace("{browser}", &self.browser_name)
            .replace("{suite}", &path.join("."))
    }
}

/// Classifies a merged case result into exactly one report status: a failure
/// if any browser failed it, skipped only if every outcome was a skip, and a
/// success otherwise.
fn case_status(case: &CaseResult) -> TestCaseStatus {
    if case.counts.failed > 0 {
        let mut status = TestCaseStatus::failure();
        let description = match &case.log {
            Some(lines) if !lines.is_empty() => lines.join("\n"),
            _ => FAILURE_PLACEHOLDER.to_owned(),
        };
        status.set_description(description);
        status
    } else if case.counts.total > 0 && case.counts.skipped == case.counts.total {
        TestCaseStatus::skipped()
    } else {
        TestCaseStatus::success()
    }
}

fn normalize_browser_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
