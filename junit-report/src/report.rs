// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, serialize::serialize_report};
use chrono::{DateTime, FixedOffset};
use std::io;

/// The root element of a JUnit report.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The test suites contained in this report.
    pub testsuites: Vec<TestSuite>,
}

impl Report {
    /// Creates a new, empty `Report`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a test suite to this report.
    pub fn add_test_suite(&mut self, testsuite: TestSuite) -> &mut Self {
        self.testsuites.push(testsuite);
        self
    }

    /// Adds several test suites to this report.
    pub fn add_test_suites(&mut self, testsuites: impl IntoIterator<Item = TestSuite>) -> &mut Self {
        self.testsuites.extend(testsuites);
        self
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_report(self, writer)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Represents a single test suite: a named group of [`TestCase`] instances.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestSuite {
    /// The name of this test suite.
    pub name: String,

    /// The total number of tests in this test suite.
    pub tests: usize,

    /// The total number of tests in this suite that failed.
    pub failures: usize,

    /// The total number of tests in this suite that were skipped.
    pub skipped: usize,

    /// The time at which the test suite began execution.
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// The overall time taken by the test suite, in seconds.
    pub time: Option<f64>,

    /// The test cases that form this test suite.
    pub testcases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new `TestSuite`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: 0,
            failures: 0,
            skipped: 0,
            timestamp: None,
            time: None,
            testcases: vec![],
        }
    }

    /// Sets the start timestamp for the test suite.
    pub fn set_timestamp(&mut self, timestamp: impl Into<DateTime<FixedOffset>>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the time taken by the test suite, in seconds.
    pub fn set_time(&mut self, time: f64) -> &mut Self {
        self.time = Some(time);
        self
    }

    /// Adds a test case to this test suite and updates the counts.
    ///
    /// When generating a new report, use of this method is recommended over
    /// adding to `self.testcases` directly.
    pub fn add_test_case(&mut self, testcase: TestCase) -> &mut Self {
        self.tests += 1;
        match &testcase.status {
            TestCaseStatus::Success => {}
            TestCaseStatus::Failure { .. } => self.failures += 1,
            TestCaseStatus::Skipped => self.skipped += 1,
        }
        self.testcases.push(testcase);
        self
    }

    /// Adds several test cases to this test suite and updates the counts.
    pub fn add_test_cases(&mut self, testcases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        for testcase in testcases {
            self.add_test_case(testcase);
        }
        self
    }
}

/// Represents a single test case.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestCase {
    /// The name of the test case.
    pub name: String,

    /// The "classname" of the test case.
    ///
    /// Typically, this represents the fully qualified path to the test. In
    /// other words, `classname` + `name` together should uniquely identify and
    /// locate a test.
    pub classname: Option<String>,

    /// The time it took to execute this test case, in seconds.
    pub time: Option<f64>,

    /// The status of this test.
    pub status: TestCaseStatus,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(name: impl Into<String>, status: TestCaseStatus) -> Self {
        Self {
            name: name.into(),
            classname: None,
            time: None,
            status,
        }
    }

    /// Sets the classname of the test.
    pub fn set_classname(&mut self, classname: impl Into<String>) -> &mut Self {
        self.classname = Some(classname.into());
        self
    }

    /// Sets the time taken by the test case, in seconds.
    pub fn set_time(&mut self, time: f64) -> &mut Self {
        self.time = Some(time);
        self
    }
}

/// Represents the success or failure of a test case.
#[derive(Clone, Debug)]
pub enum TestCaseStatus {
    /// This test case passed.
    Success,

    /// This test case failed.
    Failure {
        /// The description of the failure.
        ///
        /// This is serialized as the text node of the `failure` element.
        description: Option<Output>,
    },

    /// This test case was not run.
    Skipped,
}

impl TestCaseStatus {
    /// Creates a new `TestCaseStatus` that represents a successful test.
    pub fn success() -> Self {
        TestCaseStatus::Success
    }

    /// Creates a new `TestCaseStatus` that represents a failed test.
    pub fn failure() -> Self {
        TestCaseStatus::Failure { description: None }
    }

    /// Creates a new `TestCaseStatus` that represents a skipped test.
    pub fn skipped() -> Self {
        TestCaseStatus::Skipped
    }

    /// Sets the description (text node). No-op unless this is a failure.
    pub fn set_description(&mut self, description: impl AsRef<str>) -> &mut Self {
        if let TestCaseStatus::Failure { description: d } = self {
            *d = Some(Output::new(description));
        }
        self
    }
}

/// Represents text written out as the body of an element, e.g. a failure
/// description.
///
/// XML cannot represent most control characters even in escaped form, so
/// non-printable characters are removed at construction time.
#[derive(Clone, Debug)]
pub struct Output {
    pub(crate) output: Box<str>,
}

impl Output {
    /// Creates a new output, removing any non-printable characters from it.
    pub fn new(output: impl AsRef<str>) -> Self {
        let output = output
            .as_ref()
            .replace(
                |c| matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f'),
                "",
            )
            .into_boxed_str();
        Self { output }
    }

    /// Returns the output as a string slice.
    pub fn as_str(&self) -> &str {
        &self.output
    }
}

impl AsRef<str> for Output {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
