// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `Report`.

use crate::{Report, SerializeError, TestCase, TestCaseStatus, TestSuite};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io;

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static FAILURE_TAG: &str = "failure";
static SKIPPED_TAG: &str = "skipped";

pub(crate) fn serialize_report(
    report: &Report,
    writer: impl io::Write,
) -> Result<(), SerializeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    // Use the destructuring syntax to ensure that all fields are handled.
    let Report { testsuites } = report;

    let testsuites_tag = BytesStart::new(TESTSUITES_TAG);
    writer.write_event(Event::Start(testsuites_tag))?;

    for testsuite in testsuites {
        serialize_testsuite(testsuite, &mut writer)?;
    }

    serialize_end_tag(TESTSUITES_TAG, &mut writer)?;

    // Add a trailing newline.
    writer.write_indent()?;
    Ok(())
}

fn serialize_testsuite(
    testsuite: &TestSuite,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let TestSuite {
        name,
        tests,
        failures,
        skipped,
        timestamp,
        time,
        testcases,
    } = testsuite;

    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("name", name.as_str()),
        ("tests", tests.to_string().as_str()),
        ("failures", failures.to_string().as_str()),
        ("skipped", skipped.to_string().as_str()),
    ]);
    if let Some(timestamp) = timestamp {
        testsuite_tag.push_attribute(("timestamp", format!("{}", timestamp.format("%+")).as_str()));
    }
    if let Some(time) = time {
        testsuite_tag.push_attribute(("time", serialize_time(*time).as_str()));
    }
    writer.write_event(Event::Start(testsuite_tag))?;

    for testcase in testcases {
        serialize_testcase(testcase, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)?;
    Ok(())
}

fn serialize_testcase(
    testcase: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let TestCase {
        name,
        classname,
        time,
        status,
    } = testcase;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    if let Some(classname) = classname {
        testcase_tag.push_attribute(("classname", classname.as_str()));
    }
    testcase_tag.push_attribute(("name", name.as_str()));
    if let Some(time) = time {
        testcase_tag.push_attribute(("time", serialize_time(*time).as_str()));
    }

    match status {
        TestCaseStatus::Success => {
            // No children; serialize the whole test case as an empty element.
            writer.write_event(Event::Empty(testcase_tag))?;
        }
        TestCaseStatus::Failure { description } => {
            writer.write_event(Event::Start(testcase_tag))?;
            match description {
                Some(description) => {
                    writer.write_event(Event::Start(BytesStart::new(FAILURE_TAG)))?;
                    writer.write_event(Event::Text(BytesText::new(description.as_str())))?;
                    serialize_end_tag(FAILURE_TAG, writer)?;
                }
                None => {
                    writer.write_event(Event::Empty(BytesStart::new(FAILURE_TAG)))?;
                }
            }
            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
        TestCaseStatus::Skipped => {
            writer.write_event(Event::Start(testcase_tag))?;
            writer.write_event(Event::Empty(BytesStart::new(SKIPPED_TAG)))?;
            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
    }

    Ok(())
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}

// Serialize time as seconds, using the shortest representation that round
// trips (so 0.12 stays "0.12", not "0.120").
fn serialize_time(time: f64) -> String {
    format!("{time}")
}
