// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests: events in, JUnit XML file out.

use browser_reporter::{
    JunitReporter,
    config::JunitConfig,
    events::{Browser, TestEvent, TestResult},
};
use camino_tempfile::{Utf8TempDir, tempdir};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn agent_a() -> Browser {
    Browser::new("agent-a", "AgentA")
}

fn passing(suite: &[&str], description: &str, millis: f64) -> TestResult {
    TestResult {
        suite: suite.iter().map(|s| s.to_string()).collect(),
        description: description.to_owned(),
        success: true,
        skipped: false,
        time: Some(millis),
        log: vec![],
    }
}

fn failing(suite: &[&str], description: &str, log: &[&str]) -> TestResult {
    TestResult {
        suite: suite.iter().map(|s| s.to_string()).collect(),
        description: description.to_owned(),
        success: false,
        skipped: false,
        time: Some(40.0),
        log: log.iter().map(|s| s.to_string()).collect(),
    }
}

fn run(dir: &Utf8TempDir, results: Vec<(Browser, TestResult)>) -> String {
    let mut config = JunitConfig::new();
    config.set_output_dir(dir.path().join("reports/junit"));
    let mut reporter = JunitReporter::new(config);

    reporter.write_event(TestEvent::RunStarted {
        browsers: vec![agent_a()],
    });
    for (browser, result) in results {
        reporter.write_event(TestEvent::TestDone { browser, result });
    }
    reporter.write_event(TestEvent::RunCompleted);

    let path = dir.path().join("reports/junit/junit-results.xml");
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("report at {path}: {err}"))
}

#[test]
fn single_success_scenario() {
    let dir = tempdir().expect("created temp dir");
    let out = run(
        &dir,
        vec![(agent_a(), passing(&["Suite1"], "test1", 120.0))],
    );

    assert!(
        out.contains(r#"<testsuite name="Suite1" tests="1" failures="0" skipped="0" timestamp="#),
        "{out}"
    );
    assert!(
        out.contains(r#"<testcase classname="AgentA.Suite1" name="test1" time="0.12"/>"#),
        "{out}"
    );
    assert!(!out.contains("<failure"), "{out}");
    assert!(!out.contains("<skipped"), "{out}");
}

#[test]
fn failure_is_added_to_existing_suite() {
    let dir = tempdir().expect("created temp dir");
    let out = run(
        &dir,
        vec![
            (agent_a(), passing(&["Suite1"], "test1", 120.0)),
            (agent_a(), failing(&["Suite1"], "test2", &["boom"])),
        ],
    );

    assert!(
        out.contains(r#"<testsuite name="Suite1" tests="2" failures="1" skipped="0""#),
        "{out}"
    );
    assert!(out.contains("<failure>boom</failure>"), "{out}");
}

#[test]
fn nested_path_reports_only_the_leaf_suite() {
    let dir = tempdir().expect("created temp dir");
    let out = run(
        &dir,
        vec![(agent_a(), passing(&["Parent", "Child"], "test1", 80.0))],
    );

    assert!(!out.contains(r#"<testsuite name="Parent""#), "{out}");
    assert!(out.contains(r#"<testsuite name="Child""#), "{out}");
    assert!(
        out.contains(r#"classname="AgentA.Parent.Child""#),
        "{out}"
    );
}

#[test]
fn empty_run_still_writes_a_document() {
    let dir = tempdir().expect("created temp dir");
    let out = run(&dir, vec![]);

    let expected = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <testsuites>
        </testsuites>
    "#};
    assert_eq!(out, expected);
}

#[test]
fn a_new_run_discards_the_previous_one() {
    let dir = tempdir().expect("created temp dir");
    let mut config = JunitConfig::new();
    config.set_output_dir(dir.path().to_path_buf());
    let mut reporter = JunitReporter::new(config);

    reporter.write_event(TestEvent::RunStarted { browsers: vec![] });
    reporter.write_event(TestEvent::TestDone {
        browser: agent_a(),
        result: failing(&["Old"], "stale", &["boom"]),
    });

    reporter.write_event(TestEvent::RunStarted { browsers: vec![] });
    reporter.write_event(TestEvent::TestDone {
        browser: agent_a(),
        result: passing(&["New"], "fresh", 10.0),
    });
    reporter.write_event(TestEvent::RunCompleted);

    let out = std::fs::read_to_string(dir.path().join("junit-results.xml"))
        .expect("report was written");
    assert!(!out.contains("Old"), "{out}");
    assert!(out.contains(r#"<testsuite name="New""#), "{out}");
}

#[test]
fn browser_log_and_error_events_do_not_disturb_the_report() {
    let dir = tempdir().expect("created temp dir");
    let mut config = JunitConfig::new();
    config.set_output_dir(dir.path().to_path_buf());
    let mut reporter = JunitReporter::new(config);

    reporter.write_event(TestEvent::RunStarted { browsers: vec![] });
    reporter.write_event(TestEvent::BrowserLog {
        browser: agent_a(),
        message: "console noise".to_owned(),
        level: "log".to_owned(),
    });
    reporter.write_event(TestEvent::BrowserError {
        browser: agent_a(),
        error: "disconnected".to_owned(),
    });
    reporter.write_event(TestEvent::TestDone {
        browser: agent_a(),
        result: passing(&["Suite1"], "test1", 120.0),
    });
    reporter.write_event(TestEvent::RunCompleted);

    let out = std::fs::read_to_string(dir.path().join("junit-results.xml"))
        .expect("report was written");
    assert!(!out.contains("console noise"), "{out}");
    assert!(!out.contains("disconnected"), "{out}");
    assert!(out.contains(r#"<testsuite name="Suite1""#), "{out}");
}

#[test]
fn unwritable_output_dir_is_logged_not_fatal() {
    let dir = tempdir().expect("created temp dir");
    // Occupy the output directory path with a regular file so that
    // create_dir_all fails.
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"in the way").expect("wrote blocking file");

    let mut config = JunitConfig::new();
    config.set_output_dir(blocked.clone());
    let mut reporter = JunitReporter::new(config);

    reporter.write_event(TestEvent::RunStarted { browsers: vec![] });
    reporter.write_event(TestEvent::TestDone {
        browser: agent_a(),
        result: passing(&["Suite1"], "test1", 120.0),
    });
    // Must not panic; the report is abandoned for this run.
    reporter.write_event(TestEvent::RunCompleted);

    assert!(
        !blocked.join("junit-results.xml").exists(),
        "no report file should exist"
    );
}

#[test]
fn relative_output_file_without_dir() {
    // No output-dir configured: the file is written relative to the current
    // working directory. Use an absolute file path to keep the test hermetic.
    let dir = tempdir().expect("created temp dir");
    let file = dir.path().join("custom-name.xml");

    let mut config = JunitConfig::new();
    config.set_output_file(file.clone());
    let mut reporter = JunitReporter::new(config);

    reporter.write_event(TestEvent::RunStarted { browsers: vec![] });
    reporter.write_event(TestEvent::RunCompleted);

    assert!(file.exists(), "report written to {file}");
}
