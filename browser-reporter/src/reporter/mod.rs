// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregates test execution events into a JUnit report.
//!
//! The main structure in this module is [`JunitReporter`].

mod aggregator;
mod junit;

use crate::{config::JunitConfig, errors::WriteReportError, events::TestEvent};
use aggregator::RunAggregator;
use junit_report::Report;
use std::fs::File;
use tracing::{error, info};

/// Consumes [`TestEvent`]s from the host runner's dispatcher and writes a
/// JUnit XML report when the run completes.
///
/// Failures while writing the report are logged and the report is abandoned
/// for that run; they never propagate back into the dispatcher.
#[derive(Clone, Debug)]
pub struct JunitReporter {
    config: JunitConfig,
    aggregator: RunAggregator,
}

impl JunitReporter {
    /// Creates a new reporter with the given configuration.
    pub fn new(config: JunitConfig) -> Self {
        Self {
            config,
            aggregator: RunAggregator::default(),
        }
    }

    /// Handles one test run event.
    pub fn write_event(&mut self, event: TestEvent) {
        match event {
            TestEvent::RunStarted { browsers: _ } => {
                // Summaries are created lazily as results arrive, so the
                // browser list itself is not recorded.
                self.aggregator.reset_run();
            }
            TestEvent::BrowserLog {
                browser,
                message,
                level,
            } => {
                self.aggregator.record_browser_log(&browser, message, &level);
            }
            TestEvent::BrowserError { browser, error } => {
                self.aggregator.record_browser_error(&browser, &error);
            }
            TestEvent::TestDone { browser, result } => {
                self.aggregator.record_case_result(&browser, &result);
            }
            TestEvent::RunCompleted => {
                let report = junit::build_report(
                    &self.aggregator,
                    &self.config,
                    self.aggregator.timestamp(),
                    self.aggregator.elapsed_seconds(),
                );
                if let Err(error) = self.write_report(&report) {
                    error!(?error, "abandoning JUnit report");
                }
            }
        }
    }

    fn write_report(&self, report: &Report) -> Result<(), WriteReportError> {
        if let Some(dir) = self.config.output_dir() {
            std::fs::create_dir_all(dir).map_err(|error| WriteReportError::Fs {
                path: dir.to_owned(),
                error,
            })?;
        }

        let path = self.config.output_path();
        let file = File::create(&path).map_err(|error| WriteReportError::Fs {
            path: path.clone(),
            error,
        })?;
        report
            .serialize(file)
            .map_err(|error| WriteReportError::Serialize {
                path: path.clone(),
                error,
            })?;

        info!("JUnit results written to {path}");
        Ok(())
    }
}
