// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while writing a JUnit report to disk.
///
/// Write failures are reported to the log and the report is abandoned for the
/// run; they are never propagated to the event dispatcher.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// An error occurred while operating on the file system.
    #[error("error operating on path {path}")]
    Fs {
        /// The path being operated on.
        path: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// An error occurred while producing JUnit XML.
    #[error("error writing JUnit output to {path}")]
    Serialize {
        /// The output file.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: junit_report::SerializeError,
    },
}
