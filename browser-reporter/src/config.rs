// Copyright (c) The browser-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter configuration.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

static DEFAULT_OUTPUT_FILE: &str = "junit-results.xml";
static DEFAULT_CLASSNAME_FORMAT: &str = "{browser}.{suite}";

/// Configuration for a [`JunitReporter`](crate::JunitReporter).
///
/// Deserialized from the host runner's configuration; all fields are
/// optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct JunitConfig {
    output_file: Utf8PathBuf,
    output_dir: Option<Utf8PathBuf>,
    classname_format: String,
}

impl Default for JunitConfig {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.into(),
            output_dir: None,
            classname_format: DEFAULT_CLASSNAME_FORMAT.to_owned(),
        }
    }
}

impl JunitConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output file name.
    pub fn set_output_file(&mut self, output_file: impl Into<Utf8PathBuf>) -> &mut Self {
        self.output_file = output_file.into();
        self
    }

    /// Sets the output directory.
    ///
    /// If set, the directory is created recursively before the report is
    /// written. If unset, the report is written relative to the current
    /// working directory.
    pub fn set_output_dir(&mut self, output_dir: impl Into<Utf8PathBuf>) -> &mut Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Sets the classname template.
    ///
    /// Recognized placeholders are `{browser}` (the browser display name,
    /// with whitespace replaced by underscores) and `{suite}` (the dotted
    /// suite path).
    pub fn set_classname_format(&mut self, classname_format: impl Into<String>) -> &mut Self {
        self.classname_format = classname_format.into();
        self
    }

    /// Returns the configured output directory, if any.
    pub fn output_dir(&self) -> Option<&Utf8Path> {
        self.output_dir.as_deref()
    }

    /// Returns the full path the report will be written to.
    pub fn output_path(&self) -> Utf8PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&self.output_file),
            None => self.output_file.clone(),
        }
    }

    /// Returns the classname template.
    pub fn classname_format(&self) -> &str {
        &self.classname_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = JunitConfig::new();
        assert_eq!(config.output_path(), "junit-results.xml");
        assert_eq!(config.output_dir(), None);
        assert_eq!(config.classname_format(), "{browser}.{suite}");
    }

    #[test]
    fn deserialize_empty() {
        let config: JunitConfig = serde_json::from_str("{}").expect("empty config is valid");
        assert_eq!(config.output_path(), "junit-results.xml");
    }

    #[test]
    fn deserialize_kebab_case() {
        let config: JunitConfig = serde_json::from_str(
            r#"{
                "output-file": "results.xml",
                "output-dir": "reports/junit",
                "classname-format": "{suite}"
            }"#,
        )
        .expect("config is valid");
        assert_eq!(config.output_path(), "reports/junit/results.xml");
        assert_eq!(config.output_dir(), Some(Utf8Path::new("reports/junit")));
        assert_eq!(config.classname_format(), "{suite}");
    }
}
