// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for one summary report build.

use crate::errors::ReportConfigError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Configuration for one summary report build.
///
/// Resolving values from environment variables or configuration files is the
/// caller's concern; the engine takes the resolved form and assumes it has
/// been validated with [`ReportConfig::validate`]. All fields have defaults,
/// so a caller with no configuration at all can use
/// [`ReportConfig::default`].
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReportConfig {
    /// The report title shown in the summary header.
    pub title: String,

    /// An external link back to the full report, if any.
    pub link: String,

    /// The maximum number of rows in each ranked scoreboard.
    pub scoreboard_size: usize,

    /// The tag categories to include in coverage, in display order.
    pub tag_types: Vec<String>,

    /// The heading for the tag-coverage section.
    pub tag_category_title: String,

    /// Whether the rendered report lists every test rather than just
    /// failures.
    pub show_full_test_results: bool,

    /// Whether zero-score rows are dropped from the instability scoreboard.
    pub hide_stable_tests: bool,

    /// The project version string shown in report metadata.
    pub version: String,

    /// User-defined report fields, in definition order.
    pub custom_fields: IndexMap<String, String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Test Results".to_owned(),
            link: String::new(),
            scoreboard_size: 5,
            tag_types: vec![],
            tag_category_title: "Tag Coverage".to_owned(),
            show_full_test_results: false,
            hide_stable_tests: false,
            version: String::new(),
            custom_fields: IndexMap::new(),
        }
    }
}

impl ReportConfig {
    /// Checks the invariants the engine relies on.
    ///
    /// A non-numeric or negative scoreboard size already fails
    /// deserialization (`scoreboard_size` is a `usize`), so this only has to
    /// reject values deserialization cannot: blank custom-field names and
    /// blank tag categories.
    pub fn validate(&self) -> Result<(), ReportConfigError> {
        for name in self.custom_fields.keys() {
            if name.trim().is_empty() {
                return Err(ReportConfigError::BlankCustomFieldName);
            }
        }
        for tag_type in &self.tag_types {
            if tag_type.trim().is_empty() {
                return Err(ReportConfigError::BlankTagType);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ReportConfig::default();
        assert_eq!(config.title, "Test Results");
        assert_eq!(config.scoreboard_size, 5);
        assert!(!config.show_full_test_results);
        assert!(!config.hide_stable_tests);
        assert!(config.tag_types.is_empty());
        assert!(config.custom_fields.is_empty());
        config.validate().expect("defaults validate");
    }

    #[test]
    fn deserializes_kebab_case_with_defaults() {
        let config: ReportConfig = serde_json::from_str(
            r#"{
                "title": "Nightly Regression",
                "scoreboard-size": 10,
                "tag-types": ["priority"],
                "show-full-test-results": true,
                "custom-fields": { "Build": "1.2.3" }
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.title, "Nightly Regression");
        assert_eq!(config.scoreboard_size, 10);
        assert_eq!(config.tag_types, vec!["priority"]);
        assert!(config.show_full_test_results);
        // Unspecified keys fall back to defaults.
        assert_eq!(config.tag_category_title, "Tag Coverage");
    }

    #[test]
    fn negative_scoreboard_size_fails_deserialization() {
        let parsed = serde_json::from_str::<ReportConfig>(r#"{ "scoreboard-size": -1 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_custom_field_names_are_rejected() {
        let mut config = ReportConfig::default();
        config.custom_fields.insert("  ".to_owned(), "x".to_owned());
        assert_eq!(
            config.validate(),
            Err(ReportConfigError::BlankCustomFieldName)
        );
    }

    #[test]
    fn blank_tag_types_are_rejected() {
        let config = ReportConfig {
            tag_types: vec!["priority".to_owned(), String::new()],
            ..ReportConfig::default()
        };
        assert_eq!(config.validate(), Err(ReportConfigError::BlankTagType));
    }
}
