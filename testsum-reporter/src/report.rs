// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembly of the named field-set consumed by the template collaborator.

use crate::{
    config::ReportConfig,
    coverage::TagCoverage,
    custom_fields::CustomReportFields,
    errors::SerializeError,
    features::{FailuresByFeature, TestResultsByFeature},
    scoreboard::{FrequentFailures, UnstableFeatures},
    summary::TestResultSummary,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use testsum_metadata::TestOutcomes;
use tracing::{debug, info};

/// Report metadata shown in the summary header.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInfo {
    /// The report title.
    pub title: String,

    /// An external link back to the full report.
    pub link: String,

    /// The heading for the tag-coverage section.
    pub tag_category_title: String,

    /// The project version string.
    pub version: String,

    /// The report date: the batch's overall start time, or the assembly
    /// time when no outcome recorded one.
    pub date: DateTime<FixedOffset>,
}

/// The complete named field-set for one summary report.
///
/// Serializes with the stable camelCase field names the template contract
/// uses (`testOutcomes`, `results`, `failuresByFeature`, …).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFields {
    /// The full outcome batch the report was built from.
    pub test_outcomes: TestOutcomes,

    /// Whether the rendered report lists every test rather than just
    /// failures.
    pub show_full_test_results: bool,

    /// Report metadata.
    pub report: ReportInfo,

    /// The overall result tally.
    pub results: TestResultSummary,

    /// Failing outcomes grouped by feature.
    pub failures_by_feature: FailuresByFeature,

    /// All outcomes grouped by feature.
    pub results_by_feature: TestResultsByFeature,

    /// The frequent-failure scoreboard, truncated to the configured size.
    pub frequent_failures: FrequentFailures,

    /// The instability scoreboard, truncated to the configured size.
    pub unstable_features: UnstableFeatures,

    /// Tag coverage for the requested categories.
    pub coverage: TagCoverage,

    /// User-defined field names, in definition order.
    pub custom_fields: Vec<String>,

    /// User-defined field values, index-aligned with `custom_fields`.
    pub custom_field_values: Vec<String>,
}

impl ReportFields {
    /// Serializes the field-set for collaborators that consume JSON.
    pub fn to_json_string(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds [`ReportFields`] from one outcome batch and a validated
/// [`ReportConfig`].
///
/// Each component runs exactly once per build, so assembly is deterministic
/// for a fixed batch and configuration; the only nondeterministic input, the
/// fallback report date, can be pinned with
/// [`ReportBuilder::generated_at`].
#[derive(Clone, Debug)]
pub struct ReportBuilder<'a> {
    outcomes: &'a TestOutcomes,
    config: &'a ReportConfig,
    generated_at: Option<DateTime<FixedOffset>>,
}

impl<'a> ReportBuilder<'a> {
    /// Creates a builder over one batch and its configuration.
    pub fn new(outcomes: &'a TestOutcomes, config: &'a ReportConfig) -> Self {
        Self {
            outcomes,
            config,
            generated_at: None,
        }
    }

    /// Pins the fallback report date, used when no outcome in the batch
    /// recorded a start time.
    pub fn generated_at(mut self, date: DateTime<FixedOffset>) -> Self {
        self.generated_at = Some(date);
        self
    }

    /// Assembles the field-set.
    pub fn build(self) -> ReportFields {
        let Self {
            outcomes,
            config,
            generated_at,
        } = self;

        info!(
            total = outcomes.total,
            title = %config.title,
            "assembling summary report"
        );

        let date = outcomes
            .start_time
            .or(generated_at)
            .unwrap_or_else(|| Utc::now().fixed_offset());

        let results = TestResultSummary::from_outcomes(outcomes);
        let results_by_feature = TestResultsByFeature::from_outcomes(outcomes);
        let failures_by_feature = FailuresByFeature::from_outcomes(outcomes);

        let frequent_failures =
            FrequentFailures::from_outcomes(outcomes).with_max_of(config.scoreboard_size);
        let mut unstable_features = UnstableFeatures::from_outcomes(outcomes);
        if config.hide_stable_tests {
            unstable_features = unstable_features.hiding_stable();
        }
        let unstable_features = unstable_features.with_max_of(config.scoreboard_size);

        let coverage = TagCoverage::from_outcomes(outcomes).for_tag_types(&config.tag_types);
        let custom = CustomReportFields::from_config(config);

        debug!(
            features = results_by_feature.len(),
            failing_features = failures_by_feature.len(),
            frequent_failures = frequent_failures.len(),
            unstable = unstable_features.len(),
            "summary report assembled"
        );

        ReportFields {
            test_outcomes: outcomes.clone(),
            show_full_test_results: config.show_full_test_results,
            report: ReportInfo {
                title: config.title.clone(),
                link: config.link.clone(),
                tag_category_title: config.tag_category_title.clone(),
                version: config.version.clone(),
                date,
            },
            results,
            failures_by_feature,
            results_by_feature,
            frequent_failures,
            unstable_features,
            coverage,
            custom_fields: custom.field_names().to_vec(),
            custom_field_values: custom.values().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{base_time, outcome, outcome_run_at, outcome_with_history};
    use pretty_assertions::assert_eq;
    use testsum_metadata::TestResult::{Failure, Success};

    fn config() -> ReportConfig {
        ReportConfig {
            title: "Nightly Regression".to_owned(),
            link: "https://reports.example/full".to_owned(),
            version: "2.4.0".to_owned(),
            scoreboard_size: 2,
            ..ReportConfig::default()
        }
    }

    #[test]
    fn report_date_prefers_the_batch_start_time() {
        let outcomes: TestOutcomes = [outcome_run_at("t1", "cart", Success, 0, 5)]
            .into_iter()
            .collect();

        let fields = ReportBuilder::new(&outcomes, &config())
            .generated_at(base_time() + chrono::Duration::hours(6))
            .build();

        assert_eq!(fields.report.date, base_time());
    }

    #[test]
    fn report_date_falls_back_to_the_pinned_assembly_time() {
        let outcomes: TestOutcomes = [outcome("t1", "cart", Success)].into_iter().collect();

        let fields = ReportBuilder::new(&outcomes, &config())
            .generated_at(base_time())
            .build();

        assert_eq!(fields.report.date, base_time());
    }

    #[test]
    fn scoreboards_respect_the_configured_size() {
        let outcomes: TestOutcomes = [
            outcome_with_history("t1", "cart", Failure, &[Failure, Failure]),
            outcome_with_history("t2", "cart", Failure, &[Failure]),
            outcome_with_history("t3", "cart", Failure, &[Success, Failure]),
            outcome_with_history("t4", "search", Failure, &[]),
        ]
        .into_iter()
        .collect();

        let fields = ReportBuilder::new(&outcomes, &config()).build();

        assert_eq!(fields.frequent_failures.len(), 2);
        assert_eq!(fields.unstable_features.len(), 2);
    }

    #[test]
    fn hide_stable_tests_drops_zero_scores_before_truncation() {
        let outcomes: TestOutcomes = [
            outcome_with_history("t1", "cart", Failure, &[Success]),
            outcome("t2", "cart", Success),
            outcome("t3", "cart", Success),
        ]
        .into_iter()
        .collect();

        let hidden = ReportBuilder::new(
            &outcomes,
            &ReportConfig {
                hide_stable_tests: true,
                ..config()
            },
        )
        .build();
        assert_eq!(hidden.unstable_features.len(), 1);

        let shown = ReportBuilder::new(&outcomes, &config()).build();
        assert_eq!(shown.unstable_features.len(), 2);
    }

    #[test]
    fn empty_batch_assembles_without_error() {
        let outcomes = TestOutcomes::new();
        let fields = ReportBuilder::new(&outcomes, &config())
            .generated_at(base_time())
            .build();

        assert_eq!(fields.results.total_count, 0);
        assert!(fields.failures_by_feature.is_empty());
        assert!(fields.results_by_feature.is_empty());
        assert!(fields.frequent_failures.is_empty());
        assert!(fields.unstable_features.is_empty());
        assert!(fields.coverage.is_empty());
        assert_eq!(fields.report.date, base_time());
    }
}
