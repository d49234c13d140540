// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, FixedOffset, TimeZone};
use std::time::Duration;
use testsum_metadata::{TestOutcome, TestResult, TestTag};

/// A fixed point in time for start-time fixtures; `run_at` offsets are
/// seconds after this.
pub(crate) fn base_time() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 5, 10, 0, 0)
        .unwrap()
}

pub(crate) fn outcome(name: &str, feature: &str, result: TestResult) -> TestOutcome {
    let mut outcome = TestOutcome::new(name, feature, result);
    outcome.set_duration(Duration::from_secs(1));
    outcome
}

pub(crate) fn outcome_lasting(
    name: &str,
    feature: &str,
    result: TestResult,
    duration_secs: u64,
) -> TestOutcome {
    let mut outcome = TestOutcome::new(name, feature, result);
    outcome.set_duration(Duration::from_secs(duration_secs));
    outcome
}

/// An outcome that started `start_offset_secs` after [`base_time`] and ran
/// for `duration_secs`.
pub(crate) fn outcome_run_at(
    name: &str,
    feature: &str,
    result: TestResult,
    start_offset_secs: i64,
    duration_secs: u64,
) -> TestOutcome {
    let mut outcome = outcome_lasting(name, feature, result, duration_secs);
    outcome.set_start_time(base_time() + chrono::Duration::seconds(start_offset_secs));
    outcome
}

pub(crate) fn tagged_outcome(
    name: &str,
    feature: &str,
    result: TestResult,
    tags: &[(&str, &str)],
) -> TestOutcome {
    let mut outcome = outcome(name, feature, result);
    outcome.add_tags(
        tags.iter()
            .map(|(tag_type, value)| TestTag::new(*tag_type, *value)),
    );
    outcome
}

pub(crate) fn outcome_with_history(
    name: &str,
    feature: &str,
    result: TestResult,
    history: &[TestResult],
) -> TestOutcome {
    let mut outcome = outcome(name, feature, result);
    outcome.add_prior_results(history.iter().copied());
    outcome
}
