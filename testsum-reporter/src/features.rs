// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grouping of outcomes by the feature they belong to.

use crate::summary::TestResultSummary;
use indexmap::IndexMap;
use serde::Serialize;
use testsum_metadata::{TestOutcome, TestOutcomes};

/// The outcomes and tally recorded for one feature.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureResults {
    /// The feature name.
    pub feature: String,

    /// The outcomes recorded for this feature, in input order.
    pub outcomes: TestOutcomes,

    /// The result tally for this feature's outcomes.
    pub results: TestResultSummary,
}

/// Outcomes partitioned by feature.
///
/// Feature keys are exact and case-sensitive; groups appear in the order
/// each feature was first seen in the input sequence.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct TestResultsByFeature {
    features: IndexMap<String, FeatureResults>,
}

impl TestResultsByFeature {
    /// Partitions the batch by feature.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> Self {
        let features = group_by_feature(outcomes)
            .into_iter()
            .map(|(feature, members)| {
                let outcomes: TestOutcomes = members.into_iter().collect();
                let results = TestResultSummary::from_outcomes(&outcomes);
                let group = FeatureResults {
                    feature: feature.clone(),
                    outcomes,
                    results,
                };
                (feature, group)
            })
            .collect();
        Self { features }
    }

    /// The feature groups, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureResults> {
        self.features.values()
    }

    /// Looks up the group for one feature.
    pub fn get(&self, feature: &str) -> Option<&FeatureResults> {
        self.features.get(feature)
    }

    /// The feature names, in first-seen order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(|feature| feature.as_str())
    }

    /// The number of distinct features in the batch.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the batch held no outcomes.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Failing outcomes grouped by feature.
///
/// A feature appears here only if at least one of its outcomes failed,
/// errored or was compromised; the group holds exactly those outcomes.
/// Ordering follows the full feature partition, so these keys are always a
/// subset of [`TestResultsByFeature`]'s keys in the same relative order.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct FailuresByFeature {
    failures: IndexMap<String, Vec<TestOutcome>>,
}

impl FailuresByFeature {
    /// Collects the failing outcomes of each feature that has any.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> Self {
        let failures = group_by_feature(outcomes)
            .into_iter()
            .filter_map(|(feature, members)| {
                let failing: Vec<TestOutcome> = members
                    .into_iter()
                    .filter(|outcome| outcome.is_unsuccessful())
                    .collect();
                (!failing.is_empty()).then_some((feature, failing))
            })
            .collect();
        Self { failures }
    }

    /// The failing features and their failing outcomes, in first-seen
    /// feature order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TestOutcome])> {
        self.failures
            .iter()
            .map(|(feature, failing)| (feature.as_str(), failing.as_slice()))
    }

    /// Looks up the failing outcomes of one feature.
    pub fn get(&self, feature: &str) -> Option<&[TestOutcome]> {
        self.failures.get(feature).map(|failing| failing.as_slice())
    }

    /// The names of features with at least one failure, in first-seen order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.failures.keys().map(|feature| feature.as_str())
    }

    /// The number of features with at least one failure.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no feature had a failure.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

fn group_by_feature(outcomes: &TestOutcomes) -> IndexMap<String, Vec<TestOutcome>> {
    let mut groups: IndexMap<String, Vec<TestOutcome>> = IndexMap::new();
    for outcome in &outcomes.outcomes {
        groups
            .entry(outcome.feature.clone())
            .or_default()
            .push(outcome.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::outcome;
    use pretty_assertions::assert_eq;
    use testsum_metadata::TestResult;

    fn sample() -> TestOutcomes {
        [
            outcome("t1", "cart", TestResult::Success),
            outcome("t2", "search", TestResult::Failure),
            outcome("t3", "cart", TestResult::Error),
            outcome("t4", "account", TestResult::Success),
            outcome("t5", "search", TestResult::Success),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn groups_preserve_first_seen_feature_order() {
        let by_feature = TestResultsByFeature::from_outcomes(&sample());
        let names: Vec<_> = by_feature.feature_names().collect();
        assert_eq!(names, vec!["cart", "search", "account"]);
    }

    #[test]
    fn feature_keys_are_case_sensitive() {
        let outcomes: TestOutcomes = [
            outcome("t1", "Cart", TestResult::Success),
            outcome("t2", "cart", TestResult::Success),
        ]
        .into_iter()
        .collect();

        let by_feature = TestResultsByFeature::from_outcomes(&outcomes);
        assert_eq!(by_feature.len(), 2);
    }

    #[test]
    fn each_group_tallies_its_own_outcomes() {
        let by_feature = TestResultsByFeature::from_outcomes(&sample());

        let cart = by_feature.get("cart").expect("cart group present");
        assert_eq!(cart.outcomes.total, 2);
        assert_eq!(cart.results.count_of(TestResult::Success), 1);
        assert_eq!(cart.results.count_of(TestResult::Error), 1);

        let account = by_feature.get("account").expect("account group present");
        assert_eq!(account.results.count_of(TestResult::Success), 1);
        assert_eq!(account.results.count_of(TestResult::Error), 0);
    }

    #[test]
    fn failures_by_feature_keeps_only_failing_features() {
        let failures = FailuresByFeature::from_outcomes(&sample());

        let names: Vec<_> = failures.feature_names().collect();
        assert_eq!(names, vec!["cart", "search"]);
        assert_eq!(failures.get("account"), None);
    }

    #[test]
    fn failures_by_feature_holds_only_failing_outcomes() {
        let failures = FailuresByFeature::from_outcomes(&sample());

        let search = failures.get("search").expect("search had a failure");
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].name, "t2");
        assert_eq!(search[0].result, TestResult::Failure);
    }

    #[test]
    fn pending_and_ignored_do_not_count_as_failures() {
        let outcomes: TestOutcomes = [
            outcome("t1", "cart", TestResult::Pending),
            outcome("t2", "cart", TestResult::Ignored),
            outcome("t3", "search", TestResult::Compromised),
        ]
        .into_iter()
        .collect();

        let failures = FailuresByFeature::from_outcomes(&outcomes);
        let names: Vec<_> = failures.feature_names().collect();
        assert_eq!(names, vec!["search"]);
    }

    #[test]
    fn failing_feature_keys_are_a_subset_in_partition_order() {
        let sample = sample();
        let by_feature = TestResultsByFeature::from_outcomes(&sample);
        let failures = FailuresByFeature::from_outcomes(&sample);

        let all: Vec<_> = by_feature.feature_names().collect();
        let failing: Vec<_> = failures.feature_names().collect();
        let filtered: Vec<_> = all
            .iter()
            .copied()
            .filter(|name| failures.get(name).is_some())
            .collect();
        assert_eq!(failing, filtered);
    }

    #[test]
    fn empty_batch_produces_empty_groupings() {
        let empty = TestOutcomes::new();
        assert!(TestResultsByFeature::from_outcomes(&empty).is_empty());
        assert!(FailuresByFeature::from_outcomes(&empty).is_empty());
    }
}
