// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::TestResult;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

/// A user-defined classification tag attached to a test outcome.
///
/// A tag pairs a category (the classification axis, e.g. `priority`) with a
/// value on that axis (e.g. `high`). One outcome may carry any number of
/// tags, including several values in the same category.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestTag {
    /// The tag category.
    pub tag_type: String,
    /// The tag value within the category.
    pub value: String,
}

impl TestTag {
    /// Creates a new tag.
    pub fn new(tag_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            value: value.into(),
        }
    }
}

/// The identity of a test: its owning feature plus its name.
///
/// Two outcomes with the same `TestId` are runs of the same test. The derived
/// ordering is lexicographic by feature, then name, which the scoreboards use
/// as a deterministic tie-break.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestId {
    /// The feature (or story) the test belongs to.
    pub feature: String,
    /// The test name.
    pub name: String,
}

impl TestId {
    /// Creates a new test identity.
    pub fn new(feature: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.feature.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.feature, self.name)
        }
    }
}

/// One recorded execution of one test.
///
/// Produced by an upstream outcome reader and treated as immutable from then
/// on. When generating records by hand, [`TestOutcome::new`] plus the
/// `set_`/`add_` methods below are recommended over filling in fields
/// directly.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestOutcome {
    /// The test name.
    pub name: String,

    /// The feature (or story) the test belongs to.
    pub feature: String,

    /// The result category of this execution.
    pub result: TestResult,

    /// Time taken by this execution.
    #[serde(with = "humantime_serde")]
    pub duration: Duration,

    /// The time at which this execution began, if recorded.
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Tags attached to this outcome.
    #[serde(default)]
    pub tags: Vec<TestTag>,

    /// Results of prior runs of the same test, oldest first. Empty when no
    /// history is available.
    #[serde(default)]
    pub history: Vec<TestResult>,
}

impl TestOutcome {
    /// Creates a new outcome with a zero duration, no start time, no tags and
    /// no history.
    pub fn new(
        name: impl Into<String>,
        feature: impl Into<String>,
        result: TestResult,
    ) -> Self {
        Self {
            name: name.into(),
            feature: feature.into(),
            result,
            duration: Duration::ZERO,
            start_time: None,
            tags: vec![],
            history: vec![],
        }
    }

    /// Sets the time taken by this execution.
    pub fn set_duration(&mut self, duration: Duration) -> &mut Self {
        self.duration = duration;
        self
    }

    /// Sets the time at which this execution began.
    pub fn set_start_time(
        &mut self,
        start_time: impl Into<DateTime<FixedOffset>>,
    ) -> &mut Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Attaches a tag to this outcome.
    pub fn add_tag(&mut self, tag: TestTag) -> &mut Self {
        self.tags.push(tag);
        self
    }

    /// Attaches several tags to this outcome.
    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = TestTag>) -> &mut Self {
        self.tags.extend(tags);
        self
    }

    /// Records the result of a prior run of the same test. Prior results are
    /// kept oldest first.
    pub fn add_prior_result(&mut self, result: TestResult) -> &mut Self {
        self.history.push(result);
        self
    }

    /// Records the results of several prior runs, oldest first.
    pub fn add_prior_results(
        &mut self,
        results: impl IntoIterator<Item = TestResult>,
    ) -> &mut Self {
        self.history.extend(results);
        self
    }

    /// The identity of the test this outcome belongs to.
    pub fn id(&self) -> TestId {
        TestId::new(self.feature.clone(), self.name.clone())
    }

    /// The time at which this execution finished, when the start time was
    /// recorded.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start_time.map(|start| start + self.duration)
    }

    /// Returns true if this outcome's result counts as a failure.
    pub fn is_unsuccessful(&self) -> bool {
        self.result.is_unsuccessful()
    }

    /// Returns true if this outcome carries the given tag value in the given
    /// category.
    pub fn has_tag(&self, tag_type: &str, value: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.tag_type == tag_type && tag.value == value)
    }

    /// The values this outcome carries in the given tag category, in tag
    /// order.
    pub fn tag_values<'a>(&'a self, tag_type: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.tag_type == tag_type)
            .map(|tag| tag.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn start() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 10, 0, 0)
            .unwrap()
    }

    #[test]
    fn end_time_is_start_plus_duration() {
        let mut outcome = TestOutcome::new("adds items", "cart", TestResult::Success);
        outcome
            .set_duration(Duration::from_secs(90))
            .set_start_time(start());

        let end = outcome.end_time().expect("start time was set");
        assert_eq!((end - start()).num_seconds(), 90);
    }

    #[test]
    fn end_time_is_absent_without_start_time() {
        let outcome = TestOutcome::new("adds items", "cart", TestResult::Success);
        assert_eq!(outcome.end_time(), None);
    }

    #[test]
    fn tag_lookups() {
        let mut outcome = TestOutcome::new("adds items", "cart", TestResult::Failure);
        outcome.add_tags([
            TestTag::new("priority", "high"),
            TestTag::new("priority", "regression"),
            TestTag::new("component", "checkout"),
        ]);

        assert!(outcome.has_tag("priority", "high"));
        assert!(!outcome.has_tag("priority", "checkout"));
        let priorities: Vec<_> = outcome.tag_values("priority").collect();
        assert_eq!(priorities, vec!["high", "regression"]);
    }

    #[test]
    fn id_display_omits_empty_feature() {
        assert_eq!(TestId::new("cart", "adds items").to_string(), "cart: adds items");
        assert_eq!(TestId::new("", "adds items").to_string(), "adds items");
    }

    #[test]
    fn id_ordering_is_feature_then_name() {
        let mut ids = vec![
            TestId::new("cart", "b"),
            TestId::new("account", "z"),
            TestId::new("cart", "a"),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                TestId::new("account", "z"),
                TestId::new("cart", "a"),
                TestId::new("cart", "b"),
            ]
        );
    }
}
