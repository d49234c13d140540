// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::TestOutcome;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An ordered collection of [`TestOutcome`]s, plus aggregates maintained as
/// outcomes are added.
///
/// Invariants: `total` equals the number of contained outcomes, `duration`
/// equals the sum of member durations, and `start_time` is the earliest
/// recorded member start time (absent when no member has one). When building
/// a batch, use of [`TestOutcomes::add_outcome`] is recommended over pushing
/// to `outcomes` directly so the aggregates stay consistent.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestOutcomes {
    /// The total number of outcomes in this batch.
    pub total: usize,

    /// The summed duration of all outcomes in this batch.
    #[serde(with = "humantime_serde")]
    pub duration: Duration,

    /// The earliest recorded start time across the batch, if any outcome has
    /// one.
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,

    /// The outcomes, in the order the reader produced them.
    pub outcomes: Vec<TestOutcome>,
}

impl TestOutcomes {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an outcome and updates the `total`, `duration` and `start_time`
    /// aggregates.
    pub fn add_outcome(&mut self, outcome: TestOutcome) -> &mut Self {
        self.total += 1;
        self.duration += outcome.duration;
        self.start_time = match (self.start_time, outcome.start_time) {
            (Some(current), Some(new)) => Some(current.min(new)),
            (current, new) => current.or(new),
        };
        self.outcomes.push(outcome);
        self
    }

    /// Adds several outcomes, updating the aggregates for each.
    pub fn add_outcomes(&mut self, outcomes: impl IntoIterator<Item = TestOutcome>) -> &mut Self {
        for outcome in outcomes {
            self.add_outcome(outcome);
        }
        self
    }

    /// Returns true if the batch holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<TestOutcome> for TestOutcomes {
    fn from_iter<I: IntoIterator<Item = TestOutcome>>(iter: I) -> Self {
        let mut outcomes = TestOutcomes::new();
        outcomes.add_outcomes(iter);
        outcomes
    }
}
