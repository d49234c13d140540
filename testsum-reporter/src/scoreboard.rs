// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ranked scoreboards: frequent failures and result instability.
//!
//! Both scoreboards rank test identities by a metric, highest first, with
//! ties broken by ascending [`TestId`] so that a fixed input batch always
//! produces the same ordering. Truncation to the configured scoreboard size
//! is a view over the ranking and never mutates it.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::iter;
use testsum_metadata::{TestId, TestOutcome, TestOutcomes};

/// One scoreboard row: a test identity and its metric value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardEntry {
    /// The test this row refers to.
    pub id: TestId,
    /// The metric value: a failure count or an instability score.
    pub score: usize,
}

/// Tests ranked by recorded failure count, highest first.
///
/// The count for an identity is the number of failing results across the
/// current run and the recorded history of every outcome with that identity.
/// Tests that never failed do not appear.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct FrequentFailures {
    entries: Vec<ScoreboardEntry>,
}

impl FrequentFailures {
    /// Ranks the batch by failure count.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> Self {
        let mut counts: IndexMap<TestId, usize> = IndexMap::new();
        for outcome in &outcomes.outcomes {
            let failures = usize::from(outcome.result.is_unsuccessful())
                + outcome
                    .history
                    .iter()
                    .filter(|result| result.is_unsuccessful())
                    .count();
            *counts.entry(outcome.id()).or_insert(0) += failures;
        }
        counts.retain(|_, count| *count > 0);
        Self {
            entries: ranked(counts),
        }
    }

    /// Returns a view truncated to at most `max` rows; the underlying
    /// ranking is unchanged. A `max` of 0 yields an empty view.
    pub fn with_max_of(&self, max: usize) -> Self {
        Self {
            entries: self.entries.iter().take(max).cloned().collect(),
        }
    }

    /// The ranked rows, highest count first.
    pub fn entries(&self) -> &[ScoreboardEntry] {
        &self.entries
    }

    /// The number of rows in this view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no test has a recorded failure.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tests ranked by result instability, highest first.
///
/// The instability score of an identity is the number of flips between
/// success and non-success across its ordered result sequence (recorded
/// history followed by the current result), summed over every outcome with
/// that identity. A test with fewer than two recorded results scores 0.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct UnstableFeatures {
    entries: Vec<ScoreboardEntry>,
}

impl UnstableFeatures {
    /// Ranks the batch by instability score. Zero-score entries participate;
    /// use [`UnstableFeatures::hiding_stable`] to drop them.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> Self {
        let mut scores: IndexMap<TestId, usize> = IndexMap::new();
        for outcome in &outcomes.outcomes {
            *scores.entry(outcome.id()).or_insert(0) += instability_of(outcome);
        }
        Self {
            entries: ranked(scores),
        }
    }

    /// Returns a view without zero-score rows, for reports configured to
    /// hide stable tests.
    pub fn hiding_stable(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.score > 0)
                .cloned()
                .collect(),
        }
    }

    /// Returns a view truncated to at most `max` rows; the underlying
    /// ranking is unchanged. A `max` of 0 yields an empty view.
    pub fn with_max_of(&self, max: usize) -> Self {
        Self {
            entries: self.entries.iter().take(max).cloned().collect(),
        }
    }

    /// The ranked rows, highest score first.
    pub fn entries(&self) -> &[ScoreboardEntry] {
        &self.entries
    }

    /// The number of rows in this view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this view holds no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The number of flips between success and non-success across the outcome's
/// ordered result sequence.
fn instability_of(outcome: &TestOutcome) -> usize {
    outcome
        .history
        .iter()
        .copied()
        .chain(iter::once(outcome.result))
        .map(|result| result.is_unsuccessful())
        .tuple_windows()
        .filter(|(previous, next)| previous != next)
        .count()
}

fn ranked(scores: IndexMap<TestId, usize>) -> Vec<ScoreboardEntry> {
    scores
        .into_iter()
        .map(|(id, score)| ScoreboardEntry { id, score })
        .sorted_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)))
        .collect()
}
