// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result tallies across one batch of outcomes.

use crate::duration::{
    average_duration_of, clock_duration_of, formatted_duration, max_duration_of, min_duration_of,
};
use indexmap::IndexMap;
use serde::Serialize;
use testsum_metadata::{TestOutcomes, TestResult};

/// A per-batch snapshot of result counts, percentages and duration figures.
///
/// Every result category appears in `count_by_result` and
/// `percentage_by_result`, in [`TestResult::DISPLAY_ORDER`], even with a
/// count of zero. The five duration figures are preformatted display strings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultSummary {
    /// The total number of outcomes tallied.
    pub total_count: usize,

    /// Count of outcomes per result category.
    pub count_by_result: IndexMap<TestResult, usize>,

    /// Whole-number percentage per result category, rounded from the true
    /// ratio. All zeroes for an empty batch; the column need not sum to 100.
    pub percentage_by_result: IndexMap<TestResult, u32>,

    /// The summed duration of all outcomes.
    pub total_test_duration: String,

    /// The wall-clock span from first start to last finish.
    pub clock_test_duration: String,

    /// The mean outcome duration.
    pub average_test_duration: String,

    /// The largest outcome duration.
    pub max_test_duration: String,

    /// The smallest outcome duration.
    pub min_test_duration: String,
}

impl TestResultSummary {
    /// Tallies the given batch.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> Self {
        let total = outcomes.total;

        let count_by_result: IndexMap<TestResult, usize> = TestResult::DISPLAY_ORDER
            .into_iter()
            .map(|result| {
                let count = outcomes
                    .outcomes
                    .iter()
                    .filter(|outcome| outcome.result == result)
                    .count();
                (result, count)
            })
            .collect();

        let percentage_by_result = count_by_result
            .iter()
            .map(|(&result, &count)| (result, percentage_of(count, total)))
            .collect();

        Self {
            total_count: total,
            count_by_result,
            percentage_by_result,
            total_test_duration: formatted_duration(outcomes.duration),
            clock_test_duration: formatted_duration(clock_duration_of(&outcomes.outcomes)),
            average_test_duration: formatted_duration(average_duration_of(&outcomes.outcomes)),
            max_test_duration: formatted_duration(max_duration_of(&outcomes.outcomes)),
            min_test_duration: formatted_duration(min_duration_of(&outcomes.outcomes)),
        }
    }

    /// The count recorded for one result category.
    pub fn count_of(&self, result: TestResult) -> usize {
        self.count_by_result.get(&result).copied().unwrap_or(0)
    }

    /// The rounded percentage recorded for one result category.
    pub fn percentage_of(&self, result: TestResult) -> u32 {
        self.percentage_by_result
            .get(&result)
            .copied()
            .unwrap_or(0)
    }
}

fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u32
}
