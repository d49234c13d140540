// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration statistics and display helpers for test outcomes.

use chrono::{DateTime, FixedOffset};
use std::{fmt, time::Duration};
use testsum_metadata::TestOutcome;

/// Returns the arithmetic mean of the outcome durations.
///
/// An empty slice yields [`Duration::ZERO`]; this never divides by zero.
pub fn average_duration_of(outcomes: &[TestOutcome]) -> Duration {
    if outcomes.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = outcomes.iter().map(|outcome| outcome.duration).sum();
    total / outcomes.len() as u32
}

/// Returns the largest outcome duration, or [`Duration::ZERO`] for an empty
/// slice.
pub fn max_duration_of(outcomes: &[TestOutcome]) -> Duration {
    outcomes
        .iter()
        .map(|outcome| outcome.duration)
        .max()
        .unwrap_or(Duration::ZERO)
}

/// Returns the smallest outcome duration, or [`Duration::ZERO`] for an empty
/// slice.
pub fn min_duration_of(outcomes: &[TestOutcome]) -> Duration {
    outcomes
        .iter()
        .map(|outcome| outcome.duration)
        .min()
        .unwrap_or(Duration::ZERO)
}

/// Returns the wall-clock span of the batch: the time from the earliest
/// recorded start to the latest finish among outcomes that carry a start
/// time.
///
/// This differs from the summed duration when executions overlapped (parallel
/// runs) or had gaps between them. Outcomes without a start time contribute
/// nothing; if no outcome has one, the span is [`Duration::ZERO`].
pub fn clock_duration_of(outcomes: &[TestOutcome]) -> Duration {
    let mut first_start: Option<DateTime<FixedOffset>> = None;
    let mut last_end: Option<DateTime<FixedOffset>> = None;

    for outcome in outcomes {
        let (Some(start), Some(end)) = (outcome.start_time, outcome.end_time()) else {
            continue;
        };
        first_start = Some(first_start.map_or(start, |earliest| earliest.min(start)));
        last_end = Some(last_end.map_or(end, |latest| latest.max(end)));
    }

    match (first_start, last_end) {
        (Some(start), Some(end)) => (end - start).to_std().unwrap_or(Duration::ZERO),
        _ => Duration::ZERO,
    }
}

/// Displays a duration in `h`/`m`/`s` form at whole-second granularity,
/// trimming zero-valued leading units. A zero duration renders as `0s`.
pub struct DisplayFriendlyDuration(pub Duration);

impl fmt::Display for DisplayFriendlyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round to whole seconds before splitting into units.
        let total_secs = self.0.as_secs_f64().round() as u64;
        let secs = total_secs % 60;
        let total_mins = total_secs / 60;
        let mins = total_mins % 60;
        let hours = total_mins / 60;

        if hours > 0 {
            write!(f, "{hours}h {mins}m {secs}s")
        } else if mins > 0 {
            write!(f, "{mins}m {secs}s")
        } else {
            write!(f, "{secs}s")
        }
    }
}

/// Renders a duration as a display string, e.g. `1h 4m 10s`.
pub fn formatted_duration(duration: Duration) -> String {
    DisplayFriendlyDuration(duration).to_string()
}
