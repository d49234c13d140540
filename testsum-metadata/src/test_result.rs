// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result category of one recorded test execution.
///
/// The enumeration is closed: every outcome falls into exactly one of these
/// six categories. Variants are declared in severity order, which is also the
/// order report sections iterate them in; see [`TestResult::DISPLAY_ORDER`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestResult {
    /// The test ran to completion and every assertion held.
    Success,
    /// The test is marked as not yet implemented.
    Pending,
    /// The test was skipped.
    Ignored,
    /// An assertion failed.
    Failure,
    /// An unexpected error occurred while the test was executing.
    Error,
    /// The test could not be performed, e.g. because a precondition step
    /// failed.
    Compromised,
}

impl TestResult {
    /// All result categories, in the fixed severity order used for display.
    ///
    /// Tallies iterate this rather than discovery order so that every
    /// category is present in the output even with a count of zero.
    pub const DISPLAY_ORDER: [TestResult; 6] = [
        TestResult::Success,
        TestResult::Pending,
        TestResult::Ignored,
        TestResult::Failure,
        TestResult::Error,
        TestResult::Compromised,
    ];

    /// Returns true if this result counts as a failure: `Failure`, `Error` or
    /// `Compromised`.
    ///
    /// Note that this is narrower than "not a success": `Pending` and
    /// `Ignored` outcomes are neither successes nor failures.
    pub fn is_unsuccessful(self) -> bool {
        matches!(
            self,
            TestResult::Failure | TestResult::Error | TestResult::Compromised
        )
    }

    /// Stable lowercase label for this category.
    pub fn name(self) -> &'static str {
        match self {
            TestResult::Success => "success",
            TestResult::Pending => "pending",
            TestResult::Ignored => "ignored",
            TestResult::Failure => "failure",
            TestResult::Error => "error",
            TestResult::Compromised => "compromised",
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
