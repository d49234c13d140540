// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag-based coverage: which tag values were exercised, and how they fared.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use testsum_metadata::TestOutcomes;

/// Pass/fail counts for one observed tag value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CoverageCount {
    /// Outcomes carrying this value that did not fail.
    pub pass: usize,
    /// Outcomes carrying this value that failed, errored or were
    /// compromised.
    pub fail: usize,
}

/// Coverage for one requested tag category.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagTypeCoverage {
    /// The tag category.
    pub tag_type: String,

    /// The values observed in this category, in first-seen order, each with
    /// its pass/fail counts.
    pub tag_coverage: IndexMap<String, CoverageCount>,
}

/// Per-category tag coverage across one batch.
///
/// Built in two steps, [`TagCoverage::from_outcomes`] then
/// [`TagCoverageSource::for_tag_types`], so the requested categories come
/// from configuration rather than from the batch itself.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct TagCoverage {
    coverage: Vec<TagTypeCoverage>,
}

/// Intermediate holder for [`TagCoverage::from_outcomes`].
pub struct TagCoverageSource<'a> {
    outcomes: &'a TestOutcomes,
}

impl TagCoverage {
    /// Starts building coverage over the given batch.
    pub fn from_outcomes(outcomes: &TestOutcomes) -> TagCoverageSource<'_> {
        TagCoverageSource { outcomes }
    }

    /// The per-category coverage, in request order. Categories with no
    /// observed values are absent.
    pub fn types(&self) -> &[TagTypeCoverage] {
        &self.coverage
    }

    /// Looks up the coverage for one category.
    pub fn get(&self, tag_type: &str) -> Option<&TagTypeCoverage> {
        self.coverage
            .iter()
            .find(|coverage| coverage.tag_type == tag_type)
    }

    /// The number of categories with observed values.
    pub fn len(&self) -> usize {
        self.coverage.len()
    }

    /// Returns true if no requested category had observed values.
    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty()
    }
}

impl TagCoverageSource<'_> {
    /// Computes coverage for each requested tag category, in request order.
    ///
    /// An outcome carrying several values of one category counts once per
    /// value; an outcome lacking the category contributes nothing.
    /// Categories with no observed values are omitted from the result.
    pub fn for_tag_types(self, tag_types: &[String]) -> TagCoverage {
        let coverage = tag_types
            .iter()
            .filter_map(|tag_type| {
                let mut values: IndexMap<String, CoverageCount> = IndexMap::new();
                for outcome in &self.outcomes.outcomes {
                    for value in outcome.tag_values(tag_type).unique() {
                        let counts = values.entry(value.to_owned()).or_default();
                        if outcome.is_unsuccessful() {
                            counts.fail += 1;
                        } else {
                            counts.pass += 1;
                        }
                    }
                }
                (!values.is_empty()).then(|| TagTypeCoverage {
                    tag_type: tag_type.clone(),
                    tag_coverage: values,
                })
            })
            .collect();
        TagCoverage { coverage }
    }
}
