// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Data model for testsum test-outcome summaries.
//!
//! This crate defines the records produced by outcome readers and consumed by
//! the summarization engine in `testsum-reporter`: a single recorded test
//! execution ([`TestOutcome`]), its result category ([`TestResult`]), its
//! classification tags ([`TestTag`]), and the ordered batch of executions one
//! report is built from ([`TestOutcomes`]).
//!
//! All types here are plain data: once a batch has been handed to the engine
//! it is treated as immutable for the duration of one report build.

mod test_outcome;
mod test_outcomes;
mod test_result;

pub use test_outcome::*;
pub use test_outcomes::*;
pub use test_result::*;
