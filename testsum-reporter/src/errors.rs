// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by testsum-reporter.

use thiserror::Error;

/// An error detected while validating a
/// [`ReportConfig`](crate::config::ReportConfig).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReportConfigError {
    /// A custom report field was defined with a blank name.
    #[error("custom report field defined with a blank name")]
    BlankCustomFieldName,

    /// A requested tag category was blank.
    #[error("requested tag category is blank")]
    BlankTagType,
}

/// An error serializing assembled
/// [`ReportFields`](crate::report::ReportFields) to JSON.
///
/// Returned by
/// [`ReportFields::to_json_string`](crate::report::ReportFields::to_json_string).
#[derive(Debug, Error)]
#[error("error serializing report fields")]
pub struct SerializeError {
    #[from]
    inner: serde_json::Error,
}
