// Copyright (c) The testsum Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-defined report fields sourced from configuration.

use crate::config::ReportConfig;

/// Ordered user-defined report fields, exposed as two index-aligned
/// sequences (names and values) the way the template contract expects them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CustomReportFields {
    names: Vec<String>,
    values: Vec<String>,
}

impl CustomReportFields {
    /// Builds the field sequences from validated configuration, preserving
    /// definition order.
    pub fn from_config(config: &ReportConfig) -> Self {
        let (names, values) = config
            .custom_fields
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .unzip();
        Self { names, values }
    }

    /// The field names, in definition order.
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// The field values, index-aligned with [`field_names`].
    ///
    /// [`field_names`]: CustomReportFields::field_names
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns true if no custom fields were configured.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequences_are_index_aligned_in_definition_order() {
        let mut config = ReportConfig::default();
        config.custom_fields.insert("Build".to_owned(), "1.2.3".to_owned());
        config
            .custom_fields
            .insert("Environment".to_owned(), "staging".to_owned());

        let fields = CustomReportFields::from_config(&config);
        assert_eq!(fields.field_names(), &["Build", "Environment"]);
        assert_eq!(fields.values(), &["1.2.3", "staging"]);
    }

    #[test]
    fn empty_configuration_yields_empty_sequences() {
        let fields = CustomReportFields::from_config(&ReportConfig::default());
        assert!(fields.is_empty());
        assert_eq!(fields.field_names().len(), fields.values().len());
    }
}
