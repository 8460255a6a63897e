// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Problems found while checking a loaded configuration

use std::fmt;

/// One problem with a configuration field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted TOML path, e.g. "schedule.timezone"
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors abort startup, warnings are only logged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationResult {
    pub fn error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(ConfigIssue {
            field,
            message: message.into(),
        });
    }

    pub fn warn(&mut self, field: &'static str, message: impl Into<String>) {
        self.warnings.push(ConfigIssue {
            field,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One line per error
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_keep_result_valid() {
        let mut result = ValidationResult::default();
        result.warn("api.base_url", "plain http");

        assert!(result.is_valid());
        assert_eq!(result.error_summary(), "");
    }

    #[test]
    fn test_error_summary_lists_each_error() {
        let mut result = ValidationResult::default();
        result.error("api.timeout_secs", "too short");
        result.error("schedule.timezone", "unknown");

        assert!(!result.is_valid());
        assert_eq!(
            result.error_summary(),
            "api.timeout_secs: too short\nschedule.timezone: unknown"
        );
    }
}
