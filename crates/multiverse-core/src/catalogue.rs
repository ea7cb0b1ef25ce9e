//! Canonical filter definitions shared by every view.
//!
//! Each definition starts with the "All" sentinel so the sentinel keeps the
//! same label and position whatever subset of values is on screen.

use crate::options::{FilterField, FilterOption};

/// Text shown when a filter leaves nothing to display.
pub const NO_FILTER_RESULTS: &str = "Nothing found";

/// A filter's label, query parameter and canonical `(name, value)` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDefinition {
    pub label: &'static str,
    pub search_param: &'static str,
    pub data: &'static [(&'static str, &'static str)],
}

pub static GENDER: FilterDefinition = FilterDefinition {
    label: "Gender",
    search_param: "gender",
    data: &[
        ("All", ""),
        ("Female", "female"),
        ("Male", "male"),
        ("Genderless", "genderless"),
        ("Unknown", "unknown"),
    ],
};

pub static STATUS: FilterDefinition = FilterDefinition {
    label: "Status",
    search_param: "status",
    data: &[
        ("All", ""),
        ("Alive", "alive"),
        ("Dead", "dead"),
        ("Unknown", "unknown"),
    ],
};

pub static SEASON: FilterDefinition = FilterDefinition {
    label: "Season",
    search_param: "season",
    data: &[
        ("All", ""),
        ("Season 1", "s01"),
        ("Season 2", "s02"),
        ("Season 3", "s03"),
        ("Season 4", "s04"),
        ("Season 5", "s05"),
    ],
};

impl FilterDefinition {
    /// All canonical options, sentinel first.
    #[must_use]
    pub fn options(&self) -> Vec<FilterOption> {
        self.data
            .iter()
            .map(|(name, value)| FilterOption::new(*name, *value))
            .collect()
    }

    /// The leading "All" option.
    #[must_use]
    pub fn all_option(&self) -> FilterOption {
        self.data
            .first()
            .map(|(name, value)| FilterOption::new(*name, *value))
            .unwrap_or_else(FilterOption::all)
    }

    /// Returns `true` if `value` is one of the canonical values (case-insensitive).
    #[must_use]
    pub fn is_known_value(&self, value: &str) -> bool {
        self.data
            .iter()
            .any(|(_, known)| known.eq_ignore_ascii_case(value))
    }

    /// Label of the canonical option holding `value`, if any.
    #[must_use]
    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.data
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(value))
            .map(|(name, _)| *name)
    }
}

impl FilterField {
    /// The canonical definition for this field.
    #[must_use]
    pub fn definition(self) -> &'static FilterDefinition {
        match self {
            Self::Gender => &GENDER,
            Self::Status => &STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_definition_starts_with_sentinel() {
        for def in [&GENDER, &STATUS, &SEASON] {
            assert!(def.all_option().is_all(), "{}", def.label);
            assert_eq!(def.options()[0], FilterOption::all());
        }
    }

    #[test]
    fn option_values_are_lowercase() {
        for def in [&GENDER, &STATUS, &SEASON] {
            for option in def.options() {
                assert_eq!(option.value, option.value.to_lowercase());
            }
        }
    }

    #[test]
    fn known_values_are_case_insensitive() {
        assert!(STATUS.is_known_value("Dead"));
        assert!(GENDER.is_known_value(""));
        assert!(!GENDER.is_known_value("robot"));
        assert_eq!(SEASON.label_for("S03"), Some("Season 3"));
        assert_eq!(SEASON.label_for("s09"), None);
    }

    #[test]
    fn fields_map_to_definitions() {
        assert_eq!(FilterField::Gender.definition().search_param, "gender");
        assert_eq!(FilterField::Status.definition().label, "Status");
    }
}
