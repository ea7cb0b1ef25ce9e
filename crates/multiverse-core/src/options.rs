//! # Filter Option Derivation
//!
//! Builds the selectable filter values for a list of resources from the
//! values actually present in that list, so a character subset with no
//! "Genderless" entries never offers that option.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalogue::FilterDefinition;
use crate::strings::title_case;

/// A resource field that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Gender,
    Status,
}

impl FilterField {
    /// The API / query parameter name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access to the raw string value of a filterable field.
pub trait Filterable {
    /// Returns the raw, unnormalized value of `field`.
    fn field(&self, field: FilterField) -> &str;
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn field(&self, field: FilterField) -> &str {
        (**self).field(field)
    }
}

/// A selectable `(label, value)` pair.
///
/// `value` is always lowercase; the empty value is the "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub name: String,
    pub value: String,
}

impl FilterOption {
    /// Creates an option from an explicit label and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The "All" sentinel, meaning no restriction on the field.
    #[must_use]
    pub fn all() -> Self {
        Self::new("All", "")
    }

    /// Builds an option from a raw field value.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::new(title_case(raw), raw.to_lowercase())
    }

    /// Returns `true` for the "All" sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.value.is_empty()
    }
}

/// Collects the distinct values of `field` present in `items` as options.
///
/// Values are deduplicated by exact (case-sensitive) equality, sorted with
/// `comparator` or ascending lexically, then mapped to title-cased labels
/// and lowercase values. The "All" sentinel is not included; see
/// [`with_all`].
pub fn derive_options<T, I>(
    field: FilterField,
    items: I,
    comparator: Option<&dyn Fn(&str, &str) -> Ordering>,
) -> Vec<FilterOption>
where
    I: IntoIterator<Item = T>,
    T: Filterable,
{
    let mut seen = HashSet::new();
    let mut values: Vec<String> = Vec::new();
    for item in items {
        let raw = item.field(field);
        if seen.insert(raw.to_string()) {
            values.push(raw.to_string());
        }
    }

    match comparator {
        Some(cmp) => values.sort_by(|a, b| cmp(a, b)),
        None => values.sort(),
    }

    values.iter().map(|v| FilterOption::from_raw(v)).collect()
}

/// Prepends the definition's "All" option to derived options.
#[must_use]
pub fn with_all(definition: &FilterDefinition, derived: Vec<FilterOption>) -> Vec<FilterOption> {
    let mut options = Vec::with_capacity(derived.len() + 1);
    options.push(definition.all_option());
    options.extend(derived);
    options
}

/// Orders strings by their position in a canonical reference list.
///
/// Matching is case-insensitive. Values missing from the reference sort
/// after all present ones; remaining ties are broken lexically.
pub fn rank_by_reference<'a>(reference: &'a [&'a str]) -> impl Fn(&str, &str) -> Ordering + 'a {
    move |a, b| {
        let rank = |v: &str| {
            let v = v.to_lowercase();
            reference.iter().position(|r| r.to_lowercase() == v)
        };
        compare_ranked(a, b, rank(a), rank(b))
    }
}

/// Orders strings by the position of the option whose label matches their
/// title-cased form, e.g. the canonical gender order of
/// [`GENDER`](crate::catalogue::GENDER).
pub fn rank_by_options(reference: &[FilterOption]) -> impl Fn(&str, &str) -> Ordering + '_ {
    move |a, b| {
        let rank = |v: &str| {
            let label = title_case(v).to_lowercase();
            reference
                .iter()
                .position(|option| option.name.to_lowercase() == label)
        };
        compare_ranked(a, b, rank(a), rank(b))
    }
}

fn compare_ranked(a: &str, b: &str, rank_a: Option<usize>, rank_b: Option<usize>) -> Ordering {
    match (rank_a, rank_b) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{GENDER, STATUS};

    struct Row {
        gender: &'static str,
        status: &'static str,
    }

    impl Filterable for Row {
        fn field(&self, field: FilterField) -> &str {
            match field {
                FilterField::Gender => self.gender,
                FilterField::Status => self.status,
            }
        }
    }

    fn row(gender: &'static str, status: &'static str) -> Row {
        Row { gender, status }
    }

    #[test]
    fn derives_deduplicated_ascending_options() {
        let rows = vec![row("male", "alive"), row("male", "dead"), row("female", "alive")];
        let options = derive_options(FilterField::Gender, &rows, None);
        assert_eq!(
            options,
            vec![
                FilterOption::new("Female", "female"),
                FilterOption::new("Male", "male"),
            ]
        );
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let rows = vec![row("Male", "Alive"), row("male", "alive")];
        let options = derive_options(FilterField::Status, &rows, None);
        assert_eq!(
            options,
            vec![
                FilterOption::new("Alive", "alive"),
                FilterOption::new("Alive", "alive"),
            ]
        );
    }

    #[test]
    fn empty_items_give_no_options() {
        let rows: Vec<Row> = Vec::new();
        assert!(derive_options(FilterField::Gender, &rows, None).is_empty());
    }

    #[test]
    fn comparator_controls_order() {
        let rows = vec![row("Female", "Alive"), row("Male", "Alive")];
        let descending = |a: &str, b: &str| b.cmp(a);
        let options = derive_options(FilterField::Gender, &rows, Some(&descending));
        assert_eq!(options[0].value, "male");
        assert_eq!(options[1].value, "female");
    }

    #[test]
    fn canonical_order_from_reference() {
        let reference = ["Female", "Male", "Genderless", "Unknown"];
        let cmp = rank_by_reference(&reference);
        let rows = vec![row("unknown", ""), row("Male", ""), row("Female", "")];
        let options = derive_options(FilterField::Gender, &rows, Some(&cmp));
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["female", "male", "unknown"]);
    }

    #[test]
    fn canonical_order_from_options() {
        let reference = GENDER.options();
        let cmp = rank_by_options(&reference);
        let rows = vec![row("unknown", ""), row("Genderless", ""), row("Male", "")];
        let options = derive_options(FilterField::Gender, &rows, Some(&cmp));
        let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Male", "Genderless", "Unknown"]);
    }

    #[test]
    fn unmatched_values_sort_last_then_lexically() {
        let reference = STATUS.options();
        let cmp = rank_by_options(&reference);
        let rows = vec![
            row("", "zombie"),
            row("", "Dead"),
            row("", "cyborg"),
            row("", "Alive"),
        ];
        let options = derive_options(FilterField::Status, &rows, Some(&cmp));
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["alive", "dead", "cyborg", "zombie"]);
    }

    #[test]
    fn with_all_prepends_sentinel() {
        let rows = vec![row("Male", "Alive")];
        let options = with_all(&GENDER, derive_options(FilterField::Gender, &rows, None));
        assert!(options[0].is_all());
        assert_eq!(options[0].name, "All");
        assert_eq!(options.len(), 2);

        let empty = with_all(&STATUS, Vec::new());
        assert_eq!(empty, vec![FilterOption::all()]);
    }

    #[test]
    fn filter_field_names() {
        assert_eq!(FilterField::Gender.to_string(), "gender");
        assert_eq!(FilterField::Status.as_str(), "status");
    }
}
