use serde::{Deserialize, Serialize};

use crate::options::{FilterField, Filterable};

/// Keeps the items matching the selected gender and status.
///
/// An empty value places no restriction on its field. Comparison is
/// case-insensitive on both sides, input order is preserved, and applying
/// the same filter to its own output changes nothing.
pub fn filter_by_fields<T, I>(items: I, gender: &str, status: &str) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Filterable,
{
    let gender = gender.to_lowercase();
    let status = status.to_lowercase();

    items
        .into_iter()
        .filter(|item| {
            field_matches(item, FilterField::Gender, &gender)
                && field_matches(item, FilterField::Status, &status)
        })
        .collect()
}

fn field_matches<T: Filterable>(item: &T, field: FilterField, wanted: &str) -> bool {
    wanted.is_empty() || item.field(field).to_lowercase() == wanted
}

/// The gender and status currently selected for a character list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterFilter {
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub status: String,
}

impl CharacterFilter {
    #[must_use]
    pub fn new(gender: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            gender: gender.into(),
            status: status.into(),
        }
    }

    /// Returns `true` when neither field is restricted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gender.is_empty() && self.status.is_empty()
    }

    /// The selected value for `field`.
    #[must_use]
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Gender => &self.gender,
            FilterField::Status => &self.status,
        }
    }

    /// Applies the filter, see [`filter_by_fields`].
    pub fn apply<T, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: Filterable,
    {
        filter_by_fields(items, &self.gender, &self.status)
    }
}
