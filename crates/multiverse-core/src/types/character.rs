use serde::{Deserialize, Serialize};

use super::ids_from_urls;
use super::location::LocationRef;
use crate::options::{FilterField, Filterable};

/// A character as returned by `GET /character/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    /// "Alive", "Dead" or "unknown"; case is not consistent upstream.
    pub status: String,
    pub species: String,
    /// Subspecies or variant, often empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// "Female", "Male", "Genderless" or "unknown".
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Avatar image URL.
    pub image: String,
    /// URLs of the episodes the character appears in.
    #[serde(rename = "episode", default)]
    pub episodes: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Character {
    /// Ids of the episodes this character appears in, in API order.
    #[must_use]
    pub fn episode_ids(&self) -> Vec<u32> {
        ids_from_urls(&self.episodes)
    }

    /// Species with the subspecies in parentheses when there is one.
    #[must_use]
    pub fn species_label(&self) -> String {
        if self.kind.is_empty() {
            self.species.clone()
        } else {
            format!("{} ({})", self.species, self.kind)
        }
    }
}

impl Filterable for Character {
    fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Gender => &self.gender,
            FilterField::Status => &self.status,
        }
    }
}
