use serde::{Deserialize, Serialize};

use super::{empty_as_none, ids_from_urls};
use crate::strings::id_from_url;

/// A location as returned by `GET /location/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub dimension: String,
    /// URLs of the characters last seen here.
    #[serde(default)]
    pub residents: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Location {
    /// Ids of the residents, in API order.
    #[must_use]
    pub fn resident_ids(&self) -> Vec<u32> {
        ids_from_urls(&self.residents)
    }
}

/// A character's origin or last known location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    /// Absent when the location is unknown.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
}

impl LocationRef {
    /// Id of the referenced location, if it is a known one.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.url.as_deref().and_then(id_from_url)
    }
}
