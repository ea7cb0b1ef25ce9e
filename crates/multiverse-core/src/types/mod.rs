pub mod character;
pub mod episode;
pub mod location;
pub mod page;

pub use character::Character;
pub use episode::{Episode, EpisodeCode};
pub use location::{Location, LocationRef};
pub use page::{Page, PageInfo};

use serde::{Deserialize, Deserializer};

use crate::strings::id_from_url;

/// Deserializes a string field, mapping the empty string to `None`.
///
/// The API sends `""` rather than `null` for unknown origins and locations.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Numeric ids at the end of a list of resource URLs, skipping malformed ones.
pub(crate) fn ids_from_urls(urls: &[String]) -> Vec<u32> {
    urls.iter().filter_map(|url| id_from_url(url)).collect()
}
