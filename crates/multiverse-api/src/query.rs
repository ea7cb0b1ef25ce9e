//! # Query Keys
//!
//! One variant per request shape. A key fully determines the request path
//! and query string, so two equal keys always denote the same response.

use std::fmt;

use multiverse_core::CharacterFilter;

/// Identifies a single API request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `GET /character?page=&status=&gender=`
    Characters {
        page: u32,
        status: String,
        gender: String,
    },
    /// `GET /character/{id}`
    Character { id: u32 },
    /// `GET /character/{id},{id},...`
    CharactersByIds { ids: Vec<u32> },
    /// `GET /episode?page=&episode=`
    Episodes { page: u32, season: String },
    /// `GET /episode/{id}`
    Episode { id: u32 },
    /// `GET /episode/{id},{id},...`
    EpisodesByIds { ids: Vec<u32> },
    /// `GET /location?page=`
    Locations { page: u32 },
    /// `GET /location/{id}`
    Location { id: u32 },
    /// `GET /location/{id},{id},...`
    LocationsByIds { ids: Vec<u32> },
}

impl QueryKey {
    /// Key for a page of characters narrowed by `filter`.
    #[must_use]
    pub fn characters(page: u32, filter: &CharacterFilter) -> Self {
        Self::Characters {
            page: page.max(1),
            status: filter.status.to_lowercase(),
            gender: filter.gender.to_lowercase(),
        }
    }

    /// Key for a page of episodes, `season` being a code prefix like `s01`.
    #[must_use]
    pub fn episodes(page: u32, season: &str) -> Self {
        Self::Episodes {
            page: page.max(1),
            season: season.to_lowercase(),
        }
    }

    /// Key for a page of locations.
    #[must_use]
    pub fn locations(page: u32) -> Self {
        Self::Locations { page: page.max(1) }
    }

    /// The path below the API root, without a leading slash.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Characters { .. } => "character".to_string(),
            Self::Character { id } => format!("character/{id}"),
            Self::CharactersByIds { ids } => format!("character/{}", join_ids(ids)),
            Self::Episodes { .. } => "episode".to_string(),
            Self::Episode { id } => format!("episode/{id}"),
            Self::EpisodesByIds { ids } => format!("episode/{}", join_ids(ids)),
            Self::Locations { .. } => "location".to_string(),
            Self::Location { id } => format!("location/{id}"),
            Self::LocationsByIds { ids } => format!("location/{}", join_ids(ids)),
        }
    }

    /// Query string pairs; empty filter values are left out.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        match self {
            Self::Characters {
                page,
                status,
                gender,
            } => {
                pairs.push(("page", page.to_string()));
                push_non_empty(&mut pairs, "status", status);
                push_non_empty(&mut pairs, "gender", gender);
            }
            Self::Episodes { page, season } => {
                pairs.push(("page", page.to_string()));
                push_non_empty(&mut pairs, "episode", season);
            }
            Self::Locations { page } => pairs.push(("page", page.to_string())),
            _ => {}
        }
        pairs
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())?;
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "?{}", query.join("&"))?;
        }
        Ok(())
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((name, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn character_list_key() {
        let key = QueryKey::characters(2, &CharacterFilter::new("Female", "ALIVE"));
        assert_eq!(key.path(), "character");
        assert_eq!(
            key.query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("status", "alive".to_string()),
                ("gender", "female".to_string()),
            ]
        );
        assert_eq!(key.to_string(), "character?page=2&status=alive&gender=female");
    }

    #[test]
    fn empty_filters_are_omitted() {
        let key = QueryKey::characters(0, &CharacterFilter::default());
        assert_eq!(key.to_string(), "character?page=1");

        let key = QueryKey::episodes(3, "");
        assert_eq!(key.to_string(), "episode?page=3");
    }

    #[test]
    fn season_filter_uses_episode_param() {
        let key = QueryKey::episodes(1, "S02");
        assert_eq!(key.to_string(), "episode?page=1&episode=s02");
    }

    #[test]
    fn single_and_multiple_paths() {
        assert_eq!(QueryKey::Character { id: 7 }.to_string(), "character/7");
        assert_eq!(QueryKey::Location { id: 3 }.path(), "location/3");
        let key = QueryKey::EpisodesByIds { ids: vec![1, 2, 28] };
        assert_eq!(key.to_string(), "episode/1,2,28");
        assert_eq!(QueryKey::locations(4).to_string(), "location?page=4");
    }

    #[test]
    fn keys_are_structural() {
        let mut seen = HashSet::new();
        assert!(seen.insert(QueryKey::characters(1, &CharacterFilter::new("male", ""))));
        assert!(!seen.insert(QueryKey::characters(1, &CharacterFilter::new("MALE", ""))));
        assert!(seen.insert(QueryKey::characters(2, &CharacterFilter::new("male", ""))));
    }
}
