use serde::{Deserialize, Serialize};

use crate::types::Episode;

/// Episodes sharing a season key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonGroup {
    /// The season key: the first digit of the season in the episode code.
    pub number: String,
    pub episodes: Vec<Episode>,
}

/// Season key of an episode code: the character at index 2 of `S01E01`.
///
/// Only the first season digit is read, so `S10E01` shares the key `"1"`
/// with `S01E01`. Codes shorter than three characters have an empty key.
#[must_use]
pub fn season_key(code: &str) -> String {
    code.chars().nth(2).map(String::from).unwrap_or_default()
}

/// Partitions episodes into season groups.
///
/// Groups appear in the order their key is first seen and each group keeps
/// the input order of its episodes.
pub fn group_by_season<I>(episodes: I) -> Vec<SeasonGroup>
where
    I: IntoIterator<Item = Episode>,
{
    let mut groups: Vec<SeasonGroup> = Vec::new();
    for episode in episodes {
        let key = season_key(&episode.code);
        match groups.iter_mut().find(|group| group.number == key) {
            Some(group) => group.episodes.push(episode),
            None => groups.push(SeasonGroup {
                number: key,
                episodes: vec![episode],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: u32, code: &str) -> Episode {
        Episode {
            id,
            name: format!("Episode {id}"),
            air_date: String::new(),
            code: code.to_string(),
            characters: Vec::new(),
            url: format!("https://rickandmortyapi.com/api/episode/{id}"),
            created: String::new(),
        }
    }

    fn ids(group: &SeasonGroup) -> Vec<u32> {
        group.episodes.iter().map(|e| e.id).collect()
    }

    #[test]
    fn groups_by_season_in_first_seen_order() {
        let groups = group_by_season(vec![
            episode(1, "S01E01"),
            episode(2, "S01E02"),
            episode(3, "S02E01"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].number, "1");
        assert_eq!(ids(&groups[0]), vec![1, 2]);
        assert_eq!(groups[1].number, "2");
        assert_eq!(ids(&groups[1]), vec![3]);
    }

    #[test]
    fn insertion_order_not_numeric_order() {
        let groups = group_by_season(vec![
            episode(22, "S03E01"),
            episode(1, "S01E01"),
            episode(23, "S03E02"),
        ]);
        let keys: Vec<_> = groups.iter().map(|g| g.number.as_str()).collect();
        assert_eq!(keys, ["3", "1"]);
        assert_eq!(ids(&groups[0]), vec![22, 23]);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_by_season(Vec::new()).is_empty());
    }

    #[test]
    fn two_digit_seasons_share_the_first_digit_key() {
        let groups = group_by_season(vec![episode(1, "S01E01"), episode(99, "S10E01")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].number, "1");
        assert_eq!(ids(&groups[0]), vec![1, 99]);
    }

    #[test]
    fn short_codes_use_empty_key() {
        assert_eq!(season_key("S0"), "");
        assert_eq!(season_key(""), "");
        assert_eq!(season_key("S05E10"), "5");
        let groups = group_by_season(vec![episode(1, "X"), episode(2, "")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].number, "");
    }
}
