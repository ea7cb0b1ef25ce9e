use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ids_from_urls;
use crate::error::{CoreError, Result};

static EPISODE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)S(\d{2})E(\d{2})$").expect("static episode code pattern")
});

/// An episode as returned by `GET /episode/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Human readable air date, e.g. "December 2, 2013".
    pub air_date: String,
    /// Structured label of the form `S01E01`.
    #[serde(rename = "episode")]
    pub code: String,
    /// URLs of the characters seen in the episode.
    #[serde(default)]
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Episode {
    /// Ids of the characters seen in this episode, in API order.
    #[must_use]
    pub fn character_ids(&self) -> Vec<u32> {
        ids_from_urls(&self.characters)
    }

    /// Parses the structured label into season and episode numbers.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidEpisodeCode` if the label is not `S{2}E{2}`.
    pub fn parsed_code(&self) -> Result<EpisodeCode> {
        self.code.parse()
    }
}

/// Season and episode numbers decoded from a label such as `S03E07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpisodeCode {
    pub season: u8,
    pub episode: u8,
}

impl FromStr for EpisodeCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidEpisodeCode { code: s.to_string() };
        let caps = EPISODE_CODE.captures(s.trim()).ok_or_else(invalid)?;
        let season = caps[1].parse().map_err(|_| invalid())?;
        let episode = caps[2].parse().map_err(|_| invalid())?;
        Ok(Self { season, episode })
    }
}

impl fmt::Display for EpisodeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PILOT: &str = r#"{
        "id": 1,
        "name": "Pilot",
        "air_date": "December 2, 2013",
        "episode": "S01E01",
        "characters": [
            "https://rickandmortyapi.com/api/character/1",
            "https://rickandmortyapi.com/api/character/2",
            "https://rickandmortyapi.com/api/character/35"
        ],
        "url": "https://rickandmortyapi.com/api/episode/1",
        "created": "2017-11-10T12:56:33.798Z"
    }"#;

    #[test]
    fn deserializes_api_payload() {
        let pilot: Episode = serde_json::from_str(PILOT).unwrap();
        assert_eq!(pilot.code, "S01E01");
        assert_eq!(pilot.character_ids(), vec![1, 2, 35]);
    }

    #[test]
    fn parses_episode_code() {
        let code: EpisodeCode = "S03E07".parse().unwrap();
        assert_eq!(code, EpisodeCode { season: 3, episode: 7 });
        assert_eq!(code.to_string(), "S03E07");

        let lower: EpisodeCode = "s10e01".parse().unwrap();
        assert_eq!(lower.season, 10);
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "S1E1", "E01", "S01E01x", "Season 1"] {
            let err = bad.parse::<EpisodeCode>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidEpisodeCode { .. }), "{bad}");
        }
    }

    #[test]
    fn episode_exposes_parsed_code() {
        let pilot: Episode = serde_json::from_str(PILOT).unwrap();
        assert_eq!(pilot.parsed_code().unwrap().episode, 1);
    }
}
