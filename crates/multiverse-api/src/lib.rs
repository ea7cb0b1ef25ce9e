//! # Multiverse API
//!
//! Async client for the public Rick and Morty REST API
//! (<https://rickandmortyapi.com/documentation>). Every request is described
//! by a [`QueryKey`]; responses decode into the entity types of
//! [`multiverse_core`].
//!
//! ```no_run
//! use multiverse_api::{ApiClient, ClientConfig};
//! use multiverse_core::{group_by_season, CharacterFilter};
//!
//! # async fn run() -> multiverse_api::Result<()> {
//! let client = ApiClient::new(&ClientConfig::default())?;
//!
//! let page = client.characters(1, &CharacterFilter::new("female", "alive")).await?;
//! println!("{} matching characters", page.info.count);
//!
//! let rick = client.character(1).await?;
//! let episodes = client.episodes_by_ids(&rick.episode_ids()).await?;
//! for season in group_by_season(episodes) {
//!     println!("Season {}: {} episodes", season.number, season.episodes.len());
//! }
//! # Ok(())
//! # }
//! ```
mod characters;
mod client;
mod episodes;
mod error;
mod locations;
pub mod query;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL, USER_AGENT};
pub use error::ApiError;
pub use query::QueryKey;

pub type Result<T> = std::result::Result<T, ApiError>;
