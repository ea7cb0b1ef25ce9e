//! # Multiverse
//!
//! Umbrella crate: the entity types and data shaping of
//! [`multiverse_core`] together with the HTTP client of [`multiverse_api`].
pub use multiverse_api as api;
pub use multiverse_core as model;

pub use multiverse_api::{ApiClient, ApiError, ClientConfig, QueryKey};
pub use multiverse_core::{
    Character, CharacterFilter, Episode, FilterField, FilterOption, Location, Page, SeasonGroup,
    derive_options, filter_by_fields, group_by_season, title_case, to_array,
};
