//! # Multiverse Core
//!
//! Entity types for the Rick and Morty REST API and the pure, client-side
//! data shaping applied to them: array coercion, filter option derivation,
//! status/gender filtering and season grouping.
//!
//! ## Quick Start
//!
//! ```rust
//! use multiverse_core::{derive_options, filter_by_fields, FilterField, Filterable};
//!
//! #[derive(Debug, PartialEq)]
//! struct Row {
//!     gender: &'static str,
//!     status: &'static str,
//! }
//!
//! impl Filterable for Row {
//!     fn field(&self, field: FilterField) -> &str {
//!         match field {
//!             FilterField::Gender => self.gender,
//!             FilterField::Status => self.status,
//!         }
//!     }
//! }
//!
//! let rows = vec![
//!     Row { gender: "Female", status: "Alive" },
//!     Row { gender: "Male", status: "Dead" },
//! ];
//!
//! let options = derive_options(FilterField::Gender, &rows, None);
//! assert_eq!(options[0].name, "Female");
//! assert_eq!(options[0].value, "female");
//!
//! let alive = filter_by_fields(&rows, "", "alive");
//! assert_eq!(alive, vec![&rows[0]]);
//! ```
pub mod catalogue;
pub mod coerce;
pub mod error;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod season;
pub mod strings;
pub mod types;

// Re-export primary API
pub use catalogue::{FilterDefinition, GENDER, NO_FILTER_RESULTS, SEASON, STATUS};
pub use coerce::{OneOrMany, to_array};
pub use error::{CoreError, Result};
pub use filter::{CharacterFilter, filter_by_fields};
pub use options::{
    FilterField, FilterOption, Filterable, derive_options, rank_by_options, rank_by_reference,
    with_all,
};
pub use pagination::{Pagination, parse_page};
pub use season::{SeasonGroup, group_by_season, season_key};
pub use strings::{id_from_url, last_url_part, title_case};
pub use types::{Character, Episode, EpisodeCode, Location, LocationRef, Page, PageInfo};
