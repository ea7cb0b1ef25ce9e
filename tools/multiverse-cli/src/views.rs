//! View models assembled from fetched data, one per screen.

use serde::Serialize;

use multiverse_core::{
    Character, CharacterFilter, Episode, FilterDefinition, FilterField, FilterOption, Location,
    NO_FILTER_RESULTS, Page, Pagination, SeasonGroup, derive_options, group_by_season,
    rank_by_options, with_all,
};

/// One filter control: its label, choices and current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPanel {
    pub label: &'static str,
    pub search_param: &'static str,
    pub selected: String,
    pub options: Vec<FilterOption>,
}

impl FilterPanel {
    /// A panel offering every canonical option of `definition`.
    pub fn canonical(definition: &FilterDefinition, selected: &str) -> Self {
        Self {
            label: definition.label,
            search_param: definition.search_param,
            selected: selected.to_lowercase(),
            options: definition.options(),
        }
    }

    /// A panel offering only the values present in `characters`, in
    /// canonical order, behind the "All" sentinel.
    pub fn derived(field: FilterField, characters: &[Character], selected: &str) -> Self {
        let definition = field.definition();
        let reference = definition.options();
        let order = rank_by_options(&reference);
        let derived = derive_options(field, characters, Some(&order));
        Self {
            label: definition.label,
            search_param: definition.search_param,
            selected: selected.to_lowercase(),
            options: with_all(definition, derived),
        }
    }
}

/// A paginated list screen.
#[derive(Debug, Clone, Serialize)]
pub struct ListView<T> {
    pub count: u32,
    pub page: u32,
    pub total_pages: u32,
    pub filters: Vec<FilterPanel>,
    pub results: Vec<T>,
    #[serde(skip)]
    pub pagination: Pagination,
}

impl<T> ListView<T> {
    pub fn new(page: u32, list: Page<T>, filters: Vec<FilterPanel>) -> Self {
        let pagination = Pagination::from_info(page, &list.info);
        Self {
            count: list.info.count,
            page,
            total_pages: list.info.pages,
            filters,
            results: list.results,
            pagination,
        }
    }

    /// The screen shown when the API has nothing for the query.
    pub fn empty(page: u32, filters: Vec<FilterPanel>) -> Self {
        Self::new(
            page,
            Page {
                info: Default::default(),
                results: Vec::new(),
            },
            filters,
        )
    }
}

/// Shown on an episode page when the filters leave no characters.
pub const EPISODE_NO_RESULTS: &str = "No characters in this episode that match those filters.";
/// Shown on a location page when the filters leave no residents.
pub const LOCATION_NO_RESULTS: &str = "No residents that match those filters.";

/// The characters attached to an episode or location, narrowed by the
/// selected filters.
#[derive(Debug, Clone, Serialize)]
pub struct CastView {
    /// Number of characters before filtering.
    pub total: usize,
    pub filters: Vec<FilterPanel>,
    pub characters: Vec<Character>,
    #[serde(skip)]
    no_results_text: Option<&'static str>,
}

impl CastView {
    /// Options are derived from the whole cast, before filtering.
    pub fn build(cast: Vec<Character>, filter: &CharacterFilter) -> Self {
        let filters = vec![
            FilterPanel::derived(FilterField::Gender, &cast, &filter.gender),
            FilterPanel::derived(FilterField::Status, &cast, &filter.status),
        ];
        let total = cast.len();
        Self {
            total,
            filters,
            characters: filter.apply(cast),
            no_results_text: None,
        }
    }

    /// Replaces the generic "Nothing found" text for this page.
    pub fn with_no_results_text(mut self, text: &'static str) -> Self {
        self.no_results_text = Some(text);
        self
    }

    /// Text to show instead of an empty list, if the filter removed everyone.
    pub fn empty_text(&self) -> Option<&'static str> {
        (self.total > 0 && self.characters.is_empty())
            .then(|| self.no_results_text.unwrap_or(NO_FILTER_RESULTS))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterView {
    pub character: Character,
    pub seasons: Vec<SeasonGroup>,
}

impl CharacterView {
    pub fn build(character: Character, episodes: Vec<Episode>) -> Self {
        Self {
            character,
            seasons: group_by_season(episodes),
        }
    }

    pub fn episode_count(&self) -> usize {
        self.character.episodes.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeView {
    pub episode: Episode,
    pub cast: CastView,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationView {
    pub location: Location,
    pub residents: CastView,
}
