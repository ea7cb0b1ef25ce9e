//! Multiverse
//!
//! Browses characters, episodes and locations of the Rick and Morty API
//! from the terminal.

mod render;
mod views;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use multiverse_api::{ApiClient, ClientConfig, DEFAULT_BASE_URL};
use multiverse_core::{
    CharacterFilter, FilterDefinition, GENDER, Page, SEASON, STATUS, parse_page,
};

use crate::views::{
    CastView, CharacterView, EPISODE_NO_RESULTS, EpisodeView, FilterPanel, LOCATION_NO_RESULTS,
    ListView, LocationView,
};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "multiverse")]
#[command(about = "Browse the Rick and Morty API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API root
    #[arg(long, global = true, env = "MULTIVERSE_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "MULTIVERSE_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List characters
    Characters {
        /// Page number; invalid values mean the first page
        #[arg(short, long)]
        page: Option<String>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show one character and the episodes they appear in
    Character { id: u32 },
    /// List episodes
    Episodes {
        /// Page number; invalid values mean the first page
        #[arg(short, long)]
        page: Option<String>,
        /// Season code, e.g. s01
        #[arg(short, long, default_value = "")]
        season: String,
    },
    /// Show one episode and its cast
    Episode {
        id: u32,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List locations
    Locations {
        /// Page number; invalid values mean the first page
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Show one location and its residents
    Location {
        id: u32,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Character filter flags
#[derive(Args, Debug, Clone, Default)]
struct FilterArgs {
    /// Gender: female, male, genderless or unknown
    #[arg(short, long, default_value = "")]
    gender: String,
    /// Status: alive, dead or unknown
    #[arg(long, default_value = "")]
    status: String,
}

impl FilterArgs {
    fn to_filter(&self) -> CharacterFilter {
        warn_unknown(&GENDER, &self.gender);
        warn_unknown(&STATUS, &self.status);
        CharacterFilter::new(self.gender.as_str(), self.status.as_str())
    }
}

fn warn_unknown(definition: &FilterDefinition, value: &str) {
    if !definition.is_known_value(value) {
        warn!(
            filter = definition.search_param,
            value, "unknown filter value, results will likely be empty"
        );
    }
}

/// Text or JSON for a view.
fn output<T: Serialize>(json: bool, view: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    if json {
        serde_json::to_string_pretty(view).context("Failed to serialize output")
    } else {
        Ok(text(view))
    }
}

/// A list page, or an empty page when the API has nothing for the query.
fn list_or_empty<T>(result: multiverse_api::Result<Page<T>>) -> Result<Page<T>> {
    match result {
        Ok(page) => Ok(page),
        Err(err) if err.is_not_found() => {
            debug!(error = %err, "empty list");
            Ok(Page {
                info: Default::default(),
                results: Vec::new(),
            })
        }
        Err(err) => Err(err).context("Failed to fetch list"),
    }
}

/// Gender first, then status.
fn character_panels(filter: &CharacterFilter) -> Vec<FilterPanel> {
    vec![
        FilterPanel::canonical(&GENDER, &filter.gender),
        FilterPanel::canonical(&STATUS, &filter.status),
    ]
}

async fn run(cli: Cli) -> Result<String> {
    let config = ClientConfig::new()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout));
    let client = ApiClient::new(&config).context("Failed to build API client")?;
    let json = cli.json;

    match cli.command {
        Commands::Characters { page, filter } => {
            let page = parse_page(page.as_deref());
            let filter = filter.to_filter();
            let list = list_or_empty(client.characters(page, &filter).await)?;
            let panels = character_panels(&filter);
            output(json, &ListView::new(page, list, panels), render::character_list)
        }
        Commands::Character { id } => {
            let character = client
                .character(id)
                .await
                .with_context(|| format!("Failed to fetch character {id}"))?;
            let episodes = client
                .episodes_by_ids(&character.episode_ids())
                .await
                .with_context(|| format!("Failed to fetch episodes of character {id}"))?;
            output(
                json,
                &CharacterView::build(character, episodes),
                render::character_detail,
            )
        }
        Commands::Episodes { page, season } => {
            let page = parse_page(page.as_deref());
            warn_unknown(&SEASON, &season);
            let list = list_or_empty(client.episodes(page, &season).await)?;
            let panels = vec![FilterPanel::canonical(&SEASON, &season)];
            output(json, &ListView::new(page, list, panels), render::episode_list)
        }
        Commands::Episode { id, filter } => {
            let filter = filter.to_filter();
            let episode = client
                .episode(id)
                .await
                .with_context(|| format!("Failed to fetch episode {id}"))?;
            let cast = client
                .characters_by_ids(&episode.character_ids())
                .await
                .with_context(|| format!("Failed to fetch cast of episode {id}"))?;
            let view = EpisodeView {
                episode,
                cast: CastView::build(cast, &filter).with_no_results_text(EPISODE_NO_RESULTS),
            };
            output(json, &view, render::episode_detail)
        }
        Commands::Locations { page } => {
            let page = parse_page(page.as_deref());
            let list = list_or_empty(client.locations(page).await)?;
            output(
                json,
                &ListView::new(page, list, Vec::new()),
                render::location_list,
            )
        }
        Commands::Location { id, filter } => {
            let filter = filter.to_filter();
            let location = client
                .location(id)
                .await
                .with_context(|| format!("Failed to fetch location {id}"))?;
            let residents = client
                .characters_by_ids(&location.resident_ids())
                .await
                .with_context(|| format!("Failed to fetch residents of location {id}"))?;
            let view = LocationView {
                location,
                residents: CastView::build(residents, &filter)
                    .with_no_results_text(LOCATION_NO_RESULTS),
            };
            output(json, &view, render::location_detail)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out = run(cli).await?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}
