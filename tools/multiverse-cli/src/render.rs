//! Plain-text rendering of the view models.

use multiverse_core::{Character, Episode, Location, LocationRef, NO_FILTER_RESULTS, SEASON};

use crate::views::{
    CastView, CharacterView, EpisodeView, FilterPanel, ListView, LocationView,
};

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn filter_lines(panels: &[FilterPanel]) -> Vec<String> {
    panels
        .iter()
        .map(|panel| {
            let choices: Vec<String> = panel
                .options
                .iter()
                .map(|option| {
                    if option.value == panel.selected {
                        format!("[{}]", option.name)
                    } else {
                        option.name.clone()
                    }
                })
                .collect();
            format!(
                "{} (--{}): {}",
                panel.label,
                panel.search_param,
                choices.join(" | ")
            )
        })
        .collect()
}

fn character_line(character: &Character) -> String {
    format!(
        "{:>4}  {} ({}, {}, {})",
        character.id, character.name, character.status, character.gender, character.species
    )
}

fn episode_line(episode: &Episode) -> String {
    format!(
        "{:>4}  {}  {} ({})",
        episode.id, episode.code, episode.name, episode.air_date
    )
}

fn location_ref(location: &LocationRef) -> String {
    match location.id() {
        Some(id) => format!("{} (location {id})", location.name),
        None => location.name.clone(),
    }
}

/// Renders a list screen with a caller-supplied line format.
pub fn list<T>(title: &str, view: &ListView<T>, line: impl Fn(&T) -> String) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(filter_lines(&view.filters));
    lines.push(format!("Count: {}", view.count));
    if view.results.is_empty() {
        lines.push(NO_FILTER_RESULTS.to_string());
        return finish(lines);
    }
    lines.extend(view.results.iter().map(line));

    let p = &view.pagination;
    let mut footer = format!("Page {p}");
    if let Some(prev) = p.prev_page() {
        footer.push_str(&format!("  prev: --page {prev}"));
    }
    if let Some(next) = p.next_page() {
        footer.push_str(&format!("  next: --page {next}"));
    }
    lines.push(footer);
    finish(lines)
}

pub fn character_list(view: &ListView<Character>) -> String {
    list("Characters", view, character_line)
}

pub fn episode_list(view: &ListView<Episode>) -> String {
    list("Episodes", view, episode_line)
}

pub fn location_list(view: &ListView<Location>) -> String {
    list("Locations", view, |location| {
        format!(
            "{:>4}  {} ({}, {})",
            location.id, location.name, location.kind, location.dimension
        )
    })
}

fn cast_lines(heading: &str, view: &CastView) -> Vec<String> {
    let mut lines = vec![String::new(), format!("{heading} ({})", view.total)];
    if view.total == 0 {
        return lines;
    }
    lines.extend(filter_lines(&view.filters));
    match view.empty_text() {
        Some(text) => lines.push(text.to_string()),
        None => lines.extend(view.characters.iter().map(character_line)),
    }
    lines
}

pub fn character_detail(view: &CharacterView) -> String {
    let c = &view.character;
    let mut lines = vec![
        c.name.clone(),
        format!("Image: {}", c.image),
        format!("Species: {}", c.species_label()),
        format!("Gender: {}", c.gender),
        format!("Status: {}", c.status),
        format!("Origin: {}", location_ref(&c.origin)),
        format!("Location: {}", location_ref(&c.location)),
        String::new(),
    ];

    let count = view.episode_count();
    let noun = if count == 1 { "Episode" } else { "Episodes" };
    lines.push(format!("{count} {noun}"));
    for season in &view.seasons {
        lines.push(format!("Season {}", season.number));
        lines.extend(season.episodes.iter().map(episode_line));
    }
    finish(lines)
}

pub fn episode_detail(view: &EpisodeView) -> String {
    let e = &view.episode;
    let mut lines = vec![
        format!("{} - {}", e.code, e.name),
        format!("Air date: {}", e.air_date),
    ];
    if let Ok(code) = e.parsed_code() {
        let season = format!("s{:02}", code.season);
        let label = SEASON
            .label_for(&season)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Season {}", code.season));
        lines.push(format!("{label}, episode {}", code.episode));
    }
    lines.extend(cast_lines("Characters", &view.cast));
    finish(lines)
}

pub fn location_detail(view: &LocationView) -> String {
    let l = &view.location;
    let mut lines = vec![
        l.name.clone(),
        format!("Type: {}", l.kind),
        format!("Dimension: {}", l.dimension),
    ];
    lines.extend(cast_lines("Residents", &view.residents));
    finish(lines)
}
