//! String helpers shared by option derivation and entity cross-references.

/// Capitalizes the first character and lowercases the rest.
///
/// ```
/// use multiverse_core::title_case;
///
/// assert_eq!(title_case("hello world"), "Hello world");
/// assert_eq!(title_case("ALIVE"), "Alive");
/// assert_eq!(title_case(""), "");
/// ```
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Returns the part of a URL after the last `/`.
///
/// ```
/// use multiverse_core::last_url_part;
///
/// assert_eq!(last_url_part("https://rickandmortyapi.com/api/character/24"), "24");
/// ```
#[must_use]
pub fn last_url_part(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Parses the trailing numeric id of a resource URL.
#[must_use]
pub fn id_from_url(url: &str) -> Option<u32> {
    last_url_part(url).parse().ok()
}
