//! URL slugs derived from post titles.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters that are not letters, digits or underscores.
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static slug pattern compiles"));

/// Derive a slug from a title.
///
/// The title is lowercased, every maximal run of non-word characters becomes a
/// single `-`, and leading/trailing hyphens are stripped. Word characters are
/// Unicode-aware, so `"Café Ōsaka"` becomes `"café-ōsaka"`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_WORD_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
