use std::sync::LazyLock;

use regex::Regex;

/// Pre-compiled season token patterns, checked in order; the first pattern
/// with a match wins. Two-digit forms run before their one-digit variants so
/// that `S12` is captured whole instead of as `S1`. Matching is deliberately
/// case-sensitive here: lowercase `s05`-style directory names are not
/// recognized.
pub static SEASON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"S\d{2}",
        r"S\d{1}",
        r"S \d{2}",
        r"S \d{1}",
        r"Season\d{2}",
        r"Season\d{1}",
        r"Season \d{2}",
        r"Season \d{1}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid season pattern"))
    .collect()
});

/// Pre-compiled episode token patterns, same precedence rules as
/// [`SEASON_PATTERNS`]. Lowercase forms are separate entries tried after the
/// uppercase ones.
pub static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"E\d{2}",
        r"E\d{1}",
        r"E \d{2}",
        r"E \d{1}",
        r"Episode \d{2}",
        r"Episode \d{1}",
        r"e\d{2}",
        r"e\d{1}",
        r"e \d{2}",
        r"e \d{1}",
        r"episode \d{2}",
        r"episode \d{1}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid episode pattern"))
    .collect()
});
