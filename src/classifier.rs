use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::patterns::{EPISODE_PATTERNS, SEASON_PATTERNS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no digit run present")]
    NoDigits,
    #[error("digit run out of range: {0}")]
    OutOfRange(#[from] ParseIntError),
}

/// Parses the leftmost maximal run of decimal digits in `text`.
pub fn extract_number(text: &str) -> Result<u32, ExtractError> {
    static DIGIT_RUN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d+").expect("invalid digit pattern"));

    let run = DIGIT_RUN.find(text).ok_or(ExtractError::NoDigits)?;
    Ok(run.as_str().parse()?)
}

/// Outcome of classifying one name against a pattern list.
///
/// `NoMatch` is the expected result for names outside the naming convention
/// and is not an error. `ExtractFailed` means a pattern matched but its
/// captured text yielded no integer; the attempt counts as no-match for the
/// caller, after a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<T> {
    Matched(T),
    NoMatch,
    ExtractFailed { matched: String, error: ExtractError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonLabel {
    pub number: u32,
    /// Canonical directory name, `Season {n}` with n unpadded.
    pub label: String,
}

/// Classifies a directory name against the season patterns.
pub fn classify_season(dir_name: &str) -> Classified<SeasonLabel> {
    for pattern in SEASON_PATTERNS.iter() {
        let Some(found) = pattern.find(dir_name) else {
            continue;
        };
        // First matching pattern decides; an extraction failure does not
        // fall through to looser patterns.
        return match extract_number(found.as_str()) {
            Ok(number) => Classified::Matched(SeasonLabel {
                label: format!("Season {number}"),
                number,
            }),
            Err(error) => Classified::ExtractFailed {
                matched: found.as_str().to_string(),
                error,
            },
        };
    }
    Classified::NoMatch
}

/// Classifies a file name against the episode patterns, producing the
/// normalized `S{ss}E{ee}.{suffix}` name on a match.
///
/// The season number comes from the enclosing directory's classification and
/// is never re-derived from the file name. Season and episode are padded to a
/// minimum of two digits each; wider values keep their natural width. The
/// suffix is everything after the last `.` of the original name; a name with
/// no `.` gets an empty suffix and the result ends with a bare `.`.
pub fn classify_episode(file_name: &str, season: u32) -> Classified<String> {
    let suffix = file_name
        .rsplit_once('.')
        .map(|(_, suffix)| suffix)
        .unwrap_or("");

    for pattern in EPISODE_PATTERNS.iter() {
        let Some(found) = pattern.find(file_name) else {
            continue;
        };
        return match extract_number(found.as_str()) {
            Ok(episode) => {
                Classified::Matched(format!("S{season:02}E{episode:02}.{suffix}"))
            }
            Err(error) => Classified::ExtractFailed {
                matched: found.as_str().to_string(),
                error,
            },
        };
    }
    Classified::NoMatch
}
