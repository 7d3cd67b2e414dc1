mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// Season/episode markers, tried in order
// Examples: "S2 - 13", "S2_13", "S02-13", "S02E13", "s2e13"
static SEPARATED_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S([0-9]+)\s*[-_ ]\s*([0-9]+)").unwrap());
static COMBINED_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S([0-9]+)E([0-9]+)").unwrap());

// [<tag>] <title> <marker> ...
static TITLE_WITH_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\[.*?\]\s*(.*?)\s*(?:S[0-9]+\s*[-_ ]\s*[0-9]+|S[0-9]+E[0-9]+)").unwrap()
});

// [<tag>] <title> [...]  (no marker, title runs up to the next bracket)
static TITLE_WITHOUT_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.*?\]\s*([^\[]*)").unwrap());

// Bracketed episode number: "[05]", "[7]"
static BRACKET_EPISODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([0-9]{1,2})\]").unwrap());

/// Extract `(season, episode)` from a filename.
///
/// Tries the separated form (`S2 - 13`) before the combined form (`S02E13`).
/// Returns `None` when neither marker is present.
pub fn extract_season_episode(filename: &str) -> Option<(u32, u32)> {
    [&*SEPARATED_MARKER_REGEX, &*COMBINED_MARKER_REGEX]
        .iter()
        .find_map(|regex| {
            let captures = regex.captures(filename)?;
            let season = captures.get(1)?.as_str().parse().ok()?;
            let episode = captures.get(2)?.as_str().parse().ok()?;
            Some((season, episode))
        })
}

/// Recover an episode number from a bracketed one or two digit token
pub fn extract_bracket_episode(filename: &str) -> Option<u32> {
    BRACKET_EPISODE_REGEX
        .captures(filename)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse an episode filename into title, season, episode and extension
pub fn parse_episode_filename(name: &str) -> Result<EpisodeFilename, ParseError> {
    let extension = split_extension(name);
    let stem = &name[..name.len() - extension.len()];

    let title = match TITLE_WITH_MARKER_REGEX.captures(name) {
        Some(captures) => captures.get(1).map(|m| m.as_str().trim()),
        None => TITLE_WITHOUT_MARKER_REGEX
            .captures(stem)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim()),
    };

    let title = match title {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(ParseError::PatternMismatch(name.to_string())),
    };

    let (season, episode, season_defaulted) = match extract_season_episode(name) {
        Some((season, episode)) => (season, episode, false),
        None => match extract_bracket_episode(name) {
            Some(episode) => (1, episode, true),
            None => return Err(ParseError::ExtractionFailure(name.to_string())),
        },
    };

    Ok(EpisodeFilename {
        title,
        season,
        episode,
        extension: extension.to_string(),
        season_defaulted,
    })
}

/// Last dot-suffix of a filename, including the dot.
///
/// A suffix containing whitespace is part of the title, not an extension.
fn split_extension(name: &str) -> &str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.chars().any(char::is_whitespace) => &name[name.len() - ext.len() - 1..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Season/Episode Extraction ============

    #[test]
    fn test_extract_combined_marker() {
        assert_eq!(extract_season_episode("Show S02E13.mkv"), Some((2, 13)));
        assert_eq!(extract_season_episode("Show S2E13.mkv"), Some((2, 13)));
    }

    #[test]
    fn test_extract_separated_marker() {
        assert_eq!(extract_season_episode("[G] Show S2 - 13.mkv"), Some((2, 13)));
        assert_eq!(extract_season_episode("[G] Show S2_13.mkv"), Some((2, 13)));
        assert_eq!(extract_season_episode("[G] Show S2-13.mkv"), Some((2, 13)));
        assert_eq!(extract_season_episode("[G] Show S2 13.mkv"), Some((2, 13)));
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        assert_eq!(extract_season_episode("show s03e07.mp4"), Some((3, 7)));
        assert_eq!(extract_season_episode("show s3 - 7.mp4"), Some((3, 7)));
    }

    #[test]
    fn test_extract_ignores_leading_zeros() {
        assert_eq!(extract_season_episode("S001E0009"), Some((1, 9)));
        assert_eq!(extract_season_episode("S00-00"), Some((0, 0)));
    }

    #[test]
    fn test_extract_long_numbers() {
        assert_eq!(extract_season_episode("Show S1E1050"), Some((1, 1050)));
    }

    #[test]
    fn test_extract_separated_form_wins() {
        // Both forms present: the separated form is tried first
        assert_eq!(extract_season_episode("S01E02 S3 - 4"), Some((3, 4)));
    }

    #[test]
    fn test_extract_not_found() {
        assert_eq!(extract_season_episode("[Group] My Show [05].mkv"), None);
        assert_eq!(extract_season_episode("Season finale.mkv"), None);
        assert_eq!(extract_season_episode(""), None);
    }

    #[test]
    fn test_extract_overflow_is_not_found() {
        assert_eq!(extract_season_episode("S99999999999E1"), None);
    }

    #[test]
    fn test_extract_bracket_episode() {
        assert_eq!(extract_bracket_episode("[Group] Show [05][1080p].mkv"), Some(5));
        assert_eq!(extract_bracket_episode("[Group] Show [7].mkv"), Some(7));
        assert_eq!(extract_bracket_episode("[Group] Show [1080p].mkv"), None);
        assert_eq!(extract_bracket_episode("[Group] Show [123].mkv"), None);
    }

    // ============ Filename Parsing ============

    #[test]
    fn test_parse_with_marker() {
        let parsed = parse_episode_filename("[Group] My Show S01E05 [Extra].mkv").unwrap();

        assert_eq!(parsed.title, "My Show");
        assert_eq!(parsed.season, 1);
        assert_eq!(parsed.episode, 5);
        assert_eq!(parsed.extension, ".mkv");
        assert!(!parsed.season_defaulted);
        assert_eq!(parsed.canonical_name(), "My Show S01E05.mkv");
    }

    #[test]
    fn test_parse_separated_marker() {
        let parsed = parse_episode_filename("[Sub] Frieren S2 - 13 [1080p].mp4").unwrap();

        assert_eq!(parsed.title, "Frieren");
        assert_eq!(parsed.season, 2);
        assert_eq!(parsed.episode, 13);
        assert_eq!(parsed.canonical_name(), "Frieren S02E13.mp4");
    }

    #[test]
    fn test_parse_chinese_title() {
        let parsed = parse_episode_filename("[字幕组] 葬送的芙莉莲 S01E28 [简体].mkv").unwrap();
        assert_eq!(parsed.canonical_name(), "葬送的芙莉莲 S01E28.mkv");
    }

    #[test]
    fn test_parse_falls_back_to_bracket_episode() {
        let parsed = parse_episode_filename("[Group] My Show [05][1080p].mkv").unwrap();

        assert_eq!(parsed.title, "My Show");
        assert_eq!(parsed.season, 1);
        assert_eq!(parsed.episode, 5);
        assert!(parsed.season_defaulted);
        assert_eq!(parsed.canonical_name(), "My Show S01E05.mkv");
    }

    #[test]
    fn test_parse_extraction_failure() {
        let result = parse_episode_filename("[Group] My Show [1080p].mkv");
        assert!(matches!(result, Err(ParseError::ExtractionFailure(_))));

        let result = parse_episode_filename("[Group] My Show.mkv");
        assert!(matches!(result, Err(ParseError::ExtractionFailure(_))));
    }

    #[test]
    fn test_parse_requires_leading_tag() {
        let result = parse_episode_filename("My Show S01E05.mkv");
        assert!(matches!(result, Err(ParseError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_requires_title() {
        let result = parse_episode_filename("[Group] S01E05.mkv");
        assert!(matches!(result, Err(ParseError::PatternMismatch(_))));

        let result = parse_episode_filename("[Group][05].mkv");
        assert!(matches!(result, Err(ParseError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_pads_to_two_digits() {
        let parsed = parse_episode_filename("[G] Long Runner S12E105.mkv").unwrap();
        assert_eq!(parsed.canonical_name(), "Long Runner S12E105.mkv");
    }

    #[test]
    fn test_parse_without_extension() {
        let parsed = parse_episode_filename("[G] Show S01E02").unwrap();
        assert_eq!(parsed.extension, "");
        assert_eq!(parsed.canonical_name(), "Show S01E02");
    }

    #[test]
    fn test_parse_keeps_last_extension_verbatim() {
        let parsed = parse_episode_filename("[G] Show S01E02.ass.MKV").unwrap();
        assert_eq!(parsed.extension, ".MKV");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.mkv"), ".mkv");
        assert_eq!(split_extension("a.b.mp4"), ".mp4");
        assert_eq!(split_extension("noext"), "");
        assert_eq!(split_extension(".hidden"), "");
        assert_eq!(split_extension("[G] Mr. Show S01E01"), "");
    }

    #[test]
    fn test_parse_error_file_name() {
        let err = parse_episode_filename("plain.mkv").unwrap_err();
        assert_eq!(err.file_name(), "plain.mkv");
    }
}
