use thiserror::Error;

use crate::rename::build_episode_name;

/// Season/episode information parsed from an episode filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeFilename {
    /// Show title between the leading tag and the marker
    pub title: String,
    pub season: u32,
    pub episode: u32,
    /// Extension including the leading dot, empty when the name has none
    pub extension: String,
    /// True when no marker was found and the season fell back to 1
    pub season_defaulted: bool,
}

impl EpisodeFilename {
    /// Canonical `Title SxxExx.ext` name for this episode
    pub fn canonical_name(&self) -> String {
        build_episode_name(&self.title, self.season, self.episode, &self.extension)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Filename does not match the '[tag] Title SxxExx' pattern: {0}")]
    PatternMismatch(String),

    #[error("Could not determine the episode number: {0}")]
    ExtractionFailure(String),
}

impl ParseError {
    pub fn file_name(&self) -> &str {
        match self {
            ParseError::PatternMismatch(name) => name,
            ParseError::ExtractionFailure(name) => name,
        }
    }
}
