/// Characters that are not allowed in file or directory names
const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Build the canonical episode filename `Title SxxExx.ext`.
///
/// Season and episode are zero-padded to at least two digits.
pub fn build_episode_name(title: &str, season: u32, episode: u32, extension: &str) -> String {
    format!("{} S{:02}E{:02}{}", title, season, episode, extension)
}

/// Remove characters that are illegal in filesystem names, then trim
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !INVALID_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
