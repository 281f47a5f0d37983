//! `.env` loading (KEY=VALUE lines).

use std::path::{Path, PathBuf};

/// Parse `.env` content. Blank lines and `#` comments are skipped; values
/// may be wrapped in single or double quotes.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load the first `.env` found in the current directory or the workspace
/// root. Variables already set in the environment win. Returns the file used.
pub fn load() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/convo-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    candidates.into_iter().find(|path| apply(path))
}

fn apply(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    true
}
