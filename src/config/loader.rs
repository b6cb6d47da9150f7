//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{WardenError, WardenResult};

use super::types::Config;

/// Project configuration file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "apiwarden.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WardenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| WardenError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse configuration content that was read from `path`
pub fn parse_with_warnings(content: &str, path: &Path) -> WardenResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WardenError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file and load it.
///
/// An explicit path must exist. Otherwise the project file is used when
/// present, then `<user_config_dir>/apiwarden/config.toml`, then defaults.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: &Path,
    user_config_dir: Option<&Path>,
) -> WardenResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match resolve_config_path(explicit, project_root, user_config_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok((with_env_overrides(config, |key| std::env::var(key).ok()), warnings))
}

fn resolve_config_path(
    explicit: Option<&Path>,
    project_root: &Path,
    user_config_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Some(project_config);
    }

    let user_config = user_config_dir?.join("apiwarden/config.toml");
    user_config.exists().then_some(user_config)
}

/// Apply environment variable overrides (APIWARDEN_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // APIWARDEN_WINDOW
    if let Some(raw) = get_env("APIWARDEN_WINDOW") {
        match raw.trim().parse::<u64>() {
            Ok(window) => config.policy.window = window,
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid APIWARDEN_WINDOW"),
        }
    }

    // APIWARDEN_EXCLUDE (comma-separated)
    if let Some(raw) = get_env("APIWARDEN_EXCLUDE") {
        config.scope.exclude = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "policy",
        "rules",
        "window",
        "scope",
        "exclude",
        "include_non_public",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
