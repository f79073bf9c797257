use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the user's config base.
const APP_DIR: &str = "folio";

/// File name of the settings file.
pub const SETTINGS_FILE: &str = "settings.conf";

/// What: Candidate settings file locations in priority order.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set
///
/// Output:
/// - `$XDG_CONFIG_HOME/folio/settings.conf` first, then `$HOME/.config/folio/settings.conf`
pub(crate) fn settings_path_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(xdg) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join(APP_DIR).join(SETTINGS_FILE));
    }
    if let Some(h) = home {
        let path = Path::new(h).join(".config").join(APP_DIR).join(SETTINGS_FILE);
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

/// Determine the settings file path, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    settings_path_candidates(home.as_deref(), xdg_config.as_deref())
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_STATE_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Default log directory: "$XDG_STATE_HOME/folio/logs" or "$HOME/.local/state/folio/logs".
/// Not created here; the logging setup creates it on demand.
#[must_use]
pub fn logs_dir() -> PathBuf {
    xdg_base_dir("XDG_STATE_HOME", &[".local", "state"])
        .join(APP_DIR)
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_prefer_xdg() {
        let candidates = settings_path_candidates(Some("/home/u"), Some("/xdg"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/xdg/folio/settings.conf"),
                PathBuf::from("/home/u/.config/folio/settings.conf"),
            ]
        );
    }

    #[test]
    fn test_candidates_skip_blank_xdg_and_duplicates() {
        assert_eq!(
            settings_path_candidates(Some("/home/u"), Some("  ")),
            vec![PathBuf::from("/home/u/.config/folio/settings.conf")]
        );
        assert_eq!(
            settings_path_candidates(Some("/home/u"), Some("/home/u/.config")),
            vec![PathBuf::from("/home/u/.config/folio/settings.conf")]
        );
        assert!(settings_path_candidates(None, None).is_empty());
    }

    #[test]
    fn test_logs_dir_ends_with_app_logs() {
        assert!(logs_dir().ends_with("folio/logs"));
    }
}
