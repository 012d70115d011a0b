//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! which points at the directory Zellij was started from (usually the user's
//! home directory).

use std::path::PathBuf;

/// Returns the default data directory for RozgarHub.
///
/// Resolves to `/host/.local/share/zellij/rozgarhub`, i.e.
/// `~/.local/share/zellij/rozgarhub` on the host. The listing slots and the
/// trace file live here.
///
/// # Examples
///
/// ```
/// use rozgarhub::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/rozgarhub"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("rozgarhub")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use rozgarhub::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/boards"), "/host/boards");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
