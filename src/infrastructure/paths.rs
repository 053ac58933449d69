//! Path helpers for the Zellij sandbox, where `/host` stands in for the
//! directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Directory name under `~/.local/share/zellij`.
const APP_DIR: &str = "catalog-admin";

/// File name of the OTLP trace export.
const TRACE_FILE: &str = "catalog-admin-otlp.json";

/// Returns the plugin data directory, `/host/.local/share/zellij/catalog-admin`.
///
/// ```
/// use catalog_admin::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/catalog-admin"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join(APP_DIR)
}

/// Path of the trace export file inside [`get_data_dir`].
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}

/// Expands a leading `~` to `/host`.
///
/// ```
/// use catalog_admin::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        let path = trace_file_path();
        assert_eq!(path.parent(), Some(get_data_dir().as_path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("catalog-admin-otlp.json"));
    }
}
