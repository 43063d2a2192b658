//! Configuration path utilities for cms-console.
//!
//! This module provides functions for resolving the site definition path
//! and expanding shell variables like `~` in configured paths.

/// Default path for the site definition file
const DEFAULT_SITE_PATH: &str = "~/.cms-console/site.yml";

/// Resolves the site definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// site definition path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `site_path_arg` - Optional custom site definition file path
///
/// # Returns
///
/// The resolved path to the site definition file
///
/// # Examples
///
/// ```
/// use cms_console_core::config::get_site_path;
///
/// // Use default path
/// let default_path = get_site_path(None);
///
/// // Use custom path
/// let custom_path = get_site_path(Some("/path/to/site.yml"));
/// assert_eq!(custom_path, "/path/to/site.yml");
/// ```
#[must_use]
pub fn get_site_path(site_path_arg: Option<&str>) -> String {
    let site_path = site_path_arg.unwrap_or(DEFAULT_SITE_PATH);

    shellexpand::tilde(site_path).to_string()
}

/// Expands shell variables in an optional configured path.
///
/// Returns None if no path is provided.
#[must_use]
pub fn expand_path(path: Option<&str>) -> Option<String> {
    path.map(|path| shellexpand::tilde(path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_site_path_with_custom_path() {
        let result = get_site_path(Some("/custom/path/site.yml"));
        assert_eq!(result, "/custom/path/site.yml");
    }

    #[test]
    fn test_get_site_path_with_none() {
        let result = get_site_path(None);
        // Should expand the tilde in the default path
        assert!(result.contains("site.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_site_path_with_tilde() {
        let result = get_site_path(Some("~/my-site.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-site.yml"));
    }

    #[test]
    fn test_expand_path_with_some() {
        let result = expand_path(Some("~/content/nodes.yml"));

        assert!(result.is_some());
        let expanded = result.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("content/nodes.yml"));
    }

    #[test]
    fn test_expand_path_with_none() {
        assert!(expand_path(None).is_none());
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let result = expand_path(Some("/absolute/path"));
        assert_eq!(result, Some("/absolute/path".to_string()));
    }
}
