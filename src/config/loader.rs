use std::fs;
use std::path::{Path, PathBuf};

use super::{BodyscaleConfig, BoundsConfig};
use crate::core::ConfigError;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".bodyscale.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse config from a TOML string.
///
/// Invalid bounds are not fatal: they are reported and replaced with the
/// defaults so the form always starts.
pub fn parse_and_validate_config(contents: &str) -> Result<BodyscaleConfig, ConfigError> {
    let mut config = toml::from_str::<BodyscaleConfig>(contents)?;

    if let Err(e) = config.bounds.validate() {
        log::warn!("{}. Using default bounds.", e);
        config.bounds = BoundsConfig::default();
    }

    Ok(config)
}

/// Load config from an explicit path. Errors are returned to the caller.
pub fn load_config_from(path: &Path) -> Result<BodyscaleConfig, ConfigError> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BodyscaleConfig> {
    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(ConfigError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Directory and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.bodyscale.toml` starting at `start`, or use defaults.
pub fn load_config_in(start: PathBuf) -> BodyscaleConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BodyscaleConfig::default()
        })
}

/// Find config from the current directory upwards.
pub fn load_config() -> BodyscaleConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_in(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BodyscaleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldBounds;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_and_validate_config(indoc! {"
            [bounds.weight]
            min = 30.0
            max = 300.0
        "})
        .unwrap();

        assert_eq!(config.bounds.weight, FieldBounds::new(30.0, 300.0));
        assert_eq!(config.bounds.height, FieldBounds::height_defaults());
        assert_eq!(config.display.highlight_ms, 600);
    }

    #[test]
    fn test_invalid_bounds_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {"
            [bounds.height]
            min = 300.0
            max = 100.0

            [display]
            show_legend = false
        "})
        .unwrap();

        assert_eq!(config.bounds, BoundsConfig::default());
        assert!(!config.display.show_legend);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = parse_and_validate_config("[bounds.height\nmin = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_in_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[display]\nhighlight_ms = 42\n",
        )
        .unwrap();

        let config = load_config_in(nested);
        assert_eq!(config.display.highlight_ms, 42);
    }

    #[test]
    fn test_load_config_from_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
