//! Configuration for the form: field bounds and display settings.
//!
//! Configuration is optional. Without a `.bodyscale.toml` every value falls
//! back to its default, and the defaults reproduce the fixed height range
//! (50-250 cm) and weight range (20-500 kg).

pub mod bounds;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use bounds::{BoundsConfig, FieldBounds};
pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyscaleConfig {
    #[serde(default)]
    pub bounds: BoundsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings for the terminal form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How long the result card stays highlighted after a computation
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,

    /// Show the category legend under the form
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_ms: default_highlight_ms(),
            show_legend: default_show_legend(),
        }
    }
}

impl DisplayConfig {
    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

fn default_highlight_ms() -> u64 {
    600
}
fn default_show_legend() -> bool {
    true
}

/// Contents written by `bodyscale init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# Bodyscale Configuration

[bounds.height]
# centimeters
min = 50.0
max = 250.0

[bounds.weight]
# kilograms
min = 20.0
max = 500.0

[display]
highlight_ms = 600
show_legend = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: BodyscaleConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, BodyscaleConfig::default());
    }

    #[test]
    fn test_highlight_duration() {
        let display = DisplayConfig {
            highlight_ms: 250,
            show_legend: false,
        };
        assert_eq!(display.highlight_duration(), Duration::from_millis(250));
    }
}
