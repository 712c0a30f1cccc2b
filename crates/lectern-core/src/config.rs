//! Site configuration management.

use std::{collections::BTreeSet, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Lectern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Hero typing animation settings.
    #[serde(default)]
    pub typist: TypistConfig,

    /// Route prefixes enabling optional rendering assets.
    #[serde(default)]
    pub features: FeatureConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Typing animation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypistConfig {
    /// Phrases cycled through by the animation. Must not be empty.
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,

    /// How long a fully typed phrase stays on screen (milliseconds).
    #[serde(default = "default_sustain_ms")]
    pub sustain_ms: u64,

    /// Cursor blink period (milliseconds).
    #[serde(default = "default_cursor_blink_ms")]
    pub cursor_blink_ms: u64,

    /// Interval between animation ticks (milliseconds).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Feature flags keyed by route prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Prefixes under which the syntax highlighter is loaded.
    #[serde(default = "default_syntax_highlighter_paths")]
    pub syntax_highlighter: BTreeSet<String>,

    /// Prefixes under which the math renderer is loaded.
    #[serde(default = "default_math_paths")]
    pub math: BTreeSet<String>,
}

// Default value functions
fn default_title() -> String {
    "Lectern".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_phrases() -> Vec<String> {
    [
        "Average intelligence",
        "Short attention span",
        "1x performance",
        "Lackluster GPA",
        "Median salary",
        "Plain appetite",
        "Mediocre lifestyle",
        "Work-life balance",
        "Moderate expenses",
        "Unexciting diction",
        "Undistinguished looks",
        "Forgettable excuses",
        "8-hour of daily sleep",
        "Standard virtues",
        "Zero fear to copy-pasta",
        "Commendable modesty",
        "Basic needs",
        "Balanced diet",
        "Dry comedy",
        "Intact residence card",
        "Annoying habits",
        "Self-deprecating jokes",
        "Irony",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_sustain_ms() -> u64 {
    3000
}

fn default_cursor_blink_ms() -> u64 {
    800
}

fn default_tick_interval_ms() -> u64 {
    50
}

fn default_syntax_highlighter_paths() -> BTreeSet<String> {
    ["/web", "/sample"].into_iter().map(String::from).collect()
}

fn default_math_paths() -> BTreeSet<String> {
    ["/sample", "/web/css/data-type"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            description: None,
        }
    }
}

impl Default for TypistConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            sustain_ms: default_sustain_ms(),
            cursor_blink_ms: default_cursor_blink_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            syntax_highlighter: default_syntax_highlighter_paths(),
            math: default_math_paths(),
        }
    }
}

impl TypistConfig {
    /// Build a config with the given phrases and default timings.
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Interval between ticks as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate phrase list and timings.
    pub fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(CoreError::config("typist.phrases cannot be empty"));
        }

        for (name, value) in [
            ("typist.sustain_ms", self.sustain_ms),
            ("typist.cursor_blink_ms", self.cursor_blink_ms),
            ("typist.tick_interval_ms", self.tick_interval_ms),
        ] {
            if value == 0 {
                return Err(CoreError::config(format!("{name} must be greater than 0")));
            }
        }

        Ok(())
    }
}

impl FeatureConfig {
    fn validate(&self) -> Result<()> {
        for (name, prefixes) in [
            ("features.syntax_highlighter", &self.syntax_highlighter),
            ("features.math", &self.math),
        ] {
            if let Some(bad) = prefixes.iter().find(|p| !p.starts_with('/')) {
                return Err(CoreError::config(format!(
                    "{name} entry {bad:?} must start with '/'"
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text (e.g. a bundled `lectern.toml`).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, layering `LECTERN__*` env overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("LECTERN").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file with env overrides if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_with_env(path)
        } else {
            tracing::debug!(?path, "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        self.typist.validate()?;
        self.features.validate()?;
        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
