//! Check command - validate configuration and topic chapters

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use lectern_core::{Config, TopicConfig, TopicRegistry, is_feature_enabled, prefix_chain};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every bundled topic.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and topics");

    let result = validate(config_path, &TopicRegistry::bundled());

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect errors and warnings without printing a summary.
pub fn validate(config_path: &Path, registry: &TopicRegistry) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = if config_path.exists() {
        match Config::load_with_env(config_path) {
            Ok(c) => {
                println!("  ✓ Configuration valid");
                Some(c)
            }
            Err(e) => {
                result.add_error(format!("Configuration error: {e}"));
                println!("  ✗ Configuration invalid: {e}");
                None
            }
        }
    } else {
        result.add_warning(format!(
            "{} not found, using default configuration",
            config_path.display()
        ));
        Some(Config::default())
    };

    println!("\nChecking topics...");
    let mut topics = Vec::new();
    for key in registry.keys() {
        match registry.load(key) {
            Ok(topic) => {
                let pending = topic.links().filter(|link| link.badge.is_some()).count();
                println!(
                    "  ✓ {key}: {} articles ({pending} marked)",
                    topic.links().count()
                );
                topics.push(topic);
            }
            Err(e) => {
                result.add_error(e.to_string());
                println!("  ✗ {key}: {e}");
            }
        }
    }

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &topics, &mut result);
    }

    result
}

/// Check configuration values against the loaded topics.
fn check_config_values<T: AsRef<TopicConfig>>(
    config: &Config,
    topics: &[T],
    result: &mut ValidationResult,
) {
    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    let article_paths: Vec<&str> = topics
        .iter()
        .flat_map(|topic| topic.as_ref().links())
        .map(|link| link.path.as_str())
        .collect();

    for (name, prefixes) in [
        ("features.syntax_highlighter", &config.features.syntax_highlighter),
        ("features.math", &config.features.math),
    ] {
        for prefix in prefixes {
            let single: std::collections::BTreeSet<&str> = [prefix.as_str()].into();
            let used = article_paths.iter().any(|path| {
                prefix_chain(path)
                    .map(|chain| is_feature_enabled(&single, &chain))
                    .unwrap_or(false)
            });
            if !used {
                result.add_warning(format!("{name} prefix {prefix} matches no article"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::TopicKey;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("lectern.toml");
        std::fs::write(&path, content).expect("write");
        (dir, path)
    }

    #[test]
    fn test_validate_clean_config() {
        let (_dir, path) = write_config(
            r#"
[site]
title = "Test"
base_url = "https://example.com"

[features]
syntax_highlighter = ["/web"]
math = ["/web/css/data-type"]
"#,
        );

        let result = validate(&path, &TopicRegistry::bundled());
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
    }

    #[test]
    fn test_validate_warns_on_unused_prefix() {
        let (_dir, path) = write_config(
            r#"
[site]
title = "Test"
base_url = "https://example.com/"
"#,
        );

        let result = validate(&path, &TopicRegistry::bundled());
        assert!(!result.has_errors());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("trailing slash"))
        );
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w == "features.math prefix /sample matches no article")
        );
    }

    #[test]
    fn test_validate_reports_invalid_config() {
        let (_dir, path) = write_config("[typist]\nphrases = []\n");
        let result = validate(&path, &TopicRegistry::bundled());
        assert!(result.errors.iter().any(|e| e.contains("phrases cannot be empty")));
    }

    #[test]
    fn test_validate_reports_broken_topic() {
        let (_dir, path) = write_config("[site]\ntitle = \"T\"\nbase_url = \"https://e.com\"\n");
        let registry = TopicRegistry::with_sources([(TopicKey::Css, "title = [")]);
        let result = validate(&path, &registry);
        assert!(result.errors.iter().any(|e| e.contains("Topic error in css")));
    }

    #[test]
    fn test_missing_config_is_a_warning() {
        let result = validate(
            Path::new("/nonexistent/lectern.toml"),
            &TopicRegistry::bundled(),
        );
        assert!(!result.has_errors());
        assert!(result.warnings.iter().any(|w| w.contains("not found")));
    }

    #[test]
    fn test_strict_mode_fails_on_warnings() {
        let err = run(Path::new("/nonexistent/lectern.toml"), true).unwrap_err();
        assert!(err.to_string().contains("strict mode"));
    }
}
