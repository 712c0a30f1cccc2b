//! Features command - show which optional assets a route loads

use std::{fmt::Write, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use lectern_core::{Config, PageFeatures, TopicRegistry, prefix_chain};

/// Run the features command.
pub fn run(config_path: &Path, route: &str) -> Result<()> {
    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    print!("{}", describe(&config, &TopicRegistry::bundled(), route)?);
    Ok(())
}

/// Human-readable report of the prefix chain and feature flags for `route`.
pub fn describe(config: &Config, registry: &TopicRegistry, route: &str) -> Result<String> {
    let chain = prefix_chain(route).wrap_err_with(|| format!("Cannot resolve {route}"))?;
    let features = PageFeatures::for_path(&config.features, route)?;
    let topic = registry.topic_for_path(route)?;
    tracing::debug!(route, ?chain, ?features, "Evaluated route");

    let mark = |on: bool| if on { "on" } else { "off" };
    let mut out = String::new();
    writeln!(out, "Route: {route}")?;
    writeln!(out, "Prefixes: {}", chain.join(" → "))?;
    writeln!(
        out,
        "Topic: {}",
        topic.map_or_else(|| "none".to_string(), |key| key.to_string())
    )?;
    writeln!(out, "Syntax highlighter: {}", mark(features.syntax_highlighter))?;
    writeln!(out, "Math: {}", mark(features.math))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_css_article() {
        let report = describe(
            &Config::default(),
            &TopicRegistry::bundled(),
            "/web/css/data-type/length",
        )
        .unwrap();

        assert!(report.contains("Prefixes: /web/css/data-type → /web/css → /web → /"));
        assert!(report.contains("Topic: css"));
        assert!(report.contains("Syntax highlighter: on"));
        assert!(report.contains("Math: on"));
    }

    #[test]
    fn test_describe_root() {
        let report = describe(&Config::default(), &TopicRegistry::bundled(), "/").unwrap();
        assert!(report.contains("Prefixes: /\n"));
        assert!(report.contains("Topic: none"));
        assert!(report.contains("Syntax highlighter: off"));
    }

    #[test]
    fn test_describe_rejects_relative_route() {
        let err = describe(&Config::default(), &TopicRegistry::bundled(), "web/css").unwrap_err();
        assert!(err.to_string().contains("Cannot resolve web/css"));
    }
}
