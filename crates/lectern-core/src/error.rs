//! Error types for the Lectern core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Lectern.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A route path that cannot be walked (not rooted at `/`).
    #[error("Invalid path {path:?}: {message}")]
    InvalidPath { path: String, message: String },

    /// Bundled topic configuration could not be loaded.
    #[error("Topic error in {topic}: {message}")]
    Topic { topic: String, message: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A topic document is not valid TOML for the topic schema.
    #[error("Topic error in {topic}: {source}")]
    TopicParse {
        topic: String,
        #[source]
        source: toml::de::Error,
    },

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new invalid path error.
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a topic parse error keeping the TOML span information.
    pub fn topic_parse(topic: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TopicParse {
            topic: topic.into(),
            source,
        }
    }

    /// Create a new topic error.
    pub fn topic(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Topic {
            topic: topic.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("phrases cannot be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("phrases cannot be empty"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = CoreError::invalid_path("web/css", "path must start with '/'");
        assert!(err.to_string().contains("Invalid path"));
        assert!(err.to_string().contains("\"web/css\""));
    }

    #[test]
    fn test_topic_error() {
        let err = CoreError::topic("css", "missing title");
        assert!(err.to_string().contains("Topic error in css"));
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn test_topic_parse_error_keeps_source() {
        let toml_err = toml::from_str::<toml::Table>("title = [").unwrap_err();
        let err = CoreError::topic_parse("css", toml_err);
        assert!(err.to_string().starts_with("Topic error in css: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
