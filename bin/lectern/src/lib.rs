//! Lectern CLI Library
//!
//! Command implementations for the `lectern` binary, plus the Tokio runner
//! for the hero typing animation.
//!
//! # Modules
//!
//! - [`animator`] - Interval-driven typing animation with start/stop
//! - [`cmd`] - Command implementations (typist, features, chapters, check, serve)
//! - [`server`] - Static server for the built site
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use lectern::cmd;
//!
//! // Validate lectern.toml and the bundled topics
//! cmd::check::run(Path::new("lectern.toml"), false).unwrap();
//! ```

pub mod animator;
pub mod cmd;
pub mod server;

pub use animator::Animator;
pub use lectern_core::{Config, Frame};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
