//! Lectern CLI
//!
//! Terminal tools for the Lectern documentation site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Lectern.
#[derive(Parser)]
#[command(
    name = "lectern",
    version,
    about = "Tools for the Lectern documentation site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "lectern.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Play the hero typing animation in the terminal
    Typist {
        /// Stop after this many milliseconds (default: run until Ctrl+C)
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Show the prefix chain and enabled features for a route
    Features {
        /// Route to evaluate (e.g., /web/css/introduction)
        path: String,
    },
    /// Print the chapter tree of a topic
    Chapters {
        /// Topic key (css, html)
        topic: String,
    },
    /// Validate configuration and topics
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Serve the built site locally
    Serve {
        /// Directory containing the built site
        #[arg(short, long, default_value = "target/site")]
        dir: std::path::PathBuf,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    lectern::init_tracing(cli.verbose);

    match cli.command {
        Commands::Typist { duration_ms } => {
            lectern::cmd::typist::run(&cli.config, duration_ms.map(Duration::from_millis)).await?;
        }
        Commands::Features { path } => {
            lectern::cmd::features::run(&cli.config, &path)?;
        }
        Commands::Chapters { topic } => {
            lectern::cmd::chapters::run(&topic)?;
        }
        Commands::Check { strict } => {
            lectern::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Serve { dir, port, open } => {
            lectern::cmd::serve::run(&dir, port, open).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_typist_command_parsing() {
        let args = ["lectern", "typist", "--duration-ms", "2500"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("lectern.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Typist { duration_ms } => assert_eq!(duration_ms, Some(2500)),
            _ => panic!("Expected Typist command"),
        }
    }

    #[test]
    fn test_cli_typist_runs_forever_by_default() {
        let cli = Cli::parse_from(["lectern", "typist"]);
        match cli.command {
            Commands::Typist { duration_ms } => assert!(duration_ms.is_none()),
            _ => panic!("Expected Typist command"),
        }
    }

    #[test]
    fn test_cli_features_command_parsing() {
        let cli = Cli::parse_from(["lectern", "features", "/web/css/introduction"]);
        match cli.command {
            Commands::Features { path } => assert_eq!(path, "/web/css/introduction"),
            _ => panic!("Expected Features command"),
        }
    }

    #[test]
    fn test_cli_chapters_command_parsing() {
        let cli = Cli::parse_from(["lectern", "chapters", "html"]);
        match cli.command {
            Commands::Chapters { topic } => assert_eq!(topic, "html"),
            _ => panic!("Expected Chapters command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["lectern", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_serve_command_parsing() {
        let cli = Cli::parse_from(["lectern", "serve", "--port", "8080", "--open"]);
        match cli.command {
            Commands::Serve { dir, port, open } => {
                assert_eq!(dir, std::path::PathBuf::from("target/site"));
                assert_eq!(port, 8080);
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["lectern", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["lectern", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
