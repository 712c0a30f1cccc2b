//! Typist command - run the hero typing animation in the terminal

use std::{io::Write, path::Path, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use lectern_core::{Config, Frame};

use crate::animator::Animator;

/// Run the typist command.
///
/// Renders frames until Ctrl+C, or until `duration` elapses when given.
pub async fn run(config_path: &Path, duration: Option<Duration>) -> Result<()> {
    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    tracing::info!(?duration, phrases = config.typist.phrases.len(), "Starting typist");

    let animator = Animator::start(&config.typist).wrap_err("Failed to start typist")?;
    let mut frames = animator.subscribe();

    let deadline = async {
        match duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut stdout = std::io::stdout();
    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = &mut deadline => break,
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                render(&mut stdout, &frame)?;
            }
        }
    }

    animator.stop().await;
    println!();
    Ok(())
}

/// Redraw the current terminal line with the frame.
fn render(out: &mut impl Write, frame: &Frame) -> std::io::Result<()> {
    let cursor = if frame.cursor_visible { '▏' } else { ' ' };
    write!(out, "\r\x1b[2K  {}{cursor}", frame.text)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_cursor() {
        let mut out = Vec::new();
        let frame = Frame {
            text: "Dry com".to_string(),
            cursor_visible: true,
        };
        render(&mut out, &frame).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\r\x1b[2K  Dry com▏");
    }

    #[test]
    fn test_render_without_cursor() {
        let mut out = Vec::new();
        render(&mut out, &Frame::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\r\x1b[2K   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_after_duration() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("lectern.toml");
        std::fs::write(&config_path, "[typist]\nphrases = [\"ok\"]\n").expect("write");

        run(&config_path, Some(Duration::from_millis(500)))
            .await
            .expect("typist run");
    }
}
