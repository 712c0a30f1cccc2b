//! Chapters command - print a topic's chapter tree

use std::fmt::Write;

use color_eyre::eyre::{Result, WrapErr};
use lectern_core::{ChapterGroup, TopicConfig, TopicKey, TopicRegistry};

/// Run the chapters command.
pub fn run(topic: &str) -> Result<()> {
    let key: TopicKey = topic.parse()?;
    let config = TopicRegistry::bundled()
        .load(key)
        .wrap_err_with(|| format!("Failed to load topic {key}"))?;

    print!("{}", render_tree(&config)?);
    Ok(())
}

/// Render the chapter tree as indented text.
pub fn render_tree(topic: &TopicConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{} ({})", topic.title, topic.base_path)?;

    for group in &topic.chapters {
        match group {
            ChapterGroup::Separator { separator } => {
                writeln!(out, "── {separator} ──")?;
            }
            ChapterGroup::Chapter { title, links } => {
                let indent = match title {
                    Some(title) => {
                        writeln!(out, "{title}")?;
                        "    "
                    }
                    None => "  ",
                };
                for link in links {
                    write!(out, "{indent}{}  {}", link.title, link.path)?;
                    if let Some(badge) = &link.badge {
                        write!(out, "  [{badge}]")?;
                    }
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(out)
}
