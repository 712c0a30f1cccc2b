//! Topic configuration: chapter trees, colours and breadcrumbs.
//!
//! Each topic ships as a TOML document bundled into the binary. The registry
//! parses a topic the first time it is requested and hands out the cached
//! copy afterwards.

use std::{
    collections::HashSet,
    fmt,
    str::FromStr,
    sync::{Arc, OnceLock},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    route::prefix_chain,
};

/// Colour used for both accents before a topic has loaded.
pub const FALLBACK_COLOR: &str = "#34495e";

/// Identifier of a bundled topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKey {
    Css,
    Html,
}

impl TopicKey {
    /// All bundled topics.
    pub const ALL: [TopicKey; 2] = [TopicKey::Css, TopicKey::Html];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Html => "html",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Self::Css => include_str!("../topics/css.toml"),
            Self::Html => include_str!("../topics/html.toml"),
        }
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "html" => Ok(Self::Html),
            _ => Err(CoreError::topic(s, "unknown topic")),
        }
    }
}

/// A link to one article in the chapter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterLink {
    /// Display title.
    pub title: String,

    /// Route of the article.
    pub path: String,

    /// Optional status badge (e.g. "TODO").
    #[serde(default)]
    pub badge: Option<String>,
}

/// One entry of a topic's chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChapterGroup {
    /// Label separating two runs of chapters.
    Separator { separator: String },

    /// A chapter with its article links. Untitled chapters head the list.
    Chapter {
        #[serde(default)]
        title: Option<String>,
        links: Vec<ChapterLink>,
    },
}

impl ChapterGroup {
    /// Links of this group; separators have none.
    pub fn links(&self) -> &[ChapterLink] {
        match self {
            Self::Separator { .. } => &[],
            Self::Chapter { links, .. } => links,
        }
    }
}

/// Configuration of one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicConfig {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Route under which every article of the topic lives.
    pub base_path: String,

    #[serde(default = "fallback_color")]
    pub main_color: String,

    #[serde(default = "fallback_color")]
    pub accent_color: String,

    #[serde(default)]
    pub chapters: Vec<ChapterGroup>,
}

fn fallback_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl TopicConfig {
    /// Parse a topic from its TOML document and validate it.
    pub fn from_toml(topic: &str, source: &str) -> Result<Self> {
        let config: TopicConfig =
            toml::from_str(source).map_err(|e| CoreError::topic_parse(topic, e))?;
        config.validate(topic)?;
        Ok(config)
    }

    /// Iterate over every article link in sidebar order.
    pub fn links(&self) -> impl Iterator<Item = &ChapterLink> {
        self.chapters.iter().flat_map(ChapterGroup::links)
    }

    /// Find the link for an article route.
    pub fn find_link(&self, path: &str) -> Option<&ChapterLink> {
        let path = normalize(path);
        self.links().find(|link| link.path == path)
    }

    /// Whether `path` is the topic root or one of its descendants.
    pub fn contains_path(&self, path: &str) -> bool {
        if normalize(path) == self.base_path {
            return true;
        }
        prefix_chain(path)
            .map(|chain| chain.iter().any(|prefix| *prefix == self.base_path))
            .unwrap_or(false)
    }

    /// Check link paths and chapter structure.
    pub fn validate(&self, topic: &str) -> Result<()> {
        if self.title.is_empty() {
            return Err(CoreError::topic(topic, "title cannot be empty"));
        }
        if !self.base_path.starts_with('/') {
            return Err(CoreError::topic(topic, "base_path must start with '/'"));
        }

        let mut seen = HashSet::new();
        for group in &self.chapters {
            if let ChapterGroup::Chapter { title, links } = group {
                if links.is_empty() {
                    return Err(CoreError::topic(
                        topic,
                        format!(
                            "chapter {:?} has no links",
                            title.as_deref().unwrap_or("(untitled)")
                        ),
                    ));
                }
            }

            for link in group.links() {
                if !self.contains_path(&link.path) || link.path == self.base_path {
                    return Err(CoreError::topic(
                        topic,
                        format!("{} is outside {}", link.path, self.base_path),
                    ));
                }
                if !seen.insert(link.path.as_str()) {
                    return Err(CoreError::topic(
                        topic,
                        format!("duplicate link path {}", link.path),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// A topic as seen by the view: the placeholder until loading completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTopic {
    pub is_loaded: bool,
    pub config: Arc<TopicConfig>,
}

impl LoadedTopic {
    /// Placeholder rendered before the topic is available.
    pub fn fallback() -> Self {
        Self {
            is_loaded: false,
            config: Arc::new(TopicConfig {
                title: String::new(),
                description: String::new(),
                base_path: "/".to_string(),
                main_color: fallback_color(),
                accent_color: fallback_color(),
                chapters: Vec::new(),
            }),
        }
    }

    pub fn loaded(config: Arc<TopicConfig>) -> Self {
        Self {
            is_loaded: true,
            config,
        }
    }
}

impl Default for LoadedTopic {
    fn default() -> Self {
        Self::fallback()
    }
}

struct TopicEntry {
    key: TopicKey,
    source: &'static str,
    parsed: OnceLock<Arc<TopicConfig>>,
}

/// Lazily parsed topic configurations keyed by [`TopicKey`].
pub struct TopicRegistry {
    entries: Vec<TopicEntry>,
}

impl TopicRegistry {
    /// Registry over the topics bundled with the crate.
    pub fn bundled() -> Self {
        Self::with_sources(TopicKey::ALL.map(|key| (key, key.source())))
    }

    /// Registry over custom TOML sources.
    pub fn with_sources(sources: impl IntoIterator<Item = (TopicKey, &'static str)>) -> Self {
        Self {
            entries: sources
                .into_iter()
                .map(|(key, source)| TopicEntry {
                    key,
                    source,
                    parsed: OnceLock::new(),
                })
                .collect(),
        }
    }

    /// Keys known to this registry.
    pub fn keys(&self) -> impl Iterator<Item = TopicKey> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    /// Load a topic, parsing it on first access.
    pub fn load(&self, key: TopicKey) -> Result<Arc<TopicConfig>> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| CoreError::topic(key.as_str(), "topic is not registered"))?;

        if let Some(config) = entry.parsed.get() {
            return Ok(Arc::clone(config));
        }

        tracing::debug!(topic = %key, "Loading topic configuration");
        let config = Arc::new(TopicConfig::from_toml(key.as_str(), entry.source)?);
        Ok(Arc::clone(entry.parsed.get_or_init(|| config)))
    }

    /// Resolve the topic owning a route.
    pub fn topic_for_path(&self, path: &str) -> Result<Option<TopicKey>> {
        prefix_chain(path)?;
        for key in self.keys() {
            if self.load(key)?.contains_path(path) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Breadcrumb trail from the site root through the topic to the article.
///
/// The topic and article steps are left out when they do not resolve.
pub fn breadcrumbs(site_label: &str, topic: &TopicConfig, path: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::new(site_label, "/")];

    if topic.title.is_empty() || !topic.contains_path(path) {
        return trail;
    }
    trail.push(Breadcrumb::new(&topic.title, &topic.base_path));

    if let Some(link) = topic.find_link(path) {
        trail.push(Breadcrumb::new(&link.title, &link.path));
    }
    trail
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
