//! Topic configuration context.
//!
//! [`TopicConfigProvider`] exposes the topic for a key to its descendants.
//! Until the topic is loaded, consumers see [`LoadedTopic::fallback`].

use std::sync::OnceLock;

use lectern_core::{LoadedTopic, TopicKey, TopicRegistry};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct TopicContext(Signal<LoadedTopic>);

/// Registry shared by every provider on the page.
pub fn topic_registry() -> &'static TopicRegistry {
    static REGISTRY: OnceLock<TopicRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TopicRegistry::bundled)
}

/// Resolve a key to the topic the view should show.
pub fn load_topic(registry: &TopicRegistry, key: Option<TopicKey>) -> LoadedTopic {
    let Some(key) = key else {
        return LoadedTopic::fallback();
    };

    match registry.load(key) {
        Ok(config) => LoadedTopic::loaded(config),
        Err(err) => {
            log::error!("Failed to load topic {key}: {err}");
            LoadedTopic::fallback()
        }
    }
}

/// Provides the topic selected by `topic` to descendant components.
#[component]
pub fn TopicConfigProvider(
    /// Topic to load; `None` keeps the fallback.
    #[prop(into)]
    topic: Signal<Option<TopicKey>>,
    children: Children,
) -> impl IntoView {
    let loaded = RwSignal::new(LoadedTopic::fallback());

    Effect::new(move |_| {
        let next = load_topic(topic_registry(), topic.get());
        if loaded.with_untracked(|current| *current != next) {
            loaded.set(next);
        }
    });

    provide_context(TopicContext(loaded.read_only().into()));
    children()
}

/// Topic provided by the nearest [`TopicConfigProvider`], or the fallback.
pub fn use_topic_config() -> Signal<LoadedTopic> {
    use_context::<TopicContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(LoadedTopic::fallback()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_topic_without_key_is_fallback() {
        let topic = load_topic(topic_registry(), None);
        assert!(!topic.is_loaded);
        assert_eq!(topic, LoadedTopic::fallback());
    }

    #[test]
    fn test_load_topic_with_key() {
        let topic = load_topic(topic_registry(), Some(TopicKey::Html));
        assert!(topic.is_loaded);
        assert_eq!(topic.config.title, "HTML");
    }

    #[test]
    fn test_load_topic_with_broken_source_falls_back() {
        let registry = TopicRegistry::with_sources([(TopicKey::Css, "not toml at all [")]);
        let topic = load_topic(&registry, Some(TopicKey::Css));
        assert!(!topic.is_loaded);
    }
}
