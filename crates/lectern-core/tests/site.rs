//! Integration tests over the public core API.

use std::collections::HashSet;

use lectern_core::{
    Config, PageFeatures, TopicKey, TopicRegistry, TypistState, breadcrumbs, is_feature_enabled,
    prefix_chain,
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_prefix_chain_examples() {
    assert_eq!(
        prefix_chain("/web/css/introduction").expect("rooted"),
        vec!["/web/css", "/web", "/"]
    );
    assert_eq!(prefix_chain("/").expect("rooted"), vec!["/"]);
}

#[test]
fn test_feature_membership_examples() {
    let chain = prefix_chain("/web/css/introduction").expect("rooted");

    let enabled: HashSet<String> = ["/web", "/sample"].into_iter().map(String::from).collect();
    assert!(is_feature_enabled(&enabled, &chain));

    let disabled: HashSet<String> = ["/other"].into_iter().map(String::from).collect();
    assert!(!is_feature_enabled(&disabled, &chain));
}

#[test]
fn test_every_bundled_article_has_assets_and_breadcrumbs() {
    let config = Config::default();
    let registry = TopicRegistry::bundled();

    for key in TopicKey::ALL {
        let topic = registry.load(key).expect("bundled topic loads");
        for link in topic.links() {
            let features =
                PageFeatures::for_path(&config.features, &link.path).expect("rooted link");
            assert!(features.syntax_highlighter, "{} should highlight", link.path);

            assert_eq!(
                registry.topic_for_path(&link.path).expect("rooted"),
                Some(key)
            );

            let trail = breadcrumbs(&config.site.title, &topic, &link.path);
            assert_eq!(trail.len(), 3);
            assert_eq!(trail[2].label, link.title);
        }
    }
}

#[test]
fn test_default_typist_cycles_default_phrases() {
    let config = Config::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut typist = TypistState::new(&config.typist, 0).expect("defaults are valid");

    let first = config.typist.phrases[0].clone();
    let step = config.typist.tick_interval_ms;
    for i in 1..=first.chars().count() as u64 {
        typist.tick(i * step, &mut rng);
    }
    assert_eq!(typist.displayed(), first);

    for i in 0..10_000u64 {
        let frame = typist.tick(10_000 + i * step, &mut rng);
        assert!(config.typist.phrases.iter().any(|p| p.starts_with(&frame.text)));
    }
}
