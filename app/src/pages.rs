//! Page components: the hero home page and topic article pages.

use std::sync::Arc;

use lectern_core::{Config, TopicConfig, TopicKey, breadcrumbs};
use lectern_ui::{
    Breadcrumbs, ChapterSidebar, TopicConfigProvider, Typist, topic_registry, use_topic_config,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

/// Landing page with the typing hero and one card per topic.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<Arc<Config>>();
    let topics: Vec<Arc<TopicConfig>> = TopicKey::ALL
        .into_iter()
        .filter_map(|key| topic_registry().load(key).ok())
        .collect();

    view! {
      <section class="lectern-hero">
        <h1 class="lectern-hero-title">{config.site.title.clone()}</h1>
        <Typist config=config.typist.clone() />
        {config
          .site
          .description
          .clone()
          .map(|description| view! { <p class="lectern-hero-description">{description}</p> })}
      </section>

      <section class="lectern-topics">
        {topics.iter().map(|topic| topic_card(topic)).collect_view()}
      </section>
    }
}

fn topic_card(topic: &TopicConfig) -> impl IntoView + use<> {
    // Cards open the first article; a topic without articles opens its root.
    let href = topic
        .links()
        .next()
        .map(|link| link.path.clone())
        .unwrap_or_else(|| topic.base_path.clone());

    view! {
      <a class="lectern-topic-card" href=href style=format!("border-color: {}", topic.main_color)>
        <h2>{topic.title.clone()}</h2>
        <p>{topic.description.clone()}</p>
      </a>
    }
}

/// Article page under `/web/:topic`.
#[component]
pub fn TopicPage() -> impl IntoView {
    let params = use_params_map();
    let topic = Signal::derive(move || {
        params
            .with(|params| params.get("topic"))
            .and_then(|key| key.parse::<TopicKey>().ok())
    });

    view! {
      <TopicConfigProvider topic=topic>
        <TopicLayout />
      </TopicConfigProvider>
    }
}

#[component]
fn TopicLayout() -> impl IntoView {
    let config = expect_context::<Arc<Config>>();
    let location = use_location();
    let pathname: Signal<String> = location.pathname.into();
    let topic = use_topic_config();

    let site_title = config.site.title.clone();
    let trail = Signal::derive(move || {
        let topic = topic.get();
        pathname.with(|path| breadcrumbs(&site_title, &topic.config, path))
    });

    let article = Memo::new(move |_| {
        let topic = topic.get();
        pathname.with(|path| topic.config.find_link(path).cloned())
    });

    view! {
      <header class="lectern-topbar">
        <Breadcrumbs items=trail />
      </header>

      <div class="lectern-article-layout">
        <aside class="lectern-sidebar">
          <ChapterSidebar current_path=pathname />
        </aside>

        <article class="lectern-article">
          {move || match article.get() {
            Some(link) => view! { <h1>{link.title}</h1> }.into_any(),
            None => {
              let topic = topic.get();
              view! {
                <h1>{topic.config.title.clone()}</h1>
                <p>{topic.config.description.clone()}</p>
              }
                .into_any()
            }
          }}
        </article>
      </div>
    }
}
