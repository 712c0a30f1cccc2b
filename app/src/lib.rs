use std::sync::Arc;

use lectern_core::Config;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    path,
};

pub mod pages;
pub mod shell;

use pages::{HomePage, TopicPage};
use shell::LocationAssets;

#[component]
pub fn App(
    /// Site configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<Config>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = Arc::new(config.unwrap_or_default());
    provide_context(Arc::clone(&config));

    view! {
      <Title text=config.site.title.clone() />
      <Meta charset="utf-8" />
      <Meta name="viewport" content="width=device-width, initial-scale=1" />

      <Router>
        // optional syntax highlighter / math assets for the current route
        <LocationAssets />
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=path!("/web/:topic") view=TopicPage />
            <Route path=path!("/web/:topic/*article") view=TopicPage />
          </Routes>
        </main>
      </Router>
    }
}
