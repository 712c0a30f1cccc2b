//! Document head: optional rendering assets chosen per route.

use std::sync::Arc;

use lectern_core::{Config, PageFeatures};
use leptos::prelude::*;
use leptos_meta::{Link, Script};
use leptos_router::hooks::use_location;

const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.12.0/dist/katex.min.css";
const KATEX_INTEGRITY: &str =
    "sha384-AfEj0r4/OFrOo5t7NnNe46zW/tFgW6x/bCJG8FqQCEo3+Aro6EYUG4+cU+KJWu/X";
const PRISM_CSS: &str = "/lib/prism/prism.css";
const PRISM_JS: &str = "/lib/prism/prism.js";

/// An asset injected into the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Stylesheet {
        href: &'static str,
        integrity: Option<&'static str>,
    },
    Script {
        src: &'static str,
    },
}

/// Assets required by the enabled features, stylesheets first.
pub fn assets_for(features: PageFeatures) -> Vec<Asset> {
    let mut assets = Vec::new();
    if features.math {
        assets.push(Asset::Stylesheet {
            href: KATEX_CSS,
            integrity: Some(KATEX_INTEGRITY),
        });
    }
    if features.syntax_highlighter {
        assets.push(Asset::Stylesheet {
            href: PRISM_CSS,
            integrity: None,
        });
        assets.push(Asset::Script { src: PRISM_JS });
    }
    assets
}

/// Head links for the given feature set.
#[component]
pub fn PageAssets(#[prop(into)] features: Signal<PageFeatures>) -> impl IntoView {
    move || {
        assets_for(features.get())
            .into_iter()
            .map(|asset| match asset {
                Asset::Stylesheet {
                    href,
                    integrity: Some(integrity),
                } => view! {
                  <Link rel="stylesheet" href=href integrity=integrity crossorigin="anonymous" />
                }
                .into_any(),
                Asset::Stylesheet {
                    href,
                    integrity: None,
                } => view! { <Link rel="stylesheet" href=href /> }.into_any(),
                Asset::Script { src } => view! { <Script src=src /> }.into_any(),
            })
            .collect_view()
    }
}

/// [`PageAssets`] driven by the router's current location.
#[component]
pub fn LocationAssets() -> impl IntoView {
    let config = expect_context::<Arc<Config>>();
    let location = use_location();

    let features = Signal::derive(move || {
        location.pathname.with(|path| {
            PageFeatures::for_path(&config.features, path).unwrap_or_else(|err| {
                leptos::logging::warn!("Feature flags unavailable for {path}: {err}");
                PageFeatures::default()
            })
        })
    });

    view! { <PageAssets features=features /> }
}
