//! Chapter sidebar for topic article pages.

use lectern_core::{ChapterGroup, ChapterLink};
use leptos::prelude::*;

use crate::topic::use_topic_config;

/// Whether the sidebar link for `link_path` points at `current_path`.
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    let trim = |p: &str| -> String {
        match p.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        }
    };
    trim(current_path) == trim(link_path)
}

/// Chapter list of the current topic with the active article highlighted.
#[component]
pub fn ChapterSidebar(
    /// Current route, compared against each link.
    #[prop(into)]
    current_path: Signal<String>,
) -> impl IntoView {
    let topic = use_topic_config();
    let main_color = move || format!("--lectern-main-color: {}", topic.get().config.main_color);

    view! {
      <nav class="lectern-chapter-sidebar" aria-label="Chapters" style=main_color>
        {move || {
          topic
            .get()
            .config
            .chapters
            .iter()
            .cloned()
            .map(|group| chapter_group(group, current_path))
            .collect_view()
        }}
      </nav>
    }
}

fn chapter_group(group: ChapterGroup, current_path: Signal<String>) -> AnyView {
    match group {
        ChapterGroup::Separator { separator } => {
            view! { <div class="lectern-chapter-separator">{separator}</div> }.into_any()
        }
        ChapterGroup::Chapter { title, links } => view! {
          <div class="lectern-chapter-group">
            {title.map(|title| view! { <h1 class="lectern-chapter-title">{title}</h1> })}
            {links.into_iter().map(|link| chapter_link(link, current_path)).collect_view()}
          </div>
        }
        .into_any(),
    }
}

fn chapter_link(link: ChapterLink, current_path: Signal<String>) -> impl IntoView {
    let path = link.path.clone();
    let is_active = Memo::new(move |_| current_path.with(|current| is_active_link(current, &path)));

    view! {
      <a
        href=link.path
        class="lectern-chapter-link"
        class:active=is_active
        aria-current=move || is_active.get().then_some("page")
      >
        {link.title}
        {link.badge.map(|badge| view! { <span class="lectern-chapter-badge">{badge}</span> })}
      </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_link_exact() {
        assert!(is_active_link("/web/css/introduction", "/web/css/introduction"));
        assert!(!is_active_link("/web/css/introduction", "/web/css/embedding-css"));
    }

    #[test]
    fn test_is_active_link_ignores_trailing_slash() {
        assert!(is_active_link("/web/css/introduction/", "/web/css/introduction"));
        assert!(is_active_link("/", "/"));
    }

    #[test]
    fn test_parent_route_is_not_active() {
        assert!(!is_active_link("/web/css", "/web/css/introduction"));
        assert!(!is_active_link("/web/css/introduction/more", "/web/css/introduction"));
    }
}
