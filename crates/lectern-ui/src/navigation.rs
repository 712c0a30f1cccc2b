//! Breadcrumb navigation for the top bar.

use lectern_core::Breadcrumb;
use leptos::prelude::*;

/// Breadcrumb entries paired with whether each is the last (current) one.
pub fn mark_last(items: Vec<Breadcrumb>) -> Vec<(usize, Breadcrumb, bool)> {
    let len = items.len();
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (i, item, i + 1 == len))
        .collect()
}

/// Breadcrumb navigation component.
#[component]
pub fn Breadcrumbs(
    /// Trail from the site root to the current page.
    #[prop(into)]
    items: Signal<Vec<Breadcrumb>>,
) -> impl IntoView {
    view! {
      <nav class="lectern-breadcrumbs" aria-label="Breadcrumb">
        <ol class="lectern-breadcrumb-list">
          <For
            each=move || mark_last(items.get())
            key=|(i, item, is_last)| (*i, item.url.clone(), *is_last)
            children=move |(i, item, is_last)| {
              let Breadcrumb { label, url } = item;
              view! {
                <li class="lectern-breadcrumb-item">
                  <Show when=move || { i > 0 }>
                    <span class="lectern-breadcrumb-separator" aria-hidden="true">
                      " › "
                    </span>
                  </Show>
                  <a
                    href=url
                    class="lectern-breadcrumb-link"
                    aria-current=move || is_last.then_some("page")
                  >
                    {label}
                  </a>
                </li>
              }
            }
          />

        </ol>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_last() {
        let items = vec![
            Breadcrumb::new("lectern", "/"),
            Breadcrumb::new("CSS", "/web/css"),
        ];
        let marked = mark_last(items);
        assert_eq!(marked.len(), 2);
        assert!(!marked[0].2);
        assert!(marked[1].2);
        assert_eq!(marked[1].1.label, "CSS");
    }

    #[test]
    fn test_mark_last_empty() {
        assert!(mark_last(Vec::new()).is_empty());
    }

    #[test]
    fn test_breadcrumb_serialization() {
        let crumb = Breadcrumb::new("CSS", "/web/css");
        let json = serde_json::to_string(&crumb).unwrap();
        assert!(json.contains("\"label\":\"CSS\""));
        assert!(json.contains("\"url\":\"/web/css\""));
    }
}
