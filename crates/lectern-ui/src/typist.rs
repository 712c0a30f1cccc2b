//! Hero typing animation component.

use lectern_core::{TypistConfig, TypistState};
use leptos::prelude::*;

/// Border drawn on the phrase to act as the cursor.
pub fn cursor_border(visible: bool) -> &'static str {
    if visible {
        "1px solid var(--color-gray-0)"
    } else {
        "1px solid transparent"
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Types phrases one character per tick with a blinking cursor.
///
/// The animation state lives in a single signal. The interval starts when
/// the component is created and is cleared on cleanup.
#[component]
pub fn Typist(
    /// Phrases and timings. Defaults to the built-in hero phrases.
    #[prop(optional)]
    config: Option<TypistConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    let state = match TypistState::new(&config, now_ms()) {
        Ok(state) => RwSignal::new(state),
        Err(err) => {
            log::error!("Typist disabled: {err}");
            return view! { <div class="lectern-typist"></div> }.into_any();
        }
    };

    match set_interval_with_handle(
        move || {
            state.update(|typist| {
                typist.tick(now_ms(), &mut rand::thread_rng());
            });
        },
        config.tick_interval(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::error!("Failed to start typist interval: {err:?}"),
    }

    let text = move || state.with(|typist| typist.displayed().to_string());
    let border = move || cursor_border(state.with(TypistState::cursor_visible));

    view! {
      <div class="lectern-typist">
        <span class="lectern-typist-text" style:border-right=border>
          {text}
        </span>
      </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_border() {
        assert!(cursor_border(true).contains("var(--color-gray-0)"));
        assert!(cursor_border(false).contains("transparent"));
    }
}
