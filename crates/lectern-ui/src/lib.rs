//! Lectern UI Components
//!
//! Leptos components for the Lectern frontend.
//!
//! # Components
//!
//! ## Hero
//! - [`Typist`] - Typing animation cycling through phrases
//!
//! ## Topics
//! - [`TopicConfigProvider`] - Provides the current topic's configuration
//! - [`ChapterSidebar`] - Chapter list with the active article highlighted
//!
//! ## Navigation
//! - [`Breadcrumbs`] - Breadcrumb navigation
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use lectern_core::TopicKey;
//! use lectern_ui::{ChapterSidebar, TopicConfigProvider};
//!
//! #[component]
//! fn CssPage() -> impl IntoView {
//!     let path = Signal::derive(|| "/web/css/introduction".to_string());
//!
//!     view! {
//!         <TopicConfigProvider topic=Some(TopicKey::Css)>
//!             <ChapterSidebar current_path=path />
//!         </TopicConfigProvider>
//!     }
//! }
//! ```

pub mod navigation;
pub mod sidebar;
pub mod topic;
pub mod typist;

pub use navigation::Breadcrumbs;
pub use sidebar::{ChapterSidebar, is_active_link};
pub use topic::{TopicConfigProvider, topic_registry, use_topic_config};
pub use typist::Typist;
