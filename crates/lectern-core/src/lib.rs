//! Lectern Core Library
//!
//! Configuration, error handling, the hero typing animation, route prefix
//! matching and topic chapter configuration for the Lectern documentation site.

pub mod config;
pub mod error;
pub mod route;
pub mod topic;
pub mod typist;

pub use config::{Config, FeatureConfig, TypistConfig};
pub use error::{CoreError, Result};
pub use route::{PageFeatures, is_feature_enabled, prefix_chain};
pub use topic::{
    Breadcrumb, ChapterGroup, ChapterLink, LoadedTopic, TopicConfig, TopicKey, TopicRegistry,
    breadcrumbs,
};
pub use typist::{Frame, TypistState};
