//! Route prefix matching for feature flags.
//!
//! A route such as `/web/css/introduction` is walked upwards to its ancestor
//! prefixes (`/web/css`, `/web`, `/`). A feature is on for that route when any
//! ancestor is listed in the feature's prefix set.

use std::{
    borrow::Borrow,
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use serde::{Deserialize, Serialize};

use crate::{
    config::FeatureConfig,
    error::{CoreError, Result},
};

/// Ancestors of `path` from the immediate parent up to and including `/`.
///
/// Trailing and repeated slashes are ignored. The path itself is never part
/// of the chain; the root path yields `["/"]`.
pub fn prefix_chain(path: &str) -> Result<Vec<String>> {
    if !path.starts_with('/') {
        return Err(CoreError::invalid_path(path, "path must start with '/'"));
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut chain = Vec::with_capacity(segments.len().max(1));

    for depth in (1..segments.len()).rev() {
        chain.push(format!("/{}", segments[..depth].join("/")));
    }
    chain.push("/".to_string());

    Ok(chain)
}

/// Whether any prefix of the chain is in the feature's prefix set.
pub fn is_feature_enabled<S, P>(prefixes: &S, chain: &[P]) -> bool
where
    S: PrefixSet + ?Sized,
    P: AsRef<str>,
{
    chain.iter().any(|prefix| prefixes.contains_prefix(prefix.as_ref()))
}

/// Set-membership seam over the std set types.
pub trait PrefixSet {
    fn contains_prefix(&self, prefix: &str) -> bool;
}

impl<T> PrefixSet for BTreeSet<T>
where
    T: Borrow<str> + Ord,
{
    fn contains_prefix(&self, prefix: &str) -> bool {
        self.contains(prefix)
    }
}

impl<T, H> PrefixSet for HashSet<T, H>
where
    T: Borrow<str> + Eq + Hash,
    H: BuildHasher,
{
    fn contains_prefix(&self, prefix: &str) -> bool {
        self.contains(prefix)
    }
}

/// Optional rendering assets enabled for one route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFeatures {
    /// Load the syntax highlighter stylesheet and script.
    pub syntax_highlighter: bool,

    /// Load the math renderer stylesheet.
    pub math: bool,
}

impl PageFeatures {
    /// Evaluate every feature flag for `path`.
    pub fn for_path(features: &FeatureConfig, path: &str) -> Result<Self> {
        let chain = prefix_chain(path)?;
        Ok(Self {
            syntax_highlighter: is_feature_enabled(&features.syntax_highlighter, &chain),
            math: is_feature_enabled(&features.math, &chain),
        })
    }
}
