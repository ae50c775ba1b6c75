//! Override merging for flat key-value collections.
//!
//! Request headers, cookies, query parameters and form fields are plain
//! string maps. A test step supplies an override map together with an
//! [`UpdateMode`] that says how it lands on the base map:
//!
//! - **Set** - the override replaces the base entirely
//! - **Update** - override entries are inserted into a copy of the base
//! - **Delete** - override keys are removed from a copy of the base
//!
//! The base is never modified; the merged map is returned.
//!
//! ```
//! use json_graft::collection::{apply_mode, Collection, UpdateMode};
//!
//! let base = Collection::from([("k1".to_string(), "v1".to_string())]);
//! let input = Collection::from([("k2".to_string(), "v2".to_string())]);
//!
//! let merged = apply_mode(UpdateMode::Update, Some(&input), Some(&base));
//! assert_eq!(merged.len(), 2);
//!
//! let removed = Collection::from([("k1".to_string(), String::new())]);
//! let result = apply_mode(UpdateMode::Delete, Some(&removed), Some(&merged));
//! assert_eq!(result, Collection::from([("k2".to_string(), "v2".to_string())]));
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::GraftError;

/// Insertion-ordered string map.
pub type Collection = IndexMap<String, String>;

/// How an override collection is applied to a base collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateMode {
    Set,
    Update,
    Delete,
}

impl UpdateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::Set => "set",
            UpdateMode::Update => "update",
            UpdateMode::Delete => "delete",
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateMode {
    type Err = GraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "set" => Ok(UpdateMode::Set),
            "update" => Ok(UpdateMode::Update),
            "delete" => Ok(UpdateMode::Delete),
            _ => Err(GraftError::UnsupportedMode(s.to_string())),
        }
    }
}

/// Apply `input` to `base` under `mode`.
///
/// A missing `base` is an empty collection. A missing `input` leaves the base
/// as it is, whatever the mode.
pub fn apply_mode(mode: UpdateMode, input: Option<&Collection>, base: Option<&Collection>) -> Collection {
    let base = base.cloned().unwrap_or_default();
    let Some(input) = input else {
        return base;
    };

    tracing::debug!(%mode, input = input.len(), base = base.len(), "merging collection");

    match mode {
        UpdateMode::Set => input.clone(),
        UpdateMode::Update => {
            let mut result = base;
            result.extend(input.iter().map(|(k, v)| (k.clone(), v.clone())));
            result
        }
        UpdateMode::Delete => {
            let mut result = base;
            result.retain(|key, _| !input.contains_key(key));
            result
        }
    }
}
