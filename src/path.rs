//! Path grammar normalization for the tree builder.
//!
//! A path such as `$.nest.c[0]`, `tags[+]` or `tags[]` becomes an ordered list
//! of [`Segment`]s plus a terminal [`MutationMarker`]. Normalization is purely
//! syntactic: it never looks at a document.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Query, Selector};
use crate::error::{GraftError, Result};

/// Either a bracketed token (`[...]`, contents captured) or a run of name
/// characters. Dots separate names and are matched implicitly as gaps.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]|[^.\[\]]+").expect("path token pattern is valid")
});

/// One normalized step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object field access by name
    ///
    /// # Examples
    /// - `user` → `Field("user")`
    /// - `user.email` → `[Field("user"), Field("email")]`
    Field(String),

    /// Array element access by index
    ///
    /// # Examples
    /// - `items[0]` → `[Field("items"), Index(0)]`
    ///
    /// # Note
    /// Only non-negative decimal indices are accepted here. Negative indices
    /// belong to the query grammar of the primary evaluator.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Terminal suffix selecting how the value lands at the target location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationMarker {
    /// Plain write: replace or create
    #[default]
    None,

    /// `[+]`: push onto an existing array
    Append,

    /// `[]`: replace the target with a fresh single-element array
    Overwrite,
}

/// A path split into segments, with its mutation marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPath {
    pub segments: Vec<Segment>,
    pub marker: MutationMarker,
}

impl NormalizedPath {
    pub fn new(segments: Vec<Segment>, marker: MutationMarker) -> Self {
        NormalizedPath { segments, marker }
    }

    /// Path addressing the document root itself
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reuse an already parsed query, keeping quoted names intact.
    ///
    /// Negative indices only make sense against an existing array, so a
    /// query containing one has no normalized form.
    pub fn from_query(query: &Query) -> Option<Self> {
        let segments = query
            .selectors
            .iter()
            .map(|selector| match selector {
                Selector::Name(name) => Some(Segment::Field(name.clone())),
                Selector::Index(idx) => usize::try_from(*idx).ok().map(Segment::Index),
            })
            .collect::<Option<Vec<_>>>()?;
        Some(NormalizedPath::new(segments, MutationMarker::None))
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if let Segment::Field(_) = segment {
                if !first {
                    f.write_str(".")?;
                }
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        match self.marker {
            MutationMarker::None => Ok(()),
            MutationMarker::Append => f.write_str("[+]"),
            MutationMarker::Overwrite => f.write_str("[]"),
        }
    }
}

/// Normalize a path expression.
///
/// # Examples
/// ```
/// use json_graft::path::{normalize, MutationMarker, Segment};
///
/// let path = normalize("$.nest.c[0]").unwrap();
/// assert_eq!(path.segments, vec![
///     Segment::Field("nest".into()),
///     Segment::Field("c".into()),
///     Segment::Index(0),
/// ]);
/// assert_eq!(path.marker, MutationMarker::None);
///
/// assert_eq!(normalize("tags[+]").unwrap().marker, MutationMarker::Append);
/// assert_eq!(normalize("tags[]").unwrap().marker, MutationMarker::Overwrite);
/// ```
pub fn normalize(path: &str) -> Result<NormalizedPath> {
    let body = path.strip_prefix('$').unwrap_or(path);

    let (body, marker) = if let Some(rest) = body.strip_suffix("[+]") {
        (rest, MutationMarker::Append)
    } else if let Some(rest) = body.strip_suffix("[]") {
        (rest, MutationMarker::Overwrite)
    } else {
        (body, MutationMarker::None)
    };

    let invalid = |segment: &str| GraftError::InvalidPathSegment {
        path: path.to_string(),
        segment: segment.to_string(),
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TOKEN.captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        // Anything between tokens other than dots is a stray bracket.
        let gap = &body[cursor..whole.start()];
        if let Some(stray) = gap.chars().find(|c| *c != '.') {
            return Err(invalid(&stray.to_string()));
        }
        cursor = whole.end();

        match caps.get(1) {
            Some(inner) => {
                // Decimal digits only: `[+1]` is neither an index nor a marker.
                let digits = inner.as_str().trim();
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(whole.as_str()));
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| invalid(whole.as_str()))?;
                segments.push(Segment::Index(index));
            }
            None => segments.push(Segment::Field(whole.as_str().to_string())),
        }
    }

    let tail = &body[cursor..];
    if let Some(stray) = tail.chars().find(|c| *c != '.') {
        return Err(invalid(&stray.to_string()));
    }

    let normalized = NormalizedPath::new(segments, marker);
    tracing::trace!(path, normalized = %normalized, "normalized path");
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_bracket_is_skipped_as_empty_name() {
        let path = normalize("[1].name").unwrap();
        assert_eq!(
            path.segments,
            vec![Segment::Index(1), Segment::Field("name".into())]
        );
    }

    #[test]
    fn test_display_round_trips_simple_paths() {
        for src in ["a.b[0]", "arr[+]", "arr[]", "x[2][3].y"] {
            assert_eq!(normalize(src).unwrap().to_string(), src);
        }
    }

    #[test]
    fn test_signed_index_is_rejected() {
        for src in ["a[+1]", "a[-0]", "a[ +2 ]"] {
            assert!(
                matches!(normalize(src), Err(GraftError::InvalidPathSegment { .. })),
                "{}",
                src
            );
        }
    }

    #[test]
    fn test_unbalanced_bracket_is_rejected() {
        assert!(matches!(
            normalize("a[0"),
            Err(GraftError::InvalidPathSegment { .. })
        ));
        assert!(matches!(
            normalize("a]0"),
            Err(GraftError::InvalidPathSegment { .. })
        ));
    }
}
