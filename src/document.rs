//! Documents and the two-stage read/write dispatch.
//!
//! Every path operation first tries the [`Evaluator`] on the raw path. When
//! that cannot resolve it (the path uses a mutation marker, falls outside the
//! query grammar, or has missing parents) the path is normalized and handed
//! to the [`TreeBuilder`]. The first stage never reports errors; only the
//! normalizer and the builder do.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::builder::TreeBuilder;
use crate::config::GraftOptions;
use crate::error::{GraftError, Result};
use crate::evaluator::Evaluator;
use crate::literal::parse_typed_with;
use crate::output;
use crate::parser::parse_query;
use crate::path::{MutationMarker, NormalizedPath, Segment, normalize};

/// A JSON document owned by the caller.
///
/// Writes are all-or-nothing: a failed write leaves the document exactly as
/// it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty object.
    pub fn new() -> Self {
        Document {
            root: Value::Object(Map::new()),
        }
    }

    /// Parse JSON text, recovering to an empty object when the text is blank
    /// or malformed. The recovery is reported as a `warn` event.
    ///
    /// ```
    /// use json_graft::Document;
    ///
    /// assert_eq!(Document::parse("{not json").to_json(), "{}");
    /// assert_eq!(Document::parse(r#"{"a":1}"#).to_json(), r#"{"a":1}"#);
    /// ```
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(root) => Document { root },
            Err(e) => {
                warn!(error = %e, "malformed document text, starting from an empty object");
                Self::new()
            }
        }
    }

    /// Parse JSON text honouring `options.strict_documents`.
    pub fn parse_with(text: &str, options: &GraftOptions) -> Result<Self> {
        if options.strict_documents {
            Ok(Document {
                root: serde_json::from_str(text)?,
            })
        } else {
            Ok(Self::parse(text))
        }
    }

    /// Lenient parse of optional text; `None` is an empty object.
    pub fn parse_opt(text: Option<&str>) -> Self {
        text.map(Self::parse).unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    pub fn to_json(&self) -> String {
        output::to_json(&self.root)
    }

    pub fn to_json_pretty(&self) -> String {
        output::to_json_pretty(&self.root)
    }

    /// Read the node at `path`. A missing node is `Ok(None)`.
    ///
    /// Paths outside the query grammar are normalized, so a malformed path
    /// is an [`GraftError::InvalidPathSegment`]. So is a mutation marker,
    /// which has no meaning for a read.
    pub fn get(&self, path: &str) -> Result<Option<&Value>> {
        if let Ok(query) = parse_query(path) {
            return Ok(Evaluator::new().read(&self.root, &query));
        }
        let normalized = normalize_for_lookup(path)?;
        Ok(lookup(&self.root, &normalized.segments))
    }

    /// Read the node at `path` rendered as a JSON fragment.
    ///
    /// String results are quote-wrapped.
    pub fn get_json(&self, path: &str) -> Result<Option<String>> {
        Ok(self.get(path)?.map(output::to_json))
    }

    /// Write `value` at `path`, creating missing objects on the way.
    ///
    /// ```
    /// use json_graft::Document;
    /// use serde_json::json;
    ///
    /// let mut doc = Document::parse(r#"{"arr":["a","b"]}"#);
    /// doc.set("arr[+]", json!("x")).unwrap();
    /// assert_eq!(doc.to_json(), r#"{"arr":["a","b","x"]}"#);
    ///
    /// doc.set("arr[]", json!("y")).unwrap();
    /// assert_eq!(doc.to_json(), r#"{"arr":["y"]}"#);
    /// ```
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();

        let (value, normalized) = match parse_query(path) {
            Ok(query) => match Evaluator::new().try_write(&mut self.root, &query, value) {
                Ok(()) => return Ok(()),
                Err(value) => match NormalizedPath::from_query(&query) {
                    Some(normalized) => (value, normalized),
                    None => (value, normalize(path)?),
                },
            },
            Err(_) => (value, normalize(path)?),
        };

        debug!(path, normalized = %normalized, "primary write unresolved, building path");

        let mut working = self.root.clone();
        TreeBuilder::new().write_with_create(&mut working, &normalized, value)?;
        self.root = working;
        Ok(())
    }

    /// Coerce a typed literal (`"5:int"`) and write it at `path`.
    pub fn set_literal(&mut self, path: &str, raw: &str) -> Result<()> {
        self.set_literal_with(path, raw, &GraftOptions::default())
    }

    pub fn set_literal_with(&mut self, path: &str, raw: &str, options: &GraftOptions) -> Result<()> {
        let value = parse_typed_with(raw, options)?;
        self.set(path, value)
    }

    /// Remove the node at `path`. Removing a missing node succeeds.
    ///
    /// Returns whether anything was removed. Object fields are removed
    /// outright, so deleting the same field path twice leaves the document
    /// as the first delete did. Array elements are removed and later elements
    /// shift down: deleting `items[0]` twice removes two elements. The root
    /// is never removed.
    ///
    /// ```
    /// use json_graft::Document;
    ///
    /// let mut doc = Document::parse(r#"{"a":{"b":1},"items":[1,2,3]}"#);
    /// assert!(doc.delete("a.b").unwrap());
    /// assert!(!doc.delete("a.b").unwrap());
    ///
    /// doc.delete("items[0]").unwrap();
    /// doc.delete("items[0]").unwrap();
    /// assert_eq!(doc.to_json(), r#"{"a":{},"items":[3]}"#);
    /// ```
    pub fn delete(&mut self, path: &str) -> Result<bool> {
        if let Ok(query) = parse_query(path) {
            return Ok(Evaluator::new().delete(&mut self.root, &query));
        }
        let normalized = normalize_for_lookup(path)?;
        Ok(remove(&mut self.root, &normalized.segments))
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document { root }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.root
    }
}

/// Normalize a path that only addresses existing nodes.
fn normalize_for_lookup(path: &str) -> Result<NormalizedPath> {
    let normalized = normalize(path)?;
    if normalized.marker != MutationMarker::None {
        let marker = if normalized.marker == MutationMarker::Append {
            "[+]"
        } else {
            "[]"
        };
        return Err(GraftError::InvalidPathSegment {
            path: path.to_string(),
            segment: marker.to_string(),
        });
    }
    Ok(normalized)
}

fn lookup<'a>(root: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| match (current, segment) {
            (Value::Object(map), Segment::Field(key)) => map.get(key),
            (Value::Array(arr), Segment::Index(idx)) => arr.get(*idx),
            _ => None,
        })
}

fn remove(root: &mut Value, segments: &[Segment]) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        current = match (current, segment) {
            (Value::Object(map), Segment::Field(key)) => match map.get_mut(key) {
                Some(child) => child,
                None => return false,
            },
            (Value::Array(arr), Segment::Index(idx)) => match arr.get_mut(*idx) {
                Some(child) => child,
                None => return false,
            },
            _ => return false,
        };
    }

    match (current, last) {
        (Value::Object(map), Segment::Field(key)) => map.shift_remove(key).is_some(),
        (Value::Array(arr), Segment::Index(idx)) if *idx < arr.len() => {
            arr.remove(*idx);
            true
        }
        _ => false,
    }
}

/// One step of a request-body patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Write a typed literal at a path
    Set { path: String, literal: String },

    /// Remove the node at a path
    Delete { path: String },
}

impl Edit {
    pub fn set(path: impl Into<String>, literal: impl Into<String>) -> Self {
        Edit::Set {
            path: path.into(),
            literal: literal.into(),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Edit::Delete { path: path.into() }
    }
}

/// Text-in, text-out entry point carrying the engine options.
///
/// This is what the request-body workflow calls: parse the body, coerce each
/// literal, apply the edits in order and serialize the result.
///
/// ```
/// use json_graft::{Edit, Grafter};
///
/// let body = Grafter::default()
///     .patch_text("{}", &[Edit::set("a.b", "5:int"), Edit::set("tags[]", "x")])
///     .unwrap();
/// assert_eq!(body, r#"{"a":{"b":5},"tags":["x"]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Grafter {
    options: GraftOptions,
}

impl Grafter {
    pub fn new(options: GraftOptions) -> Self {
        Grafter { options }
    }

    pub fn options(&self) -> &GraftOptions {
        &self.options
    }

    /// Parse document text under these options.
    pub fn document(&self, text: &str) -> Result<Document> {
        Document::parse_with(text, &self.options)
    }

    /// Apply `edits` to `text`. Stops at the first failing edit.
    pub fn patch_text(&self, text: &str, edits: &[Edit]) -> Result<String> {
        let doc = self.patch(self.document(text)?, edits)?;
        Ok(doc.to_json())
    }

    /// Apply `edits` to an owned document.
    pub fn patch(&self, mut doc: Document, edits: &[Edit]) -> Result<Document> {
        for edit in edits {
            match edit {
                Edit::Set { path, literal } => doc.set_literal_with(path, literal, &self.options)?,
                Edit::Delete { path } => {
                    doc.delete(path)?;
                }
            }
        }
        Ok(doc)
    }
}
