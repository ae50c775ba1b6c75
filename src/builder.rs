use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{GraftError, Result, type_name};
use crate::path::{MutationMarker, NormalizedPath, Segment};

/// Fallback writer that creates missing structure.
///
/// Walks the normalized segments from the root, inserting empty objects for
/// absent fields, then performs the terminal write, append or overwrite.
///
/// # Rules
///
/// - A field step needs an object; an absent field becomes `{}`.
/// - An index step needs an array holding that index. Arrays are never
///   extended with placeholder elements.
/// - A field holding a non-object is replaced with `{}` only when the next
///   step is the terminal field write (`a.b` on `{"a":1}`). Anywhere deeper
///   it is an error, not something to overwrite.
///
/// The builder mutates the tree it is given, and a failing walk may leave
/// freshly created objects behind. [`Document`](crate::Document) therefore
/// runs it on a working copy and commits only on success.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Write `value` at `path`, creating intermediate objects as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_graft::{TreeBuilder, path::normalize};
    /// use serde_json::json;
    ///
    /// let mut doc = json!({});
    /// let path = normalize("a.b").unwrap();
    /// TreeBuilder::new().write_with_create(&mut doc, &path, json!(5)).unwrap();
    /// assert_eq!(doc, json!({"a": {"b": 5}}));
    ///
    /// let mut doc = json!({"a": 1});
    /// TreeBuilder::new().write_with_create(&mut doc, &path, json!(5)).unwrap();
    /// assert_eq!(doc, json!({"a": {"b": 5}}));
    /// ```
    pub fn write_with_create(&self, root: &mut Value, path: &NormalizedPath, value: Value) -> Result<()> {
        let Some((last, parents)) = path.segments.split_last() else {
            return self.write_root(root, path.marker, value);
        };

        let mut current = root;
        for (depth, segment) in parents.iter().enumerate() {
            current = self.descend(current, &parents[..depth], segment)?;

            let feeds_terminal_field = depth + 1 == parents.len()
                && matches!(segment, Segment::Field(_))
                && matches!(last, Segment::Field(_));
            if feeds_terminal_field && !current.is_object() {
                debug!(
                    location = %location(parents),
                    found = type_name(current),
                    "replacing non-object with an empty object"
                );
                *current = Value::Object(Map::new());
            }
        }

        match path.marker {
            MutationMarker::None => self.write_terminal(current, parents, last, value),
            MutationMarker::Append => self.append_terminal(current, parents, last, value),
            MutationMarker::Overwrite => {
                self.write_terminal(current, parents, last, Value::Array(vec![value]))
            }
        }
    }

    fn write_root(&self, root: &mut Value, marker: MutationMarker, value: Value) -> Result<()> {
        match marker {
            MutationMarker::None => *root = value,
            MutationMarker::Overwrite => *root = Value::Array(vec![value]),
            MutationMarker::Append => match root {
                Value::Array(arr) => arr.push(value),
                other => {
                    return Err(GraftError::NotAnArray {
                        segment: "$".to_string(),
                        found: type_name(other),
                    });
                }
            },
        }
        Ok(())
    }

    /// Step from the node at `at` into `segment`.
    fn descend<'a>(&self, current: &'a mut Value, at: &[Segment], segment: &Segment) -> Result<&'a mut Value> {
        match (current, segment) {
            (Value::Object(map), Segment::Field(key)) => Ok(map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new()))),
            (Value::Array(arr), Segment::Index(idx)) => {
                let len = arr.len();
                arr.get_mut(*idx)
                    .ok_or(GraftError::IndexOutOfBounds { index: *idx, len })
            }
            (other, Segment::Field(key)) => Err(GraftError::CannotTraverseScalar {
                path: location(at),
                segment: key.clone(),
                found: type_name(other),
            }),
            (other, Segment::Index(idx)) => Err(GraftError::CannotIndexNonArray {
                index: *idx,
                found: type_name(other),
            }),
        }
    }

    fn write_terminal(&self, parent: &mut Value, at: &[Segment], segment: &Segment, value: Value) -> Result<()> {
        match (parent, segment) {
            (Value::Object(map), Segment::Field(key)) => {
                map.insert(key.clone(), value);
                Ok(())
            }
            (Value::Array(arr), Segment::Index(idx)) => {
                let len = arr.len();
                let slot = arr
                    .get_mut(*idx)
                    .ok_or(GraftError::IndexOutOfBounds { index: *idx, len })?;
                *slot = value;
                Ok(())
            }
            (other, Segment::Field(key)) => Err(GraftError::CannotTraverseScalar {
                path: location(at),
                segment: key.clone(),
                found: type_name(other),
            }),
            (other, Segment::Index(idx)) => Err(GraftError::CannotIndexNonArray {
                index: *idx,
                found: type_name(other),
            }),
        }
    }

    fn append_terminal(&self, parent: &mut Value, at: &[Segment], segment: &Segment, value: Value) -> Result<()> {
        let target = match (parent, segment) {
            (Value::Object(map), Segment::Field(key)) => map.get_mut(key),
            (Value::Array(arr), Segment::Index(idx)) => {
                let len = arr.len();
                Some(
                    arr.get_mut(*idx)
                        .ok_or(GraftError::IndexOutOfBounds { index: *idx, len })?,
                )
            }
            (other, Segment::Field(key)) => {
                return Err(GraftError::CannotTraverseScalar {
                    path: location(at),
                    segment: key.clone(),
                    found: type_name(other),
                });
            }
            (other, Segment::Index(idx)) => {
                return Err(GraftError::CannotIndexNonArray {
                    index: *idx,
                    found: type_name(other),
                });
            }
        };

        match target {
            Some(Value::Array(arr)) => {
                arr.push(value);
                Ok(())
            }
            Some(other) => Err(GraftError::NotAnArray {
                segment: segment.to_string(),
                found: type_name(other),
            }),
            None => Err(GraftError::NotAnArray {
                segment: segment.to_string(),
                found: "nothing",
            }),
        }
    }
}

/// Rendered location of the node reached by `segments`; `$` for the root.
fn location(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "$".to_string();
    }
    NormalizedPath::new(segments.to_vec(), MutationMarker::None).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::normalize;
    use serde_json::json;

    fn write(doc: &mut Value, path: &str, value: Value) -> Result<()> {
        TreeBuilder::new().write_with_create(doc, &normalize(path).unwrap(), value)
    }

    #[test]
    fn test_root_paths() {
        let mut doc = json!({"a": 1});
        write(&mut doc, "$", json!("x")).unwrap();
        assert_eq!(doc, json!("x"));

        write(&mut doc, "[]", json!(1)).unwrap();
        assert_eq!(doc, json!([1]));

        write(&mut doc, "[+]", json!(2)).unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn test_append_to_nested_array_slot() {
        let mut doc = json!({"m": [[1], [2]]});
        write(&mut doc, "m[1][+]", json!(3)).unwrap();
        assert_eq!(doc, json!({"m": [[1], [2, 3]]}));
    }

    #[test]
    fn test_missing_field_then_index_fails() {
        let mut doc = json!({});
        let err = write(&mut doc, "a[0]", json!(1)).unwrap_err();
        assert!(matches!(err, GraftError::CannotIndexNonArray { index: 0, found: "object" }));
    }

    #[test]
    fn test_scalar_before_terminal_field_is_replaced() {
        let mut doc = json!({"a": 1});
        write(&mut doc, "a.b", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": {"b": 2}}));

        let mut doc = json!({"a": "x"});
        write(&mut doc, "a.b[]", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": {"b": [2]}}));
    }

    #[test]
    fn test_scalar_before_terminal_index_is_kept() {
        let mut doc = json!({"a": 1});
        let err = write(&mut doc, "a[0]", json!(2)).unwrap_err();
        assert!(matches!(err, GraftError::CannotIndexNonArray { index: 0, found: "integer" }));
    }

    #[test]
    fn test_traverse_error_names_blocking_location() {
        let mut doc = json!({"a": {"b": [true]}});
        match write(&mut doc, "a.b[0].c.d", json!(1)).unwrap_err() {
            GraftError::CannotTraverseScalar { path, segment, found } => {
                assert_eq!(path, "a.b[0]");
                assert_eq!(segment, "c");
                assert_eq!(found, "boolean");
            }
            other => panic!("expected CannotTraverseScalar, got {:?}", other),
        }
    }

    #[test]
    fn test_location_rendering() {
        assert_eq!(location(&[]), "$");
        assert_eq!(location(&[Segment::Index(2), Segment::Field("x".into())]), "[2].x");
    }
}
