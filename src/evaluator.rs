use serde_json::Value;

use crate::ast::{Query, Selector};

/// The primary path evaluator.
///
/// Resolves parsed queries against nodes that already exist. It never creates
/// structure: a write whose parent chain is incomplete is handed back to the
/// caller, which routes it to the [`TreeBuilder`](crate::builder::TreeBuilder).
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

/// Map a possibly negative index onto `0..len`.
fn resolve_index(len: usize, idx: i64) -> Option<usize> {
    let index = if idx >= 0 {
        usize::try_from(idx).ok()?
    } else {
        len.checked_sub(usize::try_from(idx.unsigned_abs()).ok()?)?
    };
    (index < len).then_some(index)
}

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `query` against `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_graft::{Evaluator, parser::parse_query};
    /// use serde_json::json;
    ///
    /// let doc = json!({"items": [{"price": 3}, {"price": 7}]});
    /// let query = parse_query("$.items[-1].price").unwrap();
    /// assert_eq!(Evaluator::new().read(&doc, &query), Some(&json!(7)));
    /// ```
    pub fn read<'a>(&self, root: &'a Value, query: &Query) -> Option<&'a Value> {
        query
            .selectors
            .iter()
            .try_fold(root, |current, selector| self.step(current, selector))
    }

    fn step<'a>(&self, current: &'a Value, selector: &Selector) -> Option<&'a Value> {
        match (current, selector) {
            (Value::Object(map), Selector::Name(key)) => map.get(key),
            (Value::Array(arr), Selector::Index(idx)) => arr.get(resolve_index(arr.len(), *idx)?),
            _ => None,
        }
    }

    fn resolve_mut<'a>(&self, root: &'a mut Value, selectors: &[Selector]) -> Option<&'a mut Value> {
        let mut current = root;
        for selector in selectors {
            current = match (current, selector) {
                (Value::Object(map), Selector::Name(key)) => map.get_mut(key)?,
                (Value::Array(arr), Selector::Index(idx)) => {
                    let index = resolve_index(arr.len(), *idx)?;
                    arr.get_mut(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set or replace the value at `query`.
    ///
    /// Succeeds only when every parent exists: the parent of a name selector
    /// must be an object, the parent of an index selector an array holding
    /// that index. Otherwise `value` is returned untouched in `Err` and the
    /// document is unchanged.
    pub fn try_write(&self, root: &mut Value, query: &Query, value: Value) -> Result<(), Value> {
        let Some((last, parents)) = query.split_last() else {
            *root = value;
            return Ok(());
        };

        let Some(parent) = self.resolve_mut(root, parents) else {
            return Err(value);
        };

        match (parent, last) {
            (Value::Object(map), Selector::Name(key)) => {
                map.insert(key.clone(), value);
                Ok(())
            }
            (Value::Array(arr), Selector::Index(idx)) => match resolve_index(arr.len(), *idx) {
                Some(index) => {
                    arr[index] = value;
                    Ok(())
                }
                None => Err(value),
            },
            _ => Err(value),
        }
    }

    /// Remove the node at `query` together with its subtree.
    ///
    /// Array elements are removed and later elements shift down. A missing
    /// path is a no-op; the root itself is never removed. Returns whether
    /// anything was deleted.
    pub fn delete(&self, root: &mut Value, query: &Query) -> bool {
        let Some((last, parents)) = query.split_last() else {
            return false;
        };

        match (self.resolve_mut(root, parents), last) {
            (Some(Value::Object(map)), Selector::Name(key)) => map.shift_remove(key).is_some(),
            (Some(Value::Array(arr)), Selector::Index(idx)) => {
                match resolve_index(arr.len(), *idx) {
                    Some(index) => {
                        arr.remove(index);
                        true
                    }
                    None => false,
                }
            }
            _ => false, // no-op
        }
    }
}
