//! Documentation content for the graft CLI

use std::str::FromStr;

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Paths,
    Literals,
    Markers,
    Merge,
}

impl FromStr for DocCategory {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "paths" | "path" => Ok(Self::Paths),
            "literals" | "literal" | "types" => Ok(Self::Literals),
            "markers" | "marker" | "append" | "overwrite" => Ok(Self::Markers),
            "merge" | "modes" | "collections" => Ok(Self::Merge),
            _ => Err(CliError::UnknownCategory(s.to_string())),
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"GRAFT DOCUMENTATION

graft reads, writes and deletes values inside JSON documents addressed by
dotted paths, coerces typed literals such as 5:int, and merges flat override
maps onto base maps.

DOCUMENTATION CATEGORIES

  paths             Dotted field access, array indices, quoted names
  literals          Type suffixes and how values are coerced
  markers           [+] append and [] overwrite
  merge             set / update / delete collection modes

QUICK REFERENCE

  a.b[0]            Field a, field b, element 0
  $['a.b']          Quoted name containing a dot
  items[-1]         Last element (reads, deletes, existing writes)
  tags[+]           Append to an existing array
  tags[]            Replace with a single-element array
  5:int             Integer literal

Run 'graft doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    Ok(match name.parse::<DocCategory>()? {
        DocCategory::Paths => PATHS_DOC,
        DocCategory::Literals => LITERALS_DOC,
        DocCategory::Markers => MARKERS_DOC,
        DocCategory::Merge => MERGE_DOC,
    })
}

const PATHS_DOC: &str = r#"PATHS - Addressing Nodes

FIELD ACCESS
  a.b.c
    Walk object fields by name. A leading $ is optional.

    Example:
      Input:  {"user": {"name": "Alice"}}
      Path:   user.name
      Output: "Alice"

ARRAY INDEX ACCESS
  items[1]
    Zero-based element access.

    Negative indices count from the end, but only address elements that
    already exist:
      items[-1]    Last element

QUOTED NAMES
  $['content-type']
  $["a.b"]
    Field names containing dots or brackets.

WRITING
  Missing objects along a written path are created:

    echo '{}' | graft patch --set 'a.b=5:int'
    => {"a":{"b":5}}

  Arrays are never extended. Writing items[5] into a 2-element array is an
  error, as is walking through a scalar (a.b.c when a is 1). A scalar right
  before the final field is replaced: a.b on {"a": 1} gives {"a": {"b": ...}}.
"#;

const LITERALS_DOC: &str = r#"LITERALS - Typed Values

The text after the last ':' selects the type of the text before it.

  abc              "abc"          (no suffix: string)
  abc:str          "abc"
  true:bool        true           (case-insensitive; anything else is false)
  42:int           42             (32-bit)
  9000000000:long  9000000000     (64-bit)
  1.5:float        1.5            (also :double, :decimal)
  x:null           null
  [1,2]:json       [1,2]

Malformed int, long, float and json literals are errors. Pass
--strict-booleans to make malformed booleans errors as well.

Suffixes are case-sensitive: 5:INT is the string "5:INT".
"#;

const MARKERS_DOC: &str = r#"MARKERS - Append and Overwrite

APPEND
  tags[+]
    Push the value onto the existing array at tags.

    Example:
      Input:  {"tags": ["a", "b"]}
      Patch:  --set 'tags[+]=x'
      Output: {"tags": ["a", "b", "x"]}

    The target must already be an array.

OVERWRITE
  tags[]
    Replace whatever is at tags with a one-element array.

    Example:
      Input:  {"tags": ["a", "b"]}
      Patch:  --set 'tags[]=x'
      Output: {"tags": ["x"]}
"#;

const MERGE_DOC: &str = r#"MERGE - Collection Modes

Headers, cookies, query and form parameters are string maps. An override map
lands on a base map in one of three modes:

  set       Result is the override alone
  update    Base plus override entries (override wins)
  delete    Base minus every key named in the override

Example:
  graft merge update --base '{"k1":"v1"}' --input '{"k2":"v2"}'
  => {"k1":"v1","k2":"v2"}

  graft merge delete --base '{"k1":"v1","k2":"v2"}' --input '{"k1":""}'
  => {"k2":"v2"}

Without --input the base is returned unchanged.
"#;
