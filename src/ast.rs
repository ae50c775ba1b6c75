//! # Query Syntax Tree
//!
//! The primary evaluator works on a small query grammar, a superset of the
//! dotted paths used everywhere else in the crate:
//!
//! ```text
//! query    := '$'? step*
//! step     := '.' name | name        (bare name only as the first step)
//!           | '[' selector ']'
//! selector := integer                (negative counts from the end)
//!           | 'single quoted' | "double quoted"
//! ```
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[query]** - Parsed selectors
//!
//! ## Examples
//!
//! ```text
//! $.user.name
//! items[0].price
//! $['content-type']
//! items[-1]
//! ```
//!
//! Mutation suffixes (`[+]`, `[]`) are not part of this grammar; paths that
//! carry them are handled by the tree builder.
pub mod query;
pub mod tokens;

pub use query::{Query, Selector};
pub use tokens::Token;
