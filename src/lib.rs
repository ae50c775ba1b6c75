pub mod ast;
pub mod builder;
pub mod cli;
pub mod collection;
pub mod config;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod literal;
pub mod output;
pub mod parser;
pub mod path;
pub mod value;

pub use ast::{Query, Selector, Token};
pub use builder::TreeBuilder;
pub use collection::{Collection, UpdateMode, apply_mode};
pub use config::GraftOptions;
pub use document::{Document, Edit, Grafter};
pub use error::{GraftError, Result};
pub use evaluator::Evaluator;
pub use lexer::{LexError, Lexer};
pub use literal::{TypeTag, parse_typed, parse_typed_with};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use path::{MutationMarker, NormalizedPath, Segment, normalize};
pub use value::TypedValue;
