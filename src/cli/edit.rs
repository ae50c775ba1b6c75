//! `graft get` and `graft patch`

use super::CliError;
use crate::{Document, Edit, GraftOptions, Grafter, output};

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Path to read
    pub path: String,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    pub graft: GraftOptions,
}

/// Options for the patch command
#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// Edits in the order given on the command line
    pub edits: Vec<Edit>,
    /// JSON input string; absent means start from `{}`
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    pub graft: GraftOptions,
}

/// Split a `PATH=LITERAL` argument at its first `=`.
///
/// ```
/// use json_graft::{cli::parse_assignment, Edit};
///
/// assert_eq!(parse_assignment("a.b=5:int").unwrap(), Edit::set("a.b", "5:int"));
/// assert_eq!(parse_assignment("q=x=y").unwrap(), Edit::set("q", "x=y"));
/// ```
pub fn parse_assignment(arg: &str) -> Result<Edit, CliError> {
    match arg.split_once('=') {
        Some((path, literal)) if !path.is_empty() => Ok(Edit::set(path, literal)),
        _ => Err(CliError::InvalidAssignment(arg.to_string())),
    }
}

/// Read one path and render it as a JSON fragment
pub fn execute_get(options: &GetOptions) -> Result<String, CliError> {
    let text = options.input.as_deref().ok_or(CliError::NoInput)?;
    let doc = Document::parse_with(text, &options.graft)?;

    let node = doc
        .get(&options.path)?
        .ok_or_else(|| CliError::NotFound(options.path.clone()))?;
    Ok(output::render(node, options.pretty))
}

/// Apply the edits and render the resulting document
pub fn execute_patch(options: &PatchOptions) -> Result<String, CliError> {
    let grafter = Grafter::new(options.graft);
    let doc = match options.input.as_deref() {
        Some(text) => grafter.document(text)?,
        None => Document::new(),
    };

    let doc = grafter.patch(doc, &options.edits)?;
    Ok(output::render(doc.as_value(), options.pretty))
}
