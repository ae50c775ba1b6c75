//! `graft merge`: apply an override collection to a base collection

use super::CliError;
use crate::{Collection, UpdateMode, apply_mode};

/// Options for the merge command
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub mode: UpdateMode,
    /// Base collection as a JSON object of strings; absent means empty
    pub base: Option<String>,
    /// Override collection as a JSON object of strings; absent means no-op
    pub input: Option<String>,
    pub pretty: bool,
}

fn parse_collection(text: Option<&str>) -> Result<Option<Collection>, CliError> {
    text.map(serde_json::from_str::<Collection>)
        .transpose()
        .map_err(CliError::Json)
}

/// Merge and render the result as a JSON object
pub fn execute_merge(options: &MergeOptions) -> Result<String, CliError> {
    let base = parse_collection(options.base.as_deref())?;
    let input = parse_collection(options.input.as_deref())?;

    let merged = apply_mode(options.mode, input.as_ref(), base.as_ref());
    let json = if options.pretty {
        serde_json::to_string_pretty(&merged)?
    } else {
        serde_json::to_string(&merged)?
    };
    Ok(json)
}
