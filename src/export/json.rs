//! JSON document export

use crate::error::Result;
use crate::models::RosterDocument;

/// Export the whole document as pretty-printed JSON
pub fn to_json(doc: &RosterDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
