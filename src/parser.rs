/*!
 * Tree description parsing and validation
 */

use crate::error::Result;
use crate::types::{Document, Node};
use crate::{ensure, error};

/// Decode raw document bytes into a validated [`Document`]
///
/// Fails with [`ElvesError::Parse`](crate::error::ElvesError::Parse) when the
/// bytes are not a JSON array of entries and with
/// [`ElvesError::EmptyOrInvalidTree`](crate::error::ElvesError::EmptyOrInvalidTree) when the first entry
/// has nothing to create or a directory name cannot be used as a single
/// path segment.
pub fn parse(raw: &[u8]) -> Result<Document> {
    let document: Document = serde_json::from_slice(raw)?;
    validate(&document)?;
    Ok(document)
}

/// Validate the structure of an already decoded document
pub fn validate(document: &Document) -> Result<()> {
    let first = document
        .entries
        .first()
        .ok_or_else(|| error!(EmptyOrInvalidTree, "document has no entries"))?;
    ensure!(
        !first.contents.is_empty(),
        EmptyOrInvalidTree,
        "root entry has no contents"
    );

    validate_names(&first.contents)
}

fn validate_names(nodes: &[Node]) -> Result<()> {
    for node in nodes.iter().filter(|node| node.kind.is_directory()) {
        check_segment(&node.name)?;
        validate_names(&node.contents)?;
    }
    Ok(())
}

fn check_segment(name: &str) -> Result<()> {
    ensure!(
        !name.is_empty(),
        EmptyOrInvalidTree,
        "directory with an empty name"
    );
    ensure!(
        name != "." && name != "..",
        EmptyOrInvalidTree,
        "directory name {:?} refers to an existing directory",
        name
    );
    ensure!(
        !name.contains('/') && !name.contains(std::path::MAIN_SEPARATOR),
        EmptyOrInvalidTree,
        "directory name {:?} contains a path separator",
        name
    );
    Ok(())
}
