/*!
 * Core types and data structures for the elves tree description
 */

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum::EnumString;

/// Name of the marker file created inside directories
pub const MARKER_FILE_NAME: &str = ".gitkeep";

/// Kind of an entry in a tree description
#[derive(Debug, Clone, PartialEq, Eq, EnumString, Deserialize)]
#[serde(from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// Directory to create
    Directory,
    /// Regular file (recognized, not created)
    File,
    /// Symbolic link (recognized, not created)
    Link,
    /// Summary entry emitted at the end of `tree -J` output
    Report,
    /// Any other kind
    #[strum(default)]
    Other(String),
}

impl NodeKind {
    /// Whether entries of this kind are created and rendered
    pub fn is_directory(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// The `type` value as it appears in the document
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Directory => "directory",
            NodeKind::File => "file",
            NodeKind::Link => "link",
            NodeKind::Report => "report",
            NodeKind::Other(kind) => kind,
        }
    }
}

impl Default for NodeKind {
    /// Entries without a `type` are kept but never created
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(kind: String) -> Self {
        match NodeKind::from_str(&kind) {
            Ok(kind) => kind,
            Err(_) => NodeKind::Other(kind),
        }
    }
}

/// A nested entry of the tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    /// Entry kind
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Path segment appended to the parent path
    pub name: String,
    /// Ordered children
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contents: Vec<Node>,
}

impl Node {
    /// Create a directory node with the given children
    pub fn directory(name: impl Into<String>, contents: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Directory,
            name: name.into(),
            contents,
        }
    }

    /// Create a non-directory node of the given kind
    pub fn leaf(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            contents: Vec::new(),
        }
    }

    /// Iterator over the directory children of this node
    pub fn directories(&self) -> impl Iterator<Item = &Node> {
        directories(&self.contents)
    }

    /// Whether this node has at least one directory child
    pub fn has_directories(&self) -> bool {
        self.directories().next().is_some()
    }
}

/// Filter a node list down to its directory entries, preserving order
pub fn directories(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes.iter().filter(|node| node.kind.is_directory())
}

// `"contents": null` decodes the same as a missing list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Node>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A top-level entry of a document
///
/// Shaped like [`Node`], but `name` is optional and `tree -J` style
/// summary counters may be present. The counters are informational only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Entry kind
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Optional name of the root
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered children
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contents: Vec<Node>,
    /// Declared number of directories
    #[serde(default)]
    pub directories: Option<u64>,
    /// Declared number of files
    #[serde(default)]
    pub files: Option<u64>,
}

/// Declared summary counters collected from a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredCounts {
    /// Declared number of directories
    pub directories: Option<u64>,
    /// Declared number of files
    pub files: Option<u64>,
}

/// A decoded tree description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Top-level entries in document order
    pub entries: Vec<Entry>,
}

impl Document {
    /// Contents of the first top-level entry
    pub fn root_contents(&self) -> &[Node] {
        self.entries
            .first()
            .map(|entry| entry.contents.as_slice())
            .unwrap_or(&[])
    }

    /// First declared counters found in any top-level entry
    pub fn declared_counts(&self) -> DeclaredCounts {
        let mut counts = DeclaredCounts::default();
        for entry in &self.entries {
            counts.directories = counts.directories.or(entry.directories);
            counts.files = counts.files.or(entry.files);
        }
        counts
    }
}
