/*!
 * elves - Generate directory trees from JSON tree descriptions
 *
 * This library parses a declarative tree description (the shape emitted by
 * `tree -J`), creates the described directories on disk and renders
 * previews of the tree without touching the filesystem.
 */

pub mod config;
pub mod error;
pub mod logging;
pub mod materializer;
pub mod parser;
pub mod report;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{ElvesError, Result};
pub use materializer::{materialize, MaterializeOptions, MaterializeStats, Materializer};
pub use parser::parse;
pub use report::{CreateReport, ReportFormat, Reporter};
pub use types::{DeclaredCounts, Document, Entry, Node, NodeKind};
pub use writer::{render, render_with_root, TreeWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
