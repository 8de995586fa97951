/*!
 * Directory tree materialization
 */

use std::fs::{self, DirBuilder, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, trace};

use crate::error::{IoResultExt, Result};
use crate::types::{Node, MARKER_FILE_NAME};

/// Permission applied to created directories when none is given
pub const DEFAULT_PERMISSION: u32 = 0o755;

/// Options controlling how a tree is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Mode applied to every created directory
    pub permission: u32,
    /// Create an empty marker file in every created directory
    pub create_marker_files: bool,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            permission: DEFAULT_PERMISSION,
            create_marker_files: false,
        }
    }
}

/// Counts of entries created by a materialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Number of directories created
    pub directories: usize,
    /// Number of marker files created
    pub marker_files: usize,
}

/// Creates directory trees on disk
pub struct Materializer {
    /// Creation options
    options: MaterializeOptions,
    /// Progress bar, advanced once per created directory
    pub progress: Arc<ProgressBar>,
}

impl Materializer {
    /// Create a materializer reporting to a hidden progress bar
    pub fn new(options: MaterializeOptions) -> Self {
        Self::with_progress(options, Arc::new(ProgressBar::hidden()))
    }

    /// Create a materializer reporting to the given progress bar
    pub fn with_progress(options: MaterializeOptions, progress: Arc<ProgressBar>) -> Self {
        Self { options, progress }
    }

    /// Create every directory node of `children` under `root`
    ///
    /// `root` must already exist. The walk is depth-first and pre-order, so a
    /// parent and its marker file always exist before its children. The first
    /// failing filesystem operation stops the walk; nothing already created is
    /// removed.
    pub fn materialize(&self, children: &[Node], root: &Path) -> Result<MaterializeStats> {
        let mut stats = MaterializeStats::default();
        self.create_nodes(children, root, &mut stats)?;
        Ok(stats)
    }

    fn create_nodes(
        &self,
        nodes: &[Node],
        parent: &Path,
        stats: &mut MaterializeStats,
    ) -> Result<()> {
        for node in nodes {
            if !node.kind.is_directory() {
                trace!(kind = node.kind.as_str(), name = %node.name, "skipping entry");
                continue;
            }
            let path = parent.join(&node.name);

            create_directory(&path, self.options.permission).at_path(&path)?;
            stats.directories += 1;
            debug!(
                path = %path.display(),
                mode = %format!("{:o}", self.options.permission),
                "created directory"
            );

            if self.options.create_marker_files {
                let marker = path.join(MARKER_FILE_NAME);
                create_marker_file(&marker).at_path(&marker)?;
                stats.marker_files += 1;
                debug!(path = %marker.display(), "created marker file");
            }

            self.progress.set_message(node.name.clone());
            self.progress.inc(1);

            if !node.contents.is_empty() {
                self.create_nodes(&node.contents, &path, stats)?;
            }
        }
        Ok(())
    }
}

/// Create every directory node of `children` under `root`
///
/// Shorthand for [`Materializer::materialize`] without progress reporting.
pub fn materialize(
    children: &[Node],
    root: &Path,
    permission: u32,
    create_marker_files: bool,
) -> Result<MaterializeStats> {
    Materializer::new(MaterializeOptions {
        permission,
        create_marker_files,
    })
    .materialize(children, root)
}

/// Number of directory nodes in a tree, used to size progress bars
pub fn count_directories(nodes: &[Node]) -> u64 {
    nodes
        .iter()
        .filter(|node| node.kind.is_directory())
        .map(|node| 1 + count_directories(&node.contents))
        .sum()
}

/// Create a single directory with exactly `permission`, ignoring the umask
#[cfg(unix)]
pub fn create_directory(path: &Path, permission: u32) -> std::io::Result<()> {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

    DirBuilder::new().mode(permission).create(path)?;
    fs::set_permissions(path, fs::Permissions::from_mode(permission))
}

/// Create a single directory; modes are not supported on this platform
#[cfg(not(unix))]
pub fn create_directory(path: &Path, _permission: u32) -> std::io::Result<()> {
    DirBuilder::new().create(path)
}

fn create_marker_file(path: &Path) -> std::io::Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
}
