/*!
 * Text tree writer used for dry runs
 */

use std::io::{self, Write};

use crate::types::{directories, Node, MARKER_FILE_NAME};

const MID: &str = "├── ";
const LAST: &str = "└── ";
const GUIDE: &str = "│   ";
const BLANK: &str = "    ";

/// Writes a tree preview, one line per directory
pub struct TreeWriter<W: Write> {
    /// Destination of the rendered lines
    out: W,
    /// Draw a marker file line inside every directory
    create_marker_files: bool,
}

impl<W: Write> TreeWriter<W> {
    /// Create a new tree writer
    pub fn new(out: W, create_marker_files: bool) -> Self {
        Self {
            out,
            create_marker_files,
        }
    }

    /// Write the root label followed by the tree
    pub fn write_with_root(&mut self, label: &str, children: &[Node]) -> io::Result<()> {
        writeln!(self.out, "{}", label)?;
        self.write(children)
    }

    /// Write the tree below an implicit root
    pub fn write(&mut self, children: &[Node]) -> io::Result<()> {
        self.write_nodes(children, "")
    }

    /// Consume the writer and return the destination
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_nodes(&mut self, nodes: &[Node], prefix: &str) -> io::Result<()> {
        let dirs: Vec<&Node> = directories(nodes).collect();
        let count = dirs.len();

        for (index, node) in dirs.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let (connector, guide) = if is_last { (LAST, BLANK) } else { (MID, GUIDE) };
            writeln!(self.out, "{}{}{}", prefix, connector, node.name)?;

            let child_prefix = format!("{}{}", prefix, guide);
            let has_directories = node.has_directories();

            if self.create_marker_files {
                let marker = if has_directories { MID } else { LAST };
                writeln!(self.out, "{}{}{}", child_prefix, marker, MARKER_FILE_NAME)?;
            }

            if has_directories {
                self.write_nodes(&node.contents, &child_prefix)?;
            }
        }
        Ok(())
    }
}

/// Render the tree below an implicit root as text
pub fn render(children: &[Node], create_marker_files: bool) -> String {
    render_lines(create_marker_files, |writer| writer.write(children))
}

/// Render the root label line followed by the tree
pub fn render_with_root(label: &str, children: &[Node], create_marker_files: bool) -> String {
    render_lines(create_marker_files, |writer| {
        writer.write_with_root(label, children)
    })
}

fn render_lines<F>(create_marker_files: bool, draw: F) -> String
where
    F: FnOnce(&mut TreeWriter<Vec<u8>>) -> io::Result<()>,
{
    let mut writer = TreeWriter::new(Vec::new(), create_marker_files);
    // Writing into a Vec<u8> cannot fail
    let _ = draw(&mut writer);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}
