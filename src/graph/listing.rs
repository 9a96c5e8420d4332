//! Human-readable listing of a graph, for diagnostics.

use std::fmt;
use std::io::{self, Write};

use super::Graph;

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_directed() {
            "directed"
        } else {
            "undirected"
        };
        writeln!(f, "graph ({}, {} vertices)", kind, self.vertex_count())?;
        for vertex in self.vertices() {
            writeln!(
                f,
                "vertex {} ({} neighbors)",
                vertex.id(),
                vertex.neighbor_count()
            )?;
            for edge in vertex.neighbors() {
                writeln!(f, "  {}", edge)?;
            }
        }
        Ok(())
    }
}

impl Graph {
    /// Write the listing to `out`.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }

    /// Write the listing to standard output.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)
    }
}
