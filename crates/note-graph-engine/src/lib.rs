pub mod graph;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use graph::{GraphFilter, NoteEdge, NoteGraph, NoteNode, TagEdge, build_graph, normalize_tag};
pub use io::*;
pub use models::{markdown_file::*, note::*};
pub use parsing::{Block, BlockKind, ParseError, parse_note};
pub use render::{DotStyle, Labeler, RenderError, render_dot, run_graphviz, write_dot_file};
