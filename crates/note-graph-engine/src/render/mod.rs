//! # DOT Rendering
//!
//! Writes a [`NoteGraph`] as a Graphviz `digraph` and optionally hands the
//! file to a Graphviz layout command.

pub mod label;
pub mod style;

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;
use thiserror::Error;

use crate::graph::NoteGraph;

pub use label::Labeler;
pub use style::{DotStyle, EdgeStyle, GraphAttrs, NodeStyle};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not run Graphviz command `{command}`: {source}")]
    GraphvizSpawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Graphviz command `{command}` failed ({status}): {stderr}")]
    GraphvizFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Writes `graph` as DOT source.
pub fn render_dot<W: Write>(graph: &NoteGraph, style: &DotStyle, out: &mut W) -> io::Result<()> {
    let labeler = &style.labeler;

    writeln!(out, "digraph G_component_0 {{")?;
    writeln!(out, "\t{}", style.graph)?;

    writeln!(out, "\t\t# Tags section")?;
    if style.show_tag_edges {
        for tag in &graph.tags {
            writeln!(
                out,
                "\t\t\"{}\" [{}, URL=\"{}\"];",
                labeler.label(tag),
                style.tag,
                style.tag_url(tag)
            )?;
        }
    }

    writeln!(out, "\t\t# Notes section")?;
    for note in &graph.notes {
        writeln!(
            out,
            "\t\t\"{}\" [label=\"{}\", {}, URL=\"{}\"];",
            labeler.node_id(&note.id),
            labeler.label(&note.title),
            style.note,
            style.note_url(&note.id)
        )?;
    }

    writeln!(out, "\t\t# Tag edge section")?;
    if style.show_tag_edges {
        for edge in &graph.tag_edges {
            writeln!(
                out,
                "\t\t\"{}\" -> \"{}\" [{}];",
                labeler.label(&edge.tag),
                labeler.node_id(&edge.note_id),
                style.tag_link
            )?;
        }
    }

    writeln!(out, "\t\t# Note edge section")?;
    if style.show_note_edges {
        for edge in &graph.note_edges {
            writeln!(
                out,
                "\t\t\"{}\" -> \"{}\" [{}];",
                labeler.node_id(&edge.src),
                labeler.node_id(&edge.dst),
                style.note_link
            )?;
        }
    }

    writeln!(out, "}}")
}

/// `destination` with `.ext` appended; `destination` may itself contain dots.
pub fn output_path(destination: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(destination.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Renders `graph` into `<destination>.gv` and returns that path.
pub fn write_dot_file(
    graph: &NoteGraph,
    style: &DotStyle,
    destination: &Path,
) -> Result<PathBuf, RenderError> {
    let path = output_path(destination, "gv");
    let to_error = |source| RenderError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    render_dot(graph, style, &mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    info!("Graphviz file generated at {}", path.display());
    Ok(path)
}

/// Runs `<command> -T<format> <destination>.gv -o <destination>.<format>`.
///
/// `command` may carry extra arguments (`"neato -Goverlap=scale"`); it is
/// split on whitespace and never passed through a shell. A blank command
/// does nothing and returns `None`.
pub fn run_graphviz(
    command: &str,
    format: &str,
    destination: &Path,
) -> Result<Option<PathBuf>, RenderError> {
    let mut words = command.split_whitespace();
    let Some(program) = words.next() else {
        return Ok(None);
    };

    let source = output_path(destination, "gv");
    let target = output_path(destination, format);
    let mut cmd = Command::new(program);
    cmd.args(words)
        .arg(format!("-T{format}"))
        .arg(&source)
        .arg("-o")
        .arg(&target);

    let described = format!(
        "{} -T{format} {} -o {}",
        command.trim(),
        source.display(),
        target.display()
    );
    info!("Running Graphviz command \"{described}\"");

    let output = cmd.output().map_err(|source| RenderError::GraphvizSpawn {
        command: described.clone(),
        source,
    })?;
    if !output.status.success() {
        return Err(RenderError::GraphvizFailed {
            command: described,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(Some(target))
}
