//! # Graph Assembly
//!
//! Turns parsed notes into tag and note nodes plus the edges between them.
//!
//! - tags come from `Tag` blocks, normalised with [`Tag::normalize`] and
//!   filtered through [`GraphFilter`]
//! - note references come from `NoteLink` blocks and are resolved to note ids
//!   by title; unresolved references are dropped with a warning
//! - notes that cannot be used (no text, parse failure) are skipped with a
//!   warning, never failing the whole batch

pub mod filter;

use std::collections::{BTreeSet, HashMap};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::models::NoteRecord;
use crate::parsing::{Block, kinds::Tag, parse_note};

pub use filter::GraphFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNode {
    pub id: String,
    pub title: String,
}

/// A tag attached to the note that mentions it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdge {
    pub tag: String,
    pub note_id: String,
}

/// A `[[reference]]` from one note to another, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEdge {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteGraph {
    pub tags: BTreeSet<String>,
    pub notes: Vec<NoteNode>,
    pub tag_edges: Vec<TagEdge>,
    pub note_edges: Vec<NoteEdge>,
}

/// Canonical form of a captured tag, see [`Tag::normalize`].
pub fn normalize_tag(tag: &str) -> &str {
    Tag::normalize(tag)
}

/// What one note contributes before references are resolved.
struct Extracted<'n> {
    note: &'n NoteRecord,
    tags: BTreeSet<String>,
    /// Referenced titles, trimmed.
    links: BTreeSet<String>,
}

/// Parses every note and assembles the graph.
///
/// Notes are parsed in parallel; the output keeps the input order.
pub fn build_graph(notes: &[NoteRecord], filter: &GraphFilter) -> NoteGraph {
    let candidates: Vec<&NoteRecord> = notes
        .iter()
        .filter(|note| {
            let excluded = filter.excludes_title(&note.title);
            if excluded {
                debug!("Skipping excluded note <<{}>>", note.title);
            }
            !excluded
        })
        .collect();

    let extracted: Vec<Extracted<'_>> = candidates
        .par_iter()
        .filter_map(|note| extract(note, filter))
        .collect();

    let mut graph = NoteGraph::default();
    let mut pending_links = Vec::new();
    for item in extracted {
        if filter.prune && item.tags.is_empty() {
            debug!("Pruning note <<{}>> with no kept tags", item.note.title);
            continue;
        }
        let id = &item.note.id;
        graph.notes.push(NoteNode {
            id: id.clone(),
            title: item.note.title.clone(),
        });
        for tag in &item.tags {
            graph.tag_edges.push(TagEdge {
                tag: tag.clone(),
                note_id: id.clone(),
            });
        }
        graph.tags.extend(item.tags);
        pending_links.push((item.note, item.links));
    }

    let ids_by_title = index_titles(&graph.notes);
    for (note, links) in pending_links {
        for link in links {
            match ids_by_title.get(link.as_str()) {
                Some(dst) => graph.note_edges.push(NoteEdge {
                    src: note.id.clone(),
                    dst: (*dst).to_string(),
                }),
                None => warn!(
                    "Could not find note titled <<{link}>> linked from note <<{}>> ({})",
                    note.title, note.id
                ),
            }
        }
    }

    info!(
        "All notes processed, there are {} tags, {} (valid) notes, {} tag edges among them and {} note edges among them",
        graph.tags.len(),
        graph.notes.len(),
        graph.tag_edges.len(),
        graph.note_edges.len()
    );
    graph
}

fn extract<'n>(note: &'n NoteRecord, filter: &GraphFilter) -> Option<Extracted<'n>> {
    let Some(text) = filter.usable_text(note.text.as_deref()) else {
        warn!(
            "There is a problem parsing note <<{}>>: note has no usable text",
            note.title
        );
        return None;
    };

    let blocks = match parse_note(text) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!("There is a problem parsing note <<{}>>: {e}", note.title);
            return None;
        }
    };

    let mut tags = BTreeSet::new();
    let mut links = BTreeSet::new();
    for block in blocks {
        match block {
            Block::Tag(raw) => {
                let tag = normalize_tag(raw);
                if filter.keeps_tag(tag) {
                    tags.insert(tag.to_string());
                }
            }
            Block::NoteLink(title) => {
                links.insert(title.trim().to_string());
            }
            _ => {}
        }
    }

    Some(Extracted { note, tags, links })
}

/// Title to id, first note wins. Blank titles are never resolvable.
fn index_titles(notes: &[NoteNode]) -> HashMap<&str, &str> {
    let mut index = HashMap::new();
    for note in notes {
        let title = note.title.trim();
        if !title.is_empty() {
            index.entry(title).or_insert(note.id.as_str());
        }
    }
    index
}
