use note_graph_config::{Config, ConfigError, EdgeSection, GraphSection, NodeSection};
use note_graph_engine::render::{EdgeStyle, GraphAttrs, NodeStyle};
use note_graph_engine::{DotStyle, GraphFilter, Labeler};

pub fn graph_filter(graph: &GraphSection) -> GraphFilter {
    GraphFilter {
        exclude_titles: graph.exclude_titles.clone(),
        exclude_tags: graph.exclude_tags.clone(),
        include_only_tags: graph.include_only_tags.clone(),
        prune: graph.prune,
        min_text_len: graph.min_text_length,
    }
}

/// Resolves palette colours and builds the renderer style.
pub fn dot_style(config: &Config) -> Result<DotStyle, ConfigError> {
    let config = config.resolved()?;
    let graph = &config.graph;

    Ok(DotStyle {
        graph: GraphAttrs {
            overlap: graph.overlap.clone(),
            sep: graph.sep.clone(),
            splines: graph.splines.clone(),
            bgcolor: graph.bgcolor.clone(),
            free_form: graph.free_form.clone(),
        },
        tag: node_style(&config.tag),
        note: node_style(&config.note),
        tag_link: edge_style(&config.tag_link),
        note_link: edge_style(&config.note_link),
        show_tag_edges: graph.show_tag_edges,
        show_note_edges: graph.show_note_edges,
        labeler: Labeler {
            max_label_length: graph.max_label_length,
            anonymise: graph.anonymise,
        },
        tag_url: graph.tag_url.clone(),
        note_url: graph.note_url.clone(),
    })
}

fn node_style(section: &NodeSection) -> NodeStyle {
    NodeStyle {
        shape: section.shape.clone(),
        style: section.style.clone(),
        fill_color: section.fill_color.clone(),
        strike_color: section.strike_color.clone(),
        free_form: section.free_form.clone(),
    }
}

fn edge_style(section: &EdgeSection) -> EdgeStyle {
    EdgeStyle {
        strike_color: section.strike_color.clone(),
        arrowhead: section.arrowhead.clone(),
        free_form: section.free_form.clone(),
    }
}
