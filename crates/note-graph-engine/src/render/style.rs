use std::fmt;

use super::label::Labeler;

/// Attributes shared by every tag node or every note node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: String,
    pub style: String,
    pub fill_color: String,
    pub strike_color: String,
    /// Raw DOT attributes appended verbatim.
    pub free_form: String,
}

/// Attributes shared by every tag edge or every note edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStyle {
    pub strike_color: String,
    pub arrowhead: String,
    pub free_form: String,
}

/// The `graph [...]` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphAttrs {
    pub overlap: String,
    pub sep: String,
    pub splines: String,
    pub bgcolor: String,
    pub free_form: String,
}

/// Everything [`render_dot`](super::render_dot) needs besides the graph itself.
///
/// Colours are final DOT colour strings; palette lookups happen before this
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotStyle {
    pub graph: GraphAttrs,
    pub tag: NodeStyle,
    pub note: NodeStyle,
    pub tag_link: EdgeStyle,
    pub note_link: EdgeStyle,
    pub show_tag_edges: bool,
    pub show_note_edges: bool,
    pub labeler: Labeler,
    /// URL template for tag nodes, `{tag}` is replaced by the tag.
    pub tag_url: String,
    /// URL template for note nodes, `{id}` is replaced by the note id.
    pub note_url: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            graph: GraphAttrs {
                overlap: "false".to_string(),
                sep: "+8".to_string(),
                splines: "true".to_string(),
                bgcolor: "#fdf6e3".to_string(),
                free_form: String::new(),
            },
            tag: NodeStyle {
                shape: "box".to_string(),
                style: "filled,rounded".to_string(),
                fill_color: "#b58900".to_string(),
                strike_color: "#586e75".to_string(),
                free_form: String::new(),
            },
            note: NodeStyle {
                shape: "ellipse".to_string(),
                style: "filled".to_string(),
                fill_color: "#268bd2".to_string(),
                strike_color: "#586e75".to_string(),
                free_form: String::new(),
            },
            tag_link: EdgeStyle {
                strike_color: "#b58900".to_string(),
                arrowhead: "none".to_string(),
                free_form: String::new(),
            },
            note_link: EdgeStyle {
                strike_color: "#268bd2".to_string(),
                arrowhead: "normal".to_string(),
                free_form: String::new(),
            },
            show_tag_edges: true,
            show_note_edges: true,
            labeler: Labeler::default(),
            tag_url: "bear://x-callback-url/open-tag?name={tag}".to_string(),
            note_url: "bear://x-callback-url/open-note?id={id}".to_string(),
        }
    }
}

impl DotStyle {
    pub fn anonymise(&self) -> bool {
        self.labeler.anonymise
    }

    pub fn tag_url(&self, tag: &str) -> String {
        self.url(&self.tag_url, "{tag}", tag)
    }

    pub fn note_url(&self, id: &str) -> String {
        self.url(&self.note_url, "{id}", id)
    }

    fn url(&self, template: &str, placeholder: &str, value: &str) -> String {
        if self.anonymise() {
            return String::new();
        }
        template.replace(placeholder, value).replace('"', "%22")
    }
}

fn free_form(f: &mut fmt::Formatter<'_>, extra: &str) -> fmt::Result {
    if extra.is_empty() {
        Ok(())
    } else {
        write!(f, ", {extra}")
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"shape={}, style="{}", color="{}", fillcolor="{}""#,
            self.shape, self.style, self.strike_color, self.fill_color
        )?;
        free_form(f, &self.free_form)
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"color="{}", arrowhead={}"#,
            self.strike_color, self.arrowhead
        )?;
        free_form(f, &self.free_form)
    }
}

impl fmt::Display for GraphAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"graph [overlap={}, sep="{}", splines={}, bgcolor="{}""#,
            self.overlap, self.sep, self.splines, self.bgcolor
        )?;
        free_form(f, &self.free_form)?;
        f.write_str("]")
    }
}
