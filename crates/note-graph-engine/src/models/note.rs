/// A note as supplied by storage: the parser's raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Unique identifier, stable across runs.
    pub id: String,
    /// The title other notes reference with `[[title]]`.
    pub title: String,
    /// Note body; `None` when storage has no text for the note.
    pub text: Option<String>,
}

impl NoteRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: Some(text.into()),
        }
    }

    /// A record whose storage had no body text.
    pub fn without_text(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: None,
        }
    }
}
