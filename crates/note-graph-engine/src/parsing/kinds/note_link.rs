pub struct NoteLink;

impl NoteLink {
    pub const OPEN: &'static str = "[[";

    pub const PATTERN: &'static str = r"\A\[\[([^\]]*)\]\]";
}
