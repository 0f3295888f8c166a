/// Markdown link type, and the bracket span left over when no destination
/// follows.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';

    pub const PATTERN: &'static str = r"\A\[([^\]]*)\]\(([^)]*)\)";

    pub const BRACKET_PATTERN: &'static str = r"\A\[([^\]]*)\]";
}
