/// Inline code span type with owned delimiter.
///
/// Code spans are raw zones: no other construct is recognised inside them.
pub struct InlineCode;

impl InlineCode {
    pub const TICK: u8 = b'`';

    /// One backtick, a non-empty run without backticks or newlines, one backtick.
    pub const PATTERN: &'static str = r"\A`([^`\n]+)`";
}
