/// Fenced code type with owned fence and patterns.
///
/// Bodies are raw zones: they run to the next ```` ``` ```` and may not
/// contain a backtick. A single newline straight after the closing fence is
/// consumed with the block.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Fence, language token, the newline ending the opening line, body.
    pub const LANGUAGE_PATTERN: &'static str = r"\A```(\S+)\n?([^`]*)```\n?";

    /// Fence, any whitespace, body. Only tried once the language form failed.
    pub const BARE_PATTERN: &'static str = r"\A```\s*([^`]*)```\n?";
}
