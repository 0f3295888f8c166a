/// One typed unit of a parsed note body.
///
/// Every variant borrows its payload from the parsed input. The payload is the
/// semantic text of the construct: fences, backticks, `#` heading markers and
/// brackets are stripped. The only construct that keeps its marker is
/// [`Block::Tag`], whose `#` is part of the tag's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `# Heading` line; the text after the marker and space.
    Heading(&'a str),
    /// `#tag` token, including the leading `#`.
    Tag(&'a str),
    /// `[x] rest of line` checklist item; the text after the marker.
    Task(&'a str),
    /// Fenced code with a language token.
    FencedCode {
        /// The token right after the opening fence.
        language: &'a str,
        /// Body between the fences, opaque.
        text: &'a str,
    },
    /// Fenced code without a language token.
    BareFencedCode(&'a str),
    /// Single-backtick code span; the text between the backticks.
    InlineCode(&'a str),
    /// `[[Title]]` reference to another note; the title verbatim (untrimmed).
    NoteLink(&'a str),
    /// `[text](destination)` link.
    Link {
        text: &'a str,
        destination: &'a str,
    },
    /// `[text]` without a following destination.
    BracketFallback(&'a str),
    /// Run of ordinary prose.
    Text(&'a str),
    /// A single special character no structural matcher claimed.
    FallbackText(&'a str),
}

impl<'a> Block<'a> {
    /// The semantic payload of the block.
    pub fn text(&self) -> &'a str {
        match *self {
            Block::Heading(text)
            | Block::Tag(text)
            | Block::Task(text)
            | Block::BareFencedCode(text)
            | Block::InlineCode(text)
            | Block::NoteLink(text)
            | Block::BracketFallback(text)
            | Block::Text(text)
            | Block::FallbackText(text) => text,
            Block::FencedCode { text, .. } | Block::Link { text, .. } => text,
        }
    }

    /// The variant of this block, without its payload.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Tag(_) => BlockKind::Tag,
            Block::Task(_) => BlockKind::Task,
            Block::FencedCode { .. } => BlockKind::FencedCode,
            Block::BareFencedCode(_) => BlockKind::BareFencedCode,
            Block::InlineCode(_) => BlockKind::InlineCode,
            Block::NoteLink(_) => BlockKind::NoteLink,
            Block::Link { .. } => BlockKind::Link,
            Block::BracketFallback(_) => BlockKind::BracketFallback,
            Block::Text(_) => BlockKind::Text,
            Block::FallbackText(_) => BlockKind::FallbackText,
        }
    }
}

/// The closed set of block variants.
///
/// Each kind is also the matcher that recognises it (see
/// [`Matcher`](super::matchers::Matcher)), so the grammar is exactly this enum
/// arranged in [`BlockKind::PRIORITY`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Tag,
    Task,
    FencedCode,
    BareFencedCode,
    InlineCode,
    NoteLink,
    Link,
    BracketFallback,
    Text,
    FallbackText,
}

impl BlockKind {
    /// Ordered-choice priority, highest first.
    ///
    /// - line-start `#` constructs before prose, so prose never reaches a `#`
    ///   that could open a heading or tag
    /// - prose before every fence, since a run without specials cannot open one
    /// - the language fence before the bare fence
    /// - inline code before the bracket family
    /// - `[[` before `[...](...)` before `[...]`, most delimited first
    /// - the single-character fallback last
    pub const PRIORITY: [BlockKind; 11] = [
        BlockKind::Heading,
        BlockKind::Tag,
        BlockKind::Text,
        BlockKind::FencedCode,
        BlockKind::BareFencedCode,
        BlockKind::Task,
        BlockKind::InlineCode,
        BlockKind::NoteLink,
        BlockKind::Link,
        BlockKind::BracketFallback,
        BlockKind::FallbackText,
    ];
}
