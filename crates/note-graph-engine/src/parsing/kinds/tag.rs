/// Hashtag type with owned marker, pattern and punctuation sets.
///
/// A tag is `#`, a character that is neither `#` nor whitespace, then one or
/// more non-whitespace characters. The pattern allows one trailing
/// punctuation character outside the capture, but the greedy token run
/// absorbs it first, so captured tags usually keep their punctuation. That is
/// why graph assembly strips one character from [`Tag::CLEANUP_SUFFIXES`]
/// again before comparing tags.
pub struct Tag;

impl Tag {
    pub const MARKER: u8 = b'#';

    pub const PATTERN: &'static str = r"\A(#[^#\s]\S+)[.,!?]?";

    /// Characters stripped (once) from the end of a captured tag.
    pub const CLEANUP_SUFFIXES: [char; 4] = ['#', ',', '!', '.'];

    /// Strips one trailing [`Tag::CLEANUP_SUFFIXES`] character, if present.
    pub fn normalize(tag: &str) -> &str {
        tag.strip_suffix(Self::CLEANUP_SUFFIXES).unwrap_or(tag)
    }
}
