/// Heading line type with owned marker and pattern.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';

    /// One or more markers, a space, then the rest of the (non-empty) line.
    pub const PATTERN: &'static str = r"\A#+ ([^\n]+)";
}
