/// Plain prose and the single-character fallback.
///
/// Every structural construct opens with one of [`Prose::SPECIALS`], so a
/// text run that stops before them hands control back to the ordered choice
/// at every position where a construct could start.
pub struct Prose;

impl Prose {
    /// Bytes that end a text run.
    pub const SPECIALS: [u8; 3] = [b'`', b'#', b'['];

    /// Bytes the fallback consumes one at a time.
    pub const FALLBACK: [u8; 4] = [b'`', b'#', b'|', b'['];

    pub fn is_special(b: u8) -> bool {
        Self::SPECIALS.contains(&b)
    }

    pub fn is_fallback(b: u8) -> bool {
        Self::FALLBACK.contains(&b)
    }
}
