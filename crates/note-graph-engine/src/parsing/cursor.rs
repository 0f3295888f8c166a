/// A byte cursor over the remaining input of a single match attempt.
///
/// Only ever stops on ASCII bytes the grammar cares about, so every position
/// it reports is a valid char boundary of `s`.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being matched.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances while `pred` holds, returning how many bytes were consumed.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// The input consumed so far.
    pub fn consumed(&self) -> &'a str {
        &self.s[..self.i]
    }

    /// The input not yet consumed.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.consumed(), "");
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
        assert_eq!(cur.consumed(), "h");
        assert_eq!(cur.rest(), "ello");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("[[link]]");
        assert!(cur.starts_with("[["));
        assert!(!cur.starts_with("]]"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with("abcdef"));

        cur.bump();
        assert!(!cur.starts_with("bc"));
        assert!(cur.starts_with("b"));
    }

    #[test]
    fn bump_while_stops_on_predicate() {
        let mut cur = Cursor::new("abc#def");
        assert_eq!(cur.bump_while(|b| b != b'#'), 3);
        assert_eq!(cur.peek(), Some(b'#'));
        assert_eq!(cur.consumed(), "abc");
    }

    #[test]
    fn bump_while_keeps_multibyte_chars_whole() {
        let mut cur = Cursor::new("héllo wörld[x");
        cur.bump_while(|b| b != b'[');
        assert_eq!(cur.consumed(), "héllo wörld");
        assert_eq!(cur.rest(), "[x");
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.consumed(), "x");
        assert_eq!(cur.rest(), "");
    }
}
