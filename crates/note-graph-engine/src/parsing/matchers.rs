use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    cursor::Cursor,
    kinds::{CodeFence, Heading, InlineCode, Link, NoteLink, Prose, Tag, Task},
    types::{Block, BlockKind},
};

/// A successful match: the block and the unconsumed suffix of the input.
///
/// An exhausted input is reported as `None` rather than an empty string.
pub type Matched<'a> = (Block<'a>, Option<&'a str>);

/// Recognises one construct at the very start of `input`.
///
/// Matchers never search ahead and never mutate or consume anything on
/// failure. On success the returned suffix must be strictly shorter than
/// `input`; [`Sequence`](super::Sequence) treats anything else as a stall.
pub trait Matcher {
    fn attempt<'a>(&self, input: &'a str) -> Option<Matched<'a>>;
}

impl Matcher for BlockKind {
    fn attempt<'a>(&self, input: &'a str) -> Option<Matched<'a>> {
        match self {
            BlockKind::Heading => match_heading(input),
            BlockKind::Tag => match_tag(input),
            BlockKind::Task => match_task(input),
            BlockKind::FencedCode => match_fenced_code(input),
            BlockKind::BareFencedCode => match_bare_fenced_code(input),
            BlockKind::InlineCode => match_inline_code(input),
            BlockKind::NoteLink => match_note_link(input),
            BlockKind::Link => match_link(input),
            BlockKind::BracketFallback => match_bracket(input),
            BlockKind::Text => match_text(input),
            BlockKind::FallbackText => match_fallback(input),
        }
    }
}

/// Normalises an exhausted suffix to `None`.
fn remainder(rest: &str) -> Option<&str> {
    if rest.is_empty() { None } else { Some(rest) }
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid block pattern"))
}

/// Runs an anchored pattern, returning its captures and the text after the match.
fn anchored<'a>(re: &Regex, input: &'a str) -> Option<(Captures<'a>, &'a str)> {
    let caps = re.captures(input)?;
    let end = caps.get(0)?.end();
    Some((caps, &input[end..]))
}

fn group<'a>(caps: &Captures<'a>, i: usize) -> Option<&'a str> {
    caps.get(i).map(|m| m.as_str())
}

fn match_heading(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(Heading::MARKER) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, Heading::PATTERN), input)?;
    Some((Block::Heading(group(&caps, 1)?), remainder(rest)))
}

fn match_tag(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(Tag::MARKER) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, Tag::PATTERN), input)?;
    Some((Block::Tag(group(&caps, 1)?), remainder(rest)))
}

fn match_task(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(Task::OPEN) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, Task::PATTERN), input)?;
    Some((Block::Task(group(&caps, 1)?), remainder(rest)))
}

fn match_fenced_code(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !Cursor::new(input).starts_with(CodeFence::FENCE) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, CodeFence::LANGUAGE_PATTERN), input)?;
    let block = Block::FencedCode {
        language: group(&caps, 1)?,
        text: group(&caps, 2)?,
    };
    Some((block, remainder(rest)))
}

fn match_bare_fenced_code(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !Cursor::new(input).starts_with(CodeFence::FENCE) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, CodeFence::BARE_PATTERN), input)?;
    Some((Block::BareFencedCode(group(&caps, 1)?), remainder(rest)))
}

fn match_inline_code(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(InlineCode::TICK) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, InlineCode::PATTERN), input)?;
    Some((Block::InlineCode(group(&caps, 1)?), remainder(rest)))
}

fn match_note_link(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !Cursor::new(input).starts_with(NoteLink::OPEN) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, NoteLink::PATTERN), input)?;
    Some((Block::NoteLink(group(&caps, 1)?), remainder(rest)))
}

fn match_link(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(Link::OPEN) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, Link::PATTERN), input)?;
    let block = Block::Link {
        text: group(&caps, 1)?,
        destination: group(&caps, 2)?,
    };
    Some((block, remainder(rest)))
}

fn match_bracket(input: &str) -> Option<Matched<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if Cursor::new(input).peek() != Some(Link::OPEN) {
        return None;
    }
    let (caps, rest) = anchored(compiled(&RE, Link::BRACKET_PATTERN), input)?;
    Some((Block::BracketFallback(group(&caps, 1)?), remainder(rest)))
}

/// Longest run of bytes outside [`Prose::SPECIALS`].
fn match_text(input: &str) -> Option<Matched<'_>> {
    let mut cur = Cursor::new(input);
    if cur.bump_while(|b| !Prose::is_special(b)) == 0 {
        return None;
    }
    Some((Block::Text(cur.consumed()), remainder(cur.rest())))
}

/// Exactly one [`Prose::FALLBACK`] byte.
fn match_fallback(input: &str) -> Option<Matched<'_>> {
    let mut cur = Cursor::new(input);
    match cur.peek() {
        Some(b) if Prose::is_fallback(b) => {
            cur.bump();
            Some((Block::FallbackText(cur.consumed()), remainder(cur.rest())))
        }
        _ => None,
    }
}
