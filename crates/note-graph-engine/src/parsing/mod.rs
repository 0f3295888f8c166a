//! # Note Body Parsing
//!
//! Tokenises a free-form note body into one flat, ordered sequence of
//! [`Block`]s. Downstream code only cares about tags and note references,
//! but it needs code spans recognised so that tags quoted inside code do not
//! leak into the graph.
//!
//! ## Architecture
//!
//! The grammar is an ordered choice over anchored matchers, repeated until the
//! input runs out:
//!
//! - **`types`**: `Block` (the output) and `BlockKind` (the closed variant set,
//!   each kind doubling as its own matcher)
//! - **`kinds`**: delimiter and pattern ownership, one type per construct
//! - **`matchers`**: the `Matcher` contract and one recogniser per kind
//! - **`choice`**: `OrderedChoice`, first success wins
//! - **`sequence`**: `Sequence`, the driver that repeats one matcher and
//!   fails instead of looping when no progress is made
//!
//! ## Raw Zones
//!
//! Fenced and inline code bodies are opaque payloads. `` `#tag` `` parses as a
//! single `InlineCode` block, never as a `Tag`.
//!
//! ## Recovery
//!
//! Text runs stop before every `` ` ``, `#` and `[`. If no structural matcher
//! claims one of those, `FallbackText` consumes that single character, so
//! malformed input such as an unclosed bracket still parses.
//!
//! Matchers only ever see the remaining input, so "start of line" for
//! headings and tags means the start of whatever is left to parse.

pub mod choice;
pub mod cursor;
pub mod error;
pub mod kinds;
pub mod matchers;
pub mod sequence;
pub mod types;

pub use choice::OrderedChoice;
pub use error::ParseError;
pub use matchers::{Matched, Matcher};
pub use sequence::{Sequence, Step, Steps};
pub use types::{Block, BlockKind};

/// One note-body block: every [`BlockKind`] in priority order.
pub const NOTE_BLOCK: OrderedChoice<'static> = OrderedChoice::new(&BlockKind::PRIORITY);

/// Shared, stateless parser for whole note bodies.
pub static NOTE_PARSER: Sequence<OrderedChoice<'static>> = Sequence::new(NOTE_BLOCK);

/// Parses a note body with [`NOTE_PARSER`].
pub fn parse_note(text: &str) -> Result<Vec<Block<'_>>, ParseError> {
    NOTE_PARSER.parse(text)
}

#[cfg(test)]
mod tests;
