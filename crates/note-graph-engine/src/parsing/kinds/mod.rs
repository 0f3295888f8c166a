//! # Block Kinds
//!
//! Per-kind types that own their syntax: delimiters and the patterns built
//! from them live here, never in the matcher code.
//!
//! ## Types
//!
//! - **`Heading`**: `#` runs followed by a space
//! - **`Tag`**: `#token`, plus the trailing punctuation rules
//! - **`Task`**: `[x]` checklist marker
//! - **`CodeFence`**: ```` ``` ```` with and without a language token
//! - **`InlineCode`**: single backtick spans
//! - **`NoteLink`**: `[[Title]]`
//! - **`Link`**: `[text](destination)` and the bare `[text]` fallback
//! - **`Prose`**: the special characters that end a text run, and the ones
//!   the single-character fallback may consume

pub mod code_fence;
pub mod heading;
pub mod inline_code;
pub mod link;
pub mod note_link;
pub mod prose;
pub mod tag;
pub mod task;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use inline_code::InlineCode;
pub use link::Link;
pub use note_link::NoteLink;
pub use prose::Prose;
pub use tag::Tag;
pub use task::Task;
