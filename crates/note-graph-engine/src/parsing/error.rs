use thiserror::Error;

/// Why a note body could not be parsed to the end.
///
/// Both variants carry the unparsed remainder. Neither can occur with the
/// built-in grammar; they guard against matcher sets that break its
/// coverage or progress guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("a matcher reported success without consuming input at <<{}>>", preview(.remaining))]
    StalledMatch { remaining: String },

    #[error("no matcher can process <<{}>>", preview(.remaining))]
    NoMatch { remaining: String },
}

impl ParseError {
    /// The input left when parsing stopped.
    pub fn remaining(&self) -> &str {
        match self {
            ParseError::StalledMatch { remaining } | ParseError::NoMatch { remaining } => remaining,
        }
    }
}

/// First few characters of `s` for diagnostics.
fn preview(s: &str) -> String {
    const MAX_CHARS: usize = 40;
    let mut out: String = s.chars().take(MAX_CHARS).collect();
    if s.chars().nth(MAX_CHARS).is_some() {
        out.push('…');
    }
    out
}
