use super::{error::ParseError, matchers::Matcher, types::Block};

/// Repeats one matcher until the input is exhausted.
///
/// The matcher is normally an [`OrderedChoice`](super::OrderedChoice); the
/// driver knows nothing about the grammar beyond the [`Matcher`] contract.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<M> {
    matcher: M,
}

/// One driver step: the block produced and the input still to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub block: Block<'a>,
    /// Empty once the input is exhausted.
    pub rest: &'a str,
}

impl<M: Matcher> Sequence<M> {
    pub const fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Parses `input` into its flat block sequence.
    ///
    /// Empty input yields an empty sequence.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Vec<Block<'a>>, ParseError> {
        self.steps(input)
            .map(|step| step.map(|step| step.block))
            .collect()
    }

    /// Lazily runs the driver, yielding each step.
    ///
    /// The iterator ends after the input is exhausted or after the first
    /// error.
    pub fn steps<'s, 'a>(&'s self, input: &'a str) -> Steps<'s, 'a, M> {
        let state = if input.is_empty() {
            State::Done
        } else {
            State::Running(input)
        };
        Steps {
            matcher: &self.matcher,
            state,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    Running(&'a str),
    Done,
    Failed,
}

/// Iterator returned by [`Sequence::steps`].
pub struct Steps<'s, 'a, M> {
    matcher: &'s M,
    state: State<'a>,
}

impl<'a, M: Matcher> Iterator for Steps<'_, 'a, M> {
    type Item = Result<Step<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Running(remaining) = self.state else {
            return None;
        };

        let Some((block, rest)) = self.matcher.attempt(remaining) else {
            self.state = State::Failed;
            return Some(Err(ParseError::NoMatch {
                remaining: remaining.to_owned(),
            }));
        };

        let rest = rest.unwrap_or_default();
        // Every step must shrink the input, otherwise the driver would spin.
        if rest.len() >= remaining.len() {
            self.state = State::Failed;
            return Some(Err(ParseError::StalledMatch {
                remaining: remaining.to_owned(),
            }));
        }

        log::trace!(
            "{:?} claimed {} bytes, {} left",
            block.kind(),
            remaining.len() - rest.len(),
            rest.len()
        );

        self.state = if rest.is_empty() {
            State::Done
        } else {
            State::Running(rest)
        };
        Some(Ok(Step { block, rest }))
    }
}
