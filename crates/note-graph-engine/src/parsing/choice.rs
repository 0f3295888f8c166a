use super::{
    matchers::{Matched, Matcher},
    types::BlockKind,
};

/// First-match-wins choice over a fixed list of matchers.
///
/// Later matchers are never consulted once one succeeds, even if they would
/// claim a longer span.
#[derive(Debug, Clone, Copy)]
pub struct OrderedChoice<'m, M = BlockKind> {
    matchers: &'m [M],
}

impl<'m, M> OrderedChoice<'m, M> {
    pub const fn new(matchers: &'m [M]) -> Self {
        Self { matchers }
    }
}

impl<M: Matcher> Matcher for OrderedChoice<'_, M> {
    fn attempt<'a>(&self, input: &'a str) -> Option<Matched<'a>> {
        self.matchers.iter().find_map(|m| m.attempt(input))
    }
}
