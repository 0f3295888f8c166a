/// Which notes and tags make it into the graph.
///
/// Pattern lists match by substring; empty entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFilter {
    /// Notes whose title contains one of these (case-insensitive) are skipped.
    pub exclude_titles: Vec<String>,
    /// Tags containing one of these are dropped.
    pub exclude_tags: Vec<String>,
    /// When non-empty, only tags containing one of these are kept.
    pub include_only_tags: Vec<String>,
    /// Drop notes left without any kept tag.
    pub prune: bool,
    /// Notes whose trimmed text is shorter than this are skipped.
    pub min_text_len: usize,
}

impl Default for GraphFilter {
    fn default() -> Self {
        Self {
            exclude_titles: Vec::new(),
            exclude_tags: Vec::new(),
            include_only_tags: Vec::new(),
            prune: false,
            min_text_len: 1,
        }
    }
}

fn patterns(list: &[String]) -> impl Iterator<Item = &str> {
    list.iter().map(String::as_str).filter(|p| !p.is_empty())
}

impl GraphFilter {
    pub fn keeps_tag(&self, tag: &str) -> bool {
        if patterns(&self.exclude_tags).any(|p| tag.contains(p)) {
            return false;
        }
        let mut includes = patterns(&self.include_only_tags).peekable();
        includes.peek().is_none() || includes.any(|p| tag.contains(p))
    }

    pub fn excludes_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        patterns(&self.exclude_titles).any(|p| title.contains(&p.to_lowercase()))
    }

    /// The note text worth parsing, if any.
    pub fn usable_text<'t>(&self, text: Option<&'t str>) -> Option<&'t str> {
        text.filter(|t| t.trim().chars().count() >= self.min_text_len.max(1))
    }
}
