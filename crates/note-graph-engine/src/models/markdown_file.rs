use relative_path::{RelativePath, RelativePathBuf};

/// A markdown note file, addressed relative to the notes root
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    title: String,
}

impl MarkdownFile {
    /// Create a new MarkdownFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let title = Self::extract_title(&relative_path);
        Self {
            relative_path,
            title,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Stable note id: the relative path with forward slashes
    pub fn id(&self) -> &str {
        self.relative_path.as_str()
    }

    /// Get the note title (file name without .md extension)
    pub fn title(&self) -> &str {
        &self.title
    }

    fn extract_title(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
