pub mod markdown_file;
pub mod note;

pub use markdown_file::MarkdownFile;
pub use note::NoteRecord;
