use crate::models::{MarkdownFile, NoteRecord};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Note path is not inside the notes directory: {0}")]
    OutsideNotesDir(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load every note under `notes_root` as a [`NoteRecord`].
///
/// Notes are returned in path order. Empty files carry no text.
pub fn load_notes(notes_root: &Path) -> Result<Vec<NoteRecord>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut notes = Vec::new();
    for path in scan_markdown_files(notes_root)? {
        let relative = path
            .strip_prefix(notes_root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| IoError::OutsideNotesDir(path.clone()))?;
        let file = MarkdownFile::new(relative);
        let content = read_file(file.relative_path(), notes_root)?;

        let note = if content.is_empty() {
            NoteRecord::without_text(file.id(), file.title())
        } else {
            NoteRecord::new(file.id(), file.title(), content)
        };
        notes.push(note);
    }

    log::info!(
        "Loaded {} notes from {}",
        notes.len(),
        notes_root.display()
    );
    Ok(notes)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
