use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportedDocument;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(PathBuf),
}

/// Read an HTML file as UTF-8
pub fn read_html_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write an exported document into `dir` under its own file name
pub fn write_document(dir: &Path, document: &ExportedDocument) -> Result<PathBuf, IoError> {
    let path = dir.join(&document.file_name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&path, &document.bytes).map_err(IoError::Io)?;
    log::debug!("Wrote {} bytes to {}", document.bytes.len(), path.display());
    Ok(path)
}

/// Find `.html` and `.htm` files under `dir`, recursively, sorted by path
pub fn scan_html_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidInputDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

pub fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_html_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}
