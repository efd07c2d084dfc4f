use std::fs;
use std::path::{Path, PathBuf};

/// Non-recursive listing of the csv sources in a data directory, sorted by
/// file name. An unreadable directory lists as empty.
pub fn list_csv_files(path: &Path) -> Vec<PathBuf> {
    match fs::read_dir(path) {
        Ok(entries) => {
            let mut files: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "csv"))
                .collect();
            files.sort();
            files
        }
        Err(_) => vec![],
    }
}
