use std::fs::File;
use std::path::PathBuf;
use zip::ZipArchive;

use crate::error::Result;

/// Where a batch of workbook files comes from: a directory on disk or a
/// zip archive. Listing is synchronous and returns the full materialized
/// set of member paths.
#[derive(Debug, Clone)]
pub enum FileSource {
    Directory(PathBuf),
    ZipArchive(PathBuf),
}

impl FileSource {
    pub fn list(&self) -> Result<Vec<String>> {
        match self {
            FileSource::Directory(dir) => {
                let mut files = Vec::new();
                for entry in std::fs::read_dir(dir)? {
                    let entry = entry?;
                    if entry.file_type()?.is_file() {
                        files.push(entry.path().to_string_lossy().to_string());
                    }
                }
                // read_dir order is platform-dependent
                files.sort();
                Ok(files)
            }
            FileSource::ZipArchive(path) => {
                let mut archive = ZipArchive::new(File::open(path)?)?;
                let mut files = Vec::with_capacity(archive.len());
                for i in 0..archive.len() {
                    files.push(archive.by_index(i)?.name().to_string());
                }
                Ok(files)
            }
        }
    }
}
