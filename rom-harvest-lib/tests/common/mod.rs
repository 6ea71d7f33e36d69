#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use rom_harvest_lib::{Extractor, HarvestError};
use zip::write::FileOptions;

/// Materializes a fixed list of entries for each known archive name.
///
/// Entries may contain `/` to create subdirectories. Each file holds its own
/// entry name unless explicit contents were registered.
#[derive(Debug, Default)]
pub struct FakeExtractor {
    archives: HashMap<String, Vec<String>>,
    contents: HashMap<String, Vec<u8>>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archive(mut self, name: &str, entries: &[&str]) -> Self {
        self.archives.insert(
            name.to_string(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    pub fn content(mut self, entry: &str, data: Vec<u8>) -> Self {
        self.contents.insert(entry.to_string(), data);
        self
    }
}

impl Extractor for FakeExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), HarvestError> {
        let name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let entries = self
            .archives
            .get(name)
            .ok_or_else(|| HarvestError::extraction(archive, "Can not open the file as archive"))?;

        fs::create_dir_all(dest)?;
        for entry in entries {
            let path = dest.join(entry);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let data = self
                .contents
                .get(entry)
                .cloned()
                .unwrap_or_else(|| entry.as_bytes().to_vec());
            fs::write(&path, data)?;
        }
        Ok(())
    }
}

/// Build an in-memory zip file.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        let options: FileOptions<'_, ()> = FileOptions::default();
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Create an empty file, with its parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

/// Sorted file names directly inside `dir`; empty if it does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
