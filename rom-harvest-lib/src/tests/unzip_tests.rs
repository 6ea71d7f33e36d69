use super::*;

use std::io::Write;

use tempfile::TempDir;
use zip::write::FileOptions;

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, data) in entries {
        let options: FileOptions<'_, ()> = FileOptions::default();
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn extracts_every_file() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("Tetris (World).zip");
    write_zip(
        &zip_path,
        &[("Tetris (World).gb", b"rom data"), ("docs/readme.txt", b"hi")],
    );
    let dest = dir.path().join("out");

    let count = unzip_into(&zip_path, &dest).unwrap();
    assert_eq!(count, 2);
    assert_eq!(fs::read(dest.join("Tetris (World).gb")).unwrap(), b"rom data");
    assert_eq!(fs::read(dest.join("docs").join("readme.txt")).unwrap(), b"hi");
    assert!(zip_path.exists());
}

#[test]
fn skips_entries_escaping_destination() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("evil.zip");
    write_zip(&zip_path, &[("../escape.gb", b"x"), ("ok.gb", b"y")]);
    let dest = dir.path().join("out");

    let count = unzip_into(&zip_path, &dest).unwrap();
    assert_eq!(count, 1);
    assert!(!dir.path().join("escape.gb").exists());
    assert!(dest.join("ok.gb").exists());
}

#[test]
fn invalid_zip_is_an_error() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("broken.zip");
    fs::write(&zip_path, b"not a zip").unwrap();

    let err = unzip_into(&zip_path, dir.path()).unwrap_err();
    assert!(matches!(err, HarvestError::Zip(_)));
}
