use super::*;

use tempfile::TempDir;

#[test]
fn local_move_renames_file() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("Tetris (World).zip");
    fs::write(&from, b"rom").unwrap();
    let out = dir.path().join("out");

    let ops = LocalFileOps;
    ops.create_dir_all(&out).unwrap();
    ops.move_file(&from, &out.join("Tetris (World).zip")).unwrap();

    assert!(!from.exists());
    assert_eq!(fs::read(out.join("Tetris (World).zip")).unwrap(), b"rom");
}

#[test]
fn dry_run_leaves_files_in_place() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("Tetris (World).zip");
    fs::write(&from, b"rom").unwrap();
    let out = dir.path().join("out");

    let ops = DryRunFileOps;
    ops.create_dir_all(&out).unwrap();
    ops.move_file(&from, &out.join("Tetris (World).zip")).unwrap();
    ops.remove_file(&from).unwrap();

    assert!(from.exists());
    assert!(!out.exists());
}

#[test]
fn dry_run_still_removes_scratch() {
    let dir = TempDir::new().unwrap();
    let scratch = dir.path().join("scratch");
    fs::create_dir_all(scratch.join("sub")).unwrap();
    fs::write(scratch.join("sub").join("file.zip"), b"x").unwrap();

    DryRunFileOps.remove_dir_all(&scratch).unwrap();
    assert!(!scratch.exists());
}
