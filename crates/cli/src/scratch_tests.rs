// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use tempfile::TempDir;

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn create_writes_contents_with_prefix() {
    let dir = TempDir::new().unwrap();
    let scratch = ScratchFile::create_in(dir.path(), "actualYaml", b"x: 1\n").unwrap();

    assert_eq!(scratch.path().parent(), Some(dir.path()));
    let name = scratch.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("actualYaml"), "{name}");
    assert_eq!(std::fs::read(scratch.path()).unwrap(), b"x: 1\n");
}

#[test]
fn empty_contents_are_allowed() {
    let dir = TempDir::new().unwrap();
    let scratch = ScratchFile::create_in(dir.path(), "actualYaml", b"").unwrap();
    assert!(std::fs::read(scratch.path()).unwrap().is_empty());
}

#[test]
fn drop_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = {
        let scratch = ScratchFile::create_in(dir.path(), "actualYaml", b"x").unwrap();
        scratch.path().to_path_buf()
    };
    assert!(!path.exists());
    assert!(entries(dir.path()).is_empty());
}

#[test]
fn names_are_unique() {
    let dir = TempDir::new().unwrap();
    let a = ScratchFile::create_in(dir.path(), "actualYaml", b"a").unwrap();
    let b = ScratchFile::create_in(dir.path(), "actualYaml", b"b").unwrap();
    assert_ne!(a.path(), b.path());
    assert_eq!(entries(dir.path()).len(), 2);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    assert!(ScratchFile::create_in(&missing, "actualYaml", b"x").is_err());
    assert!(!missing.exists());
}
