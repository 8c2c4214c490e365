#![allow(dead_code)]

pub mod log_capture;

use std::fs;
use std::path::{Path, PathBuf};

/// A well-formed chunk: `RIFF`, `declared` as little endian, `WAVEfmt `, filler.
pub fn wem_chunk(declared: u32, fill: u8) -> Vec<u8> {
    let mut buf = b"RIFF".to_vec();
    buf.extend_from_slice(&declared.to_le_bytes());
    buf.extend_from_slice(b"WAVEfmt ");
    buf.resize(8 + declared as usize, fill);
    buf
}

pub fn write_file(root: &Path, relative: &str, data: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, data).unwrap();
    path
}

/// Every file under `root` as (relative path, contents), sorted by path.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files = Vec::new();
    collect(root, root, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<(PathBuf, Vec<u8>)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path.strip_prefix(root).unwrap().to_path_buf();
            files.push((rel, fs::read(&path).unwrap()));
        }
    }
}
