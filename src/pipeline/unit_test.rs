use crate::errors::ExtractorError;
use crate::pipeline::{extract_buffer, extract_file, ExtractOptions};
use crate::riff::OversizePolicy;
use std::fs;
use std::path::Path;

#[cfg(test)]
mod test_helpers {
    pub fn wem_chunk(declared: u32, fill: u8) -> Vec<u8> {
        let mut buf = b"RIFF".to_vec();
        buf.extend_from_slice(&declared.to_le_bytes());
        buf.extend_from_slice(b"WAVEfmt ");
        buf.resize(8 + declared as usize, fill);
        buf
    }
}

#[test]
fn test_single_chunk_with_trailing_bytes() {
    use test_helpers::*;
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bank.dat");
    let mut data = wem_chunk(24, 0x5A);
    data.extend_from_slice(&[0xEE; 8]);
    assert_eq!(data.len(), 40);

    let outcome =
        extract_buffer(&data, Path::new("bank.dat"), &dest, &ExtractOptions::default()).unwrap();
    assert_eq!(outcome.count(), 1);
    assert_eq!(outcome.bytes_written, 32);
    assert!(outcome.dir_created);
    assert!(!outcome.cleaned_up);
    assert_eq!(fs::read(dest.join("0.wem")).unwrap(), &data[..32]);
}

#[test]
fn test_no_match_leaves_no_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("empty.dat");
    let outcome = extract_buffer(
        b"nothing to see here, just bytes",
        Path::new("empty.dat"),
        &dest,
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome.count(), 0);
    assert!(!outcome.dir_created);
    assert!(!dest.exists());
}

#[test]
fn test_reject_policy_counts_rejections() {
    use test_helpers::*;
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("bad.dat");
    let mut data = wem_chunk(16, 0);
    data[4..8].copy_from_slice(&1000u32.to_le_bytes());

    let options = ExtractOptions {
        oversize: OversizePolicy::Reject,
        ..ExtractOptions::default()
    };
    let outcome = extract_buffer(&data, Path::new("bad.dat"), &dest, &options).unwrap();
    assert_eq!(outcome.count(), 0);
    assert_eq!(outcome.rejected, 1);
    assert!(!dest.exists());
}

#[test]
fn test_custom_extension() {
    use test_helpers::*;
    let tmp = tempfile::tempdir().unwrap();
    let options = ExtractOptions {
        extension: "riff".to_string(),
        ..ExtractOptions::default()
    };
    let outcome =
        extract_buffer(&wem_chunk(8, 0), Path::new("x"), tmp.path(), &options).unwrap();
    assert_eq!(outcome.chunks[0].path, tmp.path().join("0.riff"));
}

#[test]
fn test_unreadable_source_is_read_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.dat");
    match extract_file(&missing, tmp.path(), &ExtractOptions::default()) {
        Err(ExtractorError::Read(err)) => assert_eq!(err.path, missing),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_extract_file_uses_file_name_directory() {
    use test_helpers::*;
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("sound.cpk");
    fs::write(&source, [wem_chunk(8, 1), wem_chunk(12, 2)].concat()).unwrap();
    let out = tmp.path().join("out");

    let outcome = extract_file(&source, &out, &ExtractOptions::default()).unwrap();
    assert_eq!(outcome.dest_dir, out.join("sound.cpk"));
    assert_eq!(outcome.count(), 2);
    assert_eq!(outcome.chunks[1].start, outcome.chunks[0].end);
    assert_eq!(fs::read(out.join("sound.cpk/1.wem")).unwrap(), wem_chunk(12, 2));
}
