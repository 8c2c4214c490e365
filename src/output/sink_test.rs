#[cfg(test)]
mod tests {
    use crate::errors::ExtractorError;
    use crate::output::OutputSink;
    use std::fs;

    #[test]
    fn test_lazy_directory_and_dense_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("sub").join("bank.dat");
        let mut sink = OutputSink::new(&dest, "wem");
        assert!(!dest.exists());

        let first = sink.emit(b"RIFF0").unwrap();
        let second = sink.emit(b"RIFF11").unwrap();
        assert!(sink.dir_created());
        assert_eq!(sink.emitted(), 2);
        assert_eq!(first, dest.join("0.wem"));
        assert_eq!(second, dest.join("1.wem"));
        assert_eq!(fs::read(&first).unwrap(), b"RIFF0");
        assert_eq!(fs::read(&second).unwrap(), b"RIFF11");
    }

    #[test]
    fn test_existing_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = OutputSink::new(tmp.path(), "bin");
        sink.emit(&[]).unwrap();
        assert!(!sink.dir_created());
        assert_eq!(fs::read(tmp.path().join("0.bin")).unwrap(), b"");
    }

    #[test]
    fn test_blocked_directory_reports_output_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let mut sink = OutputSink::new(blocker.join("dest"), "wem");
        match sink.emit(b"RIFF") {
            Err(ExtractorError::Output(err)) => assert_eq!(err.path, blocker.join("dest")),
            other => panic!("expected output error, got {:?}", other),
        }
        assert_eq!(sink.emitted(), 0);
    }
}
