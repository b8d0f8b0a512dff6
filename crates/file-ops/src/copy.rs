//! Streamed byte copy into the install destination.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::FileOpsError;

/// Copies the contents of `src` to `dst`, creating or truncating `dst`.
///
/// Returns the number of bytes written. See [`copy_stream`] for how a
/// failed transfer is cleaned up.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, FileOpsError> {
    let mut reader = File::open(src).map_err(|source| FileOpsError::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    copy_stream(&mut reader, dst)
}

/// Writes everything `reader` yields to a newly created `dst`.
///
/// If the transfer fails after `dst` was created, the partially written
/// file is deleted before the error is returned.
pub fn copy_stream<R: Read + ?Sized>(reader: &mut R, dst: &Path) -> Result<u64, FileOpsError> {
    let mut writer = File::create(dst).map_err(|source| FileOpsError::CreateDestination {
        path: dst.to_path_buf(),
        source,
    })?;

    let result = io::copy(reader, &mut writer).and_then(|n| writer.sync_all().map(|()| n));
    drop(writer);

    match result {
        Ok(bytes) => {
            tracing::debug!(path = %dst.display(), bytes, "copied");
            Ok(bytes)
        }
        Err(source) => {
            if let Err(e) = std::fs::remove_file(dst) {
                tracing::warn!(path = %dst.display(), error = %e, "failed to remove partial file");
            } else {
                tracing::debug!(path = %dst.display(), "removed partial file");
            }
            Err(FileOpsError::Transfer {
                path: dst.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields `prefix` and then fails.
    struct FailingReader {
        prefix: Vec<u8>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.prefix.is_empty() {
                return Err(io::Error::other("disk went away"));
            }
            let n = self.prefix.len().min(buf.len());
            buf[..n].copy_from_slice(&self.prefix[..n]);
            self.prefix.drain(..n);
            Ok(n)
        }
    }

    #[test]
    fn copy_file_identical_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("hello");
        let dst = tmp.path().join("out");
        let data: Vec<u8> = (0..=255u8).cycle().take(100_000).collect();
        std::fs::write(&src, &data).unwrap();

        let n = copy_file(&src, &dst).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(std::fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn copy_file_truncates_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("hello");
        let dst = tmp.path().join("out");
        std::fs::write(&src, b"short").unwrap();
        std::fs::write(&dst, b"a much longer previous binary").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"short");
    }

    #[test]
    fn copy_file_empty_source() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("empty");
        let dst = tmp.path().join("out");
        std::fs::write(&src, b"").unwrap();

        assert_eq!(copy_file(&src, &dst).unwrap(), 0);
        assert!(dst.is_file());
    }

    #[test]
    fn copy_file_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let dst = tmp.path().join("out");

        let err = copy_file(&tmp.path().join("missing"), &dst).unwrap_err();
        assert!(matches!(err, FileOpsError::OpenSource { .. }));
        assert!(!dst.exists(), "destination must not be created");
    }

    #[test]
    fn copy_file_unwritable_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("hello");
        std::fs::write(&src, b"HELLOWRLD").unwrap();

        let dst = tmp.path().join("no-such-dir").join("hello");
        let err = copy_file(&src, &dst).unwrap_err();
        assert!(matches!(err, FileOpsError::CreateDestination { .. }));
        assert_eq!(err.path(), dst);
    }

    #[test]
    fn failed_transfer_removes_partial_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dst = tmp.path().join("out");
        let mut reader = FailingReader {
            prefix: b"HALF".to_vec(),
        };

        let err = copy_stream(&mut reader, &dst).unwrap_err();
        assert!(matches!(err, FileOpsError::Transfer { .. }));
        assert!(err.to_string().contains("disk went away"));
        assert!(!dst.exists(), "partial file should be removed");
    }
}
