//! Bounded file loading.

use crate::error::CheckError;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{self, Read};

/// Largest settings, rule, or config file inicheck will read.
pub const MAX_INPUT_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct LoadedFile {
    pub path: Utf8PathBuf,
    /// Size on disk, in bytes.
    pub size: u64,
    /// Contents; invalid UTF-8 is replaced rather than rejected.
    pub text: String,
}

/// Read `path` in one go, refusing files larger than `limit` before reading them.
pub fn read_bounded(path: &Utf8Path, limit: u64) -> Result<LoadedFile, CheckError> {
    let io_err = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            CheckError::FileNotFound {
                path: path.to_owned(),
            }
        } else {
            CheckError::Io {
                path: path.to_owned(),
                source,
            }
        }
    };

    let meta = std::fs::metadata(path).map_err(io_err)?;
    if !meta.is_file() {
        return Err(CheckError::NotAFile {
            path: path.to_owned(),
        });
    }
    if meta.len() > limit {
        return Err(CheckError::TooLarge {
            path: path.to_owned(),
            size: meta.len(),
            limit,
        });
    }

    let file = File::open(path).map_err(io_err)?;
    let mut bytes = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or_default());
    // The file may grow between stat and read.
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(io_err)?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(CheckError::TooLarge {
            path: path.to_owned(),
            size,
            limit,
        });
    }

    tracing::debug!(path = %path, size, "loaded file");
    Ok(LoadedFile {
        path: path.to_owned(),
        size,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn reads_small_files() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8(&tmp.path().join("php.ini"));
        std::fs::write(&path, "display_errors = Off\n").expect("write");

        let loaded = read_bounded(&path, MAX_INPUT_BYTES).expect("read");
        assert_eq!(loaded.size, 21);
        assert_eq!(loaded.text, "display_errors = Off\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8(&tmp.path().join("absent.ini"));
        let err = read_bounded(&path, MAX_INPUT_BYTES).expect_err("missing");
        assert!(matches!(err, CheckError::FileNotFound { .. }));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8(&tmp.path().join("big.ini"));
        std::fs::write(&path, "a = 1234567890\n").expect("write");

        let err = read_bounded(&path, 4).expect_err("too large");
        assert!(matches!(err, CheckError::TooLarge { size: 15, limit: 4, .. }));
    }

    #[test]
    fn directory_is_not_a_file() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let err = read_bounded(&utf8(tmp.path()), MAX_INPUT_BYTES).expect_err("directory");
        assert!(matches!(err, CheckError::NotAFile { .. }));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = utf8(&tmp.path().join("latin1.ini"));
        std::fs::write(&path, b"k = caf\xe9\n").expect("write");

        let loaded = read_bounded(&path, MAX_INPUT_BYTES).expect("read");
        assert_eq!(loaded.text, "k = caf\u{fffd}\n");
    }
}
