//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod normalize;
pub mod score;
pub mod syllables;

/// Read a file after checking its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn reads_file_within_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "Short text.").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "Short text.");
        assert_eq!(read_input_file(&path, None).unwrap(), "Short text.");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "This text is longer than ten bytes.").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/definitely/not/here.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
