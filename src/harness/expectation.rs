//! Reference output loading

use std::path::Path;

use crate::common::{Error, Result};

/// Load the expected output file as a sequence of trimmed lines
///
/// Content is not validated here; the validator compares it against the
/// captured output later.
pub fn load_expected(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::ExpectedNotFound {
            path: path.display().to_string(),
        },
        _ => Error::file_read(path, &e),
    })?;

    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_trimmed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n 2\n3 \n4\n5").unwrap();

        let lines = load_expected(file.path()).unwrap();
        assert_eq!(lines, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_expected(&dir.path().join("expected_output.txt")).unwrap_err();
        assert!(matches!(err, Error::ExpectedNotFound { .. }));
    }

    #[test]
    fn test_no_content_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not\na\nnumber").unwrap();

        let lines = load_expected(file.path()).unwrap();
        assert_eq!(lines, vec!["not", "a", "number"]);
    }
}
