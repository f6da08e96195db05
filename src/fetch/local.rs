//! Saved page loading

use super::FetchError;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String, FetchError> {
    tracing::info!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| FetchError::Read { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_saved_page() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("page.html");
        fs::write(&path, "<table></table>").expect("write");
        assert_eq!(read_file(&path).expect("read"), "<table></table>");
    }

    #[test]
    fn test_missing_page_is_read_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_file(&tmp.path().join("absent.html")).expect_err("missing");
        assert!(matches!(err, FetchError::Read { .. }));
    }
}
