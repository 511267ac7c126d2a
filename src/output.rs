//! File output for bsdgen.

use std::fs;
use std::path::Path;

/// Write `text` to `path`, overwriting any existing file.
///
/// No recovery is attempted on filesystem errors; the caller treats them as
/// fatal.
pub fn write_license(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, text).map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("bsdgen-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn test_write_and_read_back() {
        let path = temp_path("write");
        write_license(&path, "some license text").unwrap();
        let back = fs::read_to_string(&path).unwrap();
        assert_eq!(back, "some license text");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let path = temp_path("overwrite");
        write_license(&path, "first version, quite a bit longer than the second").unwrap();
        write_license(&path, "second").unwrap();
        let back = fs::read_to_string(&path).unwrap();
        assert_eq!(back, "second");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let mut path = temp_path("no-such-dir");
        path.push("LICENSE");
        let err = write_license(&path, "text").unwrap_err();
        assert!(err.contains("failed to write"));
    }
}
