//! Directory Enumerator: finds the scripts to scan.

use crate::config::SCRIPT_EXTENSION;
use crate::error::{ExtractError, Result};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List `*.sh` files in `dir`, sorted by file name.
pub fn enumerate_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let pattern = format!("*.{SCRIPT_EXTENSION}");
    let matcher = Pattern::new(&pattern).map_err(|source| ExtractError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let list_err = |source: io::Error| ExtractError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut scripts = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !matcher.matches_with(&entry.file_name().to_string_lossy(), options) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            scripts.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-file match");
        }
    }

    scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(scripts)
}

/// Display name used for report sections.
pub fn script_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("ffmpeg");
        match enumerate_scripts(&missing) {
            Err(ExtractError::DirectoryNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected DirectoryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_only_sh_files_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.sh", "a.sh", "notes.txt", "c.sh.bak", ".hidden.sh", "A_upper.sh"] {
            fs::write(tmp.path().join(name), "echo\n").unwrap();
        }
        fs::create_dir(tmp.path().join("dir.sh")).unwrap();

        let names: Vec<String> = enumerate_scripts(tmp.path())
            .unwrap()
            .iter()
            .map(|p| script_name(p))
            .collect();
        assert_eq!(names, vec!["A_upper.sh", "a.sh", "b.sh"]);
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("clips [raw]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("one.sh"), "ffmpeg -i a b\n").unwrap();

        let scripts = enumerate_scripts(&dir).unwrap();
        assert_eq!(scripts, vec![dir.join("one.sh")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_name_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(OsStr::from_bytes(b"clips\xff"));
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.sh"), "ffmpeg -i a b\n").unwrap();

        let scripts = enumerate_scripts(&dir).unwrap();
        assert_eq!(scripts, vec![dir.join("a.sh")]);
    }
}
