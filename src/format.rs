//! Formatting helpers for listings and downloads.
//!
//! Pure helpers for rendering byte counts and media markers, plus the
//! resolution of a user-supplied download target into a concrete file path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Renders a byte count with one decimal digit and a binary unit.
///
/// Divides by 1024 until the value fits the unit or the unit list runs out,
/// so anything at or above 1024 TB is reported in PB regardless of magnitude.
///
/// # Examples
///
/// ```
/// # use tgsh::format::human_size;
/// assert_eq!(human_size(0), "0.0B");
/// assert_eq!(human_size(1536), "1.5KB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.1}{unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1}{}", UNITS[UNITS.len() - 1])
}

/// Renders the media marker appended to a history line.
pub fn media_label(kind: &str, size: Option<u64>) -> String {
    match size {
        Some(size) => format!("[MEDIA:{kind} ({})]", human_size(size)),
        None => format!("[MEDIA:{kind}]"),
    }
}

/// Resolves a download target into the path the media will be written to.
///
/// An existing directory, or a path with a trailing separator, is treated as
/// a directory target: it is created if absent and `suggested_name` is placed
/// inside it. Anything else is taken as a full file path, creating parent
/// directories as needed.
pub fn resolve_download_path(target: &str, suggested_name: &str) -> io::Result<PathBuf> {
    let path = Path::new(target);
    if path.is_dir() || ends_with_separator(target) {
        fs::create_dir_all(path)?;
        Ok(path.join(suggested_name))
    } else {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(path.to_path_buf())
    }
}

fn ends_with_separator(target: &str) -> bool {
    target
        .chars()
        .next_back()
        .is_some_and(std::path::is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_boundaries() {
        assert_eq!(human_size(0), "0.0B");
        assert_eq!(human_size(1023), "1023.0B");
        assert_eq!(human_size(1024), "1.0KB");
        assert_eq!(human_size(1536), "1.5KB");
        assert_eq!(human_size(1024 * 1024), "1.0MB");
        assert_eq!(human_size(1024u64.pow(4)), "1.0TB");
        assert_eq!(human_size(1024u64.pow(5)), "1.0PB");
    }

    #[test]
    fn human_size_saturates_at_petabytes() {
        // The final unit is used even when the scaled value exceeds 1024.
        assert_eq!(human_size(1024u64.pow(6)), "1024.0PB");
    }

    #[test]
    fn media_label_with_and_without_size() {
        assert_eq!(media_label("Photo", None), "[MEDIA:Photo]");
        assert_eq!(media_label("Document", Some(1536)), "[MEDIA:Document (1.5KB)]");
    }

    #[test]
    fn existing_directory_gets_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().to_str().unwrap().to_string();
        let resolved = resolve_download_path(&target, "photo.jpg").unwrap();
        assert_eq!(resolved, dir.path().join("photo.jpg"));
    }

    #[test]
    fn trailing_separator_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}/incoming/", dir.path().to_str().unwrap());
        let resolved = resolve_download_path(&target, "voice.ogg").unwrap();
        assert!(dir.path().join("incoming").is_dir());
        assert_eq!(resolved, dir.path().join("incoming").join("voice.ogg"));
    }

    #[test]
    fn file_path_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}/a/b/out.bin", dir.path().to_str().unwrap());
        let resolved = resolve_download_path(&target, "ignored").unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        assert_eq!(resolved, PathBuf::from(target));
    }

    #[test]
    fn bare_file_name_has_no_parent_to_create() {
        let resolved = resolve_download_path("out.bin", "ignored").unwrap();
        assert_eq!(resolved, PathBuf::from("out.bin"));
    }
}
