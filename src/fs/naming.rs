//! File and folder name handling.

use crate::error::{Error, Result};

/// Prefix of the per-channel export folder.
pub const EXPORT_FOLDER_PREFIX: &str = "clips-";

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized = replace_reserved(name);

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a path component (folder name) with less strict validation.
///
/// Separators are replaced rather than rejected; traversal and NUL still fail.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = replace_reserved(name)
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

fn replace_reserved(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Name of the export folder for a channel: `clips-<name>`.
pub fn export_folder_name(channel: &str) -> Result<String> {
    Ok(format!(
        "{}{}",
        EXPORT_FOLDER_PREFIX,
        sanitize_path_component(channel)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.mp4").unwrap(), "normal.mp4");
        assert_eq!(sanitize_filename("file:name.mp4").unwrap(), "file_name.mp4");
        assert_eq!(
            sanitize_filename("AwkwardHelplessSalamander-x9Zq.mp4").unwrap(),
            "AwkwardHelplessSalamander-x9Zq.mp4"
        );
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
    }

    #[test]
    fn test_sanitize_filename_path_separators() {
        assert!(sanitize_filename("path/to/file.mp4").is_err());
        assert!(sanitize_filename("path\\to\\file.mp4").is_err());
    }

    #[test]
    fn test_sanitize_filename_null_bytes_and_empty() {
        assert!(sanitize_filename("file\0name.mp4").is_err());
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_sanitize_path_component() {
        assert_eq!(sanitize_path_component("some_streamer").unwrap(), "some_streamer");
        assert_eq!(sanitize_path_component("path/to/name").unwrap(), "path_to_name");
        assert!(sanitize_path_component("../evil").is_err());
        assert!(sanitize_path_component("").is_err());
    }

    #[test]
    fn test_export_folder_name() {
        assert_eq!(export_folder_name("foo").unwrap(), "clips-foo");
        assert!(export_folder_name("..").is_err());
    }
}
