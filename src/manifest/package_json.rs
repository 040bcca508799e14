use crate::domain::tag::Tag;
use crate::error::{Result, TaggerError};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Read the version field from a `package.json` file.
///
/// The field must hold a plain `major.minor.patch` string: no leading 'v',
/// no suffix.
pub fn read(path: &Path) -> Result<Tag> {
    let content = fs::read_to_string(path)?;

    let manifest: PackageManifest = serde_json::from_str(&content).map_err(|e| {
        TaggerError::format(format!("{} is not valid JSON: {}", path.display(), e))
    })?;

    let version = manifest.version.ok_or_else(|| {
        TaggerError::format(format!("{} has no version field", path.display()))
    })?;

    let pattern = Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("valid regex");
    if !pattern.is_match(&version) {
        return Err(TaggerError::format(format!(
            "version '{}' in {} must have format '1.2.3'",
            version,
            path.display()
        )));
    }

    // Grammar is a subset of the tag grammar, so Tag::parse cannot fail here.
    Tag::parse(&version)
}

/// Write a version into a `package.json` file.
///
/// Replaces only the value of the first `"version"` field; every other byte
/// of the document is preserved.
pub fn write(path: &Path, tag: &Tag) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let pattern = Regex::new(r#""version"\s*:\s*"[^"]*""#).expect("valid regex");
    if !pattern.is_match(&content) {
        return Err(TaggerError::format(format!(
            "{} has no \"version\" field to replace",
            path.display()
        )));
    }

    let replacement = format!(
        r#""version": "{}.{}.{}""#,
        tag.major, tag.minor, tag.patch
    );
    let updated = pattern.replace(&content, replacement.as_str());

    fs::write(path, updated.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn manifest_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_version() {
        let file = manifest_file(r#"{"name": "demo", "version": "2.0.0"}"#);
        let tag = read(file.path()).unwrap();
        assert_eq!(tag, Tag::new(2, 0, 0));
    }

    #[test]
    fn test_read_rejects_prefixed_version() {
        let file = manifest_file(r#"{"version": "v2.0.0"}"#);
        assert!(read(file.path()).is_err());
    }

    #[test]
    fn test_read_missing_field() {
        let file = manifest_file(r#"{"name": "demo"}"#);
        let err = read(file.path()).unwrap_err();
        assert!(err.to_string().contains("no version field"));
    }

    #[test]
    fn test_read_invalid_json() {
        let file = manifest_file("{not json");
        assert!(read(file.path()).is_err());
    }

    #[test]
    fn test_write_preserves_other_content() {
        let original = "{\n  \"name\": \"demo\",\n  \"version\": \"2.0.0\",\n  \"private\": true\n}\n";
        let file = manifest_file(original);

        write(file.path(), &Tag::new(2, 1, 0)).unwrap();

        let updated = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            updated,
            "{\n  \"name\": \"demo\",\n  \"version\": \"2.1.0\",\n  \"private\": true\n}\n"
        );
    }

    #[test]
    fn test_write_only_touches_first_version_field() {
        let original = r#"{"version": "1.0.0", "nested": {"version": "9.9.9"}}"#;
        let file = manifest_file(original);

        write(file.path(), &Tag::new(1, 1, 0)).unwrap();

        let updated = fs::read_to_string(file.path()).unwrap();
        assert!(updated.contains(r#""version": "1.1.0""#));
        assert!(updated.contains(r#""version": "9.9.9""#));
    }

    #[test]
    fn test_write_missing_field_fails() {
        let file = manifest_file(r#"{"name": "demo"}"#);
        let err = write(file.path(), &Tag::new(1, 0, 0)).unwrap_err();
        assert!(err.to_string().contains("version"));
    }
}
