use crate::domain::tag::Tag;
use crate::error::{Result, TaggerError};
use regex::Regex;
use std::fs;
use std::path::Path;

fn version_line() -> Regex {
    Regex::new(r"(?m)^version:[ \t]*(\d+)\.(\d+)\.(\d+)\+(\d+)[ \t]*$").expect("valid regex")
}

/// Read the version line from a `pubspec.yaml` file.
///
/// The field must hold `major.minor.patch+build`; the build counter is
/// returned separately from the version triple.
pub fn read(path: &Path) -> Result<(Tag, u64)> {
    let content = fs::read_to_string(path)?;

    let caps = version_line().captures(&content).ok_or_else(|| {
        TaggerError::format(format!(
            "version in {} must have format '1.2.3+4'",
            path.display()
        ))
    })?;

    let number = |idx: usize| -> Result<u32> {
        caps[idx].parse::<u32>().map_err(|_| {
            TaggerError::format(format!("version part '{}' is out of range", &caps[idx]))
        })
    };
    let build = caps[4].parse::<u64>().map_err(|_| {
        TaggerError::format(format!("build counter '{}' is out of range", &caps[4]))
    })?;

    Ok((Tag::new(number(1)?, number(2)?, number(3)?), build))
}

/// Write a version line into a `pubspec.yaml` file.
///
/// Replaces only the matched `version:` line with the given triple and
/// build counter; the rest of the file is preserved. Callers decide
/// whether `build` is the old counter or an incremented one.
pub fn write(path: &Path, tag: &Tag, build: u64) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let pattern = version_line();
    if !pattern.is_match(&content) {
        return Err(TaggerError::format(format!(
            "{} has no 'version: 1.2.3+4' line to replace",
            path.display()
        )));
    }

    let replacement = format!("version: {}.{}.{}+{}", tag.major, tag.minor, tag.patch, build);
    let updated = pattern.replace(&content, replacement.as_str());

    fs::write(path, updated.as_bytes())?;
    Ok(())
}
