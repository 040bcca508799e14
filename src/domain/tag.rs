use crate::error::{Result, TaggerError};
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Tag grammar: optional 'v' prefix, three numeric parts, optional
/// alphanumeric suffix marked with '-' (commit hash) or '+' (build counter).
fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:([+-])([0-9A-Za-z]+))?$").expect("valid regex")
    })
}

/// Optional trailing marker on a version.
///
/// A hash suffix is a commit-hash fragment rendered with a hyphen
/// (e.g. `v1.2.3-3456abcd`); a build suffix is a counter rendered with a
/// plus (e.g. `v1.2.3+42`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suffix {
    Hash(String),
    Build(u64),
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Hash(fragment) => write!(f, "-{}", fragment),
            Suffix::Build(counter) => write!(f, "+{}", counter),
        }
    }
}

/// A three-part version tag with an optional suffix.
///
/// Equality, hashing and ordering consider only the numeric triple; the
/// suffix is carried for display but never disambiguates two tags. This is
/// what lets tag sets collapse `v1.2.3-abc` and `v1.2.3+4` into one entry.
#[derive(Debug, Clone)]
pub struct Tag {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub suffix: Option<Suffix>,
}

impl Tag {
    /// Create a new tag without a suffix
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Tag {
            major,
            minor,
            patch,
            suffix: None,
        }
    }

    /// Attach a suffix, consuming self
    pub fn with_suffix(mut self, suffix: Suffix) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Clone the tag dropping the suffix.
    ///
    /// Increments always start from a bare tag so stale hash fragments or
    /// build counters never leak into the next version.
    pub fn bare(&self) -> Self {
        Tag::new(self.major, self.minor, self.patch)
    }

    /// Parse a tag string (e.g. "v1.2.3", "1.2.3-3456abcd", "v1.2.3+7").
    ///
    /// # Returns
    /// * `Ok(Tag)` - Successfully parsed tag
    /// * `Err(TaggerError::Format)` - Input does not match the tag grammar
    pub fn parse(input: &str) -> Result<Self> {
        let caps = tag_pattern().captures(input).ok_or_else(|| {
            TaggerError::format(format!(
                "'{}' does not match vMAJOR.MINOR.PATCH[(+|-)SUFFIX]",
                input
            ))
        })?;

        // The grammar guarantees each group is a plain digit run; only
        // overflow can fail here.
        let number = |idx: usize| -> Result<u32> {
            caps[idx].parse::<u32>().map_err(|_| {
                TaggerError::format(format!("version part '{}' is out of range", &caps[idx]))
            })
        };

        let mut tag = Tag::new(number(1)?, number(2)?, number(3)?);

        if let (Some(marker), Some(value)) = (caps.get(4), caps.get(5)) {
            tag.suffix = Some(match marker.as_str() {
                "+" => {
                    let counter = value.as_str().parse::<u64>().map_err(|_| {
                        TaggerError::format(format!(
                            "build suffix '{}' in '{}' is not an integer",
                            value.as_str(),
                            input
                        ))
                    })?;
                    Suffix::Build(counter)
                }
                _ => Suffix::Hash(value.as_str().to_string()),
            });
        }

        Ok(tag)
    }

    fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.triple().cmp(&other.triple())
    }
}

/// Parse a raw tag listing into the set of unique versions.
///
/// Strings that do not match the tag grammar are skipped, suffixes are
/// stripped, and duplicate numeric triples collapse to one entry.
pub fn collect_versions<I, S>(raw_tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions: Vec<Tag> = Vec::new();

    for raw in raw_tags {
        if let Ok(tag) = Tag::parse(raw.as_ref()) {
            let bare = tag.bare();
            if !versions.contains(&bare) {
                versions.push(bare);
            }
        }
    }

    versions
}

/// Select the greatest version by (major, minor, patch).
///
/// # Returns
/// * `Ok(Tag)` - The latest version
/// * `Err(TaggerError::NoTagsFound)` - The set is empty; callers decide
///   whether that is fatal for their mode
pub fn latest(versions: &[Tag]) -> Result<Tag> {
    versions
        .iter()
        .max()
        .cloned()
        .ok_or(TaggerError::NoTagsFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let tag = Tag::parse("v1.2.3").unwrap();
        assert_eq!(tag.major, 1);
        assert_eq!(tag.minor, 2);
        assert_eq!(tag.patch, 3);
        assert!(tag.suffix.is_none());
    }

    #[test]
    fn test_parse_without_v() {
        let tag = Tag::parse("1.2.3").unwrap();
        assert_eq!(tag, Tag::new(1, 2, 3));
    }

    #[test]
    fn test_parse_hash_suffix() {
        let tag = Tag::parse("v1.2.3-3456abcd").unwrap();
        assert_eq!(tag.suffix, Some(Suffix::Hash("3456abcd".to_string())));
    }

    #[test]
    fn test_parse_build_suffix() {
        let tag = Tag::parse("v1.2.3+42").unwrap();
        assert_eq!(tag.suffix, Some(Suffix::Build(42)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Tag::parse("1.2").is_err());
        assert!(Tag::parse("v1.2.3.4").is_err());
        assert!(Tag::parse("release-1.2.3").is_err());
        assert!(Tag::parse("v1.2.x").is_err());
        assert!(Tag::parse("").is_err());
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = Tag::parse("not-a-version").unwrap_err();
        assert!(err.to_string().contains("not-a-version"));
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["v1.2.3", "v0.0.0", "v10.20.30-abcdef12", "v1.2.3+7"] {
            let tag = Tag::parse(input).unwrap();
            assert_eq!(tag.to_string(), input);
        }
    }

    #[test]
    fn test_display_adds_v_prefix() {
        let tag = Tag::parse("1.2.3").unwrap();
        assert_eq!(tag.to_string(), "v1.2.3");
    }

    #[test]
    fn test_equality_ignores_suffix() {
        let plain = Tag::parse("v1.2.3").unwrap();
        let hashed = Tag::parse("v1.2.3-abc123").unwrap();
        let build = Tag::parse("v1.2.3+9").unwrap();
        assert_eq!(plain, hashed);
        assert_eq!(plain, build);
        assert_ne!(plain, Tag::new(1, 2, 4));
    }

    #[test]
    fn test_bare_drops_suffix() {
        let tag = Tag::new(1, 2, 3).with_suffix(Suffix::Hash("abc".to_string()));
        let bare = tag.bare();
        assert!(bare.suffix.is_none());
        assert_eq!(bare, Tag::new(1, 2, 3));
    }

    #[test]
    fn test_ordering_by_triple() {
        assert!(Tag::new(2, 0, 0) > Tag::new(1, 9, 9));
        assert!(Tag::new(1, 3, 0) > Tag::new(1, 2, 9));
        assert!(Tag::new(1, 2, 9) > Tag::new(1, 2, 3));
    }

    #[test]
    fn test_collect_versions_filters_and_dedups() {
        let raw = vec!["v1.2.3", "garbage", "v1.2.3-abc1", "v1.3.0", "HEAD"];
        let versions = collect_versions(raw);
        assert_eq!(versions.len(), 2);
        assert!(versions.contains(&Tag::new(1, 2, 3)));
        assert!(versions.contains(&Tag::new(1, 3, 0)));
    }

    #[test]
    fn test_latest_selection() {
        let versions = collect_versions(vec!["v1.2.3", "v1.3.0", "v1.2.9"]);
        assert_eq!(latest(&versions).unwrap(), Tag::new(1, 3, 0));
    }

    #[test]
    fn test_latest_empty_is_no_tags_found() {
        let err = latest(&[]).unwrap_err();
        assert!(matches!(err, TaggerError::NoTagsFound));
    }
}
