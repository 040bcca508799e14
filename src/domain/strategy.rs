//! Version increment strategies.
//!
//! The datetime strategy repurposes the minor and patch positions as a
//! timestamp encoding: for a Unix timestamp `t`, minor becomes the
//! seconds-of-day (`t % 86400`) and patch the day index since the epoch
//! (`t / 86400`). Tagging `v1.x.y` at 09:30:00 on 01 Jan 2020
//! (t = 1577867400) yields `v1.30600.18262`. This deliberately breaks
//! normal version-ordering semantics; consumers of datetime tags must not
//! compare them as semantic versions.

use crate::domain::tag::Tag;

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// The rule for deriving the next version from the current one.
///
/// Selected once per invocation from the CLI flags; patch is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Patch,
    Minor,
    Major,
    Datetime,
}

/// Compute the next version from a base tag.
///
/// The base's suffix is always dropped; suffix post-processing (hash or
/// build counter) is a separate step applied by the orchestrator.
///
/// # Arguments
/// * `base` - The version to increment
/// * `strategy` - Which position to advance
/// * `now` - Current Unix timestamp, only consulted by [Strategy::Datetime]
pub fn increment(base: &Tag, strategy: Strategy, now: i64) -> Tag {
    let mut next = base.bare();

    match strategy {
        Strategy::Patch => {
            next.patch += 1;
        }
        Strategy::Minor => {
            next.minor += 1;
            next.patch = 0;
        }
        Strategy::Major => {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        Strategy::Datetime => {
            next.minor = (now % SECONDS_PER_DAY) as u32;
            next.patch = (now / SECONDS_PER_DAY) as u32;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::Suffix;

    #[test]
    fn test_increment_patch() {
        let next = increment(&Tag::new(1, 2, 3), Strategy::Patch, 0);
        assert_eq!(next, Tag::new(1, 2, 4));
    }

    #[test]
    fn test_increment_minor_resets_patch() {
        let next = increment(&Tag::new(1, 2, 3), Strategy::Minor, 0);
        assert_eq!(next, Tag::new(1, 3, 0));
    }

    #[test]
    fn test_increment_major_resets_minor_and_patch() {
        let next = increment(&Tag::new(1, 2, 3), Strategy::Major, 0);
        assert_eq!(next, Tag::new(2, 0, 0));
    }

    #[test]
    fn test_increment_datetime_splits_timestamp() {
        // 01 Jan 2020 09:30:00 UTC
        let now = 1_577_867_400;
        let next = increment(&Tag::new(1, 0, 0), Strategy::Datetime, now);
        assert_eq!(next.major, 1);
        assert_eq!(next.minor, 30_600);
        assert_eq!(next.patch, 18_262);
    }

    #[test]
    fn test_increment_datetime_keeps_major() {
        let next = increment(&Tag::new(7, 1, 2), Strategy::Datetime, 86_401);
        assert_eq!(next.major, 7);
        assert_eq!(next.minor, 1);
        assert_eq!(next.patch, 1);
    }

    #[test]
    fn test_increment_drops_base_suffix() {
        let base = Tag::new(1, 2, 3).with_suffix(Suffix::Hash("abc123".to_string()));
        let next = increment(&base, Strategy::Patch, 0);
        assert!(next.suffix.is_none());
    }
}
