//! Project manifest adapters.
//!
//! Two manifest formats carry a version field the tagger can read and
//! update: `package.json` (npm) and `pubspec.yaml` (flutter). Writes are
//! targeted substitutions scoped to the version field: re-serializing the
//! whole document would reformat unrelated content, so the rest of the file
//! is preserved byte-for-byte. This is an intentional minimal-diff strategy.

pub mod package_json;
pub mod pubspec;
