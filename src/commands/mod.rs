//! Command orchestration: sequences the domain, manifest and git layers
//! per operating mode.
//!
//! Write paths (auto with `--write`, flutter `--build`) follow a fixed
//! order: verify the working tree is clean, compute the new version, write
//! the manifest, commit the change with the new version string as message,
//! then create the tag. A failure aborts the remaining steps; completed
//! steps are not rolled back, so a partially-applied commit needs manual
//! correction.

use crate::config::{RunConfig, WriteTarget};
use crate::domain::strategy::increment;
use crate::domain::tag::{collect_versions, latest, Suffix, Tag};
use crate::error::{Result, TaggerError};
use crate::git::Repository;
use crate::manifest::{package_json, pubspec};

/// Result of a tagging command.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The version the new tag was derived from, when one existed
    pub previous: Option<Tag>,
    /// The version that was (or would be) tagged
    pub created: Tag,
    /// False in dry-run mode: computed but nothing persisted
    pub applied: bool,
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn ensure_clean<R: Repository>(repo: &R) -> Result<()> {
    if !repo.is_clean()? {
        return Err(TaggerError::DirtyWorkingTree);
    }
    Ok(())
}

/// Apply the hyphen-suffix post-processing steps.
///
/// `--hash` takes the first n characters of the current HEAD hash; `--note`
/// overrides it with a verbatim string.
fn apply_suffix<R: Repository>(repo: &R, config: &RunConfig, next: &mut Tag) -> Result<()> {
    if let Some(len) = config.hash_len {
        let hash = repo.head_hash()?;
        let len = len.min(hash.len());
        next.suffix = Some(Suffix::Hash(hash[..len].to_string()));
    }

    if let Some(note) = &config.note {
        next.suffix = Some(Suffix::Hash(note.clone()));
    }

    Ok(())
}

/// Write the new version into the selected manifest and commit the change.
///
/// The flutter+ target additionally increments the pubspec build counter
/// and carries it as the new tag's plus-suffix.
fn write_and_commit<R: Repository>(
    repo: &R,
    config: &RunConfig,
    target: WriteTarget,
    next: &mut Tag,
) -> Result<()> {
    match target {
        WriteTarget::Npm => {
            package_json::write(&config.package_json, next)?;
        }
        WriteTarget::Flutter => {
            let (_, build) = pubspec::read(&config.pubspec)?;
            pubspec::write(&config.pubspec, next, build)?;
        }
        WriteTarget::FlutterBuild => {
            let (_, build) = pubspec::read(&config.pubspec)?;
            pubspec::write(&config.pubspec, next, build + 1)?;
            next.suffix = Some(Suffix::Build(build + 1));
        }
    }

    repo.commit_all(&next.to_string())?;
    Ok(())
}

/// Auto-increment mode: derive the next version from the latest existing
/// tag per the configured strategy.
pub fn auto<R: Repository>(repo: &R, config: &RunConfig) -> Result<Outcome> {
    let versions = collect_versions(repo.list_tags()?);
    let current = latest(&versions)?;

    // Fail fast before any computation when a manifest write is requested.
    if config.write.is_some() && !config.dry_run {
        ensure_clean(repo)?;
    }

    let mut next = increment(&current, config.strategy, unix_now());

    if config.dry_run {
        apply_suffix(repo, config, &mut next)?;
        return Ok(Outcome {
            previous: Some(current),
            created: next,
            applied: false,
        });
    }

    if let Some(target) = config.write {
        write_and_commit(repo, config, target, &mut next)?;
    }

    // The hash is read after the manifest commit so the suffix names the
    // commit the tag will point to.
    apply_suffix(repo, config, &mut next)?;

    let name = next.to_string();
    repo.create_tag(&name, &name)?;

    Ok(Outcome {
        previous: Some(current),
        created: next,
        applied: true,
    })
}

/// Explicit-tag mode: tag a user-supplied version string.
///
/// Rejected with [TaggerError::DuplicateTag] when a tag with an equal
/// numeric triple already exists, regardless of suffix.
pub fn explicit_tag<R: Repository>(
    repo: &R,
    config: &RunConfig,
    version: &str,
) -> Result<Outcome> {
    let tag = Tag::parse(version)?;

    let existing = collect_versions(repo.list_tags()?);
    if existing.contains(&tag) {
        return Err(TaggerError::DuplicateTag(tag.to_string()));
    }

    if !config.dry_run {
        let name = tag.to_string();
        repo.create_tag(&name, &name)?;
    }

    Ok(Outcome {
        previous: None,
        created: tag,
        applied: !config.dry_run,
    })
}

/// List mode: all parseable versions, deduplicated and ascending.
pub fn list<R: Repository>(repo: &R) -> Result<Vec<Tag>> {
    let mut versions = collect_versions(repo.list_tags()?);
    versions.sort();
    Ok(versions)
}

/// Npm mode: tag the version currently in package.json.
pub fn npm<R: Repository>(repo: &R, config: &RunConfig) -> Result<Outcome> {
    let tag = package_json::read(&config.package_json)?;

    if !config.dry_run {
        let name = tag.to_string();
        repo.create_tag(&name, &name)?;
    }

    Ok(Outcome {
        previous: None,
        created: tag,
        applied: !config.dry_run,
    })
}

/// Flutter mode: tag the version currently in pubspec.yaml.
///
/// With `bump_build` the pubspec build counter is incremented through the
/// write path and the new counter becomes the tag's plus-suffix.
pub fn flutter<R: Repository>(repo: &R, config: &RunConfig, bump_build: bool) -> Result<Outcome> {
    let (tag, build) = pubspec::read(&config.pubspec)?;

    if !bump_build {
        if !config.dry_run {
            let name = tag.to_string();
            repo.create_tag(&name, &name)?;
        }
        return Ok(Outcome {
            previous: None,
            created: tag,
            applied: !config.dry_run,
        });
    }

    let created = tag.clone().with_suffix(Suffix::Build(build + 1));

    if config.dry_run {
        return Ok(Outcome {
            previous: None,
            created,
            applied: false,
        });
    }

    ensure_clean(repo)?;
    pubspec::write(&config.pubspec, &tag, build + 1)?;
    let name = created.to_string();
    repo.commit_all(&name)?;
    repo.create_tag(&name, &name)?;

    Ok(Outcome {
        previous: None,
        created,
        applied: true,
    })
}
