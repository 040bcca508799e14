//! Core domain types: the tag/version model and the increment engine.

pub mod strategy;
pub mod tag;

pub use strategy::{increment, Strategy};
pub use tag::{collect_versions, latest, Suffix, Tag};
