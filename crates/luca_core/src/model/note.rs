//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record used by the notebook store.
//! - Normalize category and tag inputs before they reach storage.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `private` is only true when the owning store had a passphrase set
//!   at creation time.
//! - Tags are lowercase, trimmed and deduplicated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Category assigned when the user leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// Closed set of note accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Purple,
    Blue,
    Green,
    Yellow,
    Pink,
}

impl NoteColor {
    /// Display hex value for this color.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Purple => "#7b5cff",
            Self::Blue => "#3f8cff",
            Self::Green => "#36c98b",
            Self::Yellow => "#f4c84b",
            Self::Pink => "#ff7acb",
        }
    }
}

/// One notebook entry.
///
/// Field names serialize in camelCase to stay compatible with the
/// persisted `notes-store` envelope shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub category: String,
    pub tags: Vec<String>,
    pub color: NoteColor,
    pub pinned: bool,
    pub private: bool,
    /// Creation time in epoch milliseconds; default sort key for listing.
    pub created_at: i64,
}

impl Note {
    /// Creates a note with a generated id and normalized inputs.
    pub fn new(
        text: impl Into<String>,
        category: &str,
        tags: &[String],
        color: NoteColor,
        private: bool,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category: normalize_category(category),
            tags: normalize_tags(tags),
            color,
            pinned: false,
            private,
            created_at,
        }
    }
}

/// Normalizes a category value; blank input falls back to the default.
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalizes one tag value; blank input yields `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes and deduplicates a tag list.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}

/// Splits a comma-separated tag input field into normalized tags.
pub fn parse_tags_input(input: &str) -> Vec<String> {
    let raw: Vec<String> = input.split(',').map(str::to_string).collect();
    normalize_tags(&raw)
}

#[cfg(test)]
mod tests {
    use super::{normalize_category, normalize_tags, parse_tags_input, NoteColor, DEFAULT_CATEGORY};

    #[test]
    fn blank_category_falls_back_to_default() {
        assert_eq!(normalize_category("   "), DEFAULT_CATEGORY);
        assert_eq!(normalize_category(" Maths "), "Maths");
    }

    #[test]
    fn tags_are_lowercased_and_deduplicated() {
        let tags = normalize_tags(&[
            "Work".to_string(),
            "IMPORTANT".to_string(),
            "work".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(tags, vec!["important".to_string(), "work".to_string()]);
    }

    #[test]
    fn comma_separated_input_splits_into_tags() {
        let tags = parse_tags_input("Revision, maths , ,REVISION");
        assert_eq!(tags, vec!["maths".to_string(), "revision".to_string()]);
    }

    #[test]
    fn every_color_has_a_hex_value() {
        for color in [
            NoteColor::Purple,
            NoteColor::Blue,
            NoteColor::Green,
            NoteColor::Yellow,
            NoteColor::Pink,
        ] {
            assert!(color.hex().starts_with('#'));
        }
    }
}
