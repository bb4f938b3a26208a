//! Per item type field translation tables
//!
//! Each table lists, in application order, which source field of an xISBN
//! record feeds which target field and how the value is translated.

use crate::models::{creator::roles, ItemType};

use super::fixers::Fixer;

/// Target field receiving all creator translators
pub const CREATORS_FIELD: &str = "creators";

/// How a source value becomes a target value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorKind {
    /// Single value, overwritten on each pass
    Scalar { fixer: Option<Fixer> },
    /// List of values; elements rejected by the fixer are dropped
    List { fixer: Option<Fixer> },
    /// Creator statement, tagged with the given default role
    Creators { role: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorEntry {
    pub source_field: &'static str,
    pub target_field: &'static str,
    pub kind: TranslatorKind,
}

const fn scalar(source_field: &'static str, target_field: &'static str) -> TranslatorEntry {
    TranslatorEntry {
        source_field,
        target_field,
        kind: TranslatorKind::Scalar { fixer: None },
    }
}

const fn fixed(
    source_field: &'static str,
    target_field: &'static str,
    fixer: Fixer,
) -> TranslatorEntry {
    TranslatorEntry {
        source_field,
        target_field,
        kind: TranslatorKind::Scalar { fixer: Some(fixer) },
    }
}

const fn list(
    source_field: &'static str,
    target_field: &'static str,
    fixer: Fixer,
) -> TranslatorEntry {
    TranslatorEntry {
        source_field,
        target_field,
        kind: TranslatorKind::List { fixer: Some(fixer) },
    }
}

const fn creators(source_field: &'static str, role: &'static str) -> TranslatorEntry {
    TranslatorEntry {
        source_field,
        target_field: CREATORS_FIELD,
        kind: TranslatorKind::Creators { role },
    }
}

static BOOK: [TranslatorEntry; 10] = [
    scalar("title", "title"),
    creators("author", roles::AUTHOR),
    fixed("year", "date", Fixer::Date),
    scalar("publisher", "publisher"),
    scalar("city", "place"),
    fixed("lang", "language", Fixer::Lang),
    scalar("ed", "edition"),
    list("isbn", "ISBN", Fixer::Isbn),
    scalar("volume", "volume"),
    scalar("url", "url"),
];

static AUDIO_RECORDING: [TranslatorEntry; 9] = [
    scalar("title", "title"),
    creators("author", roles::PERFORMER),
    fixed("year", "date", Fixer::Date),
    scalar("publisher", "label"),
    scalar("city", "place"),
    fixed("lang", "language", Fixer::Lang),
    list("isbn", "ISBN", Fixer::Isbn),
    scalar("volume", "volume"),
    scalar("url", "url"),
];

static VIDEO_RECORDING: [TranslatorEntry; 6] = [
    scalar("title", "title"),
    creators("author", roles::DIRECTOR),
    fixed("year", "date", Fixer::Date),
    scalar("publisher", "studio"),
    fixed("lang", "language", Fixer::Lang),
    scalar("url", "url"),
];

static DOCUMENT: [TranslatorEntry; 6] = [
    scalar("title", "title"),
    creators("author", roles::AUTHOR),
    fixed("year", "date", Fixer::Date),
    scalar("publisher", "publisher"),
    fixed("lang", "language", Fixer::Lang),
    scalar("url", "url"),
];

static NEWSPAPER_ARTICLE: [TranslatorEntry; 7] = [
    scalar("title", "title"),
    creators("author", roles::AUTHOR),
    fixed("year", "date", Fixer::Date),
    scalar("city", "place"),
    fixed("lang", "language", Fixer::Lang),
    scalar("ed", "edition"),
    scalar("url", "url"),
];

/// Translator table for an item type
pub fn table_for(item_type: ItemType) -> &'static [TranslatorEntry] {
    match item_type {
        ItemType::Book => &BOOK,
        ItemType::AudioRecording => &AUDIO_RECORDING,
        ItemType::Document => &DOCUMENT,
        ItemType::NewspaperArticle => &NEWSPAPER_ARTICLE,
        ItemType::VideoRecording => &VIDEO_RECORDING,
    }
}

/// Target fields an item type can populate, in table order without repeats
pub fn target_fields(item_type: ItemType) -> Vec<&'static str> {
    let mut fields = Vec::new();
    for entry in table_for(item_type) {
        if !fields.contains(&entry.target_field) {
            fields.push(entry.target_field);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_target_fields_unique_per_table() {
        for item_type in ItemType::ALL {
            let mut seen = HashSet::new();
            for entry in table_for(item_type) {
                if entry.target_field == CREATORS_FIELD {
                    assert!(matches!(entry.kind, TranslatorKind::Creators { .. }));
                    continue;
                }
                assert!(
                    seen.insert(entry.target_field),
                    "{} maps two source fields to {}",
                    item_type,
                    entry.target_field
                );
            }
        }
    }

    #[test]
    fn test_source_fields_unique_per_table() {
        for item_type in ItemType::ALL {
            let mut seen = HashSet::new();
            for entry in table_for(item_type) {
                assert!(seen.insert(entry.source_field), "{}: {}", item_type, entry.source_field);
            }
        }
    }

    #[test]
    fn test_creator_roles() {
        let role = |item_type| {
            table_for(item_type).iter().find_map(|e| match e.kind {
                TranslatorKind::Creators { role } => Some(role),
                _ => None,
            })
        };
        assert_eq!(role(ItemType::Book), Some("author"));
        assert_eq!(role(ItemType::AudioRecording), Some("performer"));
        assert_eq!(role(ItemType::VideoRecording), Some("director"));
    }

    #[test]
    fn test_target_fields() {
        let fields = target_fields(ItemType::AudioRecording);
        assert!(fields.contains(&"label"));
        assert!(!fields.contains(&"publisher"));
        assert_eq!(fields.iter().filter(|f| **f == CREATORS_FIELD).count(), 1);
    }
}
