//! Raw record to citation normalization

use serde_json::Value;

use crate::models::{Citation, FieldValue};

use super::{
    creators::{add_creators, add_creators_with_role_classification, CreatorListMode},
    fixers::{FieldFixers, Fixer, StandardFixers},
    form_codes::item_type_from_record,
    tables::{table_for, TranslatorEntry, TranslatorKind},
};

/// Normalization behaviour switches
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizerOptions {
    pub creator_list_mode: CreatorListMode,
}

/// Applies translator tables to raw xISBN-style records
#[derive(Debug, Clone, Default)]
pub struct Normalizer<F = StandardFixers> {
    fixers: F,
    options: NormalizerOptions,
}

impl Normalizer<StandardFixers> {
    pub fn new(options: NormalizerOptions) -> Self {
        Self::with_fixers(StandardFixers, options)
    }
}

impl<F: FieldFixers> Normalizer<F> {
    pub fn with_fixers(fixers: F, options: NormalizerOptions) -> Self {
        Self { fixers, options }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Populate `citation` from a raw record.
    ///
    /// Resolves the item type if unset, then runs every translator whose
    /// source field is present. Missing or malformed fields are skipped;
    /// this never fails. Running it twice with the same record leaves
    /// `content` unchanged: fields are overwritten and creators are only
    /// appended when not already present.
    pub fn normalize(&self, citation: &mut Citation, raw: &Value) {
        let entry = record_entry(raw);

        let item_type = *citation
            .item_type
            .get_or_insert_with(|| entry.map(item_type_from_record).unwrap_or_default());

        if let Some(entry) = entry {
            for translator in table_for(item_type) {
                if let Some(value) = entry.get(translator.source_field) {
                    self.translate(citation, translator, value);
                }
            }
        }

        tracing::debug!(
            "Normalized {} record into {} fields",
            item_type,
            citation.content.len()
        );
        citation.response_code = Some(200);
    }

    fn translate(&self, citation: &mut Citation, translator: &TranslatorEntry, value: &Value) {
        match translator.kind {
            TranslatorKind::Scalar { fixer } => {
                if let Some(text) = self.scalar_value(value, fixer) {
                    citation
                        .content
                        .insert(translator.target_field.to_string(), FieldValue::Text(text));
                }
            }
            TranslatorKind::List { fixer } => {
                let values: Vec<String> = list_elements(value)
                    .into_iter()
                    .filter_map(|element| self.fix(element, fixer))
                    .collect();
                if !values.is_empty() {
                    citation
                        .content
                        .insert(translator.target_field.to_string(), FieldValue::List(values));
                }
            }
            TranslatorKind::Creators { role } => match value {
                Value::Array(_) => add_creators(citation, value, role, self.options.creator_list_mode),
                _ => add_creators_with_role_classification(citation, value, role),
            },
        }

        tracing::trace!("{} -> {}", translator.source_field, translator.target_field);
    }

    fn scalar_value(&self, value: &Value, fixer: Option<Fixer>) -> Option<String> {
        match value {
            Value::String(s) => self.fix(s, fixer),
            Value::Number(n) => self.fix(&n.to_string(), fixer),
            Value::Array(items) => items
                .iter()
                .find_map(Value::as_str)
                .and_then(|s| self.fix(s, fixer)),
            _ => None,
        }
    }

    fn fix(&self, raw: &str, fixer: Option<Fixer>) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match fixer {
            Some(fixer) => self.fixers.apply(fixer, raw),
            None => Some(raw.to_string()),
        }
    }
}

/// The record to translate: first entry of `list`, or the object itself
fn record_entry(raw: &Value) -> Option<&Value> {
    match raw.get("list") {
        Some(Value::Array(entries)) => entries.first().filter(|e| e.is_object()),
        _ => raw.is_object().then_some(raw),
    }
}

fn list_elements(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
