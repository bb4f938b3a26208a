//! Citation record under construction

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{creator::Creator, item_type::ItemType};

/// Kind of identifier originally requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    Doi,
    Isbn,
    Oclc,
    Pmcid,
    Pmid,
    Qid,
    Url,
    Any,
}

impl IdType {
    pub const ALL: [IdType; 8] = [
        IdType::Doi,
        IdType::Isbn,
        IdType::Oclc,
        IdType::Pmcid,
        IdType::Pmid,
        IdType::Qid,
        IdType::Url,
        IdType::Any,
    ];
}

/// Value stored under a content key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Creators(Vec<Creator>),
}

/// Error attached to a citation that could not be fully processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CitationError {
    pub code: u16,
    pub message: String,
}

/// Citation being assembled from one or more metadata sources.
///
/// The per-kind identifier fields (`doi`, `isbn`, ...) are never stored:
/// they are derived from `id_type`/`id_value` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "CitationJson")]
pub struct Citation {
    id_type: IdType,
    id_value: String,
    /// Target schema field name -> value. A missing key means not yet populated.
    pub content: IndexMap<String, FieldValue>,
    pub item_type: Option<ItemType>,
    /// Provenance tags, append-only
    pub source: Vec<String>,
    pub error: Option<CitationError>,
    pub response_code: Option<u16>,
}

impl Citation {
    pub fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
        Self {
            id_type,
            id_value: id_value.into(),
            content: IndexMap::new(),
            item_type: None,
            source: Vec::new(),
            error: None,
            response_code: None,
        }
    }

    pub fn id_type(&self) -> IdType {
        self.id_type
    }

    pub fn id_value(&self) -> &str {
        &self.id_value
    }

    /// The identifier value if it is of the given kind
    pub fn identifier(&self, kind: IdType) -> Option<&str> {
        (self.id_type == kind).then_some(self.id_value.as_str())
    }

    pub fn add_source(&mut self, tag: impl Into<String>) {
        self.source.push(tag.into());
    }

    pub fn set_error(&mut self, code: u16, message: impl Into<String>) {
        self.error = Some(CitationError {
            code,
            message: message.into(),
        });
        self.response_code = Some(code);
    }

    /// Creators collected so far
    pub fn creators(&self) -> &[Creator] {
        match self.content.get("creators") {
            Some(FieldValue::Creators(list)) => list,
            _ => &[],
        }
    }

    /// Text value of a content field, if it holds one
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.content.get(field) {
            Some(FieldValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Append a creator unless an identical one is already present
    pub fn push_creator(&mut self, creator: Creator) -> bool {
        let entry = self
            .content
            .entry("creators".to_string())
            .or_insert_with(|| FieldValue::Creators(Vec::new()));

        if !matches!(entry, FieldValue::Creators(_)) {
            *entry = FieldValue::Creators(Vec::new());
        }

        match entry {
            FieldValue::Creators(list) if !list.contains(&creator) => {
                list.push(creator);
                true
            }
            _ => false,
        }
    }
}

/// Wire representation of a citation
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Citation)]
pub struct CitationJson {
    pub id_type: IdType,
    pub id_value: String,
    pub doi: Option<String>,
    pub isbn: Option<String>,
    pub oclc: Option<String>,
    pub pmcid: Option<String>,
    pub pmid: Option<String>,
    pub qid: Option<String>,
    pub url: Option<String>,
    pub any: Option<String>,
    pub item_type: Option<ItemType>,
    #[schema(value_type = Object)]
    pub content: IndexMap<String, FieldValue>,
    pub source: Vec<String>,
    pub error: Option<CitationError>,
    pub response_code: Option<u16>,
}

impl From<Citation> for CitationJson {
    fn from(c: Citation) -> Self {
        let pick = |kind: IdType| c.identifier(kind).map(String::from);
        Self {
            doi: pick(IdType::Doi),
            isbn: pick(IdType::Isbn),
            oclc: pick(IdType::Oclc),
            pmcid: pick(IdType::Pmcid),
            pmid: pick(IdType::Pmid),
            qid: pick(IdType::Qid),
            url: pick(IdType::Url),
            any: pick(IdType::Any),
            id_type: c.id_type,
            id_value: c.id_value,
            item_type: c.item_type,
            content: c.content,
            source: c.source,
            error: c.error,
            response_code: c.response_code,
        }
    }
}
