//! Canonical item types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Citation category selecting which translator table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    #[default]
    Book,
    AudioRecording,
    Document,
    NewspaperArticle,
    VideoRecording,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Book,
        ItemType::AudioRecording,
        ItemType::Document,
        ItemType::NewspaperArticle,
        ItemType::VideoRecording,
    ];

    /// Tag used in the target schema
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Book => "book",
            ItemType::AudioRecording => "audioRecording",
            ItemType::Document => "document",
            ItemType::NewspaperArticle => "newspaperArticle",
            ItemType::VideoRecording => "videoRecording",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown item type: {}", s))
    }
}
