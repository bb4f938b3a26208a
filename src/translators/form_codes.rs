//! WorldCat form codes to item type resolution
//!
//! xISBN records carry a `form` list of two-letter material codes:
//!
//! | code | meaning | item type |
//! |------|---------|-----------|
//! | AA | audio | audioRecording |
//! | BA / BB / BC | book / hardcover / paperback | book |
//! | DA | digital | document |
//! | FA | film, transparency | videoRecording |
//! | MA | microform | newspaperArticle |
//! | VA | video | videoRecording |

use serde_json::Value;

use crate::models::ItemType;

/// Codes that make the record a book wherever they appear
const BOOK_CODES: [&str; 3] = ["BA", "BB", "BC"];

/// Non-book codes we recognize
const FORM_CODES: [(&str, ItemType); 5] = [
    ("AA", ItemType::AudioRecording),
    ("DA", ItemType::Document),
    ("FA", ItemType::VideoRecording),
    ("MA", ItemType::NewspaperArticle),
    ("VA", ItemType::VideoRecording),
];

fn lookup(code: &str) -> Option<ItemType> {
    FORM_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, item_type)| *item_type)
}

/// Resolve the item type from an ordered list of form codes.
///
/// A book code anywhere wins. Otherwise the last recognized code decides;
/// unknown codes are ignored and no recognized code means `book`.
pub fn resolve_item_type<S: AsRef<str>>(form_codes: Option<&[S]>) -> ItemType {
    let mut candidate = None;

    for code in form_codes.unwrap_or_default() {
        let code = code.as_ref();
        if BOOK_CODES.contains(&code) {
            return ItemType::Book;
        }
        if let Some(item_type) = lookup(code) {
            candidate = Some(item_type);
        }
    }

    candidate.unwrap_or_default()
}

/// Resolve the item type of a raw record entry from its `form` list
pub fn item_type_from_record(entry: &Value) -> ItemType {
    let codes: Option<Vec<&str>> = entry
        .get("form")
        .and_then(Value::as_array)
        .map(|forms| forms.iter().filter_map(Value::as_str).collect());

    let item_type = resolve_item_type(codes.as_deref());
    tracing::trace!("Resolved form codes {:?} to {}", codes, item_type);
    item_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_code_wins_anywhere() {
        assert_eq!(resolve_item_type(Some(&["BC", "AA"][..])), ItemType::Book);
        assert_eq!(resolve_item_type(Some(&["AA", "BC"][..])), ItemType::Book);
        assert_eq!(resolve_item_type(Some(&["VA", "DA", "BA"][..])), ItemType::Book);
    }

    #[test]
    fn test_last_recognized_code_wins() {
        assert_eq!(resolve_item_type(Some(&["MA", "AA"][..])), ItemType::AudioRecording);
        assert_eq!(resolve_item_type(Some(&["AA", "MA"][..])), ItemType::NewspaperArticle);
        assert_eq!(resolve_item_type(Some(&["VA", "ZZ"][..])), ItemType::VideoRecording);
    }

    #[test]
    fn test_defaults_to_book() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_item_type(Some(&empty[..])), ItemType::Book);
        assert_eq!(resolve_item_type::<&str>(None), ItemType::Book);
        assert_eq!(resolve_item_type(Some(&["XX", "YY"][..])), ItemType::Book);
    }

    #[test]
    fn test_from_record() {
        assert_eq!(item_type_from_record(&json!({"form": ["DA"]})), ItemType::Document);
        assert_eq!(item_type_from_record(&json!({"form": [1, "FA"]})), ItemType::VideoRecording);
        assert_eq!(item_type_from_record(&json!({"form": "AA"})), ItemType::Book);
        assert_eq!(item_type_from_record(&json!({})), ItemType::Book);
    }
}
