//! Normalization behaviour through the public library API

use serde_json::json;

use citekit_server::models::{Citation, Creator, IdType, ItemType};
use citekit_server::translators::{
    creators::{add_creators_with_role_classification, extract_names},
    resolve_item_type, Normalizer, NormalizerOptions,
};

fn classify(statement: &str) -> Vec<Creator> {
    let mut citation = Citation::new(IdType::Isbn, "9780000000000");
    add_creators_with_role_classification(&mut citation, &json!(statement), "author");
    citation.creators().to_vec()
}

#[test]
fn test_resolve_item_type() {
    assert_eq!(resolve_item_type(Some(&["BC", "AA"][..])), ItemType::Book);
    assert_eq!(resolve_item_type(Some(&["MA", "AA"][..])), ItemType::AudioRecording);
    assert_eq!(resolve_item_type::<String>(Some(&[][..])), ItemType::Book);
    assert_eq!(resolve_item_type::<String>(None), ItemType::Book);
}

#[test]
fn test_extract_names() {
    assert_eq!(
        extract_names("Barrett, Daniel J."),
        ("Daniel J.".to_string(), "Barrett".to_string())
    );
    assert_eq!(extract_names("Murakami"), (String::new(), "Murakami".to_string()));
}

#[test]
fn test_creator_statements() {
    assert_eq!(
        classify("Daniel J. Barrett."),
        vec![Creator::new("author", "Daniel J.", "Barrett")]
    );

    assert_eq!(
        classify("J.K. Rowling ; illustrations by Mary GrandPré."),
        vec![
            Creator::new("author", "J.K.", "Rowling"),
            Creator::new("contributor", "Mary", "GrandPré"),
        ]
    );

    let translated =
        classify("Haruki Murakami ; translated from the Japanese by Jay Rubin and Philip Gabriel.");
    assert_eq!(translated.len(), 3);
    assert_eq!(translated[0].creator_type, "author");
    assert!(translated[1..].iter().all(|c| c.creator_type == "translator"));

    assert_eq!(
        classify("Haruki Murakami ; edited by Philip Gabriel."),
        vec![Creator::new("author", "Haruki", "Murakami")]
    );
}

#[test]
fn test_repeated_normalization_does_not_duplicate() {
    let raw = json!({"list": [{
        "form": ["BB"],
        "title": "Harry Potter and the sorcerer's stone",
        "author": "J.K. Rowling ; illustrations by Mary GrandPré.",
        "year": "1998",
        "isbn": ["0590353403"]
    }]});

    let normalizer = Normalizer::new(NormalizerOptions::default());
    let mut citation = Citation::new(IdType::Isbn, "0590353403");
    normalizer.normalize(&mut citation, &raw);
    let first = citation.content.clone();

    normalizer.normalize(&mut citation, &raw);

    assert_eq!(citation.content, first);
    assert_eq!(citation.creators().len(), 2);
    assert_eq!(citation.item_type, Some(ItemType::Book));
}
