//! Creator name parsing
//!
//! Heuristics for library-catalog style creator strings such as
//! `"Barrett, Daniel J., 1968-"` or
//! `"Haruki Murakami ; translated from the Japanese by Jay Rubin."`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{creator::roles, Citation, Creator};

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());
static TRAILING_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s[\d\-.,]+$").unwrap());
static TRAILING_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{L}{2,})\.$").unwrap());
static SURNAME_FIRST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?), (.+)$").unwrap());

static ILLUSTRATIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*?illustrations by\s*").unwrap());
static TRANSLATED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)translated").unwrap());
static TRANSLATED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*?translated (?:(?-u:\w)+\s)*by\s").unwrap());
static OTHER_ROLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?-u:\w)+ by\s").unwrap());

/// What `add_creators` does when a list element is empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatorListMode {
    /// Stop processing the rest of the list
    #[default]
    Strict,
    /// Skip the element and keep going
    Lenient,
}

fn has_generational_suffix(name: &str) -> bool {
    name.ends_with(" Jr.") || name.ends_with(" Sr.")
}

/// Strip parentheses, dates and trailing punctuation from a name
fn clean_name(name: &str) -> String {
    let without_parens = PARENTHESIZED.replace(name, "");
    let without_years = TRAILING_YEARS.replace(without_parens.trim(), "");
    let name = without_years.strip_suffix(',').unwrap_or(&*without_years);

    if has_generational_suffix(name) {
        name.to_string()
    } else {
        TRAILING_PERIOD.replace(name, "$1").into_owned()
    }
}

/// Split a "Surname, Given" string into `(first_name, last_name)`.
///
/// Anything without a `", "` separator is taken as a surname or an
/// organization and returned with an empty first name.
pub fn extract_names(name: &str) -> (String, String) {
    let cleaned = clean_name(name);
    match SURNAME_FIRST.captures(&cleaned) {
        Some(caps) => (caps[2].to_string(), caps[1].to_string()),
        None => (String::new(), cleaned),
    }
}

/// Like [`extract_names`], but also accepts natural order ("Given Surname")
/// where the last word is the surname.
pub fn extract_natural_names(name: &str) -> (String, String) {
    let cleaned = clean_name(name);
    if let Some(caps) = SURNAME_FIRST.captures(&cleaned) {
        return (caps[2].to_string(), caps[1].to_string());
    }

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let surname_words = match words.last() {
        Some(&("Jr." | "Jr" | "Sr." | "Sr")) if words.len() > 2 => 2,
        _ => 1,
    };
    if words.len() <= surname_words {
        return (String::new(), cleaned);
    }

    let split = words.len() - surname_words;
    (words[..split].join(" "), words[split..].join(" "))
}

/// Build a creator from a "Surname, Given" string
pub fn generate_creator_obj(name: &str, role: &str) -> Creator {
    let (first_name, last_name) = extract_names(name);
    Creator::new(role, first_name, last_name)
}

/// Build a creator from a free-text name in either order
pub fn generate_natural_creator_obj(name: &str, role: &str) -> Creator {
    let (first_name, last_name) = extract_natural_names(name);
    Creator::new(role, first_name, last_name)
}

/// Add creators from a string or a list of strings, all with the same role.
///
/// In [`CreatorListMode::Strict`] the first empty element ends processing of
/// the list; elements after it are not added.
pub fn add_creators(citation: &mut Citation, raw: &Value, role: &str, mode: CreatorListMode) {
    match raw {
        Value::String(name) => {
            let name = name.trim();
            if !name.is_empty() {
                citation.push_creator(generate_creator_obj(name, role));
            }
        }
        Value::Array(names) => {
            for name in names {
                let name = name.as_str().map(str::trim).unwrap_or_default();
                if name.is_empty() {
                    match mode {
                        CreatorListMode::Strict => {
                            tracing::debug!("Empty creator in list, ignoring remaining elements");
                            break;
                        }
                        CreatorListMode::Lenient => continue,
                    }
                }
                citation.push_creator(generate_creator_obj(name, role));
            }
        }
        _ => {}
    }
}

fn add_name_list(citation: &mut Citation, names: &str, role: &str) {
    for name in names.split(" and ") {
        let name = name.trim();
        if !name.is_empty() {
            citation.push_creator(generate_natural_creator_obj(name, role));
        }
    }
}

/// Add creators from a semicolon-delimited statement of responsibility,
/// assigning roles from phrases like "illustrations by" or "translated by".
///
/// Chunks naming any other role ("edited by", "foreword by", ...) are
/// dropped entirely.
pub fn add_creators_with_role_classification(citation: &mut Citation, raw: &Value, role: &str) {
    let Some(statement) = raw.as_str() else {
        return;
    };
    let statement = if has_generational_suffix(statement) {
        statement
    } else {
        statement.strip_suffix('.').unwrap_or(statement)
    };

    for chunk in statement.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        if ILLUSTRATIONS.is_match(chunk) {
            let names = ILLUSTRATIONS.replace(chunk, "");
            add_name_list(citation, &names, roles::CONTRIBUTOR);
        } else if TRANSLATED.is_match(chunk) {
            let names = TRANSLATED_PREFIX.replace(chunk, "");
            add_name_list(citation, &names, roles::TRANSLATOR);
        } else if OTHER_ROLE.is_match(chunk) {
            tracing::debug!("Dropping creator chunk with unknown role: {}", chunk);
        } else {
            add_name_list(citation, chunk, role);
        }
    }
}
