//! Scalar value fixers
//!
//! Fixers normalize a single raw value. Returning `None` means the value
//! is unusable and the target field should be left out.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\D)([12]\d{3})(?:\D|$)").unwrap());
static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());
static LANGUAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})+$").unwrap());

/// Which fixer a translator applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixer {
    Date,
    Lang,
    Isbn,
}

/// Pluggable value normalization
pub trait FieldFixers: Send + Sync {
    fn fix_date(&self, raw: &str) -> Option<String>;

    fn fix_lang(&self, raw: &str) -> Option<String>;

    fn validate_isbn(&self, raw: &str) -> Option<String>;

    fn apply(&self, fixer: Fixer, raw: &str) -> Option<String> {
        match fixer {
            Fixer::Date => self.fix_date(raw),
            Fixer::Lang => self.fix_lang(raw),
            Fixer::Isbn => self.validate_isbn(raw),
        }
    }
}

/// Default fixers
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFixers;

impl FieldFixers for StandardFixers {
    /// Accepts full dates, year-month, RFC 3339 timestamps and catalog
    /// year statements like `[1999]`, `c1999.` or `©2004`.
    fn fix_date(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.format("%Y-%m-%d").to_string());
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive().format("%Y-%m-%d").to_string());
        }
        if let Some(caps) = YEAR_MONTH.captures(raw) {
            let month: u32 = caps[2].parse().ok()?;
            if (1..=12).contains(&month) {
                return Some(raw.to_string());
            }
        }

        YEAR.captures(raw).map(|caps| caps[1].to_string())
    }

    fn fix_lang(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(raw.to_ascii_lowercase());
        }
        if raw.len() == 3 {
            return iso639_2_to_1(&raw.to_ascii_lowercase()).map(String::from);
        }
        if LANGUAGE_TAG.is_match(raw) {
            return Some(raw.to_string());
        }
        None
    }

    /// Returns the compact (unhyphenated) ISBN when its checksum holds
    fn validate_isbn(&self, raw: &str) -> Option<String> {
        let compact: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let valid = match compact.len() {
            10 => isbn10_checksum(&compact),
            13 => isbn13_checksum(&compact),
            _ => false,
        };

        valid.then_some(compact)
    }
}

fn isbn10_checksum(isbn: &str) -> bool {
    let mut sum = 0;
    for (i, c) in isbn.chars().enumerate() {
        let digit = match (c, i) {
            ('X', 9) => 10,
            (c, _) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += digit * (10 - i as u32);
    }
    sum % 11 == 0
}

fn isbn13_checksum(isbn: &str) -> bool {
    let mut sum = 0;
    for (i, c) in isbn.chars().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    sum % 10 == 0
}

/// MARC / ISO 639-2 codes to ISO 639-1
fn iso639_2_to_1(code: &str) -> Option<&'static str> {
    let mapped = match code {
        "ara" => "ar",
        "chi" | "zho" => "zh",
        "cze" | "ces" => "cs",
        "dan" => "da",
        "dut" | "nld" => "nl",
        "eng" => "en",
        "fin" => "fi",
        "fre" | "fra" => "fr",
        "ger" | "deu" => "de",
        "gre" | "ell" => "el",
        "heb" => "he",
        "hin" => "hi",
        "hun" => "hu",
        "ita" => "it",
        "jpn" => "ja",
        "kor" => "ko",
        "lat" => "la",
        "nor" => "no",
        "pol" => "pl",
        "por" => "pt",
        "rus" => "ru",
        "spa" => "es",
        "swe" => "sv",
        "tur" => "tr",
        "ukr" => "uk",
        _ => return None,
    };
    Some(mapped)
}
