//! Slug derivation for notes
//!
//! Every note is addressed by a slug that is unique across all notes.
//! When the caller omits one, it is derived from the title: Cyrillic
//! characters are transliterated to ASCII, everything is lowercased, and
//! words are joined with hyphens. Derivation is deterministic so the same
//! title always yields the same slug.

use std::str::FromStr;

/// Suffix appended to the conflicting slug in the field-level error
pub const SLUG_EXISTS_WARNING: &str =
    " - this slug already exists, come up with a unique value!";

/// What to do when a slug derived from a title is already taken.
///
/// An explicitly supplied slug always fails on collision; this policy only
/// governs derived slugs, where the user never chose the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugCollisionPolicy {
    /// Fail with the same field error as an explicit collision
    Reject,
    /// Disambiguate by appending `-2`, `-3`, ...
    Suffix,
}

impl FromStr for SlugCollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(SlugCollisionPolicy::Reject),
            "suffix" => Ok(SlugCollisionPolicy::Suffix),
            _ => Err(format!("Unknown slug collision policy: {}", s)),
        }
    }
}

/// Transliteration for one lowercase Cyrillic character
fn translit(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(s)
}

/// Derive a slug from free-form text.
///
/// Lowercases, transliterates Cyrillic to ASCII, keeps ASCII alphanumerics,
/// turns every other run of characters into a single hyphen, and trims
/// leading/trailing hyphens. May return an empty string when the text
/// contains nothing transliterable.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' => out.push(c),
            _ => match translit(c) {
                Some(t) => out.push_str(t),
                None => out.push('-'),
            },
        }
    }
    out.split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
