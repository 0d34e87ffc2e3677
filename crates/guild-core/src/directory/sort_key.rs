use crate::{CoreError, CoreResult, ProfileRecord};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Directory ordering. Exactly one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    RatingDesc,
    RateAsc,
    RateDesc,
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        Self::RatingDesc,
        Self::RateAsc,
        Self::RateDesc,
        Self::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RatingDesc => "rating-desc",
            Self::RateAsc => "rate-asc",
            Self::RateDesc => "rate-desc",
            Self::NameAsc => "name-asc",
        }
    }

    pub fn compare(&self, a: &ProfileRecord, b: &ProfileRecord) -> Ordering {
        match self {
            Self::RatingDesc => b.rating.total_cmp(&a.rating),
            Self::RateAsc => a.rate.total_cmp(&b.rate),
            Self::RateDesc => b.rate.total_cmp(&a.rate),
            Self::NameAsc => compare_names(&a.name, &b.name),
        }
    }

    /// Stable sort: equal keys keep their input order
    pub fn sort(&self, profiles: &mut [&ProfileRecord]) {
        profiles.sort_by(|a, b| self.compare(a, b));
    }
}

/// Name ordering as a Latin-script locale collates it.
///
/// Letters compare by base letter first, ignoring case and accents, so
/// "Émile" sorts between "adam" and "Zoe". Accents only break ties between
/// otherwise equal names; names differing only by case compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
}

fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match base_letters(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

/// Base letters of the accented lowercase Latin-1 letters
fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'à'..='å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è'..='ë' => "e",
        'ì'..='ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò'..='ö' | 'ø' => "o",
        'ù'..='ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        'ß' => "ss",
        _ => return None,
    };
    Some(base)
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSortKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
