//! Keep/drop decision for register rows.
//!
//! Two ordered keyword lists are checked in two phases: exclusion first, then
//! inclusion. Matching is plain substring containment on lowercased text, so a
//! keyword inside an unrelated word also matches (`effort` contains `fort`).
//! That imprecision is known and kept.

use mh_model::Row;
use mh_model::columns::{DENOMINATION, DOMAIN, EDITORIAL_TITLE};

/// Keywords marking a fortified or monastic site.
pub const INCLUDE_KEYWORDS: &[&str] = &[
    "château",
    "chateau",
    "château-fort",
    "chateau-fort",
    "manoir",
    "donjon",
    "fort",
    "forteresse",
    "citadelle",
    "abbaye",
    "abbatiale",
    "prieuré",
    "prieure",
    "monastère",
    "monastere",
    "chartreuse",
];

/// Keywords that drop a row regardless of any inclusion keyword.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    // simple religious buildings
    "église",
    "eglise",
    "cathédrale",
    "cathedrale",
    "chapelle",
    "basilique",
    "temple",
    "mosquée",
    "mosquee",
    "synagogue",
    // antiquity
    "villa gallo-romaine",
    "site gallo-romain",
    "gallo-romain",
    "gallo romain",
    "thermes gallo-romains",
    "théâtre antique",
    "theatre antique",
    "amphithéâtre",
    "amphitheatre",
    "arènes",
    "arenes",
    // megaliths
    "dolmen",
    "menhir",
    "tumulus",
];

/// Outcome of classifying one row, with the keyword that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// An exclusion keyword appeared in the denomination or title.
    Excluded { keyword: &'static str },
    /// An inclusion keyword appeared in the denomination or title.
    Included { keyword: &'static str },
    /// Only the domain category carried an inclusion keyword.
    IncludedByDomain { keyword: &'static str },
    NoMatch,
}

impl Decision {
    pub fn is_kept(self) -> bool {
        matches!(
            self,
            Decision::Included { .. } | Decision::IncludedByDomain { .. }
        )
    }

    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Decision::Excluded { keyword }
            | Decision::Included { keyword }
            | Decision::IncludedByDomain { keyword } => Some(keyword),
            Decision::NoMatch => None,
        }
    }
}

fn find_keyword(haystack: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| haystack.contains(keyword))
}

/// Classifies from the raw denomination, editorial title and domain texts.
pub fn classify(denomination: &str, title: &str, domain: &str) -> Decision {
    let text = format!("{denomination} {title}").to_lowercase();

    if let Some(keyword) = find_keyword(&text, EXCLUDE_KEYWORDS) {
        return Decision::Excluded { keyword };
    }
    if let Some(keyword) = find_keyword(&text, INCLUDE_KEYWORDS) {
        return Decision::Included { keyword };
    }
    if let Some(keyword) = find_keyword(&domain.to_lowercase(), INCLUDE_KEYWORDS) {
        return Decision::IncludedByDomain { keyword };
    }
    Decision::NoMatch
}

/// Classifies a register row. Missing columns count as empty text.
pub fn classify_row(row: &Row) -> Decision {
    classify(
        row.text(DENOMINATION),
        row.text(EDITORIAL_TITLE),
        row.text(DOMAIN),
    )
}

/// True when the row denotes a site worth keeping.
pub fn is_selected(row: &Row) -> bool {
    classify_row(row).is_kept()
}
