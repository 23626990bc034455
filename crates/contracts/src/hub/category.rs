//! Card categories and the bilingual keyword heuristics that infer them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Filter value only: matches every card.
    #[default]
    All,
    Report,
    CaseStudy,
    Brief,
    Slide,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Report => "report",
            Category::CaseStudy => "case-study",
            Category::Brief => "brief",
            Category::Slide => "slide",
            Category::Other => "other",
        }
    }

    /// Parses a canonical key (`case-study`, `report`, ...) as written in
    /// `data-category` / `data-filter` annotations.
    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "all" => Some(Category::All),
            "report" => Some(Category::Report),
            "case-study" => Some(Category::CaseStudy),
            "brief" => Some(Category::Brief),
            "slide" => Some(Category::Slide),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercases and trims, the one normalisation used for every comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Clone, Copy)]
enum Rule {
    /// Whole label must equal one of the words.
    Exact(&'static [&'static str]),
    /// Label must contain one of the words.
    Contains(&'static [&'static str]),
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        match self {
            Rule::Exact(words) => words.iter().any(|w| text == *w),
            Rule::Contains(words) => words.iter().any(|w| text.contains(w)),
        }
    }
}

struct Keywords {
    category: Category,
    en: Rule,
    id: Rule,
}

// Filter bar labels ("All", "Semua", "Case Studies", "Studi Kasus", ...).
const FILTER_LABELS: &[Keywords] = &[
    Keywords { category: Category::All, en: Rule::Exact(&["all"]), id: Rule::Exact(&["semua"]) },
    Keywords { category: Category::Report, en: Rule::Exact(&["reports", "report"]), id: Rule::Exact(&["laporan"]) },
    Keywords { category: Category::CaseStudy, en: Rule::Contains(&["case"]), id: Rule::Contains(&["studi"]) },
    Keywords { category: Category::Brief, en: Rule::Exact(&["briefs", "brief"]), id: Rule::Exact(&["ringkasan"]) },
    Keywords { category: Category::Slide, en: Rule::Exact(&["slides", "slide"]), id: Rule::Exact(&["presentasi"]) },
];

// Card badges ("Report", "Laporan Tahunan", ...).
const BADGES: &[Keywords] = &[
    Keywords { category: Category::Report, en: Rule::Contains(&["report"]), id: Rule::Contains(&["laporan"]) },
    Keywords { category: Category::CaseStudy, en: Rule::Contains(&["case"]), id: Rule::Contains(&["studi"]) },
    Keywords { category: Category::Brief, en: Rule::Contains(&["brief"]), id: Rule::Contains(&["ringkasan"]) },
    Keywords { category: Category::Slide, en: Rule::Contains(&["slide"]), id: Rule::Contains(&["presentasi"]) },
];

// Titles mention "report" too often to be a signal, so it is not listed.
const TITLES: &[Keywords] = &[
    Keywords { category: Category::CaseStudy, en: Rule::Contains(&["case"]), id: Rule::Contains(&["studi"]) },
    Keywords { category: Category::Brief, en: Rule::Contains(&["brief"]), id: Rule::Contains(&["ringkasan"]) },
    Keywords { category: Category::Slide, en: Rule::Contains(&["slide"]), id: Rule::Contains(&["presentasi"]) },
];

fn classify(table: &[Keywords], text: &str) -> Option<Category> {
    let text = normalize(text);
    if text.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|k| k.en.matches(&text) || k.id.matches(&text))
        .map(|k| k.category)
}

/// Maps a filter button label to a category; unknown labels mean `All`.
pub fn category_from_filter_label(label: &str) -> Category {
    classify(FILTER_LABELS, label).unwrap_or(Category::All)
}

pub fn classify_badge(text: &str) -> Option<Category> {
    classify(BADGES, text)
}

pub fn classify_title(text: &str) -> Option<Category> {
    classify(TITLES, text)
}

/// Derives a card category: explicit annotation, then badge, then title,
/// else `Other`.
///
/// An annotation that is not a canonical key is classified like a badge, so
/// `data-category="Laporan"` still lands in `Report`. `all` is never a card
/// category.
pub fn derive_category(annotation: Option<&str>, badge: Option<&str>, title: Option<&str>) -> Category {
    let annotated = annotation
        .filter(|a| !a.trim().is_empty())
        .and_then(|a| Category::parse(a).or_else(|| classify_badge(a)))
        .filter(|c| *c != Category::All);

    annotated
        .or_else(|| badge.and_then(classify_badge))
        .or_else(|| title.and_then(classify_title))
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_labels_both_languages() {
        assert_eq!(category_from_filter_label("Studi Kasus"), Category::CaseStudy);
        assert_eq!(category_from_filter_label("Case Studies"), Category::CaseStudy);
        assert_eq!(category_from_filter_label(" Semua "), Category::All);
        assert_eq!(category_from_filter_label("All"), Category::All);
        assert_eq!(category_from_filter_label("Reports"), Category::Report);
        assert_eq!(category_from_filter_label("Laporan"), Category::Report);
        assert_eq!(category_from_filter_label("Ringkasan"), Category::Brief);
        assert_eq!(category_from_filter_label("Presentasi"), Category::Slide);
        assert_eq!(category_from_filter_label("Slides"), Category::Slide);
    }

    #[test]
    fn test_unknown_filter_label_is_all() {
        assert_eq!(category_from_filter_label("Videos"), Category::All);
        assert_eq!(category_from_filter_label(""), Category::All);
        // Report labels must match exactly.
        assert_eq!(category_from_filter_label("Annual reports"), Category::All);
    }

    #[test]
    fn test_badges() {
        assert_eq!(classify_badge("Laporan Tahunan"), Some(Category::Report));
        assert_eq!(classify_badge("POLICY BRIEF"), Some(Category::Brief));
        assert_eq!(classify_badge("Slide Deck"), Some(Category::Slide));
        assert_eq!(classify_badge("News"), None);
        assert_eq!(classify_badge("  "), None);
    }

    #[test]
    fn test_title_ignores_report() {
        assert_eq!(classify_title("Budget report 2024"), None);
        assert_eq!(classify_title("Studi kasus: Desa Digital"), Some(Category::CaseStudy));
    }

    #[test]
    fn test_derive_order() {
        assert_eq!(
            derive_category(Some("slide"), Some("Report"), Some("A case study")),
            Category::Slide
        );
        assert_eq!(
            derive_category(None, Some("Report"), Some("A case study")),
            Category::Report
        );
        assert_eq!(derive_category(Some(""), None, Some("A case study")), Category::CaseStudy);
        assert_eq!(derive_category(None, Some("News"), Some("Hello")), Category::Other);
        assert_eq!(derive_category(None, None, None), Category::Other);
    }

    #[test]
    fn test_annotation_fallbacks() {
        assert_eq!(derive_category(Some("Laporan"), None, None), Category::Report);
        assert_eq!(derive_category(Some("all"), Some("Brief"), None), Category::Brief);
        assert_eq!(derive_category(Some("video"), None, Some("Slides")), Category::Slide);
    }

    #[test]
    fn test_parse_roundtrips_keys() {
        for c in [
            Category::All,
            Category::Report,
            Category::CaseStudy,
            Category::Brief,
            Category::Slide,
            Category::Other,
        ] {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("Case-Study"), Some(Category::CaseStudy));
        assert_eq!(Category::parse("case study"), None);
    }
}
