use super::category::{derive_category, normalize, Category};

/// What the filter knows about one card. Built once per page load and never
/// refreshed, even if the card's markup changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMeta {
    pub category: Category,
    /// Normalised title/body/label text joined by single spaces.
    pub text: String,
}

impl CardMeta {
    pub fn new<'a, I>(category: Category, parts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let text = parts
            .into_iter()
            .map(normalize)
            .collect::<Vec<_>>()
            .join(" ");
        Self { category, text }
    }

    /// Raw text gathered from a card's markup.
    pub fn from_source(source: &CardSource) -> Self {
        let category = derive_category(
            source.annotation.as_deref(),
            source.badge.as_deref(),
            source.title.as_deref(),
        );
        Self::new(category, source.texts.iter().map(String::as_str))
    }

    pub fn matches_query(&self, normalized_query: &str) -> bool {
        normalized_query.is_empty() || self.text.contains(normalized_query)
    }
}

/// Raw strings read from one card element.
#[derive(Debug, Clone, Default)]
pub struct CardSource {
    /// `data-category` of the card or its column.
    pub annotation: Option<String>,
    /// Text of the first `.badge`.
    pub badge: Option<String>,
    /// Text of the first `h2`/`h3`.
    pub title: Option<String>,
    /// Text of every `h2`, `p` and `span`, in document order.
    pub texts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_normalised_and_joined() {
        let meta = CardMeta::new(Category::Report, ["  Budget Report ", "Fiscal YEAR", ""]);
        assert_eq!(meta.text, "budget report fiscal year ");
        assert!(meta.matches_query("report fiscal"));
        assert!(meta.matches_query(""));
        assert!(!meta.matches_query("Budget"));
    }

    #[test]
    fn test_from_source() {
        let source = CardSource {
            annotation: None,
            badge: Some("Studi Kasus".into()),
            title: Some("Desa Digital".into()),
            texts: vec!["Desa Digital".into(), "Transformasi layanan".into(), "Studi Kasus".into()],
        };
        let meta = CardMeta::from_source(&source);
        assert_eq!(meta.category, Category::CaseStudy);
        assert_eq!(meta.text, "desa digital transformasi layanan studi kasus");
    }
}
