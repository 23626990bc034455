use super::card::CardMeta;
use super::category::{normalize, Category};

/// Current filter inputs. The query is stored normalised.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    query: String,
    pub category: Category,
}

impl FilterQuery {
    pub fn new(query: &str, category: Category) -> Self {
        Self {
            query: normalize(query),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize(raw);
    }

    pub fn matches(&self, card: &CardMeta) -> bool {
        let category_ok = self.category == Category::All || card.category == self.category;
        category_ok && card.matches_query(&self.query)
    }
}

/// Result of evaluating the filter over a card set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    /// One flag per card, in card order.
    pub visible: Vec<bool>,
    /// Cards matching query and category, before any pagination cap.
    pub matched: usize,
    /// Cards actually shown.
    pub shown: usize,
    /// Whether a "load more" control should be offered.
    pub has_more: bool,
}

impl Visibility {
    /// The grid container is hidden when it would be empty.
    pub fn grid_visible(&self) -> bool {
        self.shown > 0
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Evaluates `query` over `cards`. With `limit`, only the first `limit`
/// matches (in card order) are shown.
pub fn evaluate(cards: &[CardMeta], query: &FilterQuery, limit: Option<usize>) -> Visibility {
    let cap = limit.unwrap_or(usize::MAX);
    let mut matched = 0;
    let visible: Vec<bool> = cards
        .iter()
        .map(|card| {
            if !query.matches(card) {
                return false;
            }
            matched += 1;
            matched <= cap
        })
        .collect();

    let shown = matched.min(cap);
    Visibility {
        visible,
        matched,
        shown,
        has_more: limit.is_some() && matched > shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub() -> Vec<CardMeta> {
        vec![
            CardMeta::new(Category::Report, ["Budget Outlook 2025", "Annual budget review"]),
            CardMeta::new(Category::CaseStudy, ["Village Budget Transparency", "Case study"]),
            CardMeta::new(Category::Brief, ["Health Financing", "Policy brief"]),
            CardMeta::new(Category::Slide, ["Procurement Reform", "Slides"]),
            CardMeta::new(Category::CaseStudy, ["Digital Villages", "Studi kasus"]),
            CardMeta::new(Category::Other, ["Newsletter", "Monthly"]),
        ]
    }

    fn shown(v: &Visibility) -> Vec<usize> {
        v.visible
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_empty_query_all_shows_everything() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::default(), None);
        assert_eq!(v.visible, vec![true; 6]);
        assert_eq!((v.matched, v.shown, v.has_more), (6, 6, false));
        assert!(v.grid_visible());
    }

    #[test]
    fn test_query_only() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::new("  BUDGET ", Category::All), None);
        assert_eq!(shown(&v), vec![0, 1]);
    }

    #[test]
    fn test_category_only() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::new("", Category::CaseStudy), None);
        assert_eq!(shown(&v), vec![1, 4]);
    }

    #[test]
    fn test_category_and_query() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::new("budget", Category::CaseStudy), None);
        assert_eq!(shown(&v), vec![1]);
    }

    #[test]
    fn test_no_match_hides_grid() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::new("zzz", Category::All), None);
        assert!(v.is_empty());
        assert!(!v.grid_visible());
        assert!(!v.has_more);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let cards = hub();
        let q = FilterQuery::new("village", Category::All);
        assert_eq!(evaluate(&cards, &q, Some(1)), evaluate(&cards, &q, Some(1)));
    }

    #[test]
    fn test_limit_caps_in_card_order() {
        let cards = hub();
        let v = evaluate(&cards, &FilterQuery::default(), Some(4));
        assert_eq!(shown(&v), vec![0, 1, 2, 3]);
        assert_eq!((v.matched, v.shown, v.has_more), (6, 4, true));

        let v = evaluate(&cards, &FilterQuery::default(), Some(6));
        assert!(!v.has_more);
    }
}
