use crate::shared::dom::{query, query_all, set_displayed, text_of};
use contracts::hub::card::CardSource;
use contracts::hub::filter::Visibility;
use web_sys::{Element, HtmlInputElement};
use wasm_bindgen::JsCast;

const COLUMN_SELECTOR: &str = r#"[class*="col-"]"#;

/// DOM handles of one hub section, looked up once.
pub struct HubPage {
    pub search: Option<HtmlInputElement>,
    pub grid: Option<Element>,
    pub filter_bar: Option<Element>,
    pub load_more: Option<Element>,
    pub empty_state: Option<Element>,
    /// Layout column of each card; this is what gets hidden so the grid reflows.
    pub columns: Vec<Element>,
    pub sources: Vec<CardSource>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn read_card(card: &Element, column: &Element) -> CardSource {
    CardSource {
        annotation: non_empty(card.get_attribute("data-category"))
            .or_else(|| non_empty(column.get_attribute("data-category"))),
        badge: query(card, ".badge").map(|e| text_of(&e)),
        title: query(card, "h2, h3").map(|e| text_of(&e)),
        texts: query_all(card, "h2, p, span").iter().map(text_of).collect(),
    }
}

impl HubPage {
    pub fn collect(root: &Element) -> Self {
        let search = query(root, r#"form[role="search"] input"#)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        let grid = query(root, ".row.g-4");
        let filter_bar =
            query(root, ".filter-bar").or_else(|| query(root, ".d-flex.flex-wrap.gap-2.mb-4"));

        let mut columns = Vec::new();
        let mut sources = Vec::new();
        for card in query_all(root, ".card") {
            let column = card
                .closest(COLUMN_SELECTOR)
                .ok()
                .flatten()
                .or_else(|| card.parent_element())
                .unwrap_or_else(|| card.clone());
            sources.push(read_card(&card, &column));
            columns.push(column);
        }

        Self {
            search,
            grid,
            filter_bar,
            load_more: query(root, "[data-load-more]"),
            empty_state: query(root, "[data-empty-state]"),
            columns,
            sources,
        }
    }

    pub fn render(&self, visibility: &Visibility) {
        for (column, shown) in self.columns.iter().zip(&visibility.visible) {
            set_displayed(column, *shown);
        }
        if let Some(grid) = &self.grid {
            set_displayed(grid, visibility.grid_visible());
        }
        if let Some(empty) = &self.empty_state {
            set_displayed(empty, visibility.is_empty());
        }
        if let Some(button) = &self.load_more {
            set_displayed(button, visibility.has_more);
        }
    }
}
