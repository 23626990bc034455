//! Knowledge Hub search and category filters over the static card grid.

mod page;
mod runtime;

use crate::shared::dom;
use contracts::hub::card::CardMeta;
use contracts::hub::machine::HubMachine;
use contracts::hub::settings::{HubOverrides, HubSettings};
use contracts::shared::config::HubConfig;
use leptos::prelude::*;
use page::HubPage;
use runtime::HubRuntime;
use std::cell::RefCell;
use std::rc::Rc;

/// Attaches the filter UI to the page's hub root, if the page has one.
pub fn attach(config: &HubConfig) {
    let Some(root) = dom::document_root().and_then(|r| dom::query(&r, &config.root_selector)) else {
        return;
    };

    let debounce_attr = root.get_attribute("data-debounce-ms");
    let size_attr = root.get_attribute("data-page-size");
    let step_attr = root.get_attribute("data-page-step");
    let settings = HubSettings::resolve(
        config,
        &HubOverrides {
            debounce_ms: debounce_attr.as_deref(),
            page_size: size_attr.as_deref(),
            page_step: step_attr.as_deref(),
        },
    );

    let page = Rc::new(HubPage::collect(&root));
    let cards: Vec<CardMeta> = page.sources.iter().map(CardMeta::from_source).collect();
    log::debug!(
        "Knowledge Hub: {} cards, debounce {} ms, paging {:?}",
        cards.len(),
        settings.debounce_ms,
        settings.window
    );

    let machine = HubMachine::new(cards, settings.debounce_ms, settings.window);
    let visibility = RwSignal::new(machine.visibility());
    let runtime = Rc::new(HubRuntime {
        machine: RefCell::new(machine),
        visibility,
    });

    {
        let page = Rc::clone(&page);
        Effect::new(move |_| visibility.with(|v| page.render(v)));
    }

    runtime::wire(&runtime, &page);
}
