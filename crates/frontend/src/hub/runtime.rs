use super::page::HubPage;
use crate::shared::dom::{self, query_all, text_of};
use contracts::hub::category::{category_from_filter_label, Category};
use contracts::hub::filter::Visibility;
use contracts::hub::machine::{HubCommand, HubEvent, HubMachine};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Node};

pub struct HubRuntime {
    pub machine: RefCell<HubMachine>,
    /// Rendered by the effect installed in `attach`.
    pub visibility: RwSignal<Visibility>,
}

/// Feeds one event to the machine and carries out its command.
fn dispatch(runtime: &Rc<HubRuntime>, event: HubEvent) {
    let command = runtime.machine.borrow_mut().handle(event);
    match command {
        Some(HubCommand::Schedule {
            generation,
            delay_ms,
        }) => {
            let runtime = Rc::clone(runtime);
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                dispatch(&runtime, HubEvent::DebounceElapsed(generation));
            });
        }
        Some(HubCommand::Render) => {
            let visibility = runtime.machine.borrow().visibility();
            runtime.visibility.set(visibility);
        }
        None => {}
    }
}

fn filter_category(button: &Element) -> Category {
    button
        .get_attribute("data-filter")
        .and_then(|value| Category::parse(&value))
        .unwrap_or_else(|| category_from_filter_label(&text_of(button)))
}

pub fn wire(runtime: &Rc<HubRuntime>, page: &HubPage) {
    if let Some(input) = page.search.clone() {
        let runtime = Rc::clone(runtime);
        let target = input.clone();
        dom::listen(&target, "input", move |_| {
            dispatch(&runtime, HubEvent::Input(input.value()));
        });
    }

    if let Some(bar) = page.filter_bar.clone() {
        let runtime = Rc::clone(runtime);
        let target_bar = bar.clone();
        dom::listen(&target_bar, "click", move |event| {
            let Some(button) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest(".btn").ok().flatten())
            else {
                return;
            };
            let node: &Node = &button;
            if !bar.contains(Some(node)) {
                return;
            }

            for other in query_all(&bar, ".btn") {
                let _ = other.class_list().remove_1("active");
            }
            let _ = button.class_list().add_1("active");

            dispatch(&runtime, HubEvent::SelectCategory(filter_category(&button)));
        });
    }

    if let Some(button) = page.load_more.clone() {
        let runtime = Rc::clone(runtime);
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            dispatch(&runtime, HubEvent::LoadMore);
        });
    }
}
