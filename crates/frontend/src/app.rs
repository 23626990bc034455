use crate::hub;
use crate::layout::boot;
use crate::layout::locale_context::LocaleContext;
use crate::shared::config::load_site_config;
use leptos::prelude::*;

/// Root of the site runtime. Renders nothing itself: the pages are static
/// HTML, this only owns the reactive state that drives them.
#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();

    let locale_ctx = LocaleContext::detect(config.clone());
    provide_context(locale_ctx);
    boot::start();

    hub::attach(&config.hub);
}
