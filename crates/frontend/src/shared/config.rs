//! Site configuration for the current page.
//!
//! Defaults are compiled in; a page may layer overrides with
//! `<script type="application/toml" id="site-config">...</script>`.

use contracts::shared::config::{load_config, SiteConfig};

const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load_site_config() -> SiteConfig {
    let overrides = super::dom::document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match load_config(overrides.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid #{} block, using defaults: {:#}", CONFIG_ELEMENT_ID, err);
            SiteConfig::default()
        }
    }
}
