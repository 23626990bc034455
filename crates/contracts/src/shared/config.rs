use super::locale::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub i18n: I18nConfig,
    pub partials: PartialsConfig,
    pub hub: HubConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct I18nConfig {
    /// Dictionary location, `{locale}` is substituted.
    pub dictionary_path: String,
    pub storage_key: String,
    pub query_param: String,
    /// Dictionary to try when the active locale's one cannot be loaded.
    pub fallback_locale: Locale,
    pub key_attribute: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PartialsConfig {
    /// Fragment location, `{name}` is substituted.
    pub path: String,
    /// Element ids that are always inclusion slots for the partial of the same name.
    pub slots: Vec<String>,
    pub include_attribute: String,
    pub brand_selector: String,
    pub locale_selector: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HubConfig {
    pub root_selector: String,
    /// 0 re-filters on every keystroke.
    pub debounce_ms: u32,
    /// Enables the "load more" variant when set.
    pub page_size: Option<usize>,
    pub page_step: Option<usize>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
[i18n]
dictionary_path = "assets/i18n/{locale}.json"
storage_key = "locale"
query_param = "lang"
fallback_locale = "en"
key_attribute = "data-i18n"

[partials]
path = "partials/{name}.html"
slots = ["navbar", "footer"]
include_attribute = "data-include"
brand_selector = ".navbar-brand"
locale_selector = ".dropdown-item[data-lang]"

[hub]
root_selector = "#overview"
debounce_ms = 70
"##;

// Must stay in sync with DEFAULT_CONFIG.
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            i18n: I18nConfig {
                dictionary_path: "assets/i18n/{locale}.json".to_string(),
                storage_key: "locale".to_string(),
                query_param: "lang".to_string(),
                fallback_locale: Locale::En,
                key_attribute: "data-i18n".to_string(),
            },
            partials: PartialsConfig {
                path: "partials/{name}.html".to_string(),
                slots: vec!["navbar".to_string(), "footer".to_string()],
                include_attribute: "data-include".to_string(),
                brand_selector: ".navbar-brand".to_string(),
                locale_selector: ".dropdown-item[data-lang]".to_string(),
            },
            hub: HubConfig {
                root_selector: "#overview".to_string(),
                debounce_ms: 70,
                page_size: None,
                page_step: None,
            },
        }
    }
}

fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Load configuration, layering an optional TOML document over the embedded
/// defaults. Keys missing from `overrides` keep their default values.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<SiteConfig> {
    let mut value: toml::Value = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(text) = overrides.filter(|t| !t.trim().is_empty()) {
        let overlay: toml::Value = toml::from_str(text)?;
        merge(&mut value, overlay);
    }
    Ok(value.try_into::<SiteConfig>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<SiteConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.i18n.dictionary_path, "assets/i18n/{locale}.json");
        assert_eq!(config.i18n.fallback_locale, Locale::En);
        assert_eq!(config.partials.slots, vec!["navbar", "footer"]);
        assert_eq!(config.hub.debounce_ms, 70);
        assert_eq!(config.hub.page_size, None);
        assert_eq!(SiteConfig::default(), config);
    }

    #[test]
    fn test_overrides_are_layered() {
        let config = load_config(Some(
            r#"
            [hub]
            debounce_ms = 0
            page_size = 6
            page_step = 6
            "#,
        ))
        .unwrap();
        assert_eq!(config.hub.debounce_ms, 0);
        assert_eq!(config.hub.page_size, Some(6));
        assert_eq!(config.hub.root_selector, "#overview");
        assert_eq!(config.i18n.storage_key, "locale");
    }

    #[test]
    fn test_blank_overrides_use_defaults() {
        assert_eq!(load_config(Some("  \n")).unwrap(), SiteConfig::default());
        assert_eq!(load_config(None).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_overrides_fail() {
        assert!(load_config(Some("[hub")).is_err());
        assert!(load_config(Some("[i18n]\nfallback_locale = \"fr\"")).is_err());
    }
}
