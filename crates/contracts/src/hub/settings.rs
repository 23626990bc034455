use super::pagination::PageWindow;
use crate::shared::config::HubConfig;

/// Per-page hub behaviour: debounce delay and optional "load more" window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubSettings {
    pub debounce_ms: u32,
    pub window: Option<PageWindow>,
}

/// `data-*` overrides found on the hub root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct HubOverrides<'a> {
    pub debounce_ms: Option<&'a str>,
    pub page_size: Option<&'a str>,
    pub page_step: Option<&'a str>,
}

impl HubSettings {
    /// Page attributes win over site configuration; unparsable attribute
    /// values are ignored. Pagination is on only when a page size is known.
    pub fn resolve(config: &HubConfig, overrides: &HubOverrides<'_>) -> Self {
        fn parsed<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
            value.and_then(|v| v.trim().parse().ok())
        }

        let debounce_ms = parsed(overrides.debounce_ms).unwrap_or(config.debounce_ms);
        let page_size = parsed(overrides.page_size).or(config.page_size);
        let page_step = parsed(overrides.page_step).or(config.page_step);

        Self {
            debounce_ms,
            window: page_size.map(|size| PageWindow::new(size, page_step.unwrap_or(size))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SiteConfig;

    #[test]
    fn test_defaults_are_debounced_without_paging() {
        let config = SiteConfig::default();
        let settings = HubSettings::resolve(&config.hub, &HubOverrides::default());
        assert_eq!(settings.debounce_ms, 70);
        assert_eq!(settings.window, None);
    }

    #[test]
    fn test_page_attributes_enable_paging() {
        let config = SiteConfig::default();
        let overrides = HubOverrides {
            debounce_ms: Some("0"),
            page_size: Some(" 6 "),
            page_step: None,
        };
        let settings = HubSettings::resolve(&config.hub, &overrides);
        assert_eq!(settings.debounce_ms, 0);
        assert_eq!(settings.window, Some(PageWindow::new(6, 6)));
    }

    #[test]
    fn test_bad_attributes_fall_back_to_config() {
        let mut config = SiteConfig::default();
        config.hub.page_size = Some(9);
        config.hub.page_step = Some(3);
        let overrides = HubOverrides {
            debounce_ms: Some("fast"),
            page_size: Some("-1"),
            page_step: Some(""),
        };
        let settings = HubSettings::resolve(&config.hub, &overrides);
        assert_eq!(settings.debounce_ms, 70);
        assert_eq!(settings.window, Some(PageWindow::new(9, 3)));
    }
}
