//! Locale switching: where to navigate, and which in-place reload wins.

use super::locale::Locale;

/// What the browser should do after the locale preference was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchPlan {
    /// Load another URL (path + current query + fragment).
    Navigate(String),
    /// The URL already points at the requested locale; re-translate in place.
    InPlace,
}

fn is_page_file(segment: &str) -> bool {
    let lower = segment.to_ascii_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm")
}

/// Rewrites `pathname` so that it carries `locale` as a folder segment.
///
/// An existing `en`/`id` segment is replaced. Without one, the locale is
/// inserted after the first segment (site served from a sub-folder) unless
/// that segment is itself a page, in which case it is prepended.
pub fn localized_path(pathname: &str, locale: Locale) -> String {
    let mut segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    match segments.iter().position(|s| Locale::parse(s).is_some() && s.len() == 2) {
        Some(index) => segments[index] = locale.as_str(),
        None if !segments.is_empty() && !is_page_file(segments[0]) => {
            segments.insert(1, locale.as_str())
        }
        None => segments.insert(0, locale.as_str()),
    }

    let mut path = format!("/{}", segments.join("/"));
    if pathname.is_empty() || pathname.ends_with('/') {
        path.push('/');
    }
    path
}

/// Decides between navigation and in-place re-translation.
/// Query string and fragment are carried over untouched.
pub fn plan_switch(pathname: &str, search: &str, hash: &str, locale: Locale) -> SwitchPlan {
    let path = localized_path(pathname, locale);
    if path == pathname {
        SwitchPlan::InPlace
    } else {
        SwitchPlan::Navigate(format!("{}{}{}", path, search, hash))
    }
}

/// Identifies one in-place switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPhase {
    #[default]
    Idle,
    Switching {
        ticket: SwitchTicket,
        locale: Locale,
    },
}

/// Tracks in-place switches so that a slow dictionary fetch for an older
/// request cannot overwrite the text of a newer one.
#[derive(Debug, Clone, Default)]
pub struct LocaleSwitcher {
    phase: SwitchPhase,
    issued: u64,
}

impl LocaleSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SwitchPhase {
        self.phase
    }

    /// Starts a switch to `locale`; any earlier ticket becomes stale.
    pub fn begin(&mut self, locale: Locale) -> SwitchTicket {
        self.issued += 1;
        let ticket = SwitchTicket(self.issued);
        self.phase = SwitchPhase::Switching { ticket, locale };
        ticket
    }

    /// Snapshot of the switch counter, for work that must yield to any
    /// switch started after it.
    pub fn mark(&self) -> u64 {
        self.issued
    }

    pub fn switched_since(&self, mark: u64) -> bool {
        self.issued != mark
    }

    /// Completes the switch identified by `ticket`.
    ///
    /// Returns the locale to apply if `ticket` is the latest request, `None`
    /// if it has been superseded (the result must then be dropped).
    pub fn finish(&mut self, ticket: SwitchTicket) -> Option<Locale> {
        match self.phase {
            SwitchPhase::Switching { ticket: current, locale } if current == ticket => {
                self.phase = SwitchPhase::Idle;
                Some(locale)
            }
            _ => None,
        }
    }
}
