//! Locale handling and partial inclusion shared by every page.

pub mod boot;
pub mod i18n;
pub mod locale_context;
pub mod partials;
