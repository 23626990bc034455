pub mod config;
pub mod i18n;
pub mod links;
pub mod locale;
pub mod locale_switch;
