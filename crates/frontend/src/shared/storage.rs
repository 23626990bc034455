use contracts::shared::locale::Locale;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the chosen locale to localStorage
pub fn save_locale(key: &str, locale: Locale) {
    if let Some(storage) = get_local_storage() {
        if let Err(err) = storage.set_item(key, locale.as_str()) {
            log::warn!("Failed to persist locale: {:?}", err);
        }
    }
}

/// Get the persisted locale from localStorage, as stored (unvalidated)
pub fn load_locale(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}
