//! Translation dictionaries and partial references.

use super::locale::Locale;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Key -> localized text, one per locale.
///
/// Stored as raw JSON values so that `null` entries can be told apart from
/// missing ones; both leave the element untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, Value>,
}

impl Dictionary {
    /// Parses a dictionary body. Anything other than a JSON object is an
    /// error.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Text to put in place of the element content for `key`, if any.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        }
    }
}

/// Expands a `{locale}` template, e.g. `assets/i18n/{locale}.json`.
pub fn dictionary_path(template: &str, locale: Locale) -> String {
    template.replace("{locale}", locale.as_str())
}

/// A named markup fragment and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRef {
    pub name: String,
    pub path: String,
}

impl PartialRef {
    /// Builds a reference from a `{name}` path template such as
    /// `partials/{name}.html`.
    pub fn new(name: &str, template: &str) -> Self {
        let name = name.trim();
        Self {
            name: name.to_string(),
            path: template.replace("{name}", name),
        }
    }

    /// The navigation bar gets extra wiring after injection.
    pub fn is_navbar(&self) -> bool {
        self.path.contains("navbar")
    }
}
