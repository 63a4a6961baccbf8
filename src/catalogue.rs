//! One-click installer catalogue
//!
//! Static metadata for the application stacks Opalstack can install: the
//! installer script URL per server OS generation and the default app
//! configuration each stack starts from. The catalogue is embedded at compile
//! time, parsed once, and returned identically for every call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Embedded catalogue JSON (compiled into the binary)
const CATALOGUE_JSON: &str = include_str!("installers.json");

/// One installable application stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installer {
    /// Key the create workflow selects the stack by.
    pub selected_type: String,
    /// Human-readable stack name.
    pub name: String,
    /// Base application type the stack runs on (NPF, CUS, STA, ...).
    pub app_type: String,
    /// Install script URL per server OS generation (el7, el9). Stacks without
    /// an installer script leave this empty.
    #[serde(default)]
    pub url: BTreeMap<String, String>,
    /// Default configuration merged into the app at create time.
    #[serde(default)]
    pub json: Value,
}

static CATALOGUE: OnceLock<Vec<Installer>> = OnceLock::new();
static CATALOGUE_VALUE: OnceLock<Value> = OnceLock::new();

/// Get the installer catalogue (parses the embedded JSON on first access).
pub fn installers() -> &'static [Installer] {
    CATALOGUE.get_or_init(|| {
        serde_json::from_str(CATALOGUE_JSON)
            .unwrap_or_else(|e| panic!("Failed to parse embedded installer JSON: {}", e))
    })
}

/// The catalogue as a raw JSON value, exactly as the `installer_urls` action
/// returns it.
pub fn installers_value() -> &'static Value {
    CATALOGUE_VALUE.get_or_init(|| {
        serde_json::from_str(CATALOGUE_JSON)
            .unwrap_or_else(|e| panic!("Failed to parse embedded installer JSON: {}", e))
    })
}

/// Find an installer by its `selected_type` key.
pub fn get_installer(selected_type: &str) -> Option<&'static Installer> {
    installers().iter().find(|i| i.selected_type == selected_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_loads_successfully() {
        assert!(!installers().is_empty(), "Catalogue should have installers");
    }

    #[test]
    fn test_wordpress_installer_exists() {
        let installer = get_installer("wordpress").expect("WordPress installer should exist");
        assert_eq!(installer.name, "WordPress");
        assert_eq!(installer.app_type, "NPF");
        assert!(installer.url.contains_key("el7"));
        assert!(installer.url.contains_key("el9"));
    }

    #[test]
    fn test_django_has_only_el9_installer() {
        let installer = get_installer("django").unwrap();
        assert_eq!(installer.url.len(), 1);
        assert!(installer.url["el9"].ends_with("el9/django/install.py"));
    }

    #[test]
    fn test_static_only_has_no_installer_script() {
        let installer = get_installer("static_only").unwrap();
        assert!(installer.url.is_empty());
        assert_eq!(installer.app_type, "STA");
    }

    #[test]
    fn test_value_matches_typed_catalogue() {
        let value = installers_value();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), installers().len());
        assert_eq!(entries[0]["selected_type"], "wordpress");
        assert_eq!(entries[0]["json"]["php_version"], 83);
    }

    #[test]
    fn test_unknown_type_is_absent() {
        assert!(get_installer("drupal").is_none());
    }
}
