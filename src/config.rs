use serde::Deserialize;

// =============================================================================
// Well-known page constants
// =============================================================================

/// Root-relative path of the version manifest on the documentation host
pub const VERSIONS_ENDPOINT: &str = "/versions.json";

/// Stable, page-unique id of the selection control
pub const CONTROL_ID: &str = "version-selector";

/// Class of the container element wrapping the label and the control
pub const CONTAINER_CLASS: &str = "version-select";

/// Label text rendered before the control
pub const CONTROL_LABEL: &str = "Version: ";

/// Selector of the menu-bar region the control is appended to
pub const MENU_BAR_SELECTOR: &str = ".left-buttons";

/// Widget configuration
///
/// The defaults reproduce the stock mdBook theme layout; hosts embedding the
/// widget elsewhere can override the endpoint or the element identities.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Path the version manifest is fetched from
    pub endpoint: String,
    /// Id assigned to the selection control
    pub control_id: String,
    /// Class assigned to the wrapping container
    pub container_class: String,
    /// Label text rendered before the control
    pub label: String,
    /// Selector of the menu-bar container
    pub menu_bar_selector: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: VERSIONS_ENDPOINT.to_string(),
            control_id: CONTROL_ID.to_string(),
            container_class: CONTAINER_CLASS.to_string(),
            label: CONTROL_LABEL.to_string(),
            menu_bar_selector: MENU_BAR_SELECTOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widget_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<WidgetConfig>(json!({
            "endpoint": "/docs/versions.json"
        }))
        .unwrap();

        assert_eq!(result.endpoint, "/docs/versions.json");
        assert_eq!(result.control_id, CONTROL_ID);
        assert_eq!(result.menu_bar_selector, MENU_BAR_SELECTOR);
    }

    #[test]
    fn widget_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<WidgetConfig>(json!({
            "endpoint": "/releases.json",
            "controlId": "release-selector",
            "containerClass": "release-select",
            "label": "Release: ",
            "menuBarSelector": ".right-buttons"
        }))
        .unwrap();

        assert_eq!(
            result,
            WidgetConfig {
                endpoint: "/releases.json".to_string(),
                control_id: "release-selector".to_string(),
                container_class: "release-select".to_string(),
                label: "Release: ".to_string(),
                menu_bar_selector: ".right-buttons".to_string(),
            }
        );
    }

    #[test]
    fn widget_config_default_matches_stock_theme() {
        let config = WidgetConfig::default();

        assert_eq!(config.endpoint, "/versions.json");
        assert_eq!(config.control_id, "version-selector");
        assert_eq!(config.container_class, "version-select");
        assert_eq!(config.label, "Version: ");
        assert_eq!(config.menu_bar_selector, ".left-buttons");
    }
}
