//! Selection-control construction
//!
//! Builds the dropdown rendered into the menu bar: a labeled select with one
//! option per published version, the currently viewed version pre-selected.
//! Pure data; the host page turns it into real elements.

use crate::config::WidgetConfig;
use crate::version::manifest::VersionManifest;

/// One entry of the selection control; the value doubles as the visible label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// The version dropdown: a labeled select wrapped in a container element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    /// Page-unique id of the select element
    pub id: String,
    /// Class of the wrapping container
    pub container_class: String,
    /// Label text rendered before the select
    pub label: String,
    /// Options in manifest order
    pub options: Vec<SelectOption>,
}

impl SelectControl {
    /// Build the control from the published manifest.
    ///
    /// Options keep the manifest's order. The option equal to
    /// `current_version` is marked selected; when none matches, every flag
    /// stays false and the host control's first-option default applies.
    pub fn build(
        config: &WidgetConfig,
        manifest: &VersionManifest,
        current_version: &str,
    ) -> Self {
        let options = manifest
            .versions
            .iter()
            .map(|v| SelectOption {
                value: v.clone(),
                selected: v.as_str() == current_version,
            })
            .collect();

        Self {
            id: config.control_id.clone(),
            container_class: config.container_class.clone(),
            label: config.label.clone(),
            options,
        }
    }

    /// The pre-selected version, if any option matched the current one
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(versions: &[&str]) -> VersionManifest {
        VersionManifest::new(versions.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn build_creates_one_option_per_version_with_current_selected() {
        let control = SelectControl::build(
            &WidgetConfig::default(),
            &manifest(&["latest", "v2.0", "v1.0"]),
            "v2.0",
        );

        assert_eq!(control.options.len(), 3);
        assert_eq!(control.selected_value(), Some("v2.0"));
        assert_eq!(
            control.options.iter().map(|o| o.value.as_str()).collect::<Vec<_>>(),
            vec!["latest", "v2.0", "v1.0"]
        );
    }

    #[test]
    fn build_selects_nothing_when_current_version_is_not_listed() {
        let control = SelectControl::build(
            &WidgetConfig::default(),
            &manifest(&["v2.0", "v1.0"]),
            "v9.9",
        );

        assert_eq!(control.options.len(), 2);
        assert_eq!(control.selected_value(), None);
    }

    #[test]
    fn build_uses_configured_element_identities() {
        let control = SelectControl::build(
            &WidgetConfig::default(),
            &manifest(&["latest"]),
            "latest",
        );

        assert_eq!(control.id, "version-selector");
        assert_eq!(control.container_class, "version-select");
        assert_eq!(control.label, "Version: ");
    }

    #[test]
    fn build_keeps_duplicate_manifest_entries_verbatim() {
        // The manifest is trusted as-is; both duplicates become options
        let control = SelectControl::build(
            &WidgetConfig::default(),
            &manifest(&["v1.0", "v1.0"]),
            "v1.0",
        );

        assert_eq!(control.options.len(), 2);
    }
}
