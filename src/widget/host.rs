//! Capability trait the embedding page implements
//!
//! The widget never touches browser globals directly; the page's navigation
//! context and menu bar are reached through this seam, so the rest of the
//! crate runs unchanged under a test double.

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::widget::select::SelectControl;

/// Handler invoked with the newly chosen version identifier
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Trait for the host page embedding the widget
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait HostPage: Send + Sync {
    /// Resolves once the page structure is available for mutation.
    ///
    /// One-shot ready signal: resolves immediately when the page has already
    /// finished structural parsing.
    async fn ready(&self);

    /// Current navigation path of the page (e.g. `/v2.0/intro.html`)
    fn current_path(&self) -> String;

    /// Navigate the page to a new path (full page load)
    fn navigate(&self, path: &str);

    /// Append the control as the last child of the element matching
    /// `menu_bar_selector` and attach the change handler.
    ///
    /// Returns `false` when no such element exists; the control is then
    /// discarded without error.
    fn install_control(
        &self,
        menu_bar_selector: &str,
        control: SelectControl,
        on_change: ChangeHandler,
    ) -> bool;
}
