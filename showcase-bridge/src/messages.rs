//! Message enum.

use showcase_core::{Catalog, LoadError};

use crate::keyboard::Key;
use crate::widgets::{ClickTarget, WidgetId};

// ────────────────────────────────────────────────────────────────
// Message enum
// ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum Message {
    /// The one-shot catalog fetch finished.
    CatalogLoaded(Result<Catalog, LoadError>),

    FrameworkSelected(String),
    VersionSelected(String),
    /// Raw search box contents; normalised by the filter state.
    SearchChanged(String),

    OpenLightbox { src: String, title: String },
    LightboxClicked(WidgetId, ClickTarget),
    CloseLightbox(WidgetId),

    /// Document-level keydown.
    KeyPressed(Key),
}
