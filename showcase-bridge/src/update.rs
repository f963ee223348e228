//! Update logic, the central message handler.
//!
//! Every handler runs synchronously to completion against `&mut App`.
//! Filter and search messages re-run the filter engine immediately; there
//! is no debounce.

use showcase_core::filter::Selection;
use tracing::{error, info, warn};

use crate::app::{App, AppState};
use crate::messages::Message;
use crate::widgets::ClickTarget;
use crate::widgets::button::FilterAxis;
use crate::widgets::lightbox::{Dismissal, Lightbox};

pub fn update(app: &mut App, message: Message) {
    match message {
        // ────────────────────────────────────────────────────
        // Catalog lifecycle
        // ────────────────────────────────────────────────────

        Message::CatalogLoaded(result) => {
            if app.state != AppState::Loading {
                warn!("Catalog already loaded; ignoring second load");
                return;
            }
            match result {
                Ok(catalog) => {
                    info!("Catalog ready: {} samples", catalog.len());
                    app.catalog = catalog;
                    app.state = AppState::Ready;
                    app.refresh();
                    app.wire();
                }
                Err(e) => {
                    error!("Error loading data: {}", e);
                    app.state = AppState::Failed(e.user_message().to_string());
                }
            }
        }

        // ────────────────────────────────────────────────────
        // Filters
        // ────────────────────────────────────────────────────

        Message::FrameworkSelected(value) => {
            if select(app, FilterAxis::Framework, &value) {
                app.filters.framework = Selection::from_control(&value);
                app.refresh();
            }
        }

        Message::VersionSelected(value) => {
            if select(app, FilterAxis::Version, &value) {
                app.filters.version = Selection::from_control(&value);
                app.refresh();
            }
        }

        Message::SearchChanged(raw) => {
            if !app.is_wired() {
                warn!("Search input before wiring; ignored");
                return;
            }
            app.filters.set_search(&raw);
            app.search_input = raw;
            app.refresh();
        }

        // ────────────────────────────────────────────────────
        // Lightbox
        // ────────────────────────────────────────────────────

        Message::OpenLightbox { src, title } => {
            app.overlays.open(Lightbox::new(src, title), &app.key_listeners);
        }

        Message::CloseLightbox(id) => {
            app.overlays.dismiss(id, Dismissal::CloseButton);
        }

        Message::LightboxClicked(id, target) => {
            // Clicks on the enlarged content bubble up here too.
            if target == ClickTarget::Direct {
                app.overlays.dismiss(id, Dismissal::Backdrop);
            }
        }

        Message::KeyPressed(key) => {
            app.overlays.handle_key(&key, &app.key_listeners);
        }
    }
}

/// Mark `value` active in the chosen group. False when the app isn't wired
/// yet or no button carries `value`.
fn select(app: &mut App, axis: FilterAxis, value: &str) -> bool {
    if !app.is_wired() {
        warn!("Filter click before wiring; ignored");
        return false;
    }
    let group = match axis {
        FilterAxis::Framework => &mut app.frameworks,
        FilterAxis::Version => &mut app.versions,
    };
    if !group.select(value) {
        warn!("No {:?} filter button for {:?}", axis, value);
        return false;
    }
    true
}
