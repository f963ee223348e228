//! Widget primitives for the Showcase page.
//!
//! Every widget is a function (or a small struct with a `view()` method)
//! that takes data and returns a `View`. Interaction is expressed as an
//! `Action` attached to a node; the app turns actions into `Message`s.

pub mod button;
pub mod card;
pub mod image;
pub mod lightbox;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::messages::Message;
use button::FilterAxis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a click landed relative to the element whose handler is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// On the element itself.
    Direct,
    /// On a descendant; the event bubbled up.
    Bubbled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Click(ClickTarget),
    Input(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A filter button (`data-filter` / `data-version`) was pressed.
    SelectFilter { axis: FilterAxis, value: String },
    /// The search box changed; the value comes from the input event.
    EditSearch,
    /// A gallery thumbnail was clicked.
    OpenLightbox { src: String, title: String },
    /// The lightbox's close control.
    CloseLightbox(WidgetId),
    /// Any click inside a lightbox overlay, including its content.
    LightboxClicked(WidgetId),
}

impl Action {
    /// `None` when the event kind doesn't fit the action.
    pub fn to_message(&self, event: &UiEvent) -> Option<Message> {
        match (self, event) {
            (Action::SelectFilter { axis, value }, UiEvent::Click(_)) => Some(match axis {
                FilterAxis::Framework => Message::FrameworkSelected(value.clone()),
                FilterAxis::Version => Message::VersionSelected(value.clone()),
            }),
            (Action::EditSearch, UiEvent::Input(value)) => {
                Some(Message::SearchChanged(value.clone()))
            }
            (Action::OpenLightbox { src, title }, UiEvent::Click(_)) => {
                Some(Message::OpenLightbox {
                    src: src.clone(),
                    title: title.clone(),
                })
            }
            (Action::CloseLightbox(id), UiEvent::Click(_)) => Some(Message::CloseLightbox(*id)),
            (Action::LightboxClicked(id), UiEvent::Click(target)) => {
                Some(Message::LightboxClicked(*id, *target))
            }
            _ => None,
        }
    }
}
