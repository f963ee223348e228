//! Page view: controls, status line, card region and open overlays.

use crate::app::{App, AppState};
use crate::view::{Element, View};
use crate::widgets::button::search_box;
use crate::widgets::card::samples_view;

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub controls: View,
    pub status: View,
    pub cards: View,
    /// One view per open lightbox, oldest first.
    pub overlays: Vec<View>,
}

impl PageView {
    /// The whole page as a single tree, so clicks can be routed by path.
    pub fn root(&self) -> View {
        Element::new("div")
            .attr("id", "app")
            .child(self.controls.clone())
            .child(self.status.clone())
            .child(self.cards.clone())
            .children(self.overlays.iter().cloned())
            .into()
    }
}

pub fn view(app: &App) -> PageView {
    let controls = Element::new("div")
        .class("controls")
        .child(search_box(&app.search_input))
        .child(app.frameworks.view())
        .child(app.versions.view())
        .into();

    let status = Element::new("div")
        .attr("id", "search-results")
        .text(app.status.to_string())
        .into();

    let cards = match &app.state {
        AppState::Loading => Element::new("div").attr("id", "samples-container").into(),
        AppState::Failed(message) => Element::new("div")
            .attr("id", "samples-container")
            .child(Element::new("p").class("load-error").text(message.clone()))
            .into(),
        AppState::Ready => samples_view(&app.visible_samples(), &app.config.assets_dir),
    };

    PageView {
        controls,
        status,
        cards,
        overlays: app.overlays.views(),
    }
}
