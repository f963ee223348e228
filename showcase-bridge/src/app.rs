//! Application state.
//!
//! One `App` owns everything the page session needs: the catalog, the
//! filter state, the filter controls and the open overlays. Handlers get it
//! by `&mut` (see `update`), so there is no module-level mutable state.

use showcase_core::filter::{FilterState, StatusLine, filter_indices};
use showcase_core::{Catalog, Sample, ShowcaseConfig};

use crate::view::{Element, View};
use crate::widgets::button::{FilterAxis, FilterGroup};
use crate::widgets::lightbox::{KeyListeners, Overlays};

// ────────────────────────────────────────────────────────────────
// App State
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Loading,
    Ready,
    /// The user-facing load failure message.
    Failed(String),
}

// ────────────────────────────────────────────────────────────────
// App
// ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct App {
    pub config: ShowcaseConfig,
    pub state: AppState,
    pub catalog: Catalog,
    pub filters: FilterState,
    /// Search box contents as typed.
    pub search_input: String,
    pub frameworks: FilterGroup,
    pub versions: FilterGroup,
    pub overlays: Overlays,
    pub key_listeners: KeyListeners,
    pub status: StatusLine,
    /// Catalog indices currently displayed, in catalog order.
    pub visible: Vec<usize>,
    wired: bool,
}

impl App {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self {
            config,
            state: AppState::Loading,
            catalog: Catalog::default(),
            filters: FilterState::new(),
            search_input: String::new(),
            frameworks: FilterGroup::new(FilterAxis::Framework, Vec::<String>::new()),
            versions: FilterGroup::new(FilterAxis::Version, Vec::<String>::new()),
            overlays: Overlays::new(),
            key_listeners: KeyListeners::new(),
            status: StatusLine::Hidden,
            visible: Vec::new(),
            wired: false,
        }
    }

    pub fn is_wired(&self) -> bool {
        self.wired
    }

    pub fn visible_samples(&self) -> Vec<&Sample> {
        self.visible
            .iter()
            .filter_map(|&i| self.catalog.samples().get(i))
            .collect()
    }

    /// Re-run the filter engine and refresh the status line.
    pub fn refresh(&mut self) {
        self.visible = filter_indices(&self.catalog, &self.filters);
        self.status = StatusLine::for_result(self.visible.len(), &self.filters);
    }

    /// Build the filter controls markup from config (or, when the config
    /// leaves a group empty, from the catalog's own tags), then discover the
    /// buttons by their data attributes. Runs once per session.
    pub(crate) fn wire(&mut self) {
        if self.wired {
            return;
        }

        let frameworks: Vec<String> = if self.config.frameworks.is_empty() {
            self.catalog.technologies().into_iter().map(String::from).collect()
        } else {
            self.config.frameworks.clone()
        };
        let versions: Vec<String> = if self.config.versions.is_empty() {
            self.catalog.platforms().into_iter().map(String::from).collect()
        } else {
            self.config.versions.clone()
        };

        let markup: View = Element::new("div")
            .child(FilterGroup::new(FilterAxis::Framework, frameworks).view())
            .child(FilterGroup::new(FilterAxis::Version, versions).view())
            .into();

        self.frameworks = FilterGroup::discover(&markup, FilterAxis::Framework);
        self.versions = FilterGroup::discover(&markup, FilterAxis::Version);
        self.wired = true;

        tracing::info!(
            "Wired {} framework and {} version filters",
            self.frameworks.buttons.len(),
            self.versions.buttons.len()
        );
    }
}
