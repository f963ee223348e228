//! Filter buttons.
//!
//! Each axis is a group of buttons carrying the selected value in a data
//! attribute (`data-filter` for frameworks, `data-version` for platforms).
//! Exactly one button per group is active.

use showcase_core::filter::ALL;

use crate::view::{Element, View};

use super::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    Framework,
    Version,
}

impl FilterAxis {
    /// The data attribute that identifies this axis's buttons.
    pub fn data_attr(self) -> &'static str {
        match self {
            FilterAxis::Framework => "data-filter",
            FilterAxis::Version => "data-version",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterAxis::Framework => "Framework",
            FilterAxis::Version => "Version",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub value: String,
    pub active: bool,
}

impl FilterButton {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            active: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.value == ALL { "All" } else { &self.value }
    }

    pub fn view(&self, axis: FilterAxis) -> View {
        let mut el = Element::new("button")
            .class("filter-btn")
            .attr(axis.data_attr(), self.value.clone())
            .text(self.label())
            .on_click(Action::SelectFilter {
                axis,
                value: self.value.clone(),
            });
        if self.active {
            el = el.class("active");
        }
        el.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub axis: FilterAxis,
    pub buttons: Vec<FilterButton>,
}

impl FilterGroup {
    /// An `all` button (active) followed by one button per value.
    pub fn new<I, S>(axis: FilterAxis, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buttons = vec![FilterButton {
            value: ALL.to_string(),
            active: true,
        }];
        for value in values {
            let value = value.into();
            if !buttons.iter().any(|b| b.value == value) {
                buttons.push(FilterButton::new(value));
            }
        }
        Self { axis, buttons }
    }

    /// Collect every element carrying this axis's data attribute, in
    /// document order. The first button already marked active stays active;
    /// if none is, the `all` button (or the first button) becomes active.
    pub fn discover(page: &View, axis: FilterAxis) -> Self {
        let attr = axis.data_attr();
        let mut buttons: Vec<FilterButton> = page
            .find_all(|el| el.get_attr(attr).is_some())
            .into_iter()
            .filter_map(|el| {
                el.get_attr(attr).map(|value| FilterButton {
                    value: value.to_string(),
                    active: el.has_class("active"),
                })
            })
            .collect();

        let mut seen_active = false;
        for b in buttons.iter_mut() {
            if b.active && seen_active {
                b.active = false;
            }
            seen_active |= b.active;
        }
        if !seen_active {
            let fallback = buttons
                .iter()
                .position(|b| b.value == ALL)
                .unwrap_or(0);
            if let Some(b) = buttons.get_mut(fallback) {
                b.active = true;
            }
        }

        Self { axis, buttons }
    }

    /// Clear every button, then activate `value`. Returns false (and leaves
    /// the group untouched) when no button carries `value`.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.buttons.iter().any(|b| b.value == value) {
            return false;
        }
        for b in self.buttons.iter_mut() {
            b.active = false;
        }
        for b in self.buttons.iter_mut() {
            if b.value == value {
                b.active = true;
                break;
            }
        }
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.value.as_str())
    }

    pub fn active_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.active).count()
    }

    pub fn view(&self) -> View {
        let class = match self.axis {
            FilterAxis::Framework => "framework-filters",
            FilterAxis::Version => "version-filters",
        };
        Element::new("div")
            .class("filter-group")
            .class(class)
            .child(Element::new("span").class("filter-label").text(self.axis.label()))
            .children(self.buttons.iter().map(|b| b.view(self.axis)))
            .into()
    }
}

/// The search box; every keystroke fires `EditSearch`.
pub fn search_box(value: &str) -> View {
    Element::new("input")
        .attr("id", "search-input")
        .attr("type", "search")
        .attr("placeholder", "Search samples...")
        .attr("value", value)
        .on_input(Action::EditSearch)
        .into()
}
