//! Filter engine.
//!
//! Three independent predicates ANDed together:
//! - framework: the sample lists the selected technology (exact, case-sensitive)
//! - version:   the sample's platform equals the selected platform
//! - search:    title or any technology contains the query (case-insensitive)
//!
//! The engine is pure; callers own the `FilterState` and pass it in.

use std::fmt;

use crate::catalog::{Catalog, Sample};

/// Control value that disables an axis.
pub const ALL: &str = "all";

/// Single-select value of one filter axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a control's data-attribute value; `"all"` is the sentinel.
    pub fn from_control(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The control value this selection corresponds to.
    pub fn as_control(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(v) => v,
        }
    }
}

/// Lowercase then trim, the way the search box is read.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub framework: Selection,
    pub version: Selection,
    /// Normalised search text; see [`normalize_query`].
    search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search = normalize_query(raw);
    }

    pub fn with_framework(mut self, value: &str) -> Self {
        self.framework = Selection::from_control(value);
        self
    }

    pub fn with_version(mut self, value: &str) -> Self {
        self.version = Selection::from_control(value);
        self
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search(raw);
        self
    }

    /// Empty search and both axes at "all".
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.framework.is_all() && self.version.is_all()
    }

    pub fn matches_framework(&self, sample: &Sample) -> bool {
        match &self.framework {
            Selection::All => true,
            Selection::Only(tag) => sample.has_technology(tag),
        }
    }

    pub fn matches_version(&self, sample: &Sample) -> bool {
        match &self.version {
            Selection::All => true,
            Selection::Only(platform) => sample.platform == *platform,
        }
    }

    pub fn matches_search(&self, sample: &Sample) -> bool {
        if self.search.is_empty() {
            return true;
        }
        sample.title.to_lowercase().contains(&self.search)
            || sample
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&self.search))
    }

    pub fn matches(&self, sample: &Sample) -> bool {
        self.matches_framework(sample) && self.matches_version(sample) && self.matches_search(sample)
    }
}

/// Catalog positions of the samples passing every predicate, ascending.
pub fn filter_indices(catalog: &Catalog, state: &FilterState) -> Vec<usize> {
    let out: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, s)| state.matches(s))
        .map(|(i, _)| i)
        .collect();
    tracing::debug!(
        "filter: framework={} version={} search={:?} -> {}/{}",
        state.framework.as_control(),
        state.version.as_control(),
        state.search,
        out.len(),
        catalog.len()
    );
    out
}

/// Samples passing every predicate, in catalog order.
pub fn filter_samples<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Sample> {
    let samples = catalog.samples();
    filter_indices(catalog, state)
        .into_iter()
        .map(|i| &samples[i])
        .collect()
}

/// The small result line under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    /// Nothing is being filtered.
    #[default]
    Hidden,
    Found(usize),
    NoResults,
}

impl StatusLine {
    pub fn for_result(count: usize, state: &FilterState) -> Self {
        if state.is_default() {
            StatusLine::Hidden
        } else if count > 0 {
            StatusLine::Found(count)
        } else {
            StatusLine::NoResults
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Hidden => Ok(()),
            StatusLine::Found(0) | StatusLine::NoResults => f.write_str("No samples found"),
            StatusLine::Found(1) => f.write_str("Found 1 sample"),
            StatusLine::Found(n) => write!(f, "Found {} samples", n),
        }
    }
}
