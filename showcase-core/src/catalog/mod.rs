//! Catalog of samples.
//!
//! The catalog is loaded wholesale from a `{ "samples": [...] }` document and
//! is never mutated afterwards. The UI only ever reads it through filtered
//! views (see `crate::filter`).

pub mod model;

pub use model::{LinkKind, Links, Sample, Special};

use serde::{Deserialize, Serialize};

/// On-disk document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    samples: Vec<Sample>,
}

impl Catalog {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let doc: CatalogDocument = serde_json::from_slice(bytes)?;
        Ok(Self::new(doc.samples))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct technology tags, first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        distinct(self.samples.iter().flat_map(|s| s.technologies.iter()))
    }

    /// Distinct platform tags, first-seen order.
    pub fn platforms(&self) -> Vec<&str> {
        distinct(self.samples.iter().map(|s| &s.platform))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v.as_str()) {
            out.push(v);
        }
    }
    out
}
