//! Sample cards.
//!
//! `card_view` is a pure mapping from one sample to its card. Optional
//! sections (specials, gallery, individual links) are simply left out when
//! their data is missing or empty.

use showcase_core::Sample;
use showcase_core::catalog::Special;

use crate::view::{Element, View};

use super::image::{platform_badge, screenshot_gallery};

pub const EMPTY_STATE_MESSAGE: &str = "No samples found matching your search.";

/// Entrance animation stagger per card.
pub const STAGGER_MS: usize = 100;

pub fn card_view(sample: &Sample, index: usize, assets_dir: &str) -> View {
    let mut card = Element::new("div")
        .class("sample-card")
        .attr("style", format!("animation-delay: {}ms", index * STAGGER_MS))
        .child(platform_badge(&sample.platform, assets_dir))
        .child(Element::new("h2").text(sample.title.clone()))
        .child(technologies(sample));

    if let Some(specials) = specials_section(&sample.specials) {
        card = card.child(specials);
    }
    if let Some(gallery) = screenshot_gallery(sample, assets_dir) {
        card = card.child(gallery);
    }

    card.child(links_row(sample)).into()
}

fn technologies(sample: &Sample) -> Element {
    Element::new("div").class("technologies").children(
        sample
            .technologies
            .iter()
            .map(|tech| Element::new("span").class("tech-tag").text(tech.clone())),
    )
}

fn specials_section(specials: &[Special]) -> Option<Element> {
    if specials.is_empty() {
        return None;
    }

    let items = specials.iter().map(|special| {
        let inner = match &special.link {
            Some(link) => Element::new("a")
                .class("special-link")
                .attr("href", link.clone())
                .external()
                .text(special.title.clone()),
            None => Element::new("span")
                .class("special-text")
                .text(special.title.clone()),
        };
        Element::new("div").class("special-item").child(inner)
    });

    Some(
        Element::new("div")
            .class("specials-container")
            .child(Element::new("h3").class("specials-title").text("✨ Specials"))
            .child(Element::new("div").class("specials-list").children(items)),
    )
}

fn links_row(sample: &Sample) -> Element {
    Element::new("div")
        .class("links")
        .children(sample.links.iter().map(|(kind, url)| {
            Element::new("a")
                .class("link-btn")
                .class(kind.key())
                .attr("href", url)
                .external()
                .text(kind.label())
        }))
}

/// The card region. An empty result shows the empty-state message instead
/// of zero cards.
pub fn samples_view(samples: &[&Sample], assets_dir: &str) -> View {
    let container = Element::new("div").attr("id", "samples-container");

    if samples.is_empty() {
        return container
            .child(Element::new("p").class("empty-state").text(EMPTY_STATE_MESSAGE))
            .into();
    }

    container
        .children(
            samples
                .iter()
                .enumerate()
                .map(|(index, sample)| card_view(sample, index, assets_dir)),
        )
        .into()
}
