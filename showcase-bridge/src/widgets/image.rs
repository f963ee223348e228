//! Image widgets: platform badge and screenshot gallery.

use showcase_core::Sample;
use showcase_core::config::asset_path;

use crate::view::{Element, View};

use super::Action;

/// `<assets>/<platform>.png`, top-right of the card.
pub fn platform_badge(platform: &str, assets_dir: &str) -> View {
    Element::new("img")
        .class("platform-badge")
        .attr("src", asset_path(assets_dir, &format!("{}.png", platform)))
        .attr("alt", platform)
        .into()
}

/// One lazily loaded thumbnail per screenshot; clicking opens the lightbox.
/// `None` when the sample has no screenshots.
pub fn screenshot_gallery(sample: &Sample, assets_dir: &str) -> Option<View> {
    if sample.screenshots.is_empty() {
        return None;
    }

    let items = sample.screenshots.iter().enumerate().map(|(idx, file)| {
        let src = asset_path(assets_dir, file);
        let img = Element::new("img")
            .attr("src", src.clone())
            .attr("alt", format!("{} screenshot {}", sample.title, idx + 1))
            .attr("loading", "lazy")
            .on_click(Action::OpenLightbox {
                src,
                title: sample.title.clone(),
            });
        Element::new("div").class("screenshot-item").child(img)
    });

    Some(
        Element::new("div")
            .class("screenshot-gallery")
            .children(items)
            .into(),
    )
}
