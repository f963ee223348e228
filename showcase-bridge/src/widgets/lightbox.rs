//! Screenshot lightbox.
//!
//! Opening a lightbox registers one document-level key listener. The
//! registration is held by a `KeyListenerGuard` stored next to the overlay,
//! so removing the overlay (by any path) drops the guard and deregisters
//! the listener. No open/close cycle can leave a listener behind.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::keyboard::Key;
use crate::view::{Element, View};

use super::{Action, WidgetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    pub id: WidgetId,
    pub image_src: String,
    pub title: String,
}

impl Lightbox {
    pub fn new(image_src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(),
            image_src: image_src.into(),
            title: title.into(),
        }
    }

    /// Full-viewport backdrop holding the enlarged image, a caption and a
    /// close control. The backdrop handler sees every click inside the
    /// overlay; only clicks that land on the backdrop itself dismiss.
    pub fn view(&self) -> View {
        let content = Element::new("div")
            .class("lightbox-content")
            .child(
                Element::new("span")
                    .class("lightbox-close")
                    .text("×")
                    .on_click(Action::CloseLightbox(self.id)),
            )
            .child(
                Element::new("img")
                    .attr("src", self.image_src.clone())
                    .attr("alt", self.title.clone()),
            )
            .child(Element::new("div").class("lightbox-title").text(self.title.clone()));

        Element::new("div")
            .class("lightbox")
            .attr("data-lightbox", self.id.to_string())
            .child(content)
            .on_click(Action::LightboxClicked(self.id))
            .into()
    }
}

/// How an overlay was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    Backdrop,
    Escape,
}

// ────────────────────────────────────────────────────────────────
// Key listeners
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: BTreeMap<u64, WidgetId>,
}

/// The document's keydown listener table. Cheap to clone; clones share it.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener on behalf of `owner`. It stays installed exactly as
    /// long as the returned guard lives.
    pub fn register(&self, owner: WidgetId) -> KeyListenerGuard {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.live.insert(id, owner);
        KeyListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// Owners whose listener reacts to `key`, in registration order.
    pub fn dispatch(&self, key: &Key) -> Vec<WidgetId> {
        if !key.is_cancel() {
            return Vec::new();
        }
        self.inner.borrow().live.values().copied().collect()
    }
}

#[derive(Debug)]
pub struct KeyListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().live.remove(&self.id);
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Overlays
// ────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct OpenOverlay {
    lightbox: Lightbox,
    _listener: KeyListenerGuard,
}

/// Open lightboxes, oldest first. Every click on a thumbnail opens a new
/// overlay; nothing is deduplicated.
#[derive(Debug, Default)]
pub struct Overlays {
    open: Vec<OpenOverlay>,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, lightbox: Lightbox, listeners: &KeyListeners) -> WidgetId {
        let id = lightbox.id;
        info!("Lightbox opened: {}", lightbox.image_src);
        let guard = listeners.register(id);
        self.open.push(OpenOverlay {
            lightbox,
            _listener: guard,
        });
        id
    }

    /// Remove the overlay and its key listener. False if `id` isn't open.
    pub fn dismiss(&mut self, id: WidgetId, how: Dismissal) -> bool {
        match self.open.iter().position(|o| o.lightbox.id == id) {
            Some(pos) => {
                self.open.remove(pos);
                debug!("Lightbox {} dismissed via {:?}", id, how);
                true
            }
            None => false,
        }
    }

    /// Deliver a key to every live listener. Returns how many overlays closed.
    pub fn handle_key(&mut self, key: &Key, listeners: &KeyListeners) -> usize {
        listeners
            .dispatch(key)
            .into_iter()
            .filter(|id| self.dismiss(*id, Dismissal::Escape))
            .count()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lightbox> {
        self.open.iter().map(|o| &o.lightbox)
    }

    pub fn views(&self) -> Vec<View> {
        self.iter().map(Lightbox::view).collect()
    }
}
