//! Showcase Bridge library target.
//!
//! The view layer of the Showcase page. The binary entry point is in
//! `main.rs`; everything it drives lives here so `tests/*.rs` can reach it.

pub mod app;
pub mod html;
pub mod keyboard;
pub mod messages;
pub mod update;
pub mod view;
pub mod view_ui;
pub mod widgets;

pub use app::{App, AppState};
pub use messages::Message;
pub use update::update;
pub use view::{Element, View};
pub use view_ui::{PageView, view};
