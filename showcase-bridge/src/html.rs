//! Static HTML output.
//!
//! `View` implements `maud::Render`, so a tree drops straight into an
//! `html!` template. Text and attribute values are escaped; actions are not
//! serialised (a static page has no handlers).

use std::fmt::Write;

use maud::{DOCTYPE, Escaper, Markup, PreEscaped, Render, html};

use crate::view::{Element, View};
use crate::view_ui::PageView;

/// Card entrance animation, staggered per card through `animation-delay`.
pub const ANIMATION_CSS: &str = r#"
    .sample-card {
        animation: fadeInUp 0.6s ease-out forwards;
        opacity: 0;
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
"#;

const VOID_ELEMENTS: &[&str] = &["img", "input", "meta", "br", "hr", "link"];

impl Render for View {
    fn render_to(&self, buffer: &mut String) {
        match self {
            View::Text(text) => escape_into(buffer, text),
            View::Element(el) => render_element(el, buffer),
        }
    }
}

fn escape_into(buffer: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = Escaper::new(buffer).write_str(text);
}

fn render_element(el: &Element, buffer: &mut String) {
    buffer.push('<');
    buffer.push_str(el.tag);

    if !el.classes.is_empty() {
        buffer.push_str(" class=\"");
        escape_into(buffer, &el.classes.join(" "));
        buffer.push('"');
    }
    for (name, value) in &el.attrs {
        buffer.push(' ');
        buffer.push_str(name);
        buffer.push_str("=\"");
        escape_into(buffer, value);
        buffer.push('"');
    }
    buffer.push('>');

    if VOID_ELEMENTS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        child.render_to(buffer);
    }

    buffer.push_str("</");
    buffer.push_str(el.tag);
    buffer.push('>');
}

pub fn render_view(view: &View) -> String {
    view.render().into_string()
}

pub fn page_markup(page: &PageView, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(ANIMATION_CSS)) }
            }
            body {
                h1 { (title) }
                (page.root())
            }
        }
    }
}

pub fn render_page(page: &PageView, title: &str) -> String {
    page_markup(page, title).into_string()
}
