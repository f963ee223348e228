//! Declarative view tree.
//!
//! Renderers never touch a live display tree. They return a `View`, a plain
//! data description of elements, text and attached actions. The host (the
//! HTML writer, a test, or a browser shim) walks it.
//!
//! Event dispatch mirrors the DOM's bubbling: a click at a node path fires
//! the innermost handler first, then each ancestor's, and every handler is
//! told whether the click landed on its own element or on a descendant.

use crate::messages::Message;
use crate::widgets::{Action, ClickTarget, UiEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    /// Attributes other than `class`, in insertion order.
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<View>,
    pub on_click: Option<Action>,
    pub on_input: Option<Action>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
            on_input: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(View::Text(text.into()))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn on_input(mut self, action: Action) -> Self {
        self.on_input = Some(action);
        self
    }

    /// Opens in a new tab without leaking referrer or opener.
    pub fn external(self) -> Self {
        self.attr("target", "_blank").attr("rel", "noopener noreferrer")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(View::as_element)
    }
}

impl From<Element> for View {
    fn from(el: Element) -> Self {
        View::Element(el)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::Text(text.to_string())
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

impl View {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            View::Element(el) => Some(el),
            View::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Text(t) => out.push_str(t),
            View::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every element (depth-first, document order) matching `pred`.
    pub fn find_all<'a>(&'a self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if pred(el) {
                out.push(el);
            }
        });
        out
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|el| el.has_class(class))
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        if let View::Element(el) = self {
            f(el);
            for child in &el.children {
                child.walk(f);
            }
        }
    }

    /// Child-index path to the first element matching `pred`.
    pub fn path_to(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<Vec<usize>> {
        let el = self.as_element()?;
        if pred(el) {
            return Some(Vec::new());
        }
        el.children.iter().enumerate().find_map(|(i, child)| {
            child.path_to(pred).map(|mut rest| {
                rest.insert(0, i);
                rest
            })
        })
    }

    /// Elements from the root down to the node at `path`. Stops early on a
    /// bad index or a text node.
    fn chain(&self, path: &[usize]) -> Vec<&Element> {
        let mut chain = Vec::new();
        let mut node = self;
        let mut rest = path;
        while let View::Element(el) = node {
            chain.push(el);
            let Some((&i, tail)) = rest.split_first() else {
                break;
            };
            match el.children.get(i) {
                Some(next) => {
                    node = next;
                    rest = tail;
                }
                None => break,
            }
        }
        chain
    }

    /// Click the node at `path`; returns the messages of every handler that
    /// fires, innermost first.
    pub fn click(&self, path: &[usize]) -> Vec<Message> {
        let chain = self.chain(path);
        if chain.len() != path.len() + 1 {
            return Vec::new();
        }
        let target_depth = chain.len() - 1;
        chain
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(depth, el)| {
                let target = if depth == target_depth {
                    ClickTarget::Direct
                } else {
                    ClickTarget::Bubbled
                };
                el.on_click
                    .as_ref()
                    .and_then(|action| action.to_message(&UiEvent::Click(target)))
            })
            .collect()
    }

    /// Type into the node at `path`; only the target's own input handler fires.
    pub fn input(&self, path: &[usize], value: &str) -> Option<Message> {
        let chain = self.chain(path);
        if chain.len() != path.len() + 1 {
            return None;
        }
        chain
            .last()?
            .on_input
            .as_ref()?
            .to_message(&UiEvent::Input(value.to_string()))
    }
}
