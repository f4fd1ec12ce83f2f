// src/sync/dom.rs
//! Headless stand-in for the page: elements keyed by id, holding only the
//! presentation facets the sync code actually touches. Rendering is the sole
//! writer of these facets, so widget behavior is testable without a browser.

use std::collections::HashMap;

use dashmap::DashMap;
use parking_lot::Mutex;

/// CSS `display` values the widgets switch between. `None` in the
/// `Option<Display>` sense means "stylesheet default, untouched".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Hidden,
    Block,
    Flex,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    /// innerText
    pub text: String,
    /// innerHTML (markup content, e.g. glyph + label)
    pub html: String,
    pub color: Option<String>,
    pub background: Option<String>,
    pub display: Option<Display>,
    pub classes: Vec<String>,
    pub dataset: HashMap<String, String>,
    /// Structured child rows; only the player list container uses these.
    pub children: Vec<Element>,
}

impl Element {
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn is_visible(&self) -> bool {
        self.display != Some(Display::Hidden)
    }
}

/// The shared mutable surface of the page. All pollers and event handlers
/// write through here; ids absent from the current page are silent no-ops.
#[derive(Default)]
pub struct Document {
    elements: DashMap<String, Element>,
    alerts: Mutex<Vec<String>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    /// Registers an empty element under `id`, like static markup would.
    pub fn create(&self, id: &str) {
        self.insert(id, Element::default());
    }

    pub fn remove(&self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Snapshot of the element, if present.
    pub fn get(&self, id: &str) -> Option<Element> {
        self.elements.get(id).map(|e| e.value().clone())
    }

    /// Mutates the element in place. Missing targets are tolerated: the
    /// same sync code runs across pages with different markup.
    pub fn update<F>(&self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        match self.elements.get_mut(id) {
            Some(mut element) => {
                f(&mut element);
                true
            }
            None => false,
        }
    }

    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .iter()
            .filter(|entry| entry.value().has_class(class))
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Records a blocking user-facing message (the manual-copy prompt).
    pub fn alert(&self, message: impl Into<String>) {
        self.alerts.lock().push(message.into());
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}
