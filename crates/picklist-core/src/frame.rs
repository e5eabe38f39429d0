#![forbid(unsafe_code)]

//! Render target: HTML markup plus the activation handler registry.
//!
//! A [`Frame`] is the output of one render pass. Components append markup and
//! register a [`Trigger`] for every clickable surface they emit, keyed by the
//! same `(HitId, HitData)` pair they write into the element's `data-hit`
//! attribute. The runtime resolves host clicks against the most recent frame
//! with [`Frame::activate`].
//!
//! Rendering never fires a trigger. A frame only stores them.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::callback::Trigger;
use crate::event::{ClickEvent, HitData, HitId};

/// Output of a render pass.
pub struct Frame<M> {
    html: String,
    handlers: BTreeMap<(HitId, HitData), Trigger<M>>,
}

impl<M> Default for Frame<M> {
    fn default() -> Self {
        Self {
            html: String::new(),
            handlers: BTreeMap::new(),
        }
    }
}

impl<M> std::fmt::Debug for Frame<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("html_len", &self.html.len())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl<M: 'static> Frame<M> {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered markup.
    #[inline]
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Mutable access to the markup buffer for component writers.
    #[inline]
    pub fn html_mut(&mut self) -> &mut String {
        &mut self.html
    }

    /// Consume the frame and return its markup.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Register the handler for a hit target.
    ///
    /// Returns `false` if a handler was already registered for the target; the
    /// newer handler wins.
    pub fn register(&mut self, id: HitId, data: HitData, trigger: Trigger<M>) -> bool {
        self.handlers.insert((id, data), trigger).is_none()
    }

    /// Look up the handler for a hit target.
    #[must_use]
    pub fn handler(&self, id: HitId, data: HitData) -> Option<&Trigger<M>> {
        self.handlers.get(&(id, data))
    }

    /// Resolve a click against this frame, firing the registered trigger.
    ///
    /// Returns `None` when the click is not an activation or hits nothing
    /// this frame registered.
    pub fn activate(&self, click: &ClickEvent) -> Option<M> {
        if !click.is_activation() {
            return None;
        }
        self.handler(click.id, click.data).map(Trigger::fire)
    }

    /// Number of registered hit targets.
    #[inline]
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Copy another frame's markup and handlers onto the end of this one.
    pub fn append(&mut self, other: &Frame<M>) {
        self.html.push_str(&other.html);
        for (key, trigger) in &other.handlers {
            self.handlers.insert(*key, trigger.clone());
        }
    }

    /// Move a child frame with a different message type into this one,
    /// converting its triggers with `map`.
    pub fn embed<C: 'static>(&mut self, child: Frame<C>, map: Rc<dyn Fn(C) -> M>) {
        self.html.push_str(&child.html);
        for (key, trigger) in child.handlers {
            self.handlers.insert(key, trigger.map(Rc::clone(&map)));
        }
    }

    /// Reset to an empty frame, keeping allocations.
    pub fn clear(&mut self) {
        self.html.clear();
        self.handlers.clear();
    }
}
