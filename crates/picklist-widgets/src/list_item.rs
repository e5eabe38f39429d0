#![forbid(unsafe_code)]

//! A single list row.
//!
//! [`ListItemView`] is a pure function of its props: position, a selected
//! flag, text and the shared activation callback. It renders one `<li>` and
//! registers a trigger that reports its position through the callback when
//! the row is clicked. It keeps no state and never fires the callback itself.
//!
//! Its [`Hash`] covers every prop, the callback by pointer identity, which is
//! what [`crate::memo::Memo::with_hash`] keys on to skip re-rendering.

use std::hash::{Hash, Hasher};

use picklist_core::event::format_hit;
use picklist_core::html::{self, InlineStyle};
use picklist_core::{Callback, Frame, HitData, HitId};

use crate::Component;
use crate::style::Palette;

/// One rendered row of a list.
pub struct ListItemView<'a, M> {
    index: usize,
    is_selected: bool,
    text: &'a str,
    on_activate: &'a Callback<usize, M>,
    widget: HitId,
    palette: Option<&'a Palette>,
}

impl<'a, M: 'static> ListItemView<'a, M> {
    /// Create a row for position `index`.
    #[must_use]
    pub fn new(
        index: usize,
        is_selected: bool,
        text: &'a str,
        on_activate: &'a Callback<usize, M>,
    ) -> Self {
        Self {
            index,
            is_selected,
            text,
            on_activate,
            widget: HitId::default(),
            palette: None,
        }
    }

    /// Set the hit id the row registers under (the owning list's id).
    #[must_use]
    pub fn widget(mut self, widget: HitId) -> Self {
        self.widget = widget;
        self
    }

    /// Use a non-default palette.
    #[must_use]
    pub fn palette(mut self, palette: &'a Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Position of the row.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the row renders as selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }
}

impl<M: 'static> Component<M> for ListItemView<'_, M> {
    fn render(&self, frame: &mut Frame<M>) {
        let default_palette;
        let palette = match self.palette {
            Some(palette) => palette,
            None => {
                default_palette = Palette::default();
                &default_palette
            }
        };
        let style = InlineStyle::new().with("background-color", palette.background(self.is_selected));
        let key = self.index.to_string();
        let hit = format_hit(self.widget, self.index as HitData);

        let out = frame.html_mut();
        html::open_tag(
            out,
            "li",
            &[
                ("data-key", &key),
                ("data-hit", &hit),
                ("style", &style.to_string()),
            ],
        );
        html::text(out, self.text);
        html::close_tag(out, "li");

        frame.register(
            self.widget,
            self.index as HitData,
            self.on_activate.bind(self.index),
        );
    }
}

impl<M: 'static> Hash for ListItemView<'_, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.is_selected.hash(state);
        self.text.hash(state);
        self.on_activate.addr().hash(state);
        self.widget.hash(state);
        self.palette.hash(state);
    }
}

impl<M> std::fmt::Debug for ListItemView<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListItemView")
            .field("index", &self.index)
            .field("is_selected", &self.is_selected)
            .field("text", &self.text)
            .field("widget", &self.widget)
            .finish()
    }
}
