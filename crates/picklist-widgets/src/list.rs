#![forbid(unsafe_code)]

//! List component.
//!
//! [`ListView`] displays an [`Items`] sequence as a `<ul>` with one
//! [`ListItemView`] row per record and tracks which row is selected.
//!
//! # Selection ownership
//!
//! The selection lives in [`ListState`], owned by the `ListView` and mutated
//! only through [`ListView::update`]. Rows get a derived `is_selected` flag
//! and a reference to one shared activation callback; clicking a row produces
//! a [`ListMsg::Activate`] that the owner feeds back into `update`.
//!
//! # Sequence identity
//!
//! Selection is tied to the sequence *instance*. [`ListMsg::SetItems`] with a
//! new instance clears the selection even if its contents equal the old ones;
//! re-sending the same instance keeps it. This keeps the selected index valid
//! for the sequence it was chosen from.
//!
//! # Row keys
//!
//! Rows are keyed by position. That is only sound because records are never
//! reordered or filtered independently of their position.

use std::cell::RefCell;

use picklist_core::event::HitId;
use picklist_core::html::{self, InlineStyle};
use picklist_core::{Callback, Frame, Items};

use crate::StatefulComponent;
use crate::list_item::ListItemView;
use crate::memo::{Memo, MemoState, MemoStats};
use crate::style::{Palette, TextAlign};

#[cfg(feature = "tracing")]
use web_time::Instant;

/// Messages accepted by [`ListView::update`].
#[derive(Debug, Clone)]
pub enum ListMsg {
    /// The row at this position was activated.
    Activate(usize),
    /// Replace the displayed sequence.
    SetItems(Items),
}

/// Result of a [`ListView::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListUpdate {
    /// A row became selected.
    Selected(usize),
    /// A new sequence instance was installed and the selection cleared.
    Reset,
    /// The message did not change anything (same row again, same sequence instance).
    Unchanged,
    /// The message referred to a row outside the current sequence.
    Ignored,
}

impl ListUpdate {
    /// Whether the list needs to be rendered again.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Selected(_) | Self::Reset)
    }
}

/// Selection state of a [`ListView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    selected: Option<usize>,
}

impl ListState {
    /// Index of the selected row, if any.
    #[inline]
    #[must_use = "use the selected index (if any)"]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the row at `index` is the selected one.
    #[inline]
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    fn clear(&mut self) {
        self.selected = None;
    }
}

/// A selectable list of text rows.
pub struct ListView {
    items: Items,
    state: ListState,
    on_activate: Callback<usize, ListMsg>,
    widget: HitId,
    palette: Palette,
    text_align: TextAlign,
    rows: RefCell<Vec<MemoState<ListMsg>>>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(Items::default())
    }
}

impl ListView {
    /// Create a list showing `items` with nothing selected.
    #[must_use]
    pub fn new(items: Items) -> Self {
        Self {
            items,
            state: ListState::default(),
            on_activate: Callback::new(ListMsg::Activate),
            widget: HitId::default(),
            palette: Palette::default(),
            text_align: TextAlign::default(),
            rows: RefCell::new(Vec::new()),
        }
    }

    /// Set the hit id rows register under.
    ///
    /// Lists sharing one frame need distinct ids.
    #[must_use]
    pub fn widget_id(mut self, widget: HitId) -> Self {
        self.widget = widget;
        self
    }

    /// Set the row palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the text alignment of the list.
    #[must_use]
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// The displayed sequence.
    #[must_use]
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Index of the selected row, if any.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Read-only view of the selection state.
    #[must_use]
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Hit id the rows register under.
    #[must_use]
    pub fn widget(&self) -> HitId {
        self.widget
    }

    /// The activation callback shared by every row.
    ///
    /// The same instance is handed to every row on every render.
    #[must_use]
    pub fn on_activate(&self) -> &Callback<usize, ListMsg> {
        &self.on_activate
    }

    /// Apply a message. This is the only way the selection changes.
    pub fn update(&mut self, msg: ListMsg) -> ListUpdate {
        match msg {
            ListMsg::Activate(index) => {
                if index >= self.items.len() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        message = "list.activate.out_of_range",
                        index,
                        len = self.items.len()
                    );
                    return ListUpdate::Ignored;
                }
                if self.state.is_selected(index) {
                    return ListUpdate::Unchanged;
                }
                self.state.select(index);
                #[cfg(feature = "tracing")]
                self.log_selection_change("activate");
                ListUpdate::Selected(index)
            }
            ListMsg::SetItems(items) => {
                if Items::same_instance(&self.items, &items) {
                    return ListUpdate::Unchanged;
                }
                self.items = items;
                self.state.clear();
                #[cfg(feature = "tracing")]
                self.log_selection_change("items_changed");
                ListUpdate::Reset
            }
        }
    }

    #[cfg(feature = "tracing")]
    fn log_selection_change(&self, action: &str) {
        tracing::debug!(
            message = "list.selection",
            action,
            selected = self.state.selected(),
            total_items = self.items.len()
        );
    }

    /// Render the list.
    ///
    /// Rows whose props did not change since the previous render are replayed
    /// from their memo cache.
    pub fn view(&self, frame: &mut Frame<ListMsg>) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "list.render",
            total_items = self.items.len(),
            selected = self.state.selected(),
            rows_rendered = tracing::field::Empty,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let style = InlineStyle::new().with("text-align", self.text_align.as_css());
        html::open_tag(
            frame.html_mut(),
            "ul",
            &[
                ("data-widget", &self.widget.to_string()),
                ("style", &style.to_string()),
            ],
        );

        let mut rows = self.rows.borrow_mut();
        rows.truncate(self.items.len());
        rows.resize_with(self.items.len(), MemoState::default);

        #[cfg(feature = "tracing")]
        let renders_before: u64 = rows.iter().map(|row| row.stats().renders).sum();

        for (index, (record, row_state)) in self.items.iter().zip(rows.iter_mut()).enumerate() {
            let item = ListItemView::new(
                index,
                self.state.is_selected(index),
                record.text(),
                &self.on_activate,
            )
            .widget(self.widget)
            .palette(&self.palette);
            Memo::with_hash(item).render(frame, row_state);
        }

        html::close_tag(frame.html_mut(), "ul");

        #[cfg(feature = "tracing")]
        {
            let renders_after: u64 = rows.iter().map(|row| row.stats().renders).sum();
            render_span.record("rows_rendered", renders_after - renders_before);
            render_span.record(
                "render_duration_us",
                render_start.elapsed().as_micros() as u64,
            );
        }
    }

    /// Render counters summed over every row currently displayed.
    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.rows
            .borrow()
            .iter()
            .map(MemoState::stats)
            .fold(MemoStats::default(), |acc, stats| acc + stats)
    }
}

impl std::fmt::Debug for ListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListView")
            .field("items", &self.items.len())
            .field("state", &self.state)
            .field("widget", &self.widget)
            .field("palette", &self.palette)
            .field("text_align", &self.text_align)
            .finish()
    }
}
