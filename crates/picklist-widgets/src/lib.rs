#![forbid(unsafe_code)]

//! Components for picklist.
//!
//! [`list::ListView`] owns the selection and renders one
//! [`list_item::ListItemView`] per record. Rows are wrapped in a
//! [`memo::Memo`] so unchanged rows are replayed from cache instead of being
//! rendered again.

pub mod list;
pub mod list_item;
pub mod memo;
pub mod style;

use picklist_core::Frame;

pub use list::{ListMsg, ListState, ListUpdate, ListView};
pub use list_item::ListItemView;
pub use memo::{Memo, MemoState, MemoStats};
pub use style::{Palette, TextAlign};

/// A `Component` is a renderable unit with no state of its own.
///
/// Components append markup to the frame and register a trigger for each
/// clickable surface. They must not produce messages while rendering.
pub trait Component<M> {
    /// Render the component into the frame.
    fn render(&self, frame: &mut Frame<M>);
}

/// A `StatefulComponent` renders with access to state kept by its owner.
pub trait StatefulComponent<M> {
    type State;
    /// Render the component into the frame with mutable state.
    fn render(&self, frame: &mut Frame<M>, state: &mut Self::State);
}
