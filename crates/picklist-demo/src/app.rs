//! The demo model: one list whose items can be reloaded.

use picklist_core::{Frame, Items};
use picklist_runtime::{Cmd, Model};
use picklist_widgets::{ListMsg, ListUpdate, ListView};
use tracing::info;

#[derive(Debug)]
pub struct App {
    list: ListView,
    history: Vec<ListUpdate>,
}

impl App {
    pub fn new(list: ListView) -> Self {
        Self {
            list,
            history: Vec::new(),
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Outcome of every list update, in order.
    pub fn history(&self) -> &[ListUpdate] {
        &self.history
    }

    /// Message that installs a freshly loaded sequence.
    pub fn reload(items: Items) -> ListMsg {
        ListMsg::SetItems(items)
    }
}

impl Model for App {
    type Message = ListMsg;

    fn init(&mut self) -> Cmd<ListMsg> {
        Cmd::log(format!("picklist ready with {} items", self.list.items().len()))
    }

    fn update(&mut self, msg: ListMsg) -> Cmd<ListMsg> {
        let outcome = self.list.update(msg);
        self.history.push(outcome);
        match outcome {
            ListUpdate::Selected(index) => {
                info!(index, "row selected");
            }
            ListUpdate::Reset => {
                info!(items = self.list.items().len(), "items replaced, selection cleared");
            }
            ListUpdate::Unchanged | ListUpdate::Ignored => return Cmd::unchanged(),
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame<ListMsg>) {
        self.list.view(frame);
    }
}
