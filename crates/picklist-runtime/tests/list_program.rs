//! Driving a `ListView` through the program loop with host clicks.

use std::rc::Rc;

use picklist_core::{ClickEvent, Event, Frame, HitId, Items};
use picklist_runtime::{Cmd, EventOutcome, Model, Program};
use picklist_widgets::{ListMsg, ListUpdate, ListView};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct ListApp {
    list: ListView,
    updates: Vec<ListUpdate>,
}

impl ListApp {
    fn new(items: Items) -> Self {
        Self {
            list: ListView::new(items).widget_id(HitId(1)),
            updates: Vec::new(),
        }
    }
}

impl Model for ListApp {
    type Message = ListMsg;

    fn update(&mut self, msg: ListMsg) -> Cmd<ListMsg> {
        let outcome = self.list.update(msg);
        self.updates.push(outcome);
        if outcome.is_changed() {
            Cmd::none()
        } else {
            Cmd::unchanged()
        }
    }

    fn view(&self, frame: &mut Frame<ListMsg>) {
        self.list.view(frame);
    }
}

/// A parent page embedding the list under its own message type.
#[derive(Debug)]
enum PageMsg {
    List(ListMsg),
    Reload,
}

#[derive(Debug)]
struct Page {
    list: ListView,
    source: Vec<&'static str>,
}

impl Model for Page {
    type Message = PageMsg;

    fn update(&mut self, msg: PageMsg) -> Cmd<PageMsg> {
        match msg {
            PageMsg::List(msg) => {
                if self.list.update(msg).is_changed() {
                    Cmd::none()
                } else {
                    Cmd::unchanged()
                }
            }
            PageMsg::Reload => Cmd::msg(PageMsg::List(ListMsg::SetItems(Items::new(
                self.source.iter().copied(),
            )))),
        }
    }

    fn view(&self, frame: &mut Frame<PageMsg>) {
        frame.html_mut().push_str("<main>");
        let mut child = Frame::new();
        self.list.view(&mut child);
        frame.embed(child, Rc::new(PageMsg::List));
        frame.html_mut().push_str("</main>");
    }
}

fn click(row: u64) -> Event {
    Event::click(HitId(1), row)
}

#[test]
fn host_click_selects_row() {
    let mut program = Program::new(ListApp::new(Items::new(["a", "b"])));
    assert!(!program.html().contains("green"));

    assert_eq!(program.handle_event(&click(1)), EventOutcome::Dispatched);
    assert_eq!(program.model().list.selected(), Some(1));
    assert!(
        program
            .html()
            .contains("data-hit=\"1:1\" style=\"background-color: green\">b</li>")
    );
}

#[test]
fn click_parsed_from_attribute_text() {
    let mut program = Program::new(ListApp::new(Items::new(["a", "b", "c"])));
    let click: ClickEvent = "1:2".parse().unwrap();
    assert_eq!(program.handle_event(&click.into()), EventOutcome::Dispatched);
    assert_eq!(program.model().list.selected(), Some(2));
}

#[test]
fn repeated_click_keeps_selection() {
    let mut program = Program::new(ListApp::new(Items::new(["a", "b"])));
    program.handle_event(&click(0));
    program.handle_event(&click(0));
    assert_eq!(program.model().list.selected(), Some(0));
    assert_eq!(
        program.model().updates,
        vec![ListUpdate::Selected(0), ListUpdate::Unchanged]
    );
}

#[test]
fn updates_that_change_nothing_do_not_render() {
    let items = Items::new(["a", "b"]);
    let mut program = Program::new(ListApp::new(items.clone()));
    assert_eq!(program.frames_rendered(), 1);

    program.handle_event(&click(0));
    assert_eq!(program.frames_rendered(), 2);
    let html = program.html().to_string();

    assert_eq!(program.handle_event(&click(0)), EventOutcome::Dispatched);
    program.send(ListMsg::SetItems(items));
    program.send(ListMsg::Activate(7));
    assert_eq!(program.frames_rendered(), 2);
    assert_eq!(program.updates(), 4);
    assert_eq!(program.html(), html);
    assert_eq!(
        program.model().updates,
        vec![
            ListUpdate::Selected(0),
            ListUpdate::Unchanged,
            ListUpdate::Unchanged,
            ListUpdate::Ignored,
        ]
    );

    program.handle_event(&click(1));
    assert_eq!(program.frames_rendered(), 3);
}

#[test]
fn replacing_items_resets_selection_and_frame() {
    let mut program = Program::new(ListApp::new(Items::new(["a", "b"])));
    program.handle_event(&click(1));
    program.send(ListMsg::SetItems(Items::new(["x", "y", "z"])));

    assert_eq!(program.model().list.selected(), None);
    assert_eq!(program.frame().handler_count(), 3);
    assert!(program.html().contains(">z</li>"));
    assert!(!program.html().contains("green"));
}

#[test]
fn click_past_the_end_of_a_shrunk_list_hits_nothing() {
    let mut program = Program::new(ListApp::new(Items::new(["a", "b", "c"])));
    program.send(ListMsg::SetItems(Items::new(["x"])));
    assert_eq!(program.handle_event(&click(2)), EventOutcome::Ignored);
    assert_eq!(program.model().list.selected(), None);
}

#[test]
fn empty_list_renders_and_ignores_clicks() {
    let mut program = Program::new(ListApp::new(Items::default()));
    assert_eq!(
        program.html(),
        "<ul data-widget=\"1\" style=\"text-align: left\"></ul>"
    );
    assert_eq!(program.handle_event(&click(0)), EventOutcome::Ignored);
}

#[test]
fn embedded_list_reports_through_parent_messages() {
    let mut program = Program::new(Page {
        list: ListView::new(Items::new(["a", "b"])).widget_id(HitId(1)),
        source: vec!["a", "b"],
    });
    assert!(program.html().starts_with("<main><ul"));

    program.handle_event(&click(0));
    assert_eq!(program.model().list.selected(), Some(0));

    // Reload builds a new instance with equal contents; selection still resets.
    program.send(PageMsg::Reload);
    assert_eq!(program.model().list.selected(), None);
    assert_eq!(program.updates(), 3);
}
