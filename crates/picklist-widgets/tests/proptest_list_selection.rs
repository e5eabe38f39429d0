//! Property-based tests for list rendering and selection.
//!
//! 1. A sequence of n records renders exactly n rows, in order, with their text.
//! 2. Nothing is selected initially or after a new sequence instance arrives.
//! 3. Activating row i selects exactly row i.
//! 4. Activating the selected row again keeps it selected.
//! 5. Rendering the same list twice yields identical markup.

use picklist_core::{ClickEvent, Frame, HitId, Items};
use picklist_widgets::{ListMsg, ListUpdate, ListView};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Row {
    key: usize,
    text: String,
    selected: bool,
}

fn texts(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9 ]{0,12}", 0..=max_len)
}

fn texts_with_index(max_len: usize) -> impl Strategy<Value = (Vec<String>, usize)> {
    proptest::collection::vec("[a-z0-9 ]{0,12}", 1..=max_len).prop_flat_map(|texts| {
        let len = texts.len();
        (Just(texts), 0..len)
    })
}

fn render(list: &ListView) -> Frame<ListMsg> {
    let mut frame = Frame::new();
    list.view(&mut frame);
    frame
}

/// Parse rows out of the compact markup a `ListView` emits.
fn rows(html: &str) -> Vec<Row> {
    html.split("<li ")
        .skip(1)
        .map(|chunk| {
            let key_start = chunk.find("data-key=\"").expect("data-key") + "data-key=\"".len();
            let key_end = key_start + chunk[key_start..].find('"').expect("key end");
            let text_start = chunk.find('>').expect("tag end") + 1;
            let text_end = chunk.find("</li>").expect("close tag");
            Row {
                key: chunk[key_start..key_end].parse().expect("numeric key"),
                text: chunk[text_start..text_end].to_string(),
                selected: chunk[..text_start].contains("background-color: green"),
            }
        })
        .collect()
}

fn click(list: &mut ListView, row: usize) -> ListUpdate {
    let frame = render(list);
    let msg = frame
        .activate(&ClickEvent::new(list.widget(), row as u64))
        .expect("row handler registered");
    list.update(msg)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. n records → n rows in order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn renders_one_row_per_record(texts in texts(30)) {
        let list = ListView::new(Items::new(texts.iter().map(String::as_str)));
        let frame = render(&list);
        let rendered = rows(frame.html());

        prop_assert_eq!(rendered.len(), texts.len());
        prop_assert_eq!(frame.handler_count(), texts.len());
        for (i, (row, text)) in rendered.iter().zip(&texts).enumerate() {
            prop_assert_eq!(row.key, i);
            prop_assert_eq!(&row.text, text);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No selection initially or after a new instance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn new_instance_clears_selection(
        (first, index) in texts_with_index(20),
        second in texts(20),
    ) {
        let mut list = ListView::new(Items::new(first.iter().map(String::as_str)));
        prop_assert!(rows(render(&list).html()).iter().all(|row| !row.selected));

        click(&mut list, index);
        prop_assert_eq!(list.selected(), Some(index));

        let update = list.update(ListMsg::SetItems(Items::new(second.iter().map(String::as_str))));
        prop_assert_eq!(update, ListUpdate::Reset);
        prop_assert_eq!(list.selected(), None);
        prop_assert!(rows(render(&list).html()).iter().all(|row| !row.selected));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3 + 4. Activation selects exactly one row and does not toggle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn activation_selects_exactly_one_row((texts, index) in texts_with_index(25)) {
        let mut list = ListView::new(Items::new(texts.iter().map(String::as_str)))
            .widget_id(HitId(4));
        prop_assert_eq!(click(&mut list, index), ListUpdate::Selected(index));

        let rendered = rows(render(&list).html());
        for row in &rendered {
            prop_assert_eq!(row.selected, row.key == index);
        }

        prop_assert_eq!(click(&mut list, index), ListUpdate::Unchanged);
        prop_assert_eq!(list.selected(), Some(index));
    }

    #[test]
    fn last_activation_wins(
        (texts, first) in texts_with_index(25),
        second_seed in any::<usize>(),
    ) {
        let second = second_seed % texts.len();
        let mut list = ListView::new(Items::new(texts.iter().map(String::as_str)));
        click(&mut list, first);
        click(&mut list, second);

        let selected: Vec<usize> = rows(render(&list).html())
            .into_iter()
            .filter(|row| row.selected)
            .map(|row| row.key)
            .collect();
        prop_assert_eq!(selected, vec![second]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotent rendering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_twice_is_identical((texts, index) in texts_with_index(25)) {
        let mut list = ListView::new(Items::new(texts.iter().map(String::as_str)));
        click(&mut list, index);
        let first = render(&list).into_html();
        let second = render(&list).into_html();
        prop_assert_eq!(first, second);
        prop_assert_eq!(list.selected(), Some(index));
    }
}
