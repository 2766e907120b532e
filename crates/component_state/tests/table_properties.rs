use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use component_state::{
    sorted_order, ColumnSpec, RecordRange, SortState, TableInit, TableState,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn key_of(row: &Value) -> u64 {
    row["id"].as_u64().unwrap_or_default()
}

fn people() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "carol", "age": 41 }),
        json!({ "id": 2, "name": "alice", "age": 29 }),
        json!({ "id": 3, "name": "bob", "age": 29 }),
        json!({ "id": 4, "name": "dave", "age": null }),
        json!({ "id": 5, "name": "alice", "age": 35 }),
    ]
}

fn columns() -> Vec<ColumnSpec<Value>> {
    vec![
        ColumnSpec::new("name").sortable(),
        ColumnSpec::new("age").sortable(),
        ColumnSpec::new("id"),
    ]
}

fn numbered(count: u64) -> Vec<Value> {
    (0..count).map(|id| json!({ "id": id })).collect()
}

fn visible_ids(state: &TableState<Value, u64>) -> Vec<u64> {
    state.view().rows.iter().map(|row| row.key).collect()
}

fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |value| sink.borrow_mut().push(value))
}

#[test]
fn sort_cycle_follows_header_clicks() {
    let mut state = TableState::new(people(), columns(), key_of, TableInit::default());

    state.click_header("name");
    assert_eq!(state.sort_state(), &SortState::Ascending("name".to_string()));
    state.click_header("name");
    assert_eq!(state.sort_state(), &SortState::Descending("name".to_string()));
    state.click_header("name");
    assert_eq!(state.sort_state(), &SortState::Unsorted);

    state.click_header("name");
    state.click_header("age");
    assert_eq!(state.sort_state(), &SortState::Ascending("age".to_string()));
    state.click_header("name");
    state.click_header("name");
    state.click_header("age");
    assert_eq!(state.sort_state(), &SortState::Ascending("age".to_string()));
}

#[test]
fn unsorted_rows_keep_input_order_including_duplicates() {
    let rows = vec![
        json!({ "id": 10, "name": "same" }),
        json!({ "id": 11, "name": "same" }),
        json!({ "id": 12, "name": "same" }),
    ];
    let state = TableState::new(rows, columns(), key_of, TableInit::default());
    assert_eq!(visible_ids(&state), vec![10, 11, 12]);
}

#[test]
fn descending_is_the_reversed_ascending_sequence() {
    let rows = people();
    let cols = columns();
    let asc = sorted_order(&rows, &cols, &SortState::Ascending("age".to_string()));
    let desc = sorted_order(&rows, &cols, &SortState::Descending("age".to_string()));

    // Ties (alice and bob, both 29) keep input order ascending and flip descending.
    assert_eq!(asc, vec![1, 2, 4, 0, 3]);
    assert_eq!(desc, vec![0, 4, 2, 1, 3]);

    let mut non_null_asc: Vec<usize> = asc.into_iter().filter(|index| *index != 3).collect();
    non_null_asc.reverse();
    let non_null_desc: Vec<usize> = desc.into_iter().filter(|index| *index != 3).collect();
    assert_eq!(non_null_desc, non_null_asc);
}

#[test]
fn nulls_sort_last_in_both_directions() {
    let rows = vec![
        json!({ "id": 1, "score": null }),
        json!({ "id": 2, "score": 3 }),
        json!({ "id": 3 }),
        json!({ "id": 4, "score": 1 }),
    ];
    let cols = vec![ColumnSpec::new("score").sortable()];

    let asc = sorted_order(&rows, &cols, &SortState::Ascending("score".to_string()));
    let desc = sorted_order(&rows, &cols, &SortState::Descending("score".to_string()));
    assert_eq!(asc, vec![3, 1, 0, 2]);
    assert_eq!(desc, vec![1, 3, 0, 2]);
}

#[test]
fn changing_page_size_returns_to_first_page() {
    let (pages, on_page) = recorder();
    let (sizes, on_size) = recorder();
    let mut state = TableState::new(
        numbered(95),
        columns(),
        key_of,
        TableInit {
            pagination: true,
            ..TableInit::default()
        },
    )
    .on_page_change(on_page)
    .on_page_size_change(on_size);

    state.set_page(4);
    state.set_page_size(20);

    assert_eq!(state.page_size(), 20);
    assert_eq!(state.current_page(), 1);
    assert_eq!(*sizes.borrow(), vec![20]);
    assert_eq!(*pages.borrow(), vec![4, 1]);
    assert_eq!(state.window().total_pages, 5);
}

#[test]
fn record_range_on_last_partial_page() {
    let mut state = TableState::new(
        numbered(25),
        columns(),
        key_of,
        TableInit {
            pagination: true,
            ..TableInit::default()
        },
    );
    state.set_page(3);

    let window = state.window();
    assert_eq!(
        window.range,
        RecordRange {
            start: 21,
            end: 25,
            total: 25
        }
    );
    assert_eq!(window.total_pages, 3);
    assert_eq!(visible_ids(&state), vec![20, 21, 22, 23, 24]);
}

#[test]
fn row_index_is_absolute_across_pages() {
    let mut state = TableState::new(
        numbered(30),
        columns(),
        key_of,
        TableInit {
            pagination: true,
            ..TableInit::default()
        },
    );
    state.set_page(2);

    let view = state.view();
    assert_eq!(view.rows[0].index, 10);
    assert_eq!(view.rows[9].index, 19);
}

#[test]
fn expansion_survives_sort_and_page_changes() {
    let mut state = TableState::new(
        people(),
        columns(),
        key_of,
        TableInit {
            pagination: true,
            default_page_size: 2,
            ..TableInit::default()
        },
    );
    state.toggle_expanded(&3);
    state.toggle_expanded(&5);
    state.toggle_expanded(&5);

    state.click_header("name");
    state.set_page(2);
    state.click_header("name");
    state.set_page(3);

    let expected: HashSet<u64> = [3].into_iter().collect();
    assert_eq!(state.expanded_keys().as_set(), &expected);

    state.set_page(1);
    state.click_header("age");
    let expanded: Vec<u64> = state
        .view()
        .rows
        .iter()
        .filter(|row| row.expanded)
        .map(|row| row.key)
        .collect();
    // Ascending by age puts alice (29) then bob (29, id 3) on page one.
    assert_eq!(expanded, vec![3]);
}

#[test]
fn controlled_values_override_internal_state() {
    let (sorts, on_sort) = recorder();
    let (expansions, on_expanded) = recorder();
    let mut state = TableState::new(
        people(),
        columns(),
        key_of,
        TableInit {
            sort_state: Some(SortState::Unsorted),
            expanded_keys: Some(HashSet::new()),
            ..TableInit::default()
        },
    )
    .on_sort_change(on_sort)
    .on_expanded_change(on_expanded);

    state.click_header("name");
    state.toggle_expanded(&2);

    assert_eq!(
        *sorts.borrow(),
        vec![SortState::Ascending("name".to_string())]
    );
    let expected: HashSet<u64> = [2].into_iter().collect();
    assert_eq!(*expansions.borrow(), vec![expected.clone()]);
    assert_eq!(state.sort_state(), &SortState::Unsorted);
    assert!(state.expanded_keys().is_empty());
    assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5]);

    state
        .sync_sort_state(Some(SortState::Ascending("name".to_string())))
        .expect("still controlled");
    state
        .sync_expanded_keys(Some(expected))
        .expect("still controlled");
    assert_eq!(visible_ids(&state), vec![2, 5, 3, 1, 4]);
    assert!(state.expanded_keys().contains(&2));
}

#[test]
fn end_to_end_three_row_scenario() {
    let rows = vec![
        json!({ "id": 1, "name": "b" }),
        json!({ "id": 2, "name": "a" }),
        json!({ "id": 3, "name": null }),
    ];
    let mut state = TableState::new(rows, columns(), key_of, TableInit::default());

    let names = |state: &TableState<Value, u64>| -> Vec<Value> {
        state
            .view()
            .rows
            .iter()
            .map(|row| row.row["name"].clone())
            .collect()
    };

    assert_eq!(names(&state), vec![json!("b"), json!("a"), Value::Null]);
    state.click_header("name");
    assert_eq!(names(&state), vec![json!("a"), json!("b"), Value::Null]);
    state.click_header("name");
    assert_eq!(names(&state), vec![json!("b"), json!("a"), Value::Null]);
    state.click_header("name");
    assert_eq!(names(&state), vec![json!("b"), json!("a"), Value::Null]);
}

#[test]
fn out_of_range_page_is_clamped_for_slicing() {
    let state = TableState::new(
        numbered(12),
        columns(),
        key_of,
        TableInit {
            pagination: true,
            current_page: Some(9),
            ..TableInit::default()
        },
    );
    let window = state.window();
    assert_eq!(window.page, 2);
    assert_eq!(state.current_page(), 9);
    assert_eq!(visible_ids(&state), vec![10, 11]);
}
