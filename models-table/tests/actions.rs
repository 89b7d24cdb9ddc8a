//! Dispatching user actions and column visibility.

use models_table::model::{Record, Value};
use models_table::{Action, ActionResult, ColumnSpec, ForwardedAction, ModelsTable, TableConfig};

fn table() -> ModelsTable {
    let records: Vec<Record> = (1..=15)
        .map(|i| Record::new().set("id", i).set("name", format!("row {}", i)))
        .collect();
    let config = TableConfig::default().with_columns(vec![
        ColumnSpec::property("id"),
        ColumnSpec::property("name"),
        ColumnSpec::property("secret").hidden(),
    ]);
    ModelsTable::new(records, config)
}

fn visibility(table: &ModelsTable) -> Vec<bool> {
    table.columns().iter().map(|c| c.is_visible()).collect()
}

// =============================================================================
// Column visibility
// =============================================================================

#[test]
fn test_toggle_hidden_twice_restores() {
    let mut table = table();
    let before = visibility(&table);

    assert_eq!(table.dispatch(Action::ToggleHidden(1)), ActionResult::Applied);
    assert_eq!(visibility(&table), vec![true, false, false]);

    table.dispatch(Action::ToggleHidden(1));
    assert_eq!(visibility(&table), before);
}

#[test]
fn test_hide_all_then_restore_defaults() {
    let mut table = table();

    table.dispatch(Action::HideAllColumns);
    assert!(table.all_columns_are_hidden());
    assert!(table.columns().visible().next().is_none());

    table.dispatch(Action::ShowAllColumns);
    assert_eq!(visibility(&table), vec![true, true, true]);
    assert!(!table.all_columns_are_hidden());

    table.dispatch(Action::RestoreDefaultVisibility);
    assert_eq!(visibility(&table), vec![true, true, false]);
}

#[test]
fn test_no_columns_are_not_all_hidden() {
    let table: ModelsTable = ModelsTable::new(Vec::new(), TableConfig::default());
    assert!(!table.all_columns_are_hidden());
}

#[test]
fn test_hidden_columns_still_filter() {
    let mut table = table();
    table.hide_all_columns();
    table.set_filter_string("row 12");
    assert_eq!(table.arranged_len(), 1);
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_navigation_results() {
    let mut table = table();

    assert_eq!(table.dispatch(Action::GotoPrev), ActionResult::Ignored);
    assert_eq!(table.dispatch(Action::GotoNext), ActionResult::Applied);
    assert_eq!(table.dispatch(Action::GotoNext), ActionResult::Ignored);
    assert_eq!(table.dispatch(Action::GotoFirst), ActionResult::Applied);
    assert_eq!(table.dispatch(Action::GotoLast), ActionResult::Applied);
    assert_eq!(table.current_page_number(), 2);
    assert_eq!(table.dispatch(Action::GotoCustomPage(1)), ActionResult::Applied);
    assert_eq!(table.current_page_number(), 1);
}

#[test]
fn test_bad_indices_are_ignored() {
    let mut table = table();

    assert_eq!(table.dispatch(Action::ToggleHidden(7)), ActionResult::Ignored);
    assert_eq!(table.dispatch(Action::Sort(7)), ActionResult::Ignored);
    assert_eq!(table.dispatch(Action::ChangePageSize(7)), ActionResult::Ignored);
    assert_eq!(
        table.dispatch(Action::FilterColumn {
            column: 7,
            text: "x".into()
        }),
        ActionResult::Ignored
    );
    assert_eq!(table.page_size(), 10);
}

#[test]
fn test_filter_actions() {
    let mut table = table();

    assert!(table.dispatch(Action::Filter("row 1".into())).is_applied());
    assert_eq!(table.arranged_len(), 7);

    table.dispatch(Action::FilterColumn {
        column: 0,
        text: "5".into(),
    });
    assert_eq!(table.arranged_len(), 1);
    assert_eq!(table.column(0).unwrap().filter_string, "5");
}

#[test]
fn test_send_is_forwarded() {
    let mut table = table();
    let args = vec![Value::from(3), Value::from("row 3")];

    let result = table.dispatch(Action::Send {
        name: "edit".into(),
        args: args.clone(),
    });

    assert_eq!(
        result,
        ActionResult::Forwarded(ForwardedAction {
            name: "edit".into(),
            args,
        })
    );
    assert!(!result.is_applied());
}

#[test]
fn test_sort_action_marks_column() {
    let mut table = table();
    table.dispatch(Action::Sort(0));
    table.dispatch(Action::Sort(0));

    let first = table.column(0).unwrap();
    assert!(first.sort_desc);
    assert!(!first.sort_asc);
    assert_eq!(
        table.visible_content()[0].get("id"),
        Some(&Value::Int(15))
    );
}

// =============================================================================
// Data changes
// =============================================================================

#[test]
fn test_update_data_recomputes() {
    let mut table = table();
    table.set_filter_string("row 3");
    assert_eq!(table.arranged_len(), 1);

    table.update_data(|rows| rows.push(Record::new().set("id", 33).set("name", "row 33")));
    assert_eq!(table.arranged_len(), 2);
}

#[test]
fn test_set_data_replaces_rows() {
    let mut table = table();
    table.goto_last();

    table.set_data(vec![Record::new().set("id", 1)]);
    assert_eq!(table.arranged_len(), 1);
    assert_eq!(table.visible_content().len(), 1);
}
