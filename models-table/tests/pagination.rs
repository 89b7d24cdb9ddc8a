//! Page slicing, navigation and the pagination control labels.

use models_table::model::Record;
use models_table::pipeline::{PageLabel, page_range, pages_count, visible_page_numbers};
use models_table::{ColumnSpec, ModelsTable, TableConfig};

fn numbered(count: usize) -> Vec<Record> {
    (1..=count).map(|i| Record::new().set("n", i as i64)).collect()
}

fn table(count: usize) -> ModelsTable {
    let config = TableConfig::default().with_columns(vec![ColumnSpec::property("n")]);
    ModelsTable::new(numbered(count), config)
}

fn labels(pages: usize, current: usize) -> Vec<String> {
    visible_page_numbers(pages, current)
        .iter()
        .map(|p| p.label.to_string())
        .collect()
}

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn test_twenty_three_records_last_page() {
    let mut table = table(23);
    assert_eq!(table.pages_count(), 3);
    assert_eq!(table.summary(), "Show 1 - 10 of 23");

    assert!(table.goto_last());
    assert_eq!(table.current_page_number(), 3);
    assert_eq!(table.visible_content().len(), 3);
    assert_eq!(table.summary(), "Show 21 - 23 of 23");
    assert!(!table.goto_forward_enabled());
    assert!(table.goto_back_enabled());
}

#[test]
fn test_pages_cover_every_row_once() {
    for count in [0, 1, 9, 10, 11, 23, 50, 51] {
        let mut table = table(count);
        let mut seen = 0;
        for page in 1..=table.pages_count() {
            table.goto_custom_page(page);
            seen += table.visible_content().len();
        }
        assert_eq!(seen, count, "{} rows", count);
        assert_eq!(table.pages_count(), count.div_ceil(10));
    }
}

#[test]
fn test_short_table_shows_everything_on_any_page() {
    let mut table = table(4);
    table.goto_custom_page(3);
    assert_eq!(table.visible_content().len(), 4);
}

#[test]
fn test_page_past_end_is_empty() {
    let mut table = table(23);
    table.goto_custom_page(7);
    assert!(table.visible_content().is_empty());
}

#[test]
fn test_page_zero_is_empty() {
    let mut table = table(23);
    table.goto_custom_page(0);
    assert!(table.visible_content().is_empty());
    assert_eq!(table.summary(), "Show 0 - 0 of 23");
    assert!(!table.goto_back_enabled());
}

#[test]
fn test_page_zero_short_table_shows_everything() {
    let mut table = table(4);
    table.goto_custom_page(0);
    assert_eq!(table.visible_content().len(), 4);
}

#[test]
fn test_page_range_helpers() {
    assert_eq!(pages_count(23, 10), 3);
    assert_eq!(pages_count(20, 10), 2);
    assert_eq!(pages_count(5, 0), 0);
    assert_eq!(page_range(23, 10, 2), 10..20);
    assert_eq!(page_range(23, 10, 3), 20..23);
    assert_eq!(page_range(3, 10, 2), 0..3);
    assert_eq!(page_range(23, 10, 0), 0..0);
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_prev_and_first_disabled_on_first_page() {
    let mut table = table(30);
    assert!(!table.goto_prev());
    assert!(!table.goto_first());
    assert_eq!(table.current_page_number(), 1);
}

#[test]
fn test_next_walks_until_last() {
    let mut table = table(30);
    assert!(table.goto_next());
    assert!(table.goto_next());
    assert!(!table.goto_next());
    assert_eq!(table.current_page_number(), 3);

    assert!(table.goto_prev());
    assert_eq!(table.current_page_number(), 2);
    assert!(table.goto_first());
    assert_eq!(table.current_page_number(), 1);
}

#[test]
fn test_empty_table_navigation() {
    let mut table = table(0);
    assert_eq!(table.pages_count(), 0);
    assert!(!table.goto_next());
    assert!(!table.goto_last());
    assert_eq!(table.summary(), "Show 0 - 0 of 0");
}

#[test]
fn test_change_page_size_resets_page() {
    let mut table = table(60);
    table.goto_last();
    assert_eq!(table.current_page_number(), 6);

    table.change_page_size(1).unwrap();
    assert_eq!(table.page_size(), 25);
    assert_eq!(table.current_page_number(), 1);
    assert_eq!(table.pages_count(), 3);
    assert_eq!(table.visible_content().len(), 25);
}

#[test]
fn test_change_page_size_out_of_range() {
    let mut table = table(60);
    assert!(table.change_page_size(3).is_err());
    assert_eq!(table.page_size(), 10);
}

#[test]
fn test_filter_does_not_reset_page() {
    let mut table = table(30);
    table.goto_last();
    table.set_filter_string("1");

    // 1, 10..=19 and 21 remain, so page 3 no longer exists.
    assert_eq!(table.arranged_len(), 12);
    assert_eq!(table.current_page_number(), 3);
    assert!(table.visible_content().is_empty());
}

// =============================================================================
// Numeric pagination labels
// =============================================================================

#[test]
fn test_labels_middle_page() {
    let numbers = visible_page_numbers(10, 5);
    let labels: Vec<PageLabel> = numbers.iter().map(|p| p.label).collect();
    assert_eq!(
        labels,
        vec![
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(4),
            PageLabel::Page(5),
            PageLabel::Page(6),
            PageLabel::Ellipsis,
            PageLabel::Page(10),
        ]
    );

    let active: Vec<bool> = numbers.iter().map(|p| p.is_active).collect();
    assert_eq!(active, vec![false, false, false, true, false, false, false]);
    assert!(!numbers[1].is_link);
}

#[test]
fn test_labels_near_edges() {
    assert_eq!(labels(10, 1), ["1", "2", "...", "10"]);
    assert_eq!(labels(10, 2), ["1", "2", "3", "...", "10"]);
    assert_eq!(labels(10, 3), ["1", "2", "3", "4", "...", "10"]);
    assert_eq!(labels(10, 10), ["1", "...", "9", "10"]);
}

#[test]
fn test_labels_few_pages() {
    assert_eq!(labels(1, 1), ["1"]);
    assert_eq!(labels(2, 1), ["1", "2"]);
    assert_eq!(labels(3, 2), ["1", "2", "3"]);
    assert!(labels(0, 1).is_empty());
}

#[test]
fn test_table_labels_follow_current_page() {
    let mut table = table(100);
    table.goto_custom_page(5);

    let labels: Vec<String> = table
        .visible_page_numbers()
        .iter()
        .map(|p| p.label.to_string())
        .collect();
    assert_eq!(labels, ["1", "...", "4", "5", "6", "...", "10"]);
}
