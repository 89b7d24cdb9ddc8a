//! Filter stage: global search plus per-column filters.

use crate::column::Column;
use crate::model::TableRecord;
use crate::model::stringify;

/// Filter settings shared by both passes.
///
/// # Example
///
/// ```
/// use models_table::pipeline::{FilterCriteria, filter};
/// use models_table::model::Record;
/// use models_table::{Column, ColumnSpec};
///
/// let records = vec![
///     Record::new().set("name", "Bob").set("age", 30),
///     Record::new().set("name", "Al").set("age", 25),
/// ];
/// let columns = vec![Column::from_spec(ColumnSpec::property("name"))];
///
/// let criteria = FilterCriteria::new("al").ignore_case(true);
/// assert_eq!(filter(&records, &columns, &criteria), vec![1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Global search text matched against every bound column.
    pub global: String,
    /// Apply each column's own filter text as well.
    pub use_column_filters: bool,
    /// Compare case-insensitively.
    pub ignore_case: bool,
}

impl FilterCriteria {
    /// Global search only, case-sensitive, column filters on.
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
            use_column_filters: true,
            ignore_case: false,
        }
    }

    /// Set case-insensitive matching.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Enable or disable the per-column pass.
    pub fn column_filters(mut self, enabled: bool) -> Self {
        self.use_column_filters = enabled;
        self
    }
}

/// A needle normalized once for the whole pass.
struct Needle(String);

impl Needle {
    fn new(text: &str, ignore_case: bool) -> Self {
        if ignore_case {
            Self(text.to_lowercase())
        } else {
            Self(text.to_string())
        }
    }

    fn found_in(&self, haystack: &str, ignore_case: bool) -> bool {
        if self.0.is_empty() {
            return true;
        }
        if ignore_case {
            haystack.to_lowercase().contains(&self.0)
        } else {
            haystack.contains(&self.0)
        }
    }
}

/// Stringified value of one bound column for one record.
fn cell_text<R: TableRecord>(record: &R, property: &str) -> String {
    stringify(record.property(property).as_ref())
}

/// Runs both filter passes and returns the indices of kept records, in
/// input order.
///
/// Global pass: with no bound columns every record is kept; otherwise a record
/// is kept if any bound column's text contains the global search text.
///
/// Per-column pass (when enabled): a survivor is kept if every column with
/// `use_filter` contains that column's own filter text. Absent properties read
/// as `"undefined"` in both passes.
pub fn filter<R: TableRecord>(
    records: &[R],
    columns: &[Column],
    criteria: &FilterCriteria,
) -> Vec<usize> {
    let ignore_case = criteria.ignore_case;
    let global = Needle::new(&criteria.global, ignore_case);

    let bound: Vec<&str> = columns
        .iter()
        .filter_map(|c| c.property_name.as_deref())
        .collect();

    let column_filters: Vec<(&str, Needle)> = if criteria.use_column_filters {
        columns
            .iter()
            .filter(|c| c.use_filter)
            .filter_map(|c| {
                c.property_name
                    .as_deref()
                    .map(|p| (p, Needle::new(&c.filter_string, ignore_case)))
            })
            .collect()
    } else {
        Vec::new()
    };

    let kept: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            // Display-only columns leave nothing to search, so every record stays.
            bound.is_empty()
                || bound
                    .iter()
                    .any(|property| global.found_in(&cell_text(*record, property), ignore_case))
        })
        .filter(|(_, record)| {
            column_filters
                .iter()
                .all(|(property, needle)| needle.found_in(&cell_text(*record, property), ignore_case))
        })
        .map(|(index, _)| index)
        .collect();

    log::trace!(
        "filter kept {} of {} records (global: {:?})",
        kept.len(),
        records.len(),
        criteria.global
    );

    kept
}

/// Filters records by value, for callers that want the records themselves.
pub fn filter_records<'a, R: TableRecord>(
    records: &'a [R],
    columns: &[Column],
    criteria: &FilterCriteria,
) -> Vec<&'a R> {
    filter(records, columns, criteria)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}
