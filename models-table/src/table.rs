//! Table state: records, columns, view state and derived content.

use crate::column::Column;
use crate::column::ColumnRegistry;
use crate::config::TableConfig;
use crate::error::Result;
use crate::error::TableError;
use crate::messages::Messages;
use crate::model::Record;
use crate::model::TableRecord;
use crate::model::records_from_json;
use crate::pipeline::FilterCriteria;
use crate::pipeline::Input;
use crate::pipeline::PageNumber;
use crate::pipeline::Pipeline;
use crate::pipeline::PipelineInputs;
use crate::pipeline::SortOrder;
use crate::pipeline::back_enabled;
use crate::pipeline::forward_enabled;
use crate::pipeline::pages_count;
use crate::pipeline::summary_bounds;
use crate::pipeline::visible_page_numbers;

/// A sortable, filterable, paginated table.
///
/// `ModelsTable` holds:
/// - the records (owned, never modified)
/// - set-up columns with visibility, per-column filters and sort indicators
/// - view state: current page, page size, global filter, sort order
/// - cached pipeline output (filtered → arranged → visible)
///
/// Every mutation reruns the pipeline stages it affects before returning,
/// so reads never see stale output.
///
/// # Example
///
/// ```
/// use models_table::{ColumnSpec, ModelsTable, TableConfig};
/// use models_table::model::Record;
///
/// let records: Vec<Record> = (1..=23)
///     .map(|i| Record::new().set("id", i))
///     .collect();
/// let config = TableConfig::default().with_columns(vec![ColumnSpec::property("id")]);
///
/// let mut table = ModelsTable::new(records, config);
/// assert_eq!(table.pages_count(), 3);
///
/// table.goto_last();
/// assert_eq!(table.visible_content().len(), 3);
/// assert_eq!(table.summary(), "Show 21 - 23 of 23");
/// ```
#[derive(Debug, Clone)]
pub struct ModelsTable<R: TableRecord = Record> {
    data: Vec<R>,
    columns: ColumnRegistry,
    messages: Messages,
    config: TableConfig,
    criteria: FilterCriteria,
    order: SortOrder,
    page_size: usize,
    current_page: usize,
    pipeline: Pipeline,
}

impl ModelsTable<Record> {
    /// Builds a table from a JSON array of record objects.
    pub fn from_json(records: &str, config: TableConfig) -> Result<Self> {
        Ok(Self::new(records_from_json(records)?, config))
    }
}

impl<R: TableRecord> ModelsTable<R> {
    /// Sets up columns and messages and runs the pipeline once.
    pub fn new(data: Vec<R>, mut config: TableConfig) -> Self {
        let columns = ColumnRegistry::new(std::mem::take(&mut config.columns));
        let messages = Messages::with_overrides(&config.custom_messages);
        let criteria = FilterCriteria {
            global: config.filter_string.clone(),
            use_column_filters: config.use_filtering_by_columns,
            ignore_case: config.filtering_ignore_case,
        };
        let order = SortOrder::new(config.sort_properties.clone(), config.sort_ascending);
        let page_size = config.page_size;

        let mut table = Self {
            data,
            columns,
            messages,
            config,
            criteria,
            order,
            page_size,
            current_page: 1,
            pipeline: Pipeline::default(),
        };
        table.changed(Input::Data);

        log::debug!(
            "table set up: {} records, {} columns, page size {}",
            table.data.len(),
            table.columns.len(),
            table.page_size
        );

        table
    }

    pub(crate) fn changed(&mut self, input: Input) {
        let inputs = PipelineInputs {
            columns: self.columns.as_slice(),
            criteria: &self.criteria,
            order: &self.order,
            page_size: self.page_size,
            current_page: self.current_page,
        };
        self.pipeline.invalidate(input, &self.data, &inputs);
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// All records.
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// Replaces all records.
    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.changed(Input::Data);
    }

    /// Mutates records in place and recomputes.
    ///
    /// Use this when the data source updates existing rows.
    pub fn update_data(&mut self, update: impl FnOnce(&mut Vec<R>)) {
        update(&mut self.data);
        self.changed(Input::Data);
    }

    /// Recomputes everything after the records changed behind the table's
    /// back (for example through interior mutability).
    pub fn invalidate(&mut self) {
        self.changed(Input::Data);
    }

    /// A snapshot of the configuration the table was built with.
    ///
    /// Only the display flags (`show_*`, `table_*`, `use_numeric_pagination`)
    /// and `page_size_values` stay meaningful. Page size, filter text and sort
    /// settings are initial values; read the live ones through
    /// [`page_size`](Self::page_size), [`filter_string`](Self::filter_string)
    /// and [`sort_order`](Self::sort_order). `columns` is empty here; see
    /// [`columns`](Self::columns) for the set-up columns.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Resolved messages.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// The columns.
    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    /// Get a column by index.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        let len = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or_else(|| TableError::column_out_of_range(index, len))
    }

    // -------------------------------------------------------------------------
    // View state
    // -------------------------------------------------------------------------

    /// Current page, 1-based.
    pub fn current_page_number(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selectable page sizes.
    pub fn page_size_values(&self) -> &[usize] {
        &self.config.page_size_values
    }

    /// Sets rows per page and goes back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.current_page = 1;
        self.changed(Input::PageSize);
    }

    /// Global filter text.
    pub fn filter_string(&self) -> &str {
        &self.criteria.global
    }

    /// Sets the global filter text.
    pub fn set_filter_string(&mut self, filter: impl Into<String>) {
        self.criteria.global = filter.into();
        self.changed(Input::FilterString);
    }

    /// Sets one column's filter text.
    pub fn set_column_filter(&mut self, column: usize, filter: impl Into<String>) -> Result<()> {
        self.column_mut(column)?.filter_string = filter.into();
        self.changed(Input::ColumnFilters);
        Ok(())
    }

    /// Whether filtering ignores case.
    pub fn filtering_ignore_case(&self) -> bool {
        self.criteria.ignore_case
    }

    /// Sets whether filtering ignores case.
    pub fn set_filtering_ignore_case(&mut self, ignore_case: bool) {
        self.criteria.ignore_case = ignore_case;
        self.changed(Input::IgnoreCase);
    }

    /// Whether per-column filters apply.
    pub fn use_filtering_by_columns(&self) -> bool {
        self.criteria.use_column_filters
    }

    /// Enables or disables per-column filters.
    pub fn set_filtering_by_columns(&mut self, enabled: bool) {
        self.criteria.use_column_filters = enabled;
        self.changed(Input::FilteringByColumns);
    }

    /// Active sort keys.
    pub fn sort_properties(&self) -> &[String] {
        self.order.keys()
    }

    /// Whether the active keys sort ascending.
    pub fn sort_ascending(&self) -> bool {
        self.order.is_ascending()
    }

    /// The active sort order.
    pub fn sort_order(&self) -> &SortOrder {
        &self.order
    }

    /// Replaces the sort order without touching column indicators.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
        self.changed(Input::SortOrder);
    }

    // -------------------------------------------------------------------------
    // Derived content
    // -------------------------------------------------------------------------

    fn records_at<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a R> + 'a {
        indices.iter().map(move |&index| &self.data[index])
    }

    /// Records passing the filters, in input order.
    pub fn filtered_content(&self) -> Vec<&R> {
        self.records_at(self.pipeline.filtered()).collect()
    }

    /// Filtered records in sort order.
    pub fn arranged_content(&self) -> Vec<&R> {
        self.records_at(self.pipeline.arranged()).collect()
    }

    /// Records on the current page.
    pub fn visible_content(&self) -> Vec<&R> {
        self.records_at(self.pipeline.visible()).collect()
    }

    /// Number of filtered records.
    pub fn arranged_len(&self) -> usize {
        self.pipeline.arranged().len()
    }

    /// Number of pages.
    pub fn pages_count(&self) -> usize {
        pages_count(self.arranged_len(), self.page_size)
    }

    /// Labels for a numeric pagination control.
    pub fn visible_page_numbers(&self) -> Vec<PageNumber> {
        visible_page_numbers(self.pages_count(), self.current_page)
    }

    /// True iff there is at least one column and all are hidden.
    pub fn all_columns_are_hidden(&self) -> bool {
        self.columns.all_hidden()
    }

    /// "First" and "Prev" are enabled.
    pub fn goto_back_enabled(&self) -> bool {
        back_enabled(self.current_page)
    }

    /// "Next" and "Last" are enabled.
    pub fn goto_forward_enabled(&self) -> bool {
        forward_enabled(self.arranged_len(), self.page_size, self.current_page)
    }

    /// Footer summary, e.g. `Show 11 - 20 of 23`.
    pub fn summary(&self) -> String {
        let total = self.arranged_len();
        let (first, last) = summary_bounds(total, self.page_size, self.current_page);
        self.messages.summary(first, last, total)
    }

    // -------------------------------------------------------------------------
    // Column actions
    // -------------------------------------------------------------------------

    /// Flips one column's visibility.
    pub fn toggle_hidden(&mut self, column: usize) -> Result<()> {
        if self.columns.toggle_hidden(column) {
            Ok(())
        } else {
            Err(TableError::column_out_of_range(column, self.columns.len()))
        }
    }

    /// Shows every column.
    pub fn show_all_columns(&mut self) {
        self.columns.set_all_hidden(false);
    }

    /// Hides every column.
    pub fn hide_all_columns(&mut self) {
        self.columns.set_all_hidden(true);
    }

    /// Puts every column back to its initial visibility.
    pub fn restore_default_visibility(&mut self) {
        self.columns.restore_default_visibility();
    }

    /// Sorts by a column, as a click on its header does.
    ///
    /// Clicking the active sort column flips the direction; clicking another
    /// column sorts by it ascending. Columns without a sort key are ignored.
    pub fn sort(&mut self, column: usize) -> Result<()> {
        let key = match self.column_mut(column)?.sort_key() {
            Some(key) => key.to_string(),
            None => {
                log::debug!("column {} has no sort key, ignoring sort", column);
                return Ok(());
            }
        };

        if self.order.contains(&key) {
            self.order.toggle_direction();
        } else {
            self.order.replace(key);
        }
        self.columns.mark_sorted(column, self.order.is_ascending());
        self.changed(Input::SortOrder);
        Ok(())
    }

    /// Picks a page size from [`page_size_values`](Self::page_size_values).
    pub fn change_page_size(&mut self, index: usize) -> Result<()> {
        let values = &self.config.page_size_values;
        let page_size = *values
            .get(index)
            .ok_or_else(|| TableError::page_size_out_of_range(index, values.len()))?;
        self.set_page_size(page_size);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.changed(Input::CurrentPage);
    }

    /// Goes to page 1. Returns whether anything happened.
    pub fn goto_first(&mut self) -> bool {
        if !self.goto_back_enabled() {
            return false;
        }
        self.set_current_page(1);
        true
    }

    /// Goes back one page. Returns whether anything happened.
    pub fn goto_prev(&mut self) -> bool {
        if !self.goto_back_enabled() {
            return false;
        }
        self.set_current_page(self.current_page - 1);
        true
    }

    /// Goes forward one page. Returns whether anything happened.
    pub fn goto_next(&mut self) -> bool {
        if !self.goto_forward_enabled() {
            return false;
        }
        let shown_before = self
            .page_size
            .saturating_mul(self.current_page.saturating_sub(1));
        if self.arranged_len() <= shown_before {
            return false;
        }
        self.set_current_page(self.current_page + 1);
        true
    }

    /// Goes to the last page. Returns whether anything happened.
    pub fn goto_last(&mut self) -> bool {
        if !self.goto_forward_enabled() {
            return false;
        }
        self.set_current_page(self.pages_count());
        true
    }

    /// Goes to `page` without any range check.
    pub fn goto_custom_page(&mut self, page: usize) {
        self.set_current_page(page);
    }

    #[cfg(test)]
    pub(crate) fn pipeline_matches_fresh_run(&self) -> bool {
        let inputs = PipelineInputs {
            columns: self.columns.as_slice(),
            criteria: &self.criteria,
            order: &self.order,
            page_size: self.page_size,
            current_page: self.current_page,
        };
        Pipeline::new(&self.data, &inputs) == self.pipeline
    }
}
