//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnSpec;
use crate::messages::CustomMessages;

/// Input properties of a table.
///
/// Controls the initial view state, which features the host should offer,
/// and how labels read. Records are passed separately.
///
/// # Example
///
/// ```
/// use models_table::{ColumnSpec, TableConfig};
///
/// let config = TableConfig::default()
///     .with_columns(vec![ColumnSpec::property("name"), ColumnSpec::property("age")])
///     .with_page_size(25)
///     .with_filtering_ignore_case(true);
/// ```
///
/// Configuration files use the same camelCase keys hosts already know:
///
/// ```
/// use models_table::TableConfig;
///
/// let config: TableConfig = serde_json::from_str(r#"{
///     "columns": [{"propertyName": "name"}],
///     "pageSize": 25,
///     "pageSizeValues": [25, 50],
///     "customMessages": {"searchLabel": "Find:"}
/// }"#).unwrap();
/// assert_eq!(config.page_size, 25);
/// assert!(config.use_filtering_by_columns);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Column descriptions.
    pub columns: Vec<ColumnSpec>,

    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Page sizes the user can pick from.
    ///
    /// Default: `[10, 25, 50]`
    pub page_size_values: Vec<usize>,

    /// Initial sort keys.
    pub sort_properties: Vec<String>,

    /// Initial sort direction, shared by all sort keys.
    ///
    /// Default: true
    pub sort_ascending: bool,

    /// Initial global filter text.
    pub filter_string: String,

    /// Compare filter text case-insensitively.
    ///
    /// Default: false
    pub filtering_ignore_case: bool,

    /// Apply per-column filter texts.
    ///
    /// Default: true
    pub use_filtering_by_columns: bool,

    /// Offer the global search field.
    pub show_global_filter: bool,

    /// Offer the column visibility dropdown.
    pub show_columns_dropdown: bool,

    /// Show the footer with summary and navigation.
    pub show_table_footer: bool,

    /// Use numbered page links instead of First/Prev/Next/Last.
    ///
    /// Default: false
    pub use_numeric_pagination: bool,

    /// Styling flag passed through to the host.
    pub table_striped: bool,

    /// Styling flag passed through to the host.
    pub table_bordered: bool,

    /// Styling flag passed through to the host.
    pub table_condensed: bool,

    /// Overrides for the message catalog.
    pub custom_messages: CustomMessages,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            page_size: 10,
            page_size_values: vec![10, 25, 50],
            sort_properties: Vec::new(),
            sort_ascending: true,
            filter_string: String::new(),
            filtering_ignore_case: false,
            use_filtering_by_columns: true,
            show_global_filter: true,
            show_columns_dropdown: true,
            show_table_footer: true,
            use_numeric_pagination: false,
            table_striped: true,
            table_bordered: true,
            table_condensed: true,
            custom_messages: CustomMessages::default(),
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the column descriptions.
    pub fn with_columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the rows per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the selectable page sizes.
    pub fn with_page_size_values(mut self, values: Vec<usize>) -> Self {
        self.page_size_values = values;
        self
    }

    /// Sets the initial sort keys and direction.
    pub fn with_sort(mut self, properties: Vec<String>, ascending: bool) -> Self {
        self.sort_properties = properties;
        self.sort_ascending = ascending;
        self
    }

    /// Sets the initial global filter text.
    pub fn with_filter_string(mut self, filter: impl Into<String>) -> Self {
        self.filter_string = filter.into();
        self
    }

    /// Sets case-insensitive filtering.
    pub fn with_filtering_ignore_case(mut self, ignore_case: bool) -> Self {
        self.filtering_ignore_case = ignore_case;
        self
    }

    /// Enables or disables per-column filtering.
    pub fn with_filtering_by_columns(mut self, enabled: bool) -> Self {
        self.use_filtering_by_columns = enabled;
        self
    }

    /// Enables or disables numbered page links.
    pub fn with_numeric_pagination(mut self, enabled: bool) -> Self {
        self.use_numeric_pagination = enabled;
        self
    }

    /// Sets the message overrides.
    pub fn with_custom_messages(mut self, messages: CustomMessages) -> Self {
        self.custom_messages = messages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_size_values, vec![10, 25, 50]);
        assert!(config.sort_ascending);
        assert!(!config.filtering_ignore_case);
        assert!(config.use_filtering_by_columns);
        assert!(!config.use_numeric_pagination);
        assert!(config.table_striped && config.table_bordered && config.table_condensed);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(TableConfig::from_json("[").is_err());
    }
}
