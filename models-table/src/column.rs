//! Column descriptors and the column registry.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// Caller-side column description, as passed to the table.
///
/// Only the fields a caller sets are present. Everything else is derived
/// when the table is built (see [`Column::from_spec`]).
///
/// # Examples
///
/// ```
/// use models_table::ColumnSpec;
///
/// let columns = vec![
///     ColumnSpec::property("firstName"),
///     ColumnSpec::property("age").title("Age (years)"),
///     ColumnSpec::property("createdAt").sorted_by("createdTimestamp"),
///     ColumnSpec::display("Actions").template("row-actions"),
/// ];
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Record property this column shows, sorts and filters by.
    pub property_name: Option<String>,
    /// Header label. Derived from `property_name` when missing.
    pub title: Option<String>,
    /// Sort key overriding `property_name`.
    pub sorted_by: Option<String>,
    /// Initial visibility.
    pub is_hidden: bool,
    /// Initial per-column filter text.
    pub filter_string: Option<String>,
    /// Whether the column takes part in per-column filtering.
    ///
    /// Only consulted when `filter_string` is supplied too, and then off
    /// unless set. Without a filter string, bound columns filter.
    pub use_filter: Option<bool>,
    /// Opaque cell template name for the host renderer.
    pub template: Option<String>,
}

impl ColumnSpec {
    /// A column bound to a record property.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            property_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// A display-only column (buttons, custom cells) with a fixed title.
    pub fn display(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the header label.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sort by a different key than the displayed property.
    pub fn sorted_by(mut self, key: impl Into<String>) -> Self {
        self.sorted_by = Some(key.into());
        self
    }

    /// Start hidden.
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    /// Start with a per-column filter text.
    pub fn filter(mut self, text: impl Into<String>) -> Self {
        self.filter_string = Some(text.into());
        self
    }

    /// Set whether the column takes part in per-column filtering.
    pub fn use_filter(mut self, enabled: bool) -> Self {
        self.use_filter = Some(enabled);
        self
    }

    /// Set the cell template name.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// A fully set-up table column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Record property this column shows, sorts and filters by.
    pub property_name: Option<String>,
    /// Header label.
    pub title: String,
    /// Sort key overriding `property_name`.
    pub sorted_by: Option<String>,
    /// Current visibility.
    pub is_hidden: bool,
    /// Visibility captured at setup, used by "restore defaults".
    pub default_visible: bool,
    /// Per-column filter text.
    pub filter_string: String,
    /// Whether the column takes part in per-column filtering.
    pub use_filter: bool,
    /// The table is currently sorted ascending by this column.
    pub sort_asc: bool,
    /// The table is currently sorted descending by this column.
    pub sort_desc: bool,
    /// Opaque cell template name for the host renderer.
    pub template: Option<String>,
}

impl Column {
    /// Builds a column from its description, deriving everything missing.
    pub fn from_spec(spec: ColumnSpec) -> Self {
        let (filter_string, use_filter) = match spec.filter_string {
            // A supplied filter text only applies when the flag is set too.
            Some(text) => (text, spec.use_filter.unwrap_or(false)),
            None => (String::new(), spec.property_name.is_some()),
        };

        let title = match (spec.title, &spec.property_name) {
            (Some(title), _) => title,
            (None, Some(property)) => title_from_property(property),
            (None, None) => String::new(),
        };

        Self {
            property_name: spec.property_name,
            title,
            sorted_by: spec.sorted_by,
            is_hidden: spec.is_hidden,
            default_visible: !spec.is_hidden,
            filter_string,
            use_filter,
            sort_asc: false,
            sort_desc: false,
            template: spec.template,
        }
    }

    /// Always the negation of `is_hidden`.
    pub fn is_visible(&self) -> bool {
        !self.is_hidden
    }

    /// The key this column sorts by: `sorted_by`, else `property_name`.
    pub fn sort_key(&self) -> Option<&str> {
        self.sorted_by
            .as_deref()
            .filter(|key| !key.is_empty())
            .or(self.property_name.as_deref().filter(|key| !key.is_empty()))
    }

    /// Whether the column is bound to a record property.
    pub fn is_bound(&self) -> bool {
        self.property_name.is_some()
    }
}

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex"));
static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ _]").expect("static regex"));

/// Derives a header label from a property name.
///
/// `firstName` → `First name`, `created_at` → `Created at`,
/// `zip-code` → `Zip code`.
pub fn title_from_property(property: &str) -> String {
    let decamelized = CAMEL_BOUNDARY.replace_all(property, "${1}_${2}").to_lowercase();
    let dasherized = WORD_SEPARATOR.replace_all(&decamelized, "-");
    let spaced = dasherized.replace('-', " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The table's columns plus the operations that act on all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl ColumnRegistry {
    /// Sets up columns from their descriptions.
    pub fn new(specs: impl IntoIterator<Item = ColumnSpec>) -> Self {
        Self {
            columns: specs.into_iter().map(Column::from_spec).collect(),
        }
    }

    /// All columns in display order.
    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over all columns.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Iterate over visible columns with their indices.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.is_visible())
    }

    /// True iff there is at least one column and every column is hidden.
    pub fn all_hidden(&self) -> bool {
        !self.columns.is_empty() && self.columns.iter().all(|c| c.is_hidden)
    }

    /// Flip one column's visibility. Returns `false` for a bad index.
    pub fn toggle_hidden(&mut self, index: usize) -> bool {
        match self.columns.get_mut(index) {
            Some(column) => {
                column.is_hidden = !column.is_hidden;
                true
            }
            None => false,
        }
    }

    /// Set the same visibility on every column.
    pub fn set_all_hidden(&mut self, hidden: bool) {
        for column in &mut self.columns {
            column.is_hidden = hidden;
        }
    }

    /// Put every column back to the visibility it had at setup.
    pub fn restore_default_visibility(&mut self) {
        for column in &mut self.columns {
            column.is_hidden = !column.default_visible;
        }
    }

    /// Move the sort indicator to one column.
    ///
    /// Clears both flags everywhere, then sets them on `index` according to
    /// `ascending`.
    pub(crate) fn mark_sorted(&mut self, index: usize, ascending: bool) {
        for column in &mut self.columns {
            column.sort_asc = false;
            column.sort_desc = false;
        }
        if let Some(column) = self.columns.get_mut(index) {
            column.sort_asc = ascending;
            column.sort_desc = !ascending;
        }
    }
}

impl<'a> IntoIterator for &'a ColumnRegistry {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
