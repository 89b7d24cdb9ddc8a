//! User intents and their dispatch onto a table.

use crate::model::TableRecord;
use crate::model::Value;
use crate::table::ModelsTable;

/// Something the user did to the table.
///
/// Column-scoped actions address columns by their index in
/// [`ModelsTable::columns`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Flip one column's visibility.
    ToggleHidden(usize),
    /// Show every column.
    ShowAllColumns,
    /// Hide every column.
    HideAllColumns,
    /// Put column visibility back to how it was set up.
    RestoreDefaultVisibility,
    /// Go to page 1.
    GotoFirst,
    /// Go back one page.
    GotoPrev,
    /// Go forward one page.
    GotoNext,
    /// Go to the last page.
    GotoLast,
    /// Go to a page, unchecked.
    GotoCustomPage(usize),
    /// Header click on a column.
    Sort(usize),
    /// Pick a page size by its position in the page-size options.
    ChangePageSize(usize),
    /// Type into the global search field.
    Filter(String),
    /// Type into a column's filter field.
    FilterColumn { column: usize, text: String },
    /// A caller-defined row or column action, passed back to the host.
    Send { name: String, args: Vec<Value> },
}

/// A caller-defined action the table does not handle itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedAction {
    /// Action name chosen by the host.
    pub name: String,
    /// Arguments, typically the clicked record's values.
    pub args: Vec<Value>,
}

/// Outcome of [`ModelsTable::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// The action changed (or re-confirmed) table state.
    Applied,
    /// The action was not applicable, e.g. "Next" on the last page or an
    /// unknown column index.
    Ignored,
    /// The host should handle this action.
    Forwarded(ForwardedAction),
}

impl ActionResult {
    fn from_applied(applied: bool) -> Self {
        if applied {
            ActionResult::Applied
        } else {
            ActionResult::Ignored
        }
    }

    /// Whether the table handled the action.
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionResult::Applied)
    }
}

impl<R: TableRecord> ModelsTable<R> {
    /// Applies one user action.
    ///
    /// Mistakes such as a bad column index are logged and reported as
    /// [`ActionResult::Ignored`] instead of failing.
    ///
    /// # Example
    ///
    /// ```
    /// use models_table::{Action, ActionResult, ColumnSpec, ModelsTable, TableConfig};
    /// use models_table::model::Record;
    ///
    /// let records = vec![Record::new().set("age", 30), Record::new().set("age", 25)];
    /// let config = TableConfig::default().with_columns(vec![ColumnSpec::property("age")]);
    /// let mut table = ModelsTable::new(records, config);
    ///
    /// assert_eq!(table.dispatch(Action::Sort(0)), ActionResult::Applied);
    /// assert_eq!(table.dispatch(Action::GotoNext), ActionResult::Ignored);
    /// ```
    pub fn dispatch(&mut self, action: Action) -> ActionResult {
        log::debug!("dispatching {:?}", action);

        let outcome = match action {
            Action::ToggleHidden(column) => self.toggle_hidden(column).map(|_| true),
            Action::ShowAllColumns => {
                self.show_all_columns();
                Ok(true)
            }
            Action::HideAllColumns => {
                self.hide_all_columns();
                Ok(true)
            }
            Action::RestoreDefaultVisibility => {
                self.restore_default_visibility();
                Ok(true)
            }
            Action::GotoFirst => Ok(self.goto_first()),
            Action::GotoPrev => Ok(self.goto_prev()),
            Action::GotoNext => Ok(self.goto_next()),
            Action::GotoLast => Ok(self.goto_last()),
            Action::GotoCustomPage(page) => {
                self.goto_custom_page(page);
                Ok(true)
            }
            Action::Sort(column) => self.sort(column).map(|_| true),
            Action::ChangePageSize(index) => self.change_page_size(index).map(|_| true),
            Action::Filter(text) => {
                self.set_filter_string(text);
                Ok(true)
            }
            Action::FilterColumn { column, text } => {
                self.set_column_filter(column, text).map(|_| true)
            }
            Action::Send { name, args } => {
                return ActionResult::Forwarded(ForwardedAction { name, args });
            }
        };

        match outcome {
            Ok(applied) => ActionResult::from_applied(applied),
            Err(e) => {
                log::warn!("ignoring table action: {}", e);
                ActionResult::Ignored
            }
        }
    }
}
