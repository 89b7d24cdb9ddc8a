//! Error types

/// Errors raised by table operations that take caller-supplied indices or
/// parse caller-supplied input.
///
/// The filter/sort/paginate pipeline itself never fails. These errors only
/// cover mistakes at the embedding boundary, such as clicking a column that
/// does not exist.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A column index does not refer to a configured column.
    #[error("Column {index} out of range (table has {len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },

    /// A page-size selection index does not refer to a configured page size.
    #[error("Page size option {index} out of range ({len} options configured)")]
    PageSizeOutOfRange { index: usize, len: usize },

    /// Records, columns or configuration could not be parsed.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    /// Creates a new column out-of-range error.
    pub fn column_out_of_range(index: usize, len: usize) -> Self {
        Self::ColumnOutOfRange { index, len }
    }

    /// Creates a new page-size out-of-range error.
    pub fn page_size_out_of_range(index: usize, len: usize) -> Self {
        Self::PageSizeOutOfRange { index, len }
    }
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
