//! The filter → sort → paginate pipeline.
//!
//! Each stage is a pure function. [`Pipeline`] keeps the output of every stage
//! and reruns only what a change invalidates. Stages declare the inputs they
//! read in [`Stage::deps`]; changing an input reruns the earliest stage that
//! lists it and everything after it.

mod filter;
mod page;
mod sort;

use std::ops::Range;

pub use filter::*;
pub use page::*;
pub use sort::*;

use crate::column::Column;
use crate::model::TableRecord;

/// A piece of table state that feeds the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// The record collection, or values inside it.
    Data,
    /// Column bindings (which properties exist to filter on).
    Columns,
    /// Any column's own filter text.
    ColumnFilters,
    /// The global filter text.
    FilterString,
    /// Whether per-column filters apply.
    FilteringByColumns,
    /// Case sensitivity of filtering.
    IgnoreCase,
    /// Sort keys or direction.
    SortOrder,
    /// Rows per page.
    PageSize,
    /// Current page number.
    CurrentPage,
}

/// One pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Filter,
    Sort,
    Page,
}

impl Stage {
    /// Stages in execution order.
    pub const ALL: [Stage; 3] = [Stage::Filter, Stage::Sort, Stage::Page];

    /// Inputs this stage reads directly.
    pub fn deps(self) -> &'static [Input] {
        match self {
            Stage::Filter => &[
                Input::Data,
                Input::Columns,
                Input::ColumnFilters,
                Input::FilterString,
                Input::FilteringByColumns,
                Input::IgnoreCase,
            ],
            Stage::Sort => &[Input::Data, Input::SortOrder],
            Stage::Page => &[Input::PageSize, Input::CurrentPage],
        }
    }

    /// The first stage that reads `input`.
    pub fn first_reading(input: Input) -> Option<Stage> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.deps().contains(&input))
    }
}

/// Everything the pipeline reads besides the records.
#[derive(Debug, Clone, Copy)]
pub struct PipelineInputs<'a> {
    pub columns: &'a [Column],
    pub criteria: &'a FilterCriteria,
    pub order: &'a SortOrder,
    pub page_size: usize,
    pub current_page: usize,
}

/// Cached stage outputs.
///
/// Outputs are record indices, so records are never copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    filtered: Vec<usize>,
    arranged: Vec<usize>,
    visible: Range<usize>,
}

impl Pipeline {
    /// Runs every stage.
    pub fn new<R: TableRecord>(records: &[R], inputs: &PipelineInputs<'_>) -> Self {
        let mut pipeline = Self::default();
        pipeline.run_from(Stage::Filter, records, inputs);
        pipeline
    }

    /// Reruns the stages affected by a change to `changed`.
    pub fn invalidate<R: TableRecord>(
        &mut self,
        changed: Input,
        records: &[R],
        inputs: &PipelineInputs<'_>,
    ) {
        if let Some(stage) = Stage::first_reading(changed) {
            log::debug!("{:?} changed, rerunning pipeline from {:?}", changed, stage);
            self.run_from(stage, records, inputs);
        }
    }

    /// Runs `first` and every later stage.
    pub fn run_from<R: TableRecord>(
        &mut self,
        first: Stage,
        records: &[R],
        inputs: &PipelineInputs<'_>,
    ) {
        for stage in Stage::ALL.into_iter().filter(|stage| *stage >= first) {
            match stage {
                Stage::Filter => {
                    self.filtered = filter(records, inputs.columns, inputs.criteria);
                }
                Stage::Sort => {
                    self.arranged = sort(records, &self.filtered, inputs.order);
                }
                Stage::Page => {
                    self.visible =
                        page_range(self.arranged.len(), inputs.page_size, inputs.current_page);
                }
            }
        }
    }

    /// Indices of records that passed filtering, in input order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Indices of filtered records in sorted order.
    pub fn arranged(&self) -> &[usize] {
        &self.arranged
    }

    /// Indices of records on the current page.
    pub fn visible(&self) -> &[usize] {
        &self.arranged[self.visible.clone()]
    }
}
