//! Sort stage: stable multi-key ordering with one shared direction.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::TableRecord;
use crate::model::Value;
use crate::model::compare_values;

/// Sort direction applied to every active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// `Asc` for `true`, `Desc` for `false`.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Direction::Asc } else { Direction::Desc }
    }

    /// Whether this is ascending.
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Active sort keys and their shared direction.
///
/// # Example
///
/// ```
/// use models_table::pipeline::{Direction, SortOrder};
///
/// let order = SortOrder::by("lastName").then_by("firstName");
/// assert_eq!(order.keys(), ["lastName", "firstName"]);
/// assert_eq!(order.direction(), Direction::Asc);
///
/// let order = order.with_direction(Direction::Desc);
/// assert!(!order.is_ascending());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    keys: Vec<String>,
    direction: Direction,
}

impl SortOrder {
    /// No keys: the input order is kept.
    pub fn none() -> Self {
        Self::default()
    }

    /// Ascending by one key.
    pub fn by(key: impl Into<String>) -> Self {
        Self {
            keys: vec![key.into()],
            direction: Direction::Asc,
        }
    }

    /// Builds an order from keys and an ascending flag.
    pub fn new(keys: Vec<String>, ascending: bool) -> Self {
        Self {
            keys,
            direction: Direction::from_ascending(ascending),
        }
    }

    /// Adds a tie-breaking key.
    pub fn then_by(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Sets the shared direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Active keys in priority order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Shared direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the shared direction is ascending.
    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    /// Whether `key` is one of the active keys.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Whether there is nothing to sort by.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn toggle_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    pub(crate) fn replace(&mut self, key: String) {
        self.keys = vec![key];
        self.direction = Direction::Asc;
    }
}

/// Orders `indices` (positions into `records`) by `order`.
///
/// The sort is stable: records equal on every key keep their relative order.
/// With no keys the indices come back unchanged. Each record's key values are
/// read once up front.
pub fn sort<R: TableRecord>(records: &[R], indices: &[usize], order: &SortOrder) -> Vec<usize> {
    if order.is_empty() {
        return indices.to_vec();
    }

    let mut decorated: Vec<(usize, Vec<Option<Value>>)> = indices
        .iter()
        .map(|&index| {
            let keys = order
                .keys
                .iter()
                .map(|key| records[index].property(key))
                .collect();
            (index, keys)
        })
        .collect();

    decorated.sort_by(|(_, a), (_, b)| compare_keys(a, b, order.direction));

    log::trace!(
        "sorted {} records by {:?} ({:?})",
        decorated.len(),
        order.keys,
        order.direction
    );

    decorated.into_iter().map(|(index, _)| index).collect()
}

fn compare_keys(a: &[Option<Value>], b: &[Option<Value>], direction: Direction) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| compare_values(x.as_ref(), y.as_ref()))
        .find(|ordering| *ordering != Ordering::Equal)
        .map(|ordering| direction.apply(ordering))
        .unwrap_or(Ordering::Equal)
}
