/// Outcome of a successful store call.
///
/// `Empty` means the store answered but held no matching item. It is kept
/// apart from `Found(vec![])` so callers cannot confuse "no rows" with data.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Found(T),
    Empty,
}

impl<T> QueryOutcome<T> {
    /// Converts into an `Option`, mapping `Empty` to `None`.
    pub fn found(self) -> Option<T> {
        match self {
            QueryOutcome::Found(value) => Some(value),
            QueryOutcome::Empty => None,
        }
    }
}

impl<T> QueryOutcome<Vec<T>> {
    /// Wraps a query result set, turning zero items into `Empty`.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Found(items)
        }
    }
}

impl<T> From<Option<T>> for QueryOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => QueryOutcome::Found(value),
            None => QueryOutcome::Empty,
        }
    }
}
