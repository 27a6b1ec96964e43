use crate::operation::Operation;

/// Keeps executed operations, newest first, at most `count` of them.
///
/// The sort is stable: operations sharing a timestamp stay in input order.
/// A `count` of zero or less selects nothing.
pub fn select_recent(operations: Vec<Operation>, count: i64) -> Vec<Operation> {
    if count <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(count).unwrap_or(usize::MAX);

    let mut executed: Vec<Operation> = operations
        .into_iter()
        .filter(|op| op.state().is_executed())
        .collect();

    executed.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    executed.truncate(limit);

    executed
}
