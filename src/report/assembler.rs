use crate::operation::Operation;
use crate::report::masking::{format_date, mask_destination, mask_source};

/// Renders one four-line block for a selected operation.
pub fn render_block(op: &Operation) -> String {
    let amount = op.amount();

    format!(
        "{} {}\n{} -> {}\n{} {}\n\n",
        format_date(op.timestamp()),
        op.description(),
        mask_source(op.source()),
        mask_destination(op.destination()),
        amount.amount(),
        amount.currency().code()
    )
}

/// Concatenates the blocks of all operations in the order given.
pub fn assemble(operations: &[Operation]) -> String {
    operations.iter().map(render_block).collect()
}
