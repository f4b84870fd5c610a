//! Custom assertions for flow-point verification

use stratum_ir::features::flow_graph::{exit_of, Context};
use stratum_ir::features::operation::{Operation, OperationExt, Sequence};
use stratum_ir::shared::models::ProgramPoint;

/// Assert that every falling-through element of `context`'s sequence
/// flows into the next element's entry
pub fn assert_sequencing<Op: Operation + std::fmt::Debug>(context: &Context<'_, Op>) {
    let sequence: &Sequence<Op> = context.sequence();
    for pair in sequence.as_slice().windows(2) {
        if pair[0].falls_through() {
            assert_eq!(
                exit_of(context, &pair[0]),
                Some(pair[1].entry()),
                "Expected {:?} to flow into {:?}",
                pair[0].kind_name(),
                pair[1].kind_name()
            );
        }
    }
}

/// Assert that `op` completes into `expected`
pub fn assert_flows_to<'a, Op: Operation>(
    context: &Context<'a, Op>,
    op: &'a Op,
    expected: ProgramPoint<'a>,
) {
    assert_eq!(
        exit_of(context, op),
        Some(expected),
        "Unexpected successor for {} operation",
        op.kind_name()
    );
}

/// Assert that `op` never falls through
pub fn assert_no_fallthrough<'a, Op: Operation>(context: &Context<'a, Op>, op: &'a Op) {
    assert!(
        exit_of(context, op).is_none(),
        "Expected {} operation to have no successor",
        op.kind_name()
    );
}
