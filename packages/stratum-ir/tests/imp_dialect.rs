//! Imp dialect: scopes and break_iteration

mod common;

use common::*;
use pretty_assertions::assert_eq;
use stratum_ir::dialect::imp::{self, BreakIteration, ImpDialect, Op, Scope, WhileLoop};
use stratum_ir::features::dialect::Dialect;
use stratum_ir::features::flow_graph::{exit_of, sequence_entry};
use stratum_ir::features::operation::{
    assert_kind, assert_operation, Container, OperationExt, Sequence,
};
use stratum_ir::shared::models::{constant, variable, Expression};

const _: () = {
    assert_operation::<Op>();
    assert_kind::<Scope, Op>();
    assert_kind::<BreakIteration, Op>();
    assert_kind::<imp::Conditional, Op>();
};

#[test]
fn test_scope_entry_forwards_to_first_child() {
    let program = ImpBuilder::new()
        .scope(|s| s.scope(|s| s.assign("x", 1)).skip())
        .build();
    let outer = program.front().unwrap();
    let outer_body = &outer.unwrap::<Scope>().body;
    let inner_body = &outer_body[0].unwrap::<Scope>().body;

    assert_eq!(program.entry(), outer.entry());
    assert_eq!(outer.entry(), outer_body[0].entry());
    assert_eq!(outer_body[0].entry(), inner_body[0].entry());
    assert!(inner_body[0].isa::<imp::Assign>());
}

#[test]
fn test_scope_bubbles_to_sibling() {
    let program = ImpBuilder::new()
        .scope(|s| s.assign("x", 1).assign("y", 2))
        .assign("z", 3)
        .build();
    let context = program.context();
    let scope = &program.body()[0];
    let body = &scope.unwrap::<Scope>().body;
    let scope_context = context.enter(scope, body);

    assert_sequencing(&scope_context);
    assert_flows_to(&scope_context, &body[1], program.body()[1].entry());
    assert_flows_to(&context, scope, program.body()[1].entry());
}

#[test]
fn test_empty_scope() {
    let program = imp::program(vec![imp::scope(Sequence::new()), imp::skip()]);
    let context = program.context();
    let scope = &program.body()[0];
    let body = &scope.unwrap::<Scope>().body;

    // An empty scope is a no-op point of its own
    assert_eq!(scope.entry(), sequence_entry(body));
    assert_eq!(body.entry(), body.exit());
    assert_eq!(context.enter(scope, body).exit(), program.body()[1].entry());
    assert_eq!(exit_of(&context, scope), Some(program.body()[1].entry()));
}

#[test]
fn test_break_in_scope_inside_loop() {
    let condition = Expression::gt(variable("v"), constant(0u64));
    let program = ImpBuilder::new()
        .while_loop(condition, |b| b.scope(|s| s.break_iteration()).skip())
        .assign("done", 1)
        .build();
    let context = program.context();
    let looped = &program.body()[0];
    let body = &looped.unwrap::<WhileLoop>().body;
    let scope_context = context
        .enter(looped, body)
        .enter(&body[0], &body[0].unwrap::<Scope>().body);

    assert_eq!(scope_context.depth(), 2);
    assert!(body[0].escape());
    assert!(!looped.escape());
    assert_eq!(
        stratum_ir::break_target(&scope_context),
        Some(program.body()[1].entry())
    );
    assert_eq!(stratum_ir::loop_header(&scope_context), Some(looped.entry()));
}

#[test]
fn test_dialect_catalog() {
    assert_eq!(ImpDialect::NAME, "imp");
    assert_eq!(ImpDialect::KINDS.len(), 7);
    assert!(ImpDialect::KINDS.contains(&"scope"));
    assert!(ImpDialect::KINDS.contains(&"break_iteration"));
}

#[test]
fn test_display_nested() {
    let program = ImpBuilder::new()
        .while_loop(Expression::lt(variable("i"), constant(3u64)), |b| {
            b.conditional(
                Expression::eq(variable("i"), constant(1u64)),
                |t| t.break_iteration(),
                |e| e,
            )
            .assign("i", 2)
        })
        .build();
    assert_eq!(
        program.to_string(),
        "while i < 3u\n  if i == 1u\n    break\n  end\n  i = 2u\nend\n"
    );
}
