//! Test fixture programs
//!
//! Hand-written programs for the end-to-end scenarios plus proptest
//! strategies generating arbitrary imp programs.

use proptest::prelude::*;
use stratum_ir::dialect::{core, imp};
use stratum_ir::shared::models::{constant, variable, Expression};

/// `a = 1; b = a + 2; c = b * 3`
pub fn fixture_sequential_assignments() -> core::Program {
    core::program(vec![
        core::assign("a", constant(1u64)),
        core::assign("b", Expression::add(variable("a"), constant(2u64))),
        core::assign("c", Expression::mul(variable("b"), constant(3u64))),
    ])
}

/// `if (v == 0) terminate else skip; v = 1`
pub fn fixture_branch_then_assign() -> core::Program {
    core::program(vec![
        core::conditional(
            Expression::eq(variable("v"), constant(0u64)),
            core::terminate(),
            core::skip(),
        ),
        core::assign("v", constant(1u64)),
    ])
}

/// `while (v > 0) skip`
pub fn fixture_sole_loop() -> core::Program {
    core::program(core::while_loop(
        Expression::gt(variable("v"), constant(0u64)),
        core::skip(),
    ))
}

/// `scope(scope(break), skip)`
pub fn fixture_nested_scope_break() -> imp::Program {
    imp::program(imp::scope(vec![
        imp::scope(imp::break_iteration()),
        imp::skip(),
    ]))
}

/// `while (v > 0) { while (v == 0) break }`
pub fn fixture_nested_loops() -> imp::Program {
    imp::program(imp::while_loop(
        Expression::gt(variable("v"), constant(0u64)),
        imp::while_loop(
            Expression::eq(variable("v"), constant(0u64)),
            imp::break_iteration(),
        ),
    ))
}

const NAMES: &[&str] = &["a", "b", "v"];

pub fn arb_condition() -> impl Strategy<Value = Expression> {
    (prop::sample::select(NAMES), 0u64..8)
        .prop_map(|(name, bound)| Expression::lt(variable(name), constant(bound)))
}

/// Arbitrary imp operation, nested up to four levels
pub fn arb_imp_op() -> impl Strategy<Value = imp::Op> {
    let leaf = prop_oneof![
        3 => Just(imp::skip()),
        3 => (prop::sample::select(NAMES), 0u64..8)
            .prop_map(|(name, value)| imp::assign(name, constant(value))),
        1 => Just(imp::terminate()),
        1 => Just(imp::break_iteration()),
    ];

    leaf.prop_recursive(4, 48, 4, |inner| {
        let body = prop::collection::vec(inner, 0..4);
        prop_oneof![
            (arb_condition(), body.clone(), body.clone())
                .prop_map(|(condition, then_ops, else_ops)| {
                    imp::conditional(condition, then_ops, else_ops)
                }),
            (arb_condition(), body.clone())
                .prop_map(|(condition, ops)| imp::while_loop(condition, ops)),
            body.prop_map(|ops| imp::scope(ops)),
        ]
    })
}

pub fn arb_imp_program() -> impl Strategy<Value = imp::Program> {
    prop::collection::vec(arb_imp_op(), 0..5).prop_map(|ops| imp::program(ops))
}
