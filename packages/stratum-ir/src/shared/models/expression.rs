//! Expression model shared by all dialects
//!
//! Expressions are immutable value trees. They carry no identity beyond their
//! structure: two expressions are equal iff they are built the same way, and
//! cloning produces an indistinguishable value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal value of a constant expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::Unsigned(value)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Unsigned(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Signed(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Signed(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Unsigned(v) => write!(f, "{}u", v),
            Literal::Signed(v) => write!(f, "{}", v),
            Literal::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Named variable (assignment target or variable read)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable { name }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithmeticKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticKind::Add => "+",
            ArithmeticKind::Sub => "-",
            ArithmeticKind::Mul => "*",
            ArithmeticKind::Div => "/",
            ArithmeticKind::Rem => "%",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(ArithmeticKind::Add),
            "-" => Some(ArithmeticKind::Sub),
            "*" => Some(ArithmeticKind::Mul),
            "/" => Some(ArithmeticKind::Div),
            "%" => Some(ArithmeticKind::Rem),
            _ => None,
        }
    }
}

/// Relational predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Predicate {
    pub fn symbol(&self) -> &'static str {
        match self {
            Predicate::Eq => "==",
            Predicate::Ne => "!=",
            Predicate::Lt => "<",
            Predicate::Le => "<=",
            Predicate::Gt => ">",
            Predicate::Ge => ">=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Predicate::Eq),
            "!=" => Some(Predicate::Ne),
            "<" => Some(Predicate::Lt),
            "<=" => Some(Predicate::Le),
            ">" => Some(Predicate::Gt),
            ">=" => Some(Predicate::Ge),
            _ => None,
        }
    }

    /// Predicate holding exactly when `self` does not
    pub fn negate(&self) -> Self {
        match self {
            Predicate::Eq => Predicate::Ne,
            Predicate::Ne => Predicate::Eq,
            Predicate::Lt => Predicate::Ge,
            Predicate::Le => Predicate::Gt,
            Predicate::Gt => Predicate::Le,
            Predicate::Ge => Predicate::Lt,
        }
    }
}

/// Expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// Literal value: `4u`, `-1`, `true`
    Constant(Literal),

    /// Variable read: `v`
    Variable(Variable),

    /// Arithmetic: `a + b`
    Arithmetic {
        kind: ArithmeticKind,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// Relational: `a == b`
    Relational {
        predicate: Predicate,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Builders
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn constant(value: impl Into<Literal>) -> Expression {
    Expression::Constant(value.into())
}

pub fn variable(name: impl Into<Variable>) -> Expression {
    Expression::Variable(name.into())
}

pub fn arithmetic(kind: ArithmeticKind, lhs: Expression, rhs: Expression) -> Expression {
    Expression::Arithmetic {
        kind,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub fn relational(predicate: Predicate, lhs: Expression, rhs: Expression) -> Expression {
    Expression::Relational {
        predicate,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

impl Expression {
    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        arithmetic(ArithmeticKind::Add, lhs, rhs)
    }

    pub fn sub(lhs: Expression, rhs: Expression) -> Self {
        arithmetic(ArithmeticKind::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Expression, rhs: Expression) -> Self {
        arithmetic(ArithmeticKind::Mul, lhs, rhs)
    }

    pub fn div(lhs: Expression, rhs: Expression) -> Self {
        arithmetic(ArithmeticKind::Div, lhs, rhs)
    }

    pub fn eq(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Eq, lhs, rhs)
    }

    pub fn ne(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Ne, lhs, rhs)
    }

    pub fn lt(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Lt, lhs, rhs)
    }

    pub fn le(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Le, lhs, rhs)
    }

    pub fn gt(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Gt, lhs, rhs)
    }

    pub fn ge(lhs: Expression, rhs: Expression) -> Self {
        relational(Predicate::Ge, lhs, rhs)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }

    pub fn is_relational(&self) -> bool {
        matches!(self, Expression::Relational { .. })
    }

    /// Names of variables read by this expression, in first-occurrence order
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Constant(_) => {}
                Expression::Variable(var) => {
                    if !names.contains(&var.name()) {
                        names.push(var.name());
                    }
                }
                Expression::Arithmetic { lhs, rhs, .. }
                | Expression::Relational { lhs, rhs, .. } => {
                    // rhs first so lhs pops first
                    stack.push(rhs);
                    stack.push(lhs);
                }
            }
        }
        names
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(lit) => write!(f, "{}", lit),
            Expression::Variable(var) => write!(f, "{}", var),
            Expression::Arithmetic { kind, lhs, rhs } => {
                write!(f, "({} {} {})", lhs, kind.symbol(), rhs)
            }
            Expression::Relational {
                predicate,
                lhs,
                rhs,
            } => write!(f, "{} {} {}", lhs, predicate.symbol(), rhs),
        }
    }
}
