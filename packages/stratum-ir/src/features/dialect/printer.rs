//! Indented text rendering of programs
//!
//! ```text
//! x = 1u
//! while x < 3u
//!   x = (x + 1u)
//! end
//! ```

use crate::features::operation::domain::{Program, Sequence};
use crate::features::operation::ports::{Operation, Structure};
use std::fmt;

const INDENT: &str = "  ";

/// Operations with a one-line rendering
pub trait Printable: Operation {
    /// The operation's own line, without its regions
    fn header(&self) -> String;
}

fn write_sequence<Op: Printable>(
    f: &mut fmt::Formatter<'_>,
    sequence: &Sequence<Op>,
    depth: usize,
) -> fmt::Result {
    for op in sequence {
        write_op(f, op, depth)?;
    }
    Ok(())
}

fn write_line(f: &mut fmt::Formatter<'_>, depth: usize, text: &str) -> fmt::Result {
    writeln!(f, "{}{}", INDENT.repeat(depth), text)
}

fn write_op<Op: Printable>(f: &mut fmt::Formatter<'_>, op: &Op, depth: usize) -> fmt::Result {
    write_line(f, depth, &op.header())?;
    match op.structure() {
        Structure::Branch {
            then_body,
            else_body,
        } => {
            write_sequence(f, then_body, depth + 1)?;
            if !else_body.is_empty() {
                write_line(f, depth, "else")?;
                write_sequence(f, else_body, depth + 1)?;
            }
            write_line(f, depth, "end")
        }
        Structure::Loop { body } | Structure::Transparent { body } => {
            write_sequence(f, body, depth + 1)?;
            write_line(f, depth, "end")
        }
        Structure::Atomic | Structure::Terminate | Structure::Break => Ok(()),
    }
}

impl<Op: Printable> fmt::Display for Sequence<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, self, 0)
    }
}

impl<Op: Printable> fmt::Display for Program<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, self.body(), 0)
    }
}
