pub mod escape;

pub use escape::{escape, sequence_escapes};
