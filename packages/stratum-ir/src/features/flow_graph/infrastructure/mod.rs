//! Flow-point computations

pub mod flow_points;

pub use flow_points::{
    break_target, entry, exit, exit_of, loop_header, sequence_entry, try_exit_of,
};
pub(crate) use flow_points::successor;
