//! Operation ports

pub mod operation;

pub use operation::{
    assert_kind, assert_operation, assert_send_sync, Kind, Operation, OperationExt, Regions, Structure,
};
