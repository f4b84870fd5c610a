//! Operation abstraction
//!
//! - domain/ - shared kinds and the sequencing containers
//! - ports/  - the capability contract (`Operation`, `Kind`, `OperationExt`)

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
