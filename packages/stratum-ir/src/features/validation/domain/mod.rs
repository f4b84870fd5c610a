pub mod report;

pub use report::ValidationReport;
