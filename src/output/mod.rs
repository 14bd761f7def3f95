pub mod float;
pub mod perfdata;
pub mod report;

pub use float::{format_float, Decimal};
pub use perfdata::PerfData;
pub use report::Report;
