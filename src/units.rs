//! Unit tags understood by the graphing add-on.
//!
//! The formatter treats units as opaque strings; any other tag is accepted.

pub const NONE: &str = "";

pub const SECONDS: &str = "s";
pub const MILLISECONDS: &str = "ms";
pub const MICROSECONDS: &str = "us";

pub const PERCENTAGE: &str = "%";

pub const BYTES: &str = "B";
pub const KILOBYTES: &str = "KB";
pub const MEGABYTES: &str = "MB";
pub const GIGABYTES: &str = "GB";
pub const TERABYTES: &str = "TB";
pub const PETABYTES: &str = "PB";

pub const COUNTER: &str = "c";
