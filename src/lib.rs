//! Plain-text output for monitoring plugins.
//!
//! A plugin builds a [`Report`] (summary line, long-output lines and
//! [`PerfData`] points) and prints it; `Display` produces the exact layout a
//! monitoring host and its graphing add-on parse.
//!
//! [`config`] and [`monitor`] back the bundled `nagios-report` binary's
//! built-in host checks; plugins only need [`output`], [`units`] and
//! [`status`].

pub mod config;
pub mod error;
pub mod monitor;
pub mod output;
pub mod status;
pub mod units;

pub use error::{PluginError, Result};
pub use output::{format_float, Decimal, PerfData, Report};
pub use status::{CheckResult, HostStatus, ServiceStatus};
