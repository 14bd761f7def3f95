use crate::error::{PluginError, Result};
use crate::output::Report;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Service check result, ordered so that `max` picks the worse of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceStatus::Ok => 0,
            ServiceStatus::Warning => 1,
            ServiceStatus::Critical => 2,
            ServiceStatus::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Ok => "OK",
            ServiceStatus::Warning => "WARNING",
            ServiceStatus::Critical => "CRITICAL",
            ServiceStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ok" | "0" => Ok(ServiceStatus::Ok),
            "warning" | "warn" | "1" => Ok(ServiceStatus::Warning),
            "critical" | "crit" | "2" => Ok(ServiceStatus::Critical),
            "unknown" | "3" => Ok(ServiceStatus::Unknown),
            _ => Err(PluginError::InvalidStatus(s.to_string())),
        }
    }
}

/// Host check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Up,
    Down,
}

impl HostStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            HostStatus::Up => 0,
            HostStatus::Down => 2,
        }
    }
}

/// A finished check: the status that becomes the exit code plus the report
/// printed on stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckResult {
    pub status: ServiceStatus,
    #[serde(flatten)]
    pub report: Report,
}

impl CheckResult {
    pub fn new(status: ServiceStatus, report: Report) -> Self {
        Self { status, report }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// Read a JSON check result (status, summary, details, metrics).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(std::fs::File::open(path)?)
    }
}
