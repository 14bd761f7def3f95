use crate::error::{PluginError, Result};
use crate::output::PerfData;
use crate::status::ServiceStatus;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub check: CheckKind,
    pub thresholds: Thresholds,
    pub verbose: bool,
}

/// Parse a threshold value (e.g., "80", "80%", "0.75")
pub fn parse_threshold(s: &str) -> Result<f64> {
    let s = s.trim();
    let num_str = s.strip_suffix('%').unwrap_or(s).trim_end();

    let value: f64 = num_str
        .parse()
        .map_err(|_| PluginError::InvalidThreshold(s.to_string()))?;

    if !value.is_finite() {
        return Err(PluginError::InvalidThreshold(s.to_string()));
    }

    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Cpu,    // Average CPU utilization (%)
    Memory, // Used physical memory (%)
    Load,   // Load average per CPU
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Cpu => "CPU",
            CheckKind::Memory => "MEMORY",
            CheckKind::Load => "LOAD",
        }
    }
}

impl std::str::FromStr for CheckKind {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(CheckKind::Cpu),
            "memory" | "mem" => Ok(CheckKind::Memory),
            "load" => Ok(CheckKind::Load),
            _ => Err(PluginError::InvalidCheck(s.to_string())),
        }
    }
}

/// Upper bounds for a measured value. Either bound may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
}

impl Thresholds {
    pub fn new(warning: Option<f64>, critical: Option<f64>) -> Result<Self> {
        if let (Some(warning), Some(critical)) = (warning, critical) {
            if critical < warning {
                return Err(PluginError::InvertedThresholds { warning, critical });
            }
        }
        Ok(Self { warning, critical })
    }

    pub fn evaluate(&self, value: f64) -> ServiceStatus {
        if self.critical.is_some_and(|c| value >= c) {
            ServiceStatus::Critical
        } else if self.warning.is_some_and(|w| value >= w) {
            ServiceStatus::Warning
        } else {
            ServiceStatus::Ok
        }
    }

    /// Copy the bounds onto a datum so the graphing side can draw them.
    pub fn apply(&self, mut data: PerfData) -> PerfData {
        data.warning = self.warning;
        data.critical = self.critical;
        data
    }

    /// Both bounds multiplied by `factor` (per-CPU load limits to totals).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            warning: self.warning.map(|w| w * factor),
            critical: self.critical.map(|c| c * factor),
        }
    }
}
