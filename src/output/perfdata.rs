use crate::output::float::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single graphable measurement.
///
/// Serializes as `name=VALUEunit;warn;crit;min;max`. Absent thresholds leave
/// their field empty but keep the semicolon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfData {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl PerfData {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            ..Self::default()
        }
    }

    pub fn with_warning(mut self, v: f64) -> Self {
        self.warning = Some(v);
        self
    }

    pub fn with_critical(mut self, v: f64) -> Self {
        self.critical = Some(v);
        self
    }

    pub fn with_minimum(mut self, v: f64) -> Self {
        self.minimum = Some(v);
        self
    }

    pub fn with_maximum(mut self, v: f64) -> Self {
        self.maximum = Some(v);
        self
    }

    pub fn set_warning(&mut self, v: f64) {
        self.warning = Some(v);
    }

    pub fn set_critical(&mut self, v: f64) {
        self.critical = Some(v);
    }

    pub fn set_minimum(&mut self, v: f64) {
        self.minimum = Some(v);
    }

    pub fn set_maximum(&mut self, v: f64) {
        self.maximum = Some(v);
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}{}", self.name, Decimal(self.value), self.unit)?;
        for field in [self.warning, self.critical, self.minimum, self.maximum] {
            f.write_str(";")?;
            if let Some(v) = field {
                write!(f, "{}", Decimal(v))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn test_empty() {
        assert_eq!(PerfData::default().to_string(), "=0;;;;");
    }

    #[test]
    fn test_all_integer_values() {
        let p = PerfData::new("value-1", 42.0, units::KILOBYTES)
            .with_warning(10.0)
            .with_critical(20.0)
            .with_minimum(0.0)
            .with_maximum(100.0);
        assert_eq!(p.to_string(), "value-1=42KB;10;20;0;100");
    }

    #[test]
    fn test_all_floating_values() {
        let p = PerfData::new("value-1", 42.1, units::KILOBYTES)
            .with_warning(10.1)
            .with_critical(20.1)
            .with_minimum(0.1)
            .with_maximum(100.1);
        assert_eq!(p.to_string(), "value-1=42.1KB;10.1;20.1;0.1;100.1");
    }

    #[test]
    fn test_partial_thresholds_keep_delimiters() {
        let p = PerfData::new("time", 0.5, units::SECONDS).with_critical(2.0);
        assert_eq!(p.to_string(), "time=0.5s;;2;;");

        let p = PerfData::new("used", 7.0, units::PERCENTAGE).with_maximum(100.0);
        assert_eq!(p.to_string(), "used=7%;;;;100");
    }

    #[test]
    fn test_zero_threshold_is_not_absent() {
        let p = PerfData::new("x", 1.0, units::NONE).with_warning(0.0);
        assert_eq!(p.to_string(), "x=1;0;;;");
    }

    #[test]
    fn test_unit_is_opaque() {
        let p = PerfData::new("q", -3.0, "widgets");
        assert_eq!(p.to_string(), "q=-3widgets;;;;");
    }

    #[test]
    fn test_extreme_magnitudes() {
        let p = PerfData::new("tiny", 0.0000000001, units::NONE).with_maximum(12345678910.0);
        assert_eq!(p.to_string(), "tiny=0.0000000001;;;;12345678910");
    }

    #[test]
    fn test_setters() {
        let mut p = PerfData::default();
        assert_eq!(p.warning, None);
        p.set_warning(10.0);
        assert_eq!(p.warning, Some(10.0));

        assert_eq!(p.critical, None);
        p.set_critical(10.0);
        assert_eq!(p.critical, Some(10.0));

        assert_eq!(p.minimum, None);
        p.set_minimum(10.0);
        assert_eq!(p.minimum, Some(10.0));

        assert_eq!(p.maximum, None);
        p.set_maximum(10.0);
        assert_eq!(p.maximum, Some(10.0));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let p: PerfData = serde_json::from_str(r#"{"name":"rta","value":1.5,"unit":"ms"}"#).unwrap();
        assert_eq!(p, PerfData::new("rta", 1.5, units::MILLISECONDS));
        assert_eq!(p.to_string(), "rta=1.5ms;;;;");
    }
}
