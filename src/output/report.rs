use crate::output::perfdata::PerfData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full plugin output: a summary line, optional long-output lines and
/// performance data.
///
/// The first metric rides on the summary line after ` | `. Any further
/// metrics follow the long output, the first of them attached to the last
/// detail line with another ` | `.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub summary: String,
    pub details: Vec<String>,
    pub metrics: Vec<PerfData>,
}

/// What is left to print once the summary line is written.
enum Tail<'a> {
    NoMetrics,
    Consumed,
    Remaining(&'a [PerfData]),
}

impl Report {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    pub fn with_metric(mut self, metric: PerfData) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn push_detail(&mut self, line: impl Into<String>) {
        self.details.push(line.into());
    }

    pub fn push_metric(&mut self, metric: PerfData) {
        self.metrics.push(metric);
    }
}

fn write_lines<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)?;

        let tail = match self.metrics.split_first() {
            None => Tail::NoMetrics,
            Some((first, rest)) => {
                write!(f, " | {}", first)?;
                if rest.is_empty() {
                    Tail::Consumed
                } else {
                    Tail::Remaining(rest)
                }
            }
        };
        f.write_str("\n")?;

        if !self.details.is_empty() {
            write_lines(f, &self.details)?;
            match tail {
                Tail::Remaining(_) => f.write_str(" | ")?,
                Tail::NoMetrics | Tail::Consumed => f.write_str("\n")?,
            }
        }

        if let Tail::Remaining(rest) = tail {
            write_lines(f, rest)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    fn metric(name: &str, value: f64) -> PerfData {
        PerfData::new(name, value, units::KILOBYTES)
            .with_warning(10.0)
            .with_critical(20.0)
            .with_minimum(0.0)
            .with_maximum(100.0)
    }

    fn two_details(summary: &str) -> Report {
        Report::new(summary).with_detail("Line 2").with_detail("Line 3")
    }

    #[test]
    fn test_empty() {
        assert_eq!(Report::default().to_string(), "\n");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(Report::new("Line 1").to_string(), "Line 1\n");
    }

    #[test]
    fn test_multiple_lines() {
        assert_eq!(two_details("Line 1").to_string(), "Line 1\nLine 2\nLine 3\n");
    }

    #[test]
    fn test_single_line_with_single_metric() {
        let r = Report::new("Line 1").with_metric(metric("value-1", 42.0));
        assert_eq!(r.to_string(), "Line 1 | value-1=42KB;10;20;0;100\n");
    }

    #[test]
    fn test_single_line_with_multiple_metrics() {
        let r = Report::new("Line 1")
            .with_metric(metric("value-1", 42.0))
            .with_metric(metric("value-2", 50.0));
        assert_eq!(
            r.to_string(),
            "Line 1 | value-1=42KB;10;20;0;100\nvalue-2=50KB;10;20;0;100\n"
        );
    }

    #[test]
    fn test_multiple_lines_with_single_metric() {
        let r = two_details("Line 1").with_metric(metric("value-1", 42.0));
        assert_eq!(r.to_string(), "Line 1 | value-1=42KB;10;20;0;100\nLine 2\nLine 3\n");
    }

    #[test]
    fn test_multiple_lines_with_multiple_metrics() {
        let r = two_details("Line 1")
            .with_metric(metric("value-1", 42.0))
            .with_metric(metric("value-2", 50.0));
        assert_eq!(
            r.to_string(),
            "Line 1 | value-1=42KB;10;20;0;100\nLine 2\nLine 3 | value-2=50KB;10;20;0;100\n"
        );
    }

    #[test]
    fn test_remaining_metrics_are_not_pipe_prefixed() {
        let r = Report::new("OK")
            .with_metric(PerfData::new("a", 1.0, units::NONE))
            .with_metric(PerfData::new("b", 2.0, units::NONE))
            .with_metric(PerfData::new("c", 3.0, units::NONE));
        assert_eq!(r.to_string(), "OK | a=1;;;;\nb=2;;;;\nc=3;;;;\n");
    }

    #[test]
    fn test_empty_summary_with_metric() {
        let r = Report::default().with_metric(PerfData::default());
        assert_eq!(r.to_string(), " | =0;;;;\n");
    }

    #[test]
    fn test_details_without_summary() {
        let mut r = Report::default();
        r.push_detail("only detail");
        assert_eq!(r.to_string(), "\nonly detail\n");
    }

    #[test]
    fn test_deterministic() {
        let mut r = two_details("Line 1");
        r.push_metric(metric("value-1", 42.0));
        r.push_metric(metric("value-2", 50.0));
        assert_eq!(r.to_string(), r.to_string());
    }

    #[test]
    fn test_deserialize_defaults() {
        let r: Report = serde_json::from_str(r#"{"summary":"Line 1"}"#).unwrap();
        assert_eq!(r, Report::new("Line 1"));
    }
}
