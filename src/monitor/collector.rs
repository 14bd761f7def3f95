use crate::config::{CheckConfig, CheckKind, Thresholds};
use crate::monitor::cpu::CpuMetrics;
use crate::monitor::load::LoadMetrics;
use crate::monitor::memory::MemoryMetrics;
use crate::monitor::{CpuMonitor, LoadMonitor, MemoryMonitor};
use crate::output::{Decimal, PerfData, Report};
use crate::status::{CheckResult, ServiceStatus};
use crate::units;
use tracing::debug;

/// Runs the built-in checks and turns their metrics into plugin output
pub struct CheckCollector {
    cpu_monitor: CpuMonitor,
    memory_monitor: MemoryMonitor,
    load_monitor: LoadMonitor,
}

impl CheckCollector {
    pub fn new() -> Self {
        Self {
            cpu_monitor: CpuMonitor::new(),
            memory_monitor: MemoryMonitor::new(),
            load_monitor: LoadMonitor::new(),
        }
    }

    pub fn run(&mut self, config: &CheckConfig) -> CheckResult {
        debug!(check = ?config.check, thresholds = ?config.thresholds, "running check");
        let result = match config.check {
            CheckKind::Cpu => {
                let metrics = self.cpu_monitor.collect();
                cpu_result(&metrics, &config.thresholds, config.verbose)
            }
            CheckKind::Memory => {
                let metrics = self.memory_monitor.collect();
                memory_result(&metrics, &config.thresholds, config.verbose)
            }
            CheckKind::Load => {
                let metrics = self.load_monitor.collect();
                load_result(&metrics, &config.thresholds, config.verbose)
            }
        };
        debug!(status = result.status.label(), "check finished");
        result
    }
}

impl Default for CheckCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn summary(kind: CheckKind, status: ServiceStatus, message: &str) -> String {
    format!("{} {} - {}", kind.name(), status.label(), message)
}

/// Human-readable byte count for detail lines (e.g. "1.5GB").
pub fn human_bytes(bytes: u64) -> String {
    const SCALE: [&str; 6] = [
        units::BYTES,
        units::KILOBYTES,
        units::MEGABYTES,
        units::GIGABYTES,
        units::TERABYTES,
        units::PETABYTES,
    ];
    let mut value = bytes as f64;
    let mut idx = 0;
    while value >= 1024.0 && idx < SCALE.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }
    format!("{}{}", Decimal(round2(value)), SCALE[idx])
}

pub fn cpu_result(metrics: &CpuMetrics, thresholds: &Thresholds, verbose: bool) -> CheckResult {
    let avg = round2(metrics.avg_utilization as f64);
    let status = thresholds.evaluate(avg);

    let mut report = Report::new(summary(
        CheckKind::Cpu,
        status,
        &format!("{}% average utilization", Decimal(avg)),
    ));
    report.push_metric(
        thresholds.apply(PerfData::new("cpu", avg, units::PERCENTAGE).with_minimum(0.0).with_maximum(100.0)),
    );

    if verbose {
        for (idx, util) in metrics.utilization_per_core.iter().enumerate() {
            let util = round2(*util as f64);
            report.push_detail(format!("cpu{}: {}%", idx, Decimal(util)));
            report.push_metric(
                PerfData::new(format!("cpu{}", idx), util, units::PERCENTAGE)
                    .with_minimum(0.0)
                    .with_maximum(100.0),
            );
        }
    }

    CheckResult::new(status, report)
}

pub fn memory_result(metrics: &MemoryMetrics, thresholds: &Thresholds, verbose: bool) -> CheckResult {
    let used_pct = round2(metrics.utilization_percent());
    let status = thresholds.evaluate(used_pct);

    let mut report = Report::new(summary(
        CheckKind::Memory,
        status,
        &format!(
            "{}% used ({} of {})",
            Decimal(used_pct),
            human_bytes(metrics.used_bytes),
            human_bytes(metrics.total_bytes)
        ),
    ));
    report.push_metric(
        thresholds.apply(
            PerfData::new("memory", used_pct, units::PERCENTAGE).with_minimum(0.0).with_maximum(100.0),
        ),
    );
    report.push_metric(
        PerfData::new("used", metrics.used_bytes as f64, units::BYTES)
            .with_minimum(0.0)
            .with_maximum(metrics.total_bytes as f64),
    );

    if verbose {
        report.push_detail(format!("Total: {}", human_bytes(metrics.total_bytes)));
        report.push_detail(format!("Available: {}", human_bytes(metrics.available_bytes)));
        report.push_detail(format!(
            "Swap: {} of {}",
            human_bytes(metrics.swap_used_bytes),
            human_bytes(metrics.swap_total_bytes)
        ));
        report.push_metric(
            PerfData::new("swap", round2(metrics.swap_percent()), units::PERCENTAGE)
                .with_minimum(0.0)
                .with_maximum(100.0),
        );
    }

    CheckResult::new(status, report)
}

/// Thresholds are per CPU; perf data carries them scaled to the whole host.
pub fn load_result(metrics: &LoadMetrics, thresholds: &Thresholds, verbose: bool) -> CheckResult {
    let per_cpu = round2(metrics.per_cpu());
    let status = thresholds.evaluate(per_cpu);
    let host = thresholds.scaled(metrics.cpus.max(1) as f64);

    let mut report = Report::new(summary(
        CheckKind::Load,
        status,
        &format!(
            "load average: {}, {}, {}",
            Decimal(round2(metrics.one)),
            Decimal(round2(metrics.five)),
            Decimal(round2(metrics.fifteen))
        ),
    ));
    for (name, value) in [("load1", metrics.one), ("load5", metrics.five), ("load15", metrics.fifteen)] {
        report.push_metric(host.apply(PerfData::new(name, round2(value), units::NONE).with_minimum(0.0)));
    }

    if verbose {
        report.push_detail(format!("CPUs: {}", metrics.cpus));
        report.push_detail(format!("Per CPU (1m): {}", Decimal(per_cpu)));
    }

    CheckResult::new(status, report)
}
