use sysinfo::System;

/// CPU monitoring
pub struct CpuMonitor {
    system: System,
}

#[derive(Debug, Clone)]
pub struct CpuMetrics {
    pub utilization_per_core: Vec<f32>,
    pub avg_utilization: f32,
}

impl CpuMonitor {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        Self { system }
    }

    /// Usage is a delta between two refreshes, so this blocks for sysinfo's
    /// minimum update interval.
    pub fn collect(&mut self) -> CpuMetrics {
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu();

        let utilization_per_core: Vec<f32> =
            self.system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect();
        CpuMetrics::from_cores(utilization_per_core)
    }
}

impl CpuMetrics {
    pub fn from_cores(utilization_per_core: Vec<f32>) -> Self {
        let avg_utilization = if !utilization_per_core.is_empty() {
            utilization_per_core.iter().sum::<f32>() / utilization_per_core.len() as f32
        } else {
            0.0
        };
        Self {
            utilization_per_core,
            avg_utilization,
        }
    }
}

impl Default for CpuMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let m = CpuMetrics::from_cores(vec![10.0, 30.0]);
        assert_eq!(m.avg_utilization, 20.0);
        assert_eq!(CpuMetrics::from_cores(vec![]).avg_utilization, 0.0);
    }
}
