use sysinfo::System;

/// Load average monitoring
pub struct LoadMonitor {
    cpus: usize,
}

#[derive(Debug, Clone)]
pub struct LoadMetrics {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
    pub cpus: usize,
}

impl LoadMonitor {
    pub fn new() -> Self {
        Self {
            cpus: num_cpus::get(),
        }
    }

    pub fn collect(&self) -> LoadMetrics {
        let load = System::load_average();
        LoadMetrics {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
            cpus: self.cpus,
        }
    }
}

impl LoadMetrics {
    /// One-minute load divided across CPUs.
    pub fn per_cpu(&self) -> f64 {
        self.one / self.cpus.max(1) as f64
    }
}

impl Default for LoadMonitor {
    fn default() -> Self {
        Self::new()
    }
}
