pub mod collector;
pub mod cpu;
pub mod load;
pub mod memory;

pub use collector::CheckCollector;
pub use cpu::CpuMonitor;
pub use load::LoadMonitor;
pub use memory::MemoryMonitor;
