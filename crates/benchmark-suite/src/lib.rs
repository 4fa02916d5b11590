//! Benchmark Suite - run config selection and export
//!
//! Decides which E2E model run configs to benchmark and organizes them per
//! target device:
//! - Selects run configs by device id allow-list and preset matchers
//! - Groups the selection by device name, keeping first-seen order
//! - Exports one benchmark description per device as JSON

pub mod config;
pub mod definitions;
pub mod error;
pub mod export;
pub mod obs;
pub mod presets;
pub mod selection;
pub mod telemetry;

// Re-export key types
pub use config::ExportConfig;
pub use definitions::{
    ArchitectureType, CompileConfig, CompileTarget, DeviceArchitecture, DeviceSpec,
    E2EModelRunConfig, HostEnvironment, ImportedModel, InputDataFormat, MlirDialectType, Model,
    ModelInputData, ModelSourceType, ModuleExecutionConfig, ModuleGenerationConfig, RuntimeDriver,
    RuntimeLoader, TargetAbi, TargetBackend,
};
pub use error::{BenchmarkSuiteError, Result};
pub use export::{
    export_benchmark_config, BenchmarkConfigExport, DeviceBenchmarkConfig, HostEnvironmentInfo,
};
pub use presets::{parse_presets, BenchmarkPreset};
pub use selection::{select_and_group, DeviceRunGroups, PresetMatcher};
pub use telemetry::init_tracing;

/// Benchmark suite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
