//! Benchmark suite definitions.
//!
//! Value records describing what gets benchmarked:
//! - `Model`, `ModelInputData`: the source model and its input data
//! - `DeviceSpec`: a target device configuration (architecture + host)
//! - `CompileConfig`, `ModuleGenerationConfig`: how a model is compiled
//! - `ModuleExecutionConfig`: how a compiled module is run
//! - `E2EModelRunConfig`: one fully specified benchmark run
//!
//! Records are built once by catalog code and only read afterwards.

pub mod common;
pub mod digest;
pub mod run_config;

pub use common::{
    ArchitectureType, DeviceArchitecture, DeviceSpec, HostEnvironment, InputDataFormat, Model,
    ModelInputData, ModelSourceType,
};
pub use digest::hash_composite_id;
pub use run_config::{
    CompileConfig, CompileTarget, E2EModelRunConfig, ImportedModel, MlirDialectType,
    ModuleExecutionConfig, ModuleGenerationConfig, RuntimeDriver, RuntimeLoader, TargetAbi,
    TargetBackend,
};
