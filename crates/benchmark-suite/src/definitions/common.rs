//! Models, input data and target devices.

use serde::{Deserialize, Serialize};

/// Format the source model was exported in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModelSourceType {
    /// Linalg MLIR exported from a framework.
    ExportedLinalgMlir,

    /// TFLite flatbuffer.
    ExportedTflite,

    /// TensorFlow SavedModel.
    ExportedTf,
}

/// A source model in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Model {
    /// Unique within a model catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    pub tags: Vec<String>,

    pub source_type: ModelSourceType,

    /// Where the exported model is downloaded from.
    pub source_url: String,

    /// Function invoked when benchmarking.
    pub entry_function: String,

    /// Ordered type-shape strings, e.g. `1x224x224x3xf32`.
    pub input_types: Vec<String>,
}

/// Format of benchmark input data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InputDataFormat {
    /// All-zero tensors generated at run time.
    Zeros,

    NumpyNpy,
}

/// Input data fed to a model during a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ModelInputData {
    pub id: String,

    /// Model this data belongs to; empty when it fits any model.
    pub model_id: String,

    pub name: String,

    pub tags: Vec<String>,

    pub data_format: InputDataFormat,

    pub source_url: String,
}

impl ModelInputData {
    /// All-zeros input usable with any model.
    pub fn zeros() -> Self {
        Self {
            id: "zeros".to_string(),
            model_id: String::new(),
            name: "zeros".to_string(),
            tags: Vec::new(),
            data_format: InputDataFormat::Zeros,
            source_url: String::new(),
        }
    }
}

/// Broad processor class of a device architecture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureType {
    Cpu,
    Gpu,
}

/// Target device architecture.
///
/// Each variant normalizes to an architecture family (`"cuda"`, `"rv64"`, ...)
/// which presets match on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeviceArchitecture {
    X86_64Cascadelake,
    Armv8_2AGeneric,
    Armv9AGeneric,
    Rv64Generic,
    Rv32Generic,
    AdrenoGeneric,
    ValhallMali,
    CudaSm70,
    CudaSm80,
}

impl DeviceArchitecture {
    pub fn architecture_type(&self) -> ArchitectureType {
        match self {
            DeviceArchitecture::X86_64Cascadelake
            | DeviceArchitecture::Armv8_2AGeneric
            | DeviceArchitecture::Armv9AGeneric
            | DeviceArchitecture::Rv64Generic
            | DeviceArchitecture::Rv32Generic => ArchitectureType::Cpu,
            DeviceArchitecture::AdrenoGeneric
            | DeviceArchitecture::ValhallMali
            | DeviceArchitecture::CudaSm70
            | DeviceArchitecture::CudaSm80 => ArchitectureType::Gpu,
        }
    }

    /// Normalized architecture family.
    pub fn architecture(&self) -> &'static str {
        match self {
            DeviceArchitecture::X86_64Cascadelake => "x86_64",
            DeviceArchitecture::Armv8_2AGeneric => "armv8.2-a",
            DeviceArchitecture::Armv9AGeneric => "armv9-a",
            DeviceArchitecture::Rv64Generic => "rv64",
            DeviceArchitecture::Rv32Generic => "rv32",
            DeviceArchitecture::AdrenoGeneric => "adreno",
            DeviceArchitecture::ValhallMali => "valhall",
            DeviceArchitecture::CudaSm70 | DeviceArchitecture::CudaSm80 => "cuda",
        }
    }

    pub fn microarchitecture(&self) -> &'static str {
        match self {
            DeviceArchitecture::X86_64Cascadelake => "cascadelake",
            DeviceArchitecture::ValhallMali => "mali",
            DeviceArchitecture::CudaSm70 => "sm_70",
            DeviceArchitecture::CudaSm80 => "sm_80",
            DeviceArchitecture::Armv8_2AGeneric
            | DeviceArchitecture::Armv9AGeneric
            | DeviceArchitecture::Rv64Generic
            | DeviceArchitecture::Rv32Generic
            | DeviceArchitecture::AdrenoGeneric => "generic",
        }
    }
}

/// Host operating environment of a device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HostEnvironment {
    LinuxX86_64,
    AndroidArmv8_2A,
}

impl HostEnvironment {
    /// Normalized platform, e.g. `"linux"` or `"android"`.
    pub fn platform(&self) -> &'static str {
        match self {
            HostEnvironment::LinuxX86_64 => "linux",
            HostEnvironment::AndroidArmv8_2A => "android",
        }
    }

    pub fn architecture(&self) -> &'static str {
        match self {
            HostEnvironment::LinuxX86_64 => "x86_64",
            HostEnvironment::AndroidArmv8_2A => "armv8.2-a",
        }
    }
}

/// A target device configuration.
///
/// `id` identifies one configuration; `device_name` is a grouping label that
/// several configurations (e.g. the CPU and GPU of one phone) may share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DeviceSpec {
    pub id: String,
    pub device_name: String,
    pub architecture: DeviceArchitecture,
    pub host_environment: HostEnvironment,
}

impl DeviceSpec {
    pub fn new(
        id: impl Into<String>,
        device_name: impl Into<String>,
        architecture: DeviceArchitecture,
        host_environment: HostEnvironment,
    ) -> Self {
        Self {
            id: id.into(),
            device_name: device_name.into(),
            architecture,
            host_environment,
        }
    }
}
