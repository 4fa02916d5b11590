//! Named benchmark presets.
//!
//! A preset is a named predicate over a run config, built from the normalized
//! device fields: architecture family/type and host platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::definitions::{ArchitectureType, E2EModelRunConfig};
use crate::error::{BenchmarkSuiteError, Result};
use crate::selection::PresetMatcher;

/// Builtin benchmark presets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BenchmarkPreset {
    /// Devices with an x86_64 architecture.
    #[serde(rename = "x86_64")]
    X86_64,

    /// CUDA GPUs.
    #[serde(rename = "cuda")]
    Cuda,

    /// CPUs of Android devices.
    #[serde(rename = "android-cpu")]
    AndroidCpu,

    /// GPUs of Android devices.
    #[serde(rename = "android-gpu")]
    AndroidGpu,
}

impl BenchmarkPreset {
    pub const ALL: [BenchmarkPreset; 4] = [
        BenchmarkPreset::X86_64,
        BenchmarkPreset::Cuda,
        BenchmarkPreset::AndroidCpu,
        BenchmarkPreset::AndroidGpu,
    ];

    /// Get the preset name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkPreset::X86_64 => "x86_64",
            BenchmarkPreset::Cuda => "cuda",
            BenchmarkPreset::AndroidCpu => "android-cpu",
            BenchmarkPreset::AndroidGpu => "android-gpu",
        }
    }

    /// Whether this preset selects the run config.
    pub fn matches(&self, config: &E2EModelRunConfig) -> bool {
        let device = &config.target_device_spec;
        let is_android = device.host_environment.platform() == "android";
        match self {
            BenchmarkPreset::X86_64 => device.architecture.architecture() == "x86_64",
            BenchmarkPreset::Cuda => device.architecture.architecture() == "cuda",
            BenchmarkPreset::AndroidCpu => {
                device.architecture.architecture_type() == ArchitectureType::Cpu && is_android
            }
            BenchmarkPreset::AndroidGpu => {
                device.architecture.architecture_type() == ArchitectureType::Gpu && is_android
            }
        }
    }

    /// Boxed predicate for the selection engine.
    pub fn matcher(self) -> PresetMatcher {
        Box::new(move |config: &E2EModelRunConfig| self.matches(config))
    }
}

impl fmt::Display for BenchmarkPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkPreset {
    type Err = BenchmarkSuiteError;

    fn from_str(s: &str) -> Result<Self> {
        BenchmarkPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| BenchmarkSuiteError::UnknownPreset(s.to_string()))
    }
}

/// Parse a comma-separated preset list; blank entries are skipped.
pub fn parse_presets(list: &str) -> Result<Vec<BenchmarkPreset>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(BenchmarkPreset::from_str)
        .collect()
}
