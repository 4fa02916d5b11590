//! Benchmark config export document.
//!
//! Turns [`DeviceRunGroups`] into a per-device description that benchmark
//! runners consume:
//!
//! ```json
//! {
//!   "<device_name>": {
//!     "host_environment": { "platform": "android", "architecture": "armv8.2-a" },
//!     "module_dir_paths": ["iree_<model>_<name>_<compile_config>", ...],
//!     "run_configs": [ ... ]
//!   }
//! }
//! ```
//!
//! Devices appear in group order.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

use crate::definitions::{E2EModelRunConfig, HostEnvironment};
use crate::error::{BenchmarkSuiteError, Result};
use crate::selection::DeviceRunGroups;

/// Normalized host environment fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostEnvironmentInfo {
    pub platform: String,
    pub architecture: String,
}

impl From<HostEnvironment> for HostEnvironmentInfo {
    fn from(host: HostEnvironment) -> Self {
        Self {
            platform: host.platform().to_string(),
            architecture: host.architecture().to_string(),
        }
    }
}

/// Everything needed to benchmark one device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceBenchmarkConfig {
    pub host_environment: HostEnvironmentInfo,

    /// Distinct module directories, in first-use order.
    pub module_dir_paths: Vec<String>,

    pub run_configs: Vec<E2EModelRunConfig>,
}

/// Export document, keyed by device name in group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkConfigExport {
    devices: Vec<(String, DeviceBenchmarkConfig)>,
}

impl BenchmarkConfigExport {
    pub fn get(&self, device_name: &str) -> Option<&DeviceBenchmarkConfig> {
        self.devices
            .iter()
            .find(|(name, _)| name == device_name)
            .map(|(_, config)| config)
    }

    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for BenchmarkConfigExport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.devices.len()))?;
        for (device_name, config) in &self.devices {
            map.serialize_entry(device_name, config)?;
        }
        map.end()
    }
}

/// Build the export document from grouped run configs.
///
/// Fails with [`BenchmarkSuiteError::ConflictingHostEnvironments`] when run
/// configs under one device name target different host environments.
pub fn export_benchmark_config(groups: &DeviceRunGroups<'_>) -> Result<BenchmarkConfigExport> {
    let mut devices = Vec::with_capacity(groups.len());

    for (device_name, run_configs) in groups.iter() {
        let host_environment = common_host_environment(device_name, run_configs)?;

        let mut seen = HashSet::new();
        let module_dir_paths = run_configs
            .iter()
            .map(|config| config.module_generation_config.module_dir_name())
            .filter(|dir| seen.insert(dir.clone()))
            .collect();

        devices.push((
            device_name.to_string(),
            DeviceBenchmarkConfig {
                host_environment: host_environment.into(),
                module_dir_paths,
                run_configs: run_configs.iter().map(|&config| config.clone()).collect(),
            },
        ));
    }

    Ok(BenchmarkConfigExport { devices })
}

fn common_host_environment(
    device_name: &str,
    run_configs: &[&E2EModelRunConfig],
) -> Result<HostEnvironment> {
    let mut hosts = run_configs
        .iter()
        .map(|config| config.target_device_spec.host_environment);
    // Groups are never empty.
    let first = hosts
        .next()
        .ok_or_else(|| BenchmarkSuiteError::ConflictingHostEnvironments {
            device_name: device_name.to_string(),
        })?;
    if hosts.all(|host| host == first) {
        Ok(first)
    } else {
        Err(BenchmarkSuiteError::ConflictingHostEnvironments {
            device_name: device_name.to_string(),
        })
    }
}
