//! Export configuration: which run configs to select.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::definitions::E2EModelRunConfig;
use crate::error::Result;
use crate::obs;
use crate::presets::{parse_presets, BenchmarkPreset};
use crate::selection::{select_and_group, DeviceRunGroups, PresetMatcher};

/// Selection criteria for one export job.
///
/// Both criteria are optional; `None` means "do not filter on this".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Allow-list of `DeviceSpec::id`s.
    pub target_device_ids: Option<HashSet<String>>,

    /// Presets of which at least one must match.
    pub presets: Option<Vec<BenchmarkPreset>>,
}

impl ExportConfig {
    /// Config that selects every run config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from comma-separated lists, as given on the command line.
    pub fn from_args(target_device_ids: Option<&str>, presets: Option<&str>) -> Result<Self> {
        Ok(Self {
            target_device_ids: target_device_ids.map(parse_device_ids),
            presets: presets.map(parse_presets).transpose()?,
        })
    }

    pub fn with_target_device_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_device_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_presets(mut self, presets: Vec<BenchmarkPreset>) -> Self {
        self.presets = Some(presets);
        self
    }

    /// Matchers for the configured presets.
    pub fn matchers(&self) -> Option<Vec<PresetMatcher>> {
        self.presets
            .as_ref()
            .map(|presets| presets.iter().map(|preset| preset.matcher()).collect())
    }

    /// Select and group `run_configs` under this config.
    pub fn select<'a>(&self, run_configs: &'a [E2EModelRunConfig]) -> DeviceRunGroups<'a> {
        let matchers = self.matchers();
        obs::emit_selection_started(
            run_configs.len(),
            self.target_device_ids.as_ref().map(HashSet::len),
            matchers.as_ref().map(Vec::len),
        );

        let groups = select_and_group(
            run_configs,
            self.target_device_ids.as_ref(),
            matchers.as_deref(),
        );

        for (device_name, configs) in groups.iter() {
            obs::emit_device_group(device_name, configs.len());
        }
        let retained = groups.total_run_configs();
        obs::emit_selection_finished(groups.len(), retained, run_configs.len() - retained);
        groups
    }
}

/// Split a comma-separated id list; blank entries are skipped.
fn parse_device_ids(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
