//! Run config selection and grouping by target device.
//!
//! [`select_and_group`] filters run configs with two independent, optional
//! criteria and groups the survivors by `target_device_spec.device_name`:
//!
//! - a device allow-list, matched against the unique `DeviceSpec::id`;
//! - preset matchers, of which at least one must accept the run config.
//!
//! An absent criterion always passes, and an empty matcher list counts as
//! absent. Group order is the order in which each device name is first
//! retained; within a group the input order is kept.

use std::collections::{HashMap, HashSet};

use crate::definitions::E2EModelRunConfig;

/// Predicate over a run config.
pub type PresetMatcher = Box<dyn Fn(&E2EModelRunConfig) -> bool + Send + Sync>;

/// Run configs grouped by device name, in first-seen device order.
///
/// Holds references into the caller's run configs.
#[derive(Debug, Clone, Default)]
pub struct DeviceRunGroups<'a> {
    groups: Vec<(String, Vec<&'a E2EModelRunConfig>)>,
    index: HashMap<String, usize>,
}

impl<'a> DeviceRunGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run config to its device's group, opening the group if needed.
    fn push(&mut self, run_config: &'a E2EModelRunConfig) {
        let device_name = &run_config.target_device_spec.device_name;
        match self.index.get(device_name) {
            Some(&slot) => self.groups[slot].1.push(run_config),
            None => {
                self.index.insert(device_name.clone(), self.groups.len());
                self.groups.push((device_name.clone(), vec![run_config]));
            }
        }
    }

    /// Run configs grouped under `device_name`.
    pub fn get(&self, device_name: &str) -> Option<&[&'a E2EModelRunConfig]> {
        self.index
            .get(device_name)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Device names in group order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// `(device_name, run_configs)` pairs in group order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a E2EModelRunConfig])> {
        self.groups
            .iter()
            .map(|(name, configs)| (name.as_str(), configs.as_slice()))
    }

    /// Number of device groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of run configs across all groups.
    pub fn total_run_configs(&self) -> usize {
        self.groups.iter().map(|(_, configs)| configs.len()).sum()
    }

    /// Concatenate all groups in group order.
    pub fn flatten(&self) -> Vec<&'a E2EModelRunConfig> {
        self.groups
            .iter()
            .flat_map(|(_, configs)| configs.iter().copied())
            .collect()
    }
}

/// Equal when both hold the same groups in the same order.
impl PartialEq for DeviceRunGroups<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl Eq for DeviceRunGroups<'_> {}

impl<'a> IntoIterator for DeviceRunGroups<'a> {
    type Item = (String, Vec<&'a E2EModelRunConfig>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Filter run configs and group them by target device name.
///
/// A run config is kept when both hold:
/// - `target_device_ids` is `None`, or contains `target_device_spec.id`;
/// - `matchers` is `None` or empty, or at least one matcher returns `true`.
///
/// Matchers run in order and stop at the first acceptance. A panicking
/// matcher is not caught.
pub fn select_and_group<'a, I>(
    run_configs: I,
    target_device_ids: Option<&HashSet<String>>,
    matchers: Option<&[PresetMatcher]>,
) -> DeviceRunGroups<'a>
where
    I: IntoIterator<Item = &'a E2EModelRunConfig>,
{
    let device_allowed = |config: &E2EModelRunConfig| {
        target_device_ids.map_or(true, |ids| ids.contains(&config.target_device_spec.id))
    };
    let preset_matched = |config: &E2EModelRunConfig| match matchers {
        Some(matchers) if !matchers.is_empty() => matchers.iter().any(|matcher| matcher(config)),
        _ => true,
    };

    let mut groups = DeviceRunGroups::new();
    for config in run_configs {
        if device_allowed(config) && preset_matched(config) {
            groups.push(config);
        }
    }
    groups
}
