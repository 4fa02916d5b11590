//! Compilation, execution and end-to-end run configs.

use serde::{Deserialize, Serialize};

use super::common::{DeviceArchitecture, DeviceSpec, Model, ModelInputData, ModelSourceType};
use super::digest::hash_composite_id;

/// MLIR dialect a model is imported into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MlirDialectType {
    Linalg,
    Tosa,
    Mhlo,
}

/// A model imported for compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImportedModel {
    pub model: Model,
    pub dialect_type: MlirDialectType,
}

impl ImportedModel {
    /// Import metadata follows from the model's source format.
    pub fn from_model(model: Model) -> Self {
        let dialect_type = match model.source_type {
            ModelSourceType::ExportedLinalgMlir => MlirDialectType::Linalg,
            ModelSourceType::ExportedTflite => MlirDialectType::Tosa,
            ModelSourceType::ExportedTf => MlirDialectType::Mhlo,
        };
        Self {
            model,
            dialect_type,
        }
    }

    /// Imported models are identified by their source model.
    pub fn id(&self) -> &str {
        &self.model.id
    }
}

/// Compiler backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetBackend {
    LlvmCpu,
    Vmvx,
    VulkanSpirv,
    Cuda,
}

/// Target ABI for generated code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetAbi {
    LinuxGnu,
    LinuxAndroid29,
    LinuxAndroid31,
}

/// One compilation target inside a compile config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CompileTarget {
    pub target_backend: TargetBackend,
    pub target_architecture: DeviceArchitecture,
    pub target_abi: TargetAbi,
}

/// Compiler configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CompileConfig {
    /// Unique within a compile config catalog.
    pub id: String,

    pub tags: Vec<String>,

    /// Ordered compilation targets.
    pub compile_targets: Vec<CompileTarget>,
}

/// A model compiled with a compile config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ModuleGenerationConfig {
    pub imported_model: ImportedModel,
    pub compile_config: CompileConfig,
}

impl ModuleGenerationConfig {
    pub fn new(imported_model: ImportedModel, compile_config: CompileConfig) -> Self {
        Self {
            imported_model,
            compile_config,
        }
    }

    pub fn composite_id(&self) -> String {
        hash_composite_id(&[self.imported_model.id(), self.compile_config.id.as_str()])
    }

    /// Directory name holding the generated module artifacts.
    pub fn module_dir_name(&self) -> String {
        let model = &self.imported_model.model;
        format!(
            "iree_{}_{}_{}",
            model.id, model.name, self.compile_config.id
        )
    }
}

/// Runtime module loader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeLoader {
    EmbeddedElf,
    VmvxModule,
    None,
}

/// Runtime HAL driver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeDriver {
    LocalSync,
    LocalTask,
    Vulkan,
    Cuda,
}

/// How a compiled module is executed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ModuleExecutionConfig {
    pub id: String,
    pub tags: Vec<String>,
    pub loader: RuntimeLoader,
    pub driver: RuntimeDriver,
}

/// One end-to-end benchmark run: a compiled module, how to run it, where, and
/// on which input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct E2EModelRunConfig {
    pub module_generation_config: ModuleGenerationConfig,
    pub module_execution_config: ModuleExecutionConfig,
    pub target_device_spec: DeviceSpec,
    pub input_data: ModelInputData,
}

impl E2EModelRunConfig {
    pub fn new(
        module_generation_config: ModuleGenerationConfig,
        module_execution_config: ModuleExecutionConfig,
        target_device_spec: DeviceSpec,
        input_data: ModelInputData,
    ) -> Self {
        Self {
            module_generation_config,
            module_execution_config,
            target_device_spec,
            input_data,
        }
    }

    pub fn composite_id(&self) -> String {
        hash_composite_id(&[
            self.module_generation_config.composite_id(),
            self.module_execution_config.id.clone(),
            self.target_device_spec.id.clone(),
            self.input_data.id.clone(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::common::HostEnvironment;

    fn model(id: &str, source_type: ModelSourceType) -> Model {
        Model {
            id: id.to_string(),
            name: format!("model_{id}"),
            tags: vec![],
            source_type,
            source_url: String::new(),
            entry_function: "predict".to_string(),
            input_types: vec!["1xf32".to_string()],
        }
    }

    fn compile_config(id: &str) -> CompileConfig {
        CompileConfig {
            id: id.to_string(),
            tags: vec![],
            compile_targets: vec![CompileTarget {
                target_backend: TargetBackend::LlvmCpu,
                target_architecture: DeviceArchitecture::X86_64Cascadelake,
                target_abi: TargetAbi::LinuxGnu,
            }],
        }
    }

    fn exec_config() -> ModuleExecutionConfig {
        ModuleExecutionConfig {
            id: "exec".to_string(),
            tags: vec![],
            loader: RuntimeLoader::EmbeddedElf,
            driver: RuntimeDriver::LocalSync,
        }
    }

    #[test]
    fn test_imported_model_dialect_from_source_type() {
        let tflite = ImportedModel::from_model(model("a", ModelSourceType::ExportedTflite));
        assert_eq!(tflite.dialect_type, MlirDialectType::Tosa);

        let linalg = ImportedModel::from_model(model("b", ModelSourceType::ExportedLinalgMlir));
        assert_eq!(linalg.dialect_type, MlirDialectType::Linalg);

        let tf = ImportedModel::from_model(model("c", ModelSourceType::ExportedTf));
        assert_eq!(tf.dialect_type, MlirDialectType::Mhlo);
        assert_eq!(tf.id(), "c");
    }

    #[test]
    fn test_module_dir_name() {
        let gen_config = ModuleGenerationConfig::new(
            ImportedModel::from_model(model("tflite", ModelSourceType::ExportedTflite)),
            compile_config("1"),
        );
        assert_eq!(gen_config.module_dir_name(), "iree_tflite_model_tflite_1");
    }

    #[test]
    fn test_generation_composite_id_tracks_components() {
        let imported = ImportedModel::from_model(model("m", ModelSourceType::ExportedTflite));
        let a = ModuleGenerationConfig::new(imported.clone(), compile_config("1"));
        let b = ModuleGenerationConfig::new(imported, compile_config("2"));
        assert_ne!(a.composite_id(), b.composite_id());
        assert_eq!(a.composite_id(), a.clone().composite_id());
    }

    #[test]
    fn test_run_config_composite_id_depends_on_device() {
        let gen_config = ModuleGenerationConfig::new(
            ImportedModel::from_model(model("m", ModelSourceType::ExportedTflite)),
            compile_config("1"),
        );
        let device_a = DeviceSpec::new(
            "dev_a",
            "dev_a",
            DeviceArchitecture::X86_64Cascadelake,
            HostEnvironment::LinuxX86_64,
        );
        let device_b = DeviceSpec::new(
            "dev_b",
            "dev_a",
            DeviceArchitecture::X86_64Cascadelake,
            HostEnvironment::LinuxX86_64,
        );
        let run_a = E2EModelRunConfig::new(
            gen_config.clone(),
            exec_config(),
            device_a,
            ModelInputData::zeros(),
        );
        let run_b =
            E2EModelRunConfig::new(gen_config, exec_config(), device_b, ModelInputData::zeros());

        assert_ne!(run_a.composite_id(), run_b.composite_id());
    }

    #[test]
    fn test_run_config_json_roundtrip() {
        let run = E2EModelRunConfig::new(
            ModuleGenerationConfig::new(
                ImportedModel::from_model(model("m", ModelSourceType::ExportedTflite)),
                compile_config("1"),
            ),
            exec_config(),
            DeviceSpec::new(
                "dev_c",
                "dev_c",
                DeviceArchitecture::CudaSm80,
                HostEnvironment::LinuxX86_64,
            ),
            ModelInputData::zeros(),
        );
        let json = serde_json::to_string(&run).unwrap();
        let parsed: E2EModelRunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run);
    }
}
