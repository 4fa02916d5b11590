//! Export document built from grouped run configs.

use benchmark_suite::{
    export_benchmark_config, select_and_group, BenchmarkSuiteError, CompileConfig,
    DeviceArchitecture, DeviceSpec, E2EModelRunConfig, HostEnvironment, ImportedModel, Model,
    ModelInputData, ModelSourceType, ModuleExecutionConfig, ModuleGenerationConfig,
    RuntimeDriver, RuntimeLoader,
};

fn gen_config(model_id: &str, compile_config_id: &str) -> ModuleGenerationConfig {
    ModuleGenerationConfig::new(
        ImportedModel::from_model(Model {
            id: model_id.to_string(),
            name: format!("{model_id}_name"),
            tags: vec![],
            source_type: ModelSourceType::ExportedTflite,
            source_url: String::new(),
            entry_function: "main".to_string(),
            input_types: vec!["1x224x224x3xf32".to_string()],
        }),
        CompileConfig {
            id: compile_config_id.to_string(),
            tags: vec![],
            compile_targets: vec![],
        },
    )
}

fn run_config(
    gen_config: ModuleGenerationConfig,
    device_id: &str,
    device_name: &str,
    host: HostEnvironment,
) -> E2EModelRunConfig {
    E2EModelRunConfig::new(
        gen_config,
        ModuleExecutionConfig {
            id: "exec".to_string(),
            tags: vec![],
            loader: RuntimeLoader::EmbeddedElf,
            driver: RuntimeDriver::LocalTask,
        },
        DeviceSpec::new(
            device_id,
            device_name,
            DeviceArchitecture::Armv8_2AGeneric,
            host,
        ),
        ModelInputData::zeros(),
    )
}

#[test]
fn export_collects_host_and_distinct_module_dirs() {
    let configs = vec![
        run_config(
            gen_config("mobilenet", "c1"),
            "pixel_cpu",
            "pixel",
            HostEnvironment::AndroidArmv8_2A,
        ),
        run_config(
            gen_config("mobilenet", "c1"),
            "pixel_big_core",
            "pixel",
            HostEnvironment::AndroidArmv8_2A,
        ),
        run_config(
            gen_config("bert", "c1"),
            "pixel_cpu",
            "pixel",
            HostEnvironment::AndroidArmv8_2A,
        ),
    ];
    let groups = select_and_group(&configs, None, None);

    let export = export_benchmark_config(&groups).expect("export failed");

    let pixel = export.get("pixel").expect("pixel group");
    assert_eq!(pixel.host_environment.platform, "android");
    assert_eq!(pixel.host_environment.architecture, "armv8.2-a");
    assert_eq!(
        pixel.module_dir_paths,
        vec![
            "iree_mobilenet_mobilenet_name_c1".to_string(),
            "iree_bert_bert_name_c1".to_string(),
        ]
    );
    assert_eq!(pixel.run_configs, configs);
}

#[test]
fn export_json_keeps_group_order() {
    let configs = vec![
        run_config(
            gen_config("m", "c"),
            "zz",
            "zz",
            HostEnvironment::LinuxX86_64,
        ),
        run_config(
            gen_config("m", "c"),
            "aa",
            "aa",
            HostEnvironment::AndroidArmv8_2A,
        ),
    ];
    let groups = select_and_group(&configs, None, None);

    let export = export_benchmark_config(&groups).unwrap();
    let json = export.to_json_string().unwrap();

    assert_eq!(export.device_names().collect::<Vec<_>>(), vec!["zz", "aa"]);
    let zz = json.find("\"zz\"").expect("zz key");
    let aa = json.find("\"aa\"").expect("aa key");
    assert!(zz < aa, "device keys must follow group order");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["aa"]["host_environment"]["platform"], "android");
    assert_eq!(value["zz"]["run_configs"].as_array().unwrap().len(), 1);
    assert_eq!(
        value["zz"]["run_configs"][0]["target_device_spec"]["id"],
        "zz"
    );
}

#[test]
fn export_rejects_mixed_host_environments() {
    let configs = vec![
        run_config(
            gen_config("m", "c"),
            "dev_linux",
            "dev",
            HostEnvironment::LinuxX86_64,
        ),
        run_config(
            gen_config("m", "c"),
            "dev_android",
            "dev",
            HostEnvironment::AndroidArmv8_2A,
        ),
    ];
    let groups = select_and_group(&configs, None, None);

    let err = export_benchmark_config(&groups).unwrap_err();
    assert!(matches!(
        err,
        BenchmarkSuiteError::ConflictingHostEnvironments { ref device_name } if device_name == "dev"
    ));
}

#[test]
fn export_of_empty_selection_is_empty() {
    let configs: Vec<E2EModelRunConfig> = Vec::new();
    let groups = select_and_group(&configs, None, None);

    let export = export_benchmark_config(&groups).unwrap();
    assert!(export.is_empty());
    assert_eq!(export.to_json_string().unwrap(), "{}");
}
