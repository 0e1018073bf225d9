use cambio_classify::{ClassifierConfig, LoadError};
use cambio_infer::Device;
use std::path::Path;

#[test]
fn test_defaults() {
    let config = ClassifierConfig::default();
    assert_eq!(config.backend(), "candle");
    assert_eq!(config.class_count(), 6);
    assert_eq!(config.unknown_label(), "Unknown currency");
    assert_eq!(config.device().unwrap(), Device::Cpu);
}

#[test]
fn test_deserialize_partial_json() {
    let config = ClassifierConfig::from_json(
        r#"{ "model": "notes.onnx", "backend": "onnx", "device": "cuda:1" }"#,
    )
    .unwrap();
    assert_eq!(config.model(), Path::new("notes.onnx"));
    assert_eq!(config.backend(), "onnx");
    assert_eq!(config.device().unwrap(), Device::Cuda { device_id: 1 });
    assert_eq!(config.labels(), Path::new("labels.txt"));
    assert_eq!(config.class_count(), 6);
}

#[test]
fn test_invalid_json_is_config_error() {
    assert!(matches!(
        ClassifierConfig::from_json("{ not json"),
        Err(LoadError::Config(_))
    ));
    assert!(matches!(
        ClassifierConfig::from_json(r#"{ "class_count": "six" }"#),
        Err(LoadError::Config(_))
    ));
}

#[test]
fn test_invalid_device_is_config_error() {
    let config = ClassifierConfig::default().with_device("tpu");
    assert!(matches!(config.device(), Err(LoadError::Config(_))));
}

#[test]
fn test_builder() {
    let config = ClassifierConfig::default()
        .with_model("/assets/m.safetensors")
        .with_labels("/assets/l.txt")
        .with_class_count(4)
        .with_unknown_label("No idea");
    assert_eq!(config.model(), Path::new("/assets/m.safetensors"));
    assert_eq!(config.labels(), Path::new("/assets/l.txt"));
    assert_eq!(config.class_count(), 4);
    assert_eq!(config.unknown_label(), "No idea");
}

#[test]
fn test_from_file_resolves_relative_paths() {
    let dir = std::env::temp_dir().join(format!("cambio-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("classifier.json");
    std::fs::write(&path, r#"{ "model": "model.safetensors", "labels": "/abs/labels.txt" }"#).unwrap();

    let config = ClassifierConfig::from_file(&path).unwrap();
    assert_eq!(config.model(), dir.join("model.safetensors"));
    assert_eq!(config.labels(), Path::new("/abs/labels.txt"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_serialize_round_trip() {
    let config = ClassifierConfig::default().with_class_count(3);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ClassifierConfig::from_json(&json).unwrap(), config);
}
