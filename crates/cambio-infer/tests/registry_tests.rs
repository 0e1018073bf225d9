use cambio_infer::{Backend, BackendRegistry, InferError, create_registry};

#[test]
fn test_create_registry_includes_candle() {
    let registry = create_registry();
    assert_eq!(registry.get("candle").unwrap().name(), "candle");
    assert_eq!(registry.require("candle").unwrap().name(), "candle");
}

#[test]
fn test_require_unknown_backend() {
    let registry = BackendRegistry::new();
    match registry.require("tflite") {
        Err(InferError::UnknownBackend(name)) => assert_eq!(name, "tflite"),
        Err(other) => panic!("Expected UnknownBackend, got {other}"),
        Ok(_) => panic!("Expected UnknownBackend"),
    }
}

#[cfg(feature = "onnx")]
#[test]
fn test_create_registry_includes_onnx() {
    let registry = create_registry();
    assert!(registry.get("onnx").is_some());
}
