use cambio_infer::{INPUT_ELEMENTS, INPUT_SHAPE, INPUT_TENSOR_BYTES, InferError, InputTensor, ScoreVector};

#[test]
fn test_input_tensor_byte_length_constant() {
    assert_eq!(INPUT_TENSOR_BYTES, 4 * 1 * 224 * 224 * 3);
    assert_eq!(INPUT_SHAPE, [1, 224, 224, 3]);
}

#[test]
fn test_input_tensor_rejects_wrong_length() {
    for len in [0, INPUT_TENSOR_BYTES - 1, INPUT_TENSOR_BYTES + 4] {
        let result = InputTensor::from_bytes(vec![0u8; len]);
        assert!(matches!(result, Err(InferError::Shape(_))), "len {len}");
    }
}

#[test]
fn test_input_tensor_from_values_is_native_endian() {
    let mut values = vec![0.0f32; INPUT_ELEMENTS];
    values[0] = 1.0;
    values[2] = 0.25;
    let tensor = InputTensor::from_values(&values).unwrap();

    assert_eq!(tensor.as_bytes().len(), INPUT_TENSOR_BYTES);
    assert_eq!(&tensor.as_bytes()[0..4], &1.0f32.to_ne_bytes());
    assert_eq!(&tensor.as_bytes()[8..12], &0.25f32.to_ne_bytes());
    let read: Vec<f32> = tensor.values().take(3).collect();
    assert_eq!(read, vec![1.0, 0.0, 0.25]);
}

#[test]
fn test_input_tensor_from_values_rejects_wrong_count() {
    assert!(InputTensor::from_values(&[0.0; 3]).is_err());
}

#[test]
fn test_input_tensor_zeros() {
    let tensor = InputTensor::zeros();
    assert_eq!(tensor.as_bytes().len(), INPUT_TENSOR_BYTES);
    assert!(tensor.values().all(|v| v == 0.0));
}

#[test]
fn test_input_tensor_to_tensor_is_nhwc() {
    let tensor = InputTensor::from_bytes(vec![0u8; INPUT_TENSOR_BYTES]).unwrap();
    let nhwc = tensor.to_tensor().unwrap();
    assert_eq!(nhwc.shape, vec![1, 224, 224, 3]);
    assert_eq!(nhwc.len(), INPUT_ELEMENTS);
}

#[test]
fn test_score_vector_accessors() {
    let scores = ScoreVector::from(vec![0.1, 0.7]);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get(1), Some(0.7));
    assert_eq!(scores.get(2), None);
    assert!(ScoreVector::default().is_empty());
}
