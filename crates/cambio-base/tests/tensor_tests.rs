use cambio_base::tensor::element_count;
use cambio_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.len(), 6);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 6,
            got: 3
        }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_into_data() {
    let tensor = Tensor::new(vec![1, 3], vec![1u8, 2, 3]).unwrap();
    assert!(!tensor.is_empty());
    assert_eq!(tensor.into_data(), vec![1, 2, 3]);
}

#[test]
fn test_element_count_of_empty_shape_is_one() {
    assert_eq!(element_count(&[]).unwrap(), 1);
    assert_eq!(element_count(&[1, 224, 224, 3]).unwrap(), 150_528);
}

#[test]
fn test_debug_does_not_dump_data() {
    let tensor = Tensor::new(vec![2], vec![7u8, 9]).unwrap();
    let text = format!("{tensor:?}");
    assert!(text.contains("shape"));
    assert!(text.contains("len: 2"));
}
