use cambio_base::TensorError;
use cambio_image::{Frame, ImageError};

#[test]
fn test_from_rgba_checks_length() {
    let result = Frame::from_rgba(2, 2, vec![0u8; 15]);
    match result {
        Err(ImageError::Tensor(TensorError::ShapeMismatch { expected, got })) => {
            assert_eq!(expected, 16);
            assert_eq!(got, 15);
        }
        other => panic!("Expected shape mismatch, got {other:?}"),
    }
}

#[test]
fn test_from_rgba_rejects_trailing_bytes() {
    match Frame::from_rgba(2, 2, vec![7u8; 21]) {
        Err(ImageError::Tensor(TensorError::ShapeMismatch { expected, got })) => {
            assert_eq!(expected, 16);
            assert_eq!(got, 21);
        }
        other => panic!("Expected shape mismatch, got {other:?}"),
    }
}

#[test]
fn test_from_rgba_exact_length() {
    let frame = Frame::from_rgba(2, 2, (0..16).collect()).unwrap();
    assert_eq!(frame.as_bytes().len(), 16);
    assert_eq!(frame.pixel(1, 1), Some([12, 13, 14, 15]));
}

#[test]
fn test_from_rgba_rejects_empty_frame() {
    assert!(matches!(
        Frame::from_rgba(0, 4, vec![]),
        Err(ImageError::Empty { width: 0, height: 4 })
    ));
}

#[test]
fn test_resize_to_square_from_any_aspect() {
    for (w, h) in [(640, 480), (100, 300), (1, 1), (224, 224), (1000, 7)] {
        let frame = Frame::solid(w, h, [9, 8, 7, 255]).unwrap();
        let resized = frame.resize(224, 224);
        assert_eq!((resized.width(), resized.height()), (224, 224));
        assert_eq!(resized.as_bytes().len(), 224 * 224 * 4);
    }
}

#[test]
fn test_resize_solid_color_is_preserved() {
    let frame = Frame::solid(37, 91, [200, 100, 50, 255]).unwrap();
    let resized = frame.resize(224, 224);
    assert_eq!(resized.pixel(0, 0), Some([200, 100, 50, 255]));
    assert_eq!(resized.pixel(223, 223), Some([200, 100, 50, 255]));
}

#[test]
fn test_resize_is_deterministic() {
    let data: Vec<u8> = (0..(13 * 29 * 4)).map(|i| (i * 7 % 256) as u8).collect();
    let frame = Frame::from_rgba(13, 29, data).unwrap();
    assert_eq!(frame.resize(224, 224), frame.resize(224, 224));
}

#[test]
fn test_pixel_out_of_bounds() {
    let frame = Frame::solid(2, 2, [0, 0, 0, 0]).unwrap();
    assert_eq!(frame.pixel(2, 0), None);
}
