use cambio_classify::preprocess;
use cambio_image::Frame;
use cambio_infer::{INPUT_ELEMENTS, INPUT_TENSOR_BYTES};

#[test]
fn test_output_length_for_any_resolution() {
    for (w, h) in [(224, 224), (640, 480), (480, 640), (1, 1), (3000, 17)] {
        let frame = Frame::solid(w, h, [10, 20, 30, 255]).unwrap();
        assert_eq!(preprocess(&frame).as_bytes().len(), INPUT_TENSOR_BYTES, "{w}x{h}");
    }
}

#[test]
fn test_pure_red_is_rgb_order() {
    let frame = Frame::solid(320, 240, [255, 0, 0, 255]).unwrap();
    let values: Vec<f32> = preprocess(&frame).values().collect();
    assert_eq!(&values[..3], &[1.0, 0.0, 0.0]);
    assert_eq!(&values[values.len() - 3..], &[1.0, 0.0, 0.0]);
}

#[test]
fn test_channel_values_are_scaled_to_unit_range() {
    let frame = Frame::solid(50, 50, [0, 51, 255, 0]).unwrap();
    let values: Vec<f32> = preprocess(&frame).values().collect();
    assert_eq!(values.len(), INPUT_ELEMENTS);
    assert_eq!(&values[..3], &[0.0, 51.0 / 255.0, 1.0]);
}

#[test]
fn test_alpha_is_ignored() {
    let opaque = preprocess(&Frame::solid(8, 8, [12, 34, 56, 255]).unwrap());
    let clear = preprocess(&Frame::solid(8, 8, [12, 34, 56, 0]).unwrap());
    assert_eq!(opaque, clear);
}

#[test]
fn test_all_values_in_unit_range() {
    let data: Vec<u8> = (0..(31 * 19 * 4)).map(|i| (i * 13 % 256) as u8).collect();
    let frame = Frame::from_rgba(31, 19, data).unwrap();
    assert!(preprocess(&frame).values().all(|v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_row_major_layout() {
    // left half red, right half blue, already at model resolution
    let mut data = Vec::with_capacity(224 * 224 * 4);
    for _y in 0..224 {
        for x in 0..224 {
            if x < 112 {
                data.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
    }
    let frame = Frame::from_rgba(224, 224, data).unwrap();
    let values: Vec<f32> = preprocess(&frame).values().collect();

    let at = |x: usize, y: usize| &values[(y * 224 + x) * 3..(y * 224 + x) * 3 + 3];
    assert_eq!(at(0, 0), &[1.0, 0.0, 0.0]);
    assert_eq!(at(223, 0), &[0.0, 0.0, 1.0]);
    assert_eq!(at(111, 100), &[1.0, 0.0, 0.0]);
    assert_eq!(at(112, 100), &[0.0, 0.0, 1.0]);
}
