// tests/utils_tests.rs
use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use ndarray::{arr2, Array2};
use yolo_utils::{
    draw_boxes, generate_colors, preprocess_image, read_anchors, read_classes, scale_boxes,
    BoundingBox, Detection, LabelFont, PreprocessImageError, ReadAnchorsError, ReadClassesError,
    ScaleBoxesError,
};

/// Unique path under the system temp directory for a test fixture.
fn fixture_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("yolo-utils-test-{}-{}", std::process::id(), name));
    path
}

#[test]
fn classes_are_read_in_file_order() {
    let path = fixture_path("classes-order.txt");
    fs::write(&path, "person\ncar\n").unwrap();

    let classes = read_classes(&path).unwrap();
    assert_eq!(classes, vec!["person", "car"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn classes_are_stripped_and_blank_lines_kept() {
    let path = fixture_path("classes-blank.txt");
    fs::write(&path, "  person \n\ncar\n").unwrap();

    let classes = read_classes(&path).unwrap();
    assert_eq!(classes, vec!["person", "", "car"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_class_file_is_reported_as_not_found() {
    let path = fixture_path("classes-missing.txt");
    match read_classes(&path) {
        Err(ReadClassesError::NotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn anchors_pair_consecutive_values() {
    let path = fixture_path("anchors-pairs.txt");
    // Only the first line counts
    fs::write(&path, "0.57, 0.67, 1.87,2.06\n9.9,9.9\n").unwrap();

    let anchors = read_anchors(&path).unwrap();
    assert_eq!(anchors.len(), 2);
    assert_eq!((anchors[0].width, anchors[0].height), (0.57, 0.67));
    assert_eq!((anchors[1].width, anchors[1].height), (1.87, 2.06));

    fs::remove_file(&path).unwrap();
}

#[test]
fn odd_anchor_count_is_rejected() {
    let path = fixture_path("anchors-odd.txt");
    fs::write(&path, "1.0,2.0,3.0\n").unwrap();

    match read_anchors(&path) {
        Err(ReadAnchorsError::OddCount(count)) => assert_eq!(count, 3),
        other => panic!("expected OddCount, got {:?}", other),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn malformed_anchor_value_is_rejected() {
    let path = fixture_path("anchors-bad.txt");
    fs::write(&path, "1.0,oops\n").unwrap();

    assert!(matches!(
        read_anchors(&path),
        Err(ReadAnchorsError::InvalidNumber(_))
    ));

    fs::remove_file(&path).unwrap();
}

#[test]
fn colors_match_class_count_and_are_deterministic() {
    let class_names: Vec<String> = (0..80).map(|i| format!("class{}", i)).collect();

    let first = generate_colors(&class_names);
    let second = generate_colors(&class_names);

    assert_eq!(first.len(), class_names.len());
    assert_eq!(first, second);
}

#[test]
fn colors_are_unaffected_by_other_random_draws() {
    let class_names = vec!["person".to_string(), "car".to_string()];

    let first = generate_colors(&class_names);
    // Interleave unrelated draws from the global generator; the seeded
    // shuffle is local to generate_colors and must not notice.
    let _: u64 = rand::random();
    let second = generate_colors(&class_names);
    let _: u64 = rand::random();

    assert_eq!(first, second);
}

#[test]
fn no_classes_means_no_colors() {
    assert!(generate_colors(&[]).is_empty());
}

#[test]
fn boxes_scale_elementwise_by_height_and_width() {
    let boxes = arr2(&[[0.5, 0.5, 1.0, 1.0], [0.0, 0.25, 0.125, 0.75]]);

    let scaled = scale_boxes(&boxes, (200, 100)).unwrap();

    assert_eq!(
        scaled,
        arr2(&[[100.0, 50.0, 200.0, 100.0], [0.0, 25.0, 25.0, 75.0]])
    );
}

#[test]
fn unit_image_scaling_is_identity() {
    let boxes = arr2(&[[0.1, 0.2, 0.3, 0.4]]);
    assert_eq!(scale_boxes(&boxes, (1, 1)).unwrap(), boxes);
}

#[test]
fn wrong_box_axis_is_rejected() {
    let boxes = Array2::<f32>::zeros((3, 5));
    assert!(matches!(
        scale_boxes(&boxes, (100, 100)),
        Err(ScaleBoxesError::ShapeMismatch(5))
    ));
}

#[test]
fn empty_batch_scales_to_empty_batch() {
    let boxes = Array2::<f32>::zeros((0, 4));
    let scaled = scale_boxes(&boxes, (480, 640)).unwrap();
    assert_eq!(scaled.shape(), &[0, 4]);
}

#[test]
fn preprocessed_tensor_has_batch_axis_and_unit_range() {
    let path = fixture_path("preprocess.png");
    let mut source = RgbImage::new(64, 48);
    for (x, y, pixel) in source.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 4) as u8, (y * 5) as u8, 200]);
    }
    source.save(&path).unwrap();

    let (original, tensor) = preprocess_image(&path, (32, 20)).unwrap();

    // Original dimensions are untouched; tensor uses (1, height, width, 3)
    assert_eq!(original.dimensions(), (64, 48));
    assert_eq!(tensor.shape(), &[1, 32, 20, 3]);
    assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_image_is_reported_as_not_found() {
    let path = fixture_path("preprocess-missing.png");
    assert!(matches!(
        preprocess_image(&path, (32, 32)),
        Err(PreprocessImageError::NotFound(_))
    ));
}

#[test]
fn undecodable_image_is_rejected() {
    let path = fixture_path("preprocess-garbage.png");
    fs::write(&path, b"not actually a png").unwrap();

    assert!(matches!(
        preprocess_image(&path, (32, 32)),
        Err(PreprocessImageError::Image(_))
    ));

    fs::remove_file(&path).unwrap();
}

// Rendering needs a real font binary, which the repository does not ship.
// Point YOLO_UTILS_TEST_FONT at any .ttf/.otf file and run with --ignored.
#[test]
#[ignore = "requires YOLO_UTILS_TEST_FONT to point at a .ttf/.otf file"]
fn boxes_render_without_panicking() {
    let font_path = std::env::var("YOLO_UTILS_TEST_FONT").expect("YOLO_UTILS_TEST_FONT not set");
    let font = LabelFont::from_file(font_path).unwrap();

    let class_names = vec!["person".to_string(), "car".to_string()];
    let colors = generate_colors(&class_names);
    let mut image = DynamicImage::ImageRgb8(RgbImage::new(200, 200));
    let detections = vec![
        Detection {
            score: 0.87,
            bbox: BoundingBox {
                top: 10.0,
                left: 20.0,
                bottom: 100.0,
                right: 120.0,
            },
            class_id: 0,
        },
        // Too close to the top edge for the label to fit above the box
        Detection {
            score: 0.50,
            bbox: BoundingBox {
                top: 1.0,
                left: -3.0,
                bottom: 250.0,
                right: 300.0,
            },
            class_id: 1,
        },
    ];

    draw_boxes(&mut image, &detections, &class_names, &colors, &font).unwrap();

    // Out-of-range class ids are rejected before anything is drawn
    let bad = vec![Detection {
        score: 0.9,
        bbox: BoundingBox {
            top: 0.0,
            left: 0.0,
            bottom: 10.0,
            right: 10.0,
        },
        class_id: 7,
    }];
    assert!(draw_boxes(&mut image, &bad, &class_names, &colors, &font).is_err());
}
