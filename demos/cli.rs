use clap::Parser;
use image::GenericImageView;
use ndarray::arr2;
use yolo_utils::{
    draw_boxes, generate_colors, preprocess_image, read_anchors, read_classes, scale_boxes,
    BoundingBox, Detection, LabelFont,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image to annotate
    image_path: String,

    /// Newline-delimited class name file
    classes_path: String,

    /// Comma-delimited anchor file
    anchors_path: String,

    /// TrueType/OpenType font for labels
    font_path: String,

    /// Where to save the annotated image
    output_path: String,

    /// Model input height
    #[arg(long, default_value = "416")]
    input_height: u32,

    /// Model input width
    #[arg(long, default_value = "416")]
    input_width: u32,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let class_names = read_classes(&args.classes_path).expect("Failed to read class file");
    let anchors = read_anchors(&args.anchors_path).expect("Failed to read anchor file");
    let colors = generate_colors(&class_names);
    let font = LabelFont::from_file(&args.font_path).expect("Failed to load font");

    let (mut image, tensor) =
        preprocess_image(&args.image_path, (args.input_height, args.input_width))
            .expect("Failed to preprocess image");
    println!(
        "{} classes, {} anchors, model input tensor {:?}",
        class_names.len(),
        anchors.len(),
        tensor.shape()
    );

    // Stand-in detections covering fixed fractions of the image; a real
    // pipeline would take these from the model output instead.
    let normalized = arr2(&[[0.1, 0.1, 0.5, 0.6], [0.4, 0.3, 0.9, 0.8]]);
    let (width, height) = image.dimensions();
    let scaled = scale_boxes(&normalized, (height, width)).expect("Failed to scale boxes");

    let detections: Vec<Detection> = scaled
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| Detection {
            score: 0.9 - 0.2 * i as f32,
            bbox: BoundingBox {
                top: row[0],
                left: row[1],
                bottom: row[2],
                right: row[3],
            },
            class_id: i % class_names.len(),
        })
        .collect();

    draw_boxes(&mut image, &detections, &class_names, &colors, &font)
        .expect("Failed to draw boxes");
    image
        .save(&args.output_path)
        .expect("Failed to save output image");
}
