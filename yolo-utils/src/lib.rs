use image::Rgba;

pub use anchors::{read_anchors, ReadAnchorsError};
pub use classes::{read_classes, ReadClassesError};
pub use colors::generate_colors;
pub use draw::{draw_boxes, DrawBoxesError, FontLoadError, LabelFont};
pub use preprocess::{preprocess_image, PreprocessImageError};
pub use scale::{scale_boxes, ScaleBoxesError};

mod anchors;
mod classes;
mod colors;
mod draw;
mod preprocess;
mod scale;

/// A predefined anchor-box shape in model-input units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub width: f32,
    pub height: f32,
}

/// An RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Black, used for label text.
    pub const BLACK: Color = Color(0, 0, 0);
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.0, color.1, color.2, 255])
    }
}

/// Box corners in (top, left, bottom, right) order, either normalized or in
/// pixels depending on the pipeline stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

/// A single detection produced by the model
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Confidence in [0, 1]
    pub score: f32,
    pub bbox: BoundingBox,
    /// Index into the class-name list loaded with [`read_classes`]
    pub class_id: usize,
}
