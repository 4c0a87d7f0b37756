use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, Rgba};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use thiserror::Error;
use tracing::info;

use crate::{BoundingBox, Color, Detection};

#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("Font file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading font file")]
    Io(#[from] io::Error),
    #[error("Font data is not a usable TrueType/OpenType font")]
    InvalidFont,
}

#[derive(Error, Debug)]
pub enum DrawBoxesError {
    #[error("Class id {class_id} is out of range for {known} known classes")]
    InvalidClassId { class_id: usize, known: usize },
}

/// Font resource used for detection labels.
pub struct LabelFont {
    font: Font<'static>,
}

impl LabelFont {
    /// Loads a TrueType/OpenType font from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FontLoadError::NotFound(path.to_path_buf()),
            _ => FontLoadError::Io(err),
        })?;
        Self::from_bytes(data)
    }

    /// Loads a TrueType/OpenType font from raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontLoadError> {
        let font = Font::try_from_vec(data).ok_or(FontLoadError::InvalidFont)?;
        Ok(LabelFont { font })
    }
}

/// Draws every detection's bounding box and label onto the image in place.
///
/// Boxes are expected in pixel coordinates (see [`crate::scale_boxes`]).
/// Corners are rounded half-up and clamped to the image bounds. The label is
/// placed above the box when it fits, otherwise just inside the top edge.
/// Detections are drawn in reverse index order so that where labels overlap,
/// earlier detections end up on top.
pub fn draw_boxes(
    image: &mut DynamicImage,
    detections: &[Detection],
    class_names: &[String],
    colors: &[Color],
    font: &LabelFont,
) -> Result<(), DrawBoxesError> {
    let (width, height) = image.dimensions();
    let scale = Scale::uniform(font_size(height) as f32);
    let thickness = border_thickness(width, height);

    for detection in detections.iter().rev() {
        let class_name =
            class_names
                .get(detection.class_id)
                .ok_or(DrawBoxesError::InvalidClassId {
                    class_id: detection.class_id,
                    known: class_names.len(),
                })?;
        let color = *colors
            .get(detection.class_id)
            .ok_or(DrawBoxesError::InvalidClassId {
                class_id: detection.class_id,
                known: colors.len(),
            })?;

        let label = label_text(class_name, detection.score);
        let (label_width, label_height) = text_size(scale, &font.font, &label);

        let (top, left, bottom, right) = pixel_corners(&detection.bbox, width, height);
        info!("{} ({}, {}) ({}, {})", label, left, top, right, bottom);

        let fill = Rgba::from(color);
        for inset in 0..thickness {
            let inner_width = right - left - 2 * inset;
            let inner_height = bottom - top - 2 * inset;
            if inner_width <= 0 || inner_height <= 0 {
                break;
            }
            let rect = Rect::at(left + inset, top + inset)
                .of_size(inner_width as u32, inner_height as u32);
            draw_hollow_rect_mut(image, rect, fill);
        }

        if label_width > 0 && label_height > 0 {
            let (text_x, text_y) = label_origin(left, top, label_height);
            let background =
                Rect::at(text_x, text_y).of_size(label_width as u32, label_height as u32);
            draw_filled_rect_mut(image, background, fill);
            draw_text_mut(
                image,
                Rgba::from(Color::BLACK),
                text_x,
                text_y,
                scale,
                &font.font,
                &label,
            );
        }
    }

    Ok(())
}

fn label_text(class_name: &str, score: f32) -> String {
    format!("{} {:.2}", class_name, score)
}

/// Label font size in pixels for an image of the given height.
fn font_size(image_height: u32) -> u32 {
    (0.03 * image_height as f32 + 0.5).floor() as u32
}

/// Outline thickness in pixels, drawn as this many nested rectangles.
fn border_thickness(width: u32, height: u32) -> i32 {
    ((width + height) / 300) as i32
}

/// Rounds box corners half-up and clamps top/left to 0 and bottom/right to
/// the image height/width.
fn pixel_corners(bbox: &BoundingBox, width: u32, height: u32) -> (i32, i32, i32, i32) {
    let top = (bbox.top + 0.5).floor().max(0.0) as i32;
    let left = (bbox.left + 0.5).floor().max(0.0) as i32;
    let bottom = (bbox.bottom + 0.5).floor().min(height as f32) as i32;
    let right = (bbox.right + 0.5).floor().min(width as f32) as i32;
    (top, left, bottom, right)
}

/// Anchor for the label background: above the box when there is room for the
/// label height, otherwise just inside the top edge.
fn label_origin(left: i32, top: i32, label_height: i32) -> (i32, i32) {
    if top - label_height >= 0 {
        (left, top - label_height)
    } else {
        (left, top + 1)
    }
}
