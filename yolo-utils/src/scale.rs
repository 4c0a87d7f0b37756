use ndarray::{arr1, Array2};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaleBoxesError {
    #[error("Expected boxes of shape (N, 4), got a box axis of {0}")]
    ShapeMismatch(usize),
}

/// Scales a batch of normalized (top, left, bottom, right) boxes to pixel
/// coordinates for an image of the given (height, width).
///
/// Top and bottom are multiplied by the height, left and right by the width.
/// No clamping is applied; row order and count are preserved.
pub fn scale_boxes(
    boxes: &Array2<f32>,
    image_shape: (u32, u32),
) -> Result<Array2<f32>, ScaleBoxesError> {
    if boxes.ncols() != 4 {
        return Err(ScaleBoxesError::ShapeMismatch(boxes.ncols()));
    }
    let (height, width) = image_shape;
    let image_dims = arr1(&[height as f32, width as f32, height as f32, width as f32]);
    Ok(boxes * &image_dims)
}
