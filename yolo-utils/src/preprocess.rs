use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::DynamicImage;
use ndarray::Array4;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessImageError {
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading image file")]
    Io(#[from] io::Error),
    #[error("Error decoding image")]
    Image(#[from] image::ImageError),
}

/// Loads an image and prepares it as model input.
///
/// `model_image_size` is (height, width), matching the layout of the returned
/// tensor; the resize itself receives (width, height) as the image crate
/// expects. Returns the full-resolution decoded image, kept for drawing the
/// results later, together with a (1, height, width, 3) tensor of RGB values
/// normalized into [0, 1]. The resize is exact (no aspect-ratio preservation)
/// with bicubic interpolation.
pub fn preprocess_image(
    path: impl AsRef<Path>,
    model_image_size: (u32, u32),
) -> Result<(DynamicImage, Array4<f32>), PreprocessImageError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PreprocessImageError::NotFound(path.to_path_buf()),
        _ => PreprocessImageError::Io(err),
    })?;
    // Sniff the format from the content rather than trusting the extension
    let image = reader.with_guessed_format()?.decode()?;

    let (height, width) = model_image_size;
    let resized = image
        .resize_exact(width, height, FilterType::CatmullRom)
        .to_rgb8();

    let mut tensor = Array4::zeros((1, height as usize, width as usize, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
        }
    }

    Ok((image, tensor))
}
