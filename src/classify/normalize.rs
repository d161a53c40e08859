use image::{imageops, DynamicImage, RgbImage};

use super::ClassifyError;

/// Fixed square input resolution required by the classifier.
pub const INPUT_SIZE: u32 = 224;

/// RGB8 pixel buffer guaranteed to be `INPUT_SIZE` x `INPUT_SIZE`,
/// row-major, 3 bytes per pixel. Only `normalize` constructs one, so a
/// classifier backend never has to re-check dimensions.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    image: RgbImage,
}

impl InputBuffer {
    pub fn width(&self) -> u32 {
        INPUT_SIZE
    }

    pub fn height(&self) -> u32 {
        INPUT_SIZE
    }

    /// Raw row-major RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }
}

/// Resize an image to the classifier's fixed square input and convert it
/// to RGB8. The aspect ratio is not preserved; the image is stretched to
/// fill the square, matching the model's input contract.
///
/// Uses bilinear filtering, so the same input always produces the same
/// buffer. No state is kept between calls.
pub fn normalize(img: &DynamicImage) -> Result<InputBuffer, ClassifyError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(ClassifyError::Normalization(
            "input image has zero width or height".to_string(),
        ));
    }

    let resized = imageops::resize(
        &img.to_rgb8(),
        INPUT_SIZE,
        INPUT_SIZE,
        imageops::FilterType::Triangle,
    );

    if resized.dimensions() != (INPUT_SIZE, INPUT_SIZE) {
        return Err(ClassifyError::Normalization(format!(
            "resize produced a {}x{} buffer instead of {}x{}",
            resized.width(),
            resized.height(),
            INPUT_SIZE,
            INPUT_SIZE
        )));
    }

    Ok(InputBuffer { image: resized })
}
