use std::collections::HashMap;
use std::io::Write;

use image::{DynamicImage, ImageBuffer, Rgb};
use piclabel::{Classifier, ClassifierOutput, InputBuffer};
use tempfile::NamedTempFile;

/// Creates a gradient test image of the given size.
pub fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

/// Writes a valid PNG test image to a temp file.
/// The file is cleaned up when the handle is dropped.
pub fn create_test_image_file() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    create_test_image(100, 100)
        .save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Writes a file with a .png suffix that is not a decodable image.
pub fn create_corrupt_image_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"this is not a png")
        .expect("Failed to write corrupt image data");
    file
}

/// Classifier that returns a fixed output regardless of input.
pub struct FixedClassifier {
    pub output: ClassifierOutput,
}

impl Classifier for FixedClassifier {
    fn classify(&self, _input: &InputBuffer) -> anyhow::Result<ClassifierOutput> {
        Ok(self.output.clone())
    }
}

/// Classifier that always fails, standing in for a missing model.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn classify(&self, _input: &InputBuffer) -> anyhow::Result<ClassifierOutput> {
        anyhow::bail!("model unavailable")
    }
}

/// The cat/dog/bird probability map used across pipeline tests.
pub fn animal_output() -> ClassifierOutput {
    let mut probabilities = HashMap::new();
    probabilities.insert("cat".to_string(), 0.7);
    probabilities.insert("dog".to_string(), 0.2);
    probabilities.insert("bird".to_string(), 0.1);
    ClassifierOutput {
        top_label: "cat".to_string(),
        probabilities,
    }
}
