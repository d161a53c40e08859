pub mod backend;
pub mod normalize;
pub mod rank;

use std::path::Path;

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::models::Classification;
use backend::Classifier;

/// Why a classification request produced no result.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The input image is absent, corrupt, or could not be converted
    /// to the buffer format the classifier expects.
    #[error("failed to normalize input image: {0}")]
    Normalization(String),

    /// The classifier backend failed (model unavailable, inference error).
    #[error("inference failed: {0}")]
    Inference(#[source] anyhow::Error),
}

/// Main classification pipeline orchestrator
///
/// Composes the three stages: normalize the image to the classifier's
/// fixed input buffer, run the classifier, rank its probabilities.
pub struct ClassifyPipeline {
    classifier: Box<dyn Classifier>,
    top_k: usize,
    verbose: bool,
}

impl ClassifyPipeline {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            top_k: rank::TOP_K,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Override how many predictions the ranked list keeps.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Run the full pipeline on a decoded image.
    ///
    /// Returns the classifier's top label verbatim plus the ranked list of
    /// the highest class probabilities. Calling this twice with the same
    /// image yields the same result for a deterministic classifier.
    pub fn classify(&self, img: &DynamicImage) -> Result<Classification, ClassifyError> {
        if self.verbose {
            println!(
                "Normalizing {}x{} image to {}x{}...",
                img.width(),
                img.height(),
                normalize::INPUT_SIZE,
                normalize::INPUT_SIZE
            );
        }
        let buffer = normalize::normalize(img)?;

        if self.verbose {
            println!("Running classifier...");
        }
        let output = self
            .classifier
            .classify(&buffer)
            .map_err(ClassifyError::Inference)?;

        if self.verbose {
            println!("Classifier returned {} classes", output.probabilities.len());
        }
        let predictions = rank::rank(&output.probabilities, self.top_k);

        Ok(Classification {
            top_label: output.top_label,
            predictions,
        })
    }

    /// Open and decode an image file, then classify it.
    ///
    /// A missing or undecodable file counts as a normalization failure.
    pub fn classify_path(&self, path: &Path) -> Result<Classification, ClassifyError> {
        let img = ImageReader::open(path)
            .map_err(|e| {
                ClassifyError::Normalization(format!("failed to open {}: {}", path.display(), e))
            })?
            .decode()
            .map_err(|e| {
                ClassifyError::Normalization(format!("failed to decode {}: {}", path.display(), e))
            })?;

        self.classify(&img)
    }
}
