use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::NdTensor;

use super::normalize::{InputBuffer, INPUT_SIZE};

/// Output contract of the classifier service: the single best label plus
/// the complete class-to-probability map.
#[derive(Debug, Clone)]
pub struct ClassifierOutput {
    pub top_label: String,
    pub probabilities: HashMap<String, f32>,
}

/// The classifier boundary. Implementations map a normalized pixel buffer
/// to class probabilities; everything behind this trait is opaque to the
/// pipeline.
pub trait Classifier {
    fn classify(&self, input: &InputBuffer) -> anyhow::Result<ClassifierOutput>;
}

/// Class labels for a model, one name per output index.
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    /// Load labels from a text file, one label per line. Blank lines are
    /// skipped.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read labels file {}: {}", path.display(), e))?;

        let names = contents
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(Self { names })
    }

    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Label for a class index. Indices past the end of the list get a
    /// placeholder name so a short labels file doesn't abort inference.
    pub fn get(&self, idx: usize) -> String {
        self.names
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("class {}", idx))
    }
}

// Channel statistics the pre-trained ImageNet models were trained with.
const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Classifier backed by a `.rten` image-classification model.
///
/// Converts the input buffer to a normalized NCHW float tensor, runs the
/// model, applies softmax to the scores and names each class through the
/// labels file.
pub struct RtenClassifier {
    model: Model,
    labels: Labels,
}

impl RtenClassifier {
    pub fn new(model_path: &Path, labels_path: &Path) -> anyhow::Result<Self> {
        if !model_path.exists() {
            anyhow::bail!(
                "classifier model not found: {}\n\
                 Download a .rten image-classification model (e.g. MobileNet) \
                 and place it there, or pass --model",
                model_path.display()
            );
        }

        let model = Model::load_file(model_path)?;
        let labels = Labels::load(labels_path)?;

        Ok(Self { model, labels })
    }

    /// Default model and labels locations in the standard cache directory.
    pub fn default_paths() -> anyhow::Result<(PathBuf, PathBuf)> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        let cache_dir = Path::new(&home).join(".cache/piclabel");
        Ok((
            cache_dir.join("classifier.rten"),
            cache_dir.join("labels.txt"),
        ))
    }

    /// Build the NCHW float input tensor: scale bytes to [0, 1], then
    /// normalize each channel with the training-set mean and std.
    fn to_tensor(input: &InputBuffer) -> NdTensor<f32, 4> {
        let size = INPUT_SIZE as usize;
        let mut tensor = NdTensor::zeros([1, 3, size, size]);

        for (x, y, pixel) in input.as_rgb().enumerate_pixels() {
            for c in 0..3 {
                let value = pixel[c] as f32 / 255.0;
                tensor[[0, c, y as usize, x as usize]] = (value - MEAN[c]) / STD[c];
            }
        }

        tensor
    }
}

impl Classifier for RtenClassifier {
    fn classify(&self, input: &InputBuffer) -> anyhow::Result<ClassifierOutput> {
        let tensor = Self::to_tensor(input);

        let output = self
            .model
            .run_one(tensor.view().into(), None)
            .map_err(|e| anyhow::anyhow!("model run failed: {}", e))?;

        // Expected output shape is [1, num_classes].
        let scores: NdTensor<f32, 2> = output
            .try_into()
            .map_err(|e| anyhow::anyhow!("unexpected classifier output: {}", e))?;

        let logits: Vec<f32> = (0..scores.size(1)).map(|i| scores[[0, i]]).collect();
        if logits.is_empty() {
            anyhow::bail!("classifier produced no scores");
        }

        let probs = softmax(&logits);

        let mut top_idx = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[top_idx] {
                top_idx = i;
            }
        }

        let probabilities = probs
            .iter()
            .enumerate()
            .map(|(i, p)| (self.labels.get(i), *p))
            .collect();

        Ok(ClassifierOutput {
            top_label: self.labels.get(top_idx),
            probabilities,
        })
    }
}

/// Convert raw scores to probabilities that sum to 1. The max is
/// subtracted before exponentiation to keep large logits finite.
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
