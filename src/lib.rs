pub mod classify;
pub mod models;

pub use classify::backend::{Classifier, ClassifierOutput, Labels, RtenClassifier};
pub use classify::normalize::{normalize, InputBuffer, INPUT_SIZE};
pub use classify::rank::{rank, TOP_K};
pub use classify::{ClassifyError, ClassifyPipeline};
pub use models::{Classification, DisplayState, Prediction};
