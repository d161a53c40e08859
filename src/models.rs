/// A single ranked class prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probability: f32,
}

/// Result of one classification run: the model's best label plus the
/// ranked list of the highest class probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub top_label: String,
    pub predictions: Vec<Prediction>,
}

/// What the presentation layer is currently showing.
///
/// Starts at `Idle`; only a successful classification moves it to
/// `HasResult`. A failed run leaves the previous state in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    HasResult(Classification),
}

impl DisplayState {
    /// Fold a classification outcome into the next display state.
    /// Failures keep whatever was displayed before.
    pub fn apply<E>(self, outcome: Result<Classification, E>) -> DisplayState {
        match outcome {
            Ok(result) => DisplayState::HasResult(result),
            Err(_) => self,
        }
    }

    /// The currently displayed result, if any.
    pub fn result(&self) -> Option<&Classification> {
        match self {
            DisplayState::Idle => None,
            DisplayState::HasResult(result) => Some(result),
        }
    }
}
