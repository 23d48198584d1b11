//! Labeled example utterances for priority inference.

use super::Intent;

/// A single labeled utterance; the training set is the classifier's only
/// ground truth.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub text: String,
    pub intent: Intent,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, intent: Intent) -> Self {
        Self {
            text: text.into(),
            intent,
        }
    }
}

/// The built-in training set, shared by every resolver construction site.
pub fn default_training_set() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new("This is urgent", Intent::PriorityHigh),
        TrainingExample::new("Finish this as soon as possible", Intent::PriorityHigh),
        TrainingExample::new("Do this later", Intent::PriorityLow),
        TrainingExample::new("No rush, do it anytime", Intent::PriorityLow),
        TrainingExample::new("This is important", Intent::PriorityMedium),
        TrainingExample::new("This needs to be done soon", Intent::PriorityMedium),
    ]
}
