//! Priority resolution on top of the intent classifier.

use std::sync::Arc;

use crate::classifier::{Intent, IntentClassifier};
use crate::entities::TaskPriority;
use crate::errors::TaskResult;

/// Minimum confidence required to trust the classifier's best guess.
///
/// Below this floor the prediction is vocabulary noise (no training token
/// matched, or a lone weak match diluted by a long description) and the safe
/// default applies.
pub const CONFIDENCE_FLOOR: f32 = 0.05;

/// Maps classifier output to a task priority with a confidence-gated default.
///
/// Side-effect free: resolving never mutates a task; callers store the label.
pub struct PriorityResolver {
    classifier: Arc<IntentClassifier>,
}

impl PriorityResolver {
    pub fn new(classifier: Arc<IntentClassifier>) -> Self {
        Self { classifier }
    }

    /// Resolve a priority label for free text.
    ///
    /// Total for any string given a trained model: always returns one of the
    /// three labels. Fails only when the classifier is not trained yet.
    pub fn resolve(&self, text: &str) -> TaskResult<TaskPriority> {
        let result = self.classifier.classify(text)?;

        let priority = match result.intent {
            Some(intent) if result.confidence >= CONFIDENCE_FLOOR => match intent {
                Intent::PriorityHigh => TaskPriority::High,
                Intent::PriorityLow => TaskPriority::Low,
                Intent::PriorityMedium => TaskPriority::Medium,
            },
            // No guess, or too weak a guess to act on
            _ => TaskPriority::Medium,
        };

        Ok(priority)
    }
}
