//! Short-text intent classification for priority inference.
//!
//! The classifier is trained once from a small set of labeled example
//! utterances and then scores arbitrary text against each category with a
//! bag-of-words term-frequency model. Training and inference are separated
//! so tests can inject small deterministic fixture sets.

mod training;

pub use training::{default_training_set, TrainingExample};

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::errors::{TaskError, TaskResult};

/// Categories the classifier can predict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    PriorityHigh,
    PriorityLow,
    PriorityMedium,
}

impl Intent {
    /// All intents in fixed order; scoring iterates this for deterministic
    /// tie-breaking.
    pub const ALL: [Intent; 3] = [
        Intent::PriorityHigh,
        Intent::PriorityLow,
        Intent::PriorityMedium,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriorityHigh => write!(f, "priority-high"),
            Self::PriorityLow => write!(f, "priority-low"),
            Self::PriorityMedium => write!(f, "priority-medium"),
        }
    }
}

/// Outcome of a single inference call; transient, never persisted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Best-matching category, or `None` when the input held no tokens
    pub intent: Option<Intent>,
    /// Score in [0, 1] backing the prediction
    pub confidence: f32,
}

/// Per-category token weights built from the training set.
#[derive(Debug)]
struct Model {
    weights: HashMap<Intent, HashMap<String, f32>>,
}

impl Model {
    fn build(examples: &[TrainingExample]) -> Self {
        let mut counts: HashMap<Intent, HashMap<String, u32>> = HashMap::new();
        let mut totals: HashMap<Intent, u32> = HashMap::new();

        for example in examples {
            for token in tokenize(&example.text) {
                *counts
                    .entry(example.intent)
                    .or_default()
                    .entry(token)
                    .or_insert(0) += 1;
                *totals.entry(example.intent).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(intent, tokens)| {
                #[allow(clippy::cast_precision_loss)]
                let total = f32::max(totals[&intent] as f32, 1.0);
                let weighted = tokens
                    .into_iter()
                    .map(|(token, count)| {
                        #[allow(clippy::cast_precision_loss)]
                        let weight = count as f32 / total;
                        (token, weight)
                    })
                    .collect();
                (intent, weighted)
            })
            .collect();

        Self { weights }
    }

    /// Mean matched-token weight over the input tokens, in [0, 1].
    fn score(&self, intent: Intent, tokens: &[String]) -> Option<f32> {
        let weights = self.weights.get(&intent)?;
        let matched: f32 = tokens
            .iter()
            .filter_map(|token| weights.get(token))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        Some((matched / tokens.len() as f32).clamp(0.0, 1.0))
    }
}

/// Supervised intent classifier over a fixed training set.
///
/// Inference is read-only; re-training swaps the whole model under a write
/// lock so concurrent classify calls never observe a partially built model.
pub struct IntentClassifier {
    model: RwLock<Option<Model>>,
}

impl IntentClassifier {
    /// Create an untrained classifier; classify fails with
    /// [`TaskError::ModelNotReady`] until [`train`](Self::train) succeeds.
    pub fn new() -> Self {
        Self {
            model: RwLock::new(None),
        }
    }

    /// Build the model from labeled examples, replacing any previous model.
    ///
    /// Idempotent: repeated calls with the same examples produce the same
    /// model. Fails only on an empty example set.
    pub fn train(&self, examples: &[TrainingExample]) -> TaskResult<()> {
        if examples.is_empty() {
            return Err(TaskError::EmptyTrainingSet);
        }

        let model = Model::build(examples);
        // A poisoned lock can only ever hold a fully swapped model
        *self
            .model
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(model);
        Ok(())
    }

    /// Score `text` against every trained category and return the best match.
    ///
    /// Empty or whitespace-only input yields no intent with confidence 0.
    /// Unrecognized vocabulary still yields the best guess with a score near
    /// zero; confidence gating is the resolver's concern.
    pub fn classify(&self, text: &str) -> TaskResult<Classification> {
        let guard = self.model.read().unwrap_or_else(PoisonError::into_inner);
        let model = guard.as_ref().ok_or(TaskError::ModelNotReady)?;

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Classification {
                intent: None,
                confidence: 0.0,
            });
        }

        let mut best: Option<(Intent, f32)> = None;
        for intent in Intent::ALL {
            let Some(score) = model.score(intent, &tokens) else {
                continue;
            };
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((intent, score)),
            }
        }

        let (intent, confidence) = match best {
            Some((intent, score)) => (Some(intent), score),
            None => (None, 0.0),
        };

        Ok(Classification { intent, confidence })
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase alphanumeric tokenization.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
