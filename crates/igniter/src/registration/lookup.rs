use crate::training::{Training, TrainingId};

/// Shown in place of a training when a registration has no training at all
pub const NO_TRAINING: &str = "–";

/// Title of the training a registration points at.
///
/// Registrations keep their training ID after the training is deleted, so a
/// missing training falls back to the raw ID, or [`NO_TRAINING`] when the ID
/// is empty.
pub fn training_title<'a>(trainings: &'a [Training], training_id: &'a TrainingId) -> &'a str {
    match trainings.iter().find(|t| &t.id == training_id) {
        Some(training) => &training.title,
        None if training_id.is_empty() => NO_TRAINING,
        None => training_id.as_str(),
    }
}
