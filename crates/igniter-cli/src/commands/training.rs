//! Training catalogue commands

use super::confirm::confirm;
use super::or_blank;
use crate::error::CliError;
use igniter::{Igniter, Training, TrainingId, TrainingInput};

/// Training form fields. Fields left out keep their current value on edit.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TrainingFields {
    /// Course title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Course description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Duration, e.g. "2 days"
    #[arg(long)]
    pub duration: Option<String>,

    /// Date the course runs
    #[arg(long)]
    pub date: Option<String>,

    /// Number of seats
    #[arg(long)]
    pub capacity: Option<String>,
}

impl TrainingFields {
    /// Overlay the given fields onto `input`
    pub fn apply(self, mut input: TrainingInput) -> TrainingInput {
        if let Some(title) = self.title {
            input.title = title;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(duration) = self.duration {
            input.duration = duration;
        }
        if let Some(date) = self.date {
            input.date = date;
        }
        if let Some(capacity) = self.capacity {
            input.capacity = capacity;
        }
        input
    }
}

pub async fn training_list(app: &Igniter, json: bool) -> Result<(), CliError> {
    let trainings = app.trainings().list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trainings)?);
        return Ok(());
    }

    if trainings.is_empty() {
        println!("No training programs yet. Add one with: igniter training add --title <title>");
        return Ok(());
    }

    println!("Found {} training(s):", trainings.len());
    println!("─────────────────────────────────────────");
    for training in &trainings {
        print_card(training);
        println!();
    }

    Ok(())
}

pub async fn training_show(app: &Igniter, id: &str) -> Result<(), CliError> {
    let training = app
        .trainings()
        .get(&TrainingId::from(id))
        .await?
        .ok_or_else(|| CliError::InvalidInput(format!("Training '{}' not found", id)))?;

    println!("📚 {}", training.title);
    println!("─────────────────────────────────────────");
    println!("🆔 ID: {}", training.id);
    println!("⏱️  Duration: {}", or_blank(&training.duration));
    println!("📅 Date: {}", or_blank(&training.date));
    println!("👥 Capacity: {}", or_blank(&training.capacity));
    if !training.description.is_empty() {
        println!("📝 {}", training.description);
    }

    Ok(())
}

pub async fn training_add(app: &Igniter, fields: TrainingFields) -> Result<(), CliError> {
    let input = fields.apply(TrainingInput::default());
    let training = app.trainings().create(input).await?;

    println!("✅ Training added.");
    println!("   🆔 {}", training.id);

    Ok(())
}

pub async fn training_edit(
    app: &Igniter,
    id: &str,
    fields: TrainingFields,
) -> Result<(), CliError> {
    let id = TrainingId::from(id);

    // unknown IDs are saved as new trainings
    let current = match app.trainings().get(&id).await? {
        Some(existing) => TrainingInput::from(&existing),
        None => TrainingInput::default(),
    };
    let training = app.trainings().update(&id, fields.apply(current)).await?;

    println!("✅ Training updated.");
    print_card(&training);

    Ok(())
}

pub async fn training_remove(app: &Igniter, id: &str, yes: bool) -> Result<(), CliError> {
    let id = TrainingId::from(id);
    let Some(training) = app.trainings().get(&id).await? else {
        println!("Training '{}' not found, nothing to delete.", id);
        return Ok(());
    };

    if !yes
        && !confirm(&format!(
            "Delete training \"{}\"? This cannot be undone.",
            training.title
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    app.trainings().delete(&id).await?;
    println!("🗑️  Training deleted.");

    Ok(())
}

fn print_card(training: &Training) {
    println!("📚 {}  ({})", training.title, training.id);

    let meta: Vec<&str> = [training.duration.as_str(), training.date.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !meta.is_empty() {
        println!("   {}", meta.join(" · "));
    }
    if !training.description.is_empty() {
        println!("   📝 {}", training.description);
    }
    if !training.capacity.is_empty() {
        println!("   👥 Capacity: {}", training.capacity);
    }
}
