//! Registration commands

use super::confirm::confirm;
use super::or_blank;
use crate::error::CliError;
use igniter::registration::training_title;
use igniter::{Igniter, RegistrationId, RegistrationInput};

/// Registration form fields. Fields left out keep their current value on edit.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RegistrationFields {
    /// Full name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Email address
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Phone number
    #[arg(long, short = 'p')]
    pub phone: Option<String>,

    /// ID of the training to register for
    #[arg(long = "training", short = 't')]
    pub training_id: Option<String>,

    /// Preferred date
    #[arg(long = "date-pref")]
    pub date_preference: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl RegistrationFields {
    /// Overlay the given fields onto `input`
    pub fn apply(self, mut input: RegistrationInput) -> RegistrationInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(email) = self.email {
            input.email = email;
        }
        if let Some(phone) = self.phone {
            input.phone = phone;
        }
        if let Some(training_id) = self.training_id {
            input.training_id = training_id;
        }
        if let Some(date_preference) = self.date_preference {
            input.date_preference = date_preference;
        }
        if let Some(notes) = self.notes {
            input.notes = notes;
        }
        input
    }
}

pub async fn registration_list(app: &Igniter, json: bool) -> Result<(), CliError> {
    if json {
        let registrations = app.registrations().list().await?;
        println!("{}", serde_json::to_string_pretty(&registrations)?);
        return Ok(());
    }

    let rows = app.registration_rows().await?;
    if rows.is_empty() {
        println!("No registrations yet.");
        return Ok(());
    }

    println!("Found {} registration(s):", rows.len());
    println!("─────────────────────────────────────────");
    for row in &rows {
        let r = &row.registration;
        println!("👤 {} <{}>  ({})", r.name, r.email, r.id);
        println!(
            "   📚 {}   📅 {}",
            row.training_title,
            or_blank(&r.date_preference)
        );
    }

    Ok(())
}

pub async fn registration_show(app: &Igniter, id: &str) -> Result<(), CliError> {
    let registration = app
        .registrations()
        .get(&RegistrationId::from(id))
        .await?
        .ok_or_else(|| CliError::InvalidInput(format!("Registration '{}' not found", id)))?;
    let trainings = app.trainings().list().await?;

    println!("👤 {}", registration.name);
    println!("─────────────────────────────────────────");
    println!("🆔 ID: {}", registration.id);
    println!("✉️  Email: {}", registration.email);
    println!("📞 Phone: {}", or_blank(&registration.phone));
    println!(
        "📚 Training: {}",
        training_title(&trainings, &registration.training_id)
    );
    println!("📅 Preferred date: {}", or_blank(&registration.date_preference));
    println!("🕒 Submitted: {}", registration.created_at);
    if !registration.notes.is_empty() {
        println!("📝 {}", registration.notes);
    }

    Ok(())
}

pub async fn registration_add(app: &Igniter, fields: RegistrationFields) -> Result<(), CliError> {
    let input = fields.apply(RegistrationInput::default());
    let registration = app.registrations().create(input).await?;

    println!("✅ Registration submitted successfully.");
    println!("   🆔 {}", registration.id);

    Ok(())
}

pub async fn registration_edit(
    app: &Igniter,
    id: &str,
    fields: RegistrationFields,
) -> Result<(), CliError> {
    let id = RegistrationId::from(id);
    let Some(existing) = app.registrations().get(&id).await? else {
        println!("Registration '{}' not found, nothing changed.", id);
        return Ok(());
    };

    let input = fields.apply(RegistrationInput::from(&existing));
    match app.registrations().update(&id, input).await? {
        Some(_) => println!("✅ Registration updated."),
        None => println!("Registration '{}' was removed meanwhile, nothing changed.", id),
    }

    Ok(())
}

pub async fn registration_remove(app: &Igniter, id: &str, yes: bool) -> Result<(), CliError> {
    let id = RegistrationId::from(id);
    let Some(registration) = app.registrations().get(&id).await? else {
        println!("Registration '{}' not found, nothing to delete.", id);
        return Ok(());
    };

    if !yes
        && !confirm(&format!(
            "Delete registration for \"{}\"? This cannot be undone.",
            registration.name
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    app.registrations().delete(&id).await?;
    println!("🗑️  Registration deleted.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use igniter::TrainingInput;

    #[tokio::test]
    async fn test_edit_keeps_unspecified_fields() {
        let app = Igniter::in_memory().unwrap();
        let training = app
            .trainings()
            .create(TrainingInput::new("Fire Safety"))
            .await
            .unwrap();
        let created = app
            .registrations()
            .create(RegistrationInput {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                training_id: training.id.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let fields = RegistrationFields {
            email: Some("ada@lovelace.dev".to_string()),
            ..Default::default()
        };
        registration_edit(&app, created.id.as_str(), fields).await.unwrap();

        let edited = app.registrations().get(&created.id).await.unwrap().unwrap();
        assert_eq!(edited.email, "ada@lovelace.dev");
        assert_eq!(edited.phone, "555-0100");
        assert_eq!(edited.training_id, training.id);
        assert_eq!(edited.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_add_reports_validation_errors() {
        let app = Igniter::in_memory().unwrap();
        let fields = RegistrationFields {
            name: Some("Ada".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        let Err(CliError::Validation(errors)) = registration_add(&app, fields).await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_unknown_is_quiet() {
        let app = Igniter::in_memory().unwrap();
        registration_remove(&app, "nobody", true).await.unwrap();
    }
}
