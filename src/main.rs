mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod form_actor;
mod store;
mod validation;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, AppConfig, FormSystem, SystemError};
use crate::domain::FormField;
use crate::form_actor::SubmitOutcome;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(data_dir = %config.data_dir.display(), "Starting feedback form");

    let system = FormSystem::start(&config)?;
    let client = system.client.clone();

    let span = tracing::info_span!("first_attempt");
    async {
        client.set_field(FormField::Name, "Alice".into()).await?;
        client.set_field(FormField::Email, "alice@example".into()).await?;
        if let SubmitOutcome::Rejected(errors) = client.submit().await? {
            for (field, message) in errors.iter() {
                warn!(%field, error = message, "Form has errors");
            }
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("corrected_submission");
    let outcome = async {
        client.set_field(FormField::Email, "alice@example.com".into()).await?;
        client.set_field(FormField::Password, "wonderland".into()).await?;
        client.set_field(FormField::Gender, "Female".into()).await?;
        client.set_field(FormField::Address, "12 Rabbit Hole".into()).await?;
        client.set_field(FormField::City, "Chicago".into()).await?;
        client.choose_rating(5).await?;
        client.set_field(FormField::Feedback, "Curiouser and curiouser".into()).await?;
        client.submit().await
    }
    .instrument(span)
    .await?;
    info!(accepted = outcome.is_accepted(), ?outcome, "Submission handled");

    let view = client.view().await?;
    for row in &view.rows {
        info!(
            index = row.index,
            name = %row.name,
            email = %row.email,
            city = row.city,
            rating = row.rating,
            "Submitted row"
        );
    }

    // Revise the new row, then remove it so repeated runs leave the slot as found
    if let SubmitOutcome::Appended { index } = outcome {
        let span = tracing::info_span!("revision", index);
        async {
            if client.start_edit(index).await? {
                client.choose_rating(4).await?;
                let outcome = client.submit().await?;
                info!(?outcome, "Revision handled");
            }
            if let Some(removed) = client.delete(index).await? {
                info!(name = %removed.name, "Demo row removed");
            }
            Ok::<_, SystemError>(())
        }
        .instrument(span)
        .await?;
    }

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
