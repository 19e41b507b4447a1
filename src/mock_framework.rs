//! # Mock Framework
//!
//! Utilities for testing code that drives a [`FormClient`] without a running
//! service.
//!
//! Use [`create_mock_client`] to get a client and the receiver its requests
//! land on, then the `expect_*` helpers to assert each request and answer it.

use tokio::sync::mpsc;

use crate::actor_framework::{FormRequest, Response};
use crate::clients::FormClient;
use crate::domain::FormField;
use crate::form_actor::{FormView, SubmitOutcome};

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (FormClient, mpsc::Receiver<FormRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (FormClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SetField request
pub async fn expect_set_field(receiver: &mut mpsc::Receiver<FormRequest>) -> Option<(FormField, String, Response<()>)> {
    match receiver.recv().await {
        Some(FormRequest::SetField { field, value, respond_to }) => Some((field, value, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ChooseRating request
pub async fn expect_choose_rating(receiver: &mut mpsc::Receiver<FormRequest>) -> Option<(u8, Response<()>)> {
    match receiver.recv().await {
        Some(FormRequest::ChooseRating { score, respond_to }) => Some((score, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(receiver: &mut mpsc::Receiver<FormRequest>) -> Option<Response<SubmitOutcome>> {
    match receiver.recv().await {
        Some(FormRequest::Submit { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a View request
pub async fn expect_view(receiver: &mut mpsc::Receiver<FormRequest>) -> Option<Response<FormView>> {
    match receiver.recv().await {
        Some(FormRequest::View { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_actor::FormError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            client.set_field(FormField::Name, "Test".to_string()).await?;
            client.submit().await
        });

        let (field, value, responder) = expect_set_field(&mut receiver).await.expect("Expected SetField request");
        assert_eq!(field, FormField::Name);
        assert_eq!(value, "Test");
        responder.send(Ok(())).unwrap();

        let responder = expect_submit(&mut receiver).await.expect("Expected Submit request");
        responder.send(Ok(SubmitOutcome::Appended { index: 0 })).unwrap();

        let result: Result<SubmitOutcome, FormError> = task.await.unwrap();
        assert_eq!(result.unwrap(), SubmitOutcome::Appended { index: 0 });
    }

    #[tokio::test]
    async fn test_mock_view_reply_reaches_caller() {
        use crate::domain::Record;
        use crate::form_actor::EditMode;
        use crate::validation::ValidationErrors;

        let (client, mut receiver) = create_mock_client(10);
        let task = tokio::spawn(async move { client.view().await });

        let responder = expect_view(&mut receiver).await.expect("Expected View request");
        responder
            .send(Ok(FormView {
                draft: Record::default(),
                errors: ValidationErrors::default(),
                mode: EditMode::Editing(3),
                submit_label: "Update",
                rows: Vec::new(),
            }))
            .unwrap();

        let view = task.await.unwrap().unwrap();
        assert_eq!(view.mode, EditMode::Editing(3));
        assert_eq!(view.submit_label, "Update");
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);
        let task = tokio::spawn(async move { client.choose_rating(2).await });

        let (score, responder) = expect_choose_rating(&mut receiver).await.expect("Expected ChooseRating request");
        assert_eq!(score, 2);
        drop(responder);

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, FormError::ActorCommunicationError(_)));
    }
}
