use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::actor_framework::FormRequest;
use crate::domain::{FormField, Record};
use crate::form_actor::{FormError, FormView, SubmitOutcome};

/// Handle to a running [`FormService`](crate::actor_framework::FormService).
///
/// Cheap to clone; the service stops once every handle is dropped.
#[derive(Clone)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), FormError> {
        debug!("Sending request");
        self.sender
            .send(FormRequest::Shutdown)
            .await
            .map_err(|_| FormError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(FormClient => fn set_field(field: FormField, value: String) -> () as FormRequest::SetField, skip(value));
client_method!(FormClient => fn choose_rating(score: u8) -> () as FormRequest::ChooseRating);
client_method!(FormClient => fn submit() -> SubmitOutcome as FormRequest::Submit);
client_method!(FormClient => fn start_edit(index: usize) -> bool as FormRequest::StartEdit);
client_method!(FormClient => fn delete(index: usize) -> Option<Record> as FormRequest::Delete);
client_method!(FormClient => fn cancel_edit() -> () as FormRequest::CancelEdit);
client_method!(FormClient => fn view() -> FormView as FormRequest::View);
