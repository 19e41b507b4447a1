use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::clients::FormClient;
use crate::domain::{FormField, Record};
use crate::form_actor::{FormController, FormError, FormView, SubmitOutcome};
use crate::store::Storage;

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FormError>>;

/// One user event for the form, with a channel for its reply.
#[derive(Debug)]
pub enum FormRequest {
    SetField {
        field: FormField,
        value: String,
        respond_to: Response<()>,
    },
    ChooseRating {
        score: u8,
        respond_to: Response<()>,
    },
    Submit {
        respond_to: Response<SubmitOutcome>,
    },
    StartEdit {
        index: usize,
        respond_to: Response<bool>,
    },
    Delete {
        index: usize,
        respond_to: Response<Option<Record>>,
    },
    CancelEdit {
        respond_to: Response<()>,
    },
    View {
        respond_to: Response<FormView>,
    },
    Shutdown,
}

// =============================================================================
// 2. THE ACTOR SERVER
// =============================================================================

/// Owns a [`FormController`] and feeds it one request at a time.
///
/// Each request runs to completion, including any storage write, before the
/// next one is received.
pub struct FormService<S> {
    receiver: mpsc::Receiver<FormRequest>,
    controller: FormController<S>,
}

impl<S: Storage> FormService<S> {
    pub fn new(buffer_size: usize, controller: FormController<S>) -> (Self, FormClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, controller };
        (service, FormClient::new(sender))
    }

    #[instrument(name = "form_service", skip(self))]
    pub async fn run(mut self) {
        info!(records = self.controller.records().len(), "FormService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::SetField { field, value, respond_to } => {
                    self.handle_set_field(field, &value, respond_to);
                }
                FormRequest::ChooseRating { score, respond_to } => {
                    let _ = respond_to.send(self.controller.choose_rating(score));
                }
                FormRequest::Submit { respond_to } => {
                    self.handle_submit(respond_to);
                }
                FormRequest::StartEdit { index, respond_to } => {
                    let _ = respond_to.send(Ok(self.controller.start_edit(index)));
                }
                FormRequest::Delete { index, respond_to } => {
                    self.handle_delete(index, respond_to);
                }
                FormRequest::CancelEdit { respond_to } => {
                    self.controller.cancel_edit();
                    let _ = respond_to.send(Ok(()));
                }
                FormRequest::View { respond_to } => {
                    let _ = respond_to.send(Ok(self.controller.view()));
                }
                FormRequest::Shutdown => {
                    info!("FormService shutting down");
                    break;
                }
            }
        }
        info!("FormService stopped");
    }

    /// Field values are not logged; the password arrives through here.
    #[instrument(skip(self, value, respond_to))]
    fn handle_set_field(&mut self, field: FormField, value: &str, respond_to: Response<()>) {
        let result = self.controller.set_field(field, value);
        if let Err(e) = &result {
            warn!(error = %e, "Field change rejected");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(mode = ?self.controller.mode()), skip(self, respond_to))]
    fn handle_submit(&mut self, respond_to: Response<SubmitOutcome>) {
        debug!("Processing submit request");
        let _ = respond_to.send(self.controller.submit());
    }

    #[instrument(skip(self, respond_to))]
    fn handle_delete(&mut self, index: usize, respond_to: Response<Option<Record>>) {
        debug!("Processing delete request");
        let _ = respond_to.send(self.controller.delete(index));
    }
}
