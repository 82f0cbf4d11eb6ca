//! Submission Controller
//!
//! Drives one form session: validate the current record, dispatch a single
//! create/update request, classify the result, notify, then close and reset
//! on success.

use crate::api::{ApiRequest, ApiResponse, RecordTransport, TransportError};
use crate::notify::{Notification, NotificationSink};
use crate::schema::RecordSchema;
use crate::state::{FormRecord, FormState};
use crate::validate::{Validator, REQUIRED_MESSAGE};
use crate::SubmissionOutcome;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub const IN_FLIGHT_MESSAGE: &str = "A submission is already in progress.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    /// `POST /<resource>`
    Create,
    /// `PUT /<resource>/<target_id>`
    Update { target_id: String },
}

impl SubmitMode {
    pub fn update(target_id: impl Into<String>) -> Self {
        SubmitMode::Update {
            target_id: target_id.into(),
        }
    }

    fn titles(&self) -> Titles {
        match self {
            SubmitMode::Create => Titles {
                invalid: "Validation Error",
                success: "Success",
                failure: "Error",
            },
            SubmitMode::Update { .. } => Titles {
                invalid: "Update Error",
                success: "Update Successful",
                failure: "Update Failed",
            },
        }
    }
}

struct Titles {
    invalid: &'static str,
    success: &'static str,
    failure: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ValidationError,
    ServerRejected,
    TransportError,
    AlreadyInFlight,
}

/// Why a submission did not succeed. Terminal at the UI boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),

    #[error("a submission is already in progress")]
    AlreadyInFlight,

    #[error("rejected with status {status}: {detail}")]
    ServerRejected { status: u16, detail: String },

    #[error("transport error: {detail}")]
    Transport { detail: String },
}

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SubmitError::Validation(_) => FailureKind::ValidationError,
            SubmitError::AlreadyInFlight => FailureKind::AlreadyInFlight,
            SubmitError::ServerRejected { .. } => FailureKind::ServerRejected,
            SubmitError::Transport { .. } => FailureKind::TransportError,
        }
    }

    /// Text shown to the user.
    pub fn detail(&self) -> &str {
        match self {
            SubmitError::Validation(message) => message,
            SubmitError::AlreadyInFlight => IN_FLIGHT_MESSAGE,
            SubmitError::ServerRejected { detail, .. } | SubmitError::Transport { detail } => {
                detail
            }
        }
    }
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// Owner callbacks, run only after a successful submission.
pub struct SessionHooks {
    on_close: Hook,
    on_success: Option<Hook>,
}

impl SessionHooks {
    pub fn new(on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_close: Box::new(on_close),
            on_success: None,
        }
    }

    /// Called after `on_close` so the owner can refresh its list.
    pub fn on_success(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    fn fire(&self) {
        (self.on_close)();
        if let Some(on_success) = &self.on_success {
            on_success();
        }
    }
}

impl Default for SessionHooks {
    fn default() -> Self {
        Self::new(|| {})
    }
}

/// Releases the in-flight flag when dropped, whichever way submit exits.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One form session for one record type.
pub struct SubmissionController {
    schema: Arc<RecordSchema>,
    state: Mutex<FormState>,
    transport: Arc<dyn RecordTransport>,
    sink: Arc<dyn NotificationSink>,
    hooks: SessionHooks,
    in_flight: AtomicBool,
}

impl SubmissionController {
    /// Session with an empty record (creation forms).
    pub fn new(
        schema: RecordSchema,
        transport: Arc<dyn RecordTransport>,
        sink: Arc<dyn NotificationSink>,
        hooks: SessionHooks,
    ) -> Self {
        Self::seeded(schema, None, transport, sink, hooks)
    }

    /// Session seeded from an existing record (update forms).
    pub fn seeded(
        schema: RecordSchema,
        seed: Option<&serde_json::Value>,
        transport: Arc<dyn RecordTransport>,
        sink: Arc<dyn NotificationSink>,
        hooks: SessionHooks,
    ) -> Self {
        let schema = Arc::new(schema);
        Self {
            state: Mutex::new(FormState::initialize(schema.clone(), seed)),
            schema,
            transport,
            sink,
            hooks,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Apply one field edit.
    pub fn update(&self, field: &str, value: impl Into<String>) {
        self.state.lock().update(field, value);
    }

    pub fn record(&self) -> FormRecord {
        self.state.lock().snapshot()
    }

    /// Inline error line, if any.
    pub fn error(&self) -> Option<String> {
        self.state.lock().error().map(String::from)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, mode: SubmitMode) -> SubmissionOutcome {
        let titles = mode.titles();

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!(schema = %self.schema.name, "submit ignored, request pending");
            return Err(self.fail(titles.failure, SubmitError::AlreadyInFlight));
        };

        // Payload and validation share one snapshot; later edits don't leak in.
        let record = self.state.lock().snapshot();

        let check = Validator::validate(&self.schema, &record);
        if !check.valid {
            let message = check.message.unwrap_or_else(|| REQUIRED_MESSAGE.into());
            return Err(self.fail(titles.invalid, SubmitError::Validation(message)));
        }
        self.state.lock().clear_error();

        let request = match &mode {
            SubmitMode::Create => ApiRequest::post(self.schema.create_path(), record.to_json()),
            SubmitMode::Update { target_id } => {
                ApiRequest::put(self.schema.update_path(target_id), record.to_json())
            }
        };
        tracing::debug!(schema = %self.schema.name, method = %request.method, path = %request.path, "dispatching");

        match self.classify(self.transport.send(request).await) {
            Ok(text) => {
                tracing::info!(schema = %self.schema.name, "submission accepted");
                self.sink.notify(&Notification::success(titles.success, text.clone()));
                if mode == SubmitMode::Create {
                    self.state.lock().reset();
                }
                self.hooks.fire();
                Ok(text)
            }
            Err(e) => Err(self.fail(titles.failure, e)),
        }
    }

    fn classify(
        &self,
        result: Result<ApiResponse, TransportError>,
    ) -> Result<String, SubmitError> {
        match result {
            Ok(resp) if resp.is_success() => Ok(resp
                .message()
                .unwrap_or_else(|| self.schema.success_message.clone())),
            Ok(resp) => {
                let detail = resp
                    .message()
                    .unwrap_or_else(|| self.schema.fallback_message.clone());
                tracing::warn!(schema = %self.schema.name, status = resp.status, %detail, "submission rejected");
                Err(SubmitError::ServerRejected {
                    status: resp.status,
                    detail,
                })
            }
            Err(e) => {
                tracing::warn!(schema = %self.schema.name, error = %e, "submission failed");
                Err(SubmitError::Transport {
                    detail: self.schema.fallback_message.clone(),
                })
            }
        }
    }

    /// Record the error line and raise an error notification.
    fn fail(&self, title: &str, error: SubmitError) -> SubmitError {
        if error.kind() != FailureKind::AlreadyInFlight {
            self.state.lock().set_error(error.detail());
        }
        self.sink.notify(&Notification::error(title, error.detail()));
        error
    }
}
