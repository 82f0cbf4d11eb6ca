//! Record Forms - create/update submission pipeline
//!
//! One generic pipeline behind the Group, Product and Region forms.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      SUBMISSION CONTROLLER                       │
//! │                                                                  │
//! │  ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌─────────┐ │
//! │  │ FormState  │──▶│ Validator  │──▶│ Transport  │──▶│ Notify  │ │
//! │  │ (record)   │   │ (required) │   │ (POST/PUT) │   │ (sink)  │ │
//! │  └─────▲──────┘   └────────────┘   └────────────┘   └─────────┘ │
//! │        │                                                         │
//! │  ┌─────┴──────┐                                                  │
//! │  │  Lookup    │  GET /category/all (Product only)                │
//! │  └────────────┘                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod notify;
pub mod schema;
pub mod state;
pub mod validate;

pub use api::{ApiClient, ApiRequest, ApiResponse, RecordTransport, TransportError};
pub use controller::{FailureKind, SessionHooks, SubmissionController, SubmitError, SubmitMode};
pub use error::{FormsError, Result};
pub use lookup::{CategoryLookup, ReferenceOption};
pub use notify::{MemorySink, Notification, NotificationSink, TerminalSink, Tone};
pub use schema::{FieldKind, FieldSpec, RecordSchema};
pub use state::{FormRecord, FormState};
pub use validate::{ValidationResult, Validator};

/// Outcome of a single submit action: the server's confirmation text or the
/// classified failure.
pub type SubmissionOutcome = std::result::Result<String, SubmitError>;
