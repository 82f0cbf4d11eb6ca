//! CLI Commands

pub mod categories;
pub mod config;
pub mod groups;
pub mod products;
pub mod regions;

use crate::output::OutputFormat;
use record_forms::{
    ApiClient, RecordSchema, SessionHooks, SubmissionController, SubmitMode, TerminalSink,
};
use std::path::Path;
use std::sync::Arc;

pub type CommandResult = Result<(), String>;

/// Shared state handed to every command.
pub struct Context {
    pub client: Arc<ApiClient>,
    pub format: OutputFormat,
}

impl Context {
    /// Open a form session owned by this CLI invocation.
    pub fn open_form(&self, schema: RecordSchema, seed: Option<&serde_json::Value>) -> SubmissionController {
        let hooks = owner_hooks(&schema.name);
        SubmissionController::seeded(schema, seed, self.client.clone(), Arc::new(TerminalSink), hooks)
    }
}

fn owner_hooks(record: &str) -> SessionHooks {
    let closed = record.to_string();
    let refreshed = record.to_string();
    SessionHooks::new(move || tracing::info!(record = %closed, "form closed"))
        .on_success(move || tracing::info!(record = %refreshed, "record list refresh requested"))
}

/// Apply `(field, value)` edits in order, skipping unset ones.
pub fn apply_edits(form: &SubmissionController, edits: &[(&str, Option<String>)]) {
    for (field, value) in edits {
        if let Some(value) = value {
            form.update(field, value.clone());
        }
    }
}

pub async fn submit(form: &SubmissionController, mode: SubmitMode) -> CommandResult {
    match form.submit(mode).await {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("{} not saved: {}", form.schema().name, e)),
    }
}

/// Existing record used to seed an update form.
pub fn read_seed(path: &Path) -> Result<serde_json::Value, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let seed: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("invalid record in {}: {}", path.display(), e))?;
    if !seed.is_object() {
        return Err(format!("record in {} must be a JSON object", path.display()));
    }
    Ok(seed)
}
