//! Form State
//!
//! Field values for one form session plus the inline error line.

use crate::schema::RecordSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Field name to value mapping, keyed by the schema's declared fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<String, String>);

impl FormRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Per-session field values and the last error message.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: Arc<RecordSchema>,
    record: FormRecord,
    error: String,
}

impl FormState {
    /// Empty-string defaults for every declared field, overlaid with `seed`.
    ///
    /// The seed is usually an existing record as returned by the API, so
    /// numbers and booleans are accepted and rendered as strings. Keys not
    /// declared by the schema are dropped.
    pub fn initialize(schema: Arc<RecordSchema>, seed: Option<&serde_json::Value>) -> Self {
        let record = FormRecord(
            schema
                .field_names()
                .map(|name| {
                    let value = seed
                        .and_then(|s| s.get(name))
                        .map(seed_value)
                        .unwrap_or_default();
                    (name.to_string(), value)
                })
                .collect(),
        );

        Self {
            schema,
            record,
            error: String::new(),
        }
    }

    /// Replace one field; every other field is carried over unchanged.
    ///
    /// Returns the new record. Undeclared fields are ignored.
    pub fn update(&mut self, field: &str, value: impl Into<String>) -> &FormRecord {
        if self.schema.field(field).is_none() {
            tracing::warn!(field, schema = %self.schema.name, "ignoring undeclared field");
            return &self.record;
        }

        let mut next = self.record.0.clone();
        next.insert(field.to_string(), value.into());
        self.record = FormRecord(next);
        &self.record
    }

    /// Back to empty defaults, clearing the error line.
    pub fn reset(&mut self) {
        *self = Self::initialize(self.schema.clone(), None);
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Copy of the current record, used as the submitted payload.
    pub fn snapshot(&self) -> FormRecord {
        self.record.clone()
    }

    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}

fn seed_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn region() -> Arc<RecordSchema> {
        Arc::new(RecordSchema::region())
    }

    #[test]
    fn test_initialize_defaults() {
        let state = FormState::initialize(region(), None);
        assert_eq!(state.record().len(), 2);
        assert_eq!(state.record().get("regionName"), Some(""));
        assert_eq!(state.record().get("regionCode"), Some(""));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_initialize_from_seed() {
        let seed = json!({ "id": 42, "groupName": "Ops", "groupId": null });
        let state = FormState::initialize(Arc::new(RecordSchema::group()), Some(&seed));

        assert_eq!(state.record().get("groupName"), Some("Ops"));
        assert_eq!(state.record().get("groupId"), Some(""));
        assert_eq!(state.record().get("id"), None);
    }

    #[test]
    fn test_numeric_seed_rendered_as_string() {
        let seed = json!({ "price": 12.5 });
        let state = FormState::initialize(Arc::new(RecordSchema::product()), Some(&seed));
        assert_eq!(state.record().get("price"), Some("12.5"));
    }

    #[test]
    fn test_update_preserves_other_fields() {
        let mut state = FormState::initialize(region(), None);
        let before = state.snapshot();
        state.update("regionName", "North");

        assert_eq!(state.record().get("regionName"), Some("North"));
        assert_eq!(state.record().get("regionCode"), Some(""));
        assert_eq!(before.get("regionName"), Some(""));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut once = FormState::initialize(region(), None);
        once.update("regionCode", "R9");

        let mut twice = FormState::initialize(region(), None);
        twice.update("regionCode", "R9");
        twice.update("regionCode", "R9");

        assert_eq!(once.record(), twice.record());
    }

    #[test]
    fn test_undeclared_field_ignored() {
        let mut state = FormState::initialize(region(), None);
        state.update("extra", "x");
        assert_eq!(state.record().len(), 2);
        assert_eq!(state.record().get("extra"), None);
    }

    #[test]
    fn test_reset() {
        let mut state = FormState::initialize(region(), None);
        state.update("regionName", "North");
        state.set_error("All fields are required.");
        state.reset();

        assert_eq!(state.record(), FormState::initialize(region(), None).record());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_record_serializes_as_flat_object() {
        let mut state = FormState::initialize(Arc::new(RecordSchema::group()), None);
        state.update("groupName", "Ops");
        state.update("groupId", "G1");
        assert_eq!(state.record().to_json(), json!({ "groupName": "Ops", "groupId": "G1" }));
    }

    proptest! {
        #[test]
        fn prop_update_twice_same_as_once(
            prior in proptest::collection::vec(("regionName|regionCode", ".*"), 0..4),
            field in "regionName|regionCode",
            value in ".*",
        ) {
            let mut base = FormState::initialize(region(), None);
            for (f, v) in &prior {
                base.update(f, v.clone());
            }

            let mut once = base.clone();
            once.update(&field, value.clone());

            let mut twice = base;
            twice.update(&field, value.clone());
            twice.update(&field, value.clone());

            prop_assert_eq!(once.record(), twice.record());
            prop_assert_eq!(once.record().get(&field), Some(value.as_str()));
            prop_assert_eq!(once.record().len(), 2);
        }
    }
}
