//! Record Schemas
//!
//! A schema describes one record type: its required fields in declared
//! order, how each field is checked, and where records are sent.

use serde::{Deserialize, Serialize};

/// How a field value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text, must be non-blank
    Text,
    /// Must be non-blank and parse as a finite number
    Numeric,
    /// Picked from reference data, checked like text
    Choice,
}

/// Declared field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: format!("Enter {}", label.to_lowercase()),
            kind,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Field schema and endpoint template for one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Display name ("Group", "Product", ...)
    pub name: String,
    /// Collection path, e.g. `/group`
    pub resource: String,
    /// Required fields in declared order
    pub fields: Vec<FieldSpec>,
    /// Shown when the server confirms without a body
    pub success_message: String,
    /// Shown when a failure carries no detail
    pub fallback_message: String,
}

impl RecordSchema {
    pub fn new(name: &str, resource: &str, fields: Vec<FieldSpec>) -> Self {
        let resource = format!("/{}", resource.trim_matches('/'));
        Self {
            name: name.into(),
            resource,
            fields,
            success_message: format!("{} saved successfully!", name),
            fallback_message: "An error occurred while submitting. Please try again.".into(),
        }
    }

    pub fn with_success_message(mut self, message: &str) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_fallback_message(mut self, message: &str) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Path for `POST` on creation
    pub fn create_path(&self) -> String {
        self.resource.clone()
    }

    /// Path for `PUT` on update of `id`
    pub fn update_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource, id)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Group: name and external id, edited through `PUT /group/{id}`.
    pub fn group() -> Self {
        Self::new(
            "Group",
            "group",
            vec![
                FieldSpec::new("groupName", "Group Name", FieldKind::Text),
                FieldSpec::new("groupId", "Group Id", FieldKind::Text),
            ],
        )
        .with_success_message("Group updated successfully!")
        .with_fallback_message("An error occurred while updating the group. Please try again.")
    }

    /// Product: description, price, unit and a category from `/category/all`.
    pub fn product() -> Self {
        Self::new(
            "Product",
            "product",
            vec![
                FieldSpec::new("productDescription", "Product Description", FieldKind::Text),
                FieldSpec::new("price", "Price", FieldKind::Numeric),
                FieldSpec::new("unit", "Unit", FieldKind::Text),
                FieldSpec::new("category", "Category", FieldKind::Choice)
                    .with_placeholder("Select category"),
            ],
        )
        .with_success_message("Product registered successfully!")
        .with_fallback_message(
            "An error occurred while registering the product. Please try again.",
        )
    }

    pub fn region() -> Self {
        Self::new(
            "Region",
            "region",
            vec![
                FieldSpec::new("regionName", "Region Name", FieldKind::Text),
                FieldSpec::new("regionCode", "Region Code", FieldKind::Text),
            ],
        )
        .with_success_message("Region registered successfully!")
        .with_fallback_message("An error occurred while registering. Please try again.")
    }
}
