//! Reference data lookup
//!
//! Options for choice fields, fetched once when a form opens.

use crate::api::{ApiRequest, RecordTransport, TransportError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CATEGORY_PATH: &str = "/category/all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    id: serde_json::Value,
    category: String,
}

impl From<CategoryDto> for ReferenceOption {
    fn from(dto: CategoryDto) -> Self {
        let id = match dto.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Self {
            id,
            label: dto.category,
        }
    }
}

#[derive(Debug, Error)]
enum LookupError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("server answered with status {0}")]
    Status(u16),
}

/// Category list backing the Product form's category choice.
pub struct CategoryLookup;

impl CategoryLookup {
    /// Fetch the category list. Any failure is logged and yields an empty
    /// list; nothing is retried.
    pub async fn fetch_options(transport: &dyn RecordTransport) -> Vec<ReferenceOption> {
        match Self::try_fetch(transport).await {
            Ok(options) => {
                tracing::debug!(count = options.len(), "fetched categories");
                options
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching categories");
                Vec::new()
            }
        }
    }

    async fn try_fetch(
        transport: &dyn RecordTransport,
    ) -> Result<Vec<ReferenceOption>, LookupError> {
        let resp = transport.send(ApiRequest::get(CATEGORY_PATH)).await?;
        if !resp.is_success() {
            return Err(LookupError::Status(resp.status));
        }
        let categories: Vec<CategoryDto> = resp.json()?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Choice values offered to the user: the placeholder entry followed by
    /// each option's label.
    pub fn choices<'a>(placeholder: &'a str, options: &'a [ReferenceOption]) -> Vec<&'a str> {
        std::iter::once(placeholder)
            .chain(options.iter().map(|o| o.label.as_str()))
            .collect()
    }
}
