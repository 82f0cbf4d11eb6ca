//! Products commands

use super::{apply_edits, submit, CommandResult, Context};
use crate::ProductCommands;
use colored::Colorize;
use record_forms::{CategoryLookup, RecordSchema, SubmitMode};

pub async fn handle(action: ProductCommands, ctx: &Context) -> CommandResult {
    match action {
        ProductCommands::Create { description, price, unit, category } => {
            let options = CategoryLookup::fetch_options(ctx.client.as_ref()).await;
            if !options.is_empty() && !options.iter().any(|o| o.label == category) {
                tracing::warn!(%category, "category is not in the fetched list");
            }

            let schema = RecordSchema::product();
            let placeholder = schema
                .field("category")
                .map(|f| f.placeholder.clone())
                .unwrap_or_default();
            let form = ctx.open_form(schema, None);
            apply_edits(
                &form,
                &[
                    ("productDescription", Some(description)),
                    ("price", Some(price)),
                    ("unit", Some(unit)),
                    ("category", Some(category)),
                ],
            );

            let result = submit(&form, SubmitMode::Create).await;
            if result.is_err() && form.record().get("category").is_some_and(|c| c.trim().is_empty()) {
                eprintln!("{}", "Available categories:".bold());
                for choice in CategoryLookup::choices(&placeholder, &options).iter().skip(1) {
                    eprintln!("  {}", choice);
                }
            }
            result
        }
    }
}

