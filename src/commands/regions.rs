//! Regions commands

use super::{apply_edits, submit, CommandResult, Context};
use crate::RegionCommands;
use record_forms::{RecordSchema, SubmitMode};

pub async fn handle(action: RegionCommands, ctx: &Context) -> CommandResult {
    match action {
        RegionCommands::Create { name, code } => {
            let form = ctx.open_form(RecordSchema::region(), None);
            apply_edits(&form, &[("regionName", Some(name)), ("regionCode", Some(code))]);
            submit(&form, SubmitMode::Create).await
        }
    }
}
