//! Groups commands

use super::{apply_edits, read_seed, submit, CommandResult, Context};
use crate::GroupCommands;
use record_forms::{RecordSchema, SubmitMode};

pub async fn handle(action: GroupCommands, ctx: &Context) -> CommandResult {
    match action {
        GroupCommands::Update { id, from, group_name, group_id } => {
            let seed = from.as_deref().map(read_seed).transpose()?;
            let form = ctx.open_form(RecordSchema::group(), seed.as_ref());
            apply_edits(&form, &[("groupName", group_name), ("groupId", group_id)]);
            submit(&form, SubmitMode::update(id)).await
        }
    }
}
